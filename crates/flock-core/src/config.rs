//! Construction-time configuration.
//!
//! Every tuning constant of the engine lives in one immutable [`FlockConfig`]
//! handed to `flock_sim::SimBuilder`.  Nothing here is runtime-mutable: a
//! running simulation never re-reads its config.
//!
//! Two presets are provided:
//!
//! | Preset                        | Boundary          | Predators                           |
//! |-------------------------------|-------------------|-------------------------------------|
//! | [`FlockConfig::default`]      | toroidal wrap     | one sector-voting hawk at center    |
//! | [`FlockConfig::contained`]    | circular contain  | one sector-voting + one nearest     |
//!
//! With the `serde` feature every struct is `#[serde(default)]`, so a JSON
//! file only needs the fields it overrides.

use glam::Vec2;

use crate::{FlockError, FlockResult};

// ── Rule tuning ───────────────────────────────────────────────────────────────

/// Radii, weights, and speed limits for the per-boid steering rules.
///
/// All radii are compared with a strict `<`, so a radius of `0.0` disables
/// its rule entirely.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleConfig {
    pub cohesion_radius:   f32,
    pub alignment_radius:  f32,
    pub separation_radius: f32,

    pub cohesion_weight:   f32,
    pub alignment_weight:  f32,
    pub separation_weight: f32,

    /// Boids closer than this to a predator are pushed away from it.
    pub predator_radius:   f32,
    pub predator_weight:   f32,

    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            cohesion_radius:   10.0,
            alignment_radius:  10.0,
            separation_radius: 5.0,
            cohesion_weight:   0.02,
            alignment_weight:  0.02,
            separation_weight: 0.05,
            predator_radius:   10.0,
            predator_weight:   1.5,
            min_speed:         0.5,
            max_speed:         2.0,
        }
    }
}

impl RuleConfig {
    /// The largest radius that needs a spatial-index lookup.  The index cell
    /// size must be at least this large.
    #[inline]
    pub fn interaction_radius(&self) -> f32 {
        self.cohesion_radius
            .max(self.alignment_radius)
            .max(self.separation_radius)
    }
}

// ── Boundary ──────────────────────────────────────────────────────────────────

/// How boids are kept inside the domain.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum BoundaryConfig {
    /// Toroidal domain with a soft linear push away from each edge.
    Wrap {
        repel_radius: f32,
        weight:       f32,
    },
    /// Soft circular containment around the domain center.  No hard
    /// transform is applied after integration.
    CircularContain {
        /// Circle radius.  `None` uses half the smaller domain side.
        radius: Option<f32>,
        /// Width of the band inside the circle where the push ramps up.
        buffer: f32,
        weight: f32,
    },
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        BoundaryConfig::Wrap { repel_radius: 10.0, weight: 0.2 }
    }
}

impl BoundaryConfig {
    /// Circle radius for `CircularContain`, resolved against the domain.
    /// Returns `None` for `Wrap`.
    pub fn circle_radius(&self, width: f32, height: f32) -> Option<f32> {
        match self {
            BoundaryConfig::Wrap { .. } => None,
            BoundaryConfig::CircularContain { radius, .. } => {
                Some(radius.unwrap_or(0.5 * width.min(height)))
            }
        }
    }
}

// ── Predators ─────────────────────────────────────────────────────────────────

/// Which pursuit strategy a predator runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrategyKind {
    /// Chase the angular sector with the most inverse-square weight.
    #[default]
    SectorVoting,
    /// Chase the single nearest boid.
    NearestPursuit,
}

/// Where a predator starts.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Placement {
    /// Domain center.
    #[default]
    Center,
    /// Uniformly random over the domain (drawn from the simulation RNG).
    Random,
    /// A fixed point; must lie inside the domain.
    At { x: f32, y: f32 },
}

impl Placement {
    /// Resolve a non-random placement.  `Random` returns `None`; the caller
    /// draws it from its RNG so draw order stays under its control.
    pub fn fixed_point(self, width: f32, height: f32) -> Option<Vec2> {
        match self {
            Placement::Center    => Some(Vec2::new(0.5 * width, 0.5 * height)),
            Placement::Random    => None,
            Placement::At { x, y } => Some(Vec2::new(x, y)),
        }
    }
}

/// One predator's parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PredatorConfig {
    pub strategy: StrategyKind,

    /// Magnitude of the desired velocity the predator steers toward.
    pub cruise_speed: f32,

    /// Exponential smoothing factor `α` in `[0, 1]`: each tick
    /// `vel = (1 − α)·vel + α·desired`.  Lower is smoother.
    pub smoothing: f32,

    /// Influence range for sector voting, chase distance for nearest pursuit.
    pub range: f32,

    pub placement: Placement,

    /// Starting velocity.  `None` draws each axis from `[-1, 1)`.
    pub initial_velocity: Option<Vec2>,
}

impl Default for PredatorConfig {
    fn default() -> Self {
        Self {
            strategy:         StrategyKind::SectorVoting,
            cruise_speed:     1.0,
            smoothing:        0.15,
            range:            200.0,
            placement:        Placement::Center,
            initial_velocity: None,
        }
    }
}

impl PredatorConfig {
    /// Default parameters with a different strategy.
    pub fn with_strategy(strategy: StrategyKind) -> Self {
        Self { strategy, ..Self::default() }
    }
}

// ── FlockConfig ───────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built in code from a preset, or loaded from JSON by the driver
/// (with the `serde` feature), then passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockConfig {
    /// Domain width in simulation units.
    pub width:  f32,
    /// Domain height in simulation units.
    pub height: f32,

    /// Number of boids.  Fixed for the run.
    pub agent_count: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Initial boid velocities are uniform in `[-initial_speed, initial_speed)`
    /// on each axis.
    pub initial_speed: f32,

    /// Spatial index cell size.  `None` uses [`RuleConfig::interaction_radius`].
    pub cell_size: Option<f32>,

    pub rules:     RuleConfig,
    pub boundary:  BoundaryConfig,
    pub predators: Vec<PredatorConfig>,
}

impl Default for FlockConfig {
    /// The terminal-toy tuning: 200 boids on an 80×24-character braille
    /// screen, toroidal wrap, one sector-voting hawk at the center.
    fn default() -> Self {
        Self {
            width:         158.0,
            height:        96.0,
            agent_count:   200,
            seed:          0,
            initial_speed: 2.0,
            cell_size:     None,
            rules:         RuleConfig::default(),
            boundary:      BoundaryConfig::default(),
            predators:     vec![PredatorConfig::default()],
        }
    }
}

impl FlockConfig {
    /// The soft-edged variant: circular containment and one predator of each
    /// strategy.  The nearest-pursuit predator starts at a random point and
    /// chases over a shorter range.
    pub fn contained() -> Self {
        Self {
            rules: RuleConfig {
                cohesion_weight:   0.01,
                alignment_weight:  0.05,
                separation_weight: 0.08,
                predator_radius:   15.0,
                predator_weight:   1.0,
                ..RuleConfig::default()
            },
            boundary: BoundaryConfig::CircularContain {
                radius: None,
                buffer: 12.0,
                weight: 0.4,
            },
            predators: vec![
                PredatorConfig::default(),
                PredatorConfig {
                    strategy:     StrategyKind::NearestPursuit,
                    cruise_speed: 1.2,
                    smoothing:    0.1,
                    range:        60.0,
                    placement:    Placement::Random,
                    ..PredatorConfig::default()
                },
            ],
            ..Self::default()
        }
    }

    /// Same config with a different domain size (e.g. the terminal's).
    pub fn with_domain(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Effective spatial-index cell size.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size.unwrap_or_else(|| self.rules.interaction_radius())
    }

    /// Check every construction-time invariant.
    ///
    /// A config that passes can be ticked forever without producing `NaN`
    /// from configuration alone.
    pub fn validate(&self) -> FlockResult<()> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(config_err(format!(
                "domain must have positive width and height, got {}×{}",
                self.width, self.height
            )));
        }
        if self.agent_count == 0 {
            return Err(config_err("agent count must be greater than 0"));
        }
        non_negative("initial_speed", self.initial_speed)?;

        let r = &self.rules;
        for (name, v) in [
            ("cohesion_radius",   r.cohesion_radius),
            ("alignment_radius",  r.alignment_radius),
            ("separation_radius", r.separation_radius),
            ("cohesion_weight",   r.cohesion_weight),
            ("alignment_weight",  r.alignment_weight),
            ("separation_weight", r.separation_weight),
            ("predator_radius",   r.predator_radius),
            ("predator_weight",   r.predator_weight),
            ("min_speed",         r.min_speed),
        ] {
            non_negative(name, v)?;
        }
        if !(r.max_speed.is_finite() && r.max_speed > 0.0) {
            return Err(config_err(format!("max_speed must be positive, got {}", r.max_speed)));
        }
        if r.min_speed > r.max_speed {
            return Err(config_err(format!(
                "min_speed {} exceeds max_speed {}",
                r.min_speed, r.max_speed
            )));
        }

        let cell = self.cell_size();
        if !(cell.is_finite() && cell > 0.0) {
            return Err(config_err(format!("cell size must be positive, got {cell}")));
        }
        if cell < r.interaction_radius() {
            return Err(config_err(format!(
                "cell size {cell} is smaller than the largest rule radius {}",
                r.interaction_radius()
            )));
        }

        match &self.boundary {
            BoundaryConfig::Wrap { repel_radius, weight } => {
                non_negative("wall repel_radius", *repel_radius)?;
                non_negative("wall weight", *weight)?;
            }
            BoundaryConfig::CircularContain { buffer, weight, .. } => {
                let radius = self.boundary.circle_radius(self.width, self.height).unwrap_or(0.0);
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(config_err(format!("circle radius must be positive, got {radius}")));
                }
                if !(buffer.is_finite() && *buffer > 0.0) || *buffer > radius {
                    return Err(config_err(format!(
                        "circle buffer must be in (0, {radius}], got {buffer}"
                    )));
                }
                non_negative("wall weight", *weight)?;
            }
        }

        for (i, p) in self.predators.iter().enumerate() {
            if !(0.0..=1.0).contains(&p.smoothing) {
                return Err(config_err(format!(
                    "predator {i}: smoothing must be in [0, 1], got {}",
                    p.smoothing
                )));
            }
            non_negative("predator cruise_speed", p.cruise_speed)?;
            non_negative("predator range", p.range)?;
            if let Some(v) = p.initial_velocity {
                if !v.is_finite() {
                    return Err(config_err(format!("predator {i}: initial velocity is not finite")));
                }
            }
            if let Placement::At { x, y } = p.placement {
                if !(0.0..=self.width).contains(&x) || !(0.0..=self.height).contains(&y) {
                    return Err(config_err(format!(
                        "predator {i}: placement ({x}, {y}) is outside the {}×{} domain",
                        self.width, self.height
                    )));
                }
            }
        }

        Ok(())
    }
}

fn config_err(msg: impl Into<String>) -> FlockError {
    FlockError::Config(msg.into())
}

fn non_negative(name: &str, v: f32) -> FlockResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(config_err(format!("{name} must be finite and non-negative, got {v}")))
    }
}
