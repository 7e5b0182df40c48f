//! Fluent builder for constructing a [`Simulation`].

use flock_agent::FlockStateBuilder;
use flock_core::{FlockConfig, SimRng, Tick, Vec2};
use flock_predator::Predator;
use flock_spatial::SpatialIndex;
use flock_steering::{BoundaryPolicy, SteeringRules};

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`FlockConfig`]: domain, agent count, seed, rules, boundary, predators.
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                            |
/// |-------------------|----------------------------------------------------|
/// | `.positions(v)`   | Uniform over `[0, width) × [0, height)`            |
/// | `.velocities(v)`  | Uniform in `[-initial_speed, initial_speed)` per axis |
///
/// # Random draws
///
/// One `SimRng` seeded from `config.seed` is consumed in a fixed order: boid
/// positions, then boid velocities, then for each predator in list order its
/// random placement (if any) and its random velocity (if any).  Explicit
/// inputs consume nothing, so the same seed and inputs always produce the
/// same simulation.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(FlockConfig::contained())
///     .positions(start_positions)
///     .build()?;
/// sim.run_ticks(100, &mut NoopRenderer);
/// ```
pub struct SimBuilder {
    config:     FlockConfig,
    positions:  Option<Vec<Vec2>>,
    velocities: Option<Vec<Vec2>>,
}

impl SimBuilder {
    pub fn new(config: FlockConfig) -> Self {
        Self { config, positions: None, velocities: None }
    }

    /// Supply starting positions (must be length `agent_count`).
    pub fn positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply starting velocities (must be length `agent_count`).
    pub fn velocities(mut self, velocities: Vec<Vec2>) -> Self {
        self.velocities = Some(velocities);
        self
    }

    /// Validate the configuration, seed the flock, place the predators, and
    /// return a ready-to-tick [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        let config = self.config;
        config.validate()?;

        let n = config.agent_count;
        let (width, height) = (config.width, config.height);

        // ── Flock ─────────────────────────────────────────────────────────
        let mut rng = SimRng::new(config.seed);
        let mut flock = FlockStateBuilder::new(n, width, height).initial_speed(config.initial_speed);
        if let Some(p) = self.positions {
            check_len("initial positions", n, p.len())?;
            flock = flock.positions(p);
        }
        if let Some(v) = self.velocities {
            check_len("initial velocities", n, v.len())?;
            flock = flock.velocities(v);
        }
        let flock = flock.build(&mut rng)?;

        // ── Rules and boundary ────────────────────────────────────────────
        let rules = SteeringRules::from_config(&config.rules);
        let boundary = BoundaryPolicy::from_config(&config.boundary, width, height);

        // ── Predators ─────────────────────────────────────────────────────
        let predators = config
            .predators
            .iter()
            .map(|cfg| {
                let position = cfg
                    .placement
                    .fixed_point(width, height)
                    .unwrap_or_else(|| rng.point_in(width, height));
                let velocity = cfg.initial_velocity.unwrap_or_else(|| rng.symmetric_vec(1.0));
                Predator::from_config(cfg, position, velocity)
            })
            .collect::<Vec<_>>();

        let index = SpatialIndex::build(&flock.positions, config.cell_size());

        log::info!(
            "flock ready: {} boids on {width}×{height}, {} boundary, {} predator(s), cell size {}, seed {}",
            flock.len(),
            boundary.name(),
            predators.len(),
            config.cell_size(),
            config.seed,
        );

        Ok(Simulation {
            next_velocities:     Vec::with_capacity(n),
            predator_positions:  Vec::with_capacity(predators.len()),
            tick:                Tick::ZERO,
            config,
            flock,
            predators,
            rules,
            boundary,
            index,
        })
    }
}

fn check_len(what: &'static str, expected: usize, got: usize) -> SimResult<()> {
    if got == expected {
        Ok(())
    } else {
        Err(SimError::AgentCountMismatch { expected, got, what })
    }
}
