//! Pursuit strategies.
//!
//! # Pluggability
//!
//! [`Predator`][crate::Predator] asks its strategy for a desired velocity
//! through the [`PursuitStrategy`] trait.  The built-in strategies are
//! collected in the [`Strategy`] enum so each predator carries its own tag and
//! predators with different strategies can share one simulation.

use flock_core::{EPSILON, StrategyKind, Vec2};

/// Chooses where a predator wants to go this tick.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; they hold only tuning data.
pub trait PursuitStrategy: Send + Sync {
    /// Desired velocity (magnitude `cruise_speed`) given the predator's
    /// position and the full flock snapshot, or `None` to hold this tick.
    fn desired_velocity(&self, position: Vec2, flock: &[Vec2], cruise_speed: f32) -> Option<Vec2>;
}

// ── SectorVoting ──────────────────────────────────────────────────────────────

/// Bucket nearby boids into eight 45° sectors by bearing, weight each by
/// inverse-square distance, and head for the heaviest sector.
///
/// Bearings are measured with `atan2(dx, dy)`: sector 0 is centered on the
/// `+y` axis and indices increase toward `+x`.  Sector `k` points along
/// `(sin(k·45°), cos(k·45°))`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorVoting {
    /// Boids farther than this are ignored.
    pub influence_range: f32,
}

impl SectorVoting {
    pub const SECTOR_COUNT: usize = 8;

    pub fn new(influence_range: f32) -> Self {
        Self { influence_range }
    }

    /// Sector index `0..8` for an offset from the predator.
    #[inline]
    pub fn sector_of(offset: Vec2) -> usize {
        let deg = offset.x.atan2(offset.y).to_degrees().rem_euclid(360.0);
        (((deg + 22.5) % 360.0) / 45.0) as usize % Self::SECTOR_COUNT
    }

    /// Unit vector through the middle of sector `k`.
    pub fn sector_direction(k: usize) -> Vec2 {
        let rad = (k % Self::SECTOR_COUNT) as f32 * std::f32::consts::FRAC_PI_4;
        Vec2::new(rad.sin(), rad.cos())
    }

    /// Accumulated `1 / (d² + ε)` per sector.  Boids at distance zero or
    /// beyond `influence_range` contribute nothing.
    pub fn sector_weights(&self, position: Vec2, flock: &[Vec2]) -> [f32; 8] {
        let mut weights = [0.0_f32; Self::SECTOR_COUNT];
        for &boid in flock {
            let offset = boid - position;
            let d = offset.length();
            if d == 0.0 || d > self.influence_range {
                continue;
            }
            weights[Self::sector_of(offset)] += 1.0 / (d * d + EPSILON);
        }
        weights
    }

    /// Heaviest sector; the lowest index wins ties.  `None` when every sector
    /// is empty.
    pub fn choose_sector(weights: &[f32; 8]) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (k, &w) in weights.iter().enumerate() {
            if w > 0.0 && best.is_none_or(|(_, bw)| w > bw) {
                best = Some((k, w));
            }
        }
        best.map(|(k, _)| k)
    }
}

impl PursuitStrategy for SectorVoting {
    fn desired_velocity(&self, position: Vec2, flock: &[Vec2], cruise_speed: f32) -> Option<Vec2> {
        let weights = self.sector_weights(position, flock);
        Self::choose_sector(&weights).map(|k| Self::sector_direction(k) * cruise_speed)
    }
}

// ── NearestPursuit ────────────────────────────────────────────────────────────

/// Head straight for the closest boid, if it is within chase distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestPursuit {
    pub chase_distance: f32,
}

impl NearestPursuit {
    pub fn new(chase_distance: f32) -> Self {
        Self { chase_distance }
    }

    /// Index and distance of the closest boid.  The first of equally close
    /// boids wins.
    pub fn nearest(position: Vec2, flock: &[Vec2]) -> Option<(usize, f32)> {
        flock
            .iter()
            .enumerate()
            .map(|(i, &boid)| (i, boid.distance(position)))
            .fold(None, |best, (i, d)| match best {
                Some((_, bd)) if bd <= d => best,
                _ => Some((i, d)),
            })
    }
}

impl PursuitStrategy for NearestPursuit {
    fn desired_velocity(&self, position: Vec2, flock: &[Vec2], cruise_speed: f32) -> Option<Vec2> {
        let (target, d) = Self::nearest(position, flock)?;
        if d > self.chase_distance {
            return None;
        }
        Some((flock[target] - position).normalize_or_zero() * cruise_speed)
    }
}

// ── Strategy tag ──────────────────────────────────────────────────────────────

/// Per-predator strategy tag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Strategy {
    SectorVoting(SectorVoting),
    NearestPursuit(NearestPursuit),
}

impl Strategy {
    /// Build the strategy for `kind`; `range` is the influence range or the
    /// chase distance.
    pub fn from_kind(kind: StrategyKind, range: f32) -> Self {
        match kind {
            StrategyKind::SectorVoting   => Strategy::SectorVoting(SectorVoting::new(range)),
            StrategyKind::NearestPursuit => Strategy::NearestPursuit(NearestPursuit::new(range)),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::SectorVoting(_)   => StrategyKind::SectorVoting,
            Strategy::NearestPursuit(_) => StrategyKind::NearestPursuit,
        }
    }
}

impl PursuitStrategy for Strategy {
    #[inline]
    fn desired_velocity(&self, position: Vec2, flock: &[Vec2], cruise_speed: f32) -> Option<Vec2> {
        match self {
            Strategy::SectorVoting(s)   => s.desired_velocity(position, flock, cruise_speed),
            Strategy::NearestPursuit(s) => s.desired_velocity(position, flock, cruise_speed),
        }
    }
}
