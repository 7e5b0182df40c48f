//! The `Simulation` struct and its tick loop.

use flock_agent::FlockState;
use flock_core::{FlockConfig, PredatorId, Tick, Vec2};
use flock_predator::{Predator, PredatorView};
use flock_spatial::SpatialIndex;
use flock_steering::{BoundaryPolicy, FlockSnapshot, SteeringRules};

use crate::FlockRenderer;

/// Neighbor ring searched around each boid's cell.  The configured cell size
/// is at least the largest rule radius, so one ring covers every interaction.
const NEIGHBOR_RING: u32 = 1;

// ── Simulation ────────────────────────────────────────────────────────────────

/// The flock, its predators, and the tick loop that moves them.
///
/// Every tick reads one frozen snapshot of positions and velocities: no boid
/// sees another boid's update from the same tick.  New velocities go into a
/// scratch buffer that is swapped in at the end of the tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    pub(crate) config:    FlockConfig,
    pub(crate) flock:     FlockState,
    pub(crate) predators: Vec<Predator>,
    pub(crate) rules:     SteeringRules,
    pub(crate) boundary:  BoundaryPolicy,
    pub(crate) index:     SpatialIndex,
    pub(crate) tick:      Tick,

    /// Scratch output of the steering pass.
    pub(crate) next_velocities: Vec<Vec2>,
    /// Predator positions at the start of the tick, seen by every boid.
    pub(crate) predator_positions: Vec<Vec2>,
}

impl Simulation {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the world by one tick.
    pub fn tick(&mut self) {
        // ── Phase 1: index ────────────────────────────────────────────────
        self.index.rebuild(&self.flock.positions);

        // ── Phase 2: steering (produce) ───────────────────────────────────
        self.predator_positions.clear();
        self.predator_positions.extend(self.predators.iter().map(|p| p.position));
        self.compute_velocities();

        // ── Phase 3: predators ────────────────────────────────────────────
        //
        // Boid positions are still the pre-tick snapshot here.
        let (width, height) = (self.config.width, self.config.height);
        let mut holding = 0usize;
        for predator in &mut self.predators {
            if !predator.update(&self.flock.positions, width, height) {
                holding += 1;
            }
        }

        // ── Phase 4 + 5: integrate and apply the boundary ─────────────────
        for (pos, &vel) in self.flock.positions.iter_mut().zip(&self.next_velocities) {
            *pos = self.boundary.apply_hard(*pos + vel);
        }

        // ── Phase 6: commit ───────────────────────────────────────────────
        std::mem::swap(&mut self.flock.velocities, &mut self.next_velocities);
        log::trace!(
            "{}: {} occupied cells, {holding} predator(s) holding",
            self.tick,
            self.index.occupied_cells(),
        );
        self.tick = self.tick + 1;
    }

    /// Hand the current state to a renderer: `clear`, `plot`, `render`.
    pub fn present<R: FlockRenderer + ?Sized>(&self, renderer: &mut R) {
        renderer.clear();
        renderer.plot(&self.flock.positions);
        renderer.render(&self.predator_views());
    }

    /// [`tick`](Self::tick) then [`present`](Self::present).
    pub fn step<R: FlockRenderer + ?Sized>(&mut self, renderer: &mut R) {
        self.tick();
        self.present(renderer);
    }

    /// Run exactly `n` steps, presenting after each.
    pub fn run_ticks<R: FlockRenderer + ?Sized>(&mut self, n: u64, renderer: &mut R) {
        for _ in 0..n {
            self.step(renderer);
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    /// Number of ticks completed so far.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn flock(&self) -> &FlockState {
        &self.flock
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.flock.positions
    }

    pub fn velocities(&self) -> &[Vec2] {
        &self.flock.velocities
    }

    pub fn predators(&self) -> &[Predator] {
        &self.predators
    }

    pub fn predator(&self, id: PredatorId) -> Option<&Predator> {
        self.predators.get(id.index())
    }

    pub fn predator_views(&self) -> Vec<PredatorView> {
        self.predators.iter().map(Predator::view).collect()
    }

    pub fn boundary(&self) -> &BoundaryPolicy {
        &self.boundary
    }

    // ── Steering pass ─────────────────────────────────────────────────────

    /// Fill `next_velocities` from the frozen snapshot, in index order.
    #[cfg(not(feature = "parallel"))]
    fn compute_velocities(&mut self) {
        let snapshot = FlockSnapshot::new(
            &self.flock.positions,
            &self.flock.velocities,
            &self.predator_positions,
        );
        let mut candidates = Vec::new();
        self.next_velocities.clear();
        for i in 0..snapshot.len() {
            self.index.neighbors_into(i, NEIGHBOR_RING, &mut candidates);
            self.next_velocities
                .push(self.rules.steer(i, &candidates, &snapshot, &self.boundary));
        }
    }

    /// Fill `next_velocities` from the frozen snapshot on Rayon's pool.
    ///
    /// Each boid writes only its own slot and `collect_into_vec` preserves
    /// index order, so the result matches the sequential pass bit for bit.
    #[cfg(feature = "parallel")]
    fn compute_velocities(&mut self) {
        use rayon::prelude::*;

        let snapshot = FlockSnapshot::new(
            &self.flock.positions,
            &self.flock.velocities,
            &self.predator_positions,
        );
        let (index, rules, boundary) = (&self.index, &self.rules, &self.boundary);
        (0..snapshot.len())
            .into_par_iter()
            .map_init(Vec::new, |candidates, i| {
                index.neighbors_into(i, NEIGHBOR_RING, candidates);
                rules.steer(i, candidates, &snapshot, boundary)
            })
            .collect_into_vec(&mut self.next_velocities);
    }
}
