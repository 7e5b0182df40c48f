//! The classic boid rules plus predator avoidance, composed into one
//! velocity update.

use flock_core::{EPSILON, RuleConfig, Vec2};

use crate::{BoundaryPolicy, FlockSnapshot};

/// Tuning for one steering evaluation.  Cheap to copy; shared read-only by
/// every boid in a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteeringRules {
    pub cohesion_radius:   f32,
    pub alignment_radius:  f32,
    pub separation_radius: f32,
    pub cohesion_weight:   f32,
    pub alignment_weight:  f32,
    pub separation_weight: f32,
    pub predator_radius:   f32,
    pub predator_weight:   f32,
    pub min_speed:         f32,
    pub max_speed:         f32,
}

/// Running sums over one boid's candidate list.
#[derive(Default)]
struct NeighborSums {
    position_sum:   Vec2,
    cohesion_n:     u32,
    velocity_sum:   Vec2,
    alignment_n:    u32,
    repulsion:      Vec2,
}

impl SteeringRules {
    /// Copy the tuning out of a config that has passed
    /// [`FlockConfig::validate`](flock_core::FlockConfig::validate).
    pub fn from_config(config: &RuleConfig) -> Self {
        Self {
            cohesion_radius:   config.cohesion_radius,
            alignment_radius:  config.alignment_radius,
            separation_radius: config.separation_radius,
            cohesion_weight:   config.cohesion_weight,
            alignment_weight:  config.alignment_weight,
            separation_weight: config.separation_weight,
            predator_radius:   config.predator_radius,
            predator_weight:   config.predator_weight,
            min_speed:         config.min_speed,
            max_speed:         config.max_speed,
        }
    }

    /// New velocity for boid `i`.
    ///
    /// `candidates` comes from the spatial index and may contain boids
    /// outside every radius; each rule filters by its own radius.
    ///
    /// A boid with no candidates keeps its previous velocity untouched:
    /// no predator push, no boundary push, no speed governance.
    pub fn steer(
        &self,
        i:          usize,
        candidates: &[usize],
        snapshot:   &FlockSnapshot<'_>,
        boundary:   &BoundaryPolicy,
    ) -> Vec2 {
        let vel = snapshot.velocities[i];
        if candidates.is_empty() {
            return vel;
        }
        let pos = snapshot.positions[i];
        let sums = self.accumulate(pos, candidates, snapshot);

        let mut new_vel = vel;

        if sums.cohesion_n > 0 {
            let mean_pos = sums.position_sum / sums.cohesion_n as f32;
            new_vel += (mean_pos - pos) * self.cohesion_weight;
        }
        if sums.alignment_n > 0 {
            let mean_vel = sums.velocity_sum / sums.alignment_n as f32;
            new_vel += (mean_vel - vel) * self.alignment_weight;
        }
        new_vel += sums.repulsion * self.separation_weight;
        new_vel += self.predator_avoidance(pos, snapshot.predators);
        new_vel += boundary.containment_force(pos);

        self.govern_speed(new_vel)
    }

    /// Push away from every predator closer than `predator_radius`.
    pub fn predator_avoidance(&self, pos: Vec2, predators: &[Vec2]) -> Vec2 {
        predators
            .iter()
            .filter_map(|&hawk| {
                let offset = pos - hawk;
                let d = offset.length();
                (d < self.predator_radius).then(|| offset / (d + EPSILON))
            })
            .sum::<Vec2>()
            * self.predator_weight
    }

    /// Clamp `v` into `[min_speed, max_speed]`, preserving direction.
    ///
    /// A zero vector stays zero: there is no direction to stretch.
    #[inline]
    pub fn govern_speed(&self, v: Vec2) -> Vec2 {
        let speed = v.length();
        if speed > self.max_speed {
            v * (self.max_speed / speed)
        } else if speed < self.min_speed {
            v * (self.min_speed / (speed + EPSILON))
        } else {
            v
        }
    }

    fn accumulate(&self, pos: Vec2, candidates: &[usize], snapshot: &FlockSnapshot<'_>) -> NeighborSums {
        let mut sums = NeighborSums::default();
        for &j in candidates {
            let other = snapshot.positions[j];
            let offset = other - pos;
            let d = offset.length();

            if d < self.cohesion_radius {
                sums.position_sum += other;
                sums.cohesion_n += 1;
            }
            if d < self.alignment_radius {
                sums.velocity_sum += snapshot.velocities[j];
                sums.alignment_n += 1;
            }
            if d < self.separation_radius {
                sums.repulsion -= offset / (d + EPSILON);
            }
        }
        sums
    }
}
