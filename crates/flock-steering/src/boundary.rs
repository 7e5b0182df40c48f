//! Boundary policies: how boids are kept inside the domain.
//!
//! Each policy has two parts:
//!
//! | Part                    | When                         | Wrap                    | CircularContain         |
//! |-------------------------|------------------------------|-------------------------|-------------------------|
//! | `containment_force`     | inside `SteeringRules::steer`| linear push off edges   | push toward the center  |
//! | `apply_hard`            | after integration            | modulo on both axes     | none                    |

use flock_core::{BoundaryConfig, Vec2, wrap_coord};

/// Containment strategy, chosen once at construction and immutable for the
/// run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryPolicy {
    /// Toroidal domain `[0, width) × [0, height)`.
    Wrap {
        width:        f32,
        height:       f32,
        repel_radius: f32,
        weight:       f32,
    },
    /// Soft circle around `center`.  The push starts `buffer` units inside
    /// `radius` and grows linearly outward.
    CircularContain {
        center: Vec2,
        radius: f32,
        buffer: f32,
        weight: f32,
    },
}

impl BoundaryPolicy {
    /// Resolve a configured boundary against the domain size.
    ///
    /// The buffer and radius are taken as given; `FlockConfig::validate`
    /// guarantees `0 < buffer <= radius`.
    pub fn from_config(config: &BoundaryConfig, width: f32, height: f32) -> Self {
        match *config {
            BoundaryConfig::Wrap { repel_radius, weight } => BoundaryPolicy::Wrap {
                width,
                height,
                repel_radius,
                weight,
            },
            BoundaryConfig::CircularContain { buffer, weight, .. } => BoundaryPolicy::CircularContain {
                center: Vec2::new(0.5 * width, 0.5 * height),
                radius: config.circle_radius(width, height).unwrap_or(0.0),
                buffer,
                weight,
            },
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            BoundaryPolicy::Wrap { .. }            => "wrap",
            BoundaryPolicy::CircularContain { .. } => "circular-contain",
        }
    }

    #[inline]
    pub fn is_wrap(&self) -> bool {
        matches!(self, BoundaryPolicy::Wrap { .. })
    }

    /// Soft force folded into a boid's velocity update.
    pub fn containment_force(&self, pos: Vec2) -> Vec2 {
        match *self {
            BoundaryPolicy::Wrap { width, height, repel_radius, weight } => {
                if repel_radius <= 0.0 {
                    return Vec2::ZERO;
                }
                Vec2::new(
                    edge_push(pos.x, width, repel_radius),
                    edge_push(pos.y, height, repel_radius),
                ) * weight
            }
            BoundaryPolicy::CircularContain { center, radius, buffer, weight } => {
                let to_center = center - pos;
                let d = to_center.length();
                let safe = radius - buffer;
                if d <= safe {
                    return Vec2::ZERO;
                }
                // d > safe ≥ 0, so the division is safe.
                (to_center / d) * ((d - safe) / buffer) * weight
            }
        }
    }

    /// Hard transform applied to a position after integration.
    #[inline]
    pub fn apply_hard(&self, pos: Vec2) -> Vec2 {
        match *self {
            BoundaryPolicy::Wrap { width, height, .. } => {
                Vec2::new(wrap_coord(pos.x, width), wrap_coord(pos.y, height))
            }
            BoundaryPolicy::CircularContain { .. } => pos,
        }
    }
}

/// Unweighted push along one axis: up to `+1` at the low edge, up to `-1` at
/// the high edge, zero outside the repel band.  Both edges can contribute
/// when the domain is narrower than two bands.
#[inline]
fn edge_push(v: f32, extent: f32, radius: f32) -> f32 {
    let mut push = 0.0;
    if v < radius {
        push += 1.0 - v / radius;
    }
    if v > extent - radius {
        push -= 1.0 - (extent - v) / radius;
    }
    push
}
