//! Compass heading of a predator, for renderers.
//!
//! Angles use screen convention: `x` grows right, `y` grows *down*, so a
//! velocity of `(0, 1)` points South and is drawn as `⬇`.

use std::fmt;

use flock_core::Vec2;

/// One of eight 45° sectors centered on the principal directions, or
/// `Unknown` when the velocity has no direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
    Unknown,
}

impl Heading {
    /// Sectors in order of increasing screen angle, starting at 0° (East).
    const SECTORS: [Heading; 8] = [
        Heading::East,
        Heading::SouthEast,
        Heading::South,
        Heading::SouthWest,
        Heading::West,
        Heading::NorthWest,
        Heading::North,
        Heading::NorthEast,
    ];

    /// Classify a velocity.  Zero or non-finite velocities are `Unknown`.
    pub fn from_velocity(v: Vec2) -> Self {
        if v == Vec2::ZERO || !v.is_finite() {
            return Heading::Unknown;
        }
        let deg = v.y.atan2(v.x).to_degrees().rem_euclid(360.0);
        let sector = ((deg + 22.5) / 45.0) as usize % 8;
        Self::SECTORS[sector]
    }

    /// Single-character arrow used by the terminal renderer.
    pub fn symbol(self) -> char {
        match self {
            Heading::East      => '➡',
            Heading::SouthEast => '⬊',
            Heading::South     => '⬇',
            Heading::SouthWest => '⬋',
            Heading::West      => '⬅',
            Heading::NorthWest => '⬉',
            Heading::North     => '⬆',
            Heading::NorthEast => '⬈',
            Heading::Unknown   => '?',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
