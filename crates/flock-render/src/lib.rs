//! `flock-render` — draw a flock as Unicode braille text.
//!
//! Each braille character (`U+2800..=U+28FF`) is a 2×4 grid of dots, so a
//! terminal of `c × r` characters shows a `2c × 4r` dot raster.  One
//! simulation unit maps to one dot.
//!
//! [`BrailleCanvas`] implements [`flock_sim::FlockRenderer`]:
//!
//! | Call       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `clear`    | Zero every dot and drop predator overlays                 |
//! | `plot`     | Set the dot under each boid; off-canvas points are ignored |
//! | `render`   | Put each predator's heading arrow over its character cell  |
//!
//! # Usage
//!
//! ```rust
//! use flock_core::FlockConfig;
//! use flock_render::BrailleCanvas;
//! use flock_sim::SimBuilder;
//!
//! let cfg = FlockConfig::default();
//! let mut canvas = BrailleCanvas::new(cfg.width, cfg.height);
//! let mut sim = SimBuilder::new(cfg).build().unwrap();
//! sim.step(&mut canvas);
//! assert_eq!(canvas.rows().count(), 24);
//! ```

pub mod canvas;


pub use canvas::{BrailleCanvas, dot_bit};
