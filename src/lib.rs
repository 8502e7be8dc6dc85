//! # gilded-field
//!
//! Simulation core for an interactive particle background: a small
//! population of amber points drifting toward the pointer, bouncing softly
//! off a cubic boundary and fading out before they respawn.
//!
//! The crate does no rendering. Each frame it hands back three flat `f32`
//! buffers (positions, colors, sizes) and an ambient background color for
//! the host renderer to draw.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gilded_field::prelude::*;
//!
//! let mut background = Background::new(FieldConfig::default())?;
//! let input = background.input();
//!
//! // From the input source, at any time:
//! input.set_pointer(Vec2::new(0.3, -0.1));
//!
//! // Once per displayed frame:
//! let view = background.tick();
//! draw_points(view.frame.positions, view.frame.colors, view.frame.sizes);
//! fill_background(view.ambient);
//! ```
//!
//! ## Pieces
//!
//! | Piece | Role |
//! |-------|------|
//! | [`ParticleStore`] | Owns the particles and the spawner |
//! | [`Stepper`] | Attraction, damping, integration, reflection, recycle |
//! | [`FramePublisher`] | Flattens particles into renderer buffers |
//! | [`ambient_color`] | Time- and scroll-driven background hue |
//! | [`InputSlot`] | Last-write-wins pointer and scroll values |
//! | [`Background`] | Runs all of the above once per frame |
//!
//! Ticks are frame-coupled: one call advances the field by one unit step,
//! whatever the display rate.

pub mod ambient;
mod background;
pub mod config;
mod error;
pub mod input;
pub mod lifecycle;
mod particle;
pub mod publish;
mod spawn;
pub mod stepper;
mod store;
pub mod time;

pub use ambient::{ambient_color, Hsl};
pub use background::{Background, FrameView};
pub use config::FieldConfig;
pub use error::ConfigError;
pub use glam::{Vec2, Vec3};
pub use input::{InputCapture, InputSlot};
pub use lifecycle::Lifespan;
pub use particle::Particle;
pub use publish::{Frame, FramePublisher};
pub use spawn::Spawner;
pub use stepper::{StepReport, Stepper};
pub use store::ParticleStore;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use gilded_field::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ambient::{ambient_color, Hsl};
    pub use crate::background::{Background, FrameView};
    pub use crate::config::FieldConfig;
    pub use crate::error::ConfigError;
    pub use crate::input::{overlay_center, pointer_from_window, InputCapture, InputSlot};
    pub use crate::lifecycle::Lifespan;
    pub use crate::particle::Particle;
    pub use crate::publish::{Frame, FramePublisher};
    pub use crate::spawn::Spawner;
    pub use crate::stepper::{StepReport, Stepper};
    pub use crate::store::ParticleStore;
    pub use crate::time::Time;
    pub use crate::{Vec2, Vec3};
}
