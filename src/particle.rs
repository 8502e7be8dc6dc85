//! The simulated point particle.

use glam::Vec3;

/// One simulated point of the background.
///
/// `size` and `max_age` are fixed at spawn. `age` counts unit ticks and is
/// kept in `[0, max_age]` by the stepper, which recycles the particle the
/// moment it would pass `max_age`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// World-space position, roughly within `[-10, 10]` per axis.
    pub position: Vec3,
    /// Displacement per unit tick.
    pub velocity: Vec3,
    /// Base point size before the lifespan fade.
    pub size: f32,
    /// Ticks since spawn or last recycle.
    pub age: f32,
    /// Lifespan in ticks.
    pub max_age: f32,
}

impl Particle {
    /// Remaining-life fraction: `1.0` at age 0, `0.0` at `max_age`.
    #[inline]
    pub fn alpha(&self) -> f32 {
        1.0 - self.age / self.max_age
    }

    /// Size as handed to the renderer, shrinking toward zero with age.
    #[inline]
    pub fn faded_size(&self) -> f32 {
        self.size * self.alpha()
    }
}
