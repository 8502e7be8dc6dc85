//! Per-tick particle update.
//!
//! Each call to [`Stepper::step`] advances every particle by one unit tick.
//! There is no delta-time correction: the field moves once per host frame,
//! so a faster display animates faster. Hosts that want to catch up after a
//! stall call [`Stepper::advance`] with an explicit tick count.
//!
//! Per particle, in order:
//!
//! 1. Pointer attraction on x/y toward `(pointer.x, -pointer.y) * reach`
//! 2. Damping of all three velocity components
//! 3. Optional speed limit
//! 4. `position += velocity`
//! 5. Soft boundary reflection, per axis
//! 6. Aging, with recycle into the spawn cube once `age > max_age`

use crate::config::FieldConfig;
use crate::lifecycle::age_one_tick;
use crate::particle::Particle;
use crate::store::ParticleStore;
use glam::{Vec2, Vec3};
use std::ops::AddAssign;

/// What happened during one or more ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Ticks applied.
    pub ticks: u32,
    /// Particles whose lifespan ran out and were repositioned.
    pub recycled: usize,
    /// Per-axis boundary reflections.
    pub reflected: usize,
}

impl AddAssign for StepReport {
    fn add_assign(&mut self, other: Self) {
        self.ticks += other.ticks;
        self.recycled += other.recycled;
        self.reflected += other.reflected;
    }
}

/// Physics constants for the per-tick update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stepper {
    /// Fraction of positional error toward the pointer target added per tick.
    pub attraction_gain: f32,
    /// World distance of the pointer target at the window edge.
    pub pointer_reach: f32,
    /// Per-tick velocity multiplier.
    pub damping: f32,
    /// Half-size of the reflecting cube.
    pub bounds: f32,
    /// Velocity kept (reversed) on reflection.
    pub restitution: f32,
    /// Optional cap on velocity magnitude, applied after damping.
    pub speed_limit: Option<f32>,
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new(&FieldConfig::default())
    }
}

impl Stepper {
    pub fn new(config: &FieldConfig) -> Self {
        Self {
            attraction_gain: config.attraction_gain,
            pointer_reach: config.pointer_reach,
            damping: config.damping,
            bounds: config.bounds,
            restitution: config.restitution,
            speed_limit: config.speed_limit,
        }
    }

    /// Set the attraction gain. `0.0` disables pointer attraction.
    pub fn with_attraction_gain(mut self, gain: f32) -> Self {
        self.attraction_gain = gain;
        self
    }

    /// Set or clear the velocity cap.
    pub fn with_speed_limit(mut self, limit: Option<f32>) -> Self {
        self.speed_limit = limit;
        self
    }

    /// World-space x/y the pointer pulls toward. Screen y grows downward in
    /// world terms, hence the inversion.
    #[inline]
    pub fn pointer_target(&self, pointer: Vec2) -> Vec2 {
        Vec2::new(pointer.x, -pointer.y) * self.pointer_reach
    }

    /// Advance every particle by one tick.
    pub fn step(&self, store: &mut ParticleStore, pointer: Vec2) -> StepReport {
        let target = self.pointer_target(pointer);
        let (particles, spawner) = store.split_mut();
        let mut report = StepReport {
            ticks: 1,
            ..StepReport::default()
        };

        for particle in particles.iter_mut() {
            report.reflected += self.move_particle(particle, target);
            if age_one_tick(particle) {
                particle.position = spawner.random_position();
                report.recycled += 1;
            }
        }

        log::trace!(
            "Stepped {} particles: {} recycled, {} reflections",
            particles.len(),
            report.recycled,
            report.reflected
        );
        report
    }

    /// Advance every particle by `ticks` ticks.
    pub fn advance(&self, store: &mut ParticleStore, pointer: Vec2, ticks: u32) -> StepReport {
        let mut report = StepReport::default();
        for _ in 0..ticks {
            report += self.step(store, pointer);
        }
        report
    }

    /// Apply forces, integrate and reflect one particle. Returns the number
    /// of axes that reflected.
    fn move_particle(&self, particle: &mut Particle, target: Vec2) -> usize {
        let pull = (target - particle.position.truncate()) * self.attraction_gain;
        particle.velocity += pull.extend(0.0);

        particle.velocity *= self.damping;

        if let Some(limit) = self.speed_limit {
            particle.velocity = particle.velocity.clamp_length_max(limit);
        }

        particle.position += particle.velocity;

        self.reflect(particle)
    }

    // Position is left where it is; the reversed velocity carries it back.
    fn reflect(&self, particle: &mut Particle) -> usize {
        let outside = particle.position.abs().cmpgt(Vec3::splat(self.bounds));
        let mut reflected = 0;
        for axis in 0..3 {
            if outside.test(axis) {
                particle.velocity[axis] *= -self.restitution;
                reflected += 1;
            }
        }
        reflected
    }
}
