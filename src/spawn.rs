//! Random particle seeding.
//!
//! [`Spawner`] is the only source of randomness in the simulation. It draws
//! every field of a new particle at construction time and redraws positions
//! when the stepper recycles a particle.

use crate::config::FieldConfig;
use crate::lifecycle::Lifespan;
use crate::particle::Particle;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Draws particles and respawn positions from the configured ranges.
#[derive(Debug, Clone)]
pub struct Spawner {
    /// Half-size of the spawn cube.
    extent: f32,
    initial_speed: f32,
    size_min: f32,
    size_max: f32,
    lifespan: Lifespan,
    rng: SmallRng,
}

impl Spawner {
    /// Create a spawner seeded from OS entropy.
    pub fn new(config: &FieldConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Create a spawner with a fixed seed, for reproducible runs.
    pub fn seeded(config: &FieldConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: &FieldConfig, rng: SmallRng) -> Self {
        Self {
            extent: config.spawn_extent,
            initial_speed: config.initial_speed,
            size_min: config.size_min,
            size_max: config.size_max,
            lifespan: config.lifespan,
            rng,
        }
    }

    /// Half-size of the spawn cube.
    #[inline]
    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Whether `position` lies inside the spawn cube `[-extent, extent)^3`.
    pub fn contains(&self, position: Vec3) -> bool {
        position
            .to_array()
            .iter()
            .all(|c| (-self.extent..self.extent).contains(c))
    }

    /// Draw a fresh particle with a staggered starting age.
    pub fn spawn(&mut self) -> Particle {
        let max_age = self.lifespan.sample(&mut self.rng);
        let position = self.random_position();
        let velocity = self.random_velocity();
        let size = self.random_in(self.size_min, self.size_max);
        let age = self.random_in(0.0, max_age);

        Particle {
            position,
            velocity,
            size,
            age,
            max_age,
        }
    }

    /// Uniform point inside the spawn cube.
    pub fn random_position(&mut self) -> Vec3 {
        self.random_in_cube(self.extent)
    }

    /// Random point inside a cube of given half-size, centered at origin.
    pub fn random_in_cube(&mut self, half_size: f32) -> Vec3 {
        Vec3::new(
            self.random_in(-half_size, half_size),
            self.random_in(-half_size, half_size),
            self.random_in(-half_size, half_size),
        )
    }

    fn random_velocity(&mut self) -> Vec3 {
        self.random_in_cube(self.initial_speed)
    }

    // gen_range panics on an empty range, so a zero-width range yields its start.
    fn random_in(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_within_ranges() {
        let config = FieldConfig::default();
        let mut spawner = Spawner::seeded(&config, 42);

        for _ in 0..500 {
            let p = spawner.spawn();
            assert!(spawner.contains(p.position));
            assert!(p.velocity.abs().max_element() <= 0.01);
            assert!((0.05..0.15).contains(&p.size));
            assert!(p.age >= 0.0 && p.age < p.max_age);
            assert_eq!(p.max_age, 100.0);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let config = FieldConfig::default();
        let mut a = Spawner::seeded(&config, 9);
        let mut b = Spawner::seeded(&config, 9);
        for _ in 0..10 {
            assert_eq!(a.spawn(), b.spawn());
        }
    }

    #[test]
    fn test_zero_initial_speed() {
        let config = FieldConfig {
            initial_speed: 0.0,
            ..FieldConfig::default()
        };
        let mut spawner = Spawner::seeded(&config, 1);
        assert_eq!(spawner.spawn().velocity, Vec3::ZERO);
    }

    #[test]
    fn test_contains() {
        let spawner = Spawner::seeded(&FieldConfig::default(), 0);
        assert!(spawner.contains(Vec3::new(-10.0, 0.0, 9.9)));
        assert!(!spawner.contains(Vec3::new(10.0, 0.0, 0.0)));
        assert!(!spawner.contains(Vec3::new(0.0, -10.5, 0.0)));
    }
}
