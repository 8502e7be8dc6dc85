//! Particle lifespans and aging.
//!
//! Every particle carries an `age` and a `max_age`, both counted in unit
//! ticks. Aging is frame-coupled: one call to the stepper adds exactly one
//! tick of age, whatever the host frame rate.
//!
//! # Lifespans
//!
//! | Variant | Behavior |
//! |---------|----------|
//! | [`Lifespan::Fixed`] | Every particle lives the same number of ticks |
//! | [`Lifespan::Range`] | Each particle draws its lifespan once, at spawn |
//!
//! ```ignore
//! let config = FieldConfig {
//!     lifespan: Lifespan::Range { min: 80.0, max: 120.0 },
//!     ..FieldConfig::default()
//! };
//! ```

use crate::particle::Particle;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ticks a particle lives before it is recycled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifespan {
    /// Same lifespan for the whole population.
    Fixed(f32),
    /// Uniform draw per particle from `min..max`.
    Range {
        /// Shortest lifespan.
        min: f32,
        /// Longest lifespan (exclusive).
        max: f32,
    },
}

impl Default for Lifespan {
    fn default() -> Self {
        Lifespan::Fixed(100.0)
    }
}

impl Lifespan {
    /// Draw one particle's `max_age`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        match *self {
            Lifespan::Fixed(ticks) => ticks,
            Lifespan::Range { min, max } if max > min => rng.gen_range(min..max),
            Lifespan::Range { min, .. } => min,
        }
    }

    /// Shortest lifespan this configuration can produce.
    pub fn shortest(&self) -> f32 {
        match *self {
            Lifespan::Fixed(ticks) => ticks,
            Lifespan::Range { min, .. } => min,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        match *self {
            Lifespan::Fixed(ticks) if !(ticks.is_finite() && ticks > 0.0) => {
                Err(format!("lifespan must be a positive number of ticks, got {}", ticks))
            }
            Lifespan::Range { min, max }
                if !(min.is_finite() && max.is_finite() && min > 0.0 && max >= min) =>
            {
                Err(format!("lifespan range {}..{} is empty or not positive", min, max))
            }
            _ => Ok(()),
        }
    }
}

/// Add one tick of age. Returns `true` when the particle has outlived its
/// lifespan, in which case `age` is already reset to 0 and the caller must
/// reposition it.
#[inline]
pub(crate) fn age_one_tick(particle: &mut Particle) -> bool {
    particle.age += 1.0;
    if particle.age > particle.max_age {
        particle.age = 0.0;
        true
    } else {
        false
    }
}
