//! Canonical particle storage.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::spawn::Spawner;

/// Owns every particle of the field plus the spawner used to recycle them.
///
/// The population is created once and never grows or shrinks; recycling
/// only rewrites fields in place.
#[derive(Debug, Clone)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    spawner: Spawner,
}

impl ParticleStore {
    /// Seed `config.particle_count` particles from OS entropy.
    pub fn new(config: &FieldConfig) -> Self {
        Self::populate(config, Spawner::new(config))
    }

    /// Seed `config.particle_count` particles from a fixed seed.
    pub fn seeded(config: &FieldConfig, seed: u64) -> Self {
        Self::populate(config, Spawner::seeded(config, seed))
    }

    /// Build a store from explicit particles. `spawner` is used for recycles.
    pub fn from_particles(particles: Vec<Particle>, spawner: Spawner) -> Self {
        Self { particles, spawner }
    }

    fn populate(config: &FieldConfig, mut spawner: Spawner) -> Self {
        let particles: Vec<Particle> = (0..config.particle_count)
            .map(|_| spawner.spawn())
            .collect();
        log::debug!(
            "Seeded {} particles in a spawn cube of half-size {}",
            particles.len(),
            spawner.extent()
        );
        Self { particles, spawner }
    }

    /// All particles, in stable index order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Iterate particles in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The spawner used for recycles.
    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    /// Borrow the particles mutably together with the spawner.
    pub(crate) fn split_mut(&mut self) -> (&mut [Particle], &mut Spawner) {
        (&mut self.particles, &mut self.spawner)
    }
}

impl<'a> IntoIterator for &'a ParticleStore {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
