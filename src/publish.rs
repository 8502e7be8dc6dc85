//! Flat per-frame attribute buffers for the renderer.
//!
//! [`FramePublisher`] keeps three parallel buffers (positions, colors, sizes)
//! and rewrites them from the particle store every frame. Buffer index `i`
//! always refers to particle `i`, so a renderer can keep its GPU buffers and
//! upload in place.
//!
//! | Buffer | Floats per particle | Contents |
//! |--------|---------------------|----------|
//! | positions | 3 | world position |
//! | colors | 3 | base color (amber by default) |
//! | sizes | 1 | `size * (1 - age / max_age)` |

use crate::particle::Particle;
use glam::Vec3;

/// Borrowed view of one published frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// `x, y, z` per particle.
    pub positions: &'a [f32],
    /// `r, g, b` per particle.
    pub colors: &'a [f32],
    /// Faded point size per particle.
    pub sizes: &'a [f32],
}

impl<'a> Frame<'a> {
    /// Number of particles in the frame.
    #[inline]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Position buffer as raw bytes, ready for a vertex buffer upload.
    pub fn position_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.positions)
    }

    /// Color buffer as raw bytes.
    pub fn color_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.colors)
    }

    /// Size buffer as raw bytes.
    pub fn size_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.sizes)
    }
}

/// Owns the attribute buffers and refills them each frame.
#[derive(Debug, Clone)]
pub struct FramePublisher {
    color: Vec3,
    positions: Vec<f32>,
    colors: Vec<f32>,
    sizes: Vec<f32>,
}

impl FramePublisher {
    /// Create a publisher that paints every particle `color`.
    pub fn new(color: Vec3) -> Self {
        Self {
            color,
            positions: Vec::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
        }
    }

    /// Number of particles the buffers are currently sized for.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.sizes.len()
    }

    /// Change the base color. Takes effect immediately on the color buffer.
    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
        self.fill_colors();
    }

    /// Write the current state of `particles` into the buffers.
    ///
    /// Buffers are resized only when the particle count differs from the
    /// previous call.
    pub fn publish(&mut self, particles: &[Particle]) -> Frame<'_> {
        if particles.len() != self.capacity() {
            self.resize(particles.len());
        }

        for ((particle, position), size) in particles
            .iter()
            .zip(self.positions.chunks_exact_mut(3))
            .zip(self.sizes.iter_mut())
        {
            particle.position.write_to_slice(position);
            *size = particle.faded_size();
        }

        Frame {
            positions: &self.positions,
            colors: &self.colors,
            sizes: &self.sizes,
        }
    }

    fn resize(&mut self, count: usize) {
        log::debug!(
            "Resizing frame buffers from {} to {} particles",
            self.capacity(),
            count
        );
        self.positions.resize(count * 3, 0.0);
        self.sizes.resize(count, 0.0);
        self.fill_colors();
    }

    fn fill_colors(&mut self) {
        let count = self.sizes.len();
        self.colors.clear();
        self.colors.reserve(count * 3);
        for _ in 0..count {
            self.colors.extend_from_slice(&self.color.to_array());
        }
    }
}

impl Default for FramePublisher {
    fn default() -> Self {
        Self::new(Vec3::new(1.0, 0.84, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f32, age: f32) -> Particle {
        Particle {
            position: Vec3::new(x, x + 1.0, x + 2.0),
            velocity: Vec3::ZERO,
            size: 0.1,
            age,
            max_age: 100.0,
        }
    }

    #[test]
    fn test_publish_layout() {
        let mut publisher = FramePublisher::default();
        let particles = vec![particle(0.0, 0.0), particle(5.0, 100.0)];
        let frame = publisher.publish(&particles);

        assert_eq!(frame.len(), 2);
        assert_eq!(frame.positions, &[0.0, 1.0, 2.0, 5.0, 6.0, 7.0]);
        assert_eq!(frame.colors, &[1.0, 0.84, 0.0, 1.0, 0.84, 0.0]);
        assert_eq!(frame.sizes[0], 0.1);
        assert_eq!(frame.sizes[1], 0.0);
    }

    #[test]
    fn test_buffers_track_count() {
        let mut publisher = FramePublisher::default();

        let frame = publisher.publish(&vec![particle(1.0, 10.0); 4]);
        assert_eq!(frame.positions.len(), 12);
        assert_eq!(frame.colors.len(), 12);
        assert_eq!(frame.sizes.len(), 4);

        let frame = publisher.publish(&vec![particle(1.0, 10.0); 2]);
        assert_eq!(frame.positions.len(), 6);
        assert_eq!(frame.colors.len(), 6);
        assert_eq!(frame.sizes.len(), 2);

        let frame = publisher.publish(&[]);
        assert!(frame.is_empty());
        assert!(frame.positions.is_empty());
    }

    #[test]
    fn test_index_stable_across_frames() {
        let mut publisher = FramePublisher::default();
        let mut particles = vec![particle(0.0, 0.0), particle(3.0, 50.0)];
        publisher.publish(&particles);

        particles[1].position.x = -4.0;
        let frame = publisher.publish(&particles);
        assert_eq!(frame.positions[3], -4.0);
        assert_eq!(frame.positions[0], 0.0);
        assert!((frame.sizes[1] - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_set_color() {
        let mut publisher = FramePublisher::default();
        publisher.publish(&[particle(0.0, 0.0)]);
        publisher.set_color(Vec3::new(0.2, 0.3, 0.4));
        let frame = publisher.publish(&[particle(0.0, 0.0)]);
        assert_eq!(frame.colors, &[0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_byte_views() {
        let mut publisher = FramePublisher::default();
        let frame = publisher.publish(&[particle(0.0, 0.0)]);
        assert_eq!(frame.position_bytes().len(), 12);
        assert_eq!(frame.color_bytes().len(), 12);
        assert_eq!(frame.size_bytes().len(), 4);
    }
}
