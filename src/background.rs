//! Per-frame driver for the interactive background.

use crate::ambient::{ambient_color, Hsl};
use crate::config::FieldConfig;
use crate::error::ConfigError;
use crate::input::InputSlot;
use crate::publish::{Frame, FramePublisher};
use crate::stepper::{StepReport, Stepper};
use crate::store::ParticleStore;
use crate::time::Time;
use std::sync::Arc;

/// Everything the renderer needs for one displayed frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    /// Particle attribute buffers.
    pub frame: Frame<'a>,
    /// Background fill color.
    pub ambient: Hsl,
    /// What the simulation did this frame.
    pub report: StepReport,
}

/// The particle field plus its ambient backdrop.
///
/// Owns the store, stepper, publisher and clock. Input is shared through
/// [`Background::input`]; everything else is only touched from [`tick`],
/// so one writer and one reader run back to back each frame.
///
/// [`tick`]: Background::tick
///
/// # Example
///
/// ```ignore
/// let mut background = Background::new(FieldConfig::default())?;
/// let mut capture = InputCapture::new(background.input());
///
/// // winit: capture.handle_event(&event);
/// // per redraw:
/// let view = background.tick();
/// renderer.upload(view.frame.position_bytes(), view.frame.color_bytes(), view.frame.size_bytes());
/// renderer.clear(view.ambient.to_rgb());
/// ```
#[derive(Debug)]
pub struct Background {
    config: FieldConfig,
    store: ParticleStore,
    stepper: Stepper,
    publisher: FramePublisher,
    input: Arc<InputSlot>,
    time: Time,
}

impl Background {
    /// Validate `config` and seed the field from OS entropy.
    pub fn new(config: FieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let store = ParticleStore::new(&config);
        Ok(Self::assemble(config, store))
    }

    /// Validate `config` and seed the field deterministically.
    pub fn seeded(config: FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let store = ParticleStore::seeded(&config, seed);
        Ok(Self::assemble(config, store))
    }

    fn assemble(config: FieldConfig, store: ParticleStore) -> Self {
        Self {
            stepper: Stepper::new(&config),
            publisher: FramePublisher::new(config.color_vec()),
            input: Arc::new(InputSlot::new()),
            time: Time::new(),
            store,
            config,
        }
    }

    /// Shared input slot for pointer and scroll updates.
    pub fn input(&self) -> Arc<InputSlot> {
        Arc::clone(&self.input)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    /// Adjust physics at runtime, e.g. to enable a speed limit.
    pub fn stepper_mut(&mut self) -> &mut Stepper {
        &mut self.stepper
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    /// Clock access, for pausing.
    pub fn time_mut(&mut self) -> &mut Time {
        &mut self.time
    }

    /// Advance one displayed frame using the internal clock.
    pub fn tick(&mut self) -> FrameView<'_> {
        let ticks = self.time.update();
        let millis = self.time.wall_clock_millis();
        self.tick_at(millis, ticks)
    }

    /// Advance `ticks` unit ticks and publish, with an explicit wall clock.
    pub fn tick_at(&mut self, wall_clock_millis: f64, ticks: u32) -> FrameView<'_> {
        let pointer = self.input.pointer();
        let scroll = self.input.scroll();

        let report = self.stepper.advance(&mut self.store, pointer, ticks);
        let frame = self.publisher.publish(self.store.particles());
        let ambient = ambient_color(wall_clock_millis, scroll);

        FrameView {
            frame,
            ambient,
            report,
        }
    }
}
