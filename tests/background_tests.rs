//! Integration tests for the full step/publish cycle.
//!
//! These drive the public API the way a host would: seed a field, feed it a
//! pointer, tick it for many frames and inspect what the renderer receives.

use gilded_field::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Long-run scenarios
// ============================================================================

#[test]
fn test_thousand_steps_stay_finite_and_recycle() {
    init_logging();

    let config = FieldConfig::default();
    let mut store = ParticleStore::seeded(&config, 0xC0FFEE);
    let stepper = Stepper::new(&config);

    let mut recycled = 0;
    for _ in 0..1000 {
        recycled += stepper.step(&mut store, Vec2::ZERO).recycled;
        for p in store.iter() {
            assert!(p.position.is_finite(), "non-finite position {:?}", p.position);
            assert!(p.velocity.is_finite(), "non-finite velocity {:?}", p.velocity);
            assert!(p.age >= 0.0 && p.age <= p.max_age);
        }
    }

    assert_eq!(store.len(), 50);
    assert!(recycled > 0);
}

#[test]
fn test_background_long_run_with_moving_pointer() {
    init_logging();

    let config = FieldConfig {
        lifespan: Lifespan::Range { min: 60.0, max: 140.0 },
        ..FieldConfig::default()
    };
    let mut background = Background::seeded(config, 99).unwrap();
    let input = background.input();

    for frame in 0..600u32 {
        let angle = frame as f32 * 0.05;
        input.set_pointer(Vec2::new(angle.cos(), angle.sin()));
        input.set_scroll(frame as f64 * 4.0);

        let view = background.tick_at(frame as f64 * 16.0, 1);
        assert_eq!(view.frame.len(), 50);
        assert!(view.frame.positions.iter().all(|v| v.is_finite()));
        assert!(view.frame.sizes.iter().all(|s| *s >= 0.0 && *s <= 0.15));
        assert!(view.ambient.saturation >= 10.0 && view.ambient.saturation <= 15.0);
    }

    for p in background.store().iter() {
        assert!((60.0..140.0).contains(&p.max_age));
    }
}

#[test]
fn test_pointer_pulls_field_toward_target() {
    init_logging();

    let config = FieldConfig {
        particle_count: 30,
        // Long lifespans so no particle is repositioned mid-test.
        lifespan: Lifespan::Fixed(100_000.0),
        ..FieldConfig::default()
    };
    let mut store = ParticleStore::seeded(&config, 12);
    let stepper = Stepper::new(&config);
    let pointer = Vec2::new(0.5, -0.5);
    let target = stepper.pointer_target(pointer);

    let mean_distance = |store: &ParticleStore| {
        store
            .iter()
            .map(|p| (p.position.truncate() - target).length())
            .sum::<f32>()
            / store.len() as f32
    };

    let before = mean_distance(&store);
    stepper.advance(&mut store, pointer, 300);
    let after = mean_distance(&store);

    assert!(after < before, "expected pull toward {:?}: {} -> {}", target, before, after);
}

// ============================================================================
// Publisher and ambient contract
// ============================================================================

#[test]
fn test_published_sizes_fade_and_snap_back() {
    let config = FieldConfig::default();
    let spawner = Spawner::seeded(&config, 4);
    let particle = Particle {
        position: Vec3::ZERO,
        velocity: Vec3::ZERO,
        size: 0.1,
        age: 99.0,
        max_age: 100.0,
    };
    let mut store = ParticleStore::from_particles(vec![particle], spawner);
    let stepper = Stepper::new(&config);
    let mut publisher = FramePublisher::default();

    stepper.step(&mut store, Vec2::ZERO);
    assert_eq!(publisher.publish(store.particles()).sizes[0], 0.0);

    stepper.step(&mut store, Vec2::ZERO);
    assert_eq!(store.particles()[0].age, 0.0);
    assert_eq!(publisher.publish(store.particles()).sizes[0], 0.1);
}

#[test]
fn test_ambient_boundary_values() {
    assert_eq!(ambient_color(0.0, 0.0), Hsl::new(0.0, 10.0, 3.0));
    assert_eq!(ambient_color(0.0, 1000.0).saturation, 15.0);
    assert_eq!(ambient_color(0.0, 1e9).saturation, 15.0);
}
