// Host-side integration tests for the cube animation engine.

use app_core::{
    cube_initial_rotation, cube_rest_position, AnimationMode, CubeAnimator, LERP_FACTOR,
    MOVEMENT_RANGE, TARGET_INTERVAL_SECS,
};
use glam::Vec3;

fn make_seeker() -> CubeAnimator {
    CubeAnimator::new(AnimationMode::Seek, 42)
}

fn assert_target_in_range(target: Vec3, context: &str) {
    let half = Vec3::new(
        MOVEMENT_RANGE[0].abs() * 0.5,
        MOVEMENT_RANGE[1].abs() * 0.5,
        MOVEMENT_RANGE[2].abs() * 0.5,
    );
    assert!(
        target.x.abs() <= half.x,
        "target x {} outside +/-{} ({context})",
        target.x,
        half.x
    );
    assert!(
        target.y.abs() <= half.y,
        "target y {} outside +/-{} ({context})",
        target.y,
        half.y
    );
    assert!(
        target.z.abs() <= half.z,
        "target z {} outside +/-{} ({context})",
        target.z,
        half.z
    );
}

#[test]
fn animator_starts_at_rest_with_a_sampled_target() {
    let anim = make_seeker();
    assert_eq!(anim.transform.position, cube_rest_position());
    assert_eq!(anim.transform.rotation, cube_initial_rotation());
    assert_eq!(anim.last_update_time, 0.0);
    assert_target_in_range(anim.target, "initial target");
}

#[test]
fn seek_targets_stay_within_movement_range_over_many_periods() {
    let mut anim = make_seeker();
    for period in 1..=50 {
        anim.advance(period as f32 * TARGET_INTERVAL_SECS);
        assert_target_in_range(anim.target, &format!("period {period}"));
    }
}

#[test]
fn seek_position_moves_strictly_closer_to_the_current_target() {
    let mut anim = make_seeker();
    let mut elapsed = 0.0_f32;
    // ~10 seconds of 60 fps frames, crossing several retargets
    for _ in 0..600 {
        elapsed += 1.0 / 60.0;
        let position_before = anim.transform.position;
        anim.advance(elapsed);
        // measure against the target the lerp actually used this frame
        let target = anim.target;
        let before = position_before.distance(target);
        let after = anim.transform.position.distance(target);
        if before > 1e-6 {
            assert!(
                after < before,
                "did not approach target at t={elapsed:.3}: {before} -> {after}"
            );
        }
    }
}

#[test]
fn seek_approach_is_exponential_and_never_arrives_in_one_step() {
    let mut anim = make_seeker();
    let before = anim.transform.position.distance(anim.target);
    // well before the first retarget
    anim.advance(0.1);
    let after = anim.transform.position.distance(anim.target);
    let expected = before * (1.0 - LERP_FACTOR);
    assert!(
        (after - expected).abs() < 1e-4,
        "one step should cover the lerp fraction of the distance: {before} -> {after} (expected {expected})"
    );
    assert!(after > 0.0, "a single lerp step must not arrive");
}

#[test]
fn target_resampled_exactly_once_at_the_interval_boundary() {
    let mut anim = make_seeker();
    let initial = anim.target;
    assert_eq!(anim.last_update_time, 0.0);

    // exactly one interval elapsed, no prior update
    anim.advance(TARGET_INTERVAL_SECS);
    assert_eq!(anim.last_update_time, TARGET_INTERVAL_SECS);
    assert_ne!(anim.target, initial, "boundary crossing must resample");

    // same elapsed again: no interval has passed since the update
    let resampled = anim.target;
    anim.advance(TARGET_INTERVAL_SECS);
    assert_eq!(anim.target, resampled, "resample must happen exactly once");
    assert_eq!(anim.last_update_time, TARGET_INTERVAL_SECS);
}

#[test]
fn no_resample_before_the_interval_elapses() {
    let mut anim = make_seeker();
    let initial = anim.target;
    for t in [0.0, 0.5, 1.0, 1.5, 1.99] {
        anim.advance(t);
    }
    assert_eq!(anim.target, initial);
    assert_eq!(anim.last_update_time, 0.0);
}

#[test]
fn long_frame_gap_resamples_once_and_rebases_the_timer() {
    let mut anim = make_seeker();
    let initial = anim.target;
    // a stalled tab can deliver one frame several intervals late
    let late = 3.5 * TARGET_INTERVAL_SECS;
    anim.advance(late);
    assert_ne!(anim.target, initial);
    assert_eq!(anim.last_update_time, late);

    let target = anim.target;
    anim.advance(late + 1.0);
    assert_eq!(
        anim.target, target,
        "timer rebases to the frame that crossed the interval"
    );
}

#[test]
fn seek_leaves_rotation_at_its_rest_value() {
    let mut anim = make_seeker();
    for i in 0..300 {
        anim.advance(i as f32 * 0.05);
    }
    assert_eq!(anim.transform.rotation, cube_initial_rotation());
}

#[test]
fn spin_rotation_equals_elapsed_time_exactly() {
    let mut anim = CubeAnimator::new(AnimationMode::Spin, 7);
    for t in [0.0_f32, 0.016, 0.5, 1.0, 33.25, 1234.5] {
        anim.advance(t);
        assert_eq!(
            anim.transform.rotation,
            Vec3::splat(t),
            "rotation must track the clock at t={t}"
        );
    }
}

#[test]
fn spin_rotation_grows_unbounded() {
    let mut anim = CubeAnimator::new(AnimationMode::Spin, 7);
    anim.advance(400.0);
    assert_eq!(anim.transform.rotation.x, 400.0, "rotation must not wrap");
}

#[test]
fn spin_leaves_position_at_its_rest_value() {
    let mut anim = CubeAnimator::new(AnimationMode::Spin, 7);
    for i in 0..300 {
        anim.advance(i as f32 * 0.05);
    }
    assert_eq!(anim.transform.position, cube_rest_position());
}

#[test]
fn seek_is_deterministic_for_a_fixed_seed() {
    let mut a = CubeAnimator::new(AnimationMode::Seek, 1234);
    let mut b = CubeAnimator::new(AnimationMode::Seek, 1234);
    for i in 0..240 {
        let t = i as f32 / 60.0;
        a.advance(t);
        b.advance(t);
    }
    assert_eq!(a.transform.position, b.transform.position);
    assert_eq!(a.target, b.target);
    assert_eq!(a.last_update_time, b.last_update_time);
}

#[test]
fn mode_from_name_parses_known_and_unknown_names() {
    assert_eq!(AnimationMode::from_name("spin"), AnimationMode::Spin);
    assert_eq!(AnimationMode::from_name("SPIN"), AnimationMode::Spin);
    assert_eq!(AnimationMode::from_name("seek"), AnimationMode::Seek);
    assert_eq!(AnimationMode::from_name("wobble"), AnimationMode::Seek);
    assert_eq!(AnimationMode::from_name(""), AnimationMode::Seek);
}
