use crate::constants::{movement_range_vec3, LERP_FACTOR, TARGET_INTERVAL_SECS};
use crate::state::CubeTransform;
use glam::Vec3;
use rand::prelude::*;

/// How the cube moves each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationMode {
    /// Drift toward a periodically re-randomized target point.
    Seek,
    /// Rotation angles track elapsed time directly.
    Spin,
}

impl AnimationMode {
    /// Parse a mode name; anything unrecognized falls back to `Seek`.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("spin") {
            AnimationMode::Spin
        } else {
            AnimationMode::Seek
        }
    }
}

/// Per-frame cube animation driven by wall-clock elapsed time.
///
/// Frontends call `advance` once per rendered frame with the elapsed time
/// since the loop started; no per-frame delta tracking is needed.
pub struct CubeAnimator {
    pub mode: AnimationMode,
    pub transform: CubeTransform,
    pub target: Vec3,
    pub last_update_time: f32,
    rng: StdRng,
}

impl CubeAnimator {
    pub fn new(mode: AnimationMode, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        // Initial target so the cube starts drifting immediately
        let target = sample_target(&mut rng);
        Self {
            mode,
            transform: CubeTransform::at_rest(),
            target,
            last_update_time: 0.0,
            rng,
        }
    }

    /// Advance the animation to `elapsed` seconds since the loop started.
    pub fn advance(&mut self, elapsed: f32) {
        match self.mode {
            AnimationMode::Seek => {
                if elapsed - self.last_update_time >= TARGET_INTERVAL_SECS {
                    self.target = sample_target(&mut self.rng);
                    self.last_update_time = elapsed;
                    log::debug!(
                        "new target ({:.2},{:.2},{:.2}) at t={:.2}",
                        self.target.x,
                        self.target.y,
                        self.target.z,
                        elapsed
                    );
                }
                self.transform.position = self.transform.position.lerp(self.target, LERP_FACTOR);
            }
            AnimationMode::Spin => {
                self.transform.rotation = Vec3::splat(elapsed);
            }
        }
    }
}

/// Uniform target within the configured box, centered on the origin.
fn sample_target(rng: &mut StdRng) -> Vec3 {
    let range = movement_range_vec3();
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * range.x,
        (rng.gen::<f32>() - 0.5) * range.y,
        (rng.gen::<f32>() - 0.5) * range.z,
    )
}
