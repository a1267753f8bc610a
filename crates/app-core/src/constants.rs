use glam::Vec3;

// Shared scene/animation tuning constants used by both web and native frontends.

// Camera frustum
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Cube
pub const CUBE_SIZE: f32 = 0.5; // edge length
pub const CUBE_REST_POSITION: [f32; 3] = [0.0, 0.0, -5.0];
pub const CUBE_INITIAL_ROTATION: [f32; 3] = [10.0, 10.0, 10.0]; // Euler radians

// Seek animation
pub const TARGET_INTERVAL_SECS: f32 = 2.0; // how often a new target is sampled
pub const LERP_FACTOR: f32 = 0.01; // fraction of remaining distance covered per frame
pub const MOVEMENT_RANGE: [f32; 3] = [1.0, 1.0, -1.0]; // per-axis target span, centered on the origin

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.7;
pub const POINT_LIGHT_INTENSITY: f32 = 0.2;
pub const POINT_LIGHT_POSITION: [f32; 3] = [1.0, 2.0, 3.0];

#[inline]
pub fn cube_rest_position() -> Vec3 {
    Vec3::from(CUBE_REST_POSITION)
}

#[inline]
pub fn cube_initial_rotation() -> Vec3 {
    Vec3::from(CUBE_INITIAL_ROTATION)
}

#[inline]
pub fn movement_range_vec3() -> Vec3 {
    Vec3::from(MOVEMENT_RANGE)
}
