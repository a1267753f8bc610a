//! Scene state types shared between the web and native frontends.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets. The frontends consume
//! them to build camera matrices and the per-frame uniform block.

use crate::constants::{
    cube_initial_rotation, cube_rest_position, AMBIENT_INTENSITY, CAMERA_FOV_DEGREES, CAMERA_ZFAR,
    CAMERA_ZNEAR, POINT_LIGHT_INTENSITY, POINT_LIGHT_POSITION,
};
use glam::{EulerRot, Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// The page camera: at the origin looking down -Z with the configured frustum.
pub fn scene_camera(aspect: f32) -> Camera {
    Camera {
        eye: Vec3::ZERO,
        target: Vec3::NEG_Z,
        up: Vec3::Y,
        aspect,
        fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
    }
}

/// Output surface size in physical pixels, updated on resize events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Derive the backing-store size from CSS pixels and the device pixel
    /// ratio. Sizes are floored at one pixel so a hidden canvas never
    /// produces a zero-sized surface.
    pub fn from_css(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let width = ((css_width * device_pixel_ratio) as u32).max(1);
        let height = ((css_height * device_pixel_ratio) as u32).max(1);
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / (self.height as f32).max(1.0)
    }
}

/// Position and Euler rotation of the cube, mutated every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeTransform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl CubeTransform {
    pub fn at_rest() -> Self {
        Self {
            position: cube_rest_position(),
            rotation: cube_initial_rotation(),
        }
    }

    /// World matrix: rotate about the cube's own center, then translate.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }
}

/// GPU uniform block; layout must match the `Uniforms` struct in
/// `shaders/scene.wgsl` (160 bytes with std140-style padding).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub light_position: [f32; 3],
    pub ambient: f32,
    pub point_intensity: f32,
    pub _pad: [f32; 3],
}

impl SceneUniforms {
    pub fn new(camera: &Camera, transform: &CubeTransform) -> Self {
        Self {
            view_proj: (camera.projection_matrix() * camera.view_matrix()).to_cols_array_2d(),
            model: transform.model_matrix().to_cols_array_2d(),
            light_position: POINT_LIGHT_POSITION,
            ambient: AMBIENT_INTENSITY,
            point_intensity: POINT_LIGHT_INTENSITY,
            _pad: [0.0; 3],
        }
    }
}
