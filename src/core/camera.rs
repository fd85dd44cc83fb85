// Orthographic camera and viewport sizing shared by the GPU and 2D surfaces.

use super::constants::{
    CAMERA_FAR, CAMERA_HALF_HEIGHT, CAMERA_NEAR, CAMERA_Z, MAX_PIXEL_RATIO,
};
use glam::{Mat4, Vec3};

/// Backing-store sizes derived from the mount container's CSS box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// GPU canvas size in device pixels (CSS size times capped pixel ratio).
    pub gpu_width: u32,
    pub gpu_height: u32,
    /// Overlay canvas size in CSS pixels.
    pub overlay_width: u32,
    pub overlay_height: u32,
}

impl Viewport {
    pub fn from_css(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        };
        let w = sanitize(css_width);
        let h = sanitize(css_height);
        Self {
            gpu_width: to_px(w * dpr),
            gpu_height: to_px(h * dpr),
            overlay_width: to_px(w),
            overlay_height: to_px(h),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.overlay_width as f32 / self.overlay_height.max(1) as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_css(1.0, 1.0, 1.0)
    }
}

#[inline]
fn sanitize(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

#[inline]
fn to_px(v: f64) -> u32 {
    (v as u32).max(1)
}

/// Right-handed orthographic camera on the +Z axis looking at the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct OrthoCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub half_height: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            half_height: CAMERA_HALF_HEIGHT,
            aspect: 1.0,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl OrthoCamera {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let mut camera = Self::default();
        camera.resize(viewport);
        camera
    }

    /// Horizontal extent follows the aspect ratio; vertical extent is fixed.
    pub fn resize(&mut self, viewport: &Viewport) {
        let aspect = viewport.aspect();
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let half_w = self.half_height * self.aspect;
        Mat4::orthographic_rh(
            -half_w,
            half_w,
            -self.half_height,
            self.half_height,
            self.znear,
            self.zfar,
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
