//! Camera for Pong game
//!
//! 2D orthographic camera in screen pixels, origin top-left, y down

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub projection: Mat4,
}

impl Camera {
    /// Map a `width` x `height` screen to clip space
    pub fn screen(width: f32, height: f32) -> Self {
        // Top and bottom swapped so y grows downward like the simulation
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self { projection }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.projection.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn assert_close(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < 1e-5,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_screen_corners_map_to_clip_space() {
        let camera = Camera::screen(600.0, 480.0);
        let top_left = camera.projection.project_point3(Vec3::new(0.0, 0.0, 0.0));
        let bottom_right = camera.projection.project_point3(Vec3::new(600.0, 480.0, 0.0));
        let center = camera.projection.project_point3(Vec3::new(300.0, 240.0, 0.0));

        assert_close(top_left, Vec3::new(-1.0, 1.0, 0.5));
        assert_close(bottom_right, Vec3::new(1.0, -1.0, 0.5));
        assert_close(center, Vec3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_camera_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
