use crate::camera::{Camera, CameraUniform};
use crate::config::ClientConfig;
use game_core::{Aabb, Config, GameState, PlayerId};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Ball, left paddle, right paddle
pub const INSTANCE_COUNT: usize = 3;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // center x, center y, width, height
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    pub fn from_rect(rect: Aabb, tint: [f32; 4]) -> Self {
        let center = rect.center();
        let size = rect.size();
        Self {
            transform: [center.x, center.y, size.x, size.y],
            tint,
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    // Instance buffer, rewritten every frame
    let instances = device.create_buffer(&BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (INSTANCE_COUNT * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        instances,
    }
}

/// Rectangles to draw this frame, in draw order
pub fn frame_instances(
    game: &GameState,
    config: &Config,
    client_config: &ClientConfig,
) -> Vec<InstanceData> {
    let mut instances = Vec::with_capacity(INSTANCE_COUNT);

    if let Some(ball) = game.ball() {
        instances.push(InstanceData::from_rect(
            config.ball_rect(ball.pos, ball.size),
            client_config.ball_color,
        ));
    }

    for id in PlayerId::ALL {
        let Some(player) = game.player(id) else {
            continue;
        };
        let tint = match id {
            PlayerId::One => client_config.player1_color,
            PlayerId::Two => client_config.player2_color,
        };
        instances.push(InstanceData::from_rect(config.paddle_rect(id, player.y), tint));
    }

    instances
}
