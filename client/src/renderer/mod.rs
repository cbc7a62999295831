pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use crate::camera::Camera;
use crate::config::ClientConfig;
use crate::mesh::{create_rectangle, Mesh};
use game_core::{Config, GameState};
use miette::Result;
use resources::GameBuffers;
use wgpu::*;
use winit::window::Window;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub window: Arc<Window>,

    pub rect_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: GameBuffers,
    pub mesh: Mesh,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, config: &Config) -> Result<Self> {
        let ctx = init::init_wgpu(Arc::clone(&window)).await?;

        // Game coordinates, independent of the window's physical pixel size
        let camera = Camera::screen(config.screen_width, config.screen_height);
        let buffers = resources::create_buffers(&ctx.device, &camera);
        let rect_pipeline = pipeline::create_rect_pipeline(&ctx.device, ctx.config.format);

        let (vertices, indices) = create_rectangle();
        let mesh = Mesh::new(&ctx.device, &vertices, &indices);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &rect_pipeline.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            window,
            rect_pipeline: rect_pipeline.pipeline,
            camera_bind_group,
            buffers,
            mesh,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Draw and present one frame
    ///
    /// A lost or outdated surface is reconfigured and the frame is skipped.
    pub fn draw(
        &mut self,
        game: &GameState,
        config: &Config,
        client_config: &ClientConfig,
    ) -> Result<(), SurfaceError> {
        match draw::draw_frame(self, game, config, client_config) {
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                let (width, height) = self.size;
                self.resize(width, height);
                Ok(())
            }
            other => other,
        }
    }
}
