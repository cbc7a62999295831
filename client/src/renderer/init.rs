use std::sync::Arc;

use miette::{Context, IntoDiagnostic, Result};
use wgpu::*;
use winit::window::Window;

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

pub async fn init_wgpu(window: Arc<Window>) -> Result<WgpuContext> {
    let instance = Instance::new(&InstanceDescriptor::default());

    let inner_size = window.inner_size();
    let width = inner_size.width.max(1);
    let height = inner_size.height.max(1);

    let surface = instance
        .create_surface(window)
        .into_diagnostic()
        .wrap_err("Error creating window surface")?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| miette::miette!("Error getting GPU adapter for window"))?;

    let info = adapter.get_info();
    log::info!("Using GPU adapter {} ({:?})", info.name, info.backend);

    let (device, queue) = adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Device"),
                required_features: Features::empty(),
                required_limits: Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: MemoryHints::default(),
            },
            None,
        )
        .await
        .into_diagnostic()
        .wrap_err("Error creating GPU device")?;

    let surface_caps = surface.get_capabilities(&adapter);
    let surface_format = surface_caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| surface_caps.formats.first().copied())
        .ok_or_else(|| miette::miette!("Error getting window surface configuration"))?;

    // Fifo waits for vertical sync, which paces the game loop
    let config = SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width,
        height,
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
        size: (width, height),
    })
}
