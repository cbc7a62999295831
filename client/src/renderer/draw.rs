use super::resources::frame_instances;
use super::Renderer;
use crate::config::ClientConfig;
use game_core::{Config, GameState};
use wgpu::*;

pub fn draw_frame(
    renderer: &mut Renderer,
    game: &GameState,
    config: &Config,
    client_config: &ClientConfig,
) -> Result<(), SurfaceError> {
    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let instances = frame_instances(game, config, client_config);
    renderer.queue.write_buffer(
        &renderer.buffers.instances,
        0,
        bytemuck::cast_slice(&instances),
    );

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(client_config.clear_color),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.rect_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
        pass.set_vertex_buffer(0, renderer.mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(renderer.mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
        pass.draw_indexed(0..renderer.mesh.index_count, 0, 0..instances.len() as u32);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    renderer.window.pre_present_notify();
    output.present();

    Ok(())
}
