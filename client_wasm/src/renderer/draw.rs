use log::warn;
use wgpu::*;

use super::resources::write_instances;
use super::scene::{Scene, SKY};
use super::Renderer;
use crate::mesh::Mesh;

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame; the next one draws into the reconfigured surface
            warn!("Surface lost or outdated, reconfiguring");
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output
        .texture
        .create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let counts = update_buffers(renderer, scene);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: SKY[0] as f64,
                        g: SKY[1] as f64,
                        b: SKY[2] as f64,
                        a: SKY[3] as f64,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, counts);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Instance counts per layer, back to front
#[derive(Clone, Copy)]
struct LayerCounts {
    background: u32,
    barriers: u32,
    foreground: u32,
}

fn update_buffers(renderer: &Renderer, scene: &Scene) -> LayerCounts {
    let buffers = &renderer.buffers;
    let queue = &renderer.queue;
    LayerCounts {
        background: write_instances(queue, &buffers.background, &scene.background),
        barriers: write_instances(queue, &buffers.barriers, &scene.barriers),
        foreground: write_instances(queue, &buffers.foreground, &scene.foreground),
    }
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>, counts: LayerCounts) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    let (rect, circle) = &renderer.meshes;

    // Clouds
    draw_layer(pass, circle, &renderer.buffers.background, counts.background);
    // Obstacle bodies and caps
    draw_layer(pass, rect, &renderer.buffers.barriers, counts.barriers);
    // Bird and its highlight
    draw_layer(pass, circle, &renderer.buffers.foreground, counts.foreground);
}

fn draw_layer(pass: &mut RenderPass<'_>, mesh: &Mesh, instances: &Buffer, count: u32) {
    if count == 0 {
        return;
    }
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, instances.slice(..));
    pass.draw_indexed(0..mesh.index_count, 0, 0..count);
}
