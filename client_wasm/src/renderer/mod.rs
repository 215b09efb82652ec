pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod draw;
#[cfg(target_arch = "wasm32")]
pub mod init;
#[cfg(target_arch = "wasm32")]
pub mod pipeline;
#[cfg(target_arch = "wasm32")]
pub mod resources;
#[cfg(target_arch = "wasm32")]
pub mod shaders;

#[cfg(target_arch = "wasm32")]
pub use gpu::Renderer;

#[cfg(target_arch = "wasm32")]
mod gpu {
    use super::scene::Scene;
    use super::{draw, init, pipeline, resources};
    use crate::camera::{Camera, CameraUniform};
    use crate::mesh::{create_circle, create_rectangle, Mesh};
    use resources::GameBuffers;
    use wgpu::*;

    const CIRCLE_SEGMENTS: u16 = 32;

    pub struct Renderer {
        pub device: Device,
        pub queue: Queue,
        pub surface: Surface<'static>,
        pub surface_config: SurfaceConfiguration,
        pub size: (u32, u32),
        pub camera: Camera,

        pub main_pipeline: RenderPipeline,
        pub camera_bind_group: BindGroup,

        pub buffers: GameBuffers,
        pub meshes: (Mesh, Mesh), // rect, circle
    }

    impl Renderer {
        pub async fn new(canvas: web_sys::HtmlCanvasElement) -> Result<Self, String> {
            let ctx = init::init_wgpu(canvas).await?;
            let camera = Camera::screen(ctx.size.0 as f32, ctx.size.1 as f32);

            let buffers = resources::create_buffers(&ctx.device, &camera);
            let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

            // Meshes
            let (rect_vertices, rect_indices) = create_rectangle();
            let rect_mesh = Mesh::new(&ctx.device, &ctx.queue, &rect_vertices, &rect_indices);
            let (circle_vertices, circle_indices) = create_circle(CIRCLE_SEGMENTS);
            let circle_mesh =
                Mesh::new(&ctx.device, &ctx.queue, &circle_vertices, &circle_indices);

            let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &pipes.camera_layout,
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
                camera,
                main_pipeline: pipes.main_pipeline,
                camera_bind_group,
                buffers,
                meshes: (rect_mesh, circle_mesh),
            })
        }

        /// Reconfigure the surface and refit the camera to the new pixel size
        pub fn resize(&mut self, width: u32, height: u32) {
            if width == 0 || height == 0 {
                return;
            }
            self.size = (width, height);
            self.surface_config.width = width;
            self.surface_config.height = height;
            self.surface.configure(&self.device, &self.surface_config);

            self.camera = Camera::screen(width as f32, height as f32);
            let camera_uniform = CameraUniform::from_camera(&self.camera);
            self.queue
                .write_buffer(&self.buffers.camera, 0, bytemuck::bytes_of(&camera_uniform));
        }

        pub fn draw(&mut self, scene: &Scene) -> Result<(), String> {
            draw::draw_frame(self, scene)
        }
    }
}
