use super::scene::InstanceData;
use crate::camera::{Camera, CameraUniform};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Upper bound on instances per layer; a wide screen holds a handful of obstacles
/// at four rectangles each
pub const MAX_INSTANCES: usize = 256;

pub struct GameBuffers {
    pub camera: Buffer,
    pub background: Buffer,
    pub barriers: Buffer,
    pub foreground: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    // Instance buffers
    let instance_buffer_size = (MAX_INSTANCES * std::mem::size_of::<InstanceData>()) as u64;
    let instance_buffer = |label| {
        device.create_buffer(&BufferDescriptor {
            label: Some(label),
            size: instance_buffer_size,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    };

    GameBuffers {
        camera: camera_buffer,
        background: instance_buffer("Background Instance Buffer"),
        barriers: instance_buffer("Barrier Instance Buffer"),
        foreground: instance_buffer("Foreground Instance Buffer"),
    }
}

/// Write one layer's instances, truncated to buffer capacity. Returns the count written.
pub fn write_instances(queue: &Queue, buffer: &Buffer, instances: &[InstanceData]) -> u32 {
    let count = instances.len().min(MAX_INSTANCES);
    if count > 0 {
        queue.write_buffer(buffer, 0, bytemuck::cast_slice(&instances[..count]));
    }
    count as u32
}
