//! Mesh generation for Flappy
//!
//! Two unit meshes, scaled per instance: a quad spanning (0,0)..(1,1) for
//! barriers and a circle of diameter 1 centered on the origin for the bird
//! and clouds.

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Unit quad anchored at its top-left corner
pub fn create_rectangle() -> (Vec<Vertex>, Vec<u16>) {
    let vertices = vec![
        Vertex {
            position: [0.0, 0.0, 0.0],
        },
        Vertex {
            position: [1.0, 0.0, 0.0],
        },
        Vertex {
            position: [1.0, 1.0, 0.0],
        },
        Vertex {
            position: [0.0, 1.0, 0.0],
        },
    ];

    let indices = vec![0, 1, 2, 2, 3, 0];

    (vertices, indices)
}

/// Triangle fan circle with diameter 1, centered on the origin
pub fn create_circle(segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::with_capacity(segments as usize + 1);
    let mut indices = Vec::with_capacity(segments as usize * 3);

    vertices.push(Vertex {
        position: [0.0, 0.0, 0.0],
    });
    for i in 0..segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        vertices.push(Vertex {
            position: [angle.cos() * 0.5, angle.sin() * 0.5, 0.0],
        });
    }

    for i in 0..segments {
        let current = i + 1;
        let next = (i + 1) % segments + 1;
        indices.extend_from_slice(&[0, current, next]);
    }

    (vertices, indices)
}

/// Mesh data with GPU buffers
#[cfg(target_arch = "wasm32")]
pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

#[cfg(target_arch = "wasm32")]
impl Mesh {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        vertices: &[Vertex],
        indices: &[u16],
    ) -> Self {
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Vertex Buffer"),
            size: std::mem::size_of_val(vertices) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(vertices));

        // Buffer writes must be a multiple of 4 bytes; pad odd u16 index counts
        let mut padded = indices.to_vec();
        if padded.len() % 2 != 0 {
            padded.push(0);
        }
        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Index Buffer"),
            size: std::mem::size_of_val(padded.as_slice()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&index_buffer, 0, bytemuck::cast_slice(&padded));

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_spans_unit_square() {
        let (vertices, indices) = create_rectangle();
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices.len(), 6);
        for v in &vertices {
            assert!((0.0..=1.0).contains(&v.position[0]));
            assert!((0.0..=1.0).contains(&v.position[1]));
        }
    }

    #[test]
    fn test_circle_fan_layout() {
        let (vertices, indices) = create_circle(32);
        assert_eq!(vertices.len(), 33);
        assert_eq!(indices.len(), 96);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
        // Last triangle closes the fan back to the first rim vertex
        assert_eq!(&indices[93..], &[0, 32, 1]);
    }

    #[test]
    fn test_circle_radius_is_half() {
        let (vertices, _) = create_circle(16);
        for v in vertices.iter().skip(1) {
            let r = (v.position[0].powi(2) + v.position[1].powi(2)).sqrt();
            assert!((r - 0.5).abs() < 1e-5);
        }
    }
}
