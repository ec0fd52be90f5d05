use wgpu::util::DeviceExt;

use crate::graph::Mesh;
use crate::mesh_pipeline::{MeshPipeline, MeshUniforms};

/// GPU copy of one graph node's mesh plus its uniform buffer.
pub(super) struct GpuMesh {
    pub position_buffer: wgpu::Buffer,
    pub uv_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    pub uniform_buffer: wgpu::Buffer,
    pub uniform_bind_group: wgpu::BindGroup,
    vertex_count: usize,
    uv_revision: u64,
}

impl GpuMesh {
    pub fn new(device: &wgpu::Device, pipeline: &MeshPipeline, mesh: &Mesh, label: &str) -> Self {
        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} positions")),
            contents: bytemuck::cast_slice(&mesh.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let uv_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} uvs")),
            contents: bytemuck::cast_slice(mesh.uvs()),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} indices")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} uniforms")),
            size: std::mem::size_of::<MeshUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} uniform bind group")),
            layout: &pipeline.uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            position_buffer,
            uv_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            uniform_buffer,
            uniform_bind_group,
            vertex_count: mesh.vertex_count(),
            uv_revision: mesh.uv_revision(),
        }
    }

    /// Whether this copy can be kept for `mesh` (same topology).
    pub fn matches(&self, mesh: &Mesh) -> bool {
        self.vertex_count == mesh.vertex_count() && self.index_count as usize == mesh.indices.len()
    }

    /// Re-upload the UV buffer if the mesh UVs changed since the last sync.
    pub fn sync_uvs(&mut self, queue: &wgpu::Queue, mesh: &Mesh) -> bool {
        if self.uv_revision == mesh.uv_revision() {
            return false;
        }
        queue.write_buffer(&self.uv_buffer, 0, bytemuck::cast_slice(mesh.uvs()));
        self.uv_revision = mesh.uv_revision();
        true
    }
}
