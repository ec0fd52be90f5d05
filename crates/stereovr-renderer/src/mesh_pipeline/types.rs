/// Per-node uniforms: MVP matrix and tint.
///
/// Layout: 20 × f32 = 80 bytes, 16-byte aligned (wgpu requirement).
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniforms {
    /// Model-View-Projection matrix (column-major).
    pub mvp: [f32; 16],
    /// Linear RGBA multiplier applied to the sampled texel.
    pub tint: [f32; 4],
}

/// Vertex buffer 0: `position: vec3<f32>`.
pub const POSITION_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: 12,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    }],
};

/// Vertex buffer 1: `uv: vec2<f32>`.
pub const UV_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: 8,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 0,
        shader_location: 1,
    }],
};

// =============================================================================
// Tests
// =============================================================================
