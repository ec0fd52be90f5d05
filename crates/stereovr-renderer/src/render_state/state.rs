use glam::Mat4;
use std::collections::HashMap;
use std::sync::Arc;
use stereovr_common::{Color, Eye};
use winit::window::Window;

use super::gpu_mesh::GpuMesh;
use super::helpers;
use super::textures::{self, BoundTexture};
use crate::camera::Camera;
use crate::gpu::{GpuContext, RendererError};
use crate::graph::{Material, NodeId, SceneGraph, SceneRenderer};
use crate::mesh_pipeline::{MeshPipeline, MeshUniforms};
use crate::video::VideoFrame;

/// Core rendering state: GPU context, mesh pipeline, and per-node GPU data.
///
/// The desktop preview draws one eye's layer; nodes restricted to the other
/// eye are skipped.
pub struct RenderState {
    pub gpu: GpuContext,
    pipeline: MeshPipeline,
    meshes: HashMap<(&'static str, NodeId), GpuMesh>,
    white: BoundTexture,
    video: Option<BoundTexture>,
    preview_eye: Eye,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, preview_eye: Eye) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let pipeline = MeshPipeline::new(&gpu.device, gpu.format());
        let white = BoundTexture::white(&gpu.device, &gpu.queue, &pipeline);

        Ok(Self {
            gpu,
            pipeline,
            meshes: HashMap::new(),
            white,
            video: None,
            preview_eye,
        })
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    pub fn preview_eye(&self) -> Eye {
        self.preview_eye
    }

    pub fn set_preview_eye(&mut self, eye: Eye) {
        self.preview_eye = eye;
    }

    /// Copy a decoded frame into the video texture.
    ///
    /// Frames whose sequence number was already uploaded are skipped.
    pub fn upload_frame(&mut self, frame: &VideoFrame) -> Result<(), RendererError> {
        let written = textures::upload_frame(
            &self.gpu.device,
            &self.gpu.queue,
            &self.pipeline,
            &mut self.video,
            frame,
        )?;
        if written {
            tracing::trace!(
                "Uploaded video frame #{} ({}x{})",
                frame.sequence,
                frame.width,
                frame.height
            );
        }
        Ok(())
    }

    /// Create, refresh, or drop GPU meshes so they mirror `graph`, and write
    /// each drawn node's uniforms.
    fn prepare(&mut self, graph: &SceneGraph, camera: &Camera) -> Vec<(NodeId, bool)> {
        let label = graph.label();
        self.meshes
            .retain(|(owner, id), _| *owner != label || graph.node(*id).is_some());

        let view_projection = camera.view_projection();
        let mut draws = Vec::new();

        for node in graph.nodes() {
            if !node.visible || !node.layer.visible_to(self.preview_eye) {
                continue;
            }
            if node.mesh.indices.is_empty() || node.mesh.vertex_count() == 0 {
                continue;
            }

            let key = (label, node.id);
            let stale = self
                .meshes
                .get(&key)
                .is_some_and(|gpu_mesh| !gpu_mesh.matches(&node.mesh));
            if stale {
                self.meshes.remove(&key);
            }
            let gpu_mesh = self.meshes.entry(key).or_insert_with(|| {
                tracing::debug!("Uploading mesh for {} ({})", node.name, node.id);
                GpuMesh::new(&self.gpu.device, &self.pipeline, &node.mesh, &node.name)
            });
            if gpu_mesh.sync_uvs(&self.gpu.queue, &node.mesh) {
                tracing::debug!("Re-uploaded UVs for {}", node.name);
            }

            let (tint, textured) = match node.material {
                Material::Color(color) => (color, false),
                Material::VideoFrame { tint } => (tint, true),
            };
            let uniforms = MeshUniforms {
                mvp: (view_projection * Mat4::from(node.transform)).to_cols_array(),
                tint: helpers::tint(tint),
            };
            self.gpu.queue.write_buffer(
                &gpu_mesh.uniform_buffer,
                0,
                bytemuck::bytes_of(&uniforms),
            );
            draws.push((node.id, textured));
        }

        draws
    }

    fn texture_for(&self, textured: bool) -> &wgpu::BindGroup {
        match (&self.video, textured) {
            (Some(video), true) => &video.bind_group,
            _ => &self.white.bind_group,
        }
    }
}

impl SceneRenderer for RenderState {
    fn render(&mut self, graph: &SceneGraph, camera: &Camera) -> Result<(), RendererError> {
        let draws = self.prepare(graph, camera);
        let label = graph.label();

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("stereovr scene encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("stereovr scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(helpers::clear_color(
                            graph.background,
                            self.gpu.format(),
                        )),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.gpu.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline.pipeline);
            for (id, textured) in draws {
                let Some(gpu_mesh) = self.meshes.get(&(label, id)) else {
                    continue;
                };
                pass.set_bind_group(0, &gpu_mesh.uniform_bind_group, &[]);
                pass.set_bind_group(1, self.texture_for(textured), &[]);
                pass.set_vertex_buffer(0, gpu_mesh.position_buffer.slice(..));
                pass.set_vertex_buffer(1, gpu_mesh.uv_buffer.slice(..));
                pass.set_index_buffer(gpu_mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..gpu_mesh.index_count, 0, 0..1);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        helpers::log_first_frame(
            self.gpu.size.width,
            self.gpu.size.height,
            self.gpu.format(),
            label,
        );

        Ok(())
    }
}

impl RenderState {
    /// Solid clear of the surface, used before any scene is ready.
    pub fn clear(&mut self, color: Color) -> Result<(), RendererError> {
        let output = self.gpu.current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("stereovr clear encoder"),
            });
        {
            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("stereovr clear pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(helpers::clear_color(color, self.gpu.format())),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }
        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
