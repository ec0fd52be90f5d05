use crate::gpu::RendererError;
use crate::mesh_pipeline::MeshPipeline;
use crate::video::VideoFrame;

/// An RGBA8 sRGB texture and its bind group.
pub(super) struct BoundTexture {
    texture: wgpu::Texture,
    pub bind_group: wgpu::BindGroup,
    pub width: u32,
    pub height: u32,
    pub sequence: u64,
}

impl BoundTexture {
    pub fn new(
        device: &wgpu::Device,
        pipeline: &MeshPipeline,
        width: u32,
        height: u32,
        label: &str,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = pipeline.texture_bind_group(device, &view, label);
        Self {
            texture,
            bind_group,
            width,
            height,
            sequence: 0,
        }
    }

    /// A 1x1 opaque white texture, used by flat-colored materials.
    pub fn white(device: &wgpu::Device, queue: &wgpu::Queue, pipeline: &MeshPipeline) -> Self {
        let texture = Self::new(device, pipeline, 1, 1, "white texture");
        texture.write(queue, &[255, 255, 255, 255]);
        texture
    }

    pub fn write(&self, queue: &wgpu::Queue, rgba: &[u8]) {
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(self.width * 4),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
    }
}

/// Upload `frame` into `slot`, reallocating when the frame size changes.
///
/// Returns `true` if pixels were written.
pub(super) fn upload_frame(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    pipeline: &MeshPipeline,
    slot: &mut Option<BoundTexture>,
    frame: &VideoFrame,
) -> Result<bool, RendererError> {
    let max = device.limits().max_texture_dimension_2d;
    if frame.width > max || frame.height > max {
        return Err(RendererError::TextureError(format!(
            "frame {}x{} exceeds the {max}px texture limit",
            frame.width, frame.height
        )));
    }

    let reuse = matches!(slot, Some(t) if t.width == frame.width && t.height == frame.height);
    if !reuse {
        *slot = Some(BoundTexture::new(
            device,
            pipeline,
            frame.width,
            frame.height,
            "video frame texture",
        ));
    }

    match slot {
        Some(texture) if !reuse || texture.sequence != frame.sequence => {
            texture.write(queue, &frame.rgba);
            texture.sequence = frame.sequence;
            Ok(true)
        }
        _ => Ok(false),
    }
}
