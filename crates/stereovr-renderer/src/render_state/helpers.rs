use stereovr_common::Color;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat, graph: &str) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?}, graph={})",
            width,
            height,
            format,
            graph,
        );
    }
}

/// Clear color for a graph background on a surface of `format`.
pub(crate) fn clear_color(background: Color, format: wgpu::TextureFormat) -> wgpu::Color {
    let [r, g, b, a] = if format.is_srgb() {
        background.to_linear_f64()
    } else {
        background.to_f32_array().map(f64::from)
    };
    wgpu::Color { r, g, b, a }
}

/// Shader tint for a material color. The surface is sRGB, so tints are linear.
pub(crate) fn tint(color: Color) -> [f32; 4] {
    color.to_linear_f64().map(|c| c as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_color_decodes_srgb_background() {
        let gray = Color::from_hex("#222222").unwrap();
        let srgb = clear_color(gray, wgpu::TextureFormat::Bgra8UnormSrgb);
        let raw = clear_color(gray, wgpu::TextureFormat::Bgra8Unorm);
        assert!(srgb.r < raw.r);
        assert!((raw.r - 0x22 as f64 / 255.0).abs() < 1e-9);
        assert_eq!(srgb.a, 1.0);
    }

    #[test]
    fn white_tint_is_one() {
        assert_eq!(tint(Color::WHITE), [1.0; 4]);
    }
}
