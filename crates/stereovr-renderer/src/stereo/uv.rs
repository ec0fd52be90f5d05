use stereovr_common::{Eye, StereoError, StereoFormat};

/// Texture coordinates captured once when a surface is built.
///
/// Stored flat as `[u0, v0, u1, v1, ...]`. There is no mutable access.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineUv {
    data: Box<[f32]>,
}

impl BaselineUv {
    /// Wrap a flat UV buffer for a mesh with `vertex_count` vertices.
    pub fn new(data: Vec<f32>, vertex_count: usize) -> Result<Self, StereoError> {
        if data.len() % 2 != 0 {
            return Err(StereoError::InvalidArgument(format!(
                "uv buffer has odd length {}",
                data.len()
            )));
        }
        if data.len() != vertex_count * 2 {
            return Err(StereoError::InvalidArgument(format!(
                "uv buffer holds {} pairs but mesh has {vertex_count} vertices",
                data.len() / 2
            )));
        }
        Ok(Self { data: data.into() })
    }

    /// Capture from per-vertex pairs, as stored on a mesh.
    pub fn from_pairs(pairs: &[[f32; 2]]) -> Self {
        Self {
            data: pairs.iter().flatten().copied().collect(),
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn vertex_count(&self) -> usize {
        self.data.len() / 2
    }
}

/// Per-eye UVs recomputed in full from a [`BaselineUv`].
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedUv {
    data: Vec<f32>,
}

impl DerivedUv {
    /// A derived buffer sized for `baseline`, initialised to the identity mapping.
    pub fn for_baseline(baseline: &BaselineUv) -> Self {
        Self {
            data: baseline.as_slice().to_vec(),
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn vertex_count(&self) -> usize {
        self.data.len() / 2
    }

    /// Iterate `[u, v]` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = [f32; 2]> + '_ {
        self.data.chunks_exact(2).map(|c| [c[0], c[1]])
    }
}

/// Remap a single baseline coordinate.
///
/// The wide-field stretch is applied before the stereo half is selected.
pub fn remap_pair(u: f32, v: f32, format: StereoFormat, eye: Eye, wide: bool) -> (f32, f32) {
    let mut u = u;
    let mut v = v;

    if wide {
        u = (u * 2.0).min(1.0);
    }

    match format {
        StereoFormat::Mono => {}
        StereoFormat::SideBySide => {
            u *= 0.5;
            if eye == Eye::Right {
                u += 0.5;
            }
        }
        StereoFormat::TopBottom => {
            v *= 0.5;
            if eye == Eye::Right {
                v += 0.5;
            }
        }
    }

    (u, v)
}

/// Compute a fresh derived buffer for one eye.
pub fn remap(baseline: &BaselineUv, format: StereoFormat, eye: Eye, wide: bool) -> DerivedUv {
    let mut derived = DerivedUv::for_baseline(baseline);
    fill(baseline.as_slice(), &mut derived.data, format, eye, wide);
    derived
}

/// Recompute `derived` in place from `baseline`.
///
/// Only `baseline` is read, so calling this repeatedly with the same
/// arguments always yields the same buffer.
pub fn remap_into(
    baseline: &BaselineUv,
    derived: &mut DerivedUv,
    format: StereoFormat,
    eye: Eye,
    wide: bool,
) -> Result<(), StereoError> {
    if derived.data.len() != baseline.data.len() {
        return Err(StereoError::InvalidArgument(format!(
            "derived uv length {} does not match baseline length {}",
            derived.data.len(),
            baseline.data.len()
        )));
    }
    fill(baseline.as_slice(), &mut derived.data, format, eye, wide);
    Ok(())
}

fn fill(src: &[f32], dst: &mut [f32], format: StereoFormat, eye: Eye, wide: bool) {
    for (from, to) in src.chunks_exact(2).zip(dst.chunks_exact_mut(2)) {
        let (u, v) = remap_pair(from[0], from[1], format, eye, wide);
        to[0] = u;
        to[1] = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    /// A 5x5 grid of coordinates covering the unit square.
    fn grid() -> BaselineUv {
        let mut data = Vec::new();
        for row in 0..5 {
            for col in 0..5 {
                data.push(col as f32 / 4.0);
                data.push(1.0 - row as f32 / 4.0);
            }
        }
        BaselineUv::new(data, 25).unwrap()
    }

    #[test]
    fn baseline_rejects_odd_length() {
        let err = BaselineUv::new(vec![0.0, 0.5, 1.0], 2).unwrap_err();
        assert!(matches!(err, StereoError::InvalidArgument(ref m) if m.contains("odd")));
    }

    #[test]
    fn baseline_rejects_vertex_count_mismatch() {
        let err = BaselineUv::new(vec![0.0; 8], 3).unwrap_err();
        assert!(matches!(err, StereoError::InvalidArgument(_)));
    }

    #[test]
    fn from_pairs_flattens_in_order() {
        let baseline = BaselineUv::from_pairs(&[[0.1, 0.2], [0.3, 0.4]]);
        assert_eq!(baseline.as_slice(), &[0.1, 0.2, 0.3, 0.4]);
        assert_eq!(baseline.vertex_count(), 2);
    }

    #[test]
    fn side_by_side_left_halves_u() {
        let (u, v) = remap_pair(0.8, 0.3, StereoFormat::SideBySide, Eye::Left, false);
        assert!((u - 0.4).abs() < EPS);
        assert!((v - 0.3).abs() < EPS);
    }

    #[test]
    fn wide_clamps_before_right_half() {
        let (u, _) = remap_pair(0.8, 0.3, StereoFormat::SideBySide, Eye::Right, true);
        assert!((u - 1.0).abs() < EPS);
    }

    #[test]
    fn top_bottom_selects_v_half() {
        let (u, v) = remap_pair(0.25, 0.6, StereoFormat::TopBottom, Eye::Left, false);
        assert!((u - 0.25).abs() < EPS);
        assert!((v - 0.3).abs() < EPS);

        let (_, v) = remap_pair(0.25, 0.6, StereoFormat::TopBottom, Eye::Right, false);
        assert!((v - 0.8).abs() < EPS);
    }

    #[test]
    fn mono_narrow_is_identity_for_both_eyes() {
        let baseline = grid();
        for eye in Eye::BOTH {
            let derived = remap(&baseline, StereoFormat::Mono, eye, false);
            assert_eq!(derived.as_slice(), baseline.as_slice());
        }
    }

    #[test]
    fn side_by_side_eyes_stay_in_their_half() {
        let baseline = grid();
        let left = remap(&baseline, StereoFormat::SideBySide, Eye::Left, false);
        let right = remap(&baseline, StereoFormat::SideBySide, Eye::Right, false);
        assert!(left.pairs().all(|[u, _]| u <= 0.5));
        assert!(right.pairs().all(|[u, _]| u >= 0.5));
    }

    #[test]
    fn wide_is_clamped_and_monotone() {
        let samples: Vec<f32> = (0..=20).map(|i| i as f32 / 20.0).collect();
        let mut prev = f32::NEG_INFINITY;
        for u in samples {
            let (mapped, _) = remap_pair(u, 0.5, StereoFormat::Mono, Eye::Left, true);
            assert!(mapped <= 1.0);
            assert!(mapped >= prev);
            prev = mapped;
        }
    }

    #[test]
    fn remap_into_is_unaffected_by_intermediate_calls() {
        let baseline = grid();
        let expected = remap(&baseline, StereoFormat::TopBottom, Eye::Right, true);

        let mut derived = DerivedUv::for_baseline(&baseline);
        remap_into(&baseline, &mut derived, StereoFormat::SideBySide, Eye::Left, false).unwrap();
        remap_into(&baseline, &mut derived, StereoFormat::TopBottom, Eye::Right, true).unwrap();
        remap_into(&baseline, &mut derived, StereoFormat::Mono, Eye::Left, true).unwrap();
        remap_into(&baseline, &mut derived, StereoFormat::TopBottom, Eye::Right, true).unwrap();
        remap_into(&baseline, &mut derived, StereoFormat::TopBottom, Eye::Right, true).unwrap();

        assert_eq!(derived, expected);
    }

    #[test]
    fn remap_into_rejects_mismatched_buffers() {
        let small = BaselineUv::from_pairs(&[[0.0, 0.0]]);
        let mut derived = DerivedUv::for_baseline(&grid());
        let err = remap_into(&small, &mut derived, StereoFormat::Mono, Eye::Left, false);
        assert!(matches!(err, Err(StereoError::InvalidArgument(_))));
    }
}
