use stereovr_common::StereoError;

/// Indexed triangle mesh with separate position and UV attributes.
///
/// `uv_revision` increases whenever the UVs are replaced so GPU copies
/// can tell when to re-upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
    uv_revision: u64,
}

impl Mesh {
    pub fn new(positions: Vec<[f32; 3]>, uvs: Vec<[f32; 2]>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            uvs,
            indices,
            uv_revision: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    pub fn uv_revision(&self) -> u64 {
        self.uv_revision
    }

    /// Replace every UV from a flat `[u, v, ...]` buffer and mark the attribute dirty.
    pub fn set_uvs(&mut self, flat: &[f32]) -> Result<(), StereoError> {
        if flat.len() != self.uvs.len() * 2 {
            return Err(StereoError::InvalidArgument(format!(
                "uv update has {} values, mesh needs {}",
                flat.len(),
                self.uvs.len() * 2
            )));
        }
        for (dst, src) in self.uvs.iter_mut().zip(flat.chunks_exact(2)) {
            *dst = [src[0], src[1]];
        }
        self.uv_revision += 1;
        Ok(())
    }
}
