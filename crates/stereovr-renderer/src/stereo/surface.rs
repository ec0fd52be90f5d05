use std::f32::consts::FRAC_PI_2;

use glam::{Affine3A, Quat, Vec3};
use stereovr_common::{Color, Eye, StereoError, StereoFormat};
use tracing::debug;

use super::uv::{remap_into, BaselineUv, DerivedUv};
use crate::graph::{Collider, Layer, Material, NodeDesc, NodeId, SceneGraph};
use crate::sphere::{generate_sphere_mesh, SphereSpec};

/// One eye's sphere: its baseline UVs, the derived UVs, and the graph node.
#[derive(Debug, Clone)]
pub struct EyeSurface {
    eye: Eye,
    baseline: BaselineUv,
    derived: DerivedUv,
    node: NodeId,
}

impl EyeSurface {
    pub fn eye(&self) -> Eye {
        self.eye
    }

    pub fn baseline(&self) -> &BaselineUv {
        &self.baseline
    }

    pub fn derived(&self) -> &DerivedUv {
        &self.derived
    }

    pub fn node(&self) -> NodeId {
        self.node
    }
}

/// The left and right video spheres and the stereo parameters they share.
#[derive(Debug, Clone)]
pub struct StereoSurface {
    left: EyeSurface,
    right: EyeSurface,
    format: StereoFormat,
    wide: bool,
}

impl StereoSurface {
    /// Add both eye spheres to `graph` and capture their baseline UVs.
    ///
    /// The spheres are mirrored on X so the texture reads correctly from
    /// inside and turned -90° about Y so the frame centre faces -Z.
    pub fn build(
        graph: &mut SceneGraph,
        spec: &SphereSpec,
        format: StereoFormat,
        wide: bool,
    ) -> Result<Self, StereoError> {
        if !(spec.radius > 0.0) {
            return Err(StereoError::InvalidArgument(format!(
                "sphere radius must be positive, got {}",
                spec.radius
            )));
        }

        let transform = Affine3A::from_scale_rotation_translation(
            Vec3::new(-1.0, 1.0, 1.0),
            Quat::from_rotation_y(-FRAC_PI_2),
            Vec3::ZERO,
        );

        let mut make_eye = |eye: Eye| -> Result<EyeSurface, StereoError> {
            let mesh = generate_sphere_mesh(spec);
            let baseline = BaselineUv::from_pairs(mesh.uvs());
            if baseline.vertex_count() != mesh.vertex_count() {
                return Err(StereoError::InvalidArgument(format!(
                    "sphere uv count {} does not match vertex count {}",
                    baseline.vertex_count(),
                    mesh.vertex_count()
                )));
            }
            let derived = DerivedUv::for_baseline(&baseline);
            let node = graph.add_node(NodeDesc {
                name: format!("video-sphere-{eye}"),
                mesh,
                material: Material::VideoFrame { tint: Color::WHITE },
                transform,
                layer: Layer::Only(eye),
                collider: Collider::Sphere {
                    radius: spec.radius,
                },
            });
            Ok(EyeSurface {
                eye,
                baseline,
                derived,
                node,
            })
        };

        let left = make_eye(Eye::Left)?;
        let right = make_eye(Eye::Right)?;

        let mut surface = Self {
            left,
            right,
            format,
            wide,
        };
        surface.set_parameters(graph, format, wide)?;
        Ok(surface)
    }

    pub fn format(&self) -> StereoFormat {
        self.format
    }

    pub fn wide_field(&self) -> bool {
        self.wide
    }

    pub fn eye(&self, eye: Eye) -> &EyeSurface {
        match eye {
            Eye::Left => &self.left,
            Eye::Right => &self.right,
        }
    }

    /// Which eye's sphere owns `node`, if any.
    pub fn eye_for_node(&self, node: NodeId) -> Option<Eye> {
        [&self.left, &self.right]
            .into_iter()
            .find(|s| s.node == node)
            .map(|s| s.eye)
    }

    /// Recompute both eyes from their baselines and push the result into
    /// the sphere meshes in `graph`, marking their UV attributes dirty.
    pub fn set_parameters(
        &mut self,
        graph: &mut SceneGraph,
        format: StereoFormat,
        wide: bool,
    ) -> Result<(), StereoError> {
        let mut staged = Vec::with_capacity(2);
        for surface in [&self.left, &self.right] {
            let Some(node) = graph.node(surface.node) else {
                return Err(StereoError::NotReady(format!(
                    "{} sphere is not in the graph",
                    surface.eye
                )));
            };
            if node.mesh.uvs().len() != surface.baseline.vertex_count() {
                return Err(StereoError::InvalidArgument(format!(
                    "{} sphere has {} uvs, baseline has {}",
                    surface.eye,
                    node.mesh.uvs().len(),
                    surface.baseline.vertex_count()
                )));
            }
            let mut derived = surface.derived.clone();
            remap_into(&surface.baseline, &mut derived, format, surface.eye, wide)?;
            staged.push(derived);
        }

        // Nothing is written until both eyes have been checked.
        for (surface, derived) in [&mut self.left, &mut self.right].into_iter().zip(staged) {
            if let Some(node) = graph.node_mut(surface.node) {
                node.mesh.set_uvs(derived.as_slice())?;
            }
            surface.derived = derived;
        }

        self.format = format;
        self.wide = wide;
        debug!(format = %format, wide, "stereo parameters applied");
        Ok(())
    }

    /// Parse a format name at the API boundary and apply it.
    pub fn set_format_named(
        &mut self,
        graph: &mut SceneGraph,
        name: &str,
        wide: bool,
    ) -> Result<(), StereoError> {
        let format: StereoFormat = name.parse()?;
        self.set_parameters(graph, format, wide)
    }
}
