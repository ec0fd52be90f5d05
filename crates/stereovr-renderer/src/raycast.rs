//! Ray picking against scene graph colliders.

use glam::{Affine3A, Vec3};

use crate::graph::{Collider, NodeId, SceneGraph};

/// A half-line with a unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray. Returns `None` for a zero or non-finite direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// The pointing ray of a controller: from its origin along its local -Z.
    pub fn from_transform(transform: &Affine3A) -> Self {
        let origin = transform.translation.into();
        let direction = transform
            .transform_vector3(Vec3::NEG_Z)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z);
        Self { origin, direction }
    }

    /// Evaluate the point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// One ray hit, `distance` measured in world units from the ray origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub node: NodeId,
    pub distance: f32,
    pub point: Vec3,
}

/// Slab test. Returns the entry distance, or the exit distance when the
/// origin is inside the box.
pub fn intersect_aabb(origin: Vec3, direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = Vec3::new(
        safe_recip(direction.x),
        safe_recip(direction.y),
        safe_recip(direction.z),
    );
    let t0 = (min - origin) * inv;
    let t1 = (max - origin) * inv;
    let t_near = t0.min(t1).max_element();
    let t_far = t0.max(t1).min_element();

    if t_far < 0.0 || t_near > t_far {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// Ray/sphere test for a sphere centred at the origin. Returns the nearest
/// non-negative parameter; from inside that is the exit point.
pub fn intersect_sphere(origin: Vec3, direction: Vec3, radius: f32) -> Option<f32> {
    let a = direction.dot(direction);
    if a <= f32::EPSILON {
        return None;
    }
    let b = 2.0 * origin.dot(direction);
    let c = origin.dot(origin) - radius * radius;
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t0 = (-b - sq) / (2.0 * a);
    let t1 = (-b + sq) / (2.0 * a);
    if t0 >= 0.0 {
        Some(t0)
    } else if t1 >= 0.0 {
        Some(t1)
    } else {
        None
    }
}

/// Intersect `ray` with the colliders of `candidates` in `graph`.
///
/// Hidden nodes, nodes without a collider, and ids not in the graph are
/// skipped. Results are sorted nearest first.
pub fn intersect_nodes(
    ray: &Ray,
    graph: &SceneGraph,
    candidates: &[NodeId],
) -> Vec<Intersection> {
    let mut hits: Vec<Intersection> = candidates
        .iter()
        .filter_map(|id| graph.node(*id))
        .filter(|node| node.visible)
        .filter_map(|node| {
            // Test in local space. The ray parameter is preserved by the
            // affine map, so `t` is still a world distance.
            let inverse = node.transform.inverse();
            let local_origin = inverse.transform_point3(ray.origin);
            let local_dir = inverse.transform_vector3(ray.direction);
            let t = match node.collider {
                Collider::None => None,
                Collider::Box { half_extents } => {
                    intersect_aabb(local_origin, local_dir, -half_extents, half_extents)
                }
                Collider::Sphere { radius } => intersect_sphere(local_origin, local_dir, radius),
            }?;
            Some(Intersection {
                node: node.id,
                distance: t,
                point: ray.at(t),
            })
        })
        .collect();

    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

fn safe_recip(x: f32) -> f32 {
    if x.abs() < 1e-8 {
        1e8_f32.copysign(x)
    } else {
        1.0 / x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Layer, Material, Mesh, NodeDesc};
    use glam::Quat;
    use stereovr_common::Color;

    fn add(graph: &mut SceneGraph, name: &str, transform: Affine3A, collider: Collider) -> NodeId {
        graph.add_node(NodeDesc {
            name: name.into(),
            mesh: Mesh::new(vec![], vec![], vec![]),
            material: Material::Color(Color::WHITE),
            transform,
            layer: Layer::Both,
            collider,
        })
    }

    fn unit_box() -> Collider {
        Collider::Box {
            half_extents: Vec3::splat(0.5),
        }
    }

    #[test]
    fn ray_new_rejects_zero_direction() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0)).unwrap();
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ray_from_transform_points_down_negative_z() {
        let ray = Ray::from_transform(&Affine3A::from_translation(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(ray.origin, Vec3::new(1.0, 2.0, 3.0));
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-6);

        let turned = Affine3A::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let ray = Ray::from_transform(&turned);
        assert!((ray.direction - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn aabb_hit_and_miss() {
        let t = intersect_aabb(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::NEG_Z,
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert!((t.unwrap() - 4.0).abs() < 1e-5);

        let miss = intersect_aabb(
            Vec3::new(3.0, 0.0, 5.0),
            Vec3::NEG_Z,
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert!(miss.is_none());
    }

    #[test]
    fn aabb_behind_origin_is_missed() {
        let t = intersect_aabb(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::Z,
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn sphere_from_inside_hits_the_shell() {
        let t = intersect_sphere(Vec3::ZERO, Vec3::NEG_Z, 500.0).unwrap();
        assert!((t - 500.0).abs() < 1e-2);
    }

    #[test]
    fn sphere_from_outside_hits_front() {
        let t = intersect_sphere(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-4);
    }

    #[test]
    fn nodes_sorted_nearest_first() {
        let mut graph = SceneGraph::new("test", Color::BLACK);
        let far = add(
            &mut graph,
            "far",
            Affine3A::from_translation(Vec3::new(0.0, 0.0, -6.0)),
            unit_box(),
        );
        let near = add(
            &mut graph,
            "near",
            Affine3A::from_translation(Vec3::new(0.0, 0.0, -3.0)),
            unit_box(),
        );
        let ray = Ray::from_transform(&Affine3A::IDENTITY);
        let hits = intersect_nodes(&ray, &graph, &[far, near]);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].node, near);
        assert!((hits[0].distance - 2.5).abs() < 1e-5);
        assert!((hits[0].point.z + 2.5).abs() < 1e-5);
        assert_eq!(hits[1].node, far);
    }

    #[test]
    fn only_candidates_are_tested() {
        let mut graph = SceneGraph::new("test", Color::BLACK);
        let _other = add(
            &mut graph,
            "other",
            Affine3A::from_translation(Vec3::new(0.0, 0.0, -3.0)),
            unit_box(),
        );
        let ray = Ray::from_transform(&Affine3A::IDENTITY);
        assert!(intersect_nodes(&ray, &graph, &[]).is_empty());
    }

    #[test]
    fn hidden_and_colliderless_nodes_are_skipped() {
        let mut graph = SceneGraph::new("test", Color::BLACK);
        let at = Affine3A::from_translation(Vec3::new(0.0, 0.0, -3.0));
        let hidden = add(&mut graph, "hidden", at, unit_box());
        let bare = add(&mut graph, "bare", at, Collider::None);
        graph.node_mut(hidden).unwrap().visible = false;
        let ray = Ray::from_transform(&Affine3A::IDENTITY);
        assert!(intersect_nodes(&ray, &graph, &[hidden, bare]).is_empty());
    }

    #[test]
    fn mirrored_sphere_is_still_hit_from_inside() {
        let mut graph = SceneGraph::new("test", Color::BLACK);
        let transform = Affine3A::from_scale_rotation_translation(
            Vec3::new(-1.0, 1.0, 1.0),
            Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2),
            Vec3::ZERO,
        );
        let sphere = add(&mut graph, "sphere", transform, Collider::Sphere { radius: 50.0 });
        let ray = Ray::from_transform(&Affine3A::from_translation(Vec3::new(0.2, -0.3, 0.0)));
        let hits = intersect_nodes(&ray, &graph, &[sphere]);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].point.length() - 50.0).abs() < 1e-2);
    }
}
