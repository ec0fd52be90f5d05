use glam::{Affine3A, Vec3};
use stereovr_common::{Color, ControllerSlot, SceneKind, StereoError};
use stereovr_config::schema::ScenesConfig;
use stereovr_renderer::sphere::generate_box_mesh;
use stereovr_renderer::{Collider, Intersection, Layer, Material, NodeDesc, NodeId, SceneGraph};

use crate::handlers::InteractionHandlers;
use crate::scene::{Scene, SceneSignal};

pub(crate) fn parse_color(field: &str, hex: &str) -> Result<Color, StereoError> {
    Color::from_hex(hex)
        .ok_or_else(|| StereoError::InvalidArgument(format!("{field}: invalid color '{hex}'")))
}

/// Landing scene: a single menu box that opens the video scene.
pub struct HomeScene {
    graph: SceneGraph,
    handlers: InteractionHandlers,
    interactive: Vec<NodeId>,
    menu_box: NodeId,
}

impl HomeScene {
    pub fn new(config: &ScenesConfig) -> Result<Self, StereoError> {
        let background = parse_color("scenes.home_background", &config.home_background)?;
        let box_color = parse_color("scenes.menu_box_color", &config.menu_box_color)?;
        let size = config.menu_box_size as f32;
        if !(size > 0.0) {
            return Err(StereoError::InvalidArgument(format!(
                "menu box size must be positive, got {size}"
            )));
        }

        let mut graph = SceneGraph::new("home", background);
        let menu_box = graph.add_node(NodeDesc {
            name: "menu-box".into(),
            mesh: generate_box_mesh(size),
            material: Material::Color(box_color),
            transform: Affine3A::from_translation(Vec3::new(
                0.0,
                0.0,
                -(config.menu_box_distance as f32),
            )),
            layer: Layer::Both,
            collider: Collider::Box {
                half_extents: Vec3::splat(size * 0.5),
            },
        });

        Ok(Self {
            graph,
            handlers: InteractionHandlers::new(),
            interactive: vec![menu_box],
            menu_box,
        })
    }

    pub fn menu_box(&self) -> NodeId {
        self.menu_box
    }
}

impl Scene for HomeScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Home
    }

    fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    fn handlers(&self) -> &InteractionHandlers {
        &self.handlers
    }

    fn handlers_mut(&mut self) -> &mut InteractionHandlers {
        &mut self.handlers
    }

    fn interactive(&self) -> &[NodeId] {
        &self.interactive
    }

    fn on_select(&mut self, slot: ControllerSlot, hit: &Intersection) -> Option<SceneSignal> {
        if hit.node != self.menu_box {
            return None;
        }
        tracing::info!("Menu box selected by controller {slot}");
        Some(SceneSignal::SelectionRequested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> HomeScene {
        HomeScene::new(&ScenesConfig::default()).unwrap()
    }

    #[test]
    fn builds_menu_box_in_front() {
        let scene = home();
        let node = scene.graph().find_by_name("menu-box").unwrap();
        assert_eq!(node.id, scene.menu_box());
        assert_eq!(node.transform.translation.z, -3.0);
        assert_eq!(scene.interactive(), &[scene.menu_box()]);
        assert_eq!(scene.graph().background, Color::from_hex("#222222").unwrap());
    }

    #[test]
    fn forward_ray_hits_menu_box() {
        let scene = home();
        let hit = scene.hit_test(&Affine3A::IDENTITY).unwrap();
        assert_eq!(hit.node, scene.menu_box());
        assert!((hit.distance - 2.5).abs() < 1e-4);
    }

    #[test]
    fn backward_ray_misses() {
        let scene = home();
        let turned = Affine3A::from_rotation_y(std::f32::consts::PI);
        assert!(scene.hit_test(&turned).is_none());
    }

    #[test]
    fn select_requires_attached_handlers() {
        let mut scene = home();
        let slot = ControllerSlot::FIRST;
        assert_eq!(scene.select_start(slot, &Affine3A::IDENTITY), None);

        scene.activate_interaction();
        assert_eq!(
            scene.select_start(slot, &Affine3A::IDENTITY),
            Some(SceneSignal::SelectionRequested)
        );
        assert!(scene.select_end(slot));
    }

    #[test]
    fn invalid_color_is_rejected() {
        let config = ScenesConfig {
            menu_box_color: "blue".into(),
            ..Default::default()
        };
        assert!(matches!(
            HomeScene::new(&config),
            Err(StereoError::InvalidArgument(_))
        ));
    }
}
