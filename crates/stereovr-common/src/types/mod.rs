mod color;
mod core;
mod stereo;

pub use self::core::*;
pub use color::*;
pub use stereo::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#222222").unwrap();
        assert_eq!(c, Color::from_rgba(0x22, 0x22, 0x22, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("00ff00").unwrap();
        assert_eq!(c, Color::from_rgba(0, 255, 0, 255));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_to_hex_opaque() {
        let c = Color::from_rgba(255, 0, 128, 255);
        assert_eq!(c.to_hex(), "#ff0080");
    }

    #[test]
    fn color_to_linear_white_is_one() {
        let [r, g, b, a] = Color::WHITE.to_linear_f64();
        assert!((r - 1.0).abs() < 1e-9);
        assert!((g - 1.0).abs() < 1e-9);
        assert!((b - 1.0).abs() < 1e-9);
        assert!((a - 1.0).abs() < 1e-9);
    }

    #[test]
    fn scene_kind_other_flips() {
        assert_eq!(SceneKind::Home.other(), SceneKind::Video);
        assert_eq!(SceneKind::Video.other(), SceneKind::Home);
    }

    #[test]
    fn controller_slot_bounds() {
        assert!(ControllerSlot::new(0).is_some());
        assert!(ControllerSlot::new(1).is_some());
        assert!(ControllerSlot::new(2).is_none());
        assert_eq!(ControllerSlot::all().count(), MAX_CONTROLLERS);
    }

    #[test]
    fn controller_node_ids_are_distinct() {
        let ids: Vec<ControllerNodeId> = ControllerSlot::all()
            .flat_map(ControllerNodeId::pair)
            .collect();
        assert_eq!(ids.len(), 4);
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn controller_node_id_display() {
        let id = ControllerNodeId::new(ControllerSlot::SECOND, ControllerRole::Grip);
        assert_eq!(id.to_string(), "grip-1");
    }
}
