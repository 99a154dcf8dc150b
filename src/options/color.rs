// Structured fills accepted by color slots: gradients and patterns
//
// A mapping is told apart by its discriminating key: `linearGradient` /
// `radialGradient` for gradients, `patternOptions` for patterns.

use super::animation::ANIMATION_OPTIONS;
use crate::schema::{Schema, SlotDef, SlotKind};

pub static LINEAR_GRADIENT: Schema = Schema {
    name: "LinearGradient",
    capabilities: &[&[
        SlotDef::new("x1", "x1", SlotKind::Number),
        SlotDef::new("y1", "y1", SlotKind::Number),
        SlotDef::new("x2", "x2", SlotKind::Number),
        SlotDef::new("y2", "y2", SlotKind::Number),
    ]],
};

pub static RADIAL_GRADIENT: Schema = Schema {
    name: "RadialGradient",
    capabilities: &[&[
        SlotDef::new("cx", "cx", SlotKind::Number),
        SlotDef::new("cy", "cy", SlotKind::Number),
        SlotDef::new("r", "r", SlotKind::Number),
    ]],
};

pub static GRADIENT: Schema = Schema {
    name: "Gradient",
    capabilities: &[&[
        SlotDef::new("linear_gradient", "linearGradient", SlotKind::Node(&LINEAR_GRADIENT)),
        SlotDef::new("radial_gradient", "radialGradient", SlotKind::Node(&RADIAL_GRADIENT)),
        SlotDef::new("stops", "stops", SlotKind::Stops),
    ]],
};

pub static PATTERN_OPTIONS: Schema = Schema {
    name: "PatternOptions",
    capabilities: &[&[
        SlotDef::new("aspect_ratio", "aspectRatio", SlotKind::Number),
        SlotDef::new("background_color", "backgroundColor", SlotKind::Text),
        SlotDef::new("color", "color", SlotKind::Text),
        SlotDef::new("height", "height", SlotKind::Number),
        SlotDef::new("id", "id", SlotKind::Text),
        SlotDef::new("image", "image", SlotKind::Text),
        SlotDef::new("opacity", "opacity", SlotKind::Float { min: 0.0, max: 1.0 }),
        SlotDef::new("path", "path", SlotKind::Text),
        SlotDef::new("pattern_transform", "patternTransform", SlotKind::Text),
        SlotDef::new("width", "width", SlotKind::Number),
        SlotDef::new("x", "x", SlotKind::Number),
        SlotDef::new("y", "y", SlotKind::Number),
    ]],
};

pub static PATTERN: Schema = Schema {
    name: "Pattern",
    capabilities: &[&[
        SlotDef::new("animation", "animation", SlotKind::NodeOrBool(&ANIMATION_OPTIONS)),
        SlotDef::new("pattern_index", "patternIndex", SlotKind::Integer { min: Some(0) }),
        SlotDef::new("pattern_options", "patternOptions", SlotKind::Node(&PATTERN_OPTIONS)),
    ]],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::value::{Color, SlotValue};
    use serde_json::{json, Value};

    #[test]
    fn test_gradient_from_dict() {
        let data = json!({"radialGradient": {"cx": 0.5, "cy": 0.3, "r": 0.7}, "stops": [[0, "#ffffff"], [1, "#333333"]]});
        let gradient = Node::from_value(&GRADIENT, &data).unwrap();
        assert!(gradient.get("linear_gradient").is_none());
        assert_eq!(Value::Object(gradient.to_dict()), data);
    }

    #[test]
    fn test_color_slot_rejects_nodes_without_discriminator() {
        use crate::error::OptionError;
        use crate::options::axis_marker::AXIS_MARKER;

        let pattern = Node::new(&PATTERN).with("pattern_index", 2).unwrap();
        assert!(matches!(
            Node::new(&AXIS_MARKER).with("color", pattern),
            Err(OptionError::InvalidValue { .. })
        ));

        let gradient = Node::new(&GRADIENT).with("stops", json!([[0, "#fff"]])).unwrap();
        assert!(matches!(
            Node::new(&AXIS_MARKER).with("color", gradient),
            Err(OptionError::InvalidValue { .. })
        ));

        // an empty discriminator is no discriminator
        let bad = json!({"linearGradient": {}, "stops": [[0, "#fff"]]});
        assert!(Node::new(&AXIS_MARKER).with("color", bad).is_err());
    }

    #[test]
    fn test_color_nodes_round_trip() {
        use crate::options::axis_marker::AXIS_MARKER;

        let pattern = Node::new(&PATTERN)
            .with("pattern_index", 2)
            .unwrap()
            .with("pattern_options", json!({"path": "M 0 0 L 5 5", "width": 5}))
            .unwrap();
        let gradient = Node::new(&GRADIENT)
            .with("linear_gradient", json!({"x1": 0, "y2": 1}))
            .unwrap()
            .with("stops", json!([[0, "#fff"], [1, "#000"]]))
            .unwrap();

        for (color, is_pattern) in [(pattern, true), (gradient, false)] {
            let marker = Node::new(&AXIS_MARKER).with("color", color.clone()).unwrap();
            let expected = if is_pattern {
                Color::Pattern(Box::new(color))
            } else {
                Color::Gradient(Box::new(color))
            };
            assert_eq!(marker.get("color"), Some(&SlotValue::Color(expected)));
            assert_eq!(Node::from_dict(&AXIS_MARKER, &marker.to_dict()).unwrap(), marker);
        }
    }

    #[test]
    fn test_pattern_opacity_range() {
        let bad = json!({"patternOptions": {"opacity": 2}});
        assert!(Node::from_value(&PATTERN, &bad).is_err());
    }
}
