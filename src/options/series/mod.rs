// Series option capabilities
//
// Each group below is one capability a series type can have. Concrete series
// schemas list the groups they are made of; the shared generic options are
// the `GENERIC_TYPE_OPTIONS` schema.

pub mod accessibility;
pub mod drag_drop;
pub mod events;
pub mod labels;
pub mod marker;
pub mod states;
pub mod tooltip;

use accessibility::TYPE_OPTIONS_ACCESSIBILITY;
use events::{ON_POINT_OPTIONS, POINT, SERIES_EVENTS};
use labels::{DATA_LABEL, SERIES_LABEL};
use marker::MARKER;
use states::SERIES_STATES;
use tooltip::TOOLTIP;

use crate::options::animation::ANIMATION_OPTIONS;
use crate::options::constants::{CURSORS, DASH_STYLES};
use crate::schema::{Schema, SlotDef, SlotKind};

pub static GENERIC_CORE: &[SlotDef] = &[
    SlotDef::new("allow_point_select", "allowPointSelect", SlotKind::Bool),
    SlotDef::new("animation", "animation", SlotKind::NodeOrBool(&ANIMATION_OPTIONS)),
    SlotDef::new("class_name", "className", SlotKind::Text),
    SlotDef::new("clip", "clip", SlotKind::Bool),
    SlotDef::new("color", "color", SlotKind::Color),
    SlotDef::new(
        "cursor",
        "cursor",
        SlotKind::Enum {
            allowed: CURSORS,
            fold_case: true,
        },
    ),
    SlotDef::new("custom", "custom", SlotKind::Map),
    SlotDef::new(
        "dash_style",
        "dashStyle",
        SlotKind::Enum {
            allowed: DASH_STYLES,
            fold_case: false,
        },
    ),
    SlotDef::new("description", "description", SlotKind::Text),
    SlotDef::new("enable_mouse_tracking", "enableMouseTracking", SlotKind::Bool),
    SlotDef::new("events", "events", SlotKind::Node(&SERIES_EVENTS)),
    SlotDef::new("include_in_data_export", "includeInDataExport", SlotKind::Bool),
    SlotDef::new("keys", "keys", SlotKind::Strings),
    SlotDef::new("linked_to", "linkedTo", SlotKind::Text),
    SlotDef::new("opacity", "opacity", SlotKind::Float { min: 0.0, max: 1.0 }),
    SlotDef::new("point_description_formatter", "pointDescriptionFormatter", SlotKind::Callback),
    SlotDef::new("selected", "selected", SlotKind::Bool),
    SlotDef::new("show_checkbox", "showCheckbox", SlotKind::Bool),
    SlotDef::new("show_in_legend", "showInLegend", SlotKind::Bool),
    SlotDef::new("skip_keyboard_navigation", "skipKeyboardNavigation", SlotKind::Bool),
    SlotDef::new("sticky_tracking", "stickyTracking", SlotKind::Bool),
    SlotDef::new("threshold", "threshold", SlotKind::Number),
    SlotDef::new("turbo_threshold", "turboThreshold", SlotKind::Integer { min: Some(0) }),
    SlotDef::new("visible", "visible", SlotKind::Bool),
];

pub static HAS_ACCESSIBILITY: &[SlotDef] = &[SlotDef::new(
    "accessibility",
    "accessibility",
    SlotKind::Node(&TYPE_OPTIONS_ACCESSIBILITY),
)];

/// One data label config or a list of them.
pub static HAS_DATA_LABELS: &[SlotDef] = &[SlotDef::new("data_labels", "dataLabels", SlotKind::NodeOrList(&DATA_LABEL))];

pub static HAS_LABEL: &[SlotDef] = &[SlotDef::new("label", "label", SlotKind::Node(&SERIES_LABEL))];

pub static HAS_MARKER: &[SlotDef] = &[SlotDef::new("marker", "marker", SlotKind::Node(&MARKER))];

pub static HAS_POINT: &[SlotDef] = &[
    SlotDef::new("on_point", "onPoint", SlotKind::Node(&ON_POINT_OPTIONS)),
    SlotDef::new("point", "point", SlotKind::Node(&POINT)),
];

pub static HAS_STATES: &[SlotDef] = &[SlotDef::new("states", "states", SlotKind::Node(&SERIES_STATES))];

pub static HAS_TOOLTIP: &[SlotDef] = &[SlotDef::new("tooltip", "tooltip", SlotKind::Node(&TOOLTIP))];

/// Identity and placement of a series instance within a chart.
pub static SERIES_BASE: &[SlotDef] = &[
    SlotDef::new("id", "id", SlotKind::Text),
    SlotDef::new("index", "index", SlotKind::Integer { min: Some(0) }),
    SlotDef::new("legend_index", "legendIndex", SlotKind::Integer { min: Some(0) }),
    SlotDef::new("name", "name", SlotKind::Text),
    SlotDef::new("stack", "stack", SlotKind::NumberOrText),
    SlotDef::new("x_axis", "xAxis", SlotKind::NumberOrText),
    SlotDef::new("y_axis", "yAxis", SlotKind::NumberOrText),
    SlotDef::new("z_index", "zIndex", SlotKind::Number),
];

/// Options shared by every series type.
pub static GENERIC_TYPE_OPTIONS: Schema = Schema {
    name: "GenericTypeOptions",
    capabilities: &[
        GENERIC_CORE,
        HAS_ACCESSIBILITY,
        HAS_DATA_LABELS,
        HAS_LABEL,
        HAS_MARKER,
        HAS_POINT,
        HAS_STATES,
        HAS_TOOLTIP,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptionError;
    use crate::node::Node;
    use crate::value::SlotValue;
    use serde_json::{json, Value};

    #[test]
    fn test_capabilities_compose() {
        let names: Vec<_> = GENERIC_TYPE_OPTIONS.slots().map(|s| s.name).collect();
        assert_eq!(names.first(), Some(&"allow_point_select"));
        assert_eq!(names.last(), Some(&"tooltip"));
        assert!(names.contains(&"marker"));
        assert!(GENERIC_TYPE_OPTIONS.check_keys().is_ok());
    }

    #[test]
    fn test_cursor_case_folded() {
        let opts = Node::from_value(&GENERIC_TYPE_OPTIONS, &json!({"cursor": "Pointer"})).unwrap();
        assert_eq!(opts.get("cursor").and_then(SlotValue::as_str), Some("pointer"));
        assert!(Node::from_value(&GENERIC_TYPE_OPTIONS, &json!({"cursor": "finger"})).is_err());
    }

    #[test]
    fn test_turbo_threshold_minimum() {
        assert!(Node::from_value(&GENERIC_TYPE_OPTIONS, &json!({"turboThreshold": 0})).is_ok());
        assert!(Node::from_value(&GENERIC_TYPE_OPTIONS, &json!({"turboThreshold": -5})).is_err());
    }

    #[test]
    fn test_data_labels_keep_shape() {
        let single = Node::from_value(&GENERIC_TYPE_OPTIONS, &json!({"dataLabels": {"enabled": true}})).unwrap();
        assert_eq!(Value::Object(single.to_dict()), json!({"dataLabels": {"enabled": true}}));

        let many = json!({"dataLabels": [{"enabled": true}, {"format": "{point.name}"}]});
        let list = Node::from_value(&GENERIC_TYPE_OPTIONS, &many).unwrap();
        assert_eq!(Value::Object(list.to_dict()), many);
    }

    #[test]
    fn test_nested_error_names_inner_slot() {
        let data = json!({"marker": {"states": {"hover": {"radius": "big"}}}});
        match Node::from_value(&GENERIC_TYPE_OPTIONS, &data) {
            Err(OptionError::InvalidValue { slot, .. }) => assert_eq!(slot, "MarkerState.radius"),
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_false_and_zero_survive_trim() {
        let data = json!({"visible": false, "threshold": 0, "states": {"hover": {"enabled": false}}, "tooltip": {}});
        let opts = Node::from_value(&GENERIC_TYPE_OPTIONS, &data).unwrap();
        assert_eq!(
            Value::Object(opts.to_dict()),
            json!({"threshold": 0, "visible": false, "states": {"hover": {"enabled": false}}})
        );
    }
}
