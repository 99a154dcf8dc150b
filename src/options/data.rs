// Series data points

use super::series::accessibility::POINT_ACCESSIBILITY;
use super::series::drag_drop::DRAG_DROP_OPTIONS;
use super::series::events::POINT_EVENTS;
use super::series::labels::DATA_LABEL;
use super::series::marker::MARKER;
use crate::schema::{Schema, SlotDef, SlotKind};

/// Slots every data point has.
pub static DATA_BASE: &[SlotDef] = &[
    SlotDef::new("accessibility", "accessibility", SlotKind::Node(&POINT_ACCESSIBILITY)),
    SlotDef::new("class_name", "className", SlotKind::Text),
    SlotDef::new("color", "color", SlotKind::Color),
    SlotDef::new("color_index", "colorIndex", SlotKind::Integer { min: Some(0) }),
    SlotDef::new("custom", "custom", SlotKind::Map),
    SlotDef::new("description", "description", SlotKind::Text),
    SlotDef::new("events", "events", SlotKind::Node(&POINT_EVENTS)),
    SlotDef::new("id", "id", SlotKind::Text),
    SlotDef::new("label_rank", "labelrank", SlotKind::Number).aliased(&["labelRank"]),
    SlotDef::new("name", "name", SlotKind::Text),
    SlotDef::new("selected", "selected", SlotKind::Bool),
];

pub static INTERACTIVE_POINT: &[SlotDef] = &[
    SlotDef::new("data_labels", "dataLabels", SlotKind::Node(&DATA_LABEL)),
    SlotDef::new("drag_drop", "dragDrop", SlotKind::Node(&DRAG_DROP_OPTIONS)),
];

/// A point with `x` and `y` values.
pub static CARTESIAN_DATA: Schema = Schema {
    name: "CartesianData",
    capabilities: &[
        DATA_BASE,
        INTERACTIVE_POINT,
        &[
            SlotDef::new("marker", "marker", SlotKind::Node(&MARKER)),
            SlotDef::new("x", "x", SlotKind::Number),
            SlotDef::new("y", "y", SlotKind::Number),
        ],
    ],
};

/// A word with a relative weight.
pub static WORDCLOUD_DATA: Schema = Schema {
    name: "WordcloudData",
    capabilities: &[
        DATA_BASE,
        INTERACTIVE_POINT,
        &[SlotDef::new("weight", "weight", SlotKind::Number)],
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::value::SlotValue;
    use serde_json::{json, Value};

    #[test]
    fn test_label_rank_spellings() {
        for key in ["labelrank", "labelRank", "label_rank"] {
            let word = Node::from_value(&WORDCLOUD_DATA, &json!({ key: 3, "name": "rust" })).unwrap();
            assert_eq!(word.get("label_rank").and_then(SlotValue::as_i64), Some(3), "{key}");
            assert_eq!(Value::Object(word.to_dict()), json!({"labelrank": 3, "name": "rust"}));
        }
    }

    #[test]
    fn test_external_key_wins_over_alias() {
        let word = Node::from_value(&WORDCLOUD_DATA, &json!({"labelRank": 1, "labelrank": 2})).unwrap();
        assert_eq!(word.get("label_rank").and_then(SlotValue::as_i64), Some(2));
    }

    #[test]
    fn test_cartesian_point() {
        let point = Node::from_value(&CARTESIAN_DATA, &json!({"x": 1, "y": 2.5, "marker": {"symbol": "circle"}})).unwrap();
        assert_eq!(point.get("y").and_then(SlotValue::as_f64), Some(2.5));
        assert_eq!(point.to_dict()["marker"], json!({"symbol": "circle"}));
    }
}
