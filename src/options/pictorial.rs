use super::constants::STACKINGS;
use super::data::CARTESIAN_DATA;
use super::series::{
    GENERIC_CORE, HAS_ACCESSIBILITY, HAS_DATA_LABELS, HAS_LABEL, HAS_MARKER, HAS_POINT, HAS_STATES, HAS_TOOLTIP,
    SERIES_BASE,
};
use crate::schema::{Schema, SlotDef, SlotKind};

/// Image of one pictorial column: an SVG path and its scale.
pub static PICTORIAL_PATHS: Schema = Schema {
    name: "PictorialPaths",
    capabilities: &[&[
        SlotDef::new("definition", "definition", SlotKind::Text),
        SlotDef::new("max", "max", SlotKind::Number),
    ]],
};

pub static PICTORIAL_OPTIONS: &[SlotDef] = &[
    SlotDef::new("color_index", "colorIndex", SlotKind::Integer { min: Some(0) }),
    SlotDef::new("crisp", "crisp", SlotKind::Bool),
    SlotDef::new("group_padding", "groupPadding", SlotKind::Number),
    SlotDef::new("grouping", "grouping", SlotKind::Bool),
    SlotDef::new("paths", "paths", SlotKind::NodeOrList(&PICTORIAL_PATHS)),
    SlotDef::new("point_padding", "pointPadding", SlotKind::Number),
    SlotDef::new("point_width", "pointWidth", SlotKind::Number),
    SlotDef::new(
        "stacking",
        "stacking",
        SlotKind::Enum {
            allowed: STACKINGS,
            fold_case: true,
        },
    ),
];

pub static PICTORIAL_SERIES: Schema = Schema {
    name: "PictorialSeries",
    capabilities: &[
        SERIES_BASE,
        &[SlotDef::new("data", "data", SlotKind::DataPoints(&CARTESIAN_DATA))],
        GENERIC_CORE,
        HAS_ACCESSIBILITY,
        HAS_DATA_LABELS,
        HAS_LABEL,
        HAS_MARKER,
        HAS_POINT,
        HAS_STATES,
        HAS_TOOLTIP,
        PICTORIAL_OPTIONS,
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
    fn test_data_point_shapes() {
        let data = json!({"data": [3, [1, 4], ["apples", 5], {"y": 6, "name": "pears"}, null]});
        let series = Node::from_value(&PICTORIAL_SERIES, &data).unwrap();
        let points = series.get("data").and_then(SlotValue::as_nodes).unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(
            Value::Object(series.to_dict()),
            json!({"data": [{"y": 3}, {"x": 1, "y": 4}, {"name": "apples", "y": 5}, {"name": "pears", "y": 6}, {}]})
        );
    }

    #[test]
    fn test_single_point_wrapped() {
        let series = Node::from_value(&PICTORIAL_SERIES, &json!({"data": {"y": 1}})).unwrap();
        assert_eq!(series.to_dict()["data"], json!([{"y": 1}]));
    }

    #[test]
    fn test_bad_data_point() {
        let err = Node::from_value(&PICTORIAL_SERIES, &json!({"data": [true]})).unwrap_err();
        assert!(matches!(err, OptionError::InvalidNodeShape { .. }));
    }

    #[test]
    fn test_paths_single_or_list() {
        let one = json!({"paths": {"definition": "M 0 0 L 10 0 L 10 10 Z", "max": 100}});
        let series = Node::from_value(&PICTORIAL_SERIES, &one).unwrap();
        assert_eq!(Value::Object(series.to_dict()), one);

        let many = json!({"paths": [{"definition": "M 0 0"}, {"definition": "M 1 1", "max": 5}]});
        let series = Node::from_value(&PICTORIAL_SERIES, &many).unwrap();
        assert_eq!(Value::Object(series.to_dict()), many);
    }

    #[test]
    fn test_series_base_references() {
        let series = Node::from_value(&PICTORIAL_SERIES, &json!({"xAxis": "secondary", "yAxis": 1, "name": "Fruit"})).unwrap();
        assert_eq!(series.get("x_axis").and_then(SlotValue::as_str), Some("secondary"));
        assert_eq!(series.get("y_axis").and_then(SlotValue::as_i64), Some(1));
    }
}
