use crate::schema::{Schema, SlotDef, SlotKind};

pub static TOOLTIP: Schema = Schema {
    name: "Tooltip",
    capabilities: &[&[
        SlotDef::new("cluster_format", "clusterFormat", SlotKind::Text),
        SlotDef::new("date_time_label_formats", "dateTimeLabelFormats", SlotKind::Map),
        SlotDef::new("distance", "distance", SlotKind::Number),
        SlotDef::new("follow_pointer", "followPointer", SlotKind::Bool),
        SlotDef::new("follow_touch_move", "followTouchMove", SlotKind::Bool),
        SlotDef::new("footer_format", "footerFormat", SlotKind::Text),
        SlotDef::new("format", "format", SlotKind::Text),
        SlotDef::new("header_format", "headerFormat", SlotKind::Text),
        SlotDef::new("null_format", "nullFormat", SlotKind::Text),
        SlotDef::new("null_formatter", "nullFormatter", SlotKind::Callback),
        SlotDef::new("point_format", "pointFormat", SlotKind::Text),
        SlotDef::new("point_formatter", "pointFormatter", SlotKind::Callback),
        SlotDef::new("split", "split", SlotKind::Bool),
        SlotDef::new("value_decimals", "valueDecimals", SlotKind::Integer { min: Some(0) }),
        SlotDef::new("value_prefix", "valuePrefix", SlotKind::Text),
        SlotDef::new("value_suffix", "valueSuffix", SlotKind::Text),
        SlotDef::new("x_date_format", "xDateFormat", SlotKind::Text),
    ]],
};
