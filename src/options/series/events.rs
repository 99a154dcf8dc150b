// Event callbacks and per-point interaction options

use crate::options::constants::DASH_STYLES;
use crate::schema::{Schema, SlotDef, SlotKind};

pub static SERIES_EVENTS: Schema = Schema {
    name: "SeriesEvents",
    capabilities: &[&[
        SlotDef::new("after_animate", "afterAnimate", SlotKind::Callback),
        SlotDef::new("checkbox_click", "checkboxClick", SlotKind::Callback),
        SlotDef::new("click", "click", SlotKind::Callback),
        SlotDef::new("hide", "hide", SlotKind::Callback),
        SlotDef::new("legend_item_click", "legendItemClick", SlotKind::Callback),
        SlotDef::new("mouse_out", "mouseOut", SlotKind::Callback),
        SlotDef::new("mouse_over", "mouseOver", SlotKind::Callback),
        SlotDef::new("show", "show", SlotKind::Callback),
    ]],
};

pub static POINT_EVENTS: Schema = Schema {
    name: "PointEvents",
    capabilities: &[&[
        SlotDef::new("click", "click", SlotKind::Callback),
        SlotDef::new("drag", "drag", SlotKind::Callback),
        SlotDef::new("drag_start", "dragStart", SlotKind::Callback),
        SlotDef::new("drop", "drop", SlotKind::Callback),
        SlotDef::new("mouse_out", "mouseOut", SlotKind::Callback),
        SlotDef::new("mouse_over", "mouseOver", SlotKind::Callback),
        SlotDef::new("remove", "remove", SlotKind::Callback),
        SlotDef::new("select", "select", SlotKind::Callback),
        SlotDef::new("unselect", "unselect", SlotKind::Callback),
        SlotDef::new("update", "update", SlotKind::Callback),
    ]],
};

pub static POINT: Schema = Schema {
    name: "Point",
    capabilities: &[&[SlotDef::new("events", "events", SlotKind::Node(&POINT_EVENTS))]],
};

pub static CONNECTOR_OPTIONS: Schema = Schema {
    name: "ConnectorOptions",
    capabilities: &[&[
        SlotDef::new(
            "dash_style",
            "dashstyle",
            SlotKind::Enum {
                allowed: DASH_STYLES,
                fold_case: false,
            },
        )
        .aliased(&["dashStyle"]),
        SlotDef::new("stroke", "stroke", SlotKind::Text),
        SlotDef::new("width", "width", SlotKind::Number),
    ]],
};

pub static ON_POINT_POSITION: Schema = Schema {
    name: "OnPointPosition",
    capabilities: &[&[
        SlotDef::new("offset_x", "offsetX", SlotKind::Number),
        SlotDef::new("offset_y", "offsetY", SlotKind::Number),
        SlotDef::new("x", "x", SlotKind::Number),
        SlotDef::new("y", "y", SlotKind::Number),
    ]],
};

/// Places a series on top of a point of another series.
pub static ON_POINT_OPTIONS: Schema = Schema {
    name: "OnPointOptions",
    capabilities: &[&[
        SlotDef::new("connector_options", "connectorOptions", SlotKind::Node(&CONNECTOR_OPTIONS)),
        SlotDef::new("id", "id", SlotKind::Text),
        SlotDef::new("position", "position", SlotKind::Node(&ON_POINT_POSITION)),
    ]],
};
