use crate::options::animation::ANIMATION_OPTIONS;
use crate::schema::{Schema, SlotDef, SlotKind};

pub static MARKER_STATE: Schema = Schema {
    name: "MarkerState",
    capabilities: &[&[
        SlotDef::new("animation", "animation", SlotKind::NodeOrBool(&ANIMATION_OPTIONS)),
        SlotDef::new("enabled", "enabled", SlotKind::Bool),
        SlotDef::new("fill_color", "fillColor", SlotKind::Color),
        SlotDef::new("line_color", "lineColor", SlotKind::Color),
        SlotDef::new("line_width", "lineWidth", SlotKind::Number),
        SlotDef::new("line_width_plus", "lineWidthPlus", SlotKind::Number),
        SlotDef::new("radius", "radius", SlotKind::Number),
        SlotDef::new("radius_plus", "radiusPlus", SlotKind::Number),
    ]],
};

pub static MARKER_STATES: Schema = Schema {
    name: "MarkerStates",
    capabilities: &[&[
        SlotDef::new("hover", "hover", SlotKind::Node(&MARKER_STATE)),
        SlotDef::new("normal", "normal", SlotKind::Node(&MARKER_STATE)),
        SlotDef::new("select", "select", SlotKind::Node(&MARKER_STATE)),
    ]],
};

/// Point marker shared by series options, states and data points.
pub static MARKER: Schema = Schema {
    name: "Marker",
    capabilities: &[&[
        SlotDef::new("enabled", "enabled", SlotKind::Bool),
        SlotDef::new("enabled_threshold", "enabledThreshold", SlotKind::Number),
        SlotDef::new("fill_color", "fillColor", SlotKind::Color),
        SlotDef::new("height", "height", SlotKind::Number),
        SlotDef::new("line_color", "lineColor", SlotKind::Color),
        SlotDef::new("line_width", "lineWidth", SlotKind::Number),
        SlotDef::new("radius", "radius", SlotKind::Number),
        SlotDef::new("states", "states", SlotKind::Node(&MARKER_STATES)),
        SlotDef::new("symbol", "symbol", SlotKind::Text),
        SlotDef::new("width", "width", SlotKind::Number),
    ]],
};
