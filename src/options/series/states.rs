use super::marker::MARKER;
use crate::options::animation::ANIMATION_OPTIONS;
use crate::schema::{Schema, SlotDef, SlotKind};

pub static HALO: Schema = Schema {
    name: "Halo",
    capabilities: &[&[
        SlotDef::new("attributes", "attributes", SlotKind::Map),
        SlotDef::new("enabled", "enabled", SlotKind::Bool),
        SlotDef::new("opacity", "opacity", SlotKind::Float { min: 0.0, max: 1.0 }),
        SlotDef::new("size", "size", SlotKind::Number),
    ]],
};

pub static SERIES_STATE: Schema = Schema {
    name: "SeriesState",
    capabilities: &[&[
        SlotDef::new("animation", "animation", SlotKind::NodeOrBool(&ANIMATION_OPTIONS)),
        SlotDef::new("border_color", "borderColor", SlotKind::Color),
        SlotDef::new("border_width", "borderWidth", SlotKind::Number),
        SlotDef::new("brightness", "brightness", SlotKind::Number),
        SlotDef::new("color", "color", SlotKind::Color),
        SlotDef::new("enabled", "enabled", SlotKind::Bool),
        SlotDef::new("halo", "halo", SlotKind::Node(&HALO)),
        SlotDef::new("line_width", "lineWidth", SlotKind::Number),
        SlotDef::new("line_width_plus", "lineWidthPlus", SlotKind::Number),
        SlotDef::new("marker", "marker", SlotKind::Node(&MARKER)),
        SlotDef::new("opacity", "opacity", SlotKind::Float { min: 0.0, max: 1.0 }),
    ]],
};

pub static SERIES_STATES: Schema = Schema {
    name: "SeriesStates",
    capabilities: &[&[
        SlotDef::new("hover", "hover", SlotKind::Node(&SERIES_STATE)),
        SlotDef::new("inactive", "inactive", SlotKind::Node(&SERIES_STATE)),
        SlotDef::new("normal", "normal", SlotKind::Node(&SERIES_STATE)),
        SlotDef::new("select", "select", SlotKind::Node(&SERIES_STATE)),
    ]],
};
