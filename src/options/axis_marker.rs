use super::animation::ANIMATION_OPTIONS;
use crate::schema::{Schema, SlotDef, SlotKind};

/// Marker drawn on a color axis to show the hovered point's value.
pub static AXIS_MARKER: Schema = Schema {
    name: "AxisMarker",
    capabilities: &[&[
        SlotDef::new("animation", "animation", SlotKind::NodeOrBool(&ANIMATION_OPTIONS)),
        SlotDef::new("color", "color", SlotKind::Color),
        SlotDef::new("width", "width", SlotKind::Number),
    ]],
};
