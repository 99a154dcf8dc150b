// Polar and gauge panes

use super::constants::PANE_SHAPES;
use crate::schema::{Schema, SlotDef, SlotKind};

pub static PANE_BACKGROUND: Schema = Schema {
    name: "PaneBackground",
    capabilities: &[&[
        SlotDef::new("background_color", "backgroundColor", SlotKind::Color),
        SlotDef::new("border_color", "borderColor", SlotKind::Color),
        SlotDef::new("border_width", "borderWidth", SlotKind::Number),
        SlotDef::new("class_name", "className", SlotKind::Text),
        SlotDef::new("inner_radius", "innerRadius", SlotKind::NumberOrPercent),
        SlotDef::new("outer_radius", "outerRadius", SlotKind::NumberOrPercent),
        SlotDef::new(
            "shape",
            "shape",
            SlotKind::Enum {
                allowed: PANE_SHAPES,
                fold_case: true,
            },
        ),
    ]],
};

pub static PANE: Schema = Schema {
    name: "Pane",
    capabilities: &[&[
        SlotDef::new(
            "background",
            "background",
            SlotKind::NodeList {
                schema: &PANE_BACKGROUND,
                wrap_single: true,
            },
        ),
        SlotDef::new("center", "center", SlotKind::Pair),
        SlotDef::new("end_angle", "endAngle", SlotKind::Number),
        SlotDef::new("inner_size", "innerSize", SlotKind::NumberOrPercent),
        SlotDef::new("size", "size", SlotKind::NumberOrPercent),
        SlotDef::new("start_angle", "startAngle", SlotKind::Number),
    ]],
};
