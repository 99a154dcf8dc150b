use crate::options::constants::CURSORS;
use crate::schema::{Schema, SlotDef, SlotKind};

pub static DRAG_HANDLE: Schema = Schema {
    name: "DragHandle",
    capabilities: &[&[
        SlotDef::new("class_name", "className", SlotKind::Text),
        SlotDef::new("color", "color", SlotKind::Color),
        SlotDef::new(
            "cursor",
            "cursor",
            SlotKind::Enum {
                allowed: CURSORS,
                fold_case: true,
            },
        ),
        SlotDef::new("line_color", "lineColor", SlotKind::Color),
        SlotDef::new("line_width", "lineWidth", SlotKind::Number),
        SlotDef::new("path_formatter", "pathFormatter", SlotKind::Callback),
        SlotDef::new("z_index", "zIndex", SlotKind::Number),
    ]],
};

/// Settings of the draggable-points module.
pub static DRAG_DROP_OPTIONS: Schema = Schema {
    name: "DragDropOptions",
    capabilities: &[&[
        SlotDef::new("drag_handle", "dragHandle", SlotKind::Node(&DRAG_HANDLE)),
        SlotDef::new("drag_max_x", "dragMaxX", SlotKind::Number),
        SlotDef::new("drag_max_y", "dragMaxY", SlotKind::Number),
        SlotDef::new("drag_min_x", "dragMinX", SlotKind::Number),
        SlotDef::new("drag_min_y", "dragMinY", SlotKind::Number),
        SlotDef::new("drag_precision_x", "dragPrecisionX", SlotKind::Number),
        SlotDef::new("drag_precision_y", "dragPrecisionY", SlotKind::Number),
        SlotDef::new("drag_sensitivity", "dragSensitivity", SlotKind::Number),
        SlotDef::new("draggable_x", "draggableX", SlotKind::Bool),
        SlotDef::new("draggable_y", "draggableY", SlotKind::Bool),
        SlotDef::new("group_by", "groupBy", SlotKind::Text),
        SlotDef::new("guide_box", "guideBox", SlotKind::Map),
        SlotDef::new("live_redraw", "liveRedraw", SlotKind::Bool),
    ]],
};
