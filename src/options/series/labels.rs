use crate::options::animation::ANIMATION_OPTIONS;
use crate::options::constants::{ALIGNMENTS, OVERFLOWS, VERTICAL_ALIGNMENTS};
use crate::schema::{Schema, SlotDef, SlotKind};

pub static DATA_LABEL: Schema = Schema {
    name: "DataLabel",
    capabilities: &[&[
        SlotDef::new(
            "align",
            "align",
            SlotKind::Enum {
                allowed: ALIGNMENTS,
                fold_case: true,
            },
        ),
        SlotDef::new("allow_overlap", "allowOverlap", SlotKind::Bool),
        SlotDef::new("animation", "animation", SlotKind::NodeOrBool(&ANIMATION_OPTIONS)),
        SlotDef::new("background_color", "backgroundColor", SlotKind::Color),
        SlotDef::new("border_color", "borderColor", SlotKind::Color),
        SlotDef::new("border_radius", "borderRadius", SlotKind::Number),
        SlotDef::new("border_width", "borderWidth", SlotKind::Number),
        SlotDef::new("class_name", "className", SlotKind::Text),
        SlotDef::new("color", "color", SlotKind::Color),
        SlotDef::new("crop", "crop", SlotKind::Bool),
        SlotDef::new("defer", "defer", SlotKind::Bool),
        SlotDef::new("enabled", "enabled", SlotKind::Bool),
        SlotDef::new("format", "format", SlotKind::Text),
        SlotDef::new("formatter", "formatter", SlotKind::Callback),
        SlotDef::new("inside", "inside", SlotKind::Bool),
        SlotDef::new("null_format", "nullFormat", SlotKind::Text),
        SlotDef::new("null_formatter", "nullFormatter", SlotKind::Callback),
        SlotDef::new(
            "overflow",
            "overflow",
            SlotKind::Enum {
                allowed: OVERFLOWS,
                fold_case: true,
            },
        ),
        SlotDef::new("padding", "padding", SlotKind::Number),
        SlotDef::new("rotation", "rotation", SlotKind::Number),
        SlotDef::new("style", "style", SlotKind::Map),
        SlotDef::new("use_html", "useHTML", SlotKind::Bool),
        SlotDef::new(
            "vertical_align",
            "verticalAlign",
            SlotKind::Enum {
                allowed: VERTICAL_ALIGNMENTS,
                fold_case: true,
            },
        ),
        SlotDef::new("x", "x", SlotKind::Number),
        SlotDef::new("y", "y", SlotKind::Number),
        SlotDef::new("z_index", "zIndex", SlotKind::Number),
    ]],
};

/// Label drawn along the series graph itself.
pub static SERIES_LABEL: Schema = Schema {
    name: "SeriesLabel",
    capabilities: &[&[
        SlotDef::new("connector_allowed", "connectorAllowed", SlotKind::Bool),
        SlotDef::new("connector_neighbour_distance", "connectorNeighbourDistance", SlotKind::Number),
        SlotDef::new("enabled", "enabled", SlotKind::Bool),
        SlotDef::new("format", "format", SlotKind::Text),
        SlotDef::new("formatter", "formatter", SlotKind::Callback),
        SlotDef::new("max_font_size", "maxFontSize", SlotKind::Number),
        SlotDef::new("min_font_size", "minFontSize", SlotKind::Number),
        SlotDef::new("on_area", "onArea", SlotKind::Bool),
        SlotDef::new("style", "style", SlotKind::Map),
        SlotDef::new("use_html", "useHTML", SlotKind::Bool),
    ]],
};
