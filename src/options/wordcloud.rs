use super::constants::{PLACEMENT_STRATEGIES, SPIRALS};
use super::data::WORDCLOUD_DATA;
use super::series::{
    GENERIC_CORE, HAS_ACCESSIBILITY, HAS_DATA_LABELS, HAS_LABEL, HAS_MARKER, HAS_POINT, HAS_STATES, HAS_TOOLTIP,
    SERIES_BASE,
};
use crate::schema::{Schema, SlotDef, SlotKind};

pub static WORDCLOUD_ROTATION: Schema = Schema {
    name: "WordcloudRotation",
    capabilities: &[&[
        SlotDef::new("from", "from", SlotKind::Number),
        SlotDef::new("orientations", "orientations", SlotKind::Integer { min: Some(1) }),
        SlotDef::new("to", "to", SlotKind::Number),
    ]],
};

pub static WORDCLOUD_OPTIONS: &[SlotDef] = &[
    SlotDef::new("allow_extend_playing_field", "allowExtendPlayingField", SlotKind::Bool),
    SlotDef::new("color_index", "colorIndex", SlotKind::Integer { min: Some(0) }),
    SlotDef::new("max_font_size", "maxFontSize", SlotKind::Number),
    SlotDef::new("min_font_size", "minFontSize", SlotKind::Number),
    SlotDef::new(
        "placement_strategy",
        "placementStrategy",
        SlotKind::Enum {
            allowed: PLACEMENT_STRATEGIES,
            fold_case: true,
        },
    ),
    SlotDef::new("rotation", "rotation", SlotKind::Node(&WORDCLOUD_ROTATION)),
    SlotDef::new(
        "spiral",
        "spiral",
        SlotKind::Enum {
            allowed: SPIRALS,
            fold_case: true,
        },
    ),
    SlotDef::new("style", "style", SlotKind::Map),
];

pub static WORDCLOUD_SERIES: Schema = Schema {
    name: "WordcloudSeries",
    capabilities: &[
        SERIES_BASE,
        &[SlotDef::new("data", "data", SlotKind::DataPoints(&WORDCLOUD_DATA))],
        GENERIC_CORE,
        HAS_ACCESSIBILITY,
        HAS_DATA_LABELS,
        HAS_LABEL,
        HAS_MARKER,
        HAS_POINT,
        HAS_STATES,
        HAS_TOOLTIP,
        WORDCLOUD_OPTIONS,
    ],
};
