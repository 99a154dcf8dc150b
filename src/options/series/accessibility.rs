use crate::schema::{Schema, SlotDef, SlotKind};

pub static KEYBOARD_NAVIGATION: Schema = Schema {
    name: "KeyboardNavigation",
    capabilities: &[&[SlotDef::new("enabled", "enabled", SlotKind::Bool)]],
};

/// Accessibility options for a whole series.
pub static TYPE_OPTIONS_ACCESSIBILITY: Schema = Schema {
    name: "TypeOptionsAccessibility",
    capabilities: &[&[
        SlotDef::new("description", "description", SlotKind::Text),
        SlotDef::new("description_format", "descriptionFormat", SlotKind::Text),
        SlotDef::new("enabled", "enabled", SlotKind::Bool),
        SlotDef::new("expose_as_group_only", "exposeAsGroupOnly", SlotKind::Bool),
        SlotDef::new("keyboard_navigation", "keyboardNavigation", SlotKind::Node(&KEYBOARD_NAVIGATION)),
    ]],
};

/// Accessibility options for a single data point.
pub static POINT_ACCESSIBILITY: Schema = Schema {
    name: "PointAccessibility",
    capabilities: &[&[
        SlotDef::new("description", "description", SlotKind::Text),
        SlotDef::new("enabled", "enabled", SlotKind::Bool),
    ]],
};
