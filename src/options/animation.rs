use crate::schema::{Schema, SlotDef, SlotKind};

pub static ANIMATION_OPTIONS: Schema = Schema {
    name: "AnimationOptions",
    capabilities: &[&[
        SlotDef::new("defer", "defer", SlotKind::Number),
        SlotDef::new("duration", "duration", SlotKind::Number),
        SlotDef::new("easing", "easing", SlotKind::Text),
    ]],
};
