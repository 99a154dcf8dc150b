// Enumerated values accepted by option slots

/// CSS cursor names. Matched case-insensitively.
pub const CURSORS: &[&str] = &[
    "alias",
    "all-scroll",
    "auto",
    "cell",
    "col-resize",
    "context-menu",
    "copy",
    "crosshair",
    "default",
    "e-resize",
    "ew-resize",
    "grab",
    "grabbing",
    "help",
    "move",
    "n-resize",
    "ne-resize",
    "nesw-resize",
    "no-drop",
    "none",
    "not-allowed",
    "ns-resize",
    "nw-resize",
    "nwse-resize",
    "pointer",
    "progress",
    "row-resize",
    "s-resize",
    "se-resize",
    "sw-resize",
    "text",
    "vertical-text",
    "w-resize",
    "wait",
    "zoom-in",
    "zoom-out",
];

/// Line dash styles. Matched exactly.
pub const DASH_STYLES: &[&str] = &[
    "Dash",
    "DashDot",
    "Dot",
    "LongDash",
    "LongDashDot",
    "LongDashDotDot",
    "ShortDash",
    "ShortDashDot",
    "ShortDashDotDot",
    "ShortDot",
    "Solid",
];

pub const PANE_SHAPES: &[&str] = &["circle", "solid", "arc"];

pub const ALIGNMENTS: &[&str] = &["left", "center", "right"];

pub const VERTICAL_ALIGNMENTS: &[&str] = &["top", "middle", "bottom"];

pub const OVERFLOWS: &[&str] = &["justify", "allow"];

pub const PLACEMENT_STRATEGIES: &[&str] = &["center", "random"];

pub const SPIRALS: &[&str] = &["archimedean", "rectangular", "square"];

pub const STACKINGS: &[&str] = &["normal", "percent", "overlap", "stream"];
