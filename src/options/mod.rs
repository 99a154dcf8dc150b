// Catalogue of option node schemas

pub mod animation;
pub mod axis_marker;
pub mod color;
pub mod constants;
pub mod data;
pub mod pane;
pub mod pictorial;
pub mod series;
pub mod wordcloud;

use crate::error::OptionResult;
use crate::schema::Schema;

use animation::ANIMATION_OPTIONS;
use axis_marker::AXIS_MARKER;
use color::{GRADIENT, LINEAR_GRADIENT, PATTERN, PATTERN_OPTIONS, RADIAL_GRADIENT};
use data::{CARTESIAN_DATA, WORDCLOUD_DATA};
use pane::{PANE, PANE_BACKGROUND};
use pictorial::{PICTORIAL_PATHS, PICTORIAL_SERIES};
use series::accessibility::{KEYBOARD_NAVIGATION, POINT_ACCESSIBILITY, TYPE_OPTIONS_ACCESSIBILITY};
use series::drag_drop::{DRAG_DROP_OPTIONS, DRAG_HANDLE};
use series::events::{CONNECTOR_OPTIONS, ON_POINT_OPTIONS, ON_POINT_POSITION, POINT, POINT_EVENTS, SERIES_EVENTS};
use series::labels::{DATA_LABEL, SERIES_LABEL};
use series::marker::{MARKER, MARKER_STATE, MARKER_STATES};
use series::states::{HALO, SERIES_STATE, SERIES_STATES};
use series::tooltip::TOOLTIP;
use series::GENERIC_TYPE_OPTIONS;
use wordcloud::{WORDCLOUD_ROTATION, WORDCLOUD_SERIES};

/// Every registered schema.
pub static ALL: &[&Schema] = &[
    &ANIMATION_OPTIONS,
    &AXIS_MARKER,
    &CARTESIAN_DATA,
    &CONNECTOR_OPTIONS,
    &DATA_LABEL,
    &DRAG_DROP_OPTIONS,
    &DRAG_HANDLE,
    &GENERIC_TYPE_OPTIONS,
    &GRADIENT,
    &HALO,
    &KEYBOARD_NAVIGATION,
    &LINEAR_GRADIENT,
    &MARKER,
    &MARKER_STATE,
    &MARKER_STATES,
    &ON_POINT_OPTIONS,
    &ON_POINT_POSITION,
    &PANE,
    &PANE_BACKGROUND,
    &PATTERN,
    &PATTERN_OPTIONS,
    &PICTORIAL_PATHS,
    &PICTORIAL_SERIES,
    &POINT,
    &POINT_ACCESSIBILITY,
    &POINT_EVENTS,
    &RADIAL_GRADIENT,
    &SERIES_EVENTS,
    &SERIES_LABEL,
    &SERIES_STATE,
    &SERIES_STATES,
    &TOOLTIP,
    &TYPE_OPTIONS_ACCESSIBILITY,
    &WORDCLOUD_DATA,
    &WORDCLOUD_ROTATION,
    &WORDCLOUD_SERIES,
];

/// Run the key-conflict check over every registered schema.
pub fn check_all() -> OptionResult<()> {
    ALL.iter().try_for_each(|schema| schema.check_keys())
}

/// Find a schema by name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<&'static Schema> {
    ALL.iter().copied().find(|s| s.name.eq_ignore_ascii_case(name))
}
