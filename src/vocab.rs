//! Closed vocabularies for every recognized style attribute.
//!
//! Each table is the complete set of values an attribute accepts. A value
//! outside its table produces no class token; the resolver never rejects a
//! configuration outright.

/// Palette names plus the `inherit`/`current` sentinels, valid for both
/// `color` and `backgroundColor`.
pub const COLORS: &[&str] = &[
    "primary",
    "link",
    "info",
    "success",
    "warning",
    "danger",
    "light",
    "dark",
    "white",
    "black",
    "black-bis",
    "black-ter",
    "grey-darker",
    "grey-dark",
    "grey",
    "grey-light",
    "grey-lighter",
    "white-ter",
    "white-bis",
    "inherit",
    "current",
];

/// Lightness variants composable with a palette color.
pub const COLOR_SHADES: &[&str] = &[
    "00", "05", "10", "15", "20", "25", "30", "35", "40", "45", "50", "55", "60", "65", "70",
    "75", "80", "85", "90", "95", "invert",
];

/// Responsive breakpoints usable as a token suffix.
pub const VIEWPORTS: &[&str] = &["mobile", "tablet", "desktop", "widescreen", "fullhd", "touch"];

/// The fourteen margin/padding attributes, in emission order.
pub const SPACING_SIDES: &[&str] = &[
    "m", "mt", "mr", "mb", "ml", "mx", "my", "p", "pt", "pr", "pb", "pl", "px", "py",
];

/// The size scale shared by all spacing attributes.
pub const SPACING_VALUES: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "auto"];

pub const TEXT_SIZES: &[&str] = &["1", "2", "3", "4", "5", "6", "7"];

pub const TEXT_ALIGNMENTS: &[&str] = &["center", "justified", "left", "right"];

pub const TEXT_TRANSFORMS: &[&str] = &["capitalized", "lowercase", "uppercase", "italic"];

pub const TEXT_WEIGHTS: &[&str] = &["light", "normal", "medium", "semibold", "bold"];

pub const FONT_FAMILIES: &[&str] = &["code", "monospace", "primary", "secondary", "sans-serif"];

pub const DISPLAYS: &[&str] = &["block", "flex", "inline", "inline-block", "inline-flex"];

pub const VISIBILITIES: &[&str] = &["hidden", "sr-only"];

pub const FLEX_DIRECTIONS: &[&str] = &["row", "row-reverse", "column", "column-reverse"];

pub const FLEX_WRAPS: &[&str] = &["nowrap", "wrap", "wrap-reverse"];

pub const JUSTIFY_CONTENT_VALUES: &[&str] = &[
    "center",
    "start",
    "end",
    "flex-start",
    "flex-end",
    "left",
    "right",
    "space-between",
    "space-around",
    "space-evenly",
    "stretch",
];

pub const ALIGN_CONTENT_VALUES: &[&str] = &[
    "start",
    "end",
    "center",
    "flex-start",
    "flex-end",
    "space-between",
    "space-around",
    "space-evenly",
    "stretch",
    "baseline",
];

pub const ALIGN_ITEMS_VALUES: &[&str] = &[
    "stretch",
    "flex-start",
    "flex-end",
    "center",
    "baseline",
    "start",
    "end",
    "self-start",
    "self-end",
];

pub const ALIGN_SELF_VALUES: &[&str] =
    &["auto", "flex-start", "flex-end", "center", "baseline", "stretch"];

/// Shared by `flexGrow` and `flexShrink`.
pub const FLEX_FACTORS: &[&str] = &["0", "1", "2", "3", "4", "5"];

pub const FLOATS: &[&str] = &["left", "right"];

pub const INTERACTIONS: &[&str] = &["unselectable", "clickable"];

pub const RESPONSIVE_MODES: &[&str] = &["mobile", "narrow"];
