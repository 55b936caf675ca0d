//! The attribute resolver: validates a [`StyleConfig`] against the closed
//! vocabularies and emits zero-or-more class tokens per attribute.
//!
//! The contract is "ignore unknown, never fail": a value outside its
//! vocabulary produces no token for that attribute and does not affect any
//! other attribute. The key itself is still consumed, so it never leaks into
//! the passthrough set.

use crate::composer::join_tokens;
use crate::style::StyleConfig;
use crate::vocab;
use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

/// The outcome of resolving one [`StyleConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Emitted tokens, deduplicated, in rule-emission order.
    pub class_tokens: Vec<String>,
    /// Input keys the resolver did not recognize, returned verbatim for the
    /// caller to spread onto markup attributes.
    pub passthrough: IndexMap<String, Value>,
}

impl Resolution {
    /// The tokens as one space-joined class string.
    pub fn class_string(&self) -> String {
        let mut tokens = IndexSet::new();
        for token in &self.class_tokens {
            tokens.insert(token.clone());
        }
        join_tokens(&tokens)
    }
}

/// Resolve a style configuration into class tokens plus passthrough
/// attributes.
///
/// Pure function: same input, same output, no mutation of `config`.
pub fn resolve(config: &StyleConfig) -> Resolution {
    let mut tokens: IndexSet<String> = IndexSet::new();

    let viewport = checked(&config.viewport, vocab::VIEWPORTS);
    let shade = checked(&config.color_shade, vocab::COLOR_SHADES);

    // Text color. Shade composes into the same single token, and a valid
    // viewport suffixes either form.
    if let Some(color) = checked(&config.color, vocab::COLORS) {
        let base = match shade {
            Some(shade) => format!("has-text-{color}-{shade}"),
            None => format!("has-text-{color}"),
        };
        tokens.insert(suffixed(base, viewport));
    }

    // Background color keeps its historical unsuffixed form, shaded or not.
    if let Some(color) = checked(&config.background_color, vocab::COLORS) {
        let token = match shade {
            Some(shade) => format!("has-background-{color}-{shade}"),
            None => format!("has-background-{color}"),
        };
        tokens.insert(token);
    }

    for (stem, value) in config.spacing_entries() {
        if let Some(size) = checked(value, vocab::SPACING_VALUES) {
            tokens.insert(suffixed(format!("{stem}-{size}"), viewport));
        }
    }

    if let Some(size) = checked(&config.text_size, vocab::TEXT_SIZES) {
        tokens.insert(suffixed(format!("is-size-{size}"), viewport));
    }
    if let Some(align) = checked(&config.text_align, vocab::TEXT_ALIGNMENTS) {
        tokens.insert(suffixed(format!("has-text-{align}"), viewport));
    }
    if let Some(transform) = checked(&config.text_transform, vocab::TEXT_TRANSFORMS) {
        tokens.insert(suffixed(format!("is-{transform}"), viewport));
    }
    if let Some(weight) = checked(&config.text_weight, vocab::TEXT_WEIGHTS) {
        tokens.insert(suffixed(format!("has-text-weight-{weight}"), viewport));
    }
    if let Some(family) = checked(&config.font_family, vocab::FONT_FAMILIES) {
        tokens.insert(suffixed(format!("is-family-{family}"), viewport));
    }

    if let Some(display) = checked(&config.display, vocab::DISPLAYS) {
        tokens.insert(suffixed(format!("is-{display}"), viewport));
    }

    // `hidden` has a breakpoint-scoped form; `sr-only` does not.
    match (config.visibility.as_deref(), viewport) {
        (Some("hidden"), Some(viewport)) => {
            tokens.insert(format!("is-hidden-{viewport}"));
        }
        (Some(visibility), _) if vocab::VISIBILITIES.contains(&visibility) => {
            tokens.insert(format!("is-{visibility}"));
        }
        _ => {}
    }

    // Flex-family attributes are gated on the declared display mode and are
    // never viewport-suffixed.
    if matches!(config.display.as_deref(), Some("flex" | "inline-flex")) {
        if let Some(direction) = checked(&config.flex_direction, vocab::FLEX_DIRECTIONS) {
            tokens.insert(format!("is-flex-direction-{direction}"));
        }
        if let Some(wrap) = checked(&config.flex_wrap, vocab::FLEX_WRAPS) {
            tokens.insert(format!("is-flex-wrap-{wrap}"));
        }
        if let Some(justify) = checked(&config.justify_content, vocab::JUSTIFY_CONTENT_VALUES) {
            tokens.insert(format!("is-justify-content-{justify}"));
        }
        if let Some(align) = checked(&config.align_content, vocab::ALIGN_CONTENT_VALUES) {
            tokens.insert(format!("is-align-content-{align}"));
        }
        if let Some(align) = checked(&config.align_items, vocab::ALIGN_ITEMS_VALUES) {
            tokens.insert(format!("is-align-items-{align}"));
        }
        if let Some(align) = checked(&config.align_self, vocab::ALIGN_SELF_VALUES) {
            tokens.insert(format!("is-align-self-{align}"));
        }
        if let Some(factor) = checked(&config.flex_grow, vocab::FLEX_FACTORS) {
            tokens.insert(format!("is-flex-grow-{factor}"));
        }
        if let Some(factor) = checked(&config.flex_shrink, vocab::FLEX_FACTORS) {
            tokens.insert(format!("is-flex-shrink-{factor}"));
        }
    }

    if let Some(float) = checked(&config.float, vocab::FLOATS) {
        tokens.insert(format!("is-pulled-{float}"));
    }
    if config.overflow.as_deref() == Some("clipped") {
        tokens.insert("is-clipped".to_string());
    }
    if config.overlay == Some(true) {
        tokens.insert("is-overlay".to_string());
    }
    if let Some(interaction) = checked(&config.interaction, vocab::INTERACTIONS) {
        tokens.insert(format!("is-{interaction}"));
    }
    if config.radius.as_deref() == Some("radiusless") {
        tokens.insert("is-radiusless".to_string());
    }
    if config.shadow.as_deref() == Some("shadowless") {
        tokens.insert("is-shadowless".to_string());
    }
    if let Some(mode) = checked(&config.responsive, vocab::RESPONSIVE_MODES) {
        tokens.insert(format!("is-{mode}"));
    }

    Resolution {
        class_tokens: tokens.into_iter().collect(),
        passthrough: config.extra.clone(),
    }
}

/// The value if present and inside its vocabulary, else `None`.
fn checked<'a>(value: &'a Option<String>, table: &[&str]) -> Option<&'a str> {
    value.as_deref().filter(|candidate| table.contains(candidate))
}

fn suffixed(base: String, viewport: Option<&str>) -> String {
    match viewport {
        Some(viewport) => format!("{base}-{viewport}"),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(json: &str) -> StyleConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_plain_color() {
        let resolution = resolve(&config(r#"{"color": "primary"}"#));
        assert_eq!(resolution.class_tokens, vec!["has-text-primary"]);
        assert!(resolution.passthrough.is_empty());
    }

    #[test]
    fn test_shade_composes_into_one_token() {
        let resolution = resolve(&config(r#"{"color": "primary", "colorShade": "50"}"#));
        assert_eq!(resolution.class_tokens, vec!["has-text-primary-50"]);
    }

    #[test]
    fn test_background_is_never_viewport_suffixed() {
        let resolution = resolve(&config(
            r#"{"color": "danger", "backgroundColor": "light", "colorShade": "90", "viewport": "tablet"}"#,
        ));
        assert_eq!(
            resolution.class_tokens,
            vec!["has-text-danger-90-tablet", "has-background-light-90"]
        );
    }

    #[test]
    fn test_invalid_viewport_drops_suffix_only() {
        let resolution = resolve(&config(r#"{"color": "primary", "viewport": "laptop"}"#));
        assert_eq!(resolution.class_tokens, vec!["has-text-primary"]);
    }

    #[test]
    fn test_invalid_value_is_silently_dropped() {
        let resolution = resolve(&config(r#"{"color": "not-a-real-color"}"#));
        assert!(resolution.class_tokens.is_empty());
        assert!(resolution.passthrough.is_empty());
    }

    #[test]
    fn test_spacing_emission_order() {
        let resolution = resolve(&config(r#"{"py": "0", "mt": "4", "px": "auto"}"#));
        assert_eq!(resolution.class_tokens, vec!["mt-4", "px-auto", "py-0"]);
    }

    #[test]
    fn test_spacing_with_viewport() {
        let resolution = resolve(&config(r#"{"m": "3", "viewport": "desktop"}"#));
        assert_eq!(resolution.class_tokens, vec!["m-3-desktop"]);
    }

    #[test]
    fn test_typography_tokens() {
        let resolution = resolve(&config(
            r#"{"textSize": "3", "textAlign": "center", "textTransform": "uppercase",
                "textWeight": "bold", "fontFamily": "monospace"}"#,
        ));
        assert_eq!(
            resolution.class_tokens,
            vec![
                "is-size-3",
                "has-text-center",
                "is-uppercase",
                "has-text-weight-bold",
                "is-family-monospace"
            ]
        );
    }

    #[test]
    fn test_hidden_visibility_takes_viewport_form() {
        let resolution = resolve(&config(r#"{"visibility": "hidden", "viewport": "mobile"}"#));
        assert_eq!(resolution.class_tokens, vec!["is-hidden-mobile"]);
    }

    #[test]
    fn test_sr_only_is_never_suffixed() {
        let resolution = resolve(&config(r#"{"visibility": "sr-only", "viewport": "mobile"}"#));
        assert_eq!(resolution.class_tokens, vec!["is-sr-only"]);
    }

    #[test]
    fn test_flex_attributes_require_flex_display() {
        let gated = resolve(&config(r#"{"flexDirection": "row"}"#));
        assert!(gated.class_tokens.is_empty());

        let open = resolve(&config(r#"{"display": "flex", "flexDirection": "row"}"#));
        assert_eq!(open.class_tokens, vec!["is-flex", "is-flex-direction-row"]);
    }

    #[test]
    fn test_inline_flex_also_opens_the_gate() {
        let resolution = resolve(&config(
            r#"{"display": "inline-flex", "justifyContent": "space-between", "flexGrow": "1"}"#,
        ));
        assert_eq!(
            resolution.class_tokens,
            vec![
                "is-inline-flex",
                "is-justify-content-space-between",
                "is-flex-grow-1"
            ]
        );
    }

    #[test]
    fn test_block_display_keeps_the_gate_closed() {
        let resolution = resolve(&config(r#"{"display": "block", "alignItems": "center"}"#));
        assert_eq!(resolution.class_tokens, vec!["is-block"]);
    }

    #[test]
    fn test_miscellaneous_tokens() {
        let resolution = resolve(&config(
            r#"{"float": "left", "overflow": "clipped", "overlay": true,
                "interaction": "clickable", "radius": "radiusless",
                "shadow": "shadowless", "responsive": "narrow"}"#,
        ));
        assert_eq!(
            resolution.class_tokens,
            vec![
                "is-pulled-left",
                "is-clipped",
                "is-overlay",
                "is-clickable",
                "is-radiusless",
                "is-shadowless",
                "is-narrow"
            ]
        );
    }

    #[test]
    fn test_overlay_false_is_inert() {
        let resolution = resolve(&config(r#"{"overlay": false}"#));
        assert!(resolution.class_tokens.is_empty());
    }

    #[test]
    fn test_passthrough_completeness() {
        let resolution = resolve(&config(r#"{"color": "primary", "data-testid": "x"}"#));
        assert_eq!(resolution.class_tokens, vec!["has-text-primary"]);
        assert_eq!(resolution.passthrough.len(), 1);
        assert_eq!(resolution.passthrough["data-testid"], Value::from("x"));
    }

    #[test]
    fn test_resolve_is_pure() {
        let input = config(r#"{"color": "link", "m": "2", "viewport": "touch"}"#);
        let first = resolve(&input);
        let second = resolve(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_class_string_joins_tokens() {
        let resolution = resolve(&config(r#"{"color": "info", "p": "4"}"#));
        assert_eq!(resolution.class_string(), "has-text-info p-4");
    }
}
