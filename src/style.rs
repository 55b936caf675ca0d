use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The structured attribute bag a caller hands to the resolver.
///
/// Every recognized attribute is an optional field; keys the resolver does
/// not recognize land in [`extra`](StyleConfig::extra) and come back verbatim
/// as the passthrough set. Field names serialize in `camelCase` so a JSON
/// attribute bag (`backgroundColor`, `colorShade`, `textSize`, ...) maps
/// directly onto this type.
///
/// Values are carried as strings and validated against the closed tables in
/// [`crate::vocab`] at resolution time; an out-of-vocabulary value simply
/// produces no token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Only meaningful paired with `color` or `background_color`.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub color_shade: Option<String>,

    // Margin and padding. Each accepts the shared size scale.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub m: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub mt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub mr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub mb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub ml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub mx: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub my: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub p: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub pt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub pr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub pb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub pl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub px: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub py: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub text_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    // Flex family. Produces tokens only when `display` is `flex` or
    // `inline-flex`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub flex_grow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "stringish")]
    pub flex_shrink: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub float: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive: Option<String>,

    /// Breakpoint qualifier appended to viewport-aware tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<String>,

    /// Everything the resolver does not recognize, in insertion order.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl StyleConfig {
    /// The fourteen spacing attributes paired with their token stems, in
    /// emission order.
    pub(crate) fn spacing_entries(&self) -> [(&'static str, &Option<String>); 14] {
        [
            ("m", &self.m),
            ("mt", &self.mt),
            ("mr", &self.mr),
            ("mb", &self.mb),
            ("ml", &self.ml),
            ("mx", &self.mx),
            ("my", &self.my),
            ("p", &self.p),
            ("pt", &self.pt),
            ("pr", &self.pr),
            ("pb", &self.pb),
            ("pl", &self.pl),
            ("px", &self.px),
            ("py", &self.py),
        ]
    }
}

/// Accept strings or JSON numbers for attributes whose vocabulary is
/// numeric-looking (`textSize`, spacing sizes, shades, flex factors).
fn stringish<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    }))
}
