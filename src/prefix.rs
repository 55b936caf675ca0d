//! Prefixed composition: the same set semantics as [`crate::composer`], with
//! an optional per-token prefix applied to library-produced tokens.
//!
//! The prefix is ambient from the caller's point of view but never global
//! here: a [`Scope`] carries it explicitly from the composition root down,
//! and a nested consumer can shadow it with [`Scope::with_prefix`] without
//! touching its parent.

use crate::composer::{collect_tokens, compose, join_tokens, split_into, ClassValue};
use crate::config::ComposerConfig;
use crate::resolver::resolve;
use crate::style::StyleConfig;
use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

/// Compose a base class and modifier groups, prepending `prefix` to every
/// token they contribute.
///
/// An absent or empty prefix degrades to plain composition. The prefix goes
/// on each individual token, so `button` plus modifier `is-primary` under
/// prefix `bulma-` become `bulma-button bulma-is-primary`.
pub fn compose_with_prefix(prefix: Option<&str>, base: &str, modifiers: &[ClassValue]) -> String {
    let Some(prefix) = prefix.filter(|p| !p.is_empty()) else {
        let mut inputs = Vec::with_capacity(modifiers.len() + 1);
        inputs.push(ClassValue::from(base));
        inputs.extend_from_slice(modifiers);
        return compose(&inputs);
    };

    let mut bare = IndexSet::new();
    split_into(base, &mut bare);
    for modifier in modifiers {
        collect_tokens(modifier, &mut bare);
    }

    // Prefixing is injective per token, so deduplicating before is the same
    // as deduplicating after.
    let prefixed: IndexSet<String> =
        bare.iter().map(|token| format!("{prefix}{token}")).collect();
    join_tokens(&prefixed)
}

/// The carrier of the ambient class prefix.
///
/// Constructed once at the composition root from a [`ComposerConfig`] and
/// handed down read-only; any nesting level can derive an overriding child
/// scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    class_prefix: Option<String>,
}

impl Scope {
    /// A scope that applies no prefix.
    pub fn unprefixed() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ComposerConfig) -> Self {
        Self {
            class_prefix: config.class_prefix.clone(),
        }
    }

    /// Derive a child scope with its own prefix, leaving `self` untouched.
    pub fn with_prefix(&self, prefix: impl Into<String>) -> Self {
        Self {
            class_prefix: Some(prefix.into()),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.class_prefix.as_deref().filter(|p| !p.is_empty())
    }

    /// Prefixed composition of a base class and modifier groups.
    pub fn classnames(&self, base: &str, modifiers: &[ClassValue]) -> String {
        compose_with_prefix(self.prefix(), base, modifiers)
    }

    /// The full element data flow: resolve `style`, prefix the base class and
    /// every resolved token, then append the caller's free-form classes
    /// unprefixed. Returns the final class string and the passthrough
    /// attributes to spread onto the element.
    pub fn element(
        &self,
        base: &str,
        style: &StyleConfig,
        free_form: &[ClassValue],
    ) -> (String, IndexMap<String, Value>) {
        let resolution = resolve(style);
        let modifiers: Vec<ClassValue> = resolution
            .class_tokens
            .iter()
            .map(|token| ClassValue::from(token.as_str()))
            .collect();

        let prefixed = compose_with_prefix(self.prefix(), base, &modifiers);

        let mut inputs = Vec::with_capacity(free_form.len() + 1);
        inputs.push(ClassValue::Str(prefixed));
        inputs.extend_from_slice(free_form);
        (compose(&inputs), resolution.passthrough)
    }
}
