//! classkit translates typed style attributes into CSS class-name strings.
//!
//! A caller builds a [`StyleConfig`] (directly or by deserializing a JSON
//! attribute bag), hands it to [`resolve`], and gets back the emitted class
//! tokens plus the passthrough attributes the resolver did not recognize.
//! [`compose`] and the [`classes!`] macro merge heterogeneous class-name
//! inputs into one deduplicated string, and [`Scope`] threads an optional
//! class prefix from the composition root down to every consumer.
//!
//! ```
//! use classkit::{resolve, Scope, StyleConfig};
//!
//! let style: StyleConfig = serde_json::from_str(
//!     r#"{"color": "primary", "m": "2", "data-testid": "cta"}"#,
//! ).unwrap();
//!
//! let resolution = resolve(&style);
//! assert_eq!(resolution.class_tokens, vec!["has-text-primary", "m-2"]);
//!
//! let scope = Scope::unprefixed();
//! let (class_string, passthrough) = scope.element("button", &style, &[]);
//! assert_eq!(class_string, "button has-text-primary m-2");
//! assert_eq!(passthrough["data-testid"], "cta");
//! ```

pub mod composer;
pub mod config;
pub mod errors;
pub mod prefix;
pub mod resolver;
pub mod style;
pub mod vocab;

pub use composer::{compose, ClassValue};
pub use config::ComposerConfig;
pub use errors::{ClasskitError, Result};
pub use prefix::{compose_with_prefix, Scope};
pub use resolver::{resolve, Resolution};
pub use style::StyleConfig;
