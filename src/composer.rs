use indexmap::IndexSet;

/// A single class-name-like input accepted by [`compose`].
///
/// Call sites hand the composer a loose mix of values: plain strings,
/// numbers, conditional maps, nested lists, and absent values. Each variant
/// contributes zero or more whitespace-free tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassValue {
    /// Split on whitespace into individual tokens.
    Str(String),
    /// Rendered in decimal.
    Int(i64),
    /// Rendered with the default float formatting; non-finite values
    /// contribute nothing.
    Float(f64),
    /// Ordered `(group, flag)` pairs. A group's space-separated tokens count
    /// only when its flag is true.
    Map(Vec<(String, bool)>),
    /// Nested inputs, flattened recursively.
    List(Vec<ClassValue>),
    /// Contributes nothing.
    Null,
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Str(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Str(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        ClassValue::Str(value.clone())
    }
}

impl From<i64> for ClassValue {
    fn from(value: i64) -> Self {
        ClassValue::Int(value)
    }
}

impl From<i32> for ClassValue {
    fn from(value: i32) -> Self {
        ClassValue::Int(i64::from(value))
    }
}

impl From<u32> for ClassValue {
    fn from(value: u32) -> Self {
        ClassValue::Int(i64::from(value))
    }
}

impl From<f64> for ClassValue {
    fn from(value: f64) -> Self {
        ClassValue::Float(value)
    }
}

/// Bare booleans carry no token of their own, matching the truthiness
/// contract of conditional maps.
impl From<bool> for ClassValue {
    fn from(_: bool) -> Self {
        ClassValue::Null
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => ClassValue::Null,
        }
    }
}

impl From<Vec<ClassValue>> for ClassValue {
    fn from(value: Vec<ClassValue>) -> Self {
        ClassValue::List(value)
    }
}

impl From<Vec<String>> for ClassValue {
    fn from(value: Vec<String>) -> Self {
        ClassValue::List(value.into_iter().map(ClassValue::Str).collect())
    }
}

impl From<Vec<&str>> for ClassValue {
    fn from(value: Vec<&str>) -> Self {
        ClassValue::List(value.into_iter().map(ClassValue::from).collect())
    }
}

impl From<Vec<(String, bool)>> for ClassValue {
    fn from(value: Vec<(String, bool)>) -> Self {
        ClassValue::Map(value)
    }
}

impl From<Vec<(&str, bool)>> for ClassValue {
    fn from(value: Vec<(&str, bool)>) -> Self {
        ClassValue::Map(value.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

impl From<&[(&str, bool)]> for ClassValue {
    fn from(value: &[(&str, bool)]) -> Self {
        ClassValue::Map(value.iter().map(|(k, v)| (k.to_string(), *v)).collect())
    }
}

/// Merge class-name-like inputs into one deduplicated string.
///
/// Tokens keep first-seen order across the flattened input sequence and each
/// distinct token appears once. Never fails; inputs that carry no token are
/// skipped.
pub fn compose(inputs: &[ClassValue]) -> String {
    let mut tokens = IndexSet::new();
    for input in inputs {
        collect_tokens(input, &mut tokens);
    }
    join_tokens(&tokens)
}

/// Flatten one input into `out`, applying the per-variant rules.
pub(crate) fn collect_tokens(value: &ClassValue, out: &mut IndexSet<String>) {
    match value {
        ClassValue::Str(s) => split_into(s, out),
        ClassValue::Int(n) => {
            out.insert(n.to_string());
        }
        ClassValue::Float(f) if f.is_finite() => split_into(&f.to_string(), out),
        ClassValue::Float(_) => {}
        ClassValue::Map(pairs) => {
            for (group, enabled) in pairs {
                if *enabled {
                    split_into(group, out);
                }
            }
        }
        ClassValue::List(items) => {
            for item in items {
                collect_tokens(item, out);
            }
        }
        ClassValue::Null => {}
    }
}

pub(crate) fn split_into(group: &str, out: &mut IndexSet<String>) {
    for token in group.split_whitespace() {
        out.insert(token.to_string());
    }
}

pub(crate) fn join_tokens(tokens: &IndexSet<String>) -> String {
    tokens.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
}

/// Variadic front end for [`compose`]; every argument goes through
/// [`ClassValue::from`].
///
/// ```
/// use classkit::classes;
///
/// let dropdown_open = true;
/// let s = classes!["dropdown", vec![("is-active", dropdown_open)], None::<&str>];
/// assert_eq!(s, "dropdown is-active");
/// ```
#[macro_export]
macro_rules! classes {
    ($($input:expr),* $(,)?) => {
        $crate::composer::compose(&[$($crate::composer::ClassValue::from($input)),*])
    };
}
