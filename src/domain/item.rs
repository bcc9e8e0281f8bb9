use std::borrow::Cow;

use serde_json::{Number, Value};

use crate::error::ClassifyError;

/// A scalar element of the `data` array.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Text(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl Item {
    /// Converts one JSON array element. Arrays and objects are rejected
    /// with the element's position.
    pub fn from_value(index: usize, value: &Value) -> Result<Self, ClassifyError> {
        match value {
            Value::String(s) => Ok(Item::Text(s.clone())),
            Value::Number(n) => Ok(Item::Number(n.clone())),
            Value::Bool(b) => Ok(Item::Bool(*b)),
            Value::Null => Ok(Item::Null),
            Value::Array(_) | Value::Object(_) => Err(ClassifyError::NestedItem { index }),
        }
    }

    /// Textual form the classifier works on.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Item::Text(s) => Cow::Borrowed(s.as_str()),
            Item::Number(n) => Cow::Owned(number_text(n)),
            Item::Bool(true) => Cow::Borrowed("true"),
            Item::Bool(false) => Cow::Borrowed("false"),
            Item::Null => Cow::Borrowed("null"),
        }
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::Text(s.to_string())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::Text(s)
    }
}

/// Integer literals keep their exact text (`-0` renders as `0`). Literals with
/// a fraction or exponent render like JavaScript numbers: plain decimal for
/// magnitudes in `[1e-6, 1e21)`, exponent form (`1.5e+300`) outside it.
fn number_text(n: &Number) -> String {
    let literal = n.to_string();
    let digits = literal.strip_prefix('-').unwrap_or(&literal);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        if digits.bytes().all(|b| b == b'0') {
            return "0".to_string();
        }
        return literal;
    }

    match n.as_f64() {
        Some(f) => float_text(f),
        None => literal,
    }
}

fn float_text(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return format!("{f}");
    }

    let exp = format!("{f:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
