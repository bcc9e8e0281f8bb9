//! Single-pass classification of `data` items.
//!
//! Digit-only items are summed and split by parity. Every other item feeds
//! two independent checks: letter-bearing items are uppercased into
//! `alphabets` (their letters also feed `concat_string`), and any character
//! outside `[a-zA-Z0-9]` is collected once into `special_characters`.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::domain::item::Item;
use crate::error::ClassifyError;

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub even_numbers: Vec<String>,
    pub odd_numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub special_characters: Vec<char>,
    pub sum: String,
    pub concat_string: String,
}

/// Validates that `data` is an array of scalars and classifies it.
pub fn classify_data(data: &Value) -> Result<ClassificationResult, ClassifyError> {
    let values = data.as_array().ok_or(ClassifyError::NotAnArray)?;
    let items = values
        .iter()
        .enumerate()
        .map(|(index, value)| Item::from_value(index, value))
        .collect::<Result<Vec<_>, _>>()?;
    classify(&items)
}

/// Classifies items in input order.
///
/// Fails only when a numeric item or the running sum does not fit in `u128`.
#[instrument(skip(items), fields(item_count = items.len()))]
pub fn classify(items: &[Item]) -> Result<ClassificationResult, ClassifyError> {
    let mut result = ClassificationResult::default();
    let mut sum: u128 = 0;
    let mut letters: Vec<char> = Vec::new();

    for item in items {
        let text = item.text();

        if is_numeric(&text) {
            let value: u128 = text.parse().map_err(|_| ClassifyError::SumOverflow)?;
            sum = sum.checked_add(value).ok_or(ClassifyError::SumOverflow)?;
            if value % 2 == 0 {
                result.even_numbers.push(text.into_owned());
            } else {
                result.odd_numbers.push(text.into_owned());
            }
            continue;
        }

        if text.chars().any(|c| c.is_ascii_alphabetic()) {
            result.alphabets.push(text.to_uppercase());
            letters.extend(text.chars().filter(char::is_ascii_alphabetic));
        }

        for c in text.chars().filter(|c| !c.is_ascii_alphanumeric()) {
            if !result.special_characters.contains(&c) {
                result.special_characters.push(c);
            }
        }
    }

    result.sum = sum.to_string();
    result.concat_string = alternate_case(letters.into_iter().rev());

    debug!(
        even = result.even_numbers.len(),
        odd = result.odd_numbers.len(),
        alphabets = result.alphabets.len(),
        special = result.special_characters.len(),
        sum = %result.sum,
        "classified items"
    );

    Ok(result)
}

/// One or more ASCII digits and nothing else.
fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn alternate_case(letters: impl Iterator<Item = char>) -> String {
    letters
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}
