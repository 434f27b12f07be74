//! Locating a value/unit pair inside one subsection.

use std::fmt;

use super::classify::{is_number, RE_NUMBER_FINDER};
use super::normalize::Normalizer;
use crate::error::{Result, WolframError};
use crate::types::Subsection;

/// Share of numeric words at or above which a subsection counts as numerical.
pub const NUMERICAL_ANSWER_THRESHOLD: f64 = 0.1;

/// A numeric value and the word that followed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericAnswer {
    pub value: String,
    /// Word after the value, unvalidated. Empty if the value came last.
    pub unit: String,
}

impl NumericAnswer {
    pub fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }
}

impl fmt::Display for NumericAnswer {
    /// `"<value> <unit>"`. The separator is written even when the unit is
    /// empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Share of `words` that are numbers.
pub fn numeric_density(words: &[&str]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let numbers = words.iter().filter(|w| is_number(w)).count();
    numbers as f64 / words.len() as f64
}

/// Scan a subsection for a numerical answer.
///
/// Returns `Ok(None)` when too few words are numbers, and
/// [`WolframError::NoMatch`] when the density check passed but the raw text
/// holds no number.
pub fn locate_number(
    subsection: &Subsection,
    normalizer: &Normalizer,
) -> Result<Option<NumericAnswer>> {
    let text = normalizer.normalize(&subsection.plaintext);
    let words: Vec<&str> = text.split(' ').collect();

    if numeric_density(&words) < NUMERICAL_ANSWER_THRESHOLD {
        return Ok(None);
    }

    if RE_NUMBER_FINDER.find(&subsection.plaintext).is_none() {
        return Err(WolframError::NoMatch);
    }

    let Some(idx) = words.iter().position(|w| is_number(w)) else {
        return Err(WolframError::NoMatch);
    };

    let unit = words.get(idx + 1).copied().unwrap_or_default();
    Ok(Some(NumericAnswer::new(words[idx], unit)))
}
