//! Token and text classifiers used to pick an answer.

use regex::Regex;
use std::sync::LazyLock;

/// Whole-token numeric grammar: optional sign, decimal (a bare leading dot
/// is allowed), optional `×10^exp` suffix.
static RE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]+(×10\^-?[0-9]+)?$").unwrap());

/// Same shape as [`RE_NUMBER`], unanchored.
pub(crate) static RE_NUMBER_FINDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]*\.?[0-9]+(×10\^-?[0-9]+)?").unwrap());

static RE_DATE_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-.,!?]").unwrap());

/// Share of date words above which a text counts as a long-form date.
pub const DATE_ANSWER_THRESHOLD: f64 = 0.3;

const WEEKDAYS: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// True if the whole token is a number such as `42`, `-.5` or `6.02×10^23`.
///
/// Callers pass tokens taken from already normalized text.
pub fn is_number(token: &str) -> bool {
    RE_NUMBER.is_match(token)
}

fn is_date_word(word: &str) -> bool {
    WEEKDAYS.contains(&word) || MONTHS.contains(&word)
}

/// True if more than 30% of the words are full English weekday or month
/// names (case-sensitive), after dropping `- . , ! ?`.
pub fn is_long_date_answer(text: &str) -> bool {
    let stripped = RE_DATE_PUNCTUATION.replace_all(text, "");
    let words: Vec<&str> = stripped.split_whitespace().collect();
    if words.is_empty() {
        return false;
    }

    let date_words = words.iter().filter(|w| is_date_word(w)).count();
    date_words as f64 / words.len() as f64 > DATE_ANSWER_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        let numbers = ["0", "42", "-7", "3.14", ".5", "-.25", "6.02×10^23", "1.6×10^-19"];
        for token in numbers {
            assert!(is_number(token), "Expected number: {}", token);
        }
    }

    #[test]
    fn test_not_numbers() {
        let tokens = ["", "5kg", "kg5", "1.", "1,000", "+3", "6.02x10^23", "10^5", "--1", "1 2"];
        for token in tokens {
            assert!(!is_number(token), "Expected non-number: {}", token);
        }
    }

    #[test]
    fn test_finder_locates_substring() {
        let m = RE_NUMBER_FINDER.find("about 5kg total").unwrap();
        assert_eq!(m.as_str(), "5");
        assert_eq!(m.start(), 6);
    }

    #[test]
    fn test_long_date_answers() {
        assert!(is_long_date_answer("Monday Tuesday Wednesday April"));
        assert!(is_long_date_answer("Monday, 19 January 2038"));
        assert!(is_long_date_answer("Friday!"));
    }

    #[test]
    fn test_not_long_date_answers() {
        assert!(!is_long_date_answer("The cat sat on the mat"));
        assert!(!is_long_date_answer(""));
        assert!(!is_long_date_answer(" , . "));
        // Case-sensitive, no abbreviations.
        assert!(!is_long_date_answer("monday jan"));
        // 3 of 10 is exactly 30%, not above it.
        assert!(!is_long_date_answer("May June July a b c d e f g"));
    }
}
