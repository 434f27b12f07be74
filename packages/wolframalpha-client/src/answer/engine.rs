//! Answer selection across a whole result.
//!
//! Two walks with different rules:
//! - the numerical walk stops at the first numeric subsection, and gives up
//!   entirely as soon as any subsection reads like a long-form date;
//! - the longest-answer walk visits every subsection.

use tracing::debug;

use super::classify::is_long_date_answer;
use super::normalize::Normalizer;
use super::numeric::{locate_number, NumericAnswer};
use crate::config::ExtractConfig;
use crate::error::{Result, WolframError};
use crate::types::{Document, QueryResult};

/// Picks the best answer string out of a decoded result.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerExtractor {
    normalizer: Normalizer,
}

impl AnswerExtractor {
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config),
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// The numerical answer (value and unit joined by a space) if there is
    /// one, otherwise the longest answer.
    ///
    /// Falls back only on [`WolframError::ProbablyDate`] and
    /// [`WolframError::NoLikelyAnswer`]; other errors are returned as is.
    pub fn answer(&self, result: &QueryResult) -> Result<String> {
        match self.numerical_answer(result) {
            Ok(found) => Ok(found.to_string()),
            Err(err) if err.is_recoverable() => {
                debug!("no numerical answer, using longest answer");
                self.longest_answer(result)
            }
            Err(err) => Err(err),
        }
    }

    /// Value and unit from the first subsection where at least 10% of the
    /// words are numbers.
    ///
    /// Any subsection that reads like a long-form date ends the walk with
    /// [`WolframError::ProbablyDate`].
    pub fn numerical_answer(&self, result: &QueryResult) -> Result<NumericAnswer> {
        if !result.has_sections() {
            return Err(WolframError::NoSections);
        }

        for (section_idx, section) in result.sections.iter().enumerate() {
            for subsection in &section.subsections {
                if is_long_date_answer(&subsection.plaintext) {
                    debug!(section = %section.title, "subsection looks like a date");
                    return Err(WolframError::ProbablyDate);
                }

                if let Some(found) = locate_number(subsection, &self.normalizer)? {
                    debug!(
                        section = %section.title,
                        section_idx,
                        value = %found.value,
                        unit = %found.unit,
                        "numerical answer found"
                    );
                    return Ok(found);
                }
            }
        }

        Err(WolframError::NoLikelyAnswer)
    }

    /// Normalized text of the subsection with the most bytes. Ties keep the
    /// earliest subsection.
    ///
    /// Sections without subsections yield an empty string.
    pub fn longest_answer(&self, result: &QueryResult) -> Result<String> {
        if !result.has_sections() {
            return Err(WolframError::NoSections);
        }

        let mut longest = String::new();
        for subsection in result.subsections() {
            let text = self.normalizer.normalize(&subsection.plaintext);
            if text.len() > longest.len() {
                longest = text.into_owned();
            }
        }

        Ok(longest)
    }
}

impl QueryResult {
    /// See [`AnswerExtractor::answer`].
    pub fn answer(&self, extractor: &AnswerExtractor) -> Result<String> {
        extractor.answer(self)
    }

    /// See [`AnswerExtractor::numerical_answer`].
    pub fn numerical_answer(&self, extractor: &AnswerExtractor) -> Result<NumericAnswer> {
        extractor.numerical_answer(self)
    }

    /// See [`AnswerExtractor::longest_answer`].
    pub fn longest_answer(&self, extractor: &AnswerExtractor) -> Result<String> {
        extractor.longest_answer(self)
    }
}

impl Document {
    fn require_result(&self) -> Result<&QueryResult> {
        self.result().ok_or(WolframError::NoSections)
    }

    /// See [`AnswerExtractor::answer`]. A document without a result has no
    /// sections.
    pub fn answer(&self, extractor: &AnswerExtractor) -> Result<String> {
        extractor.answer(self.require_result()?)
    }

    pub fn numerical_answer(&self, extractor: &AnswerExtractor) -> Result<NumericAnswer> {
        extractor.numerical_answer(self.require_result()?)
    }

    pub fn longest_answer(&self, extractor: &AnswerExtractor) -> Result<String> {
        extractor.longest_answer(self.require_result()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Section, Subsection};

    fn section(title: &str, texts: &[&str]) -> Section {
        Section {
            title: title.to_string(),
            subsections: texts.iter().map(|t| Subsection::new(*t)).collect(),
            ..Default::default()
        }
    }

    fn result(sections: Vec<Section>) -> QueryResult {
        QueryResult {
            section_count: sections.len(),
            sections,
            success: true,
            ..Default::default()
        }
    }

    fn extractor() -> AnswerExtractor {
        AnswerExtractor::default()
    }

    #[test]
    fn test_no_sections() {
        let empty = result(vec![]);
        assert!(matches!(extractor().numerical_answer(&empty), Err(WolframError::NoSections)));
        assert!(matches!(extractor().longest_answer(&empty), Err(WolframError::NoSections)));
        assert!(matches!(extractor().answer(&empty), Err(WolframError::NoSections)));
    }

    #[test]
    fn test_count_mismatch_counts_as_no_sections() {
        let mut r = result(vec![section("Result", &["42"])]);
        r.section_count = 2;
        assert!(matches!(extractor().answer(&r), Err(WolframError::NoSections)));
    }

    #[test]
    fn test_numerical_answer() {
        let r = result(vec![section(
            "Result",
            &["The speed of light is 299792458 meters per second"],
        )]);
        let found = extractor().numerical_answer(&r).unwrap();
        assert_eq!(found.value, "299792458");
        assert_eq!(found.unit, "meters");
        assert_eq!(extractor().answer(&r).unwrap(), "299792458 meters");
    }

    #[test]
    fn test_first_numeric_subsection_wins() {
        let r = result(vec![
            section("Input", &["how far is the moon"]),
            section("Result", &["384400 km", "238855 miles"]),
        ]);
        assert_eq!(extractor().answer(&r).unwrap(), "384400 km");
    }

    #[test]
    fn test_date_aborts_numeric_walk() {
        let r = result(vec![section("Result", &["Monday, 19 January 2038"])]);
        assert!(matches!(extractor().numerical_answer(&r), Err(WolframError::ProbablyDate)));
        assert_eq!(extractor().answer(&r).unwrap(), "Monday, 19 January 2038");
    }

    #[test]
    fn test_date_before_number_blocks_later_number() {
        let r = result(vec![
            section("Date", &["Saturday, March 7"]),
            section("Result", &["5 kg"]),
        ]);
        assert!(matches!(extractor().numerical_answer(&r), Err(WolframError::ProbablyDate)));
    }

    #[test]
    fn test_number_before_date_wins() {
        let r = result(vec![
            section("Result", &["5 kg"]),
            section("Date", &["Saturday, March 7"]),
        ]);
        assert_eq!(extractor().numerical_answer(&r).unwrap(), NumericAnswer::new("5", "kg"));
    }

    #[test]
    fn test_no_likely_answer_falls_back_to_longest() {
        let r = result(vec![
            section("Result", &["Paris"]),
            section("Details", &["capital city of France (since 987)", "short"]),
        ]);
        assert!(matches!(extractor().numerical_answer(&r), Err(WolframError::NoLikelyAnswer)));
        assert_eq!(extractor().answer(&r).unwrap(), "capital city of France ");
    }

    #[test]
    fn test_longest_keeps_first_on_tie() {
        let r = result(vec![section("Result", &["abc", "xyz", "ab"])]);
        assert_eq!(extractor().longest_answer(&r).unwrap(), "abc");
    }

    #[test]
    fn test_longest_with_empty_sections() {
        let r = result(vec![section("Empty", &[])]);
        assert_eq!(extractor().longest_answer(&r).unwrap(), "");
    }

    #[test]
    fn test_longest_respects_keep_parens() {
        let r = result(vec![section("Result", &["aaaa (bbbbbbbb)", "cccccc"])]);
        assert_eq!(extractor().longest_answer(&r).unwrap(), "cccccc");

        let keep = AnswerExtractor::new(&ExtractConfig::new().with_keep_parens(true));
        assert_eq!(keep.longest_answer(&r).unwrap(), "aaaa (bbbbbbbb)");
    }

    // Known quirk: the separator stays when the unit is empty.
    #[test]
    fn test_answer_keeps_trailing_space_without_unit() {
        let r = result(vec![section("Result", &["42"])]);
        assert_eq!(extractor().answer(&r).unwrap(), "42 ");
    }

    #[test]
    fn test_document_delegates() {
        let doc = Document {
            query_result: Some(result(vec![section("Result", &["7 days"])])),
        };
        assert_eq!(doc.answer(&extractor()).unwrap(), "7 days");

        let empty = Document::default();
        assert!(matches!(empty.longest_answer(&extractor()), Err(WolframError::NoSections)));
    }
}
