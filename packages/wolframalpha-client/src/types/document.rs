//! The result document returned by the full results API.
//!
//! Documents are decoded in one shot and read-only afterwards, apart from
//! [`QueryResult::remove_input_interpretation`].

use serde::Deserialize;
use std::str::FromStr;

use super::meta::{
    Assumptions, DataSources, DidYouMean, ExpressionType, MicroSources, SectionInfos, Source,
    State, SubsectionInfos, Tips, Warnings,
};
use super::union::{Failure, OneOrMany, QueryError};
use crate::error::{Result, WolframError};

/// Title of the section that restates the query rather than answering it.
pub const INPUT_INTERPRETATION: &str = "Input interpretation";

/// Root of a full results response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    #[serde(rename = "queryresult", default)]
    pub query_result: Option<QueryResult>,
}

impl Document {
    /// Decode a JSON response body.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(WolframError::InvalidFormat)
    }

    pub fn result(&self) -> Option<&QueryResult> {
        self.query_result.as_ref()
    }

    /// Drop the input interpretation section; see
    /// [`QueryResult::remove_input_interpretation`].
    pub fn remove_input_interpretation(&mut self) -> &mut Self {
        if let Some(result) = self.query_result.as_mut() {
            result.remove_input_interpretation();
        }
        self
    }

    pub fn for_each_section<F: FnMut(&Section)>(&self, f: F) {
        if let Some(result) = &self.query_result {
            result.for_each_section(f);
        }
    }
}

impl FromStr for Document {
    type Err = WolframError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(s.as_bytes())
    }
}

/// Everything the engine produced for one query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueryResult {
    /// Sections in relevance order
    #[serde(rename = "pods")]
    pub sections: Vec<Section>,

    /// Number of sections the API reported
    #[serde(rename = "numpods")]
    pub section_count: usize,

    pub success: bool,
    pub error: Option<Failure>,

    pub didyoumeans: OneOrMany<DidYouMean>,
    pub datatypes: String,
    pub timedout: String,
    pub timedoutpods: String,
    pub recalculate: String,
    pub id: String,
    pub host: String,
    pub server: String,
    pub related: String,
    pub version: String,
    pub parseidserver: String,
    pub timing: f64,
    pub parsetiming: f64,
    pub parsetimedout: bool,
    pub sources: OneOrMany<Source>,
    pub tips: OneOrMany<Tips>,
    pub warnings: OneOrMany<Warnings>,
    pub assumptions: OneOrMany<Assumptions>,
}

impl QueryResult {
    /// Whether the API reported success without an error.
    pub fn is_success(&self) -> bool {
        self.success && !self.error.as_ref().is_some_and(Failure::is_error)
    }

    /// Structured error detail, if the API sent one.
    pub fn failure_detail(&self) -> Option<&QueryError> {
        self.error.as_ref().and_then(Failure::detail)
    }

    /// Whether there are sections to scan: the reported count is nonzero
    /// and agrees with the sections actually present.
    pub fn has_sections(&self) -> bool {
        self.section_count != 0 && self.section_count == self.sections.len()
    }

    /// Remove every section titled "Input interpretation", in place.
    ///
    /// The section count is adjusted so it keeps matching the sections.
    pub fn remove_input_interpretation(&mut self) -> &mut Self {
        let before = self.sections.len();
        match self.sections.first() {
            Some(first) if first.title == INPUT_INTERPRETATION => {
                self.sections.remove(0);
            }
            Some(_) => self.sections.retain(|s| s.title != INPUT_INTERPRETATION),
            None => {}
        }
        let removed = before - self.sections.len();
        self.section_count = self.section_count.saturating_sub(removed);
        self
    }

    pub fn for_each_section<F: FnMut(&Section)>(&self, f: F) {
        self.sections.iter().for_each(f);
    }

    /// All subsections, section by section.
    pub fn subsections(&self) -> impl Iterator<Item = &Subsection> {
        self.sections.iter().flat_map(|s| s.subsections.iter())
    }
}

/// One titled block of information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Section {
    pub title: String,

    #[serde(rename = "subpods")]
    pub subsections: Vec<Subsection>,

    pub primary: bool,
    pub scanner: String,
    pub id: String,
    pub position: i64,
    #[serde(rename = "numsubpods")]
    pub subsection_count: usize,
    pub states: Vec<State>,
    pub expressiontypes: OneOrMany<ExpressionType>,
    pub infos: OneOrMany<SectionInfos>,
    pub error: bool,
}

impl Section {
    pub fn for_each_subsection<F: FnMut(&Subsection)>(&self, f: F) {
        self.subsections.iter().for_each(f);
    }
}

/// The unit that carries answer text, in [`Subsection::plaintext`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Subsection {
    pub title: String,
    pub plaintext: String,
    pub primary: bool,
    pub imagesource: String,
    pub microsources: Option<MicroSources>,
    pub datasources: Option<DataSources>,
    pub infos: OneOrMany<SubsectionInfos>,
}

impl Subsection {
    pub fn new(plaintext: impl Into<String>) -> Self {
        Self {
            plaintext: plaintext.into(),
            ..Default::default()
        }
    }
}
