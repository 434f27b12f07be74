//! Auxiliary records attached to results, sections and subsections.
//!
//! None of these carry answer text; they describe where data came from and
//! how the engine interpreted the query.

use serde::Deserialize;

use super::union::OneOrMany;

/// Origin of a piece of data. Use for attribution alongside Wolfram|Alpha.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Source {
    pub url: String,
    pub text: String,
}

/// Suggestion for rephrasing a query that wasn't understood.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tips {
    pub text: String,
}

/// A possible variant of the query, for disambiguation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DidYouMean {
    pub score: String,
    pub level: String,
    pub val: String,
}

/// Automatic corrections applied to the query (e.g. a fixed spelling).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Warnings {
    pub word: String,
    pub suggestion: String,
    pub text: String,
}

/// How an ambiguous part of the query was interpreted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    #[serde(rename = "type")]
    pub kind: String,
    pub word: String,
    pub template: String,
    pub count: i64,
    pub values: Vec<AssumptionValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssumptionValue {
    pub name: String,
    pub word: String,
    pub desc: String,
    pub input: String,
}

/// One state of a section (e.g. "More digits").
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct State {
    pub name: String,
    pub input: String,
    pub stepbystep: bool,
}

/// Kind of expression a section holds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExpressionType {
    pub name: String,
}

/// Section-level notes: units used and explanatory links.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SectionInfos {
    pub units: OneOrMany<Unit>,
    pub text: String,
    pub links: OneOrMany<Link>,
}

/// A unit in short (symbol) and long (written out) form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Unit {
    pub short: String,
    pub long: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Link {
    pub url: String,
    pub text: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubsectionInfos {
    pub links: OneOrMany<Source>,
}

/// Short descriptors of where a subsection's data came from.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MicroSources {
    pub microsource: OneOrMany<String>,
}

/// Data categories a subsection draws on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataSources {
    pub datasource: OneOrMany<String>,
}
