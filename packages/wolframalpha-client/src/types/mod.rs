//! Result document types.

pub mod document;
pub mod meta;
pub mod union;

pub use document::{Document, QueryResult, Section, Subsection, INPUT_INTERPRETATION};
pub use meta::{
    AssumptionValue, Assumptions, DataSources, DidYouMean, ExpressionType, Link, MicroSources,
    SectionInfos, Source, State, SubsectionInfos, Tips, Unit, Warnings,
};
pub use union::{Failure, OneOrMany, QueryError};
