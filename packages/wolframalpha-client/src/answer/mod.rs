//! Heuristic answer extraction.
//!
//! - [`normalize`] - parenthesis stripping
//! - [`classify`] - number and date classifiers
//! - [`numeric`] - value/unit location within one subsection
//! - [`engine`] - selection across all sections

pub mod classify;
pub mod engine;
pub mod normalize;
pub mod numeric;

pub use classify::{is_long_date_answer, is_number};
pub use engine::AnswerExtractor;
pub use normalize::{normalize, Normalizer};
pub use numeric::{locate_number, NumericAnswer};
