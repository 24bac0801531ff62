//! mindcheck-questionnaire
//!
//! The screening questionnaire: item definitions, answer validation, and the
//! disorder catalog that turns a model label into advice. Pure data and pure
//! functions with no I/O.

pub mod answer;
pub mod catalog;
pub mod error;
pub mod items;
pub mod validate;

pub use answer::{AnswerSheet, AnswerValue};
pub use catalog::{CatalogEntry, lookup};
pub use validate::validate;
