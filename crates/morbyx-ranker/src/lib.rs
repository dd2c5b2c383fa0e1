//! morbyx-ranker — Disease candidate ranking engine.
//!
//! Scores every indexed disease profile against a free-text symptom query by
//! Jaccard set similarity and returns the top candidates above a relevance
//! threshold. Pure and total: no I/O, no failure modes beyond the inputs.

pub mod query;
pub mod scorer;

pub use query::normalise_query;
pub use scorer::{jaccard, rank, Prediction, RankOptions};
