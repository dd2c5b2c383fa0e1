//! morbyx-ingestion — Dataset ingestion into the in-memory symptom index.
//!
//! - CSV dataset reading with a startup row cap
//! - Disease → symptom-set index construction

pub mod dataset;
pub mod indexer;

pub use dataset::{read_dataset, Record};
pub use indexer::{build_index, DiseaseProfile, SymptomIndex};
