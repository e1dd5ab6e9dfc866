//! Assessment Store Adapters.
//!
//! - `InMemoryAssessmentStore` - JSON text in a map, for tests and single runs
//! - `FileAssessmentStore` - One YAML file per patient

mod file_assessment_store;
mod in_memory_assessment_store;

pub use file_assessment_store::FileAssessmentStore;
pub use in_memory_assessment_store::InMemoryAssessmentStore;
