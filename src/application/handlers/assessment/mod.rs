//! Assessment command and query handlers.

mod complete_assessment;
mod load_assessment;

pub use complete_assessment::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
};
pub use load_assessment::{LoadAssessmentHandler, LoadAssessmentQuery};
