//! State machine trait for screen and phase enums.
//!
//! Gives every lifecycle enum the same vocabulary for checking and performing
//! transitions, so invalid moves surface as one error shape.

use super::ValidationError;

/// Trait for enums that describe a finite set of states.
///
/// Implementors list their legal edges; `transition_to` and `is_terminal`
/// come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for ModuleStage {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Assessment, Results) | (Results, Chat))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Assessment => vec![Results],
///             Results => vec![Chat],
///             Chat => vec![],
///         }
///     }
/// }
///
/// let next = ModuleStage::Results.transition_to(ModuleStage::Chat)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from self to target is allowed.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns every state reachable in one step.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Validated transition; errors when the edge does not exist.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// True when no outgoing transition exists.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
