//! ModuleStage enum: which screen the motivation module is showing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Screen of the motivation module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStage {
    #[default]
    Assessment,
    Results,
    Chat,
}

impl ModuleStage {
    /// True when a MotivationScore must be present in this stage.
    pub fn has_score(&self) -> bool {
        !matches!(self, ModuleStage::Assessment)
    }
}

impl StateMachine for ModuleStage {
    /// Valid transitions:
    /// - Assessment -> Results (completed)
    /// - Results -> Chat (coaching requested)
    /// - Chat -> Results (score updated)
    /// - any -> Assessment (retake)
    fn can_transition_to(&self, target: &Self) -> bool {
        use ModuleStage::*;
        matches!(
            (self, target),
            (Assessment, Results) | (Results, Chat) | (Chat, Results) | (_, Assessment)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ModuleStage::*;
        match self {
            Assessment => vec![Results, Assessment],
            Results => vec![Chat, Assessment],
            Chat => vec![Results, Assessment],
        }
    }
}

impl fmt::Display for ModuleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModuleStage::Assessment => "assessment",
            ModuleStage::Results => "results",
            ModuleStage::Chat => "chat",
        };
        write!(f, "{}", s)
    }
}
