//! Stages of change and the results-screen profile for each.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Percentage, ValidationError};

/// Canonical stage of change, ordered by increasing readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotivationStage {
    Precontemplation,
    Contemplation,
    Preparation,
    Action,
    Maintenance,
}

impl MotivationStage {
    /// All stages in readiness order.
    pub const ALL: [MotivationStage; 5] = [
        MotivationStage::Precontemplation,
        MotivationStage::Contemplation,
        MotivationStage::Preparation,
        MotivationStage::Action,
        MotivationStage::Maintenance,
    ];

    /// Lowercase label used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            MotivationStage::Precontemplation => "precontemplation",
            MotivationStage::Contemplation => "contemplation",
            MotivationStage::Preparation => "preparation",
            MotivationStage::Action => "action",
            MotivationStage::Maintenance => "maintenance",
        }
    }

    /// Label with the first letter capitalized, as shown on stage badges.
    pub fn display_name(&self) -> String {
        let label = self.as_str();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// True for the two stages that always warrant active outreach.
    pub fn is_early(&self) -> bool {
        matches!(
            self,
            MotivationStage::Precontemplation | MotivationStage::Contemplation
        )
    }

    /// Presentation data shown on the results screen.
    pub fn profile(&self) -> &'static StageProfile {
        match self {
            MotivationStage::Precontemplation => &PRECONTEMPLATION_PROFILE,
            MotivationStage::Contemplation => &CONTEMPLATION_PROFILE,
            MotivationStage::Preparation => &PREPARATION_PROFILE,
            MotivationStage::Action => &ACTION_PROFILE,
            MotivationStage::Maintenance => &MAINTENANCE_PROFILE,
        }
    }
}

impl fmt::Display for MotivationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MotivationStage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        MotivationStage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == normalized)
            .ok_or_else(|| {
                ValidationError::invalid_format("stage", format!("unrecognized stage '{}'", s))
            })
    }
}

/// What the results screen says about a stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub readiness: Percentage,
    pub next_steps: [&'static str; 3],
    pub motivational_message: &'static str,
}

static PRECONTEMPLATION_PROFILE: StageProfile = StageProfile {
    title: "Not Ready Yet",
    description: "You're not currently thinking about making health changes",
    readiness: Percentage::saturating(10),
    next_steps: [
        "Explore what diabetes prevention means for you",
        "Learn about your personal risk factors",
        "Consider the benefits of small changes",
    ],
    motivational_message: "That's completely normal. Many people aren't ready to make changes right away, and that's okay. Let's explore what might be holding you back and what could motivate you in the future.",
};

static CONTEMPLATION_PROFILE: StageProfile = StageProfile {
    title: "Getting Ready",
    description: "You're thinking about making changes but haven't committed yet",
    readiness: Percentage::saturating(30),
    next_steps: [
        "Explore your ambivalence about change",
        "Identify personal reasons for preventing diabetes",
        "Address concerns about making lifestyle changes",
    ],
    motivational_message: "You're in a thoughtful place right now. It's natural to feel uncertain about making changes. Let's explore what's important to you and what might help tip the balance toward taking action.",
};

static PREPARATION_PROFILE: StageProfile = StageProfile {
    title: "Ready to Act",
    description: "You're planning to make changes in the near future",
    readiness: Percentage::saturating(60),
    next_steps: [
        "Create a specific action plan",
        "Identify potential barriers and solutions",
        "Build confidence in your ability to succeed",
    ],
    motivational_message: "Excellent! You're ready to take action. This is an exciting stage where we can work together to create a plan that fits your life and helps you succeed.",
};

static ACTION_PROFILE: StageProfile = StageProfile {
    title: "Taking Action",
    description: "You're actively making health changes",
    readiness: Percentage::saturating(80),
    next_steps: [
        "Maintain momentum and track progress",
        "Problem-solve obstacles as they arise",
        "Build sustainable habits",
    ],
    motivational_message: "Wonderful! You're already taking steps to improve your health. Let's work on maintaining this momentum and making these changes stick for the long term.",
};

static MAINTENANCE_PROFILE: StageProfile = StageProfile {
    title: "Maintaining Changes",
    description: "You're sustaining healthy changes long-term",
    readiness: Percentage::HUNDRED,
    next_steps: [
        "Prevent relapse and stay motivated",
        "Refine and optimize your healthy habits",
        "Share your success with others",
    ],
    motivational_message: "Congratulations! You've successfully maintained healthy changes. Let's focus on keeping up this great work and potentially expanding on your success.",
};
