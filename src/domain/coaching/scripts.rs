//! Scripted coaching content.
//!
//! Provides the per-stage opening lines, reflections and open questions,
//! plus the fixed replies used by the keyword rules.

use crate::domain::assessment::MotivationStage;

/// Canned utterances for one stage of change.
#[derive(Debug, PartialEq, Eq)]
pub struct StageScript {
    /// The stage this script was written for.
    pub stage: MotivationStage,
    pub opening: &'static str,
    pub questions: &'static [&'static str],
    pub reflections: &'static [&'static str],
}

/// Returns the script for `stage`.
///
/// Stages without a dedicated script share the contemplation script.
pub fn script_for_stage(stage: MotivationStage) -> &'static StageScript {
    match stage {
        MotivationStage::Precontemplation => &PRECONTEMPLATION_SCRIPT,
        MotivationStage::Contemplation => &CONTEMPLATION_SCRIPT,
        MotivationStage::Preparation => &PREPARATION_SCRIPT,
        MotivationStage::Action | MotivationStage::Maintenance => &CONTEMPLATION_SCRIPT,
    }
}

/// Returns the script for a stage label, falling back to contemplation for
/// anything unrecognized.
pub fn script_for_label(label: &str) -> &'static StageScript {
    label
        .parse::<MotivationStage>()
        .map(script_for_stage)
        .unwrap_or(&CONTEMPLATION_SCRIPT)
}

/// The coach's first message in a new chat.
pub fn opening_message(physician_name: &str, script: &StageScript) -> String {
    format!(
        "Hello! I'm your diabetes prevention coach. {} asked me to work with you on your health journey. {}",
        physician_name, script.opening
    )
}

// ============================================================================
// Keyword Markers
// ============================================================================

pub const NEGATION_MARKERS: &[&str] = &["no", "don't", "can't"];
pub const READINESS_MARKERS: &[&str] = &["ready", "want", "need"];
pub const ANXIETY_MARKERS: &[&str] = &["scared", "worried", "concerned"];
pub const FAMILY_MARKERS: &[&str] = &["family", "children", "kids"];

// ============================================================================
// Fixed Replies
// ============================================================================

pub const READINESS_REPLY: &str = "I hear that you're feeling ready to make some changes. That takes courage. What feels most important to you right now?";

pub const ANXIETY_REPLY: &str = "It sounds like you have some concerns about this. That's completely understandable. What worries you most?";

pub const FAMILY_REPLY: &str = "Your family is clearly important to you. How might preventing diabetes help you be there for them in the way you want?";

// ============================================================================
// Stage Scripts
// ============================================================================

static PRECONTEMPLATION_SCRIPT: StageScript = StageScript {
    stage: MotivationStage::Precontemplation,
    opening: "I appreciate you taking the time to talk with me today. It sounds like you're not quite ready to think about making changes right now, and that's completely okay. Many people feel this way.",
    questions: &[
        "What brought you here today?",
        "What would need to happen for you to consider this important?",
        "What concerns do you have about diabetes?",
        "What matters most to you in your life right now?",
    ],
    reflections: &[
        "It sounds like you have a lot on your plate right now.",
        "You're being honest about where you are, and I respect that.",
        "You value your independence and don't want to be told what to do.",
    ],
};

static CONTEMPLATION_SCRIPT: StageScript = StageScript {
    stage: MotivationStage::Contemplation,
    opening: "I can hear that you're thinking about making some changes, but you also have some concerns. That's very normal - most people feel conflicted when considering changes to their lifestyle.",
    questions: &[
        "What are some of the good things about your current lifestyle?",
        "What concerns you most about developing diabetes?",
        "If you decided to make changes, what would be most important to you?",
        "What's held you back from making changes before?",
    ],
    reflections: &[
        "On one hand, you see the benefits of changing, but on the other hand, you're worried about...",
        "Part of you wants to prevent diabetes, and part of you feels it might be too difficult.",
        "You're torn between wanting to stay healthy and maintaining your current routine.",
    ],
};

static PREPARATION_SCRIPT: StageScript = StageScript {
    stage: MotivationStage::Preparation,
    opening: "It's great to hear that you're ready to take some steps toward preventing diabetes. You seem motivated and thoughtful about this decision.",
    questions: &[
        "What specific changes are you thinking about making?",
        "What would success look like to you?",
        "What obstacles do you think you might face?",
        "What has worked for you in the past when making changes?",
    ],
    reflections: &[
        "You're ready to take action and just want to make sure you do it right.",
        "You're being realistic about the challenges while staying optimistic.",
        "You've thought this through and feel confident about moving forward.",
    ],
};
