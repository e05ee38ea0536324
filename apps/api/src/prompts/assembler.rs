//! System prompt assembly — folds a user's style selections over the catalog
//! tables into one directive string.
//!
//! Section order is fixed: master guide → FORMAT INSTRUCTION → TONE
//! INSTRUCTIONS → TONE CONFLICT RESOLUTION (one section per fired rule) →
//! ANGLE INSTRUCTIONS → BRAND VOICE PROFILE. Sections for absent, unknown, or
//! sentinel selections are omitted entirely; assembly never fails.

use std::collections::HashSet;

use crate::prompts::catalog::{
    angle_instruction, format_instruction, tone_instruction, NONE_SELECTION, TONE_CONFLICTS,
};
use crate::prompts::style_guide::MASTER_SYSTEM_PROMPT;
use crate::prompts::viral::EngagementGoal;

// ────────────────────────────────────────────────────────────────────────────
// Selection inputs
// ────────────────────────────────────────────────────────────────────────────

/// One generation call's style selections, as resolved by the route layer.
///
/// Unknown names and the "None" sentinel are tolerated anywhere; the
/// assembler drops them silently rather than erroring. Tone and angle order
/// is the caller's order and is preserved in the output.
#[derive(Debug, Clone, Default)]
pub struct StyleSelection {
    pub format: Option<String>,
    pub tones: Vec<String>,
    pub angles: Vec<String>,
    pub brand_voice: Option<BrandVoiceProfile>,
    // Viral selections ride along on every request; only the viral assembler
    // consumes them. The standard assembly below never reads them.
    #[allow(dead_code)]
    pub viral_mode: bool,
    #[allow(dead_code)]
    pub viral_angle: Option<String>,
    #[allow(dead_code)]
    pub engagement_goal: Option<EngagementGoal>,
}

/// A user's brand voice, already resolved from the datastore by the caller.
/// Advisory input only: it shapes the directive text, nothing filters the
/// generated output against it afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandVoiceProfile {
    pub name: String,
    pub description: Option<String>,
    pub guidelines: Vec<String>,
    pub excluded_terms: Vec<String>,
    pub preferred_terms: Vec<String>,
    pub samples: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Builds the full system prompt for a standard generation call.
///
/// Pure and deterministic: the same selection always yields the same string,
/// and the master guide is always the first section.
pub fn build_system_prompt(selection: &StyleSelection) -> String {
    let mut prompt = String::from(MASTER_SYSTEM_PROMPT);

    if let Some(format) = selection.format.as_deref() {
        if format != NONE_SELECTION {
            if let Some(text) = format_instruction(format) {
                prompt.push_str("\n\nFORMAT INSTRUCTION:\n");
                prompt.push_str(text);
            }
        }
    }

    // Keeps duplicates and caller order; drops sentinels and unknown names.
    let active_tones: Vec<(&str, &'static str)> = selection
        .tones
        .iter()
        .filter(|tone| tone.as_str() != NONE_SELECTION)
        .filter_map(|tone| tone_instruction(tone).map(|text| (tone.as_str(), text)))
        .collect();

    if !active_tones.is_empty() {
        let bodies: Vec<&str> = active_tones.iter().map(|(_, text)| *text).collect();
        prompt.push_str("\n\nTONE INSTRUCTIONS:\n");
        prompt.push_str(&bodies.join("\n\n"));

        // Conflict rules fire in table order, not selection order, and each
        // fired rule gets its own section.
        let selected: HashSet<&str> = active_tones.iter().map(|(name, _)| *name).collect();
        for rule in TONE_CONFLICTS {
            let (first, second) = rule.pair;
            if selected.contains(first) && selected.contains(second) {
                prompt.push_str("\n\nTONE CONFLICT RESOLUTION:\n");
                prompt.push_str(rule.resolution);
            }
        }
    }

    let active_angles: Vec<&'static str> = selection
        .angles
        .iter()
        .filter(|angle| angle.as_str() != NONE_SELECTION)
        .filter_map(|angle| angle_instruction(angle))
        .collect();

    if !active_angles.is_empty() {
        prompt.push_str("\n\nANGLE INSTRUCTIONS:\n");
        prompt.push_str(&active_angles.join("\n\n"));
    }

    if let Some(voice) = &selection.brand_voice {
        prompt.push_str(&brand_voice_section(voice));
    }

    prompt
}

/// Renders the brand voice section. The name line is unconditional; every
/// other sub-part is omitted independently when its field is empty. At most
/// the first two samples are included.
fn brand_voice_section(voice: &BrandVoiceProfile) -> String {
    let mut section = format!("\n\nBRAND VOICE PROFILE: \"{}\"", voice.name);

    if let Some(description) = voice.description.as_deref() {
        if !description.is_empty() {
            section.push_str("\nDescription: ");
            section.push_str(description);
        }
    }

    if !voice.guidelines.is_empty() {
        let lines: Vec<String> = voice
            .guidelines
            .iter()
            .map(|guideline| format!("- {}", guideline))
            .collect();
        section.push_str("\n\nVoice Guidelines:\n");
        section.push_str(&lines.join("\n"));
    }

    if !voice.preferred_terms.is_empty() {
        section.push_str("\n\nPreferred Terms (use these):\n");
        section.push_str(&voice.preferred_terms.join(", "));
    }

    if !voice.excluded_terms.is_empty() {
        section.push_str("\n\nExcluded Terms (NEVER use these):\n");
        section.push_str(&voice.excluded_terms.join(", "));
    }

    if !voice.samples.is_empty() {
        let examples: Vec<String> = voice
            .samples
            .iter()
            .take(2)
            .enumerate()
            .map(|(i, sample)| format!("Example {}:\n\"{}\"", i + 1, sample))
            .collect();
        section.push_str("\n\nSample Content (match this style):\n");
        section.push_str(&examples.join("\n\n"));
    }

    section
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
