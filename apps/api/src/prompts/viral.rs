#![allow(dead_code)]

//! Viral post framework — engagement-optimized counterpart to the standard
//! assembler. Tables distilled from an analysis of 50+ high-performing
//! LinkedIn posts (50 to 4,300+ likes) across FemTech, founder, and
//! building-in-public feeds.
//!
//! `build_viral_prompt` layers its own base directive; it does not call the
//! standard assembler. The engagement rules block is always the final
//! section. `VIRAL_CONFLICTS` is reference data for callers that blend a
//! viral angle with a tone; nothing here applies it automatically.

use serde::{Deserialize, Serialize};

use crate::prompts::catalog::{ConflictRule, NONE_SELECTION};

// ────────────────────────────────────────────────────────────────────────────
// Base directive
// ────────────────────────────────────────────────────────────────────────────

/// Base directive for viral-mode generation. Always the first section.
pub const VIRAL_SYSTEM_PROMPT: &str = r#"VIRAL CONTENT PRINCIPLES:

HOOK MASTERY (First 1-2 lines determine 90% of engagement):
- The hook must create an "information gap" - promise value the reader must scroll to receive
- Use specific numbers, counterintuitive claims, or emotional triggers
- Maximum 15 words in the opening line
- Never start with context-setting. Start mid-story or with the payoff
- Pattern interrupt: say something unexpected that breaks the reader's scroll

HIGH-ENGAGEMENT PATTERNS:
1. CONTRARIAN CREDIBILITY: Challenge conventional wisdom, but back it up
   - "Maven Clinic stopped saying 'empowering women.' Then they hit $1.7 billion."
   - The claim must be surprising AND defensible

2. SPECIFIC VULNERABILITY: Share struggles with concrete details
   - Generic: "I struggled early in my career"
   - Viral: "Five years ago, I was a 'successful' prosecutor crying in the shower before work"

3. DATA AS EMOTION: Numbers that make people feel something
   - "210+ women have faced criminal charges related to pregnancy outcomes since Dobbs"
   - "100 million women track their cycles on apps. Most of that data sits in silos."

4. STATUS PLAY: Content that makes sharing reflect well on the sharer
   - Resource lists (makes sharer look helpful)
   - Contrarian takes (makes sharer look smart)
   - Industry callouts (makes sharer look brave)

5. TRIBAL IDENTITY: Content that signals belonging to a group
   - "Women are not a niche"
   - "Femtech is filling real gaps. But good intentions do NOT replace governance."

STRUCTURAL PATTERNS THAT DRIVE ENGAGEMENT:

THE CONTRARIAN STRUCTURE:
[Counterintuitive claim - 1 line]
[Line break]
[Brief context - why this matters]
[Line break]
Here's what [example] did differently:
1/ [Key insight with supporting detail]
2/ [Key insight with supporting detail]
3/ [Key insight with supporting detail]
[Line break]
Why this matters for you:
[Application/takeaway]
[Line break]
[Thought-provoking close or question]

THE RESOURCE LIST STRUCTURE:
[Clear value promise - who this helps]
[Line break]
[Brief credibility/why you're sharing]
[Line break]
Here are [number] [resources]:
1. [Resource] - [1-line value]
2. [Resource] - [1-line value]
[Continue...]
[Line break]
💡 [Pro tip]
[Line break]
Save this. Share with someone who needs it.

THE PERSONAL STORY STRUCTURE:
[Vulnerable hook - specific moment/admission]
[Line break]
[The struggle - 2-3 sentences]
[Line break]
[The turning point]
[Line break]
Here's what I learned:
→ [Lesson 1]
→ [Lesson 2]
→ [Lesson 3]
[Line break]
[Universal application]
[Line break]
[Reflective question]

THE MILESTONE STRUCTURE:
[Specific number + what it represents]
[Line break]
[Humble acknowledgment]
[Line break]
What this really means:
→ [Deeper meaning 1]
→ [Deeper meaning 2]
→ [Deeper meaning 3]
[Line break]
[Gratitude to specific people]
[Line break]
Here's what's next: [Forward-looking statement]

ENGAGEMENT MECHANICS:
- Posts that get comments: Ask genuine questions, not "Thoughts? 👇"
- Posts that get shares: Provide save-worthy value (lists, frameworks, data)
- Posts that get likes: Create emotional resonance (pride, indignation, hope)
- Posts that go viral: Combine all three

SOFT CTA PATTERNS (Hard sells kill engagement):
- "What do you think?"
- "Drop [emoji] if you agree"
- "What does [topic] mean to you?"
- "Share with someone who needs to hear this"
- "What did I miss?"
- [No CTA - just end strong]

HASHTAG STRATEGY:
- 3-7 hashtags maximum
- Mix broad (#leadership) with niche (#femtech)
- Place at end, not throughout
- Never start a post with hashtags

LINE BREAK RULES:
- One thought per visual line
- Use line breaks to create rhythm and pacing
- White space makes content scannable
- Key statements get their own line for emphasis"#;

// ────────────────────────────────────────────────────────────────────────────
// Viral angle instructions (single-select)
// ────────────────────────────────────────────────────────────────────────────

pub const VIRAL_ANGLE_TAGS: &[(&str, &str)] = &[
    (
        "Pattern-Interrupt",
        r#"Open with something that breaks expectations. Say the opposite of what the industry usually says. Challenge a sacred cow. Name the elephant in the room. The first line should make the reader think "wait, what?" and stop scrolling. The rest of the post delivers on the promise of that interruption with substance.

Examples of pattern-interrupt hooks:
- "[Company] stopped [expected behavior]. Then they [unexpected result]."
- "The biggest lie in [industry] is [common belief]."
- "I [controversial action]. Here's why."
- "Everyone is doing [X]. That's exactly the problem.""#,
    ),
    (
        "Credible-Contrarian",
        r#"Take a position that challenges popular opinion, BUT back it with evidence, examples, or hard-won experience. Pure contrarianism is annoying. Credible contrarianism is compelling. Structure: [State the common belief] → [Present counter-evidence] → [Explain the better alternative] → [Show proof it works]. The reader should think "I never thought of it that way, and now I can't unsee it.""#,
    ),
    (
        "Curated-Value",
        r#"Compile genuinely useful resources, tools, frameworks, or contacts into a single save-worthy post. The value is in the curation - you did the work so they don't have to. Include specific names, links, and brief context for each item. Lists of 5-15 items perform best. End with an invitation to add to the list. These posts get saved, shared, and referenced."#,
    ),
    (
        "Vulnerable-Authority",
        r#"Share a genuine struggle, failure, or difficult moment, but from a position of having learned something valuable. The vulnerability creates connection; the insight creates value. Be specific about the struggle (not generic "hard times"). Include what you learned that the reader can apply. The balance is: enough vulnerability to be human, enough wisdom to be worth following."#,
    ),
    (
        "Data-Driven-Emotion",
        r#"Lead with a statistic or data point that creates an emotional response - shock, anger, hope, or recognition. The number should be specific and surprising. Then contextualize it: what does this number mean for real people? Numbers alone don't go viral. Numbers that make people FEEL something do.

Examples:
- "80% of autoimmune patients are women" (shocking disparity)
- "210+ women have faced criminal charges since Dobbs" (outrage)
- "75,000 followers. All organic." (aspirational)"#,
    ),
    (
        "Industry-Callout",
        r#"Name a problem, hypocrisy, or dysfunction in your industry that others won't say publicly. This requires courage and specificity. Don't vaguebook - name the pattern clearly. Frame it as wanting to improve the industry, not tear it down. These posts resonate because they say what everyone is thinking but no one is posting."#,
    ),
    (
        "Milestone-Gratitude",
        r#"Celebrate an achievement with genuine reflection, specific numbers, and generous credit-sharing. Avoid humble-bragging. Include: the specific milestone, what it means (not just what it is), who helped, and what's next. The best milestone posts make the reader feel included in the win, not envious of it."#,
    ),
    (
        "Behind-The-Curtain",
        r#"Reveal how something actually works - the real process, the honest numbers, the unglamorous truth. Share the thing your industry doesn't usually talk about publicly. This could be pricing, hiring decisions, failures, or actual workflows. Transparency builds trust and engagement."#,
    ),
    (
        "Hot-Take-With-Receipts",
        r#"Make a bold claim about your industry, then immediately back it with evidence. Not just opinion - proof. The structure is: [Bold statement] → [Here's the evidence] → [Here's why this matters]. This combines the engagement of a hot take with the credibility of research."#,
    ),
    (
        "Building-In-Public",
        r#"Share real updates from your journey - wins, losses, numbers, decisions, pivots. Be specific: "We just hit 100 customers" or "I almost quit last Tuesday." Include what you learned. The appeal is authenticity and letting people follow along. Frame progress honestly, including setbacks."#,
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Hook templates (reference data for composer surfaces)
// ────────────────────────────────────────────────────────────────────────────

pub const VIRAL_HOOK_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "contrarian",
        &[
            "[Company/Person] stopped [common practice]. Then they [unexpected positive result].",
            "The biggest myth in [industry] is [common belief].",
            "Everyone says [conventional wisdom]. They're wrong.",
            "[Common advice] is destroying [what it claims to help].",
            "I did the opposite of [common practice]. Here's what happened.",
        ],
    ),
    (
        "vulnerable",
        &[
            "[Time] ago, I was [vulnerable state]. Here's what changed.",
            "I finally [admit difficult truth].",
            "The hardest [time period] of my career taught me [lesson].",
            "I used to [old belief]. Not anymore.",
            "This is the post I wish someone had written when I [was struggling].",
        ],
    ),
    (
        "data-driven",
        &[
            "[Surprising statistic]. Let that sink in.",
            "[Number] [things] in [timeframe]. Here's what I learned.",
            "I analyzed [number] [items]. Here's what nobody talks about.",
            "[Percentage] of [group] are [surprising fact].",
            "The data is clear: [counterintuitive finding].",
        ],
    ),
    (
        "value-forward",
        &[
            "[Number] [resources/tips/lessons] for [specific audience].",
            "Everything I know about [topic] in one post.",
            "The complete [framework/guide/list] for [goal].",
            "I spent [time] learning this so you don't have to.",
            "Stop [common mistake]. Start [better approach].",
        ],
    ),
    (
        "story",
        &[
            "It was [specific time] and I was [specific situation].",
            "[Time ago], I made a decision that [impact].",
            "The moment I knew everything had changed: [scene].",
            "Nobody tells you about [hidden aspect of experience].",
            "[Quote from pivotal conversation].",
        ],
    ),
    (
        "milestone",
        &[
            "[Specific number]. That's [what it represents].",
            "This morning I realized [achievement].",
            "[Timeframe]. That's how long it took to [accomplishment].",
            "We just hit [milestone]. I'm still processing.",
            "From [starting point] to [current state] in [time].",
        ],
    ),
    (
        "curiosity",
        &[
            "What if [unexpected possibility]?",
            "Nobody is talking about [overlooked topic].",
            "Here's what [successful person/company] won't tell you.",
            "The real reason [outcome] isn't [obvious cause].",
            "I've been thinking about [topic]. Here's what I can't figure out.",
        ],
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Annotated examples (reference data)
// ────────────────────────────────────────────────────────────────────────────

/// A real high-performing post, kept as annotated reference material.
#[derive(Debug, Clone, Copy)]
pub struct ViralExample {
    pub hook: &'static str,
    pub engagement: &'static str,
    pub category: &'static str,
    pub why_it_works: &'static str,
    pub full_structure: &'static str,
}

pub const VIRAL_EXAMPLES: &[(&str, ViralExample)] = &[
    (
        "maven-positioning",
        ViralExample {
            hook: "Maven Clinic stopped saying 'empowering women.' Then they hit $1.7 billion.",
            engagement: "457 likes",
            category: "Credible-Contrarian",
            why_it_works: "Counterintuitive opening that challenges industry norm (empowerment messaging), backed by concrete result ($1.7B), promises insider knowledge about why",
            full_structure: r#"[Contrarian hook with specific number]

[Context: Why most companies fail with this approach]

Here's what Maven did differently:

1/ THEY CREATED A CATEGORY INSTEAD OF COMPETING IN ONE
[2-3 sentences explaining with specific details]

2/ THEY POSITIONED ON A BUSINESS MODEL, NOT FEATURES
[2-3 sentences with proof point - "30% conceive without IVF"]

3/ THEY EVOLVED THEIR LANGUAGE AS THEY GREW
[Timeline showing evolution: "Virtual clinic" → "platform" → "operating system"]

Why this matters for YOUR company:
[Market context + specific application]

[Closing question or call to examine own positioning]"#,
        },
    ),
    (
        "algorithmic-silencing",
        ViralExample {
            hook: "Our ads are banned. Educating women is deemed 'inappropriate content.'",
            engagement: "4,300 likes",
            category: "Industry-Callout",
            why_it_works: "Emotional injustice hook, tribal identity (us vs algorithms), specific examples of hypocrisy, call to action for solidarity",
            full_structure: r#"[Provocative hook naming the injustice]

Women are being silenced. Not metaphorically, algorithmically.

[Platform examples with specific content being suppressed]

Here's some examples of why this is so infuriating:

✅ [Permitted content that seems worse]
✅ [Another permitted example]
❌ [Banned content that helps women]

[Call to action for community solidarity]

The algorithm can't silence all of us.

[Hashtags]"#,
        },
    ),
    (
        "femtech-niches",
        ViralExample {
            hook: "7 FemTech niches to build for in 2025",
            engagement: "1,000 likes",
            category: "Curated-Value",
            why_it_works: "Clear value promise, specific number, actionable list format, each item has brief context explaining why it's an opportunity",
            full_structure: r#"[Number] + [category] + [timeframe]

[1-2 sentences of context on market opportunity]

1. [Niche 1]
[Why it's an opportunity - 1-2 sentences]

2. [Niche 2]
[Why it's an opportunity]

[Continue through list...]

[Closing insight or question about which resonates]"#,
        },
    ),
    (
        "stopped-calling-womens-health",
        ViralExample {
            hook: "I built a health company for women. But I've stopped calling it 'women's health.'",
            engagement: "389 likes",
            category: "Pattern-Interrupt",
            why_it_works: "Unexpected admission from founder, challenges category naming, backs up with data points about underserved conditions, ends with community invitation",
            full_structure: r#"[Paradox hook - seems contradictory]

Not because I've changed direction. Because the term has been pigeonholed.

[The perception problem - what people assume]

But women's health is so much more than this.

Here's what's being missed:

[Holistic health connections with emojis as bullets]
👉 [Connection 1]
👉 [Connection 2]

[Data points on underserved conditions]
📊 [Statistic 1]
📊 [Statistic 2]

[What you built and who it's for]

[Invitation to join - soft CTA with emoji]

What does "women's health" mean to you?"#,
        },
    ),
    (
        "75k-followers",
        ViralExample {
            hook: "This morning I realized Femtech Insider has reached 75,000 followers across our channels on LinkedIn.",
            engagement: "499 likes",
            category: "Milestone-Gratitude",
            why_it_works: "Specific number, humble framing ('realized' not 'achieved'), focuses on what it means not what it is, credits community, forward-looking close",
            full_structure: r#"[Specific milestone with platform context]

[Humble acknowledgment - "I'm not usually one to focus on vanity metrics, but..."]

What this really means:
→ [Deeper meaning about community belief]

[How it was achieved - "All organic. No paid promotions."]

[Gratitude to community]

Here's to the next chapter: [Forward goal]

[Hashtags]"#,
        },
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Engagement rules (always the closing section)
// ────────────────────────────────────────────────────────────────────────────

pub const ENGAGEMENT_RULES: &str = r#"ENGAGEMENT OPTIMIZATION:

WHAT DRIVES COMMENTS:
- Asking genuine questions (not "Thoughts?")
- Controversial but defensible positions
- Inviting additions to lists ("What did I miss?")
- Relatable struggles that prompt "me too" responses
- Tagging relevant people who might respond

WHAT DRIVES SHARES:
- Save-worthy value (lists, frameworks, data)
- Content that makes the sharer look good
- Tribal identity content ("Finally someone said it")
- Timely takes on industry news
- Original research or data

WHAT DRIVES LIKES:
- Emotional resonance
- Relatable experiences
- Celebrating others' wins
- Vulnerable authenticity
- Clear, quotable statements

WHAT KILLS ENGAGEMENT:
- Generic hooks ("In today's world...")
- Obvious self-promotion
- Engagement bait ("Agree? 👇")
- No clear value or point
- Too much text without structure
- Starting with hashtags
- Emoji-as-bullet patterns (🔥✅💡)"#;

// ────────────────────────────────────────────────────────────────────────────
// Viral conflict rules (reference data — never auto-applied)
// ────────────────────────────────────────────────────────────────────────────

/// Blending guidance for viral angles combined with clashing tones. Exposed
/// for callers composing their own directives; `build_viral_prompt` does not
/// consult this table.
pub const VIRAL_CONFLICTS: &[ConflictRule] = &[
    ConflictRule {
        pair: ("Credible-Contrarian", "Humble"),
        resolution: r#"When being contrarian while maintaining humility: Lead with "I could be wrong, but here's what I've observed..." then present your contrarian take with evidence. Acknowledge the merit in the conventional view before explaining why you see it differently. The humility is in the framing; the substance is still bold."#,
    },
    ConflictRule {
        pair: ("Vulnerable-Authority", "Assertive"),
        resolution: r#"When combining vulnerability with assertiveness: Be specific about what you struggled with (vulnerability), then be direct about what you learned (assertive). Structure: "I failed at X. Here's why, and here's exactly what to do instead." The vulnerability earns the right to be assertive."#,
    },
    ConflictRule {
        pair: ("Data-Driven-Emotion", "Humorous"),
        resolution: r#"When combining data with humor: Use dry wit to highlight the absurdity the data reveals. Don't make jokes about the data itself - let the numbers speak, then add a wry observation about what they imply. "80% of autoimmune patients are women. But sure, let's fund another erectile dysfunction app.""#,
    },
    ConflictRule {
        pair: ("Industry-Callout", "Optimistic"),
        resolution: r#"When calling out industry problems while staying optimistic: Name the problem specifically and honestly, then pivot to what's possible or who's doing it right. Structure: "Here's what's broken → Here's why it matters → But here's what gives me hope." The criticism is specific; the optimism is earned."#,
    },
    ConflictRule {
        pair: ("Pattern-Interrupt", "Formal"),
        resolution: r#"When using pattern interrupts in a formal voice: The contrast IS the effect. Use polished, professional language to deliver an unexpectedly provocative insight. Think: a buttoned-up executive calmly saying the thing no one expected. The formality makes the interruption hit harder."#,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Engagement goal
// ────────────────────────────────────────────────────────────────────────────

/// What the caller wants the post optimized for. Fixed four-way choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementGoal {
    Comments,
    Shares,
    Likes,
    Viral,
}

impl EngagementGoal {
    /// Guidance paragraph appended to the viral directive. The text carries
    /// its own OPTIMIZE FOR header; no section label is added around it.
    pub fn guidance(self) -> &'static str {
        match self {
            EngagementGoal::Comments => {
                r#"OPTIMIZE FOR COMMENTS: End with a genuine question. Make a claim that invites debate. Ask for additions to a list. Share something relatable that prompts "me too" responses."#
            }
            EngagementGoal::Shares => {
                r#"OPTIMIZE FOR SHARES: Provide save-worthy value. Create content that makes the sharer look knowledgeable. Include original data, frameworks, or curated resources."#
            }
            EngagementGoal::Likes => {
                r#"OPTIMIZE FOR LIKES: Create emotional resonance. Share relatable experiences. Use clear, quotable statements. Show authentic vulnerability or celebrate others."#
            }
            EngagementGoal::Viral => {
                r#"OPTIMIZE FOR VIRALITY: Combine all engagement drivers. Lead with emotion (likes), deliver value (shares), end with invitation (comments). Use a hook that creates information gap."#
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Selections for a viral-mode directive.
#[derive(Debug, Clone, Default)]
pub struct ViralSelection {
    pub viral_angle: Option<String>,
    pub engagement_goal: Option<EngagementGoal>,
    pub content_objective: Option<String>,
}

/// Builds the viral-mode system prompt.
///
/// Same tolerance contract as the standard assembler: unknown angle names and
/// the "None" sentinel drop their section silently. The engagement rules
/// block always closes the output.
pub fn build_viral_prompt(selection: &ViralSelection) -> String {
    let mut prompt = String::from(VIRAL_SYSTEM_PROMPT);

    if let Some(angle) = selection.viral_angle.as_deref() {
        if angle != NONE_SELECTION {
            if let Some(text) = viral_angle_instruction(angle) {
                prompt.push_str("\n\nVIRAL ANGLE INSTRUCTION:\n");
                prompt.push_str(text);
            }
        }
    }

    if let Some(goal) = selection.engagement_goal {
        prompt.push_str("\n\n");
        prompt.push_str(goal.guidance());
    }

    if let Some(objective) = selection.content_objective.as_deref() {
        if !objective.is_empty() {
            prompt.push_str("\n\nCONTENT OBJECTIVE: ");
            prompt.push_str(objective);
        }
    }

    prompt.push_str("\n\n");
    prompt.push_str(ENGAGEMENT_RULES);

    prompt
}

// ────────────────────────────────────────────────────────────────────────────
// Lookups and option listings
// ────────────────────────────────────────────────────────────────────────────

/// Verbatim instruction body for a viral angle name.
pub fn viral_angle_instruction(name: &str) -> Option<&'static str> {
    VIRAL_ANGLE_TAGS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, text)| *text)
}

/// Selectable viral angle names in catalog order.
pub fn viral_angle_options() -> impl Iterator<Item = &'static str> {
    VIRAL_ANGLE_TAGS.iter().map(|(name, _)| *name)
}

/// Hook template categories in catalog order.
pub fn hook_template_categories() -> impl Iterator<Item = &'static str> {
    VIRAL_HOOK_TEMPLATES.iter().map(|(category, _)| *category)
}

/// Opening-line templates for a hook category; empty for unknown categories.
pub fn hook_templates(category: &str) -> &'static [&'static str] {
    VIRAL_HOOK_TEMPLATES
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, templates)| *templates)
        .unwrap_or(&[])
}

/// Annotated reference post by key.
pub fn viral_example(key: &str) -> Option<&'static ViralExample> {
    VIRAL_EXAMPLES
        .iter()
        .find(|(entry_key, _)| *entry_key == key)
        .map(|(_, example)| example)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn viral_selection(
        angle: Option<&str>,
        goal: Option<EngagementGoal>,
        objective: Option<&str>,
    ) -> ViralSelection {
        ViralSelection {
            viral_angle: angle.map(String::from),
            engagement_goal: goal,
            content_objective: objective.map(String::from),
        }
    }

    #[test]
    fn test_empty_selection_is_base_plus_rules() {
        let prompt = build_viral_prompt(&ViralSelection::default());
        assert_eq!(
            prompt,
            format!("{}\n\n{}", VIRAL_SYSTEM_PROMPT, ENGAGEMENT_RULES)
        );
    }

    #[test]
    fn test_output_always_ends_with_engagement_rules() {
        let selections = [
            viral_selection(None, None, None),
            viral_selection(Some("Pattern-Interrupt"), None, None),
            viral_selection(
                Some("Credible-Contrarian"),
                Some(EngagementGoal::Shares),
                Some("Announce our v2 launch"),
            ),
            viral_selection(Some("not-a-real-angle"), Some(EngagementGoal::Likes), None),
        ];
        for selection in &selections {
            let prompt = build_viral_prompt(selection);
            assert!(
                prompt.ends_with(ENGAGEMENT_RULES),
                "engagement rules must close the prompt"
            );
        }
    }

    #[test]
    fn test_known_angle_emits_verbatim_instruction() {
        let prompt = build_viral_prompt(&viral_selection(Some("Pattern-Interrupt"), None, None));
        let expected = format!(
            "\n\nVIRAL ANGLE INSTRUCTION:\n{}",
            viral_angle_instruction("Pattern-Interrupt").unwrap()
        );
        assert!(prompt.contains(&expected));
        assert_eq!(prompt.matches("VIRAL ANGLE INSTRUCTION").count(), 1);
    }

    #[test]
    fn test_unknown_and_sentinel_angles_are_ignored() {
        for angle in ["Shock-Jock", "None"] {
            let prompt = build_viral_prompt(&viral_selection(Some(angle), None, None));
            assert!(!prompt.contains("VIRAL ANGLE INSTRUCTION"));
            assert_eq!(
                prompt,
                format!("{}\n\n{}", VIRAL_SYSTEM_PROMPT, ENGAGEMENT_RULES)
            );
        }
    }

    #[test]
    fn test_goal_guidance_matches_variant() {
        let cases = [
            (EngagementGoal::Comments, "OPTIMIZE FOR COMMENTS:"),
            (EngagementGoal::Shares, "OPTIMIZE FOR SHARES:"),
            (EngagementGoal::Likes, "OPTIMIZE FOR LIKES:"),
            (EngagementGoal::Viral, "OPTIMIZE FOR VIRALITY:"),
        ];
        for (goal, header) in cases {
            let prompt = build_viral_prompt(&viral_selection(None, Some(goal), None));
            assert!(prompt.contains(header), "missing guidance for {goal:?}");
            // The guidance paragraph stands on its own, no wrapping label.
            assert!(prompt.contains(&format!("\n\n{}", goal.guidance())));
        }
    }

    #[test]
    fn test_content_objective_is_inline_after_label() {
        let prompt = build_viral_prompt(&viral_selection(
            None,
            None,
            Some("Announce the beta waitlist"),
        ));
        assert!(prompt.contains("\n\nCONTENT OBJECTIVE: Announce the beta waitlist"));
    }

    #[test]
    fn test_empty_content_objective_is_omitted() {
        let prompt = build_viral_prompt(&viral_selection(None, None, Some("")));
        assert!(!prompt.contains("CONTENT OBJECTIVE"));
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let prompt = build_viral_prompt(&viral_selection(
            Some("Milestone-Gratitude"),
            Some(EngagementGoal::Comments),
            Some("Celebrate 10k users"),
        ));
        assert!(prompt.starts_with(VIRAL_SYSTEM_PROMPT));
        let angle_at = prompt.find("VIRAL ANGLE INSTRUCTION").unwrap();
        let goal_at = prompt.find("OPTIMIZE FOR COMMENTS").unwrap();
        let objective_at = prompt.find("CONTENT OBJECTIVE").unwrap();
        let rules_at = prompt.find(ENGAGEMENT_RULES).unwrap();
        assert!(angle_at < goal_at && goal_at < objective_at && objective_at < rules_at);
    }

    #[test]
    fn test_conflict_table_is_reference_only() {
        // Even when a conflicting angle is selected, no resolution text leaks
        // into the assembled prompt.
        let prompt = build_viral_prompt(&viral_selection(
            Some("Credible-Contrarian"),
            Some(EngagementGoal::Viral),
            None,
        ));
        for rule in VIRAL_CONFLICTS {
            assert!(
                !prompt.contains(rule.resolution),
                "viral conflict resolutions must not be auto-applied"
            );
        }
        assert_eq!(VIRAL_CONFLICTS.len(), 5);
    }

    #[test]
    fn test_viral_angle_options_order_and_count() {
        let options: Vec<&str> = viral_angle_options().collect();
        assert_eq!(options.len(), 10);
        assert_eq!(options.first(), Some(&"Pattern-Interrupt"));
        assert_eq!(options.last(), Some(&"Building-In-Public"));
    }

    #[test]
    fn test_hook_template_lookup() {
        assert_eq!(hook_templates("contrarian").len(), 5);
        assert!(hook_templates("contrarian")[0].starts_with("[Company/Person] stopped"));
        assert!(hook_templates("breaking-news").is_empty());
        assert_eq!(hook_template_categories().count(), 7);
    }

    #[test]
    fn test_viral_example_lookup() {
        let example = viral_example("maven-positioning").unwrap();
        assert_eq!(example.category, "Credible-Contrarian");
        assert!(example.hook.starts_with("Maven Clinic stopped"));
        assert!(viral_example("nonexistent").is_none());
        assert_eq!(VIRAL_EXAMPLES.len(), 5);
    }

    #[test]
    fn test_engagement_goal_deserializes_lowercase() {
        let goal: EngagementGoal = serde_json::from_str("\"comments\"").unwrap();
        assert_eq!(goal, EngagementGoal::Comments);
        let goal: EngagementGoal = serde_json::from_str("\"viral\"").unwrap();
        assert_eq!(goal, EngagementGoal::Viral);
        assert!(serde_json::from_str::<EngagementGoal>("\"retweets\"").is_err());
    }
}
