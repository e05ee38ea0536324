#![allow(dead_code)]

//! Style catalogs — the fixed instruction tables behind every selectable
//! modifier in the post composer.
//!
//! Declaration order is load-bearing: conflict rules are checked and emitted
//! in table order, and option listings surface in table order. The entry
//! bodies go into the assembled system prompt verbatim.

/// Sentinel the composer sends when the user picks no option for a selector.
/// Never a catalog key; the assembler filters it silently.
pub const NONE_SELECTION: &str = "None";

// ────────────────────────────────────────────────────────────────────────────
// Format instructions (single-select)
// ────────────────────────────────────────────────────────────────────────────

pub const FORMAT_TAGS: &[(&str, &str)] = &[
    (
        "Listicles",
        r#"Structure the post as a numbered or bulleted list. Each list item should be a standalone point that delivers value independently. Use a 1-2 sentence hook before the list begins. Each item gets 1-2 sentences max. Do not write a preamble paragraph before every item. End with a closing line after the list, not a summary of the list."#,
    ),
    (
        "Concise",
        r#"Keep the post tight and efficient. Every sentence must earn its place — cut any sentence that restates a point already made or adds context the reader doesn't need. Favor short paragraphs (1-2 sentences each). Remove all throat-clearing, qualifiers, and filler. If a point can be made in 8 words, do not use 20. The post should feel like the writer values the reader's time."#,
    ),
    (
        "Long-form",
        r#"Write an extended LinkedIn post with depth and development. Allow ideas to be explored across multiple paragraphs. Include supporting evidence, examples, or narrative detail that wouldn't fit in a shorter format. Use paragraph breaks and white space for readability — long-form does not mean dense blocks of text. The post should reward the reader who clicks "see more" with genuine substance, not padding."#,
    ),
    (
        "Emoji-free",
        r#"Do not use any emoji anywhere in the post — not in the hook, not as bullet points, not as emphasis, not in the closing. Rely entirely on word choice, punctuation, and structure to convey emphasis and emotion. This includes common LinkedIn substitutes like arrows (→) used decoratively."#,
    ),
    (
        "Numbers",
        r#"Lead with or heavily feature specific numbers, statistics, data points, percentages, or quantified results throughout the post. Open with a number when possible ("73% of...", "I spent 4 years...", "3 things I learned after..."). Numbers should feel concrete and specific, not rounded or vague. Prefer "47%" over "nearly half" and "11 months" over "about a year.""#,
    ),
    (
        "One-liner",
        r#"Structure the entire post as a single impactful sentence or a very short statement (1-3 sentences max). The post should deliver its full punch without needing elaboration. Think of it as a headline that doesn't need an article underneath it. No setup, no context-setting, no CTA — just the line itself. If a second sentence is used, it should sharpen the first, not explain it."#,
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Tone instructions (multi-select, caller order preserved)
// ────────────────────────────────────────────────────────────────────────────

pub const TONE_TAGS: &[(&str, &str)] = &[
    (
        "Assertive",
        r#"Write with confidence and directional clarity. Make declarative statements. Do not hedge with "I think," "maybe," "it might be worth considering." State positions as positions, not suggestions. Use short, direct sentences. The voice should feel like someone who has earned the right to speak plainly and does. Assertive is NOT aggressive — it does not attack, dismiss, or belittle. It simply does not apologize for having a clear point of view."#,
    ),
    (
        "Enthusiastic",
        r#"Write with genuine, visible energy and excitement about the subject. Use exclamatory phrasing sparingly but meaningfully — not every sentence, but at key moments. The energy should feel earned and specific ("This changed how I think about hiring" not "This is AMAZING!"). Pacing should feel upbeat. Sentence rhythm should feel forward-moving, not reflective. Enthusiastic is NOT manic or hyperbolic — it is a person visibly energized by an idea, not performing excitement."#,
    ),
    (
        "Irreverent",
        r#"Write with a willingness to break conventions, poke at sacred cows, and say the thing most people in this space won't say. Use informal language, deliberate rule-breaking (sentence fragments, starting with "And" or "But"), and a tone that signals the writer doesn't take themselves or the industry too seriously. Irreverent is NOT mean-spirited or shocking for shock's sake — it's the voice of someone who sees through the industry BS and is comfortable saying so with a smirk."#,
    ),
    (
        "Friendly",
        r#"Write in a warm, approachable, person-to-person tone. Use conversational language — contractions, casual phrasing, the occasional aside. The reader should feel like they're hearing from a colleague they like, not a thought leader performing wisdom. Address the reader naturally ("you" is fine, but don't overuse it). Friendly is warm and easygoing. It is NOT intimate, emotional, or deeply personal — that territory belongs to Compassionate. Friendly is a coffee chat. Compassionate is a heart-to-heart."#,
    ),
    (
        "Humorous",
        r#"Weave humor into the post through wit, observational comedy, self-deprecation, or unexpected turns of phrase. Humor should serve the point, not replace it — the post should still deliver genuine value or insight. The funniest LinkedIn posts are funny because they name something true that nobody says, not because they tell jokes. Avoid punchline-setup structures that feel like stand-up routines. Dry humor and understatement work better on LinkedIn than broad comedy."#,
    ),
    (
        "Ironic",
        r#"Write with a layer of irony — saying one thing while meaning another, or highlighting contradictions between what people say and what they do. Use juxtaposition, deadpan delivery, and understated observations that let the reader connect the dots. Ironic tone works best when the writer appears to be stating something straightforwardly while the absurdity speaks for itself. Do not explain the irony. Trust the reader. Ironic is NOT the same as sarcastic — irony observes contradictions, sarcasm attacks them."#,
    ),
    (
        "Formal",
        r#"Write with polished, professional language appropriate for an executive or institutional audience. Use complete sentences, proper grammar, and measured phrasing. Avoid contractions, slang, colloquialisms, and casual asides. The voice should feel like a well-written business communication — clear, precise, and composed. Formal is NOT stiff, bureaucratic, or jargon-heavy — it is the voice of someone who commands respect through clarity and precision, not through complexity."#,
    ),
    (
        "Serious",
        r#"Write with gravity and weight. The tone should signal that the subject matters and deserves real attention. Avoid humor, playfulness, or lightness. Use measured pacing — don't rush through points. Allow important statements to stand alone in short paragraphs for emphasis. Serious is NOT grim or negative — a post can be serious and optimistic, serious and forward-looking. It simply treats the subject with the respect it deserves rather than making it entertaining."#,
    ),
    (
        "Humble",
        r#"Write from a position of learning, gratitude, or honest acknowledgment of what the writer doesn't know. Share credit. Acknowledge luck, privilege, timing, or help from others. Use phrases that show genuine self-awareness, not performative modesty. Humble is NOT self-deprecating to the point of undermining credibility — the writer still has something valuable to share, they just don't position themselves as the hero of every story. Avoid the "I'm just a humble person" humblebrag pattern."#,
    ),
    (
        "Persuasive",
        r#"Write to change the reader's mind or move them toward a specific action or belief. Build an argument with evidence, logic, and emotional resonance. Anticipate objections and address them. Use strategic repetition of key phrases. Structure the post so each paragraph builds on the last, leading to an inevitable conclusion. Persuasive is NOT the same as Assertive — Assertive states a position confidently, Persuasive actively constructs the case to bring the reader along. Assertive says "This is true." Persuasive says "Here's why this is true, and here's what it means for you.""#,
    ),
    (
        "Critical",
        r#"Write with an analytical, evaluative lens. Examine assumptions, challenge conventional wisdom, and identify flaws in popular thinking. The writer is not cynical — they are rigorous. They ask "but does this actually work?" and "what are we not talking about?" Critical tone should feel intellectually honest, like someone who respects the reader enough to question easy answers. Critical is NOT negative or dismissive — it is thoughtful skepticism that still arrives at a constructive conclusion."#,
    ),
    (
        "Straightforward",
        r#"Write with zero ornamentation. Say exactly what you mean in the most direct way possible. No metaphors unless they genuinely clarify. No storytelling unless the story IS the point. No rhetorical questions. No "let me explain why this matters." Just state the thing. The reader should finish the post thinking "that person said exactly what they meant and nothing more." Straightforward is the most minimalist tone — it strips away every device and relies on the strength of the idea itself."#,
    ),
    (
        "Sarcastic",
        r#"Write with sharp, biting wit that uses exaggeration or mock-agreement to make a point. Sarcasm should target ideas, systems, or common behaviors — never individuals or the reader. The best sarcastic LinkedIn posts pretend to agree with something absurd before revealing why it's absurd. Use phrases like "obviously," "surely," "because nothing says X like Y." Sarcastic is sharper than Ironic — where Ironic observes contradictions quietly, Sarcastic calls them out with a raised eyebrow."#,
    ),
    (
        "Optimistic",
        r#"Write from a place of genuine forward-looking belief that things can improve, that progress is being made, or that the reader has agency to create change. Optimistic does NOT mean naive or dismissive of problems — acknowledge the difficulty, then pivot to what's possible. Avoid toxic positivity ("everything happens for a reason"). The best optimistic content earns its optimism by first being honest about the challenge. The reader should feel energized, not patronized."#,
    ),
    (
        "Pessimistic",
        r#"Write from a position of honest skepticism about outcomes, trends, or conventional optimism. Name the problems that others gloss over. Acknowledge what isn't working, what's getting worse, or what people are ignoring. Pessimistic is NOT hopeless or nihilistic — it is the voice of someone who believes honesty about problems is more useful than false hope. A pessimistic post can still end with a path forward, but it doesn't pretend the path is easy."#,
    ),
    (
        "Celebratory",
        r#"Write to mark an achievement, milestone, win, or moment of recognition. The energy should feel genuinely proud without tipping into bragging. Share specific details about what was accomplished and who helped. Celebratory tone should make the reader want to congratulate, not roll their eyes. Avoid the "so humbled and honored" formula. Instead, show real emotion — surprise, relief, pride, gratitude — through specific details about the experience. The best celebratory posts make the audience feel like they're part of the win."#,
    ),
    (
        "Compassionate",
        r#"Write with deep empathy, emotional intelligence, and genuine care for the reader's experience. Acknowledge pain, difficulty, or struggle without rushing to fix it. Use specific, accurate descriptions of what the reader might be feeling rather than generic empathy statements ("I know this is hard" is generic; "The exhaustion of doing everything right and still feeling like you're falling behind" is specific). Compassionate is NOT the same as Friendly — Friendly is warm and casual, Compassionate is emotionally present and intimate. It speaks to the reader's inner experience, not just their surface situation."#,
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Angle instructions (multi-select, caller order preserved)
// ────────────────────────────────────────────────────────────────────────────

pub const ANGLE_TAGS: &[(&str, &str)] = &[
    (
        "Contrarian",
        r#"Frame the post as a challenge to a widely held belief, popular trend, or industry consensus. Open by naming the thing most people believe, then explain why it's wrong, incomplete, or overdue for rethinking. The contrarian position must be substantiated — this is not disagreeing for attention, it's presenting a genuinely different perspective backed by reasoning or experience. Structure: [Common belief] → [Why it's wrong] → [What's actually true]."#,
    ),
    (
        "Inspirational",
        r#"Frame the post to uplift, motivate, or remind the reader of what's possible. Use real stories, earned wisdom, or personal turning points — not generic motivation. The most effective inspirational content on LinkedIn comes from specificity: a particular moment, decision, or realization that changed something. Avoid greeting-card platitudes ("believe in yourself"). Instead, show the moment that made belief feel possible. Inspirational is about expanding what the reader thinks is possible for themselves."#,
    ),
    (
        "Story",
        r#"Frame the entire post as a narrative with characters, setting, tension, and resolution. Open in the middle of the action or at a specific moment in time — not with context or backstory. Use scene-setting details ("It was 11 PM on a Tuesday and I was sitting in my car in the parking lot"). The story should have a turning point and arrive at an insight, but the insight emerges from the story rather than being tacked on as a "lesson learned" paragraph at the end."#,
    ),
    (
        "Life Experience",
        r#"Frame the post around something the writer personally went through — a career moment, a failure, a transition, a decision, a realization. The value comes from the authenticity of lived experience, not from storytelling technique. Unlike Story (which emphasizes narrative structure and scene-setting), Life Experience can be direct and reflective: "Five years ago I made a decision that..." The hook is credibility through experience, not craft. The reader should think "this person actually went through this.""#,
    ),
    (
        "Easy Steps",
        r#"Frame the post as an actionable, followable process the reader can implement immediately. Break complex ideas into simple sequential steps. Each step should be specific enough that the reader knows exactly what to do, not vague ("Step 1: Build a strategy" is vague; "Step 1: Open a spreadsheet and list every customer who churned in the last 90 days" is specific). The promise is simplicity and immediate applicability."#,
    ),
    (
        "Comparison",
        r#"Frame the post around a direct comparison between two things — approaches, tools, eras, mindsets, types of people, strategies, or outcomes. Use a clear "X vs. Y" structure. The comparison should reveal an insight that isn't obvious without putting the two things side by side. Effective comparison posts show what each option looks like in practice, not just in theory. Can be structured as a side-by-side list, a "before/after" narrative, or a "most people do X, the best do Y" framing."#,
    ),
    (
        "You're Doing It Wrong",
        r#"Frame the post around a specific common mistake, bad practice, or inefficient habit that the reader likely has. Name the wrong behavior concretely ("You're spending 3 hours on slide decks nobody reads"), explain why it's wrong, and offer a better alternative. The tone should feel like a direct but well-meaning correction from someone who used to make the same mistake."#,
    ),
    (
        "My Secret",
        r#"Frame the post around revealing a non-obvious tactic, approach, insight, or resource that the writer credits for their success or results. The "secret" should be genuinely surprising or counterintuitive — not a well-known best practice repackaged as a revelation. The hook is the promise of insider knowledge: "Here's what actually moved the needle." Build tension before the reveal."#,
    ),
    (
        "Tactical",
        r#"Frame the post around a specific, immediately usable technique, tool, framework, or method. Skip the philosophy and go straight to the "how." Include enough detail that the reader could implement the tactic today without additional research. Tactical posts prioritize utility over insight — the reader should save or screenshot the post because it's a reference they'll use. Use specific names, numbers, tools, and steps rather than general principles."#,
    ),
    (
        "I Thought I Knew",
        r#"Frame the post around a belief or assumption the writer held that turned out to be wrong, and what they learned from the correction. The structure is: [What I used to believe] → [What changed my mind] → [What I believe now]. The power of this angle comes from intellectual honesty — the writer is publicly admitting they were wrong, which builds trust. The new insight should be genuinely different from the old belief, not a minor refinement."#,
    ),
    (
        "Promotional",
        r#"Frame the post around a product, service, event, launch, or offering the writer wants to promote. The promotion should be honest and direct — state clearly what is being promoted and why it matters to the reader. The most effective promotional posts on LinkedIn lead with the value to the reader before introducing the product. Do not disguise the promotion as something else. Be transparent: this is a promotion, and here's why it's worth your attention. Include a clear single call-to-action."#,
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Tone conflict rules
// ────────────────────────────────────────────────────────────────────────────

/// A pairwise tag combination that pulls the voice in opposite directions
/// and needs explicit blending guidance.
#[derive(Debug, Clone, Copy)]
pub struct ConflictRule {
    pub pair: (&'static str, &'static str),
    pub resolution: &'static str,
}

/// Checked against the selected tones after filtering. A rule fires when both
/// members of its pair are selected, whatever order the caller listed them in.
/// Emission order is this table's order, not the selection order.
pub const TONE_CONFLICTS: &[ConflictRule] = &[
    ConflictRule {
        pair: ("Sarcastic", "Compassionate"),
        resolution: r#"When both Sarcastic and Compassionate are selected: Direct the sarcasm at systems, industries, norms, or common bad advice — never at the reader or people who are struggling. The compassion targets the human experience; the sarcasm targets the structures that make the experience harder."#,
    },
    ConflictRule {
        pair: ("Humorous", "Serious"),
        resolution: r#"When both Humorous and Serious are selected: Use dry, understated humor that doesn't undercut the gravity of the topic. The humor should come from honest observations and specificity, not jokes or punchlines. Think of a surgeon with a dry wit — the subject is serious, but the human delivering it is allowed to be wry."#,
    },
    ConflictRule {
        pair: ("Optimistic", "Pessimistic"),
        resolution: r#"When both Optimistic and Pessimistic are selected: Acknowledge the real problems with unflinching honesty (pessimistic), then pivot to what's still possible or what can be done about it (optimistic). This creates a "realistic optimism" or "hopeful realism" voice — the reader trusts the optimism because the writer didn't skip the hard part."#,
    },
    ConflictRule {
        pair: ("Formal", "Irreverent"),
        resolution: r#"When both Formal and Irreverent are selected: Use polished, grammatically precise language to deliver unexpectedly blunt or convention-challenging ideas. The contrast between the refined delivery and the subversive content is the voice. Think: a buttoned-up executive who calmly says the thing nobody expects."#,
    },
    ConflictRule {
        pair: ("Humble", "Assertive"),
        resolution: r#"When both Humble and Assertive are selected: Share credit and acknowledge context while still taking a clear position. The writer is confident in what they believe but honest about how they got there and what they don't know. This is the "I could be wrong, but here's what I've seen" voice — it asserts without claiming omniscience."#,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Lookups and option listings
// ────────────────────────────────────────────────────────────────────────────

/// Verbatim instruction body for a format name, if it exists in the catalog.
pub fn format_instruction(name: &str) -> Option<&'static str> {
    lookup(FORMAT_TAGS, name)
}

/// Verbatim instruction body for a tone name, if it exists in the catalog.
pub fn tone_instruction(name: &str) -> Option<&'static str> {
    lookup(TONE_TAGS, name)
}

/// Verbatim instruction body for an angle name, if it exists in the catalog.
pub fn angle_instruction(name: &str) -> Option<&'static str> {
    lookup(ANGLE_TAGS, name)
}

/// Selectable format names in catalog order (the composer prepends its own
/// "None" entry).
pub fn format_options() -> impl Iterator<Item = &'static str> {
    FORMAT_TAGS.iter().map(|(name, _)| *name)
}

/// Selectable tone names in catalog order.
pub fn tone_options() -> impl Iterator<Item = &'static str> {
    TONE_TAGS.iter().map(|(name, _)| *name)
}

/// Selectable angle names in catalog order.
pub fn angle_options() -> impl Iterator<Item = &'static str> {
    ANGLE_TAGS.iter().map(|(name, _)| *name)
}

fn lookup(table: &'static [(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes_are_stable() {
        assert_eq!(FORMAT_TAGS.len(), 6, "format catalog changed size");
        assert_eq!(TONE_TAGS.len(), 17, "tone catalog changed size");
        assert_eq!(ANGLE_TAGS.len(), 11, "angle catalog changed size");
        assert_eq!(TONE_CONFLICTS.len(), 5, "conflict table changed size");
    }

    #[test]
    fn test_lookup_returns_verbatim_body() {
        let text = format_instruction("Listicles").unwrap();
        assert!(text.starts_with("Structure the post as a numbered or bulleted list."));

        let text = tone_instruction("Assertive").unwrap();
        assert!(text.starts_with("Write with confidence and directional clarity."));

        let text = angle_instruction("Contrarian").unwrap();
        assert!(text.starts_with("Frame the post as a challenge to a widely held belief"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(tone_instruction("assertive").is_none());
        assert!(format_instruction("LISTICLES").is_none());
    }

    #[test]
    fn test_unknown_and_sentinel_names_have_no_entry() {
        assert!(format_instruction("Haiku").is_none());
        assert!(tone_instruction("Menacing").is_none());
        assert!(angle_instruction("Clickbait").is_none());
        assert!(format_instruction(NONE_SELECTION).is_none());
        assert!(tone_instruction(NONE_SELECTION).is_none());
        assert!(angle_instruction(NONE_SELECTION).is_none());
    }

    #[test]
    fn test_conflict_pairs_reference_known_tones() {
        for rule in TONE_CONFLICTS {
            let (a, b) = rule.pair;
            assert!(
                tone_instruction(a).is_some(),
                "conflict pair member '{a}' is not a tone catalog key"
            );
            assert!(
                tone_instruction(b).is_some(),
                "conflict pair member '{b}' is not a tone catalog key"
            );
            assert!(!rule.resolution.is_empty());
        }
    }

    #[test]
    fn test_option_listings_follow_declaration_order() {
        let formats: Vec<&str> = format_options().collect();
        assert_eq!(formats.first(), Some(&"Listicles"));
        assert_eq!(formats.last(), Some(&"One-liner"));

        let tones: Vec<&str> = tone_options().collect();
        assert_eq!(tones.first(), Some(&"Assertive"));
        assert_eq!(tones.last(), Some(&"Compassionate"));

        let angles: Vec<&str> = angle_options().collect();
        assert_eq!(angles.first(), Some(&"Contrarian"));
        assert_eq!(angles.last(), Some(&"Promotional"));
    }

    #[test]
    fn test_catalog_keys_are_unique() {
        for table in [FORMAT_TAGS, TONE_TAGS, ANGLE_TAGS] {
            for (i, (key, _)) in table.iter().enumerate() {
                assert!(
                    !table[i + 1..].iter().any(|(other, _)| other == key),
                    "duplicate catalog key '{key}'"
                );
            }
        }
    }
}
