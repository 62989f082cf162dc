//! The ordered markup rewrite pipeline.
//!
//! Statblock text goes through five passes, in a fixed order that is part
//! of the contract: markdown emphasis, dice roll triggers, difficulty
//! class highlights, save-shorthand triggers, and condition tooltips.
//! Earlier passes inject HTML-like markup; later passes must not touch
//! the inside of those tags, so the save and tooltip passes only rewrite
//! text outside `<...>` brackets.
//!
//! Re-running the pipeline on its own output re-matches notation inside
//! trigger content, so `parse_text` is not idempotent. Callers feed it
//! raw statblock text exactly once.

use std::sync::LazyLock;

use regex::Regex;

use crate::terms::{GAME_TERMS, GameTerm};

static BOLD_ITALIC_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.*?)\*\*\*").unwrap());
static BOLD_ITALIC_UNDERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"___(.*?)___").unwrap());
static BOLD_STARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static BOLD_UNDERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());
static ITALIC_STARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static ITALIC_UNDERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());

static DICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+[dD]\d+(?:\s*[+-]\s*\d+)?").unwrap());
static DC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)DC\s+\d+\s+(?:WIL|INT|STR|DEX)").unwrap());
static SAVE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z/]+[+\-]+\d*").unwrap());

/// Compiled whole-word pattern per vocabulary term.
static TERM_PATTERNS: LazyLock<Vec<(Regex, &'static GameTerm)>> = LazyLock::new(|| {
    GAME_TERMS
        .iter()
        .map(|term| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", term.name)).unwrap();
            (re, term)
        })
        .collect()
});

/// One rewrite pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Markdown emphasis: bold-italic, then bold, then italic.
    Markdown,
    /// Dice notation becomes interactive roll triggers.
    DiceTriggers,
    /// `DC 15 STR` style checks get a non-interactive highlight.
    DifficultyClasses,
    /// Save shorthand (`STR+2`, `WIL-`) becomes save triggers.
    SaveTriggers,
    /// Condition names get tooltip spans.
    TermTooltips,
}

impl Stage {
    /// Apply this pass to the text.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Markdown => markdown_pass(text),
            Self::DiceTriggers => dice_pass(text),
            Self::DifficultyClasses => dc_pass(text),
            Self::SaveTriggers => save_pass(text),
            Self::TermTooltips => tooltip_pass(text),
        }
    }
}

/// An ordered sequence of rewrite passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    /// The passes, applied front to back.
    pub stages: Vec<Stage>,
}

impl Pipeline {
    /// The contract order: markdown, dice, difficulty classes, saves,
    /// tooltips. Reordering changes output.
    pub fn standard() -> Self {
        Self {
            stages: vec![
                Stage::Markdown,
                Stage::DiceTriggers,
                Stage::DifficultyClasses,
                Stage::SaveTriggers,
                Stage::TermTooltips,
            ],
        }
    }

    /// Run every pass over the text. Empty input is returned unchanged.
    pub fn parse(&self, text: &str) -> String {
        if text.is_empty() {
            return text.to_string();
        }
        self.stages
            .iter()
            .fold(text.to_string(), |acc, stage| stage.apply(&acc))
    }
}

/// Rewrite text with the standard pipeline.
pub fn parse_text(text: &str) -> String {
    Pipeline::standard().parse(text)
}

/// Markdown emphasis. Triple markers must resolve before double before
/// single, or the shorter patterns eat parts of the longer ones.
fn markdown_pass(text: &str) -> String {
    let result = BOLD_ITALIC_STARS.replace_all(text, "<strong><em>$1</em></strong>");
    let result = BOLD_ITALIC_UNDERS.replace_all(&result, "<strong><em>$1</em></strong>");
    let result = BOLD_STARS.replace_all(&result, "<strong>$1</strong>");
    let result = BOLD_UNDERS.replace_all(&result, "<strong>$1</strong>");
    let result = ITALIC_STARS.replace_all(&result, "<em>$1</em>");
    ITALIC_UNDERS.replace_all(&result, "<em>$1</em>").into_owned()
}

fn dice_pass(text: &str) -> String {
    DICE_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let notation = &caps[0];
            format!(
                "<button class=\"roll-trigger\" data-notation=\"{notation}\">{notation}</button>"
            )
        })
        .into_owned()
}

fn dc_pass(text: &str) -> String {
    DC_RE
        .replace_all(text, "<span class=\"dc-check\">$0</span>")
        .into_owned()
}

fn save_pass(text: &str) -> String {
    rewrite_outside_tags(text, |segment| {
        SAVE_RE
            .replace_all(segment, |caps: &regex::Captures<'_>| {
                let shorthand = &caps[0];
                format!(
                    "<button class=\"save-trigger\" data-save=\"{shorthand}\">{shorthand}</button>"
                )
            })
            .into_owned()
    })
}

fn tooltip_pass(text: &str) -> String {
    let mut result = text.to_string();
    for (re, term) in TERM_PATTERNS.iter() {
        result = rewrite_outside_tags(&result, |segment| {
            re.replace_all(segment, |caps: &regex::Captures<'_>| {
                let description = term.description.replace('"', "&quot;");
                format!(
                    "<span class=\"game-term\" data-term=\"{}\" data-description=\"{}\">{}</span>",
                    term.name, description, &caps[0]
                )
            })
            .into_owned()
        });
    }
    result
}

/// Apply a rewrite only to the parts of the text that sit outside
/// `<...>` tag brackets, leaving injected markup untouched.
fn rewrite_outside_tags<F: Fn(&str) -> String>(text: &str, rewrite: F) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.push_str(&rewrite(&rest[..open]));
        match rest[open..].find('>') {
            Some(close) => {
                out.push_str(&rest[open..=open + close]);
                rest = &rest[open + close + 1..];
            }
            None => {
                // Unbalanced bracket: keep the tail verbatim
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(&rewrite(rest));
    out
}
