//! The emphasis rule and the rule set both views apply.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use super::{
    error::HighlightError,
    tokenizer::WordTokenizer,
    types::{EmphasisRange, MatchedWord},
};

/// Maps a matched word to the number of leading chars to emphasize.
pub type EmphasisFn = fn(&str) -> usize;

/// The canonical prefix rule.
///
/// Length is counted in chars after trimming surrounding whitespace:
/// under 3 → 1, exactly 4 → 2, otherwise half rounded up. An empty word
/// gets no emphasis.
pub fn emphasis_len(word: &str) -> usize {
    match word.trim().chars().count() {
        0 => 0,
        len if len < 3 => 1,
        4 => 2,
        len => len.div_ceil(2),
    }
}

/// Which scripts the word pattern recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptCoverage {
    /// Letters, marks and connectors of every script; CJK runs stay whole.
    #[default]
    Unicode,
    /// ASCII letters plus the basic Cyrillic block.
    LatinCyrillic,
    /// ASCII letters only.
    Ascii,
}

impl ScriptCoverage {
    /// The kebab-case name, as written in settings files.
    pub fn name(self) -> &'static str {
        match self {
            ScriptCoverage::Unicode => "unicode",
            ScriptCoverage::LatinCyrillic => "latin-cyrillic",
            ScriptCoverage::Ascii => "ascii",
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            ScriptCoverage::Unicode => concat!(
                r"\b[\p{L}\p{Alphabetic}\p{Mark}\p{Connector_Punctuation}\p{Join_Control}",
                r"\p{Script=Hangul}\p{Script_Extensions=Han}\p{Script_Extensions=Hiragana}",
                r"\p{Script_Extensions=Katakana}]+\b",
            ),
            ScriptCoverage::LatinCyrillic => r"[a-zA-Z\x{0400}-\x{04FF}]+",
            ScriptCoverage::Ascii => r"[a-zA-Z]+",
        }
    }
}

/// Options passed to the regex builder for a rule's pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleFlags {
    pub case_insensitive: bool,
    pub unicode: bool,
    /// Compiled program size limit in bytes.
    pub size_limit: usize,
}

impl Default for RuleFlags {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            unicode: true,
            size_limit: 10 * (1 << 20),
        }
    }
}

/// A word pattern paired with the prefix rule applied to its matches.
#[derive(Debug, Clone)]
pub struct HighlightRule {
    name: String,
    tokenizer: WordTokenizer,
    emphasis: EmphasisFn,
}

impl HighlightRule {
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        flags: RuleFlags,
        emphasis: EmphasisFn,
    ) -> Result<Self, HighlightError> {
        let name = name.into();
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(flags.case_insensitive)
            .unicode(flags.unicode)
            .size_limit(flags.size_limit)
            .build()
            .map_err(|source| HighlightError::Pattern {
                name: name.clone(),
                source,
            })?;
        Ok(Self {
            name,
            tokenizer: WordTokenizer::new(regex),
            emphasis,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokenizer(&self) -> &WordTokenizer {
        &self.tokenizer
    }

    /// The emphasized prefix of `word`, or `None` for a zero-length prefix.
    ///
    /// The prefix is measured on the trimmed word but applied from the
    /// match start, and never extends past the match.
    pub fn emphasis_for(&self, word: &MatchedWord<'_>) -> Option<EmphasisRange> {
        let prefix = (self.emphasis)(word.text);
        if prefix == 0 {
            return None;
        }
        let bytes = word
            .text
            .char_indices()
            .nth(prefix)
            .map_or(word.text.len(), |(i, _)| i);
        Some(EmphasisRange {
            from: word.from,
            to: word.from + bytes,
        })
    }
}

/// An ordered list of rules, applied in declaration order.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<HighlightRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<HighlightRule>) -> Self {
        Self { rules }
    }

    /// A single rule using `coverage`'s pattern and [`emphasis_len`].
    pub fn for_coverage(coverage: ScriptCoverage) -> Result<Self, HighlightError> {
        let rule = HighlightRule::new(
            coverage.name(),
            coverage.pattern(),
            RuleFlags::default(),
            emphasis_len,
        )?;
        Ok(Self::new(vec![rule]))
    }

    pub fn iter(&self) -> impl Iterator<Item = &HighlightRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::for_coverage(ScriptCoverage::Unicode).expect("built-in word pattern compiles")
    }
}
