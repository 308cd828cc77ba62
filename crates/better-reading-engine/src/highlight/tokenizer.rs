//! Word tokenizer: a word-boundary regex scanned lazily over a text slice.

use regex::Regex;

use crate::parsing::rope::span::Span;

use super::{error::HighlightError, types::MatchedWord};

/// Finds word-like runs with a compiled pattern.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    pattern: Regex,
}

impl WordTokenizer {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Scans all of `text`, which begins at absolute offset `base`.
    pub fn words<'r, 't>(&'r self, text: &'t str, base: usize) -> Words<'r, 't> {
        Words {
            pattern: &self.pattern,
            text,
            base,
            pos: 0,
            end: text.len(),
        }
    }

    /// Scans only the absolute range `range` of `text`.
    ///
    /// Text before the range is still visible to the pattern, so a word
    /// boundary at the range start is judged against the real preceding
    /// character. Matches never extend past the range end.
    pub fn words_in<'r, 't>(
        &'r self,
        text: &'t str,
        base: usize,
        range: Span,
    ) -> Result<Words<'r, 't>, HighlightError> {
        if range.start > range.end || range.start < base || range.end > base + text.len() {
            return Err(HighlightError::InvalidRange {
                start: range.start,
                end: range.end,
                len: base + text.len(),
            });
        }
        let (start, end) = (range.start - base, range.end - base);
        for local in [start, end] {
            if !text.is_char_boundary(local) {
                return Err(HighlightError::NotCharBoundary {
                    offset: base + local,
                });
            }
        }
        Ok(Words {
            pattern: &self.pattern,
            text,
            base,
            pos: start,
            end,
        })
    }
}

/// Lazy iterator over [`MatchedWord`]s. Cloning restarts from the current position.
#[derive(Debug, Clone)]
pub struct Words<'r, 't> {
    pattern: &'r Regex,
    text: &'t str,
    base: usize,
    pos: usize,
    end: usize,
}

impl<'t> Iterator for Words<'_, 't> {
    type Item = MatchedWord<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        let hay = &text[..self.end];
        while self.pos <= self.end {
            let m = self.pattern.find_at(hay, self.pos)?;
            if m.is_empty() {
                // Zero-width match: step over one char so the scan always advances.
                self.pos = hay[m.end()..]
                    .chars()
                    .next()
                    .map_or(self.end + 1, |c| m.end() + c.len_utf8());
                continue;
            }
            self.pos = m.end();
            return Some(MatchedWord {
                from: self.base + m.start(),
                to: self.base + m.end(),
                text: m.as_str(),
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::rule::ScriptCoverage;
    use pretty_assertions::assert_eq;

    fn unicode() -> WordTokenizer {
        WordTokenizer::new(Regex::new(ScriptCoverage::Unicode.pattern()).unwrap())
    }

    fn texts<'t>(words: impl Iterator<Item = MatchedWord<'t>>) -> Vec<&'t str> {
        words.map(|w| w.text).collect()
    }

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        let tok = unicode();
        assert_eq!(
            texts(tok.words("Hello, world! It's fine.", 0)),
            vec!["Hello", "world", "It", "s", "fine"]
        );
    }

    #[test]
    fn offsets_are_absolute() {
        let tok = unicode();
        let words: Vec<_> = tok.words("the quick", 100).collect();
        assert_eq!(words[1].from, 104);
        assert_eq!(words[1].to, 109);
    }

    #[test]
    fn cjk_run_is_one_token() {
        let tok = unicode();
        assert_eq!(texts(tok.words("日本語のテキスト です", 0)), vec!["日本語のテキスト", "です"]);
    }

    #[test]
    fn accented_and_cyrillic_words() {
        let tok = unicode();
        assert_eq!(
            texts(tok.words("café привет naïve", 0)),
            vec!["café", "привет", "naïve"]
        );
    }

    #[test]
    fn sub_range_uses_surrounding_context() {
        let tok = unicode();
        // "ello" inside "hello" is not at a word boundary.
        let words = tok.words_in("hello world", 0, Span::new(1, 11)).unwrap();
        assert_eq!(texts(words), vec!["world"]);
    }

    #[test]
    fn sub_range_end_truncates_haystack() {
        let tok = unicode();
        let words = tok.words_in("alpha beta gamma", 10, Span::new(10, 20)).unwrap();
        assert_eq!(texts(words), vec!["alpha", "beta"]);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let tok = unicode();
        let err = tok.words_in("abc", 0, Span::new(2, 1)).unwrap_err();
        assert!(matches!(err, HighlightError::InvalidRange { .. }));
    }

    #[test]
    fn range_inside_multibyte_char_is_rejected() {
        let tok = unicode();
        let err = tok.words_in("é", 0, Span::new(1, 2)).unwrap_err();
        assert!(matches!(err, HighlightError::NotCharBoundary { offset: 1 }));
    }

    #[test]
    fn zero_width_pattern_still_terminates() {
        let tok = WordTokenizer::new(Regex::new(r"[a-z]*").unwrap());
        assert_eq!(texts(tok.words("ab 12 cd", 0)), vec!["ab", "cd"]);
    }

    #[test]
    fn iterator_is_restartable() {
        let tok = unicode();
        let words = tok.words("one two", 0);
        let again = words.clone();
        assert_eq!(words.count(), 2);
        assert_eq!(again.count(), 2);
    }
}
