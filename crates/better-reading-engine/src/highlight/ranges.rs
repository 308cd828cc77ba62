//! Range builder: emphasis ranges for the visible parts of a document.

use xi_rope::Rope;

use crate::parsing::rope::{Span, line_bounds, slice_to_string};

use super::{
    category::StructureQuery, context::ContextFilter, error::HighlightError, rule::RuleSet,
    types::EmphasisRange,
};

/// Computes emphasis ranges over visible sub-ranges of a rope.
#[derive(Debug, Clone, Copy)]
pub struct RangeBuilder<'r> {
    rules: &'r RuleSet,
    filter: ContextFilter,
}

impl<'r> RangeBuilder<'r> {
    pub fn new(rules: &'r RuleSet, filter: ContextFilter) -> Self {
        Self { rules, filter }
    }

    /// Sorted, non-overlapping emphasis ranges for `visible`.
    ///
    /// A sub-range that cannot be scanned contributes nothing; the rest of
    /// the pass goes on. With `mode` off nothing is scanned at all.
    pub fn build(
        &self,
        doc: &Rope,
        visible: &[Span],
        structure: &dyn StructureQuery,
        mode: bool,
    ) -> Vec<EmphasisRange> {
        if !mode {
            return vec![];
        }

        let mut ranges = vec![];
        for &part in visible {
            match self.scan_part(doc, part, structure) {
                Ok(found) => ranges.extend(found),
                Err(err) => log::debug!("skipping visible range {}..{}: {err}", part.start, part.end),
            }
        }

        // Stable: ranges from abutting or repeated parts keep their order.
        ranges.sort_by_key(|r| r.from);
        let mut out: Vec<EmphasisRange> = Vec::with_capacity(ranges.len());
        for range in ranges {
            if out.last().is_none_or(|prev| prev.to <= range.from) {
                out.push(range);
            }
        }
        out
    }

    fn scan_part(
        &self,
        doc: &Rope,
        part: Span,
        structure: &dyn StructureQuery,
    ) -> Result<Vec<EmphasisRange>, HighlightError> {
        if part.start > part.end || part.end > doc.len() {
            return Err(HighlightError::InvalidRange {
                start: part.start,
                end: part.end,
                len: doc.len(),
            });
        }
        // Whole lines, so word boundaries and line starts see real context.
        let bounds = line_bounds(doc, part);
        let text = slice_to_string(doc, bounds);

        let mut claimed: Vec<Span> = vec![];
        let mut found = vec![];
        for rule in self.rules.iter() {
            let mut matched = vec![];
            // Words starting in the part are read to the end of their line,
            // so a word crossing `part.end` keeps its full length.
            let words = rule
                .tokenizer()
                .words_in(&text, bounds.start, Span::new(part.start, bounds.end))?
                .take_while(|w| w.from < part.end);
            for word in words {
                let span = Span::new(word.from, word.to);
                if claimed.iter().any(|c| c.overlaps(span)) {
                    continue;
                }
                matched.push(span);

                let local = word.from - bounds.start;
                let line_start = bounds.start + text[..local].rfind('\n').map_or(0, |i| i + 1);
                if self.filter.excludes_at(structure, word.from, line_start) {
                    continue;
                }
                found.extend(rule.emphasis_for(&word));
            }
            claimed.extend(matched);
        }
        Ok(found)
    }
}

/// A piece of a line, either emphasized or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Absolute span.
    pub span: Span,
    pub emphasized: bool,
}

/// Splits the line spanning `line` into alternating runs.
///
/// `ranges` must be sorted and non-overlapping, as [`RangeBuilder::build`]
/// returns them. Ranges partly outside the line are clipped to it.
pub fn runs(line: Span, ranges: &[EmphasisRange]) -> Vec<Run> {
    let first = ranges.partition_point(|r| r.to <= line.start);
    let mut cursor = line.start;
    let mut out = vec![];

    for range in ranges[first..].iter().take_while(|r| r.from < line.end) {
        let start = range.from.max(line.start);
        let end = range.to.min(line.end);
        if cursor < start {
            out.push(Run {
                span: Span::new(cursor, start),
                emphasized: false,
            });
        }
        out.push(Run {
            span: Span::new(start, end),
            emphasized: true,
        });
        cursor = end;
    }

    if cursor < line.end {
        out.push(Run {
            span: Span::new(cursor, line.end),
            emphasized: false,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{
        category::CategorySet,
        context::Granularity,
        rule::{HighlightRule, RuleFlags, emphasis_len},
        structure::MarkdownStructure,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    struct Nothing;

    impl StructureQuery for Nothing {
        fn categories_at(&self, _pos: usize) -> CategorySet {
            CategorySet::EMPTY
        }
    }

    fn build(text: &str, visible: &[Span]) -> Vec<(usize, usize)> {
        let rules = RuleSet::default();
        let doc = Rope::from(text);
        RangeBuilder::new(&rules, ContextFilter::default())
            .build(&doc, visible, &Nothing, true)
            .into_iter()
            .map(|r| (r.from, r.to))
            .collect()
    }

    #[test]
    fn one_range_per_word() {
        assert_eq!(
            build("the quick fox", &[Span::new(0, 13)]),
            vec![(0, 2), (4, 7), (10, 12)]
        );
    }

    #[test]
    fn mode_off_produces_nothing() {
        let rules = RuleSet::default();
        let doc = Rope::from("plenty of words");
        let out = RangeBuilder::new(&rules, ContextFilter::default()).build(
            &doc,
            &[Span::new(0, doc.len())],
            &Nothing,
            false,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn only_visible_parts_are_scanned() {
        // Words wholly outside the visible parts are not emphasized.
        assert_eq!(build("aaa bbb\nccc ddd\n", &[Span::new(8, 11)]), vec![(8, 10)]);
    }

    #[test]
    fn visible_part_starting_mid_word_skips_the_fragment() {
        assert_eq!(build("reading more", &[Span::new(2, 12)]), vec![(8, 10)]);
    }

    #[test]
    fn overlapping_parts_do_not_duplicate() {
        let out = build("one two three", &[Span::new(0, 7), Span::new(4, 13)]);
        assert_eq!(out, vec![(0, 2), (4, 6), (8, 11)]);
    }

    #[rstest]
    #[case(&[Span::new(0, 4), Span::new(0, 12)])]
    #[case(&[Span::new(0, 4), Span::new(4, 12)])]
    #[case(&[Span::new(0, 2), Span::new(2, 9), Span::new(9, 12)])]
    #[case(&[Span::new(3, 12), Span::new(0, 3)])]
    #[case(&[Span::new(0, 12), Span::new(5, 10)])]
    fn word_crossing_a_part_end_keeps_its_full_prefix(#[case] parts: &[Span]) {
        let text = "reading more";
        assert_eq!(build(text, parts), build(text, &[Span::new(0, 12)]));
        assert_eq!(build(text, parts), vec![(0, 4), (8, 10)]);
    }

    #[test]
    fn parts_are_sorted_even_when_given_out_of_order() {
        let out = build("aa bb\ncc dd\n", &[Span::new(6, 11), Span::new(0, 5)]);
        assert_eq!(out, vec![(0, 1), (3, 4), (6, 7), (9, 10)]);
    }

    #[test]
    fn invalid_part_is_skipped_others_survive() {
        let out = build("good words", &[Span::new(50, 60), Span::new(9, 3), Span::new(0, 4)]);
        assert_eq!(out, vec![(0, 2)]);
    }

    #[test]
    fn fenced_code_is_excluded() {
        let md = "prose\n```\ncode words\n```\n";
        let doc = Rope::from(md);
        let rules = RuleSet::default();
        let structure = MarkdownStructure::parse(&doc);
        let out = RangeBuilder::new(&rules, ContextFilter::default()).build(
            &doc,
            &[Span::new(0, doc.len())],
            &structure,
            true,
        );
        assert_eq!(out, vec![EmphasisRange { from: 0, to: 3 }]);
    }

    fn emphasized_with(md: &str, granularity: Granularity) -> Vec<&str> {
        let doc = Rope::from(md);
        let rules = RuleSet::default();
        let structure = MarkdownStructure::parse(&doc);
        let filter = ContextFilter::live_default().with_granularity(granularity);
        RangeBuilder::new(&rules, filter)
            .build(&doc, &[Span::new(0, doc.len())], &structure, true)
            .into_iter()
            .map(|r| &md[r.from..r.to])
            .collect()
    }

    #[test]
    fn inline_code_at_line_start_under_each_granularity() {
        let md = "`code` then prose\nplain `x` words\n";
        // Line: the first line starts inside a code span, the second does not.
        assert_eq!(emphasized_with(md, Granularity::Line), vec!["pla", "x", "wor"]);
        assert_eq!(
            emphasized_with(md, Granularity::Word),
            vec!["th", "pro", "pla", "wor"]
        );
    }

    #[test]
    fn later_rule_skips_words_claimed_earlier() {
        let first = HighlightRule::new("caps", r"\b[A-Z]+\b", RuleFlags::default(), |_| 1).unwrap();
        let second = HighlightRule::new("all", r"\b[a-zA-Z]+\b", RuleFlags::default(), emphasis_len)
            .unwrap();
        let rules = RuleSet::new(vec![first, second]);
        let doc = Rope::from("NASA launches");
        let out = RangeBuilder::new(&rules, ContextFilter::default()).build(
            &doc,
            &[Span::new(0, doc.len())],
            &Nothing,
            true,
        );
        assert_eq!(
            out,
            vec![
                EmphasisRange { from: 0, to: 1 },
                EmphasisRange { from: 5, to: 9 },
            ]
        );
    }

    #[test]
    fn runs_alternate_and_cover_the_line() {
        let ranges = [
            EmphasisRange { from: 0, to: 2 },
            EmphasisRange { from: 4, to: 7 },
        ];
        let out = runs(Span::new(0, 9), &ranges);
        let spans: Vec<_> = out.iter().map(|r| (r.span.start, r.span.end, r.emphasized)).collect();
        assert_eq!(
            spans,
            vec![(0, 2, true), (2, 4, false), (4, 7, true), (7, 9, false)]
        );
    }

    #[test]
    fn runs_ignore_ranges_on_other_lines() {
        let ranges = [
            EmphasisRange { from: 0, to: 2 },
            EmphasisRange { from: 20, to: 22 },
        ];
        let out = runs(Span::new(10, 15), &ranges);
        assert_eq!(
            out,
            vec![Run {
                span: Span::new(10, 15),
                emphasized: false
            }]
        );
    }
}
