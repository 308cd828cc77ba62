//! Typed replacement content for one text node.

use crate::highlight::{EmphasisRange, HighlightError, RuleSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Emphasis(String),
}

impl Segment {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text(s) | Segment::Emphasis(s) => s,
        }
    }
}

#[derive(Debug)]
struct Piece {
    segment: Segment,
    /// Matched by an earlier rule; later rules leave it alone.
    sealed: bool,
}

/// Alternating plain and emphasized segments covering a whole text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    segments: Vec<Segment>,
}

impl Fragment {
    /// Applies `rules` in order to `text`.
    ///
    /// Each rule scans only the text no earlier rule matched, so a word
    /// wrapped once is never matched again.
    pub fn build(text: &str, rules: &RuleSet) -> Self {
        let mut pieces = vec![Piece {
            segment: Segment::Text(text.to_owned()),
            sealed: false,
        }];

        for rule in rules.iter() {
            let mut next = Vec::with_capacity(pieces.len());
            for piece in pieces {
                let Piece {
                    segment: Segment::Text(chunk),
                    sealed: false,
                } = &piece
                else {
                    next.push(piece);
                    continue;
                };

                let mut cursor = 0;
                for word in rule.tokenizer().words(chunk, 0) {
                    push_open(&mut next, &chunk[cursor..word.from]);
                    let split = rule.emphasis_for(&word).map_or(word.from, |r| r.to);
                    if split > word.from {
                        next.push(sealed(Segment::Emphasis(chunk[word.from..split].to_owned())));
                    }
                    if split < word.to {
                        next.push(sealed(Segment::Text(chunk[split..word.to].to_owned())));
                    }
                    cursor = word.to;
                }
                push_open(&mut next, &chunk[cursor..]);
            }
            pieces = next;
        }

        let mut segments: Vec<Segment> = Vec::with_capacity(pieces.len());
        for piece in pieces {
            match (segments.last_mut(), piece.segment) {
                (Some(Segment::Text(prev)), Segment::Text(s)) => prev.push_str(&s),
                (_, segment) => segments.push(segment),
            }
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The text the fragment renders to.
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::as_str).collect()
    }

    pub fn emphasis_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Emphasis(_)))
            .count()
    }

    pub fn has_emphasis(&self) -> bool {
        self.emphasis_count() > 0
    }

    /// Checks that the fragment reproduces `source` exactly.
    pub fn verify(&self, source: &str) -> Result<(), HighlightError> {
        let text = self.text();
        if text == source {
            Ok(())
        } else {
            Err(HighlightError::FragmentMismatch {
                expected: source.len(),
                actual: text.len(),
            })
        }
    }

    /// Emphasized segments as ranges, for a text starting at `base`.
    pub fn emphasis_ranges(&self, base: usize) -> Vec<EmphasisRange> {
        let mut offset = base;
        let mut out = vec![];
        for segment in &self.segments {
            let len = segment.as_str().len();
            if let Segment::Emphasis(_) = segment {
                out.push(EmphasisRange {
                    from: offset,
                    to: offset + len,
                });
            }
            offset += len;
        }
        out
    }
}

fn sealed(segment: Segment) -> Piece {
    Piece {
        segment,
        sealed: true,
    }
}

fn push_open(pieces: &mut Vec<Piece>, text: &str) {
    if !text.is_empty() {
        pieces.push(Piece {
            segment: Segment::Text(text.to_owned()),
            sealed: false,
        });
    }
}
