//! Exclusion of non-prose regions.

use serde::{Deserialize, Serialize};

use super::category::{Category, CategorySet, StructureQuery};

/// Where the structure is probed for each matched word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Granularity {
    /// Probe at the start of the word's line. Coarse: a word after inline
    /// code on the same line is judged by whatever covers the line start.
    Line,
    /// Probe at the word's own start.
    #[default]
    Word,
}

/// Decides whether a matched word lies in an excluded zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextFilter {
    excluded: CategorySet,
    granularity: Granularity,
}

impl ContextFilter {
    pub fn new(excluded: CategorySet) -> Self {
        Self {
            excluded,
            granularity: Granularity::default(),
        }
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Code, front matter, inline code and comments.
    pub fn live_default() -> Self {
        Self::new(
            [
                Category::CodeBlock,
                Category::FrontMatter,
                Category::InlineCode,
                Category::Comment,
            ]
            .into_iter()
            .collect(),
        )
    }

    /// Only `pre` subtrees.
    pub fn rendered_default() -> Self {
        Self::new(CategorySet::EMPTY.with(Category::Preformatted))
    }

    pub fn excluded(&self) -> CategorySet {
        self.excluded
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// The position to probe for a word starting at `word_from` on a line
    /// starting at `line_start`.
    pub fn probe(&self, word_from: usize, line_start: usize) -> usize {
        match self.granularity {
            Granularity::Line => line_start,
            Granularity::Word => word_from,
        }
    }

    pub fn is_excluded(&self, categories: CategorySet) -> bool {
        self.excluded.intersects(categories)
    }

    pub fn excludes_at(&self, query: &dyn StructureQuery, word_from: usize, line_start: usize) -> bool {
        self.is_excluded(query.categories_at(self.probe(word_from, line_start)))
    }
}

impl Default for ContextFilter {
    fn default() -> Self {
        Self::live_default()
    }
}
