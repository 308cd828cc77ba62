//! Structural categories and the capability to query them.

use serde::{Deserialize, Serialize};

/// A kind of document region where word emphasis may be suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    CodeBlock,
    FrontMatter,
    InlineCode,
    Comment,
    Heading,
    /// Rendered-view `pre` subtrees.
    Preformatted,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::CodeBlock,
        Category::FrontMatter,
        Category::InlineCode,
        Category::Comment,
        Category::Heading,
        Category::Preformatted,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A small set of categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);

    pub fn insert(&mut self, category: Category) {
        self.0 |= category.bit();
    }

    pub fn with(mut self, category: Category) -> Self {
        self.insert(category);
        self
    }

    pub fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn intersects(self, other: CategorySet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter().fold(CategorySet::EMPTY, CategorySet::with)
    }
}

/// Answers which structural categories cover a document position.
///
/// An empty set means nothing covers `pos`, which counts as prose.
pub trait StructureQuery {
    fn categories_at(&self, pos: usize) -> CategorySet;
}
