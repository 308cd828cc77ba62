//! The live-view driver: keeps one decoration set per viewport.

use xi_rope::Rope;

use crate::parsing::rope::Span;

use super::{
    context::ContextFilter, ranges::RangeBuilder, rule::RuleSet, structure::MarkdownStructure,
    types::EmphasisRange,
};

/// What the host reports on every change notification.
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'d> {
    pub doc: &'d Rope,
    /// Bumped by the host whenever the document content changes.
    pub version: u64,
    pub visible: &'d [Span],
    pub mode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewKey {
    version: u64,
    visible: Vec<Span>,
    mode: bool,
}

/// Emphasis decorations for an editable viewport.
///
/// Recomputes only when the content version, the visible ranges or the
/// mode flag differ from the last update; plain repaints reuse the set.
#[derive(Debug)]
pub struct LiveView {
    rules: RuleSet,
    filter: ContextFilter,
    structure: Option<(u64, MarkdownStructure)>,
    key: Option<ViewKey>,
    ranges: Vec<EmphasisRange>,
}

impl LiveView {
    pub fn new(rules: RuleSet, filter: ContextFilter) -> Self {
        Self {
            rules,
            filter,
            structure: None,
            key: None,
            ranges: vec![],
        }
    }

    /// Applies a change notification. Returns `true` if the decoration set
    /// was rebuilt.
    pub fn update(&mut self, state: &ViewState<'_>) -> bool {
        let key = ViewKey {
            version: state.version,
            visible: state.visible.to_vec(),
            mode: state.mode,
        };
        if self.key.as_ref() == Some(&key) {
            return false;
        }

        self.ranges = if state.mode {
            let structure = Self::cached_structure(&mut self.structure, state.doc, state.version);
            RangeBuilder::new(&self.rules, self.filter).build(
                state.doc,
                state.visible,
                structure,
                true,
            )
        } else {
            vec![]
        };
        log::trace!(
            "recomputed {} emphasis ranges for version {} over {} visible ranges",
            self.ranges.len(),
            state.version,
            state.visible.len()
        );
        self.key = Some(key);
        true
    }

    pub fn ranges(&self) -> &[EmphasisRange] {
        &self.ranges
    }

    fn cached_structure<'s>(
        cache: &'s mut Option<(u64, MarkdownStructure)>,
        doc: &Rope,
        version: u64,
    ) -> &'s MarkdownStructure {
        if cache.as_ref().is_some_and(|(v, _)| *v != version) {
            *cache = None;
        }
        &cache
            .get_or_insert_with(|| (version, MarkdownStructure::parse(doc)))
            .1
    }
}
