// SPDX-FileCopyrightText: 2026 Skillet Contributors
// SPDX-License-Identifier: MIT

use std::collections::{BTreeMap, BTreeSet};

use super::ids::{CategoryId, ItemId};

/// The mutable per-session selection: chosen item ids per category plus the
/// derived amount strings.
///
/// Invariants (enforced by the engine, not by construction):
/// - the style category's selected set holds at most one item;
/// - `amounts` is derived and never authoritative: it is rebuilt wholesale by
///   `engine::refresh_amounts` and may lag the selection in between (toggled
///   items carry no amount until a regenerate runs).
///
/// The collapse flags are UI-transient state consumed only by the diagram
/// layout; they never affect the narrator or the selection itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: BTreeMap<CategoryId, BTreeSet<ItemId>>,
    amounts: BTreeMap<ItemId, String>,
    collapsed_categories: BTreeSet<CategoryId>,
    style_collapsed: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &BTreeMap<CategoryId, BTreeSet<ItemId>> {
        &self.selected
    }

    pub fn selected_mut(&mut self) -> &mut BTreeMap<CategoryId, BTreeSet<ItemId>> {
        &mut self.selected
    }

    /// The selected set for a category; `None` and an empty set both mean
    /// "nothing chosen here".
    pub fn selected_in(&self, category_id: &str) -> Option<&BTreeSet<ItemId>> {
        self.selected.get(category_id)
    }

    pub fn has_selection_in(&self, category_id: &str) -> bool {
        self.selected_in(category_id).is_some_and(|items| !items.is_empty())
    }

    pub fn is_selected(&self, category_id: &str, item_id: &str) -> bool {
        self.selected_in(category_id).is_some_and(|items| items.contains(item_id))
    }

    /// The single selected item of a category, if exactly the style invariant
    /// holds there. For multi-pick categories this returns an arbitrary (but
    /// deterministic) member.
    pub fn single_selected_in(&self, category_id: &str) -> Option<&ItemId> {
        self.selected_in(category_id)?.iter().next()
    }

    pub fn amounts(&self) -> &BTreeMap<ItemId, String> {
        &self.amounts
    }

    pub fn amounts_mut(&mut self) -> &mut BTreeMap<ItemId, String> {
        &mut self.amounts
    }

    pub fn amount(&self, item_id: &str) -> Option<&str> {
        self.amounts.get(item_id).map(String::as_str)
    }

    pub fn collapsed_categories(&self) -> &BTreeSet<CategoryId> {
        &self.collapsed_categories
    }

    pub fn collapsed_categories_mut(&mut self) -> &mut BTreeSet<CategoryId> {
        &mut self.collapsed_categories
    }

    pub fn is_category_collapsed(&self, category_id: &str) -> bool {
        self.collapsed_categories.contains(category_id)
    }

    pub fn style_collapsed(&self) -> bool {
        self.style_collapsed
    }

    pub fn set_style_collapsed(&mut self, style_collapsed: bool) {
        self.style_collapsed = style_collapsed;
    }
}
