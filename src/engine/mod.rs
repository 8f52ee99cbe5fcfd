// SPDX-FileCopyrightText: 2026 Skillet Contributors
// SPDX-License-Identifier: MIT

//! Selection Engine: the command surface that mutates `SelectionState`.
//!
//! Every command is total over a well-formed state and catalog. Unknown
//! category or item ids are silently ignored: the catalog is ground truth and
//! UI actions referencing anything outside it are no-ops by policy, not
//! errors.

use std::collections::BTreeSet;

use rand::Rng;

use crate::model::{Catalog, ItemId, SelectionState};
use crate::random::{sample_stepped, shuffle};

/// Replaces the selection with a fresh random draw and regenerates amounts.
///
/// Per category, in catalog order: shuffle the items, draw a pick count from
/// `[min_pick, max_pick]`, keep the first N of the shuffle. Collapse flags are
/// left untouched. Reproducible given a seeded `rng`.
pub fn randomize_all<R: Rng + ?Sized>(state: &mut SelectionState, catalog: &Catalog, rng: &mut R) {
    state.selected_mut().clear();
    for category in catalog.categories() {
        let shuffled = shuffle(rng, category.items());
        let pick_count = sample_stepped(rng, category.min_pick(), category.max_pick(), 1);
        let picked = shuffled
            .into_iter()
            .take(pick_count as usize)
            .map(|item| item.id().clone())
            .collect::<BTreeSet<ItemId>>();
        if !picked.is_empty() {
            state.selected_mut().insert(category.id().clone(), picked);
        }
    }
    refresh_amounts(state, catalog, rng);
}

/// Rebuilds the amounts map from scratch for the current selection.
///
/// Selected items in categories without an amount spec (the style category)
/// get no entry at all.
pub fn refresh_amounts<R: Rng + ?Sized>(
    state: &mut SelectionState,
    catalog: &Catalog,
    rng: &mut R,
) {
    state.amounts_mut().clear();
    for category in catalog.categories() {
        let Some(amount) = category.amount() else {
            continue;
        };
        let Some(selected) = state.selected_in(category.id().as_str()) else {
            continue;
        };
        let selected = selected.iter().cloned().collect::<Vec<ItemId>>();
        for item_id in selected {
            let value = sample_stepped(rng, amount.min(), amount.max(), amount.step());
            let unit = amount.unit();
            state.amounts_mut().insert(item_id, format!("{value} {unit}"));
        }
    }
}

/// Toggles a single item in a category.
///
/// Adding to the style category clears the rest of that set first (styles are
/// mutually exclusive). Toggling does NOT touch the amounts map: freshly
/// picked items show no amount until `refresh_amounts` or `randomize_all`
/// runs.
pub fn toggle(state: &mut SelectionState, catalog: &Catalog, category_id: &str, item_id: &str) {
    let Some(category) = catalog.category(category_id) else {
        return;
    };
    let Some(item) = category.item(item_id) else {
        return;
    };

    let selected = state.selected_mut().entry(category.id().clone()).or_default();
    if !selected.remove(item_id) {
        if category.is_style() {
            selected.clear();
        }
        selected.insert(item.id().clone());
    }
}

/// Clears selection and amounts; collapse flags survive.
pub fn reset(state: &mut SelectionState) {
    state.selected_mut().clear();
    state.amounts_mut().clear();
}

/// Flips a category's diagram collapse flag. Unknown category: no-op.
pub fn toggle_category_collapse(state: &mut SelectionState, catalog: &Catalog, category_id: &str) {
    let Some(category) = catalog.category(category_id) else {
        return;
    };
    if !state.collapsed_categories_mut().remove(category_id) {
        state.collapsed_categories_mut().insert(category.id().clone());
    }
}

/// Flips the style tier's diagram collapse flag.
pub fn toggle_style_collapse(state: &mut SelectionState) {
    state.set_style_collapsed(!state.style_collapsed());
}
