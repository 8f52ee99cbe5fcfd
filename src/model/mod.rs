// SPDX-FileCopyrightText: 2026 Skillet Contributors
// SPDX-License-Identifier: MIT

//! Core data model.
//!
//! The catalog is immutable input data validated at load time; the selection
//! state is the single mutable value the engine operates on.

pub mod catalog;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod selection;

pub use catalog::{AmountSpec, Catalog, CatalogError, Category, Item, STYLE_CATEGORY_ID};
pub use ids::{CategoryId, Id, IdError, ItemId};
pub use selection::SelectionState;
