// SPDX-FileCopyrightText: 2026 Skillet Contributors
// SPDX-License-Identifier: MIT

//! The ingredient catalog: ordered categories of selectable items.
//!
//! Catalogs are static for the session. Everything downstream (engine,
//! narrator, layout) treats a loaded catalog as ground truth, so all shape
//! invariants are checked here at load time and never again at render time.

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

use super::ids::{CategoryId, ItemId};

/// The category whose items are mutually exclusive cooking styles.
pub const STYLE_CATEGORY_ID: &str = "style";

const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Builds a catalog from already-parsed categories, validating them.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let catalog = Self { categories };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates a catalog from its JSON representation.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(text).map_err(|err| CatalogError::Parse {
            message: err.to_string(),
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in ingredient dataset shipped with the binary.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CATALOG_JSON).expect("builtin catalog is valid")
    }

    /// Categories in dataset order; this order drives both the narration and
    /// the diagram layout.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id().as_str() == category_id)
    }

    pub fn item(&self, category_id: &str, item_id: &str) -> Option<&Item> {
        self.category(category_id)?.item(item_id)
    }

    pub fn style_category(&self) -> Option<&Category> {
        self.category(STYLE_CATEGORY_ID)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen_categories = BTreeSet::<&str>::new();
        for category in &self.categories {
            if !seen_categories.insert(category.id().as_str()) {
                return Err(CatalogError::DuplicateCategory {
                    category_id: category.id().clone(),
                });
            }

            if category.max_pick() < category.min_pick() {
                return Err(CatalogError::PickBounds {
                    category_id: category.id().clone(),
                    min_pick: category.min_pick(),
                    max_pick: category.max_pick(),
                });
            }

            if let Some(amount) = category.amount() {
                if amount.step() == 0 {
                    return Err(CatalogError::ZeroAmountStep {
                        category_id: category.id().clone(),
                    });
                }
                if amount.max() < amount.min() {
                    return Err(CatalogError::AmountRange {
                        category_id: category.id().clone(),
                        min: amount.min(),
                        max: amount.max(),
                    });
                }
            }

            let mut seen_items = BTreeSet::<&str>::new();
            for item in category.items() {
                if !seen_items.insert(item.id().as_str()) {
                    return Err(CatalogError::DuplicateItem {
                        category_id: category.id().clone(),
                        item_id: item.id().clone(),
                    });
                }
                if category.is_style() && item.steps().is_empty() {
                    return Err(CatalogError::MissingStyleSteps {
                        item_id: item.id().clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: CategoryId,
    label: String,
    min_pick: u32,
    max_pick: u32,
    #[serde(default)]
    amount: Option<AmountSpec>,
    items: Vec<Item>,
}

impl Category {
    pub fn new(
        id: CategoryId,
        label: impl Into<String>,
        min_pick: u32,
        max_pick: u32,
        amount: Option<AmountSpec>,
        items: Vec<Item>,
    ) -> Self {
        Self { id, label: label.into(), min_pick, max_pick, amount, items }
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn min_pick(&self) -> u32 {
        self.min_pick
    }

    pub fn max_pick(&self) -> u32 {
        self.max_pick
    }

    pub fn amount(&self) -> Option<&AmountSpec> {
        self.amount.as_ref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id().as_str() == item_id)
    }

    pub fn is_style(&self) -> bool {
        self.id.as_str() == STYLE_CATEGORY_ID
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    /// Narrative outline; present only on style items.
    #[serde(default)]
    steps: Vec<String>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), steps: Vec::new() }
    }

    pub fn new_with_steps(id: ItemId, name: impl Into<String>, steps: Vec<String>) -> Self {
        Self { id, name: name.into(), steps }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }
}

/// A step-quantized amount range; sampled values are `min + step * k`.
///
/// Every amount in the dataset is integer-valued (grams, millilitres,
/// teaspoons), so amounts are modeled as `u32` rather than floats.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AmountSpec {
    min: u32,
    max: u32,
    step: u32,
    unit: String,
}

impl AmountSpec {
    pub fn new(min: u32, max: u32, step: u32, unit: impl Into<String>) -> Self {
        Self { min, max, step, unit: unit.into() }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Parse { message: String },
    DuplicateCategory { category_id: CategoryId },
    DuplicateItem { category_id: CategoryId, item_id: ItemId },
    PickBounds { category_id: CategoryId, min_pick: u32, max_pick: u32 },
    ZeroAmountStep { category_id: CategoryId },
    AmountRange { category_id: CategoryId, min: u32, max: u32 },
    MissingStyleSteps { item_id: ItemId },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { message } => write!(f, "catalog is not valid JSON: {message}"),
            Self::DuplicateCategory { category_id } => {
                write!(f, "duplicate category id '{category_id}'")
            }
            Self::DuplicateItem { category_id, item_id } => {
                write!(f, "duplicate item id '{item_id}' in category '{category_id}'")
            }
            Self::PickBounds { category_id, min_pick, max_pick } => write!(
                f,
                "category '{category_id}' has maxPick {max_pick} < minPick {min_pick}"
            ),
            Self::ZeroAmountStep { category_id } => {
                write!(f, "category '{category_id}' has an amount step of 0")
            }
            Self::AmountRange { category_id, min, max } => {
                write!(f, "category '{category_id}' has amount max {max} < min {min}")
            }
            Self::MissingStyleSteps { item_id } => {
                write!(f, "style item '{item_id}' has no narrative steps")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
