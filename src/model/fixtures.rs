// SPDX-FileCopyrightText: 2026 Skillet Contributors
// SPDX-License-Identifier: MIT

use super::catalog::{AmountSpec, Catalog, Category, Item};
use super::ids::{CategoryId, ItemId};

fn cid(value: &str) -> CategoryId {
    CategoryId::new(value).expect("category id")
}

fn iid(value: &str) -> ItemId {
    ItemId::new(value).expect("item id")
}

fn style_item(id: &str, name: &str) -> Item {
    Item::new_with_steps(iid(id), name, vec!["Outline step.".to_owned()])
}

/// A small catalog covering the style category plus a representative slice of
/// ingredient categories (with and without amount specs, including carbs for
/// the cooking-verb lookup).
pub(crate) fn small_catalog() -> Catalog {
    Catalog::new(vec![
        Category::new(
            cid("style"),
            "Cooking Style",
            1,
            1,
            None,
            vec![
                style_item("stirfry", "High-heat stir-fry"),
                style_item("roast", "Sheet-pan roast"),
                style_item("braise", "Slow braise"),
                style_item("grill", "Grill + quick sear"),
            ],
        ),
        Category::new(
            cid("proteins"),
            "Proteins",
            1,
            2,
            Some(AmountSpec::new(150, 350, 25, "g")),
            vec![
                Item::new(iid("chicken"), "Chicken thighs"),
                Item::new(iid("tofu"), "Extra-firm tofu"),
                Item::new(iid("shrimp"), "Shrimp"),
            ],
        ),
        Category::new(
            cid("vegetables"),
            "Vegetables",
            1,
            2,
            Some(AmountSpec::new(80, 220, 10, "g")),
            vec![
                Item::new(iid("carrot"), "Carrot"),
                Item::new(iid("broccoli"), "Broccoli"),
                Item::new(iid("spinach"), "Spinach"),
            ],
        ),
        Category::new(
            cid("carbs"),
            "Carbs",
            0,
            2,
            Some(AmountSpec::new(120, 250, 10, "g")),
            vec![
                Item::new(iid("rice"), "Rice"),
                Item::new(iid("noodles"), "Noodles"),
                Item::new(iid("potatoes"), "Baby potatoes"),
                Item::new(iid("tortillas"), "Tortillas"),
            ],
        ),
        Category::new(
            cid("finishes"),
            "Finishes",
            0,
            1,
            Some(AmountSpec::new(5, 20, 5, "g")),
            vec![Item::new(iid("herbs"), "Fresh herbs")],
        ),
    ])
    .expect("fixture catalog is valid")
}
