// SPDX-FileCopyrightText: 2026 Skillet Contributors
// SPDX-License-Identifier: MIT

use crate::model::{Catalog, Category, CategoryId, ItemId, SelectionState, STYLE_CATEGORY_ID};

use super::{CanvasSize, DiagramLayout, LayoutEdge, LayoutNode, NodeKind, Tier};

pub const STYLE_HUB_NODE_ID: &str = "style-hub";
pub const FINAL_NODE_ID: &str = "final";

/// Columns never sit closer than this, whatever the canvas width.
pub const MIN_COLUMN_GAP: i32 = 16;
pub const MIN_ROW_GAP: i32 = 2;
pub const MAX_ROW_GAP: i32 = 4;

const MARGIN_X: i32 = 1;
const MARGIN_Y: i32 = 1;
const TIER_COUNT: i32 = 5;

pub fn ingredient_node_id(category_id: &CategoryId, item_id: &ItemId) -> String {
    format!("ing:{category_id}:{item_id}")
}

pub fn hub_node_id(category_id: &CategoryId) -> String {
    format!("hub:{category_id}")
}

pub fn expand_node_id(category_id: &CategoryId) -> String {
    format!("expand:{category_id}")
}

pub fn style_node_id(item_id: &ItemId) -> String {
    format!("style:{item_id}")
}

/// Computes the positioned cook-flow graph for the current selection.
///
/// Total over every well-formed input: empty selections render the
/// hub/style/final skeleton with no active edges, and fully collapsed states
/// render a minimal graph. All extent reductions have explicit fallbacks, so
/// there is nothing to divide by zero with.
pub fn layout(state: &SelectionState, catalog: &Catalog, size: CanvasSize) -> DiagramLayout {
    let mut graph = DiagramLayout::default();

    let ingredient_categories = catalog
        .categories()
        .iter()
        .filter(|category| !category.is_style())
        .collect::<Vec<_>>();

    let total_slots = ingredient_categories
        .iter()
        .map(|category| category_slots(state, category))
        .sum::<i32>();
    let row_gap = row_gap_for(size, total_slots);
    let col_gap = column_gap_for(size);
    let column_x = |tier: Tier| MARGIN_X + tier.column() * col_gap;

    let style_selected = state.single_selected_in(STYLE_CATEGORY_ID).cloned();

    let mut slot = 0i32;
    let mut hub_ys = Vec::with_capacity(ingredient_categories.len());
    for category in &ingredient_categories {
        let has_selection = state.has_selection_in(category.id().as_str());
        let hub_id = hub_node_id(category.id());

        let hub_y = if state.is_category_collapsed(category.id().as_str()) {
            // Collapsed: a single placeholder slot holding the expand
            // affordance; no ingredient nodes or edges are emitted.
            let y = MARGIN_Y + slot * row_gap;
            slot += 1;
            graph.push_node(LayoutNode::new(
                expand_node_id(category.id()),
                NodeKind::ExpandCategory { category_id: category.id().clone() },
                format!("[+] {}", category.label()),
                column_x(Tier::Ingredient),
                y,
                false,
            ));
            y
        } else if category.items().is_empty() {
            let y = MARGIN_Y + slot * row_gap;
            slot += 1;
            y
        } else {
            let mut item_ys = Vec::with_capacity(category.items().len());
            for item in category.items() {
                let y = MARGIN_Y + slot * row_gap;
                slot += 1;
                item_ys.push(y);

                let selected = state.is_selected(category.id().as_str(), item.id().as_str());
                let node_id = ingredient_node_id(category.id(), item.id());
                graph.push_node(LayoutNode::new(
                    node_id.clone(),
                    NodeKind::Ingredient {
                        category_id: category.id().clone(),
                        item_id: item.id().clone(),
                    },
                    item.name(),
                    column_x(Tier::Ingredient),
                    y,
                    selected,
                ));
                graph.push_edge(LayoutEdge::new(node_id, hub_id.clone(), selected));
            }
            centroid(&item_ys, MARGIN_Y)
        };

        graph.push_node(LayoutNode::new(
            hub_id.clone(),
            NodeKind::CategoryHub { category_id: category.id().clone() },
            category.label(),
            column_x(Tier::CategoryHub),
            hub_y,
            has_selection,
        ));
        graph.push_edge(LayoutEdge::new(hub_id, STYLE_HUB_NODE_ID.to_owned(), has_selection));
        hub_ys.push(hub_y);
    }

    let style_hub_y = centroid(&hub_ys, (size.height() / 2).max(MARGIN_Y));
    let style_label = catalog
        .style_category()
        .map(|category| category.label().to_owned())
        .unwrap_or_else(|| "Cooking Style".to_owned());
    graph.push_node(LayoutNode::new(
        STYLE_HUB_NODE_ID.to_owned(),
        NodeKind::StyleHub,
        style_label,
        column_x(Tier::StyleHub),
        style_hub_y,
        style_selected.is_some(),
    ));

    // Style leaves are omitted entirely while the style tier is collapsed,
    // along with the hub's forward edges. Gated purely on the collapse flag,
    // not on whether a style is selected.
    let mut leaf_ys = Vec::new();
    if !state.style_collapsed() {
        if let Some(style) = catalog.style_category() {
            let count = style.items().len() as i32;
            for (idx, item) in style.items().iter().enumerate() {
                let offset = idx as i32 - (count - 1) / 2;
                let y = (style_hub_y + offset * row_gap).max(MARGIN_Y);
                leaf_ys.push(y);

                let selected = style_selected.as_ref() == Some(item.id());
                let node_id = style_node_id(item.id());
                graph.push_node(LayoutNode::new(
                    node_id.clone(),
                    NodeKind::StyleLeaf { item_id: item.id().clone() },
                    item.name(),
                    column_x(Tier::StyleLeaf),
                    y,
                    selected,
                ));
                graph.push_edge(LayoutEdge::new(
                    STYLE_HUB_NODE_ID.to_owned(),
                    node_id.clone(),
                    selected,
                ));
                graph.push_edge(LayoutEdge::new(node_id, FINAL_NODE_ID.to_owned(), selected));
            }
        }
    }

    let final_active = style_selected.is_some()
        && ingredient_categories
            .iter()
            .any(|category| state.has_selection_in(category.id().as_str()));
    graph.push_node(LayoutNode::new(
        FINAL_NODE_ID.to_owned(),
        NodeKind::FinalDish,
        "Final dish",
        column_x(Tier::FinalDish),
        centroid(&leaf_ys, style_hub_y),
        final_active,
    ));

    graph
}

fn category_slots(state: &SelectionState, category: &Category) -> i32 {
    if state.is_category_collapsed(category.id().as_str()) || category.items().is_empty() {
        1
    } else {
        category.items().len() as i32
    }
}

fn row_gap_for(size: CanvasSize, total_slots: i32) -> i32 {
    let usable = (size.height() - 2 * MARGIN_Y).max(0);
    let divisor = (total_slots - 1).max(1);
    (usable / divisor).clamp(MIN_ROW_GAP, MAX_ROW_GAP)
}

fn column_gap_for(size: CanvasSize) -> i32 {
    let usable = (size.width() - 2 * MARGIN_X).max(0);
    (usable / (TIER_COUNT - 1)).max(MIN_COLUMN_GAP)
}

fn centroid(ys: &[i32], fallback: i32) -> i32 {
    if ys.is_empty() {
        return fallback;
    }
    ys.iter().sum::<i32>() / ys.len() as i32
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{layout, FINAL_NODE_ID, MIN_COLUMN_GAP, STYLE_HUB_NODE_ID};
    use crate::engine;
    use crate::layout::{CanvasSize, NodeKind};
    use crate::model::fixtures::small_catalog;
    use crate::model::SelectionState;

    const SIZE: CanvasSize = CanvasSize { width: 120, height: 40 };

    #[test]
    fn empty_state_renders_the_skeleton_with_no_active_edges() {
        let catalog = small_catalog();
        let state = SelectionState::new();
        let graph = layout(&state, &catalog, SIZE);

        assert!(graph.node(STYLE_HUB_NODE_ID).is_some());
        assert!(graph.node(FINAL_NODE_ID).is_some());
        assert!(graph.edges().iter().all(|edge| !edge.active()));
        assert!(graph.nodes().iter().all(|node| !node.active()));
    }

    #[test]
    fn node_ids_are_unique() {
        let catalog = small_catalog();
        let graph = layout(&SelectionState::new(), &catalog, SIZE);
        let ids = graph.nodes().iter().map(|node| node.id()).collect::<BTreeSet<_>>();
        assert_eq!(ids.len(), graph.nodes().len());
    }

    #[test]
    fn layout_is_idempotent_for_unchanged_inputs() {
        let catalog = small_catalog();
        let mut state = SelectionState::new();
        engine::randomize_all(&mut state, &catalog, &mut StdRng::seed_from_u64(13));

        let first = layout(&state, &catalog, SIZE);
        let second = layout(&state, &catalog, SIZE);
        assert_eq!(first, second);
    }

    #[test]
    fn active_edges_trace_the_selected_path() {
        let catalog = small_catalog();
        let mut state = SelectionState::new();
        engine::toggle(&mut state, &catalog, "style", "roast");
        engine::toggle(&mut state, &catalog, "proteins", "chicken");

        let graph = layout(&state, &catalog, SIZE);

        let ing_edge = graph
            .edges()
            .iter()
            .find(|edge| edge.from() == "ing:proteins:chicken")
            .expect("ingredient edge");
        assert!(ing_edge.active());
        assert_eq!(ing_edge.to(), "hub:proteins");

        let unselected_edge = graph
            .edges()
            .iter()
            .find(|edge| edge.from() == "ing:proteins:tofu")
            .expect("unselected ingredient edge");
        assert!(!unselected_edge.active());

        let hub_edge = graph
            .edges()
            .iter()
            .find(|edge| edge.from() == "hub:proteins" && edge.to() == STYLE_HUB_NODE_ID)
            .expect("hub edge");
        assert!(hub_edge.active());

        let empty_hub_edge = graph
            .edges()
            .iter()
            .find(|edge| edge.from() == "hub:carbs")
            .expect("empty hub edge");
        assert!(!empty_hub_edge.active());

        let style_edge = graph
            .edges()
            .iter()
            .find(|edge| edge.from() == STYLE_HUB_NODE_ID && edge.to() == "style:roast")
            .expect("style edge");
        assert!(style_edge.active());

        let final_edge = graph
            .edges()
            .iter()
            .find(|edge| edge.from() == "style:roast" && edge.to() == FINAL_NODE_ID)
            .expect("final edge");
        assert!(final_edge.active());

        let other_style_edge = graph
            .edges()
            .iter()
            .find(|edge| edge.from() == STYLE_HUB_NODE_ID && edge.to() == "style:grill")
            .expect("other style edge");
        assert!(!other_style_edge.active());
    }

    #[test]
    fn collapsed_category_emits_an_expand_affordance_instead_of_items() {
        let catalog = small_catalog();
        let mut state = SelectionState::new();
        engine::toggle_category_collapse(&mut state, &catalog, "vegetables");
        engine::toggle_style_collapse(&mut state);

        let graph = layout(&state, &catalog, SIZE);

        let vegetable_leaves = graph
            .nodes()
            .iter()
            .filter(|node| {
                matches!(node.kind(), NodeKind::Ingredient { category_id, .. }
                    if category_id.as_str() == "vegetables")
            })
            .count();
        assert_eq!(vegetable_leaves, 0);

        let expands = graph
            .nodes()
            .iter()
            .filter(|node| matches!(node.kind(), NodeKind::ExpandCategory { .. }))
            .collect::<Vec<_>>();
        assert_eq!(expands.len(), 1);
        assert_eq!(expands[0].id(), "expand:vegetables");

        let style_leaves = graph
            .nodes()
            .iter()
            .filter(|node| matches!(node.kind(), NodeKind::StyleLeaf { .. }))
            .count();
        assert_eq!(style_leaves, 0);

        // Tree variant: no forward edges out of the collapsed style hub.
        assert!(!graph.edges().iter().any(|edge| edge.from() == STYLE_HUB_NODE_ID));
        // The hub for the collapsed category is still present.
        assert!(graph.node("hub:vegetables").is_some());
    }

    #[test]
    fn everything_collapsed_yields_a_minimal_graph_without_panics() {
        let catalog = small_catalog();
        let mut state = SelectionState::new();
        for category in catalog.categories() {
            if !category.is_style() {
                engine::toggle_category_collapse(&mut state, &catalog, category.id().as_str());
            }
        }
        engine::toggle_style_collapse(&mut state);

        let graph = layout(&state, &catalog, SIZE);
        assert!(graph
            .nodes()
            .iter()
            .all(|node| !matches!(node.kind(), NodeKind::Ingredient { .. })));
        assert!(graph.node(STYLE_HUB_NODE_ID).is_some());
        assert!(graph.node(FINAL_NODE_ID).is_some());
    }

    #[test]
    fn degenerate_canvas_sizes_do_not_panic() {
        let catalog = small_catalog();
        let state = SelectionState::new();
        for (width, height) in [(0, 0), (1, 1), (5, 3), (-10, -10)] {
            let graph = layout(&state, &catalog, CanvasSize::new(width, height));
            assert!(!graph.nodes().is_empty());
        }
    }

    #[test]
    fn columns_keep_the_minimum_gap_on_narrow_canvases() {
        let catalog = small_catalog();
        let state = SelectionState::new();
        let graph = layout(&state, &catalog, CanvasSize::new(20, 40));

        let hub = graph.node("hub:proteins").expect("hub");
        let style_hub = graph.node(STYLE_HUB_NODE_ID).expect("style hub");
        assert_eq!(style_hub.x() - hub.x(), MIN_COLUMN_GAP);
    }

    #[test]
    fn category_hub_sits_at_the_centroid_of_its_items() {
        let catalog = small_catalog();
        let state = SelectionState::new();
        let graph = layout(&state, &catalog, SIZE);

        let item_ys = graph
            .nodes()
            .iter()
            .filter(|node| {
                matches!(node.kind(), NodeKind::Ingredient { category_id, .. }
                    if category_id.as_str() == "proteins")
            })
            .map(|node| node.y())
            .collect::<Vec<_>>();
        assert!(!item_ys.is_empty());

        let hub = graph.node("hub:proteins").expect("hub");
        let expected = item_ys.iter().sum::<i32>() / item_ys.len() as i32;
        assert_eq!(hub.y(), expected);
    }
}
