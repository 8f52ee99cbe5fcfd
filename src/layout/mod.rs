// SPDX-FileCopyrightText: 2026 Skillet Contributors
// SPDX-License-Identifier: MIT

//! Diagram Layout Engine.
//!
//! `flow::layout` projects the selection onto a left-to-right node/edge graph
//! in five tiers: ingredient leaves, category hubs, the style hub, style
//! leaves, and the final-dish sink. Coordinates are character cells; the
//! computation is pure and free of randomness, so identical inputs yield
//! identical graphs.

pub mod flow;

pub use flow::layout;

use crate::model::{CategoryId, ItemId};

/// Drawing surface extents in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    width: i32,
    height: i32,
}

impl CanvasSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

/// The five columns of the flow graph, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Ingredient,
    CategoryHub,
    StyleHub,
    StyleLeaf,
    FinalDish,
}

impl Tier {
    pub fn column(self) -> i32 {
        match self {
            Self::Ingredient => 0,
            Self::CategoryHub => 1,
            Self::StyleHub => 2,
            Self::StyleLeaf => 3,
            Self::FinalDish => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Ingredient { category_id: CategoryId, item_id: ItemId },
    CategoryHub { category_id: CategoryId },
    /// Affordance standing in for a collapsed category's hidden items.
    ExpandCategory { category_id: CategoryId },
    StyleHub,
    StyleLeaf { item_id: ItemId },
    FinalDish,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutNode {
    id: String,
    kind: NodeKind,
    label: String,
    x: i32,
    y: i32,
    active: bool,
}

impl LayoutNode {
    pub(crate) fn new(
        id: String,
        kind: NodeKind,
        label: impl Into<String>,
        x: i32,
        y: i32,
        active: bool,
    ) -> Self {
        Self { id, kind, label: label.into(), x, y, active }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Rendered with emphasis when true (selected item, non-empty category).
    pub fn active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEdge {
    from: String,
    to: String,
    active: bool,
}

impl LayoutEdge {
    pub(crate) fn new(from: String, to: String, active: bool) -> Self {
        Self { from, to, active }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    /// Active iff both endpoints are currently selected/non-empty.
    pub fn active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagramLayout {
    nodes: Vec<LayoutNode>,
    edges: Vec<LayoutEdge>,
}

impl DiagramLayout {
    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[LayoutEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    pub(crate) fn push_node(&mut self, node: LayoutNode) {
        self.nodes.push(node);
    }

    pub(crate) fn push_edge(&mut self, edge: LayoutEdge) {
        self.edges.push(edge);
    }
}
