// SPDX-FileCopyrightText: 2026 Skillet Contributors
// SPDX-License-Identifier: MIT

//! Text projections for the presentation layer.
//!
//! Everything here consumes plain data (selection state, catalog, diagram
//! layout) and produces strings; no terminal coupling, so it is all testable
//! without a drawing surface.

use std::collections::BTreeMap;

use crate::layout::DiagramLayout;
use crate::model::{Catalog, SelectionState};
use crate::narrate::narrate;

pub mod canvas;

pub use canvas::Canvas;

const LABEL_BUDGET: usize = 13;

/// One line per category with a selection: `Label: Name - amount, Name`.
/// Empty when nothing is selected anywhere.
pub fn summary_lines(state: &SelectionState, catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();
    for category in catalog.categories() {
        let items = category
            .items()
            .iter()
            .filter(|item| state.is_selected(category.id().as_str(), item.id().as_str()))
            .map(|item| match state.amount(item.id().as_str()) {
                Some(amount) => format!("{} - {amount}", item.name()),
                None => item.name().to_owned(),
            })
            .collect::<Vec<_>>();
        if items.is_empty() {
            continue;
        }
        lines.push(format!("{}: {}", category.label(), items.join(", ")));
    }
    lines
}

/// The plain-text recipe used to pre-fill community submissions: summary
/// lines followed by the narrated steps.
pub fn recipe_text(state: &SelectionState, catalog: &Catalog) -> String {
    let lines = summary_lines(state, catalog);
    let steps = narrate(state, catalog);
    format!("{}\n\nSteps:\n{}", lines.join("\n"), steps.join("\n"))
        .trim()
        .to_owned()
}

/// Draws a laid-out flow graph as Unicode text.
///
/// Inactive edges use single box lines, active ones double lines; active
/// edges are drawn last so emphasis survives crossings. Node markers follow
/// the same convention (`●` selected/non-empty, `○` otherwise).
pub fn render_diagram(graph: &DiagramLayout) -> String {
    if graph.nodes().is_empty() {
        return String::new();
    }

    let mut positions = BTreeMap::<&str, (i32, i32, i32)>::new();
    let mut labels = BTreeMap::<&str, String>::new();
    let mut width = 0usize;
    let mut height = 0usize;
    for node in graph.nodes() {
        let label = canvas::truncate_label(node.label(), LABEL_BUDGET);
        // Marker plus space ahead of the label.
        let node_width = 2 + label.chars().count() as i32;
        positions.insert(node.id(), (node.x(), node.y(), node_width));
        labels.insert(node.id(), label);
        width = width.max((node.x() + node_width).max(0) as usize + 1);
        height = height.max(node.y().max(0) as usize + 1);
    }

    let mut canvas = Canvas::new(width, height);

    // Two passes so active paths overwrite inactive ones at crossings.
    for active_pass in [false, true] {
        for edge in graph.edges().iter().filter(|edge| edge.active() == active_pass) {
            let Some(&(fx, fy, fw)) = positions.get(edge.from()) else {
                continue;
            };
            let Some(&(tx, ty, _)) = positions.get(edge.to()) else {
                continue;
            };
            draw_edge(&mut canvas, fx + fw, fy, tx - 1, ty, edge.active());
        }
    }

    for node in graph.nodes() {
        let marker = if node.active() { '●' } else { '○' };
        let x = node.x().max(0) as usize;
        let y = node.y().max(0) as usize;
        canvas.set(x, y, marker);
        if let Some(label) = labels.get(node.id()) {
            canvas.put_text(x + 2, y, label);
        }
    }

    canvas.to_trimmed_string()
}

fn draw_edge(canvas: &mut Canvas, sx: i32, sy: i32, ex: i32, ey: i32, active: bool) {
    if ex < sx {
        return;
    }
    let (h, v) = if active { ('═', '║') } else { ('─', '│') };
    let mid = sx + (ex - sx) / 2;

    for x in sx..=mid {
        set_cell(canvas, x, sy, h);
    }
    let (y0, y1) = if sy <= ey { (sy, ey) } else { (ey, sy) };
    for y in (y0 + 1)..y1 {
        set_cell(canvas, mid, y, v);
    }
    for x in mid..=ex {
        set_cell(canvas, x, ey, h);
    }
}

fn set_cell(canvas: &mut Canvas, x: i32, y: i32, ch: char) {
    if x < 0 || y < 0 {
        return;
    }
    canvas.set(x as usize, y as usize, ch);
}
