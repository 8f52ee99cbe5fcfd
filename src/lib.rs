// SPDX-FileCopyrightText: 2026 Skillet Contributors
// SPDX-License-Identifier: MIT

//! Skillet, a terminal recipe roulette.
//!
//! A selection/derivation state machine over a fixed ingredient catalog with
//! two pure rendering projections: a cooking-process narrator and a branching
//! cook-flow diagram layout. The TUI is a thin presentation adapter on top.

pub mod community;
pub mod engine;
pub mod layout;
pub mod model;
pub mod narrate;
pub mod random;
pub mod render;
pub mod tui;
