// SPDX-FileCopyrightText: 2026 Skillet Contributors
// SPDX-License-Identifier: MIT

/// A char-cell drawing surface.
///
/// Writes outside the bounds are silently dropped: the diagram is clipped to
/// the viewport rather than treated as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![' '; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[y * self.width + x] = ch;
    }

    /// Writes `text` starting at `(x, y)`, clipping at the right edge.
    pub fn put_text(&mut self, x: usize, y: usize, text: &str) {
        for (offset, ch) in text.chars().enumerate() {
            self.set(x + offset, y, ch);
        }
    }

    /// Renders the canvas with trailing spaces and trailing blank lines
    /// removed.
    pub fn to_trimmed_string(&self) -> String {
        let mut lines = Vec::with_capacity(self.height);
        for y in 0..self.height {
            let line: String = (0..self.width)
                .map(|x| self.cells[y * self.width + x])
                .collect();
            lines.push(line.trim_end_matches(' ').to_owned());
        }
        while matches!(lines.last(), Some(line) if line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}

/// Truncates to `max_len` chars, replacing the tail with an ellipsis.
pub(crate) fn truncate_label(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if text.chars().count() <= max_len {
        return text.to_owned();
    }
    if max_len == 1 {
        return "…".to_owned();
    }
    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}
