// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing-surface abstraction and a recording implementation.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Circle, Line, Point};

/// Something the renderers can paint on.
///
/// Implement this for your canvas, display list, or file format.
/// Coordinates are in surface space (y grows downward).
pub trait Surface {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Stroke the outline of a circle.
    fn stroke_circle(&mut self, circle: Circle);

    /// Stroke a straight line segment.
    fn stroke_line(&mut self, line: Line);

    /// Draw `text` with its baseline origin at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn stroke_circle(&mut self, circle: Circle) {
        (**self).stroke_circle(circle);
    }

    fn stroke_line(&mut self, line: Line) {
        (**self).stroke_line(line);
    }

    fn draw_text(&mut self, origin: Point, text: &str) {
        (**self).draw_text(origin, text);
    }
}

/// A single recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// [`Surface::stroke_circle`].
    Circle(Circle),
    /// [`Surface::stroke_line`].
    Line(Line),
    /// [`Surface::draw_text`].
    Text(Point, String),
}

/// A surface that records draw calls since the last clear.
#[derive(Clone, Debug, Default)]
pub struct Recording {
    commands: Vec<DrawCmd>,
    clears: usize,
}

impl Recording {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls since the last clear, in order.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// How many times the surface has been cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Recorded circles, in order.
    pub fn circles(&self) -> impl Iterator<Item = Circle> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Circle(circle) => Some(*circle),
            _ => None,
        })
    }

    /// Recorded lines, in order.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Line(line) => Some(*line),
            _ => None,
        })
    }

    /// Recorded text, in order.
    pub fn texts(&self) -> impl Iterator<Item = (Point, &str)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Text(at, text) => Some((*at, text.as_str())),
            _ => None,
        })
    }
}

impl Surface for Recording {
    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn stroke_circle(&mut self, circle: Circle) {
        self.commands.push(DrawCmd::Circle(circle));
    }

    fn stroke_line(&mut self, line: Line) {
        self.commands.push(DrawCmd::Line(line));
    }

    fn draw_text(&mut self, origin: Point, text: &str) {
        self.commands.push(DrawCmd::Text(origin, String::from(text)));
    }
}
