// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Surface`] that serializes to an SVG document.

use alloc::string::String;
use core::fmt::Write;

use kurbo::{Circle, Line, Point, Size};

use crate::surface::Surface;

/// Surface that accumulates SVG elements.
///
/// Each draw call appends one element; [`SvgSurface::finish`] wraps them in an `<svg>` root sized to
/// the surface. Strokes are black and unfilled, matching a plain canvas context.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    size: Size,
    body: String,
}

impl SvgSurface {
    /// Create an empty surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    /// Surface size.
    pub const fn size(&self) -> Size {
        self.size
    }

    /// The accumulated elements, without the `<svg>` wrapper.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Render the complete SVG document.
    pub fn finish(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 160);
        // Writing into a `String` cannot fail.
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" \
             fill=\"none\" stroke=\"black\" font-family=\"sans-serif\" font-size=\"10\">\n",
            w = self.size.width,
            h = self.size.height,
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn stroke_circle(&mut self, circle: Circle) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
            circle.center.x, circle.center.y, circle.radius
        );
    }

    fn stroke_line(&mut self, line: Line) {
        let _ = writeln!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        );
    }

    fn draw_text(&mut self, origin: Point, text: &str) {
        let _ = write!(
            self.body,
            "<text x=\"{}\" y=\"{}\" fill=\"black\" stroke=\"none\">",
            origin.x, origin.y
        );
        escape_into(&mut self.body, text);
        self.body.push_str("</text>\n");
    }
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
