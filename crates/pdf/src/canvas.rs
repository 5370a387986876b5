//! Drawing surface for one page.
//!
//! Wraps a `pdf_writer::Content` stream, converting from top-left millimeter
//! coordinates to PDF points, and records the clickable areas of the page.

use agenda_core::PageId;
use pdf_writer::{Content, Str};

use crate::layout::{Area, Color, MM_TO_PT, PAGE_HEIGHT_MM};
use crate::metrics::{cap_height, encode, text_width, Font};

/// Horizontal text alignment inside an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Center,
    Right,
}

/// A clickable area jumping to another page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Link {
    pub area: Area,
    pub target: PageId,
}

/// Text run style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font: Font, size: f32) -> Self {
        Self {
            font,
            size,
            color: Color::BLACK,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

pub(crate) struct Canvas {
    content: Content,
    links: Vec<Link>,
}

fn x_pt(x: f32) -> f32 {
    x * MM_TO_PT
}

fn y_pt(y: f32) -> f32 {
    (PAGE_HEIGHT_MM - y) * MM_TO_PT
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            content: Content::new(),
            links: Vec::new(),
        }
    }

    pub fn fill_rect(&mut self, area: Area, color: Color) {
        let (r, g, b) = color.components();
        self.content.save_state();
        self.content.set_fill_rgb(r, g, b);
        self.content.rect(
            x_pt(area.x),
            y_pt(area.bottom()),
            area.w * MM_TO_PT,
            area.h * MM_TO_PT,
        );
        self.content.fill_nonzero();
        self.content.restore_state();
    }

    pub fn stroke_rect(&mut self, area: Area, gray: u8, width: f32) {
        self.content.save_state();
        self.content.set_stroke_gray(f32::from(gray) / 255.0);
        self.content.set_line_width(width * MM_TO_PT);
        self.content.rect(
            x_pt(area.x),
            y_pt(area.bottom()),
            area.w * MM_TO_PT,
            area.h * MM_TO_PT,
        );
        self.content.stroke();
        self.content.restore_state();
    }

    /// Straight line between two points.
    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), gray: u8, width: f32) {
        self.content.save_state();
        self.content.set_stroke_gray(f32::from(gray) / 255.0);
        self.content.set_line_width(width * MM_TO_PT);
        self.content.move_to(x_pt(from.0), y_pt(from.1));
        self.content.line_to(x_pt(to.0), y_pt(to.1));
        self.content.stroke();
        self.content.restore_state();
    }

    /// Single line of text, vertically centered in `area`.
    pub fn text(&mut self, text: &str, style: TextStyle, area: Area, align: Align) {
        let baseline = area.y + (area.h + cap_height(style.size)) / 2.0;
        self.text_at(text, style, area, baseline, align);
    }

    /// Single line of text with its top at the top of `area`.
    pub fn text_top(&mut self, text: &str, style: TextStyle, area: Area, align: Align) {
        let baseline = area.y + cap_height(style.size);
        self.text_at(text, style, area, baseline, align);
    }

    /// Several lines of text starting at the top of `area`.
    pub fn paragraph(&mut self, lines: &[String], style: TextStyle, area: Area, align: Align) {
        let leading = style.size * 1.2 / MM_TO_PT;
        for (i, line) in lines.iter().enumerate() {
            let row = Area::new(area.x, area.y + i as f32 * leading, area.w, leading);
            if row.bottom() > area.bottom() + f32::EPSILON {
                break;
            }
            self.text_top(line, style, row, align);
        }
    }

    fn text_at(&mut self, text: &str, style: TextStyle, area: Area, baseline: f32, align: Align) {
        if text.is_empty() {
            return;
        }
        let width = text_width(text, style.font, style.size);
        let x = match align {
            Align::Left => area.x,
            Align::Center => area.x + (area.w - width) / 2.0,
            Align::Right => area.right() - width,
        };
        let (r, g, b) = style.color.components();
        let bytes = encode(text);

        self.content.save_state();
        self.content.set_fill_rgb(r, g, b);
        self.content.begin_text();
        self.content.set_font(style.font.resource(), style.size);
        self.content.next_line(x_pt(x), y_pt(baseline));
        self.content.show(Str(&bytes));
        self.content.end_text();
        self.content.restore_state();
    }

    /// Makes `area` jump to `target` when tapped.
    pub fn link(&mut self, area: Area, target: PageId) {
        self.links.push(Link { area, target });
    }

    /// Makes `area` jump to `target`, if there is a target.
    pub fn link_opt(&mut self, area: Area, target: Option<PageId>) {
        if let Some(target) = target {
            self.link(area, target);
        }
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Content stream bytes and clickable areas of the page.
    pub fn finish(self) -> (Vec<u8>, Vec<Link>) {
        (self.content.finish(), self.links)
    }
}
