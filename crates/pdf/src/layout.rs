//! Page geometry and styling.
//!
//! All distances are in millimeters measured from the top-left corner of the
//! page. Font sizes are in points.

use agenda_core::Locale;

use crate::error::{RenderError, Result};

/// Close to A4, matching the reMarkable 2 aspect ratio.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 280.0;

// Keep clear of the tablet toolbar.
pub(crate) const LEFT_MARGIN: f32 = 10.0;
pub(crate) const RIGHT_MARGIN: f32 = 20.0;
pub(crate) const TOP_MARGIN: f32 = 20.0;
pub(crate) const BOTTOM_MARGIN: f32 = 20.0;

pub(crate) const MM_TO_PT: f32 = 72.0 / 25.4;

/// Shade of weekends and holidays in calendar grids.
pub(crate) const DAY_OFF_GRAY: u8 = 180;

/// Maximum accepted ruled line width.
const MAX_LINE_WIDTH: f32 = 5.0;

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);

    pub fn gray(level: u8) -> Color {
        Color(level, level, level)
    }

    pub fn components(self) -> (f32, f32, f32) {
        let channel = |c: u8| f32::from(c) / 255.0;
        (channel(self.0), channel(self.1), channel(self.2))
    }
}

const MONTH_COLORS: [Color; 12] = [
    Color(180, 180, 180),
    Color(128, 0, 128),
    Color(0, 128, 0),
    Color(155, 255, 100),
    Color(250, 128, 114),
    Color(0, 0, 255),
    Color(255, 0, 0),
    Color(255, 215, 0),
    Color(80, 200, 212),
    Color(255, 165, 0),
    Color(0, 0, 0),
    Color(178, 34, 34),
];

/// Header color of `month` in `1..=12`.
pub(crate) fn month_color(month: u32) -> Color {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_COLORS.get(i as usize))
        .copied()
        .unwrap_or(Color::BLACK)
}

/// Axis-aligned rectangle in page millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Area {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Area {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Shrinks the area by `pad` on every side.
    pub fn inset(&self, pad: f32) -> Area {
        Area::new(
            self.x + pad,
            self.y + pad,
            (self.w - 2.0 * pad).max(0.0),
            (self.h - 2.0 * pad).max(0.0),
        )
    }

    /// PDF user space rectangle (points, bottom-left origin).
    pub fn to_pdf_rect(self) -> pdf_writer::Rect {
        pdf_writer::Rect::new(
            self.x * MM_TO_PT,
            (PAGE_HEIGHT_MM - self.bottom()) * MM_TO_PT,
            self.right() * MM_TO_PT,
            (PAGE_HEIGHT_MM - self.y) * MM_TO_PT,
        )
    }
}

/// Styling choices of a rendering run.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Language of month and weekday names.
    pub locale: Locale,
    /// Width of the ruled note lines, in millimeters.
    pub line_width: f32,
    /// Gray level of the ruled note lines (0 black, 255 white).
    pub line_gray: u8,
    /// Value of the document's author metadata.
    pub author: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            line_width: 0.1,
            line_gray: 200,
            author: "agenda".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_line_style(mut self, width: f32, gray: u8) -> Self {
        self.line_width = width;
        self.line_gray = gray;
        self
    }

    /// Checks the options before any page is drawn.
    pub fn validate(&self) -> Result<()> {
        if self.line_width.is_finite() && self.line_width > 0.0 && self.line_width <= MAX_LINE_WIDTH
        {
            Ok(())
        } else {
            Err(RenderError::InvalidLineWidth(self.line_width))
        }
    }
}
