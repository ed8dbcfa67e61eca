//! `"W×H"` dimension strings.

use serde::{Deserialize, Serialize};

/// Widest preview box the presentation layer draws, in pixels.
pub const PREVIEW_MAX_WIDTH: u32 = 600;
/// Tallest preview box the presentation layer draws, in pixels.
pub const PREVIEW_MAX_HEIGHT: u32 = 280;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    /// Size clipped to the preview area. Pricing never looks at this.
    pub fn preview_box(&self) -> PixelSize {
        PixelSize {
            width: self.width.min(PREVIEW_MAX_WIDTH),
            height: self.height.min(PREVIEW_MAX_HEIGHT),
        }
    }
}

/// Parse `"300×250"` into a pixel size.
///
/// Accepts `×` or an ASCII `x` between two unsigned integers, with optional
/// surrounding whitespace. Sentinels like `"Various"` or `"Multiple"`, and
/// anything else that is not a fixed box, yield `None`.
pub fn parse_dims(dimensions: &str) -> Option<PixelSize> {
    let (width, height) = dimensions.split_once(|c: char| matches!(c, '×' | 'x' | 'X'))?;
    Some(PixelSize {
        width: parse_pixels(width)?,
        height: parse_pixels(height)?,
    })
}

fn parse_pixels(part: &str) -> Option<u32> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
