//! Mission completion certificates.
//!
//! A certificate is a fixed-layout PNG: title, mission name, the user's
//! label, the achievement date and a closing line. Text is drawn with an
//! outline font when one could be loaded, otherwise with the built-in 8x8
//! bitmap font so rendering never depends on font files being present.

use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use chrono::FixedOffset;
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{ImageFormat, Rgb, RgbImage};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Bucket holding rendered certificates.
pub const CERTIFICATE_BUCKET: &str = "certificates";

/// Lifetime of the download URL returned right after issuing.
pub const ISSUED_URL_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Lifetime of download URLs in the certificate listing.
pub const LISTING_URL_TTL: Duration = Duration::from_secs(60 * 60);

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 848;

const TITLE: &str = "CERTIFICATE OF COMPLETION";
const AWARDED_TO: &str = "Awarded to";
const CLOSING: &str = "Every place visited. Thank you for the journey.";

const BACKGROUND: [u8; 3] = [250, 246, 236];
const INK: [u8; 3] = [38, 38, 38];
const MUTED: [u8; 3] = [110, 110, 110];

const TEXT_MARGIN: u32 = 120;
const MIN_TEXT_SIZE: f32 = 16.0;

/// Storage path for a newly issued certificate, relative to the bucket.
pub fn certificate_path(user_id: DbId, mission_id: DbId, issued_at_ms: i64) -> String {
    format!("{user_id}/{mission_id}/{issued_at_ms}.png")
}

/// Format the achievement date as `YYYY/MM/DD` in the given UTC offset.
///
/// Offsets outside ±23 hours fall back to UTC.
pub fn format_achievement_date(at: Timestamp, utc_offset_hours: i32) -> String {
    match FixedOffset::east_opt(utc_offset_hours.saturating_mul(3600)) {
        Some(tz) => at.with_timezone(&tz).format("%Y/%m/%d").to_string(),
        None => at.format("%Y/%m/%d").to_string(),
    }
}

/// Everything printed on one certificate.
#[derive(Debug, Clone)]
pub struct CertificateDetails<'a> {
    pub mission_title: &'a str,
    pub user_label: &'a str,
    pub achieved_on: &'a str,
    /// Border and title color.
    pub accent: [u8; 3],
}

enum Typeface {
    Outline(FontVec),
    Bitmap,
}

/// Renders certificate PNGs. Build once at startup and share.
pub struct CertificateRenderer {
    typeface: Typeface,
}

impl CertificateRenderer {
    /// Use the TrueType/OpenType font at `path`.
    pub fn with_font_file(path: &Path) -> Result<Self, CoreError> {
        let bytes = std::fs::read(path).map_err(|e| {
            CoreError::Internal(format!("Cannot read font {}: {e}", path.display()))
        })?;
        let font = FontVec::try_from_vec(bytes).map_err(|e| {
            CoreError::Internal(format!("Invalid font {}: {e}", path.display()))
        })?;
        Ok(Self {
            typeface: Typeface::Outline(font),
        })
    }

    /// Use the built-in bitmap font. Only ASCII renders; other characters
    /// are drawn as `?`.
    pub fn bitmap() -> Self {
        Self {
            typeface: Typeface::Bitmap,
        }
    }

    /// Whether this renderer is on the bitmap fallback.
    pub fn is_bitmap(&self) -> bool {
        matches!(self.typeface, Typeface::Bitmap)
    }

    /// Render the certificate and encode it as PNG.
    pub fn render(&self, details: &CertificateDetails<'_>) -> Result<Vec<u8>, CoreError> {
        let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, Rgb(BACKGROUND));

        draw_frame(&mut img, 24, 16, details.accent);
        draw_frame(&mut img, 56, 3, details.accent);

        let achieved = format!("Achieved on {}", details.achieved_on);
        let lines: [(&str, f32, u32, [u8; 3]); 6] = [
            (TITLE, 56.0, 120, details.accent),
            (details.mission_title, 72.0, 250, INK),
            (AWARDED_TO, 32.0, 400, MUTED),
            (details.user_label, 48.0, 450, INK),
            (achieved.as_str(), 32.0, 580, MUTED),
            (CLOSING, 28.0, 690, details.accent),
        ];
        for (text, size, top, color) in lines {
            self.draw_centered(&mut img, text, size, top, color);
        }

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| CoreError::Internal(format!("PNG encoding failed: {e}")))?;
        Ok(bytes)
    }

    fn draw_centered(&self, img: &mut RgbImage, text: &str, size: f32, top: u32, color: [u8; 3]) {
        let max_width = (WIDTH - 2 * TEXT_MARGIN) as f32;
        let natural = self.measure(text, size);
        let size = if natural > max_width {
            (size * max_width / natural).max(MIN_TEXT_SIZE)
        } else {
            size
        };
        let width = self.measure(text, size);
        let left = ((WIDTH as f32 - width) / 2.0).max(0.0);

        match &self.typeface {
            Typeface::Outline(font) => draw_outline_text(img, font, text, size, left, top as f32, color),
            Typeface::Bitmap => draw_bitmap_text(img, text, size, left as i32, top as i32, color),
        }
    }

    fn measure(&self, text: &str, size: f32) -> f32 {
        match &self.typeface {
            Typeface::Outline(font) => {
                let scaled = font.as_scaled(PxScale::from(size));
                let mut width = 0.0;
                let mut prev: Option<GlyphId> = None;
                for c in text.chars() {
                    let id = scaled.glyph_id(c);
                    if let Some(p) = prev {
                        width += scaled.kern(p, id);
                    }
                    width += scaled.h_advance(id);
                    prev = Some(id);
                }
                width
            }
            Typeface::Bitmap => (text.chars().count() as u32 * 8 * bitmap_scale(size)) as f32,
        }
    }
}

fn draw_frame(img: &mut RgbImage, inset: u32, thickness: u32, color: [u8; 3]) {
    let (w, h) = img.dimensions();
    for y in inset..h.saturating_sub(inset) {
        for x in inset..w.saturating_sub(inset) {
            let on_edge = x < inset + thickness
                || x >= w - inset - thickness
                || y < inset + thickness
                || y >= h - inset - thickness;
            if on_edge {
                img.put_pixel(x, y, Rgb(color));
            }
        }
    }
}

fn blend(img: &mut RgbImage, x: i32, y: i32, color: [u8; 3], coverage: f32) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    let alpha = coverage.clamp(0.0, 1.0);
    let pixel = img.get_pixel_mut(x as u32, y as u32);
    for (channel, target) in pixel.0.iter_mut().zip(color) {
        let mixed = *channel as f32 * (1.0 - alpha) + target as f32 * alpha;
        *channel = mixed.round() as u8;
    }
}

fn draw_outline_text(
    img: &mut RgbImage,
    font: &FontVec,
    text: &str,
    size: f32,
    left: f32,
    top: f32,
    color: [u8; 3],
) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let baseline = top + scaled.ascent();
    let mut caret = left;
    let mut prev: Option<GlyphId> = None;

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(p) = prev {
            caret += scaled.kern(p, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);
        prev = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                blend(
                    img,
                    bounds.min.x as i32 + gx as i32,
                    bounds.min.y as i32 + gy as i32,
                    color,
                    coverage,
                );
            });
        }
    }
}

fn bitmap_scale(size: f32) -> u32 {
    ((size / 8.0).round() as u32).max(1)
}

fn draw_bitmap_text(img: &mut RgbImage, text: &str, size: f32, left: i32, top: i32, color: [u8; 3]) {
    let scale = bitmap_scale(size) as i32;
    let unknown = BASIC_FONTS.get('?').unwrap_or([0; 8]);

    for (i, c) in text.chars().enumerate() {
        let rows = BASIC_FONTS.get(c).unwrap_or(unknown);
        let origin_x = left + i as i32 * 8 * scale;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..8 {
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        blend(
                            img,
                            origin_x + col * scale + dx,
                            top + row as i32 * scale + dy,
                            color,
                            1.0,
                        );
                    }
                }
            }
        }
    }
}
