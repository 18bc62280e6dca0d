use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

use livevue_diagrams_core::geometry::Size;

/// Average glyph advance relative to the pixel font size, used when no font
/// produced any glyphs.
const FALLBACK_ADVANCE: f32 = 0.55;

/// TextManager measures label text with a shared FontSystem.
///
/// Loading system fonts is slow, so one instance lives for the whole process.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn calculate_text_size(&self, text: &str, font_family: &str, font_size: u16) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Points to pixels at standard DPI
        let font_size_px = f32::from(font_size) * 1.33;
        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(font_family));
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        // Hosts without usable fonts shape to empty runs.
        if max_width <= 0.0 {
            let longest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
            max_width = longest as f32 * font_size_px * FALLBACK_ADVANCE;
        }
        if total_height <= 0.0 {
            total_height = text.lines().count().max(1) as f32 * line_height;
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

/// Measures `text` rendered in the given font.
pub fn measure(text: &str, font_family: &str, font_size: u16) -> Size {
    TEXT_MANAGER
        .get_or_init(TextManager::new)
        .calculate_text_size(text, font_family, font_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_size() {
        assert_eq!(measure("", "sans-serif", 13), Size::default());
    }

    #[test]
    fn test_longer_text_is_wider() {
        let short = measure("SSR", "sans-serif", 13);
        let long = measure("Node.js SSR Server", "sans-serif", 13);

        assert!(short.width() > 0.0);
        assert!(long.width() > short.width());
        assert!(short.height() > 0.0);
    }

    #[test]
    fn test_larger_font_is_taller() {
        let small = measure("Props", "sans-serif", 10);
        let large = measure("Props", "sans-serif", 20);

        assert!(large.height() > small.height());
    }
}
