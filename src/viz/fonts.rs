//! Font registration for the `ab_glyph` text path, which does not discover OS fonts.

use log::{info, warn};
use plotters::style::{FontStyle, register_font};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Bundled fallback, used when no font path is configured or the configured one is unusable.
const BUNDLED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

static FONT_READY: OnceLock<bool> = OnceLock::new();

/// Register a "sans-serif" font once per process and report whether text can be drawn.
///
/// `preferred` is tried before the bundled DejaVu Sans; it only matters on the first call.
pub fn ensure_fonts_registered(preferred: Option<&Path>) -> bool {
    *FONT_READY.get_or_init(|| {
        if let Some(path) = preferred {
            match fs::read(path) {
                Ok(bytes) => {
                    // Plotters keeps a reference to the font data for the life of the process.
                    let data: &'static [u8] = Box::leak(bytes.into_boxed_slice());
                    if register_font("sans-serif", FontStyle::Normal, data).is_ok() {
                        info!("registered chart font {}", path.display());
                        return true;
                    }
                    warn!("unusable font file {}, using bundled font", path.display());
                }
                Err(err) => warn!("cannot read font {}: {err}, using bundled font", path.display()),
            }
        }
        match register_font("sans-serif", FontStyle::Normal, BUNDLED_FONT) {
            Ok(()) => true,
            Err(_) => {
                warn!("bundled font rejected; charts are drawn without text");
                false
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_preferred_path_falls_back_to_bundled() {
        assert!(ensure_fonts_registered(Some(Path::new("/nonexistent/font.ttf"))));
    }
}
