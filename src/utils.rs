//! Utility functions

use std::path::PathBuf;

// Document with a speech bubble, square viewBox so it works for the window icon too
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 128 128"><path fill="#e4e4e7" d="M28 8h48l28 28v76a8 8 0 0 1-8 8H28a8 8 0 0 1-8-8V16a8 8 0 0 1 8-8z"/><path fill="#a1a1aa" d="M76 8v22a6 6 0 0 0 6 6h22z"/><rect x="34" y="50" width="48" height="6" rx="3" fill="#71717a"/><rect x="34" y="64" width="36" height="6" rx="3" fill="#71717a"/><path fill="#2dd4bf" d="M70 76h44a8 8 0 0 1 8 8v22a8 8 0 0 1-8 8H92l-12 10v-10h-10a8 8 0 0 1-8-8V84a8 8 0 0 1 8-8z"/><circle cx="80" cy="95" r="4" fill="#042f2e"/><circle cx="92" cy="95" r="4" fill="#042f2e"/><circle cx="104" cy="95" r="4" fill="#042f2e"/></svg>"##;

/// Rasterize the logo SVG to a square RGBA image (sidebar header and window icon).
pub fn rasterize_logo_square(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Per-user data directory (settings and logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Doc Assistant")
}

/// Format bytes into human-readable string (B, KB, MB)
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_rasterizes_to_requested_size() {
        let (pixels, w, h) = rasterize_logo_square(64).unwrap();
        assert_eq!((w, h), (64, 64));
        assert_eq!(pixels.len(), 64 * 64 * 4);
        assert!(pixels.chunks(4).any(|p| p[3] > 0));
    }

    #[test]
    fn logo_source_is_complete() {
        assert!(LOGO_SVG.starts_with("<svg"));
        assert!(LOGO_SVG.ends_with("</svg>"));
        assert!(LOGO_SVG.contains(r##"fill="#e4e4e7""##));
    }

    #[test]
    fn bytes_are_human_readable() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024 / 2), "1.5 MB");
    }
}
