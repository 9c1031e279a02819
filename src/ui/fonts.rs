//! Glyph font discovery
//!
//! egui's bundled fonts carry no CJK characters, so a system font is
//! registered as a fallback when one can be found.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use egui::{FontData, FontDefinitions, FontFamily};
use tracing::{info, warn};

use crate::Piece;

const CJK_FONT_NAME: &str = "cjk";

/// Well-known locations of fonts covering traditional Chinese
const CJK_FONT_CANDIDATES: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\msjh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
    // macOS
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/droid/DroidSansFallbackFull.ttf",
];

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("no CJK font found among {searched} candidate paths")]
    NotFound { searched: usize },
    #[error("failed to read font {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which glyphs pieces and river labels are drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    /// Traditional characters, needs a CJK font
    Hanzi,
    /// Single letters, always renderable
    #[default]
    Latin,
}

impl GlyphSet {
    pub fn piece(self, piece: Piece) -> &'static str {
        match self {
            GlyphSet::Hanzi => piece.glyph(),
            GlyphSet::Latin => piece.letter(),
        }
    }

    /// Left and right river labels
    pub fn river(self) -> (&'static str, &'static str) {
        match self {
            GlyphSet::Hanzi => ("楚河", "漢界"),
            GlyphSet::Latin => ("Chu River", "Han Border"),
        }
    }
}

fn load_font(path: &Path) -> Result<Vec<u8>, FontError> {
    std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the first existing candidate font
pub fn find_font<P: AsRef<Path>>(candidates: &[P]) -> Result<(PathBuf, Vec<u8>), FontError> {
    for candidate in candidates {
        let path: &Path = candidate.as_ref();
        if !path.is_file() {
            continue;
        }
        match load_font(path) {
            Ok(bytes) => return Ok((path.to_path_buf(), bytes)),
            Err(err) => warn!("{err}"),
        }
    }
    Err(FontError::NotFound {
        searched: candidates.len(),
    })
}

/// Register a CJK fallback font with egui and report which glyphs to draw
pub fn install(ctx: &egui::Context) -> GlyphSet {
    let (path, bytes) = match find_font(CJK_FONT_CANDIDATES) {
        Ok(found) => found,
        Err(err) => {
            warn!("{err}; drawing pieces with Latin letters");
            return GlyphSet::Latin;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_owned(), Arc::new(FontData::from_owned(bytes)));
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .push(CJK_FONT_NAME.to_owned());
    ctx.set_fonts(fonts);

    info!(font = %path.display(), "CJK glyph font loaded");
    GlyphSet::Hanzi
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceKind;

    #[test]
    fn test_find_font_none_exist() {
        let candidates = ["/nonexistent/font-a.ttf", "/nonexistent/font-b.ttc"];
        match find_font(&candidates) {
            Err(FontError::NotFound { searched }) => assert_eq!(searched, 2),
            other => panic!("expected NotFound, got {:?}", other.map(|(p, _)| p)),
        }
    }

    #[test]
    fn test_find_font_picks_first_existing() {
        let dir = std::env::temp_dir().join(format!("xiangqi-fonts-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let font = dir.join("fake.ttf");
        std::fs::write(&font, b"font bytes").unwrap();

        let candidates = [dir.join("missing.ttf"), font.clone()];
        let (path, bytes) = find_font(&candidates).unwrap();
        assert_eq!(path, font);
        assert_eq!(bytes, b"font bytes");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_directories_are_skipped() {
        let candidates = [std::env::temp_dir()];
        assert!(matches!(find_font(&candidates), Err(FontError::NotFound { .. })));
    }

    #[test]
    fn test_glyph_sets() {
        let general = Piece::red(PieceKind::General);
        assert_eq!(GlyphSet::Hanzi.piece(general), "帥");
        assert_eq!(GlyphSet::Latin.piece(general), "G");
        assert_eq!(GlyphSet::Hanzi.river(), ("楚河", "漢界"));
        assert_eq!(GlyphSet::default(), GlyphSet::Latin);
    }
}
