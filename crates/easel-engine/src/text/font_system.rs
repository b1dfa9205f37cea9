use std::path::{Path, PathBuf};

use super::FontFamily;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, thiserror::Error)]
pub enum FontLoadError {
    #[error("failed to read font file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse font: {0}")]
    Parse(String),
}

// Candidate faces per family, tried in order. First hit wins.
const SYSTEM_FONT_PATHS: &[(FontFamily, &str)] = &[
    (FontFamily::Fixed, "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf"),
    (FontFamily::Fixed, "/usr/share/fonts/dejavu/DejaVuSansMono.ttf"),
    (FontFamily::Fixed, "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf"),
    (FontFamily::Fixed, "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf"),
    (FontFamily::Fixed, "/usr/share/fonts/truetype/noto/NotoSansMono-Regular.ttf"),
    (FontFamily::Fixed, "/Library/Fonts/Courier New.ttf"),
    (FontFamily::Fixed, "C:\\Windows\\Fonts\\consola.ttf"),
    (FontFamily::Helvetica, "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf"),
    (FontFamily::Helvetica, "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf"),
    (FontFamily::Helvetica, "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
    (FontFamily::Helvetica, "/usr/share/fonts/dejavu/DejaVuSans.ttf"),
    (FontFamily::Helvetica, "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf"),
    (FontFamily::Helvetica, "/Library/Fonts/Arial.ttf"),
    (FontFamily::Helvetica, "C:\\Windows\\Fonts\\arial.ttf"),
    (FontFamily::Times, "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf"),
    (FontFamily::Times, "/usr/share/fonts/liberation-serif/LiberationSerif-Regular.ttf"),
    (FontFamily::Times, "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf"),
    (FontFamily::Times, "/usr/share/fonts/dejavu/DejaVuSerif.ttf"),
    (FontFamily::Times, "/usr/share/fonts/truetype/noto/NotoSerif-Regular.ttf"),
    (FontFamily::Times, "/Library/Fonts/Times New Roman.ttf"),
    (FontFamily::Times, "C:\\Windows\\Fonts\\times.ttf"),
];

/// Owns one TrueType face per [`FontFamily`].
///
/// Faces are immutable after loading. The system is owned by the application
/// and passed to the text renderer each frame so new glyphs can be
/// rasterized on demand.
#[derive(Default)]
pub struct FontSystem {
    faces: [Option<fontdue::Font>; 3],
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType or OpenType face from raw bytes and binds it to `family`.
    ///
    /// Replaces any face previously bound to the family.
    pub fn load_font(&mut self, family: FontFamily, bytes: &[u8]) -> Result<(), FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError::Parse(e.to_string()))?;
        self.faces[slot(family)] = Some(font);
        Ok(())
    }

    /// Reads and loads a face file for `family`.
    pub fn load_file(&mut self, family: FontFamily, path: &Path) -> Result<(), FontLoadError> {
        let bytes = std::fs::read(path).map_err(|source| FontLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_font(family, &bytes)
    }

    /// Probes well-known system locations for a face per family.
    ///
    /// Returns the number of families bound. Families with no face found are
    /// logged at `warn`; text in those families falls back to any loaded face.
    pub fn load_system_fonts(&mut self) -> usize {
        for family in FontFamily::ALL {
            let loaded = SYSTEM_FONT_PATHS
                .iter()
                .filter(|(f, _)| *f == family)
                .map(|(_, p)| Path::new(p))
                .filter(|p| p.is_file())
                .any(|p| match self.load_file(family, p) {
                    Ok(()) => {
                        log::debug!("font {:?} <- {}", family, p.display());
                        true
                    }
                    Err(e) => {
                        log::warn!("{e}");
                        false
                    }
                });

            if !loaded {
                log::warn!("no system face found for font family {:?}", family);
            }
        }
        self.faces.iter().filter(|f| f.is_some()).count()
    }

    pub fn has_family(&self, family: FontFamily) -> bool {
        self.faces[slot(family)].is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.iter().all(Option::is_none)
    }

    /// Returns the face for `family`, or any loaded face as a fallback.
    pub(crate) fn face(&self, family: FontFamily) -> Option<&fontdue::Font> {
        self.faces[slot(family)]
            .as_ref()
            .or_else(|| self.faces.iter().flatten().next())
    }

    /// Index of the face `face()` would resolve to. Used to key glyph caches.
    pub(crate) fn face_slot(&self, family: FontFamily) -> Option<usize> {
        let own = slot(family);
        if self.faces[own].is_some() {
            Some(own)
        } else {
            self.faces.iter().position(Option::is_some)
        }
    }
}

const fn slot(family: FontFamily) -> usize {
    match family {
        FontFamily::Fixed => 0,
        FontFamily::Helvetica => 1,
        FontFamily::Times => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_system_has_no_faces() {
        let fonts = FontSystem::new();
        assert!(fonts.is_empty());
        assert!(fonts.face(FontFamily::Helvetica).is_none());
        assert_eq!(fonts.face_slot(FontFamily::Times), None);
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(FontFamily::Fixed, b"not a font").unwrap_err();
        assert!(matches!(err, FontLoadError::Parse(_)));
        assert!(!fonts.has_family(FontFamily::Fixed));
    }

    #[test]
    fn missing_file_is_io_error() {
        let mut fonts = FontSystem::new();
        let err = fonts
            .load_file(FontFamily::Times, Path::new("/nonexistent/face.ttf"))
            .unwrap_err();
        assert!(matches!(err, FontLoadError::Io { .. }));
    }
}
