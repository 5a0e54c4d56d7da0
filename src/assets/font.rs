//! Font resolution and the process-wide font handle cache.
//!
//! Resolution never fails: a missing file degrades to the next fallback and ultimately to the
//! built-in block face, so a render always has something drawable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::foundation::error::{FlyerError, FlyerResult};

/// Directories searched when a reference is a logical family name (e.g. `DejaVuSans`).
const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/truetype/liberation",
    "/Library/Fonts",
    "C:\\Windows\\Fonts",
];

const BOLD_FALLBACKS: &[&str] = &["/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"];

const REGULAR_FALLBACKS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "DejaVuSans.ttf",
];

/// Cache key: the caller's reference string, pixel size and weight.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub reference: String,
    pub size_px: u32,
    pub bold: bool,
}

/// Loaded outline font file.
#[derive(Clone, Debug)]
pub struct OutlineFace {
    pub(crate) path: PathBuf,
    pub(crate) blob: vello_cpu::peniko::Blob<u8>,
    pub(crate) data: vello_cpu::peniko::FontData,
}

/// Glyph source behind a [`FontHandle`].
#[derive(Clone, Debug)]
pub enum FontFace {
    Outline(OutlineFace),
    /// Deterministic block-glyph face used when no font file is available.
    Builtin,
}

/// Sized, weighted, immutable font reference shared by every text draw in the process.
#[derive(Clone, Debug)]
pub struct FontHandle {
    key: FontKey,
    face: FontFace,
}

impl FontHandle {
    /// A handle on the built-in face, bypassing the cache.
    pub fn builtin(size_px: u32, bold: bool) -> Self {
        Self {
            key: FontKey {
                reference: "builtin".to_owned(),
                size_px: size_px.max(1),
                bold,
            },
            face: FontFace::Builtin,
        }
    }

    pub fn key(&self) -> &FontKey {
        &self.key
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    pub fn size_px(&self) -> f32 {
        self.key.size_px as f32
    }

    pub fn is_bold(&self) -> bool {
        self.key.bold
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, FontFace::Builtin)
    }

    /// Source file of an outline face.
    pub fn source_path(&self) -> Option<&Path> {
        match &self.face {
            FontFace::Outline(o) => Some(o.path.as_path()),
            FontFace::Builtin => None,
        }
    }
}

/// Advance of `ch` in the built-in face, in em units.
pub(crate) fn builtin_advance_em(ch: char) -> f32 {
    match ch {
        ' ' | '\u{a0}' => 0.32,
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' => 0.3,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '-' => 0.4,
        'm' | 'w' | 'M' | 'W' | '@' => 0.85,
        c if c.is_ascii_uppercase() || c.is_ascii_digit() => 0.65,
        c if c.is_alphabetic() && !c.is_ascii() => 0.7,
        _ => 0.55,
    }
}

/// File-system search policy for font references.
#[derive(Clone, Debug)]
pub struct FontResolver {
    search_dirs: Vec<PathBuf>,
    bold_fallbacks: Vec<PathBuf>,
    regular_fallbacks: Vec<PathBuf>,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self {
            search_dirs: FONT_DIRS.iter().map(PathBuf::from).collect(),
            bold_fallbacks: BOLD_FALLBACKS.iter().map(PathBuf::from).collect(),
            regular_fallbacks: REGULAR_FALLBACKS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl FontResolver {
    /// Resolver that only honors direct paths, then the built-in face.
    pub fn direct_only() -> Self {
        Self {
            search_dirs: Vec::new(),
            bold_fallbacks: Vec::new(),
            regular_fallbacks: Vec::new(),
        }
    }

    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    /// Ordered list of files to try for `reference`.
    pub fn candidates(&self, reference: &str, bold: bool) -> Vec<PathBuf> {
        let mut out = Vec::new();
        let reference = reference.trim();
        if !reference.is_empty() {
            out.push(PathBuf::from(reference));

            let has_ext = Path::new(reference).extension().is_some();
            for dir in &self.search_dirs {
                if has_ext {
                    out.push(dir.join(reference));
                    continue;
                }
                if bold {
                    out.push(dir.join(format!("{reference}-Bold.ttf")));
                }
                out.push(dir.join(format!("{reference}.ttf")));
                out.push(dir.join(format!("{reference}.otf")));
            }
        }
        if bold {
            out.extend(self.bold_fallbacks.iter().cloned());
        }
        out.extend(self.regular_fallbacks.iter().cloned());
        out
    }

    /// Resolve to a face, loading bytes through `cache`.
    fn resolve_face(&self, cache: &FontCache, reference: &str, bold: bool) -> FontFace {
        for path in self.candidates(reference, bold) {
            match cache.file_bytes(&path) {
                Ok(blob) => {
                    tracing::debug!(reference, path = %path.display(), bold, "font resolved");
                    let data = vello_cpu::peniko::FontData::new(blob.clone(), 0);
                    return FontFace::Outline(OutlineFace { path, blob, data });
                }
                Err(e) => tracing::debug!(reference, "font candidate skipped: {e}"),
            }
        }
        tracing::warn!(reference, bold, "no font file found, using built-in face");
        FontFace::Builtin
    }
}

/// Append-only, read-through font cache.
#[derive(Default)]
pub struct FontCache {
    resolver: FontResolver,
    handles: RwLock<HashMap<FontKey, Arc<FontHandle>>>,
    files: RwLock<HashMap<PathBuf, Option<vello_cpu::peniko::Blob<u8>>>>,
}

impl FontCache {
    pub fn new(resolver: FontResolver) -> Self {
        Self {
            resolver,
            handles: RwLock::new(HashMap::new()),
            files: RwLock::new(HashMap::new()),
        }
    }

    /// Look up or resolve the handle for `(reference, size_px, bold)`.
    ///
    /// Two threads racing on the same key both resolve; the first insert wins and both callers
    /// receive equivalent handles.
    pub fn get(&self, reference: &str, size_px: u32, bold: bool) -> Arc<FontHandle> {
        let key = FontKey {
            reference: reference.to_owned(),
            size_px: size_px.max(1),
            bold,
        };

        if let Some(h) = self
            .handles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Arc::clone(h);
        }

        let face = self.resolver.resolve_face(self, reference, bold);
        let handle = Arc::new(FontHandle {
            key: key.clone(),
            face,
        });

        let mut handles = self.handles.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(handles.entry(key).or_insert(handle))
    }

    pub fn len(&self) -> usize {
        self.handles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a font file once per process; misses are remembered too.
    fn file_bytes(&self, path: &Path) -> FlyerResult<vello_cpu::peniko::Blob<u8>> {
        if let Some(entry) = self
            .files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
        {
            return entry
                .clone()
                .ok_or_else(|| FlyerError::asset_not_found(path));
        }

        let loaded = if path.is_file() {
            std::fs::read(path).ok().map(vello_cpu::peniko::Blob::from)
        } else {
            None
        };

        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);
        files
            .entry(path.to_path_buf())
            .or_insert(loaded)
            .clone()
            .ok_or_else(|| FlyerError::asset_not_found(path))
    }
}

fn global_cache() -> &'static FontCache {
    static CACHE: OnceLock<FontCache> = OnceLock::new();
    CACHE.get_or_init(FontCache::default)
}

/// Resolve a font through the process-wide cache.
///
/// `reference` is a file path or a logical family name. Never fails.
pub fn resolve_font(reference: &str, size_px: u32, bold: bool) -> Arc<FontHandle> {
    global_cache().get(reference, size_px, bold)
}

/// Number of distinct handles in the process-wide cache.
pub fn font_cache_len() -> usize {
    global_cache().len()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
