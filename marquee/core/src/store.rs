//! Glyph and Frame Store
//!
//! Fixed-height text blocks loaded from plain files:
//!
//! - glyphs: `<glyph_dir>/<C>.txt`, one per upper-case letter or digit,
//!   exactly [`GLYPH_HEIGHT`] lines
//! - frames: `<frame_dir>/frame_NN.txt`, 1-based, normalized to
//!   [`FRAME_ROWS`] rows
//!
//! A missing or unreadable file never fails the caller. It is logged and
//! replaced with a placeholder block of the same height.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Lines in every glyph block
pub const GLYPH_HEIGHT: usize = 6;

/// Columns in every glyph block, space and placeholders included
pub const GLYPH_WIDTH: usize = 10;

/// Rows in every animation frame
pub const FRAME_ROWS: usize = 20;

/// Characters preloaded from the glyph directory
const PRELOADED_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Failure to read a block from disk
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("resource not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn read_block(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => StoreError::Missing(path.to_path_buf()),
        _ => StoreError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Truncate or space-pad `line` to exactly `width` characters
fn fit_to(line: &str, width: usize) -> String {
    let mut fitted: String = line.chars().take(width).collect();
    let len = fitted.chars().count();
    fitted.extend(std::iter::repeat(' ').take(width - len));
    fitted
}

// ============================================================================
// Glyphs
// ============================================================================

/// One character rendered as [`GLYPH_HEIGHT`] lines of [`GLYPH_WIDTH`] columns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphBlock {
    lines: Vec<String>,
    width: usize,
}

impl GlyphBlock {
    /// Normalize raw file content: truncate or pad to the fixed height and
    /// clip or pad every line to [`GLYPH_WIDTH`]
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text
            .lines()
            .take(GLYPH_HEIGHT)
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();
        lines.resize(GLYPH_HEIGHT, String::new());

        Self::fixed(lines)
    }

    /// Stand-in for a glyph that could not be loaded: the bare character on
    /// every line
    pub fn placeholder(ch: char) -> Self {
        let line = format!("   {ch}   ");
        Self::fixed(vec![line; GLYPH_HEIGHT])
    }

    /// Blank block used between words
    pub fn space() -> Self {
        Self::fixed(vec![String::new(); GLYPH_HEIGHT])
    }

    fn fixed(lines: Vec<String>) -> Self {
        let lines = lines.iter().map(|line| fit_to(line, GLYPH_WIDTH)).collect();
        Self {
            lines,
            width: GLYPH_WIDTH,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

/// Glyph blocks keyed by upper-case character
#[derive(Clone, Debug)]
pub struct GlyphStore {
    dir: PathBuf,
    glyphs: HashMap<char, GlyphBlock>,
    unknown: GlyphBlock,
}

impl GlyphStore {
    /// Preload `A-Z` and `0-9` from `dir`
    pub fn load(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let mut glyphs: HashMap<char, GlyphBlock> = PRELOADED_GLYPHS
            .chars()
            .map(|ch| (ch, Self::load_glyph(&dir, ch)))
            .collect();
        glyphs.insert(' ', GlyphBlock::space());

        tracing::info!(dir = %dir.display(), glyphs = glyphs.len(), "Loaded glyphs");

        Self {
            dir,
            glyphs,
            unknown: GlyphBlock::placeholder('?'),
        }
    }

    /// Read `<dir>/<UPPER>.txt`, falling back to a placeholder
    pub fn load_glyph(dir: &Path, ch: char) -> GlyphBlock {
        let key = ch.to_ascii_uppercase();
        let path = dir.join(format!("{key}.txt"));
        match read_block(&path) {
            Ok(text) => GlyphBlock::from_text(&text),
            Err(e) => {
                tracing::debug!(glyph = %key, error = %e, "Using placeholder glyph");
                GlyphBlock::placeholder(key)
            }
        }
    }

    /// Block for `ch`; lower case is folded, unsupported characters map to `?`
    pub fn glyph(&self, ch: char) -> &GlyphBlock {
        self.glyphs
            .get(&ch.to_ascii_uppercase())
            .unwrap_or(&self.unknown)
    }

    /// Compose `text` left to right into [`GLYPH_HEIGHT`] lines
    pub fn render(&self, text: &str) -> Vec<String> {
        let mut rows = vec![String::new(); GLYPH_HEIGHT];
        for ch in text.chars() {
            for (row, line) in rows.iter_mut().zip(self.glyph(ch).lines()) {
                row.push_str(line);
            }
        }
        rows
    }

    /// Re-read every glyph from the same directory
    pub fn reload(&mut self) {
        *self = Self::load(self.dir.clone());
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

// ============================================================================
// Frames
// ============================================================================

/// One animation still, exactly [`FRAME_ROWS`] rows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBlock {
    rows: Vec<String>,
}

impl FrameBlock {
    /// Truncate or blank-pad raw file content to [`FRAME_ROWS`]
    pub fn from_text(text: &str) -> Self {
        let mut rows: Vec<String> = text
            .lines()
            .take(FRAME_ROWS)
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();
        rows.resize(FRAME_ROWS, String::new());
        Self { rows }
    }

    /// All-blank frame used when a file cannot be read
    pub fn blank() -> Self {
        Self {
            rows: vec![String::new(); FRAME_ROWS],
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Widest row in columns
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Ordered animation frames
#[derive(Clone, Debug)]
pub struct FrameStore {
    dir: PathBuf,
    max_frames: usize,
    frames: Vec<FrameBlock>,
}

impl FrameStore {
    /// Probe `frame_01.txt`, `frame_02.txt`, ... stopping at the first
    /// missing file or after `max_frames`
    pub fn load(dir: impl Into<PathBuf>, max_frames: usize) -> Self {
        let dir = dir.into();
        let mut frames = Vec::new();

        for ordinal in 1..=max_frames {
            let path = Self::frame_path(&dir, ordinal);
            match read_block(&path) {
                Ok(text) => frames.push(FrameBlock::from_text(&text)),
                Err(StoreError::Missing(_)) => break,
                Err(e) => {
                    tracing::debug!(ordinal, error = %e, "Using blank frame");
                    frames.push(FrameBlock::blank());
                }
            }
        }

        tracing::info!(dir = %dir.display(), frames = frames.len(), "Loaded animation frames");

        Self {
            dir,
            max_frames,
            frames,
        }
    }

    /// `<dir>/frame_NN.txt` for a 1-based ordinal
    pub fn frame_path(dir: &Path, ordinal: usize) -> PathBuf {
        dir.join(format!("frame_{ordinal:02}.txt"))
    }

    /// Read a single frame by 1-based ordinal, falling back to a blank frame
    pub fn load_frame(dir: &Path, ordinal: usize) -> FrameBlock {
        match read_block(&Self::frame_path(dir, ordinal)) {
            Ok(text) => FrameBlock::from_text(&text),
            Err(e) => {
                tracing::debug!(ordinal, error = %e, "Using blank frame");
                FrameBlock::blank()
            }
        }
    }

    /// Frame at a 0-based index.
    ///
    /// The index must be below [`len`](Self::len); release builds clamp an
    /// out-of-range index to the last frame. `None` only when empty.
    pub fn frame(&self, index: usize) -> Option<&FrameBlock> {
        if self.frames.is_empty() {
            return None;
        }
        debug_assert!(
            index < self.frames.len(),
            "frame index {index} out of range ({} frames)",
            self.frames.len()
        );
        self.frames.get(index.min(self.frames.len() - 1))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Re-probe the same directory
    pub fn reload(&mut self) {
        *self = Self::load(self.dir.clone(), self.max_frames);
    }
}
