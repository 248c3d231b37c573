//! Pattern files on disk.
//!
//! File naming and I/O live here; the text format itself is
//! [`crate::domain::codec`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};

use super::Simulation;
use crate::domain::{DecodedPattern, decode, encode_to_string};

/// Directory holding saved pattern files.
#[derive(Clone, Debug)]
pub struct PatternStore {
    dir: PathBuf,
}

impl PatternStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name describing the board it was saved from
    pub fn default_file_name(sim: &Simulation) -> String {
        format!("gen_{}_cells_{}.txt", sim.generation(), sim.live_count())
    }

    /// Write the live cells of `sim` to `<dir>/<file_name>`, replacing any
    /// existing file. The first line is a `# Pattern:` comment.
    pub fn save(&self, sim: &Simulation, file_name: &str) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create pattern directory {}", self.dir.display()))?;

        let path = self.dir.join(file_name);
        let contents = format!("# Pattern: {file_name}\n{}", encode_to_string(sim.grid()));
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write pattern file {}", path.display()))?;

        info!(path = %path.display(), live = sim.live_count(), "pattern saved");
        Ok(path)
    }

    /// Save under [`Self::default_file_name`]
    pub fn save_snapshot(&self, sim: &Simulation) -> anyhow::Result<PathBuf> {
        self.save(sim, &Self::default_file_name(sim))
    }

    /// Read `path`, decode it against the current board size and replace
    /// the board with it. Skipped lines are reported, not fatal.
    pub fn load(&self, path: &Path, sim: &mut Simulation) -> anyhow::Result<DecodedPattern> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pattern file {}", path.display()))?;

        let (width, height) = sim.dimensions();
        let decoded = decode(&text, width, height);
        if decoded.skipped() > 0 {
            warn!(
                path = %path.display(),
                malformed = decoded.malformed,
                out_of_range = decoded.out_of_range,
                "skipped pattern lines"
            );
        }

        sim.apply_pattern(&decoded)
            .with_context(|| format!("Failed to apply pattern {}", path.display()))?;
        info!(path = %path.display(), live = decoded.len(), "pattern loaded");
        Ok(decoded)
    }
}
