//! Artifact cache for puzzle inputs and accepted answers
//!
//! Directory structure: `{root}/{year}/{day}/input{part}.txt` and
//! `{root}/{year}/{day}/answer{part}.txt`. A file's existence is the only state: an
//! input on disk is never fetched again and an answer on disk is never re-checked.

use crate::error::CacheError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// One puzzle (or puzzle part when `part` is set)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleKey {
    pub year: u16,
    pub day: u8,
    pub part: Option<u8>,
}

impl PuzzleKey {
    pub fn new(year: u16, day: u8, part: Option<u8>) -> Self {
        Self { year, day, part }
    }
}

impl fmt::Display for PuzzleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {}", self.year, self.day)?;
        if let Some(part) = self.part {
            write!(f, " / part {}", part)?;
        }
        Ok(())
    }
}

/// What a cached file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Input,
    Answer,
}

impl ArtifactKind {
    fn file_stem(self) -> &'static str {
        match self {
            ArtifactKind::Input => "input",
            ArtifactKind::Answer => "answer",
        }
    }
}

/// Stars earned on one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStars {
    /// Directory name of the day
    pub day: String,
    pub part1: bool,
    pub part2: bool,
}

impl DayStars {
    pub fn stars(&self) -> usize {
        usize::from(self.part1) + usize::from(self.part2)
    }
}

/// Stars earned in one year, day by day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearStars {
    /// Directory name of the year
    pub year: String,
    pub days: Vec<DayStars>,
}

impl YearStars {
    pub fn stars(&self) -> usize {
        self.days.iter().map(DayStars::stars).sum()
    }
}

/// File-based cache rooted at the configured artifacts directory
pub struct ArtifactCache {
    root: PathBuf,
}

impl ArtifactCache {
    /// Create a cache over an artifacts root directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Directory holding one day's artifacts
    fn day_dir(&self, year: u16, day: u8) -> PathBuf {
        self.root.join(year.to_string()).join(day.to_string())
    }

    /// Get the cache path for an artifact
    pub fn path(&self, key: PuzzleKey, kind: ArtifactKind) -> PathBuf {
        let part = key.part.map(|p| p.to_string()).unwrap_or_default();
        self.day_dir(key.year, key.day)
            .join(format!("{}{}.txt", kind.file_stem(), part))
    }

    /// Check if an artifact is cached
    pub fn contains(&self, key: PuzzleKey, kind: ArtifactKind) -> bool {
        self.path(key, kind).exists()
    }

    /// Get cached content as text, or None if not cached
    pub fn get(&self, key: PuzzleKey, kind: ArtifactKind) -> Result<Option<String>, CacheError> {
        let path = self.path(key, kind);
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(Some(content))
        } else {
            Ok(None)
        }
    }

    /// Get cached content exactly as stored, or None if not cached
    pub fn get_bytes(
        &self,
        key: PuzzleKey,
        kind: ArtifactKind,
    ) -> Result<Option<Vec<u8>>, CacheError> {
        let path = self.path(key, kind);
        if path.exists() {
            Ok(Some(fs::read(&path)?))
        } else {
            Ok(None)
        }
    }

    /// Store an artifact, replacing any previous content
    pub fn put(
        &self,
        key: PuzzleKey,
        kind: ArtifactKind,
        content: impl AsRef<[u8]>,
    ) -> Result<(), CacheError> {
        let dir = self.day_dir(key.year, key.day);
        fs::create_dir_all(&dir).map_err(|e| {
            CacheError::DirCreation(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let path = self.path(key, kind);
        fs::write(&path, content)?;
        tracing::debug!(path = %path.display(), "stored artifact");
        Ok(())
    }

    /// Count the stored answers of one year
    ///
    /// Fails when nothing was ever stored for that year.
    pub fn year_stars(&self, year: u16) -> Result<YearStars, CacheError> {
        let dir = self.root.join(year.to_string());
        if !dir.is_dir() {
            return Err(CacheError::MissingYear { year, dir });
        }
        tally_year(&dir, year.to_string())
    }

    /// Count the stored answers of every year under the root
    pub fn all_stars(&self) -> Result<Vec<YearStars>, CacheError> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }
        sorted_subdirs(&self.root)?
            .into_iter()
            .map(|(name, dir)| tally_year(&dir, name))
            .collect()
    }
}

fn tally_year(dir: &Path, year: String) -> Result<YearStars, CacheError> {
    let days = sorted_subdirs(dir)?
        .into_iter()
        .map(|(day, day_dir)| DayStars {
            day,
            part1: day_dir.join("answer1.txt").exists(),
            part2: day_dir.join("answer2.txt").exists(),
        })
        .collect();
    Ok(YearStars { year, days })
}

/// Subdirectories of `dir`, numeric names first in numeric order, then the rest by name
fn sorted_subdirs(dir: &Path) -> Result<Vec<(String, PathBuf)>, CacheError> {
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            subdirs.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
        }
    }
    subdirs.sort_by_key(|(name, _)| (name.parse::<u64>().unwrap_or(u64::MAX), name.clone()));
    Ok(subdirs)
}
