// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Collects the names that are considered for the package matrix.

use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{MatrixError, MatrixResult};

/// Names of filesystem entries, relative to the directory they are probed in.
///
/// Order and duplicates are kept exactly as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    names: Vec<PathBuf>,
}

impl Candidates {
    /// Use an explicitly supplied list of names.
    #[must_use]
    pub fn explicit(names: Vec<PathBuf>) -> Self {
        Self { names }
    }

    /// List the immediate entries of a directory.
    ///
    /// Files, directories, symlinks and hidden entries are all returned. Only the entry names
    /// are kept, not the directory prefix.
    ///
    /// # Errors
    /// Returns an error if the directory or one of its entries cannot be read.
    pub fn list_dir(dir: &Path) -> MatrixResult<Self> {
        let names = entry_names(dir)?;
        debug!(
            "Listed candidates: dir={}, candidates={}",
            dir.display(),
            names.len()
        );
        Ok(Self { names })
    }

    /// List the immediate entries of the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be read.
    pub fn current_dir() -> MatrixResult<Self> {
        Self::list_dir(Path::new("."))
    }

    /// Get the candidate names.
    #[must_use]
    pub fn names(&self) -> &[PathBuf] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<PathBuf> for Candidates {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self::explicit(iter.into_iter().collect())
    }
}

/// Non-recursive listing of `dir`, returning bare entry names.
///
/// A symlinked `dir` is followed; entries below it are not.
pub(crate) fn entry_names(dir: &Path) -> MatrixResult<Vec<PathBuf>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .map(|entry| {
            entry
                .map(|entry| PathBuf::from(entry.file_name()))
                .map_err(|e| MatrixError::ListDir {
                    path: dir.to_path_buf(),
                    source: e.into(),
                })
        })
        .collect()
}
