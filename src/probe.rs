// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Decides whether a candidate is a package directory.

use log::trace;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::candidates::entry_names;
use crate::error::{MatrixError, MatrixResult};

/// Name of the build recipe that marks a directory as a package.
pub const PKGBUILD: &str = "PKGBUILD";

/// Tests candidates for package membership.
pub trait Probe {
    /// Check whether `name` is a directory that directly contains a `PKGBUILD` entry.
    ///
    /// # Errors
    /// Returns an error if the candidate exists but cannot be inspected.
    fn is_package(&self, name: &Path) -> MatrixResult<bool>;
}

/// Probes the real filesystem, resolving candidate names against a root directory.
#[derive(Debug, Clone)]
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for FsProbe {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Probe for FsProbe {
    fn is_package(&self, name: &Path) -> MatrixResult<bool> {
        let path = self.root.join(name);
        // Follows symlinks, a link to a package directory is a package.
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                trace!("Skipping missing candidate: candidate={}", name.display());
                return Ok(false);
            }
            Err(e) => return Err(MatrixError::Inspect { path, source: e }),
        };
        if !metadata.is_dir() {
            trace!("Skipping non-directory: candidate={}", name.display());
            return Ok(false);
        }
        let found = entry_names(&path)?
            .iter()
            .any(|entry| entry.as_os_str() == PKGBUILD);
        trace!(
            "Probed candidate: candidate={}, package={found}",
            name.display()
        );
        Ok(found)
    }
}
