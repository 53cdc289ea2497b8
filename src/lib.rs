// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! A tool for listing the package directories of a source tree as a build matrix.
//!
//! This crate provides functionality to:
//! - Collect candidate names from an explicit list or a directory listing
//! - Detect package directories, i.e. directories directly containing a `PKGBUILD`
//! - Produce the sorted list of packages as a JSON array

pub mod candidates;
pub mod error;
pub mod logging;
pub mod matrix;
pub mod probe;

// Re-export key types for convenience
pub use candidates::Candidates;
pub use error::{MatrixError, MatrixResult};
pub use matrix::Matrix;
pub use probe::{FsProbe, Probe, PKGBUILD};
