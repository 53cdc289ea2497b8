// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Defines the error type shared by candidate listing, probing and matrix building.

use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for matrix operations.
pub type MatrixResult<T> = std::result::Result<T, MatrixError>;

/// Errors that can occur while building the package matrix.
#[derive(Debug, Error)]
pub enum MatrixError {
    // No candidate qualified. Orchestration reads this as "nothing to build".
    #[error("Got empty list.")]
    EmptyResult,
    #[error("Failed to list directory: {path:?}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to inspect candidate: {path:?}")]
    Inspect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Package name is not valid UTF-8: {name:?}")]
    NonUtf8Name { name: OsString },
    #[error("Failed to serialize matrix: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_empty_result_message() {
        assert_eq!(MatrixError::EmptyResult.to_string(), "Got empty list.");
    }

    #[test]
    fn test_list_dir_keeps_source() {
        let error = MatrixError::ListDir {
            path: PathBuf::from("pkgA"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(error.to_string().contains("\"pkgA\""));
        let source = std::error::Error::source(&error).expect("Should carry the io error");
        assert!(source.to_string().to_lowercase().contains("permission"));
    }
}
