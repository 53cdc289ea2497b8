// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Matrix struct holding the package directories that need building.

use log::debug;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::candidates::Candidates;
use crate::error::{MatrixError, MatrixResult};
use crate::probe::Probe;

/// Sorted, duplicate-free set of package directory names.
///
/// Serializes as a plain JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Matrix {
    // BTreeSet gives byte-wise ascending order, matching code point order for UTF-8.
    names: BTreeSet<String>,
}

impl Matrix {
    /// Build the matrix from the candidates that the probe accepts.
    ///
    /// # Errors
    /// Returns [`MatrixError::EmptyResult`] if no candidate is a package, or the probe's error
    /// if a candidate cannot be inspected.
    pub fn build<P: Probe + ?Sized>(candidates: &Candidates, probe: &P) -> MatrixResult<Self> {
        let mut names = BTreeSet::new();
        for candidate in candidates.names() {
            if !probe.is_package(candidate)? {
                continue;
            }
            let name = candidate
                .to_str()
                .ok_or_else(|| MatrixError::NonUtf8Name {
                    name: candidate.as_os_str().to_os_string(),
                })?;
            if !names.insert(name.to_string()) {
                debug!("Dropping duplicate candidate: candidate={name}");
            }
        }
        debug!(
            "Built matrix: candidates={}, packages={}",
            candidates.len(),
            names.len()
        );
        if names.is_empty() {
            return Err(MatrixError::EmptyResult);
        }
        Ok(Self { names })
    }

    /// Serialize the matrix as a compact JSON array.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> MatrixResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Iterate over the package names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
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
