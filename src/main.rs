// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
mod args;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

use args::Args;
use pkgbuild_matrix::{logging, Candidates, FsProbe, Matrix};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let candidates = collect_candidates(args.elements)?;
    let matrix = Matrix::build(&candidates, &FsProbe::default())?;
    info!("Found packages: packages={}", matrix.len());
    let json = matrix.to_json().context("Failed to write package matrix")?;
    println!("{json}");
    Ok(())
}

/// Get the candidates from the command line, or from the current directory if none were given.
///
/// # Errors
/// Returns an error if the current directory cannot be listed.
fn collect_candidates(elements: Option<Vec<PathBuf>>) -> Result<Candidates> {
    if let Some(elements) = elements {
        info!("Using explicit candidates: candidates={}", elements.len());
        return Ok(Candidates::explicit(elements));
    }
    let candidates = Candidates::current_dir().context("Failed to list the current directory")?;
    info!("Using current directory: candidates={}", candidates.len());
    Ok(candidates)
}
