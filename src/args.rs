// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pkgbuild_matrix")]
#[command(version)]
#[command(about = "Prints the directories containing a PKGBUILD as a JSON array")]
pub(crate) struct Args {
    /// Generate the list from the specified elements instead of the current directory.
    #[arg(short, long, num_args = 0..)]
    pub elements: Option<Vec<PathBuf>>,
}
