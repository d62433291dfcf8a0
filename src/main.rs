// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;

use lmms_info::io::print_notice;

/// Points the reader at the LMMS overview in the crate documentation.
#[derive(Debug, Parser)]
#[command(
    name = env!("CARGO_BIN_NAME"),
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct App {
    /// accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    ignored: Vec<OsString>,
}

fn main() -> Result<()> {
    let _args = App::parse();
    print_notice()
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_app_definition() {
        App::command().debug_assert();
    }

    #[test]
    fn test_flags_are_not_interpreted() {
        let app = App::try_parse_from(["lmms-info", "--help", "-V", "extra"]).expect("parse");
        assert_eq!(app.ignored.len(), 3);
    }

    #[test]
    fn test_no_arguments() {
        let app = App::try_parse_from(["lmms-info"]).expect("parse");
        assert!(app.ignored.is_empty());
    }
}
