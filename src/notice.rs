// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::fmt::{Display, Formatter, Result};

/// The first line of the notice.
pub const HEADLINE: &str = "This file contains information about LMMS (Linux MultiMedia Studio)";

/// The second line of the notice, pointing the reader at the crate docs.
pub const POINTER: &str =
    "Please read the docstring at the top of the file for detailed information.";

/// Every line of the notice, in output order.
pub const LINES: [&str; 2] = [HEADLINE, POINTER];

/// The two line notice printed by `lmms-info`.
///
/// Each line is terminated by `\n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Notice;

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for line in LINES {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
