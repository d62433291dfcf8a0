// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::{stdout, Write};

use anyhow::Result;

use crate::Notice;

/// Writes the [Notice] to `writer`. If the writer fails an error will be
/// returned.
pub fn write_notice<W: Write>(writer: &mut W) -> Result<()> {
    write!(writer, "{}", Notice)?;
    Ok(())
}

/// Writes the [Notice] to standard output and flushes it.
pub fn print_notice() -> Result<()> {
    let mut out = stdout().lock();
    write_notice(&mut out)?;
    out.flush()?;
    Ok(())
}
