use std::io::{BufRead, Write};

use crate::error::Result;
use crate::models::OptionList;

/// Warn that `value` is not in `list` and ask whether to use it anyway
///
/// Only "y" (any case) accepts; anything else, including end of input, declines.
pub fn confirm_unknown<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    list: &OptionList,
    value: &str,
) -> Result<bool> {
    writeln!(
        out,
        "Warning: '{}' is not in the default {} list.",
        value,
        list.kind()
    )?;
    writeln!(out, "Available {}:", list.kind().plural())?;
    for known in list.values() {
        writeln!(out, "  - {}", known)?;
    }
    write!(out, "\nDo you want to use '{}' anyway? (y/n): ", value)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
