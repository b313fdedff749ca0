//! Line-oriented prompting for the interactive commands

use std::io::{self, BufRead, Write};

/// Print `prompt` and read one trimmed line, `None` at end of input
pub(crate) fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
