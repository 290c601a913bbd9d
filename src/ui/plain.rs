use std::io::{self, BufRead, Write};

use super::{PickError, Picker};

/// Numbered-list prompt for plain stdio: prints the options 1-based, asks
/// once, and reads a single line back.
pub struct PlainPicker;

impl Picker for PlainPicker {
    fn pick(&self, label: &str, options: &[String]) -> Result<usize, PickError> {
        let stdout = io::stdout();
        let stdin = io::stdin();
        prompt(&mut stdout.lock(), &mut stdin.lock(), label, options)
    }
}

fn prompt<W, R>(
    out: &mut W,
    input: &mut R,
    label: &str,
    options: &[String],
) -> Result<usize, PickError>
where
    W: Write,
    R: BufRead,
{
    for (i, option) in options.iter().enumerate() {
        writeln!(out, "  {}: {}", i + 1, option)?;
    }
    write!(out, "{}: ", label)?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    writeln!(out)?;
    if read == 0 {
        return Err(PickError::InvalidSelection);
    }

    let answer: usize = line
        .trim()
        .parse()
        .map_err(|_| PickError::InvalidSelection)?;
    if answer < 1 || answer > options.len() {
        return Err(PickError::InvalidSelection);
    }
    Ok(answer - 1)
}
