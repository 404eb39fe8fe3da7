use std::io::{self, BufRead, Write};

use crate::spellcheck::SpellCorrector;

pub const PROMPT: &str = " > ";

/// Prompts for a word, prints its correction, and repeats until `input` is
/// exhausted.
pub fn run<R, W>(corrector: &SpellCorrector, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }
        writeln!(output, "{}", corrector.correct(line.trim()))?;
    }
    Ok(())
}
