//! Read-eval-print loop over any line source

use dimcalc_engine::{Outcome, Session};
use std::io::{BufRead, Write};

const PROMPT: &str = ">>> ";

/// Drive `session` with lines from `input` until EOF or `:exit`.
///
/// Values go to `out`, errors to `err`. A failing line is reported and the
/// loop continues. Returns the number of lines that failed.
pub fn run<R, W, E>(
    session: &mut Session,
    input: R,
    out: &mut W,
    err: &mut E,
    interactive: bool,
) -> anyhow::Result<usize>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut failures = 0;
    let mut lines = input.lines();

    loop {
        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match session.run_line(trimmed) {
            Ok(Outcome::Value(quantity)) => writeln!(out, "{quantity}")?,
            Ok(Outcome::Exit) => break,
            Ok(Outcome::Render(path)) => {
                if interactive {
                    writeln!(out, "wrote {}", path.display())?;
                }
            }
            Ok(Outcome::Nothing) => {}
            Err(e) => {
                failures += 1;
                tracing::debug!(line = trimmed, error = %e, "line failed");
                writeln!(err, "Error: {e}")?;
            }
        }
    }

    Ok(failures)
}
