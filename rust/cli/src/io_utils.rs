//! Terminal input helpers for the interactive commands.
//!
//! Input is always taken as `&mut dyn BufRead` so that commands can be
//! driven from a locked stdin in production and from a `Cursor` in tests.

use std::io::{self, BufRead, Write};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// This function is used for interactive commands that need user input.
/// It trims whitespace from the input.
///
/// # Arguments
///
/// * `stdin` - Buffered reader to read from (typically stdin)
///
/// # Returns
///
/// * `Ok(Some(String))` - Trimmed input line (may be empty after trimming)
/// * `Ok(Some(""))` - The line was not valid UTF-8; its bytes are consumed
/// * `Ok(None)` - EOF
/// * `Err(_)` - Any other read error
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use battler_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Ok(Some(line)) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => Ok(None), // EOF
        Ok(_) => Ok(Some(line.trim().to_string())),
        // read_line has already consumed the bad line; callers re-prompt
        Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(Some(String::new())),
        Err(e) => Err(e),
    }
}

/// Writes `prompt` without a trailing newline, flushes, and reads the answer.
///
/// Returns `Ok(None)` on EOF.
pub fn prompt_line(
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    read_stdin_line(stdin)
}
