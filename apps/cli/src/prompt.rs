//! Interactive request input, decoupled from the console.
//!
//! The prompt loop reads from any `BufRead` and writes to any `Write`, so the
//! interactive flow is driven by plain strings in tests instead of a real
//! terminal session.

use std::io::{BufRead, Write};

use clipmark_shared::ClipRequest;

/// Read one clip request: target directory, URL, and tags.
///
/// Empty directory names and URLs without an `http://`/`https://` scheme are
/// rejected with a message and re-prompted. Returns `Ok(None)` on EOF.
pub(crate) fn read_request(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<Option<ClipRequest>> {
    let subdir = loop {
        let Some(line) = prompt_line(input, output, "\nEnter directory to save clips (relative to base): ")? else {
            return Ok(None);
        };
        if line.is_empty() {
            writeln!(output, "Directory name cannot be empty.")?;
            continue;
        }
        break line;
    };

    let url = loop {
        let Some(line) = prompt_line(input, output, "Enter URL to clip from: ")? else {
            return Ok(None);
        };
        if !is_valid_url(&line) {
            writeln!(output, "Invalid URL format. Please include http:// or https://")?;
            continue;
        }
        break line;
    };

    let Some(tags) = prompt_line(input, output, "Enter comma-separated tags: ")? else {
        return Ok(None);
    };

    Ok(Some(ClipRequest::new(url, &tags, subdir)))
}

/// Ask a y/n question. Anything other than `y` (or EOF) is no.
pub(crate) fn read_yes_no(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
) -> std::io::Result<bool> {
    match prompt_line(input, output, question)? {
        Some(answer) => Ok(answer.eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}

/// URLs must carry an explicit scheme; everything else is re-prompted.
pub(crate) fn is_valid_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Print a prompt and read one trimmed line. `None` on EOF.
fn prompt_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
