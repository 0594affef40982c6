//! Delivery formatting and writing for rendered text.

use std::io::{self, Write};
use std::path::Path;

/// Wrap rendered art for delivery.
///
/// By default the art goes inside a fenced code block, the form a chat
/// client needs to keep the glyph grid monospace. `code_block = false`
/// returns the art untouched for piping into other tools.
pub fn format_message(text: &str, code_block: bool) -> String {
    if code_block {
        format!("```\n{}\n```", text)
    } else {
        text.to_string()
    }
}

/// Write the final message to a file, or stdout when no path is given.
pub fn deliver(message: &str, dest: Option<&Path>) -> io::Result<()> {
    match dest {
        Some(path) => std::fs::write(path, format!("{}\n", message)),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", message)
        }
    }
}
