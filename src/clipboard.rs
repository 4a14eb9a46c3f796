use std::io::Write;

use termwiz::escape::osc::{OperatingSystemCommand, Selection};

/// Best-effort clipboard write via the OSC 52 escape sequence.
///
/// Works in most modern terminals, including over SSH; terminals without
/// OSC 52 support silently drop the sequence, which is acceptable here
/// since clipboard failures are not surfaced.
pub fn copy(text: &str) {
    let osc = OperatingSystemCommand::SetSelection(Selection::CLIPBOARD, text.to_string());
    let mut stdout = std::io::stdout();
    let _ = write!(stdout, "{osc}");
    let _ = stdout.flush();
}
