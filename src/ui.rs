//! Messages for the user on standard error.
//!
//! Standard output is reserved for command output, so everything here goes
//! to standard error.

use console::style;

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold().for_stderr(), message);
}

/// Join an error and its causes into one line.
///
/// A cause whose text already appears in the message so far is skipped, since
/// most error variants embed their source in their own message.
pub fn error_chain_message(err: &anyhow::Error) -> String {
    let mut message = String::new();
    for cause in err.chain() {
        let text = cause.to_string();
        if message.contains(&text) {
            continue;
        }
        if !message.is_empty() {
            message.push_str(": ");
        }
        message.push_str(&text);
    }
    message
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning marker followed by the warning message.
///
/// # Arguments
/// * `warning` - The boundary warning to display
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("WARNING:").yellow().for_stderr(), warning);
}
