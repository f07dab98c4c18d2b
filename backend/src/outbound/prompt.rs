//! Terminal-backed delete confirmation.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::domain::ports::DeletePrompt;

/// Prompt that asks on stderr and reads the answer from stdin.
///
/// Anything other than `y`/`yes` (case-insensitive) declines, as does an
/// unreadable stdin: a destructive action must never proceed by accident.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompt;

impl DeletePrompt for ConsolePrompt {
    fn confirm(&self, message: &str) -> bool {
        let mut stderr = std::io::stderr().lock();
        if let Err(error) = write!(stderr, "{message} [y/N] ").and_then(|()| stderr.flush()) {
            warn!(%error, "confirmation prompt unwritable; declining");
            return false;
        }

        let mut answer = String::new();
        if let Err(error) = std::io::stdin().lock().read_line(&mut answer) {
            warn!(%error, "confirmation answer unreadable; declining");
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
