use std::io::{BufRead, Write};
use stockdesk_core::panel::{NoticeLevel, Prompter};

pub struct TerminalPrompter {
    assume_yes: bool,
}

impl TerminalPrompter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            tracing::debug!(message, "confirmation acknowledged by --yes");
            return true;
        }

        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "{message} [y/N] ");
        let _ = stderr.flush();

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read confirmation; treating as no");
                false
            }
        }
    }

    fn notify(&self, message: &str, level: NoticeLevel) {
        match level {
            NoticeLevel::Success => println!("{message}"),
            NoticeLevel::Error => eprintln!("error: {message}"),
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn assume_yes_skips_the_terminal() {
        assert!(TerminalPrompter::new(true).confirm("Remove?"));
    }
}
