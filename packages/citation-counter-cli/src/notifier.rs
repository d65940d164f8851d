use colored::Colorize;

use citation_counter::{Notifier, Severity};

/// Prints notices to the terminal: successes to stdout, errors to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    fn line(severity: Severity, message: &str) -> String {
        match severity {
            Severity::Info => format!("{} {}", "✓".bright_green().bold(), message),
            Severity::Error => format!("{} {}", "✗".bright_red().bold(), message.bright_red()),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        let line = Self::line(severity, message);
        match severity {
            Severity::Info => println!("{}", line),
            Severity::Error => eprintln!("{}", line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_marks_by_severity_not_wording() {
        colored::control::set_override(false);

        assert_eq!(
            ConsoleNotifier::line(Severity::Info, "Error-free run"),
            "✓ Error-free run"
        );
        assert_eq!(
            ConsoleNotifier::line(Severity::Error, "Papers folder not found!"),
            "✗ Papers folder not found!"
        );
    }
}
