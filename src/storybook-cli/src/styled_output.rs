//! Styled status messages on stderr.
//!
//! Story JSON and share URLs go to stdout untouched so they can be piped;
//! everything meant for a human goes through these helpers. Colors are only
//! emitted on a terminal and are suppressed by `NO_COLOR`.

use std::io::IsTerminal;

const SUCCESS: &str = "\x1b[38;2;0;245;212m";
const ERROR: &str = "\x1b[38;2;255;107;107m";
const WARNING: &str = "\x1b[38;2;255;200;87m";
const INFO: &str = "\x1b[38;2;72;202;228m";
const RESET: &str = "\x1b[0m";

/// Message type for styled output.
#[derive(Debug, Clone, Copy)]
pub enum MessageType {
    Success,
    Error,
    Warning,
    Info,
}

impl MessageType {
    fn icon(&self) -> &'static str {
        match self {
            MessageType::Success => "[OK]",
            MessageType::Error => "[ERROR]",
            MessageType::Warning => "[WARN]",
            MessageType::Info => "[INFO]",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            MessageType::Success => SUCCESS,
            MessageType::Error => ERROR,
            MessageType::Warning => WARNING,
            MessageType::Info => INFO,
        }
    }
}

fn colors_disabled() -> bool {
    std::env::var("NO_COLOR")
        .map(|v| !v.is_empty() && v != "0" && v.to_lowercase() != "false")
        .unwrap_or(false)
}

/// Format a message with its icon, colored when `use_colors` is set.
pub fn format_message(msg_type: MessageType, message: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}{} {}{}", msg_type.color(), msg_type.icon(), message, RESET)
    } else {
        format!("{} {}", msg_type.icon(), message)
    }
}

fn print_styled(msg_type: MessageType, message: &str) {
    let use_colors = !colors_disabled() && std::io::stderr().is_terminal();
    eprintln!("{}", format_message(msg_type, message, use_colors));
}

pub fn print_success(message: &str) {
    print_styled(MessageType::Success, message);
}

pub fn print_error(message: &str) {
    print_styled(MessageType::Error, message);
}

pub fn print_warning(message: &str) {
    print_styled(MessageType::Warning, message);
}

pub fn print_info(message: &str) {
    print_styled(MessageType::Info, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain() {
        assert_eq!(
            format_message(MessageType::Success, "Saved", false),
            "[OK] Saved"
        );
        assert_eq!(
            format_message(MessageType::Warning, "Careful", false),
            "[WARN] Careful"
        );
    }

    #[test]
    fn test_format_colored() {
        let colored = format_message(MessageType::Error, "Broken", true);
        assert!(colored.starts_with(ERROR));
        assert!(colored.ends_with(RESET));
        assert!(colored.contains("[ERROR] Broken"));
    }
}
