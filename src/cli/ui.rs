//! Terminal banners and layout for the generate command
//!
//! Status output goes to stderr so stdout carries only the prompt.

/// ANSI color codes for terminal styling
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const GREEN: &str = "\x1b[32m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
    pub const BRIGHT_RED: &str = "\x1b[91m";
}

/// Check if colors should be enabled
pub fn colors_enabled(configured: bool) -> bool {
    if !configured {
        return false;
    }
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

/// Get terminal width, defaulting to 80
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Width of the divider printed between the prompt and the downloads.
pub fn divider_width(term_width: usize) -> usize {
    term_width.clamp(20, 100)
}

/// Banner printer in cargo's `    Keyword message` style
pub struct StatusPrinter {
    use_colors: bool,
}

impl StatusPrinter {
    pub fn new(color: bool) -> Self {
        Self {
            use_colors: colors_enabled(color),
        }
    }

    fn styled(&self, color: &str, bold: bool, text: &str) -> String {
        if self.use_colors {
            let bold_code = if bold { colors::BOLD } else { "" };
            format!("{}{}{}{}", bold_code, color, text, colors::RESET)
        } else {
            text.to_string()
        }
    }

    /// Print an info line: `        Info  some information`
    pub fn info(&self, keyword: &str, message: &str) {
        let keyword_styled = self.styled(colors::BRIGHT_CYAN, true, &format!("{:>12}", keyword));
        eprintln!("{} {}", keyword_styled, message);
    }

    /// Print an error banner
    pub fn error(&self, keyword: &str, message: &str) {
        let keyword_styled = self.styled(colors::BRIGHT_RED, true, &format!("{:>12}", keyword));
        eprintln!("{} {}", keyword_styled, message);
    }

    /// Print a success banner
    pub fn success(&self, keyword: &str, message: &str) {
        let keyword_styled = self.styled(colors::GREEN, true, &format!("{:>12}", keyword));
        eprintln!("{} {}", keyword_styled, message);
    }

    pub fn divider(&self) {
        let width = divider_width(terminal_width());
        if self.use_colors {
            eprintln!("{}{}{}", colors::DIM, "─".repeat(width), colors::RESET);
        } else {
            eprintln!("{}", "-".repeat(width));
        }
    }
}

impl Default for StatusPrinter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_disabled_by_config() {
        assert!(!colors_enabled(false));
    }

    #[test]
    fn test_divider_width_bounds() {
        assert_eq!(divider_width(5), 20);
        assert_eq!(divider_width(80), 80);
        assert_eq!(divider_width(300), 100);
    }

    #[test]
    fn test_plain_styling_without_colors() {
        let printer = StatusPrinter { use_colors: false };
        assert_eq!(printer.styled(colors::GREEN, true, "완료"), "완료");
    }
}
