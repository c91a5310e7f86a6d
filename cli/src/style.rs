/// ANSI styling for terminal output. Plain when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    /// Color only when not disabled and stdout is a terminal.
    pub fn detect(no_color: bool) -> Self {
        if !no_color && atty::is(atty::Stream::Stdout) {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    pub fn banner(&self, text: &str) -> String {
        self.paint("1;36", text)
    }

    pub fn score(&self, text: &str) -> String {
        self.paint("32", text)
    }

    pub fn answer(&self, text: &str) -> String {
        self.paint("1", text)
    }

    pub fn warn(&self, text: &str) -> String {
        self.paint("33", text)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint("31", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_leaves_text_alone() {
        assert_eq!(Style::plain().score("0.5000"), "0.5000");
    }

    #[test]
    fn colored_wraps_in_escape_codes() {
        assert_eq!(Style::colored().warn("none"), "\x1b[33mnone\x1b[0m");
    }
}
