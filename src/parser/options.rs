//! Classification options and thresholds.

/// Options for classifying generated content.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Lines at or above this many characters are never bold labels
    pub bold_label_max_chars: usize,

    /// Lines at or above this many characters are never prayer lines
    pub prayer_max_chars: usize,

    /// Require scripture-at-start lines to name a known book
    pub validate_books: bool,

    /// Run the standard cleanup pipeline before classifying
    pub cleanup: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bold label length bound.
    pub fn with_bold_label_max(mut self, chars: usize) -> Self {
        self.bold_label_max_chars = chars;
        self
    }

    /// Set the prayer line length bound.
    pub fn with_prayer_max(mut self, chars: usize) -> Self {
        self.prayer_max_chars = chars;
        self
    }

    /// Enable or disable book validation for scripture lines.
    pub fn with_book_validation(mut self, validate: bool) -> Self {
        self.validate_books = validate;
        self
    }

    /// Accept any capitalized word as a book name.
    pub fn lenient_books(mut self) -> Self {
        self.validate_books = false;
        self
    }

    /// Enable or disable cleanup before classification.
    pub fn with_cleanup(mut self, cleanup: bool) -> Self {
        self.cleanup = cleanup;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            bold_label_max_chars: 40,
            prayer_max_chars: 80,
            validate_books: true,
            cleanup: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_bold_label_max(60)
            .with_prayer_max(50)
            .lenient_books()
            .with_cleanup(true);

        assert_eq!(options.bold_label_max_chars, 60);
        assert_eq!(options.prayer_max_chars, 50);
        assert!(!options.validate_books);
        assert!(options.cleanup);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.bold_label_max_chars, 40);
        assert_eq!(options.prayer_max_chars, 80);
        assert!(options.validate_books);
        assert!(!options.cleanup);
    }
}
