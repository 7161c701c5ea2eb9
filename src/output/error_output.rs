//! Unified error and warning output formatting with color support.
//!
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;
use crate::error::SitemapError;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a new error output formatter with the specified color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            use_colors: Self::stderr_supports_color(),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        }
    }

    fn stderr_supports_color() -> bool {
        // https://no-color.org/
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Prints a [`SitemapError`] with its cause and suggestion, if any.
    pub fn report(&self, err: &SitemapError) {
        let detail = err.detail();
        self.print_error_with_detail(
            err.error_type(),
            &err.message(),
            detail.as_deref(),
            err.suggestion(),
        );
    }

    pub fn print_error_with_detail(
        &self,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, detail, suggestion);
    }

    pub fn print_warning(&self, message: &str, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, suggestion);
    }

    /// Writes error to a writer (for testing).
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Nothing sensible can be done if stderr itself is gone.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        self.write_suggestion(w, suggestion);
    }

    /// Writes warning to a writer (for testing).
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, suggestion: Option<&str>) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }

        self.write_suggestion(w, suggestion);
    }

    fn write_suggestion<W: Write>(&self, w: &mut W, suggestion: Option<&str>) {
        let Some(s) = suggestion else {
            return;
        };
        if self.use_colors {
            let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
        } else {
            let _ = writeln!(w, "  help: {s}");
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Convenience function: prints an error with detail and suggestion.
pub fn print_error_full(
    error_type: &str,
    message: &str,
    detail: Option<&str>,
    suggestion: Option<&str>,
) {
    ErrorOutput::stderr().print_error_with_detail(error_type, message, detail, suggestion);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
