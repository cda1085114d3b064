//! Visual theme and styling.

use console::Style;

/// Report colours.
#[derive(Debug, Clone)]
pub struct ApprovalTheme {
    /// Style for passing glyphs (green).
    pub success: Style,
    /// Style for failing glyphs (red).
    pub error: Style,
    /// Style for optional glyphs and notices (yellow).
    pub optional: Style,
    /// Style for section banners (cyan).
    pub banner: Style,
    /// Style for the run title (cyan).
    pub title: Style,
    /// Style for header key/value lines (blue).
    pub key: Style,
    /// Style for dim/secondary text such as lint details.
    pub dim: Style,
}

impl Default for ApprovalTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ApprovalTheme {
    /// Create the coloured theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red(),
            optional: Style::new().yellow(),
            banner: Style::new().cyan(),
            title: Style::new().cyan(),
            key: Style::new().blue(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            optional: Style::new(),
            banner: Style::new(),
            title: Style::new(),
            key: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the coloured or plain theme.
    pub fn for_color(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a section banner.
    pub fn format_banner(&self, title: &str) -> String {
        self.banner.apply_to(format!("===={title}")).to_string()
    }

    /// Format a context notice.
    pub fn format_notice(&self, msg: &str) -> String {
        self.optional.apply_to(msg).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
