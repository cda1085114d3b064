//! Status glyphs.
//!
//! One glyph per [`Status`], used for every report line.

use super::theme::ApprovalTheme;
use crate::checklist::Status;

/// Marker placed before sub-check labels.
pub const SUB_CHECK_MARKER: &str = "⌙";

impl Status {
    /// Unicode glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✔",
            Self::Fail => "✘",
            Self::Optional => "⁕",
        }
    }

    /// Styled glyph using the given theme.
    pub fn styled(self, theme: &ApprovalTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Pass => theme.success.apply_to(icon).to_string(),
            Self::Fail => theme.error.apply_to(icon).to_string(),
            Self::Optional => theme.optional.apply_to(icon).to_string(),
        }
    }

    /// Format a report line: message + styled glyph.
    pub fn format(self, theme: &ApprovalTheme, msg: &str) -> String {
        format!("{} {}", msg, self.styled(theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(Status::Pass.icon(), "✔");
        assert_eq!(Status::Fail.icon(), "✘");
        assert_eq!(Status::Optional.icon(), "⁕");
    }

    #[test]
    fn icons_are_distinct() {
        assert_ne!(Status::Pass.icon(), Status::Fail.icon());
        assert_ne!(Status::Fail.icon(), Status::Optional.icon());
        assert_ne!(Status::Pass.icon(), Status::Optional.icon());
    }

    #[test]
    fn styled_returns_string_with_icon() {
        let theme = ApprovalTheme::new();
        for status in [Status::Pass, Status::Fail, Status::Optional] {
            let styled = status.styled(&theme);
            assert!(
                styled.contains(status.icon()),
                "styled({:?}) missing icon",
                status
            );
        }
    }

    #[test]
    fn format_puts_glyph_after_message() {
        let theme = ApprovalTheme::plain();
        assert_eq!(Status::Pass.format(&theme, "README exists?"), "README exists? ✔");
    }
}
