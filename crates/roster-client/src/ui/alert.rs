//! Transient notice banner.

use owo_colors::OwoColorize;

use crate::notice::{Notice, NoticeKind};

/// Banner for the current notice.
pub struct MessageAlert;

impl MessageAlert {
    /// Render `notice`; empty when there is nothing to say.
    pub fn render(notice: Option<&Notice>) -> String {
        match notice {
            Some(n) if !n.text.is_empty() => match n.kind {
                NoticeKind::Success => format!("{} {}", "✓".green(), n.text.green()),
                NoticeKind::Error => format!("{} {}", "✗".red(), n.text.red()),
            },
            _ => String::new(),
        }
    }
}
