use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Warning,
    Arrow,
    Skipped,
    Folder,
    Promote,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Skipped) => theme::icons::SKIPPED,
            (true, Icon::Folder) => theme::icons::FOLDER,
            (true, Icon::Promote) => theme::icons::PROMOTE,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Skipped) => theme::icons_ascii::SKIPPED,
            (false, Icon::Folder) => theme::icons_ascii::FOLDER,
            (false, Icon::Promote) => theme::icons_ascii::PROMOTE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow | Icon::Skipped | Icon::Folder => theme::colors::DIM,
            Icon::Promote => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), theme::icons_ascii::SUCCESS);
        assert_eq!(Icon::Skipped.render(false), "[--]");
    }

    #[test]
    fn icon_renders_unicode_when_supported() {
        assert_eq!(Icon::Warning.render(true), theme::icons::WARNING);
    }

    #[test]
    fn colored_icon_is_plain_without_color() {
        assert_eq!(Icon::Promote.colored(false, false), "[PROMOTE]");
        assert!(Icon::Warning.colored(true, true).contains("\u{1b}["));
    }
}
