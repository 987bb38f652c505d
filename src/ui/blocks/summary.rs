use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// End-of-run summary: a title, counters, and optional warnings.
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self::with_status(title, true)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::with_status(title, false)
    }

    fn with_status(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            stats: Vec::new(),
            warnings: Vec::new(),
            next_step: None,
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (icon, title) = if self.success {
            (
                Icon::Success,
                ColoredText::success(self.title.as_str()).bold(),
            )
        } else {
            (
                Icon::Warning,
                ColoredText::warning(self.title.as_str()).bold(),
            )
        };

        let mut out = format!(
            "\n{} {}\n",
            icon.colored(supports_color, supports_unicode),
            title.render(supports_color)
        );

        for (label, count) in &self.stats {
            out.push_str(&format!("  {} {}\n", count, label));
        }

        for warning in &self.warnings {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                warning
            ));
        }

        if let Some(next_step) = &self.next_step {
            out.push_str(&format!(
                "  {} {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        out
    }
}
