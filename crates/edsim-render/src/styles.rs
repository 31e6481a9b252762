use edsim_core::Accent;
use edsim_metrics::Tone;
use serde::{Deserialize, Serialize};

/// Terminal styling for rendered screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderStyle {
    /// Width of gauge and bar strips, in character cells.
    pub bar_cells: usize,

    /// Emit ANSI color sequences.
    pub color: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            bar_cells: 30,
            color: true,
        }
    }
}

const RESET: &str = "\x1b[0m";

impl RenderStyle {
    pub fn tone(&self, text: &str, tone: Tone) -> String {
        let code = match tone {
            Tone::Primary => "36",
            Tone::Accent => "35",
            Tone::Success => "32",
            Tone::Warning => "33",
            Tone::Destructive => "31",
        };
        self.paint(text, code)
    }

    /// Color by the first stop of a hospital's accent gradient.
    pub fn accent(&self, text: &str, accent: &Accent) -> String {
        let code = match accent.from {
            "red" => "31",
            "emerald" => "32",
            "amber" => "33",
            "blue" => "34",
            "purple" => "35",
            _ => "36",
        };
        self.paint(text, code)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, "2")
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, "1")
    }

    /// `width` percent of `bar_cells` filled, linearly scaled.
    pub fn strip(&self, width: f64, tone: Tone) -> String {
        let cells = self.bar_cells;
        let filled = ((width.clamp(0.0, 100.0) / 100.0) * cells as f64).round() as usize;
        let filled = filled.min(cells);
        format!(
            "{}{}",
            self.tone(&"█".repeat(filled), tone),
            "░".repeat(cells - filled)
        )
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color && !text.is_empty() {
            format!("\x1b[{code}m{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}
