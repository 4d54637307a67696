use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

const DEFAULT_WIDTH: usize = 80;
const MIN_WIDTH: usize = 40;
const MAX_WIDTH: usize = 100;

/// Output styling decided once per process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: bool,
    pub width: usize,
}

impl Theme {
    /// Color only on an interactive stdout with `NO_COLOR` unset.
    pub fn detect() -> Self {
        let stdout = std::io::stdout();
        let color = stdout.is_terminal() && std::env::var_os("NO_COLOR").is_none();
        let width = terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| usize::from(w))
            .unwrap_or(DEFAULT_WIDTH)
            .clamp(MIN_WIDTH, MAX_WIDTH);
        Self { color, width }
    }

    /// No color, default width. Used for pipes and snapshot tests.
    pub fn plain() -> Self {
        Self {
            color: false,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn title(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn employer(&self, text: &str) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn salary(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn tag(&self, text: &str) -> String {
        let chip = format!("[{}]", text);
        if self.color {
            chip.yellow().to_string()
        } else {
            chip
        }
    }

    pub fn muted(&self, text: &str) -> String {
        if self.color {
            text.bright_black().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().underline().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warning(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}
