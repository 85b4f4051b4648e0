//! Terminal rendering of markdown output via termimad, with a plain-text
//! fallback for `--no-color`.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        // Pending-delete notes
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Prints markdown, styled line by line when rich output is on.
    ///
    /// Heading lines keep their `#` markers so step numbers stay aligned.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        if !self.rich_enabled {
            out.write_all(markdown.as_bytes())?;
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "\x1b[34m{line}\x1b[0m")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
