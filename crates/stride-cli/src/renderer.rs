//! Terminal output for markdown produced by `stride-core`.
//!
//! Rich mode styles headers and inline markup with termimad. Plain mode
//! prints the markdown unchanged so it can be piped or diffed.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Writes markdown to stdout, styled or plain.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        // Segment roles such as _(warm-up)_
        skin.italic.set_fg(Color::DarkGrey);
        skin.quote_mark.set_fg(Color::Green);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{}", with_trailing_newline(markdown));
            return Ok(());
        }

        for line in markdown.lines() {
            if is_header(line) {
                // Keep the hashes visible so plan and report titles stand out.
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
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

fn is_header(line: &str) -> bool {
    line.trim_start_matches('#').starts_with(' ') && line.starts_with('#')
}

fn with_trailing_newline(markdown: &str) -> String {
    if markdown.ends_with('\n') {
        markdown.to_string()
    } else {
        format!("{markdown}\n")
    }
}
