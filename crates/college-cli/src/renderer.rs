//! Terminal rendering of the core's markdown output.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown with termimad, or prints it untouched when color is off.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    failure_skin: MadSkin,
}

impl TerminalRenderer {
    /// Creates a renderer. With `rich_enabled` false, markdown is printed as-is.
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        let mut failure_skin = skin.clone();
        failure_skin.paragraph.set_fg(Color::Red);

        Self {
            rich_enabled,
            skin,
            failure_skin,
        }
    }

    /// Failure lines (a ✗ marker or an `Error:` prefix) print in red.
    fn skin_for(&self, line: &str) -> &MadSkin {
        if line.contains('✗') || line.starts_with("Error:") {
            &self.failure_skin
        } else {
            &self.skin
        }
    }

    /// Prints `markdown` to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // keep the hashes visible so section levels stay readable
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                self.skin_for(line).print_inline(line);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Setup\n").is_ok());
    }

    #[test]
    fn test_failure_lines_use_failure_skin() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
        assert!(std::ptr::eq(
            renderer.skin_for("- ✗ users (missing)"),
            &renderer.failure_skin
        ));
        assert!(std::ptr::eq(renderer.skin_for("- ✓ users"), &renderer.skin));
    }
}
