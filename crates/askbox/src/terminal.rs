//! A surface that prints the conversation to the terminal.

use std::io::{self, Write as _};
use std::time::Duration;

use askbox_core::surface::{Entry, EntryKind, NodeId, Surface};
use askbox_model::Role;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

const BAR_CHAR: &str = "▎";

/// Renders entries as colored lines on stdout.
///
/// The loading placeholder is drawn as a spinner and is the only element
/// that can be taken back, printed lines stay on screen.
pub struct TerminalSurface {
    next_id: u64,
    spinner: Option<(NodeId, ProgressBar)>,
    spinner_style: ProgressStyle,
}

impl TerminalSurface {
    /// Creates a terminal surface.
    pub fn new() -> Self {
        let spinner_style = ProgressStyle::with_template("{spinner} {wide_msg}")
            .map(|style| style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"))
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        Self {
            next_id: 0,
            spinner: None,
            spinner_style,
        }
    }

    fn finish_spinner(&mut self) {
        if let Some((_, spinner)) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn append(&mut self, entry: Entry<'_>) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;

        // Never print underneath a running spinner.
        self.finish_spinner();

        match (entry.kind, entry.role) {
            (EntryKind::Loading, _) => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(self.spinner_style.clone());
                spinner.set_message(entry.content.to_owned());
                spinner.enable_steady_tick(Duration::from_millis(100));
                self.spinner = Some((id, spinner));
            }
            (EntryKind::Error, _) => {
                println!("{}{}", BAR_CHAR.bright_red(), entry.content.red());
            }
            // The question is already on screen, typed at the prompt.
            (EntryKind::Message, Role::User) => {}
            (_, Role::System) => {
                println!(
                    "{}{}",
                    BAR_CHAR.bright_yellow(),
                    entry.content.bright_yellow()
                );
            }
            (_, Role::Assistant | Role::User) => {
                println!(
                    "{}🤖 {}",
                    BAR_CHAR.bright_cyan(),
                    entry.content.bright_white()
                );
            }
        }
        id
    }

    fn remove(&mut self, node: NodeId) {
        if matches!(&self.spinner, Some((id, _)) if *id == node) {
            self.finish_spinner();
        }
    }

    fn clear(&mut self) {
        self.finish_spinner();
        // Clear the screen and move the cursor home.
        print!("\x1b[2J\x1b[H");
        io::stdout().flush().ok();
    }

    fn clear_input(&mut self) {
        // The line has already been consumed from stdin.
    }

    fn scroll_to_end(&mut self) {
        io::stdout().flush().ok();
    }
}
