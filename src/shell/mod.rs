//! Collaborator traits for the hosting UI shell.
//!
//! The browsers never talk to a toolkit directly; they hand view trees and
//! transient messages to these interfaces. Everything here is
//! fire-and-forget: no acknowledgment, no error propagation back into the
//! browsers.

use crate::types::view::ViewTree;

/// Clipboard collaborator.
pub trait Clipboard {
    fn set_clipboard(&mut self, text: &str);
}

/// Transient notification collaborator (snackbar/toast).
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Render collaborator: idempotent replace of the visible children, plus a
/// busy indicator for slow rebuilds.
pub trait RenderHost {
    fn render(&mut self, view: &ViewTree);
    fn set_busy(&mut self, busy: bool);
}

/// The full shell surface the browsers are wired to.
pub trait Shell: Clipboard + Notifier + RenderHost {}

impl<T: Clipboard + Notifier + RenderHost> Shell for T {}

/// Delivers a tile selection: clipboard set plus confirmation notification.
pub fn deliver_copy(shell: &mut dyn Shell, text: &str) {
    shell.set_clipboard(text);
    shell.notify(&format!("Copied {}", text));
}

/// Shell implementation for the console demo binary.
///
/// Uses the system clipboard when one is reachable and falls back to
/// remembering the text otherwise, so the demo also works headless.
pub struct ConsoleShell {
    clipboard: Option<arboard::Clipboard>,
    last_copied: Option<String>,
}

impl ConsoleShell {
    pub fn new() -> Self {
        Self {
            clipboard: arboard::Clipboard::new().ok(),
            last_copied: None,
        }
    }

    /// The most recent clipboard payload, system clipboard or not.
    pub fn last_copied(&self) -> Option<&str> {
        self.last_copied.as_deref()
    }
}

impl Default for ConsoleShell {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for ConsoleShell {
    fn set_clipboard(&mut self, text: &str) {
        if let Some(clipboard) = self.clipboard.as_mut() {
            let _ = clipboard.set_text(text.to_string());
        }
        self.last_copied = Some(text.to_string());
    }
}

impl Notifier for ConsoleShell {
    fn notify(&mut self, message: &str) {
        println!("  [snackbar] {}", message);
    }
}

impl RenderHost for ConsoleShell {
    fn render(&mut self, view: &ViewTree) {
        match view {
            ViewTree::Grid {
                input_enabled,
                status,
                items,
            } => {
                println!(
                    "  [render] grid: {} tile(s), input {}, status \"{}\"",
                    items.len(),
                    if *input_enabled { "enabled" } else { "disabled" },
                    status
                );
            }
            ViewTree::Tabs { tabs } => {
                let tiles: usize = tabs.iter().map(|t| t.items.len()).sum();
                println!("  [render] tabs: {} tab(s), {} tile(s)", tabs.len(), tiles);
            }
        }
    }

    fn set_busy(&mut self, busy: bool) {
        println!("  [splash] {}", if busy { "shown" } else { "hidden" });
    }
}
