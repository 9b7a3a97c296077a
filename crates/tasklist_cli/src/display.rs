//! Plain-text drawing of an `AppView`.

use tasklist_core::{AppView, ListView, RowMode, ViewSink};

/// Formats the view the way the terminal shows it.
pub fn format_view(view: &AppView) -> String {
    let mut out = String::new();
    let cursor = if view.composer.focused { ">" } else { " " };
    let value = if view.composer.value.is_empty() {
        view.composer.placeholder.as_str()
    } else {
        view.composer.value.as_str()
    };
    out.push_str(&format!(
        "{cursor} [{value}] ({})\n",
        view.composer.add_label
    ));

    match &view.list {
        ListView::Empty(placeholder) => {
            out.push_str(&format!("  {}\n", placeholder.message));
        }
        ListView::Items { items } => {
            for item in items {
                let marker = match item.mode {
                    RowMode::ReadOnly => ' ',
                    RowMode::Editing { .. } => '*',
                };
                out.push_str(&format!(
                    "{marker} {:>3}. {}  [{}] [{}]\n",
                    item.id.as_raw(),
                    item.text,
                    item.edit_label,
                    item.delete_label
                ));
            }
        }
    }
    out
}

/// Repaints stdout on every render.
pub struct TerminalSink;

impl ViewSink for TerminalSink {
    fn present(&mut self, view: &AppView, revision: u64) {
        log::trace!("event=repaint module=cli revision={revision}");
        print!("{}", format_view(view));
    }
}
