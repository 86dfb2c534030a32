//! Plain-text renderer
//!
//! Writes each filter result as entry blocks to any `Write`, followed by a
//! prompt carrying the search placeholder. Used by the line-mode session.

use std::io::Write;

use super::entry::format_entry_blocks;
use crate::browser::{search_placeholder, Notice, NoticeKind, Renderer};
use crate::error::{GlossaryError, GlossaryResult};
use crate::models::Entry;

/// Renderer that writes plain text
pub struct TextRenderer<W: Write> {
    out: W,
    placeholder: String,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            placeholder: search_placeholder(0),
        }
    }

    /// Consume the renderer and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_str(&mut self, text: &str) -> GlossaryResult<()> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| GlossaryError::Io(format!("Failed to write output: {}", e)))
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, entries: &[&Entry]) -> GlossaryResult<()> {
        let body = format_entry_blocks(entries);
        let prompt = format!("\n{} (:help for commands)\n> ", self.placeholder);
        self.write_str(&body)?;
        self.write_str(&prompt)
    }

    fn set_entry_count(&mut self, count: usize) -> GlossaryResult<()> {
        self.placeholder = search_placeholder(count);
        Ok(())
    }

    fn notify(&mut self, notice: Notice) -> GlossaryResult<()> {
        let tag = match notice.kind {
            NoticeKind::Info => "info",
            NoticeKind::Success => "ok",
            NoticeKind::Error => "error",
        };
        self.write_str(&format!("[{}] {}\n> ", tag, notice.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(renderer: TextRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_render_entries_and_prompt() {
        let mut renderer = TextRenderer::new(Vec::new());
        let entry = Entry::new("bio-", "Root").with_meaning("life");

        renderer.set_entry_count(12).unwrap();
        renderer.render(&[&entry]).unwrap();

        let text = output(renderer);
        assert!(text.starts_with("bio-\n"));
        assert!(text.contains("Meaning:        life"));
        assert!(text.contains("Search 12 terms..."));
    }

    #[test]
    fn test_render_empty() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&[]).unwrap();
        assert!(output(renderer).starts_with("No entries found.\n"));
    }

    #[test]
    fn test_notify() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.notify(Notice::error("nope")).unwrap();
        renderer
            .contact_copied(std::time::Duration::from_secs(2))
            .unwrap();

        let text = output(renderer);
        assert!(text.contains("[error] nope"));
        assert!(text.contains("[ok] Copied! Now shoot me an email."));
    }
}
