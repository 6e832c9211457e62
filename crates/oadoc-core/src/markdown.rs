//! Seam to the markdown collaborator that turns description strings into
//! HTML. The engine itself lives outside this crate; the core only fixes
//! the failure policy.

/// Converts a markdown description into an HTML fragment. Implemented by
/// the embedding application.
pub trait MarkdownRenderer {
    type Error: std::error::Error;

    fn render(&self, text: &str) -> Result<String, Self::Error>;
}

/// Render a description, falling back to an HTML-escaped rendering of the
/// original text when the renderer fails. A markdown failure never escapes
/// a rendering pass.
pub fn render_description<M: MarkdownRenderer>(renderer: &M, text: &str) -> String {
    match renderer.render(text) {
        Ok(html) => html,
        Err(err) => {
            log::warn!("markdown renderer failed, escaping raw text: {err}");
            escape_html(text)
        }
    }
}

/// Minimal HTML entity escape used by the markdown fallback path.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
