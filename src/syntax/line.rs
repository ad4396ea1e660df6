//! A source line as a sequence of fragments.

use super::fragment::{FieldSource, Fragment, Placeholder};

/// An ordered sequence of fragments that renders back to one source line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLine {
    fragments: Vec<Fragment>,
}

impl TextLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// A line consisting of a single literal.
    pub fn literal(text: impl Into<String>) -> Self {
        let mut line = Self::new();
        line.push_literal(text);
        line
    }

    /// Append literal text. Empty text is dropped.
    pub fn push_literal(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }
        // Merge with a preceding literal to keep lines compact
        if let Some(Fragment::Literal(last)) = self.fragments.last_mut() {
            last.push_str(&text);
        } else {
            self.fragments.push(Fragment::Literal(text));
        }
        self
    }

    /// Append a placeholder.
    pub fn push_placeholder(&mut self, placeholder: Placeholder) -> &mut Self {
        self.fragments.push(Fragment::Bound(placeholder));
        self
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Whether the line carries no placeholder.
    pub fn is_verbatim(&self) -> bool {
        self.fragments.iter().all(Fragment::is_literal)
    }

    /// Render the line against the current field values.
    pub fn render(&self, source: &impl FieldSource) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Literal(text) => out.push_str(text),
                Fragment::Bound(placeholder) => placeholder.render_into(source, &mut out),
            }
        }
        out
    }
}
