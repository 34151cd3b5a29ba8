//! Line index over a single source buffer.
//!
//! Used when rendering diagnostics: a [`Position`](super::Position) names a
//! line, and the renderer needs that line's text.

use std::borrow::Cow;

/// A source buffer together with the byte offset of every line start.
#[derive(Clone)]
pub struct SourceText {
    name: String,
    content: Vec<u8>,
    line_starts: Vec<usize>,
}

impl SourceText {
    /// Index `content` under `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kplc_util::span::SourceText;
    ///
    /// let text = SourceText::new("main.kp", "datum x\ngive x");
    /// assert_eq!(text.line_count(), 2);
    /// assert_eq!(text.line_at(2).as_deref(), Some("give x"));
    /// ```
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &[u8]) -> Vec<usize> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .iter()
                .enumerate()
                .filter(|&(_, &b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts
    }

    /// The name the source was registered under
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw bytes
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Number of lines (a trailing newline opens one more, empty, line)
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The text of a 1-based line without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so this never fails for
    /// an existing line.
    pub fn line_at(&self, line: usize) -> Option<Cow<'_, str>> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        let mut bytes = &self.content[start..end];
        while let [rest @ .., b'\n' | b'\r'] = bytes {
            bytes = rest;
        }
        Some(String::from_utf8_lossy(bytes))
    }
}

impl std::fmt::Debug for SourceText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceText")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
