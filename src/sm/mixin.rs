//! Mixin types for attaching source positions to values.
//!
//! - `SourceLineMixin` is a generic wrapper that attaches the line index and the byte span of that line to a value.
//! - `SourceLineMixinExt` is a trait that provides extension methods for creating `SourceLineMixin` instances.

/// A generic wrapper that attaches position information (line index and byte span) to a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLineMixin<T> {
    /// Wrapped content value
    content: T,
    /// Line index in the source string (0-based)
    line: usize,
    /// Start byte index of the line in the source string (inclusive)
    start: usize,
    /// End byte index of the line in the source string (exclusive)
    end: usize,
}

impl<T> SourceLineMixin<T> {
    /// Instances a new `SourceLineMixin`
    pub const fn new(content: T, line: usize, start: usize, end: usize) -> Self {
        Self {
            content,
            line,
            start,
            end,
        }
    }

    /// Returns the wrapped content.
    pub const fn content(&self) -> &T {
        &self.content
    }

    /// Leans the content out of the wrapper.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Returns the 0-based line index.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the byte span of the line as a tuple of (start, end).
    pub const fn as_span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Returns the byte span of the line as a range.
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Maps the content of the wrapper.
    pub fn map<U, F>(self, f: F) -> SourceLineMixin<U>
    where
        F: FnOnce(T) -> U,
    {
        SourceLineMixin::new(f(self.content), self.line, self.start, self.end)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SourceLineMixin<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at line {}", self.content, self.line)
    }
}

impl<T: std::error::Error + 'static> std::error::Error for SourceLineMixin<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.content)
    }
}

/// Extension methods for `SourceLineMixin`.
pub trait SourceLineMixinExt {
    /// Instances a new `SourceLineMixin` with the same position as a wrapper.
    fn into_wrapper<W>(self, wrapper: &SourceLineMixin<W>) -> SourceLineMixin<Self>
    where
        Self: Sized,
    {
        SourceLineMixin::new(self, wrapper.line, wrapper.start, wrapper.end)
    }

    /// Instances a new `SourceLineMixin` at a given line and byte span.
    fn into_wrapper_line(
        self,
        line: usize,
        span: std::ops::Range<usize>,
    ) -> SourceLineMixin<Self>
    where
        Self: Sized,
    {
        SourceLineMixin::new(self, line, span.start, span.end)
    }
}

impl<T> SourceLineMixinExt for T {}
