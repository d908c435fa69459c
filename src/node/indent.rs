use super::composite::CompositeGeneratorNode;

/// Default indentation used by [`IndentNode`] when a caller doesn't specify
/// one: four spaces, matching the conventional width used throughout the
/// generated output of this crate's own tests.
pub const DEFAULT_INDENTATION: &str = "    ";

/// How much to indent, expressed either as a literal string (so callers can
/// use tabs, or a non-multiple-of-one-space width) or as a plain count of
/// spaces.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum IndentationOptions {
    Spaces(usize),
    Str(String),
}

impl IndentationOptions {
    #[must_use]
    pub fn resolve(&self) -> String {
        match self {
            IndentationOptions::Spaces(n) => " ".repeat(*n),
            IndentationOptions::Str(s) => s.clone(),
        }
    }
}

impl Default for IndentationOptions {
    fn default() -> Self {
        IndentationOptions::Str(DEFAULT_INDENTATION.to_string())
    }
}

impl From<usize> for IndentationOptions {
    fn from(n: usize) -> Self {
        IndentationOptions::Spaces(n)
    }
}

impl From<&str> for IndentationOptions {
    fn from(s: &str) -> Self {
        IndentationOptions::Str(s.to_string())
    }
}

impl From<String> for IndentationOptions {
    fn from(s: String) -> Self {
        IndentationOptions::Str(s)
    }
}

/// Options accepted by [`CompositeGeneratorNode::indent`].
#[derive(Debug, Clone, Default)]
pub struct IndentOptions {
    pub indentation: Option<IndentationOptions>,
    /// Whether the indentation applies to the line the `Indent` is opened on
    /// (if that line is already in progress) or only from the first newline
    /// emitted by its child onward. Defaults to `true`.
    pub indent_immediately: Option<bool>,
}

/// A child [`CompositeGeneratorNode`] wrapped with a per-line indentation
/// prefix. The prefix is "armed" lazily during serialization — see
/// [`super::serialize`] for the exact rule.
#[derive(Debug, Clone)]
pub struct IndentNode {
    pub(crate) indentation: String,
    pub(crate) indent_immediately: bool,
    pub(crate) child: Box<CompositeGeneratorNode>,
}

impl IndentNode {
    pub(crate) fn new(
        indentation: String,
        indent_immediately: bool,
        child: CompositeGeneratorNode,
    ) -> Self {
        Self {
            indentation,
            indent_immediately,
            child: Box::new(child),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.child.is_empty()
    }

    #[must_use]
    pub fn indentation(&self) -> &str {
        &self.indentation
    }

    #[must_use]
    pub fn indent_immediately(&self) -> bool {
        self.indent_immediately
    }

    #[must_use]
    pub fn child(&self) -> &CompositeGeneratorNode {
        &self.child
    }

    #[must_use]
    pub fn child_mut(&mut self) -> &mut CompositeGeneratorNode {
        &mut self.child
    }
}
