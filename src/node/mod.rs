//! The Generator Node tree: the in-memory representation of planned
//! output text, plus the [`CompositeGeneratorNode::serialize`] walk that
//! turns it into a string.

mod composite;
mod indent;
mod newline;
mod serialize;
mod trace;

pub use composite::CompositeGeneratorNode;
pub use indent::IndentNode;
pub use indent::IndentOptions;
pub use indent::IndentationOptions;
pub use indent::DEFAULT_INDENTATION;
pub use newline::NewLineKind;
pub use serialize::SerializedOutput;
pub use trace::SourceRegion;
pub use trace::TracedRange;

/// A node in the generator tree: `Text`, `NewLine`, `Indent`, or
/// `Composite`, per the data model.
#[derive(Debug, Clone)]
pub enum GeneratorNode {
    /// A literal string fragment. Embedded `\n` is accepted (and treated
    /// like a [`NewLineKind::Unconditional`] during serialization) but
    /// newlines are normally modeled explicitly via the `NewLine` variant.
    Text(String),
    NewLine(NewLineKind),
    Indent(IndentNode),
    Composite(CompositeGeneratorNode),
}

impl GeneratorNode {
    /// Serializes this node to a string, discarding the source-region
    /// trace. Shorthand for `self.serialize_traced().text`.
    #[must_use]
    pub fn serialize(&self) -> String {
        serialize::serialize(self).text
    }

    /// Serializes this node, keeping the source-region trace alongside
    /// the output text.
    #[must_use]
    pub fn serialize_traced(&self) -> SerializedOutput {
        serialize::serialize(self)
    }

    /// See [`CompositeGeneratorNode::is_empty`]; applies the same
    /// semantic (not structural) definition to every node kind.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            GeneratorNode::Text(s) => s.is_empty(),
            GeneratorNode::NewLine(NewLineKind::Unconditional) => false,
            GeneratorNode::NewLine(NewLineKind::IfNotEmpty) => true,
            GeneratorNode::Indent(indent) => indent.is_empty(),
            GeneratorNode::Composite(composite) => composite.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_is_empty_ignores_conditional_newlines() {
        let mut node = CompositeGeneratorNode::new();
        node.append_new_line_if_not_empty();
        assert!(node.is_empty());
        assert_eq!(node.serialize(), "");
    }

    #[test]
    fn composite_is_not_empty_with_unconditional_newline() {
        let mut node = CompositeGeneratorNode::new();
        node.append_new_line();
        assert!(!node.is_empty());
        assert_eq!(node.serialize(), "\n");
    }

    #[test]
    fn text_node_is_empty_iff_its_string_is() {
        assert!(GeneratorNode::Text(String::new()).is_empty());
        assert!(!GeneratorNode::Text("x".to_string()).is_empty());
    }
}

impl CompositeGeneratorNode {
    /// Serializes this node to a string, discarding the source-region
    /// trace.
    #[must_use]
    pub fn serialize(&self) -> String {
        serialize::serialize_composite(self).text
    }

    /// Serializes this node, keeping the source-region trace alongside
    /// the output text.
    #[must_use]
    pub fn serialize_traced(&self) -> SerializedOutput {
        serialize::serialize_composite(self)
    }
}
