use serde::Deserialize;
use serde::Serialize;

/// A reference back to whatever produced a piece of generated text — an AST
/// node, a grammar rule, a source span in a template file. Orthogonal to the
/// tree shape: attaching one to a [`crate::node::GeneratorNode::Text`] never
/// changes how it serializes, only what
/// [`crate::node::SerializedOutput::regions`] records for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRegion {
    /// Caller-defined identifier for the originating AST node or rule.
    pub node_id: String,
    /// Byte offset of the region's start in the source it was derived from.
    pub start: usize,
    /// Byte offset of the region's end in the source it was derived from.
    pub end: usize,
}

impl SourceRegion {
    #[must_use]
    pub fn new(node_id: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            node_id: node_id.into(),
            start,
            end,
        }
    }
}

/// One entry in a [`SerializedOutput`] trace: the byte range in the
/// serialized text that a [`SourceRegion`] produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracedRange {
    pub output_start: usize,
    pub output_end: usize,
    pub region: SourceRegion,
}
