use crate::generated::Generated;
use crate::generated::IntoGenerated;
use crate::node::GeneratorNode;
use crate::node::IndentNode;
use crate::node::IndentOptions;
use crate::node::NewLineKind;
use crate::node::SourceRegion;

/// An ordered container of child [`GeneratorNode`]s and the root type
/// returned by [`crate::template::expand_to_node`].
///
/// Children are appended with the `append*` family below; once built, a
/// `CompositeGeneratorNode` is serialized with [`Self::serialize`] (or
/// spliced as a child of another composite via `append`).
#[derive(Debug, Clone, Default)]
pub struct CompositeGeneratorNode {
    pub(crate) children: Vec<GeneratorNode>,
    pub(crate) trace: Option<SourceRegion>,
}

impl CompositeGeneratorNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a source-region trace to this node. Orthogonal to shape:
    /// it changes what [`crate::node::SerializedOutput::regions`] records,
    /// never how the node serializes.
    #[must_use]
    pub fn with_trace(mut self, region: SourceRegion) -> Self {
        self.trace = Some(region);
        self
    }

    #[must_use]
    pub fn trace(&self) -> Option<&SourceRegion> {
        self.trace.as_ref()
    }

    #[must_use]
    pub fn children(&self) -> &[GeneratorNode] {
        &self.children
    }

    /// Accepts any [`IntoGenerated`] value. Absent values (`None`) are
    /// no-ops; this is the one place the "absent vs empty" distinction in
    /// the data model is enforced.
    pub fn append(&mut self, value: impl IntoGenerated) -> &mut Self {
        if let Some(generated) = value.into_generated() {
            match generated {
                Generated::Str(s) => self.children.push(GeneratorNode::Text(s)),
                Generated::Node(node) => self.children.push(node),
            }
        }
        self
    }

    /// Appends `value` only when `cond` is true.
    pub fn append_if(&mut self, cond: bool, value: impl IntoGenerated) -> &mut Self {
        if cond {
            self.append(value);
        }
        self
    }

    /// Appends an unconditional newline.
    pub fn append_new_line(&mut self) -> &mut Self {
        self.children.push(GeneratorNode::NewLine(NewLineKind::Unconditional));
        self
    }

    /// Appends a newline that only emits if the current line has content.
    pub fn append_new_line_if_not_empty(&mut self) -> &mut Self {
        self.children.push(GeneratorNode::NewLine(NewLineKind::IfNotEmpty));
        self
    }

    /// As [`Self::append_new_line_if_not_empty`], but only when `cond` holds.
    pub fn append_new_line_if_not_empty_if(&mut self, cond: bool) -> &mut Self {
        if cond {
            self.append_new_line_if_not_empty();
        }
        self
    }

    /// Opens an [`IndentNode`] child. `build` receives the fresh inner
    /// composite and appends to it; `options` controls the indentation
    /// string and whether it applies starting at the current line.
    pub fn indent(
        &mut self,
        options: IndentOptions,
        build: impl FnOnce(&mut CompositeGeneratorNode),
    ) -> &mut Self {
        let indentation = options.indentation.unwrap_or_default().resolve();
        let indent_immediately = options.indent_immediately.unwrap_or(true);
        let mut child = CompositeGeneratorNode::new();
        build(&mut child);
        self.children
            .push(GeneratorNode::Indent(IndentNode::new(indentation, indent_immediately, child)));
        self
    }

    /// `indent` with default [`IndentOptions`] (four spaces, applied
    /// immediately).
    pub fn indent_default(&mut self, build: impl FnOnce(&mut CompositeGeneratorNode)) -> &mut Self {
        self.indent(IndentOptions::default(), build)
    }

    /// True iff serializing this node would produce the empty string.
    /// Semantic, not structural: empty `Text`, no-op `IfNotEmpty`
    /// newlines, and `Indent`/`Composite` children that are themselves
    /// empty do not count as content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.iter().all(GeneratorNode::is_empty)
    }
}
