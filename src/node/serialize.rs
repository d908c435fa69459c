use crate::node::CompositeGeneratorNode;
use crate::node::GeneratorNode;
use crate::node::NewLineKind;
use crate::node::TracedRange;
use crate::strings::split_newlines;

/// The result of walking a generator tree: the emitted text plus, for any
/// node that carried a [`crate::node::SourceRegion`], the byte range in
/// `text` it produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SerializedOutput {
    pub text: String,
    pub regions: Vec<TracedRange>,
}

#[must_use]
pub(crate) fn serialize(node: &GeneratorNode) -> SerializedOutput {
    let mut serializer = Serializer::default();
    serializer.walk_node(node);
    serializer.finish()
}

#[must_use]
pub(crate) fn serialize_composite(composite: &CompositeGeneratorNode) -> SerializedOutput {
    let mut serializer = Serializer::default();
    serializer.walk_composite(composite);
    serializer.finish()
}

/// One entry of the active indentation stack. `armed` tracks whether this
/// level's prefix is eligible to print at the *next* line start. An entry
/// pushed with `indent_immediately: false` starts disarmed — so the line
/// already in progress when the `Indent` was entered (typically the line
/// that *establishes* a column, e.g. the text a multi-line substitution
/// was spliced after) is never retroactively prefixed — and becomes armed
/// the moment any newline fires while it is on the stack, so every
/// subsequent line it covers is.
struct IndentEntry {
    text: String,
    armed: bool,
}

struct Serializer {
    out: String,
    indent_stack: Vec<IndentEntry>,
    at_line_start: bool,
    current_line_has_content: bool,
    regions: Vec<TracedRange>,
}

impl Default for Serializer {
    /// `at_line_start` starts `true`: per §4.1, the serializer begins at the
    /// very start of the output, so an `Indent` opened with
    /// `indent_immediately: true` before any content has been written still
    /// indents its first line.
    fn default() -> Self {
        Self {
            out: String::new(),
            indent_stack: Vec::new(),
            at_line_start: true,
            current_line_has_content: false,
            regions: Vec::new(),
        }
    }
}

impl Serializer {
    fn finish(self) -> SerializedOutput {
        SerializedOutput {
            text: self.out,
            regions: self.regions,
        }
    }

    fn walk_node(&mut self, node: &GeneratorNode) {
        match node {
            GeneratorNode::Text(text) => self.emit_text(text),
            GeneratorNode::NewLine(NewLineKind::Unconditional) => self.emit_newline_unconditional(),
            GeneratorNode::NewLine(NewLineKind::IfNotEmpty) => self.emit_newline_if_not_empty(),
            GeneratorNode::Indent(indent) => {
                self.indent_stack.push(IndentEntry {
                    text: indent.indentation().to_string(),
                    armed: indent.indent_immediately(),
                });
                self.walk_composite(indent.child());
                self.indent_stack.pop();
            }
            GeneratorNode::Composite(composite) => self.walk_composite(composite),
        }
    }

    fn walk_composite(&mut self, composite: &CompositeGeneratorNode) {
        let start = self.out.len();
        for child in composite.children() {
            self.walk_node(child);
        }
        if let Some(region) = composite.trace() {
            self.regions.push(TracedRange {
                output_start: start,
                output_end: self.out.len(),
                region: region.clone(),
            });
        }
    }

    /// Embedded `\n` in a Text node is split and each interior newline is
    /// treated as an unconditional `NewLine` node, per the data model.
    fn emit_text(&mut self, text: &str) {
        let lines = split_newlines(text);
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.emit_newline_unconditional();
            }
            if !line.is_empty() {
                self.write_str(line);
            }
        }
    }

    fn write_str(&mut self, s: &str) {
        if self.at_line_start {
            for entry in &self.indent_stack {
                if entry.armed {
                    self.out.push_str(&entry.text);
                }
            }
            self.at_line_start = false;
        }
        self.out.push_str(s);
        if s.chars().any(|c| !c.is_whitespace()) {
            self.current_line_has_content = true;
        }
    }

    fn emit_newline_unconditional(&mut self) {
        self.out.push('\n');
        self.at_line_start = true;
        self.current_line_has_content = false;
        for entry in &mut self.indent_stack {
            entry.armed = true;
        }
    }

    fn emit_newline_if_not_empty(&mut self) {
        if self.current_line_has_content {
            self.emit_newline_unconditional();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::IndentOptions;

    #[test]
    fn text_and_newlines() {
        let mut node = CompositeGeneratorNode::new();
        node.append("hello").append_new_line().append("world");
        assert_eq!(node.serialize(), "hello\nworld");
    }

    #[test]
    fn conditional_newline_elided_on_empty_line() {
        let mut node = CompositeGeneratorNode::new();
        node.append("a")
            .append_new_line()
            .append_new_line_if_not_empty()
            .append_new_line_if_not_empty()
            .append("b");
        assert_eq!(node.serialize(), "a\nb");
    }

    #[test]
    fn indent_applies_at_each_line_start() {
        let mut node = CompositeGeneratorNode::new();
        node.append("if (c) {").indent(IndentOptions::default(), |body| {
            body.append_new_line().append("a").append_new_line().append("b");
        });
        node.append_new_line().append("}");
        assert_eq!(node.serialize(), "if (c) {\n    a\n    b\n}");
    }

    #[test]
    fn immediate_indent_applies_at_the_very_start_of_output() {
        let mut node = CompositeGeneratorNode::new();
        node.indent_default(|body| {
            body.append("line1").append_new_line().append("line2");
        });
        assert_eq!(node.serialize(), "    line1\n    line2");
    }

    #[test]
    fn deferred_indent_does_not_apply_to_the_line_that_opened_it() {
        let mut node = CompositeGeneratorNode::new();
        node.append("return ").indent(
            IndentOptions {
                indentation: Some("       ".into()),
                indent_immediately: Some(false),
            },
            |body| {
                body.append("one").append_new_line().append("two");
            },
        );
        assert_eq!(node.serialize(), "return one\n       two");
    }

    #[test]
    fn embedded_newline_in_text_behaves_like_newline_node() {
        let mut node = CompositeGeneratorNode::new();
        node.append("a\nb");
        assert_eq!(node.serialize(), "a\nb");
    }

    #[test]
    fn no_trailing_newline_added() {
        let mut node = CompositeGeneratorNode::new();
        node.append("x").append_new_line_if_not_empty();
        assert_eq!(node.serialize(), "x");
    }

    #[test]
    fn traced_output_round_trips_through_json() {
        use crate::node::SourceRegion;

        let mut node = CompositeGeneratorNode::new();
        node.append("a").append_new_line();
        let traced = CompositeGeneratorNode::new()
            .with_trace(SourceRegion::new("stmt-1", 0, 5));
        let mut outer = CompositeGeneratorNode::new();
        outer.children.push(GeneratorNode::Composite(node));
        outer.children.push(GeneratorNode::Composite(traced));

        let output = outer.serialize_traced();
        let json = serde_json::to_string(&output).expect("serialize");
        let back: SerializedOutput = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, output);
    }
}
