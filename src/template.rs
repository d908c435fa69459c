//! The tagged-template-style entry point. Rust has no template-literal
//! syntax, so [`TemplateParts`] plays the varargs-builder role the design
//! notes call for: an ordered list of literal parts and an ordered list of
//! substitutions, one shorter.
//!
//! [`expand_to_node`] parses the parts into the whitespace-trimmed,
//! indentation-aware [`CompositeGeneratorNode`] described by the
//! template-shape rule; [`join_to_node`] is the separate iterable-joining
//! helper.

use crate::generated::Generated;
use crate::generated::IntoGenerated;
use crate::node::CompositeGeneratorNode;
use crate::node::GeneratorNode;
use crate::node::IndentNode;
use crate::strings::split_newlines;

/// The literal parts and substitutions of a template, in the shape a
/// tagged-template call would have split them into: `substitutions.len()
/// == static_parts.len() - 1`.
#[derive(Debug, Clone, Default)]
pub struct TemplateParts<'a> {
    pub static_parts: Vec<&'a str>,
    pub substitutions: Vec<Option<Generated>>,
}

impl<'a> TemplateParts<'a> {
    /// Builds a `TemplateParts` from literal parts and substitutions.
    /// Panics (a programmer error, per the data model's `MisuseError`
    /// framing) if the lengths don't match a valid template shape.
    #[must_use]
    pub fn new(static_parts: Vec<&'a str>, substitutions: Vec<Option<Generated>>) -> Self {
        assert_eq!(
            substitutions.len(),
            static_parts.len().saturating_sub(1),
            "substitutions.len() must equal static_parts.len() - 1"
        );
        Self { static_parts, substitutions }
    }

    /// A template with no substitutions at all — the degenerate one-part
    /// case `expandToNode\`...\`` collapses to when the literal has no
    /// placeholders.
    #[must_use]
    pub fn from_literal(text: &'a str) -> Self {
        Self {
            static_parts: vec![text],
            substitutions: Vec::new(),
        }
    }
}

/// An internal marker distinguishing a template placeholder slot from an
/// actual produced value. Never leaks into the assembled
/// [`CompositeGeneratorNode`] — always consumed or discarded during
/// [`assemble`].
enum Segment {
    NewLine,
    Undefined,
    Str(String),
    Node(GeneratorNode),
}

/// The tagged-template entry point: parses `parts` per the template-shape
/// rule (leading/trailing blank-line omission, common-indent stripping),
/// splices substitutions, and assembles a [`CompositeGeneratorNode`] that
/// gives a multi-line substitution the indentation of the column it was
/// spliced at.
#[must_use]
pub fn expand_to_node(parts: TemplateParts) -> CompositeGeneratorNode {
    let shape = TemplateShape::compute(&parts.static_parts);
    let segments = splice(&parts, &shape);
    assemble(segments)
}

struct TemplateShape {
    indentation: usize,
    omit_first_line: bool,
    omit_last_line: bool,
    trim_last_line: bool,
}

impl TemplateShape {
    fn compute(static_parts: &[&str]) -> Self {
        let joined = static_parts.join("_");
        let l = split_newlines(&joined);

        let omit_first_line = l.len() > 1 && l[0].trim().is_empty();
        let last = l.len() - 1;
        let omit_last_line_initial = omit_first_line && l.len() > 1 && l[last].trim().is_empty();

        let degenerate = l.len() == 1 || !l[0].trim().is_empty() || (l.len() == 2 && l[1].trim().is_empty());

        if degenerate {
            let trim_last_line = l.len() != 1 && l[last].trim().is_empty();
            return Self {
                indentation: 0,
                omit_first_line,
                omit_last_line: omit_last_line_initial,
                trim_last_line,
            };
        }

        let lo = usize::from(omit_first_line);
        let hi = last + 1 - usize::from(omit_last_line_initial);
        let remaining: Vec<&str> = l[lo..hi].iter().copied().filter(|line| !line.is_empty()).collect();
        let indentation = crate::strings::find_indentation(&remaining);

        let omit_last_line = if !omit_last_line_initial {
            false
        } else if let Some(first_remaining) = remaining.first() {
            let last_raw = l[last];
            last_raw.len() < indentation || last_raw.as_bytes()[..indentation] != first_remaining.as_bytes()[..indentation]
        } else {
            omit_last_line_initial
        };

        Self {
            indentation,
            omit_first_line,
            omit_last_line,
            trim_last_line: false,
        }
    }
}

fn splice(parts: &TemplateParts, shape: &TemplateShape) -> Vec<Segment> {
    let mut out = Vec::new();
    let common_prefix = " ".repeat(shape.indentation);

    for (i, part) in parts.static_parts.iter().enumerate() {
        let mut lines: Vec<String> = split_newlines(part).iter().map(|s| (*s).to_string()).collect();
        for (j, line) in lines.iter_mut().enumerate() {
            if j == 0 {
                continue;
            }
            if line.len() >= shape.indentation && line.starts_with(&common_prefix) {
                line.drain(..shape.indentation);
            }
        }

        let mut first_in_part = true;
        for (j, line) in lines.into_iter().enumerate() {
            if j == 0 && i == 0 && shape.omit_first_line {
                continue;
            }
            if !first_in_part {
                out.push(Segment::NewLine);
            }
            first_in_part = false;
            if !line.is_empty() {
                out.push(Segment::Str(line));
            }
        }

        if let Some(substitution) = parts.substitutions.get(i) {
            let is_final = i == parts.substitutions.len() - 1;
            match substitution {
                Some(Generated::Node(node)) => out.push(Segment::Node(node.clone())),
                Some(Generated::Str(s)) => {
                    let mut wrapper = CompositeGeneratorNode::new();
                    wrapper.append(s.clone());
                    out.push(Segment::Node(GeneratorNode::Composite(wrapper)));
                }
                None => {
                    if !is_final {
                        out.push(Segment::Undefined);
                    }
                }
            }
        }
    }

    trim_final_line(&mut out, shape);
    out
}

/// §4.3.3: drop a trailing pure-whitespace static segment (and, when the
/// template also omitted a blank first line, the newline sentinel right
/// before it) so a closing delimiter scaffolding line never becomes a
/// phantom trailing blank line. A last line that was entirely whitespace
/// never even produces a `Str` segment (it gets stripped to nothing by
/// `splice`'s indentation removal), leaving a bare trailing `NewLine`
/// sentinel as its only trace — drop that too.
fn trim_final_line(segments: &mut Vec<Segment>, shape: &TemplateShape) {
    if !(shape.omit_last_line || shape.trim_last_line) {
        return;
    }
    match segments.last() {
        Some(Segment::Str(s)) if s.trim().is_empty() => {
            segments.pop();
            if shape.omit_first_line {
                if let Some(Segment::NewLine) = segments.last() {
                    segments.pop();
                }
            }
        }
        Some(Segment::NewLine) => {
            segments.pop();
        }
        _ => {}
    }
}

#[derive(PartialEq, Eq, Clone, Copy)]
enum PrevKind {
    Start,
    NewLineSentinel,
    RawString,
    Node,
    Undefined,
}

/// §4.3.4: walk the spliced sequence, opening a deferred [`IndentNode`]
/// whenever a line starts with literal content — so a later multi-line
/// substitution on the same logical line inherits that content's column
/// as its continuation indent, without double-indenting the line that
/// established it (see [`crate::node::serialize`]'s `armed` handling).
fn assemble(segments: Vec<Segment>) -> CompositeGeneratorNode {
    let mut node = CompositeGeneratorNode::new();
    let mut indented: Option<(String, CompositeGeneratorNode)> = None;
    let mut prev = PrevKind::Start;

    for segment in segments {
        match segment {
            Segment::Undefined => {
                prev = PrevKind::Undefined;
            }
            Segment::NewLine => {
                flush_indent(&mut node, &mut indented);
                let unconditional = matches!(prev, PrevKind::Start | PrevKind::NewLineSentinel | PrevKind::RawString);
                if unconditional {
                    node.append_new_line();
                } else {
                    node.append_new_line_if_not_empty();
                }
                prev = PrevKind::NewLineSentinel;
            }
            Segment::Str(s) => {
                let starts_line = matches!(prev, PrevKind::Start | PrevKind::NewLineSentinel);
                let indent_prefix = if starts_line && !s.is_empty() { blank(&s) } else { String::new() };
                append_content(GeneratorNode::Text(s), indent_prefix, &mut node, &mut indented);
                prev = PrevKind::RawString;
            }
            Segment::Node(generated_node) => {
                append_content(generated_node, String::new(), &mut node, &mut indented);
                prev = PrevKind::Node;
            }
        }
    }
    flush_indent(&mut node, &mut indented);
    node
}

fn append_content(
    content: GeneratorNode,
    indent_prefix: String,
    node: &mut CompositeGeneratorNode,
    indented: &mut Option<(String, CompositeGeneratorNode)>,
) {
    if let Some((_, child)) = indented.as_mut() {
        child.children.push(content);
    } else if !indent_prefix.is_empty() {
        let mut child = CompositeGeneratorNode::new();
        child.children.push(content);
        *indented = Some((indent_prefix, child));
    } else {
        node.children.push(content);
    }
}

fn flush_indent(node: &mut CompositeGeneratorNode, indented: &mut Option<(String, CompositeGeneratorNode)>) {
    if let Some((prefix, child)) = indented.take() {
        node.children.push(GeneratorNode::Indent(IndentNode::new(prefix, false, child)));
    }
}

/// Every character mapped to a space (tabs preserved), used as the
/// continuation-line indent for text spliced after `s` on the same line —
/// matching width, not repeating `s` itself.
fn blank(s: &str) -> String {
    s.chars().map(|c| if c == '\t' { '\t' } else { ' ' }).collect()
}

/// Options accepted by [`join_to_node`].
#[derive(Default)]
pub struct JoinOptions<'a> {
    pub prefix: Option<&'a str>,
    pub suffix: Option<&'a str>,
    pub separator: Option<&'a str>,
    pub append_newline_if_not_empty: bool,
}

/// Joins `items` into a single [`CompositeGeneratorNode`], calling
/// `to_generated(item, index, is_last)` for each element. Returns `None`
/// if nothing in the iterable contributed any content (and no
/// prefix/suffix were configured), matching the `Generated`-typed
/// "absent" contract: an empty join is absent, not an empty composite.
pub fn join_to_node<T, F>(items: impl IntoIterator<Item = T>, mut to_generated: F, options: JoinOptions) -> Option<CompositeGeneratorNode>
where
    F: FnMut(&T, usize, bool) -> Option<Generated>,
{
    let mut node: Option<CompositeGeneratorNode> = None;
    let mut iter = items.into_iter().peekable();
    let mut index = 0usize;

    while let Some(item) = iter.next() {
        let is_last = iter.peek().is_none();
        let content = to_generated(&item, index, is_last);

        if node.is_none() {
            if content.is_none() && options.prefix.is_none() && options.suffix.is_none() {
                index += 1;
                continue;
            }
            node = Some(CompositeGeneratorNode::new());
        }
        let composite = node.as_mut().expect("node initialized above");

        if let Some(prefix) = options.prefix {
            composite.append(prefix);
        }
        let has_content = content.is_some();
        composite.append(content.into_generated());
        if let Some(suffix) = options.suffix {
            composite.append(suffix);
        }
        if !is_last && has_content {
            if let Some(separator) = options.separator {
                composite.append(separator);
            }
        }
        if options.append_newline_if_not_empty && !composite.is_empty() {
            composite.append_new_line_if_not_empty();
        }

        index += 1;
    }

    node
}

/// Default `to_generated` for [`join_to_node`]: each element's `Display`
/// form, same as the source's string-conversion default.
pub fn display_to_generated<T: std::fmt::Display>(item: &T, _index: usize, _is_last: bool) -> Option<Generated> {
    Some(Generated::Str(item.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_parts<'a>(parts: Vec<&'a str>, subs: Vec<Option<Generated>>) -> TemplateParts<'a> {
        TemplateParts::new(parts, subs)
    }

    #[test]
    fn single_static_line() {
        let node = expand_to_node(TemplateParts::from_literal("hello"));
        assert_eq!(node.serialize(), "hello");
    }

    #[test]
    fn blank_delimiter_lines_are_omitted() {
        let node = expand_to_node(TemplateParts::from_literal("\n    foo\n    bar\n"));
        assert_eq!(node.serialize(), "foo\nbar");
    }

    #[test]
    fn common_indent_is_stripped_around_a_substitution() {
        let parts = node_parts(
            vec!["\n    foo ", " bar\n"],
            vec![Some(Generated::Str("X".to_string()))],
        );
        let node = expand_to_node(parts);
        assert_eq!(node.serialize(), "foo X bar");
    }

    #[test]
    fn fresh_line_substitution_is_not_indented() {
        let mut sub = CompositeGeneratorNode::new();
        sub.append("a").append_new_line().append("b");
        let parts = node_parts(
            vec!["\n  if (c) {\n  ", "\n  }\n"],
            vec![Some(Generated::Node(GeneratorNode::Composite(sub)))],
        );
        let node = expand_to_node(parts);
        assert_eq!(node.serialize(), "if (c) {\na\nb\n}");
    }

    #[test]
    fn multiline_substitution_after_mid_line_text_inherits_its_column() {
        let parts = node_parts(vec!["\n  return ", "\n"], vec![Some(Generated::Str("one\ntwo".to_string()))]);
        let node = expand_to_node(parts);
        assert_eq!(node.serialize(), "return one\n       two");
    }

    #[test]
    fn closing_delimiter_flush_with_content_preserves_last_line() {
        let parts = node_parts(vec!["\n  return ", ""], vec![Some(Generated::Str("one\ntwo".to_string()))]);
        let node = expand_to_node(parts);
        assert_eq!(node.serialize(), "return one\n       two");
    }

    #[test]
    fn absent_substitution_contributes_nothing() {
        let parts = node_parts(vec!["a", "b"], vec![None]);
        let node = expand_to_node(parts);
        assert_eq!(node.serialize(), "ab");
    }

    #[test]
    fn join_to_node_basic() {
        let items = vec!["a", "b", "c"];
        let node = join_to_node(
            items,
            |s: &&str, _i, _last| Some(Generated::Str((*s).to_string())),
            JoinOptions {
                separator: Some(", "),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(node.serialize(), "a, b, c");
    }

    #[test]
    fn join_to_node_empty_iterable_is_absent() {
        let items: Vec<&str> = vec![];
        let node = join_to_node(items, |s: &&str, _i, _last| Some(Generated::Str((*s).to_string())), JoinOptions::default());
        assert!(node.is_none());
    }

    #[test]
    fn join_to_node_single_element_never_emits_separator() {
        let items = vec!["x"];
        let node = join_to_node(
            items,
            |s: &&str, _i, _last| Some(Generated::Str((*s).to_string())),
            JoinOptions {
                separator: Some(", "),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(node.serialize(), "x");
    }

    #[test]
    fn join_to_node_suppresses_leading_newline() {
        let items = vec!["a", "b", "c"];
        let node = join_to_node(
            items,
            |s: &&str, _i, _last| Some(Generated::Str((*s).to_string())),
            JoinOptions {
                separator: Some(", "),
                append_newline_if_not_empty: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(node.serialize(), "a, \nb, \nc\n");
    }
}
