use crate::node::CompositeGeneratorNode;
use crate::node::GeneratorNode;

/// Anything that can contribute to generated output: a string, a node, or
/// nothing at all. Matches the "Generated" type from the data model: only
/// the *absence* of a value (never an empty string) suppresses separators
/// and conditional newlines — see [`IntoGenerated`].
#[derive(Debug, Clone)]
pub enum Generated {
    Str(String),
    Node(GeneratorNode),
}

/// Converts ordinary Rust values into `Option<Generated>`, the type every
/// `append`-like method accepts. `None` means "contribute nothing" — no
/// text, no node, and (in `join_to_node`) no separator either.
///
/// Implemented for `&str`, `String`, `GeneratorNode`, `CompositeGeneratorNode`,
/// and `Option<T>` for any `T: IntoGenerated`, so callers rarely need to
/// construct a `Generated` by hand.
pub trait IntoGenerated {
    fn into_generated(self) -> Option<Generated>;
}

impl IntoGenerated for Generated {
    fn into_generated(self) -> Option<Generated> {
        Some(self)
    }
}

impl IntoGenerated for &str {
    fn into_generated(self) -> Option<Generated> {
        Some(Generated::Str(self.to_string()))
    }
}

impl IntoGenerated for String {
    fn into_generated(self) -> Option<Generated> {
        Some(Generated::Str(self))
    }
}

impl IntoGenerated for &String {
    fn into_generated(self) -> Option<Generated> {
        Some(Generated::Str(self.clone()))
    }
}

impl IntoGenerated for GeneratorNode {
    fn into_generated(self) -> Option<Generated> {
        Some(Generated::Node(self))
    }
}

impl IntoGenerated for CompositeGeneratorNode {
    fn into_generated(self) -> Option<Generated> {
        Some(Generated::Node(GeneratorNode::Composite(self)))
    }
}

impl<T> IntoGenerated for Option<T>
where
    T: IntoGenerated,
{
    fn into_generated(self) -> Option<Generated> {
        self.and_then(IntoGenerated::into_generated)
    }
}

/// True iff `value` holds a generator node rather than a plain string.
///
/// Mirrors the dynamically-typed `isGeneratorNode` predicate from the
/// source data model; in Rust the distinction is already encoded in the
/// `Generated` enum, so this is a one-line pattern match kept around for
/// parity with the public interface callers expect.
#[must_use]
pub fn is_generator_node(value: &Generated) -> bool {
    matches!(value, Generated::Node(_))
}
