/// The kind of newline a [`super::GeneratorNode::NewLine`] represents.
///
/// `Unconditional` always emits `\n`. `IfNotEmpty` only emits when the
/// current output line already carries at least one non-whitespace
/// character — see the serialization rules in [`super::serialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewLineKind {
    Unconditional,
    IfNotEmpty,
}
