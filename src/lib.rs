//! A composable generator-node tree for indentation-correct text
//! generation, with a tagged-template-style builder for splicing
//! substitutions into whitespace-sensitive templates.
//!
//! Three layers, bottom to top:
//!
//! - [`node`]: the `GeneratorNode` tree itself (`Text`/`NewLine`/`Indent`/
//!   `Composite`) and its [`node::CompositeGeneratorNode::serialize`] walk.
//! - [`strings`]: pure helpers (canonical newline splitting, common-indent
//!   detection) shared by the serializer and the template builder.
//! - [`template`]: [`template::expand_to_node`], the whitespace-aware
//!   splicing builder, and [`template::join_to_node`] for iterable joining.
//!
//! [`generated`] cuts across all three: [`generated::Generated`] and its
//! [`generated::IntoGenerated`] conversions are what every `append`-style
//! method accepts, so callers rarely construct tree nodes by hand.

pub mod generated;
pub mod node;
pub mod strings;
pub mod template;

pub use generated::is_generator_node;
pub use generated::Generated;
pub use generated::IntoGenerated;
pub use node::CompositeGeneratorNode;
pub use node::GeneratorNode;
pub use node::IndentNode;
pub use node::IndentOptions;
pub use node::IndentationOptions;
pub use node::NewLineKind;
pub use node::SerializedOutput;
pub use node::SourceRegion;
pub use node::TracedRange;
pub use node::DEFAULT_INDENTATION;
pub use strings::expand_to_string;
pub use strings::expand_to_string_with_nl;
pub use strings::find_indentation;
pub use strings::normalize_eol;
pub use strings::split_newlines;
pub use template::display_to_generated;
pub use template::expand_to_node;
pub use template::join_to_node;
pub use template::JoinOptions;
pub use template::TemplateParts;
