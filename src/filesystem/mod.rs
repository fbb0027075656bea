//! Path tree construction from flat path lists.
//!
//! Raw path strings are normalized into [`NormalizedPath`]s, deduplicated,
//! classified as files or directories and folded into a single sorted
//! [`FilesystemNode`] tree. Nothing here touches the real filesystem.

mod inspect;
mod normalize;
mod render;
mod serialization;
mod tree;

pub use normalize::NormalizedPath;
pub use render::MAX_RENDER_DEPTH;
pub use tree::FilesystemNode;
