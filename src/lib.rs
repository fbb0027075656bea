//! Builds sorted directory trees out of flat lists of path strings.
//!
//! ```
//! use pathtree::filesystem::FilesystemNode;
//!
//! let tree = FilesystemNode::from_string_paths(["root/b.txt", "root\\a\\", "root/b.txt"]);
//! assert_eq!(
//!     serde_json::to_string(&tree).unwrap(),
//!     r#"{"root":{"a":{},"b.txt":null}}"#
//! );
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod ext;
pub mod filesystem;
