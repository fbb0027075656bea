use colored::Colorize;

use crate::filesystem::FilesystemNode;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Deepest tree the recursive writers (this renderer and the `Serialize` impl)
/// are handed by the application. Both recurse once per level.
pub const MAX_RENDER_DEPTH: usize = 512;

impl FilesystemNode {
    /// Renders the tree with box-drawing connectors, one entry per line.
    ///
    /// Directories carry a trailing `/` and, when `color` is set, are drawn in
    /// bold blue. The root itself is not printed. Recurses once per level, see
    /// [`MAX_RENDER_DEPTH`].
    pub fn render_tree(&self, color: bool) -> String {
        let mut out = String::new();
        self.render_children("", color, &mut out);
        out
    }

    fn render_children(&self, indent: &str, color: bool, out: &mut String) {
        let Some(children) = self.children() else {
            return;
        };
        let last_index = children.len().saturating_sub(1);
        for (index, (name, child)) in children.iter().enumerate() {
            let (connector, continuation) = if index == last_index {
                (LAST_BRANCH, SPACE)
            } else {
                (BRANCH, PIPE)
            };

            let label = match child {
                FilesystemNode::File => name.clone(),
                FilesystemNode::Directory { .. } if color => {
                    format!("{name}/").blue().bold().to_string()
                }
                FilesystemNode::Directory { .. } => format!("{name}/"),
            };
            out.push_str(&format!("{indent}{connector}{label}\n"));

            child.render_children(&format!("{indent}{continuation}"), color, out);
        }
    }
}
