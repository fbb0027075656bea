use hashlink::LinkedHashMap;

use crate::ext::SeparatorExt;
use crate::filesystem::FilesystemNode;

impl FilesystemNode {
    pub fn is_file(&self) -> bool {
        matches!(self, FilesystemNode::File)
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, FilesystemNode::Directory { .. })
    }

    /// Children of a directory, `None` for files.
    pub fn children(&self) -> Option<&LinkedHashMap<String, FilesystemNode>> {
        match self {
            FilesystemNode::Directory { children } => Some(children),
            FilesystemNode::File => None,
        }
    }

    /// Looks up a descendant. The path is split the same way input paths are,
    /// so `a\b`, `a//b/` and `a/b` all resolve to the same node. An empty path
    /// resolves to `self`.
    pub fn get(&self, path: &str) -> Option<&FilesystemNode> {
        path.path_segments()
            .try_fold(self, |node, segment| node.children()?.get(segment))
    }

    /// Number of file leaves below this node.
    pub fn file_count(&self) -> usize {
        if self.is_file() {
            return 1;
        }
        self.descendants().filter(|node| node.is_file()).count()
    }

    /// Number of directories below this node, not counting the node itself.
    pub fn directory_count(&self) -> usize {
        self.descendants().filter(|node| node.is_directory()).count()
    }

    /// Number of levels below this node: `0` for files and empty directories,
    /// `2` for a root holding `a/b`.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            if let Some(children) = node.children() {
                pending.extend(children.values().map(|child| (child, depth + 1)));
            }
        }
        deepest
    }

    /// Every node below this one, in no particular order.
    fn descendants(&self) -> impl Iterator<Item = &FilesystemNode> {
        let mut pending = self
            .children()
            .into_iter()
            .flat_map(LinkedHashMap::values)
            .collect::<Vec<_>>();
        std::iter::from_fn(move || {
            let node = pending.pop()?;
            if let Some(children) = node.children() {
                pending.extend(children.values());
            }
            Some(node)
        })
    }

    /// Flattens the tree back into normalized paths, in tree order.
    ///
    /// Files come out as `a/b.txt`, empty directories as `a/empty/`. Directories
    /// with children are implied by their descendants. Building a tree from the
    /// result reproduces this tree.
    pub fn to_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        let mut current = String::new();
        let mut pending: Vec<(usize, &str, &FilesystemNode)> = Vec::new();
        if let Some(children) = self.children() {
            pending.extend(
                children
                    .iter()
                    .rev()
                    .map(|(name, child)| (0, name.as_str(), child)),
            );
        }

        // `current` always holds the path of the node popped last, so truncating
        // it to the recorded length restores the parent of the next entry.
        while let Some((parent_len, name, node)) = pending.pop() {
            current.truncate(parent_len);
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(name);

            match node.children() {
                None => paths.push(current.clone()),
                Some(children) if children.is_empty() => paths.push(format!("{current}/")),
                Some(children) => {
                    let len = current.len();
                    pending.extend(
                        children
                            .iter()
                            .rev()
                            .map(|(name, child)| (len, name.as_str(), child)),
                    );
                }
            }
        }
        paths
    }
}
