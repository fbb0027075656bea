use std::collections::BTreeSet;
use std::ops::Bound;

use hashlink::LinkedHashMap;
use tracing::{debug, info};

use crate::filesystem::NormalizedPath;

/// Represents the type of a filesystem node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilesystemNode {
    File,
    Directory {
        children: LinkedHashMap<String, FilesystemNode>,
    },
}

impl FilesystemNode {
    /// Builds a sorted tree out of raw path strings.
    ///
    /// Paths may use `/` or `\`, repeat separators, or end with a separator to
    /// mark an (possibly empty) directory. Duplicates collapse into one node, a
    /// segment that is an ancestor of any other path is always a directory, and
    /// children are ordered by name at every level. Entries that normalize to
    /// nothing are skipped, so this never fails.
    pub fn from_string_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut distinct: LinkedHashMap<String, NormalizedPath> = LinkedHashMap::new();
        let mut raw_count = 0usize;

        for raw in paths {
            raw_count += 1;
            let Some(normalized) = NormalizedPath::parse(raw.as_ref()) else {
                debug!("Skipping path with no segments: {:?}", raw.as_ref());
                continue;
            };
            match distinct.get_mut(normalized.as_str()) {
                Some(existing) => existing.merge(&normalized),
                None => {
                    distinct.insert(normalized.as_str().to_string(), normalized);
                }
            }
        }
        debug!(
            "Normalized {} raw paths into {} distinct paths",
            raw_count,
            distinct.len()
        );

        let sorted = distinct.keys().map(String::as_str).collect::<BTreeSet<_>>();

        let mut root = Self::root();
        for path in distinct.values() {
            let is_directory =
                path.is_explicit_directory() || has_descendant(&sorted, path.as_str());
            root.insert_path(path, is_directory);
        }
        root.sort_recursive();

        info!(
            "Built tree with {} files and {} directories",
            root.file_count(),
            root.directory_count()
        );
        root
    }

    /// Inserts a single normalized path below this node.
    ///
    /// Intermediate segments become directories. The last segment becomes a
    /// directory or a file depending on `is_directory`; an existing directory is
    /// never downgraded to a file. Inserting into a file promotes it to an empty
    /// directory first.
    pub fn insert_path(&mut self, path: &NormalizedPath, is_directory: bool) {
        let mut segments = path.segments().peekable();
        let mut current = self;

        while let Some(segment) = segments.next() {
            let children = current.promote_to_directory();

            if segments.peek().is_none() {
                match children.get_mut(segment) {
                    Some(existing) if is_directory => {
                        existing.promote_to_directory();
                    }
                    Some(_) => {
                        debug!("Keeping existing node for '{}'", path);
                    }
                    None => {
                        let leaf = if is_directory {
                            Self::empty_directory()
                        } else {
                            Self::File
                        };
                        children.insert(segment.to_string(), leaf);
                    }
                }
                return;
            }

            current = children
                .entry(segment.to_string())
                .or_insert_with(Self::empty_directory);
        }
    }

    /// Reorders children by name at every depth.
    pub fn sort_recursive(&mut self) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            let FilesystemNode::Directory { children } = node else {
                continue;
            };
            let mut entries = std::mem::take(children).into_iter().collect::<Vec<_>>();
            entries.sort_by(|(left, _), (right, _)| left.cmp(right));
            children.extend(entries);
            pending.extend(children.values_mut());
        }
    }

    pub fn root() -> Self {
        Self::empty_directory()
    }

    fn empty_directory() -> Self {
        FilesystemNode::Directory {
            children: LinkedHashMap::new(),
        }
    }

    fn promote_to_directory(&mut self) -> &mut LinkedHashMap<String, FilesystemNode> {
        if let FilesystemNode::File = self {
            *self = Self::empty_directory();
        }
        match self {
            FilesystemNode::Directory { children } => children,
            FilesystemNode::File => unreachable!("file nodes were promoted above"),
        }
    }
}

/// Tears the tree down from a heap stack so that dropping a deep chain of
/// directories does not recurse once per level.
impl Drop for FilesystemNode {
    fn drop(&mut self) {
        let FilesystemNode::Directory { children } = self else {
            return;
        };
        if children.is_empty() {
            return;
        }
        let mut pending = std::mem::take(children)
            .into_iter()
            .map(|(_, child)| child)
            .collect::<Vec<_>>();
        while let Some(mut node) = pending.pop() {
            if let FilesystemNode::Directory { children } = &mut node {
                pending.extend(std::mem::take(children).into_iter().map(|(_, child)| child));
            }
        }
    }
}

/// Whether any path in `sorted` lies below `path`. Paths sharing the `path/`
/// prefix form a contiguous run starting at the first entry not less than it.
fn has_descendant(sorted: &BTreeSet<&str>, path: &str) -> bool {
    let prefix = format!("{path}/");
    sorted
        .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
        .next()
        .is_some_and(|next| next.starts_with(&prefix))
}
