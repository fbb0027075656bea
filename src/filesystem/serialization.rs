use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::filesystem::FilesystemNode;

/// Files serialize as `null`, directories as maps in child order. Recurses once
/// per level, see [`MAX_RENDER_DEPTH`](crate::filesystem::MAX_RENDER_DEPTH).
impl Serialize for FilesystemNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FilesystemNode::File => serializer.serialize_unit(),
            FilesystemNode::Directory { children } => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (name, child) in children {
                    map.serialize_entry(name, child)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_are_null_and_directories_are_objects() {
        let tree = FilesystemNode::from_string_paths(["root/empty/", "root/a.txt"]);
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, r#"{"root":{"a.txt":null,"empty":{}}}"#);
    }

    #[test]
    fn empty_root_is_empty_object() {
        let json = serde_json::to_string(&FilesystemNode::root()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn key_order_follows_the_tree_not_serde_json() {
        let tree = FilesystemNode::from_string_paths(["zeta", "alpha/", "Mid"]);
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, r#"{"Mid":null,"alpha":{},"zeta":null}"#);
    }

    #[test]
    fn worked_example_pretty_json() {
        let tree = FilesystemNode::from_string_paths([
            "root/folderA/file1.txt",
            "root/folderB/file2.txt",
            "root/folderA/file3.txt",
            "root/folderB/file2.txt",
            "root/folderA/file1.txt",
            "root/folderB/folderC/file4.txt",
            "root/folderEmpty/",
            "root/folderWithSlash/file5.txt",
            "root/folderWithSlash/",
            "root\\folderMixed\\file6.txt",
        ]);
        let expected = r#"{
  "root": {
    "folderA": {
      "file1.txt": null,
      "file3.txt": null
    },
    "folderB": {
      "file2.txt": null,
      "folderC": {
        "file4.txt": null
      }
    },
    "folderEmpty": {},
    "folderMixed": {
      "file6.txt": null
    },
    "folderWithSlash": {
      "file5.txt": null
    }
  }
}"#;
        assert_eq!(serde_json::to_string_pretty(&tree).unwrap(), expected);
    }
}
