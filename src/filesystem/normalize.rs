use derive_more::Display;

use crate::ext::SeparatorExt;

/// A raw path reduced to its canonical `/`-joined form.
///
/// `explicit_directory` records whether the raw string ended with a separator.
/// It must be captured before the trailing separator is dropped, since it is the
/// only thing that keeps an otherwise childless entry from becoming a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{path}")]
pub struct NormalizedPath {
    path: String,
    explicit_directory: bool,
}

impl NormalizedPath {
    /// Normalizes a raw path.
    ///
    /// Backslashes count as separators, runs of separators collapse, and leading
    /// or trailing separators leave no empty segment behind. Returns `None` when
    /// nothing remains: empty, whitespace-only and separator-only inputs.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        let path = raw.path_segments().collect::<Vec<_>>().join("/");
        if path.is_empty() {
            return None;
        }

        Some(Self {
            path,
            explicit_directory: raw.ends_with_separator(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn is_explicit_directory(&self) -> bool {
        self.explicit_directory
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/')
    }

    /// Folds another raw variant of the same path into this one.
    pub(crate) fn merge(&mut self, other: &NormalizedPath) {
        self.explicit_directory |= other.explicit_directory;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("root/folderA/file1.txt", "root/folderA/file1.txt", false)]
    #[case("root\\folderMixed\\file6.txt", "root/folderMixed/file6.txt", false)]
    #[case("root/folderEmpty/", "root/folderEmpty", true)]
    #[case("root\\folderEmpty\\", "root/folderEmpty", true)]
    #[case("root//a///b.txt", "root/a/b.txt", false)]
    #[case("/absolute/path", "absolute/path", false)]
    #[case("\\\\server\\share\\", "server/share", true)]
    #[case("a//", "a", true)]
    #[case(" a /b", " a /b", false)]
    fn parse_normalizes_separators(
        #[case] raw: &str,
        #[case] expected: &str,
        #[case] explicit_directory: bool,
    ) {
        let normalized = NormalizedPath::parse(raw).expect("path should survive normalization");
        assert_eq!(normalized.as_str(), expected);
        assert_eq!(normalized.is_explicit_directory(), explicit_directory);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    #[case("/")]
    #[case("\\\\//")]
    fn parse_rejects_degenerate_input(#[case] raw: &str) {
        assert_eq!(NormalizedPath::parse(raw), None);
    }

    #[test]
    fn segments_follow_normalized_form() {
        let normalized = NormalizedPath::parse("\\a//b\\c.txt").unwrap();
        assert_eq!(normalized.segments().collect::<Vec<_>>(), vec!["a", "b", "c.txt"]);
    }

    #[test]
    fn merge_keeps_explicit_directory_signal() {
        let mut bare = NormalizedPath::parse("root/folderWithSlash").unwrap();
        let slashed = NormalizedPath::parse("root/folderWithSlash/").unwrap();
        assert_eq!(bare.as_str(), slashed.as_str());

        bare.merge(&slashed);
        assert!(bare.is_explicit_directory());

        let mut slashed_first = slashed.clone();
        slashed_first.merge(&NormalizedPath::parse("root\\folderWithSlash").unwrap());
        assert!(slashed_first.is_explicit_directory());
    }

    #[test]
    fn display_shows_normalized_form() {
        let normalized = NormalizedPath::parse("x\\y\\").unwrap();
        assert_eq!(normalized.to_string(), "x/y");
    }
}
