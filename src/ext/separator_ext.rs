/// Characters accepted as path separators in raw input.
pub const SEPARATORS: [char; 2] = ['/', '\\'];

pub trait SeparatorExt {
    /// Whether the string ends with `/` or `\`.
    fn ends_with_separator(&self) -> bool;
    /// Splits on either separator, dropping the empty pieces left by leading,
    /// trailing or repeated separators.
    fn path_segments(&self) -> impl Iterator<Item = &str>;
}

impl SeparatorExt for str {
    fn ends_with_separator(&self) -> bool {
        self.ends_with(SEPARATORS)
    }

    fn path_segments(&self) -> impl Iterator<Item = &str> {
        self.split(SEPARATORS).filter(|segment| !segment.is_empty())
    }
}
