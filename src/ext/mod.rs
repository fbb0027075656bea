mod separator_ext;

pub use separator_ext::{SEPARATORS, SeparatorExt};
