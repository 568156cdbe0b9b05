//! Legal notice written next to every set of bearing files.

/// Disclaimer text. Must stay byte-identical to the published notice.
pub const DISCLAIMER: &str = include_str!("../assets/disclaimer.txt");
