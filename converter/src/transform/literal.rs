//! Build the `examples` literal block of an NLU entry.

/// Marker each example line starts with.
pub const EXAMPLE_MARKER: &str = "- ";

/// Join texts into a literal block, one `- text\n` line each.
///
/// No texts gives an empty block.
pub fn examples_block<'a, I>(texts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut block = String::new();
    for text in texts {
        block.push_str(EXAMPLE_MARKER);
        block.push_str(text);
        block.push('\n');
    }
    block
}
