/// Number of extra `\0` bytes appended past the logical end of the buffer.
///
/// One sentinel byte is enough to let the lexer peek one byte past any
/// position without a bounds check; we keep a few more so that multi-byte
/// lookahead (e.g. scanning for `>>>`) never needs a bounds check either.
const PADDING: usize = 4;

/// An immutable, padded owner of UTF-8 source bytes.
///
/// Every [`Span`](crate::Span) handed out by the lexer or parser is a pair of
/// offsets into one `SourceText`; those offsets stay valid for as long as
/// this buffer is alive. The buffer is over-allocated with zero bytes past
/// its logical end so lookahead code can read one byte past the last real
/// character without a branch.
pub struct SourceText {
    /// `text.len()` bytes of real source, followed by [`PADDING`] zero bytes.
    buffer: std::string::String,
    text_len: u32,
}

impl SourceText {
    pub fn new(source: &str) -> Self {
        let mut buffer = std::string::String::with_capacity(source.len() + PADDING);
        buffer.push_str(source);
        for _ in 0..PADDING {
            buffer.push('\0');
        }
        Self { buffer, text_len: u32::try_from(source.len()).expect("source exceeds 4 GiB") }
    }

    /// The logical (unpadded) source text.
    pub fn as_str(&self) -> &str {
        &self.buffer[..self.text_len as usize]
    }

    /// Raw bytes including the zero-byte padding; safe to index one byte
    /// past `len()` for single-byte lookahead.
    pub fn data(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Length of the logical source, in bytes.
    pub fn len(&self) -> u32 {
        self.text_len
    }

    pub fn is_empty(&self) -> bool {
        self.text_len == 0
    }

    /// Byte at `pos`, or `\0` if `pos` is at or past the logical end.
    ///
    /// Reading within the padding region never panics; this is the main
    /// reason the buffer carries padding at all.
    pub fn byte_at(&self, pos: u32) -> u8 {
        self.buffer.as_bytes()[pos as usize]
    }
}

#[cfg(test)]
mod test {
    use super::SourceText;

    #[test]
    fn empty_buffer_still_has_sentinel() {
        let source = SourceText::new("");
        assert_eq!(source.len(), 0);
        assert_eq!(source.byte_at(0), 0);
    }

    #[test]
    fn lookahead_past_end_is_zero() {
        let source = SourceText::new("ab");
        assert_eq!(source.byte_at(2), 0);
        assert_eq!(source.byte_at(3), 0);
    }

    #[test]
    fn as_str_excludes_padding() {
        let source = SourceText::new("hello");
        assert_eq!(source.as_str(), "hello");
    }
}
