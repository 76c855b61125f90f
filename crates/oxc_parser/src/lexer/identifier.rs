/// `true` if `c` can start an identifier: ASCII letter, `$`, `_`, or any
/// Unicode `ID_Start` code point (see the Unicode Standard Annex #31).
pub fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || unicode_id_start::is_id_start(c)
}

/// `true` if `c` can continue an identifier begun by
/// [`is_identifier_start`]: everything that can start one, plus
/// `ID_Continue`, zero-width joiner/non-joiner, and ASCII digits.
pub fn is_identifier_part(c: char) -> bool {
    c == '$'
        || c == '_'
        || c == '\u{200c}'
        || c == '\u{200d}'
        || c.is_ascii_digit()
        || unicode_id_start::is_id_continue(c)
}

/// Fast ASCII-only check used before falling back to the full Unicode
/// tables; most source text is ASCII identifiers.
pub fn is_ascii_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'$' || b == b'_'
}

pub fn is_ascii_identifier_part(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'$' || b == b'_'
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ascii_identifiers() {
        assert!(is_identifier_start('a'));
        assert!(is_identifier_start('_'));
        assert!(is_identifier_start('$'));
        assert!(!is_identifier_start('1'));
        assert!(is_identifier_part('1'));
    }

    #[test]
    fn unicode_identifiers() {
        assert!(is_identifier_start('\u{00e9}')); // é
        assert!(!is_identifier_start('\u{1f600}')); // emoji is not ID_Start
    }

    #[test]
    fn zero_width_joiners_continue_but_never_start() {
        assert!(!is_identifier_start('\u{200d}'));
        assert!(is_identifier_part('\u{200d}'));
    }
}
