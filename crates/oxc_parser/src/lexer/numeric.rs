use lintium_ast::NumberBase;

/// `true` for `0x`/`0X`, `0o`/`0O`, `0b`/`0B` radix prefixes.
pub fn radix_prefix_base(second: u8) -> Option<NumberBase> {
    match second {
        b'x' | b'X' => Some(NumberBase::Hex),
        b'o' | b'O' => Some(NumberBase::Octal),
        b'b' | b'B' => Some(NumberBase::Binary),
        _ => None,
    }
}

pub fn is_decimal_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

pub fn is_digit_for_base(b: u8, base: NumberBase) -> bool {
    match base {
        NumberBase::Binary => matches!(b, b'0' | b'1'),
        NumberBase::Octal | NumberBase::LegacyOctal => (b'0'..=b'7').contains(&b),
        NumberBase::Decimal => b.is_ascii_digit(),
        NumberBase::Hex => b.is_ascii_hexdigit(),
    }
}

/// `0123` (no radix prefix, all digits 0-7, not `08`/`09`) is a legacy octal
/// literal: valid only in non-strict, non-module, non-class code, and
/// always invalid if it contains `8`/`9` or a decimal point.
pub fn looks_like_legacy_octal(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() > 1
        && bytes[0] == b'0'
        && bytes[1..].iter().all(|b| (b'0'..=b'7').contains(b))
        && !raw.contains('.')
        && !raw.contains(['e', 'E'])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn detects_radix_prefixes() {
        assert_eq!(radix_prefix_base(b'x'), Some(NumberBase::Hex));
        assert_eq!(radix_prefix_base(b'o'), Some(NumberBase::Octal));
        assert_eq!(radix_prefix_base(b'b'), Some(NumberBase::Binary));
        assert_eq!(radix_prefix_base(b'9'), None);
    }

    #[test]
    fn legacy_octal_detection() {
        assert!(looks_like_legacy_octal("0123"));
        assert!(!looks_like_legacy_octal("0.123"));
        assert!(!looks_like_legacy_octal("0e5"));
        assert!(!looks_like_legacy_octal("0"));
        assert!(!looks_like_legacy_octal("08"));
        assert!(!looks_like_legacy_octal("09"));
    }
}
