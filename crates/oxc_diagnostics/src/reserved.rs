/// Codes that used to name a diagnostic kind but no longer do.
///
/// When a diagnostic kind is removed from [`crate::table`], its code moves
/// here instead of being deleted outright or handed to a new kind: codes are
/// part of the wire format (`E0xxx` appears in editor integrations, CI
/// annotations, suppression comments), so reusing one would silently
/// repurpose someone's existing `// lintium-disable E0242` comment.
pub const RESERVED_CODES: &[&str] = &["E0242", "E0271", "E0279", "E0707"];

#[cfg(test)]
mod test {
    use super::RESERVED_CODES;
    use crate::ALL_DIAGNOSTIC_KINDS;

    #[test]
    fn reserved_codes_are_not_reused() {
        for code in RESERVED_CODES {
            assert!(
                ALL_DIAGNOSTIC_KINDS.iter().all(|kind| kind.code() != *code),
                "reserved code {code} must not be reassigned to a live diagnostic kind"
            );
        }
    }
}
