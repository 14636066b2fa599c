//! Swedish national identifier (personnummer) validation and masking
//!
//! A personnummer is a 10-digit identifier (`YYMMDD-NNNC`), optionally
//! written with a 4-digit year (`YYYYMMDD-NNNC`). The final digit is a
//! checksum over the preceding nine, computed with the Luhn variant used
//! by Skatteverket: alternating 2/1 multipliers starting from the first
//! digit, digit-sum folding of two-digit products.

/// Placeholder used for the masked portion of an identifier.
const MASK_PLACEHOLDER: &str = "********";

/// Validate a personnummer candidate.
///
/// Separators (`-`, `+`, spaces) are stripped first. Both the 10-digit
/// and 12-digit forms are accepted; the checksum always covers the last
/// 10 digits. Anything non-numeric or of the wrong length is simply
/// invalid; this function never panics.
pub fn validate(candidate: &str) -> bool {
    let digits = match normalize(candidate) {
        Some(d) => d,
        None => return false,
    };

    let last_ten = &digits[digits.len() - 10..];
    let check = check_digit(&last_ten[..9]);
    check == last_ten[9]
}

/// Mask a personnummer, revealing only the birth year.
///
/// The 12-digit form keeps its first four digits; the 10-digit form has
/// its two-digit year expanded with a `19` century prefix. Everything
/// else is replaced with a fixed placeholder. Input that doesn't parse
/// as an identifier masks to the bare placeholder.
pub fn mask(candidate: &str) -> String {
    let stripped: String = candidate
        .chars()
        .filter(|c| !matches!(c, '-' | '+' | ' '))
        .collect();

    if !stripped.chars().all(|c| c.is_ascii_digit()) {
        return MASK_PLACEHOLDER.to_string();
    }

    match stripped.len() {
        12 => format!("{}{}", &stripped[..4], MASK_PLACEHOLDER),
        10 => format!("19{}{}", &stripped[..2], MASK_PLACEHOLDER),
        _ => MASK_PLACEHOLDER.to_string(),
    }
}

/// Strip separators and return the digits, or `None` if the candidate is
/// non-numeric or not a 10/12-digit form.
fn normalize(candidate: &str) -> Option<Vec<u32>> {
    let mut digits = Vec::with_capacity(12);
    for c in candidate.chars() {
        match c {
            '-' | '+' | ' ' => continue,
            _ => digits.push(c.to_digit(10)?),
        }
    }

    if digits.len() == 10 || digits.len() == 12 {
        Some(digits)
    } else {
        None
    }
}

/// Compute the checksum digit for the first nine digits of the 10-digit form.
fn check_digit(first_nine: &[u32]) -> u32 {
    let mut sum = 0;
    for (i, &d) in first_nine.iter().enumerate() {
        let mut product = d * if i % 2 == 0 { 2 } else { 1 };
        if product > 9 {
            product -= 9;
        }
        sum += product;
    }
    (10 - sum % 10) % 10
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    /// Build a valid identifier from its first nine digits.
    fn with_checksum(first_nine: &str) -> String {
        let digits: Vec<u32> = first_nine.chars().map(|c| c.to_digit(10).unwrap()).collect();
        format!("{}{}", first_nine, check_digit(&digits))
    }

    #[test_case("640823323"; "classic test number")]
    #[test_case("811218987"; "eighties birth date")]
    #[test_case("000101000"; "millennium date")]
    #[test_case("550713123"; "fifties birth date")]
    fn test_constructed_identifiers_validate(first_nine: &str) {
        let id = with_checksum(first_nine);
        assert!(validate(&id), "{id} should validate");
    }

    #[test]
    fn test_separator_and_century_forms() {
        let id = with_checksum("640823323");
        let with_sep = format!("{}-{}", &id[..6], &id[6..]);
        let twelve = format!("19{id}");
        let twelve_sep = format!("19{}-{}", &id[..6], &id[6..]);

        assert!(validate(&with_sep));
        assert!(validate(&twelve));
        assert!(validate(&twelve_sep));
        assert!(validate(&format!("{}+{}", &id[..6], &id[6..])));
    }

    #[test]
    fn test_single_digit_mutations_fail() {
        // Exhaustive: flipping any one digit of a valid identifier must
        // break the checksum.
        let id = with_checksum("640823323");
        for pos in 0..id.len() {
            let original = id.as_bytes()[pos] - b'0';
            for replacement in 0..10u8 {
                if replacement == original {
                    continue;
                }
                let mut mutated = id.clone().into_bytes();
                mutated[pos] = b'0' + replacement;
                let mutated = String::from_utf8(mutated).unwrap();
                assert!(
                    !validate(&mutated),
                    "mutation at {pos} ({id} -> {mutated}) should fail"
                );
            }
        }
    }

    #[test_case(""; "empty")]
    #[test_case("64082"; "too short")]
    #[test_case("64082332345678"; "too long")]
    #[test_case("6408233X34"; "non numeric")]
    #[test_case("abcdefghij"; "letters")]
    fn test_invalid_input_returns_false(candidate: &str) {
        assert!(!validate(candidate));
    }

    #[test]
    fn test_mask_ten_digit_form_expands_century() {
        let masked = mask("640823-3234");
        assert_eq!(masked, "1964********");
    }

    #[test]
    fn test_mask_twelve_digit_form_keeps_year() {
        let masked = mask("19640823-3234");
        assert_eq!(masked, "1964********");
        assert_eq!(mask("196408233234"), "1964********");
    }

    #[test]
    fn test_mask_never_reveals_more_than_year() {
        let id = with_checksum("640823323");
        let masked = mask(&id);
        // Only the first two original digits survive (as part of the
        // expanded year); the serial and checksum must be gone.
        assert!(!masked.contains(&id[2..]));
        assert!(masked.ends_with(MASK_PLACEHOLDER));
    }

    #[test]
    fn test_mask_invalid_input_is_fully_masked() {
        assert_eq!(mask("not-a-number"), MASK_PLACEHOLDER);
        assert_eq!(mask("123"), MASK_PLACEHOLDER);
    }
}
