//! Phone-number handling: the server identifies users by digits only, the
//! UI shows the `(AA) NNNNN-NNNN` form.

/// Minimum digit count accepted for sign-in/sign-up.
pub const MIN_DIGITS: usize = 10;

/// Strip everything but ASCII digits.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Whether the input holds enough digits to be sent to the server.
pub fn is_valid(input: &str) -> bool {
    normalize(input).len() >= MIN_DIGITS
}

/// Re-format digits for display: up to two area digits, up to five middle
/// digits, exactly four trailing digits. Inputs with fewer than five digits
/// come back as bare digits.
pub fn mask(input: &str) -> String {
    let digits = normalize(input);
    let n = digits.len();
    if n < 5 {
        return digits;
    }

    let area = (n - 4).min(2);
    let mid = (n - 4 - area).min(5);
    format!(
        "({}) {}-{}",
        &digits[..area],
        &digits[area..area + mid],
        &digits[area + mid..area + mid + 4]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_formatting() {
        assert_eq!(normalize("(11) 98888-7777"), "11988887777");
        assert_eq!(normalize(" 11 9.8888 7777 "), "11988887777");
        assert_eq!(normalize("abc"), "");
    }

    #[test]
    fn test_mask_eleven_digits() {
        assert_eq!(mask("11988887777"), "(11) 98888-7777");
    }

    #[test]
    fn test_mask_ten_digits() {
        assert_eq!(mask("1198888777"), "(11) 9888-8777");
    }

    #[test]
    fn test_mask_short_input_left_as_digits() {
        assert_eq!(mask("9888"), "9888");
        assert_eq!(mask("(12) 3"), "123");
    }

    #[test]
    fn test_mask_ignores_existing_formatting() {
        assert_eq!(mask("(11) 98888-7777"), "(11) 98888-7777");
    }

    #[test]
    fn test_mask_drops_digits_past_eleven() {
        assert_eq!(mask("119888877770000"), "(11) 98888-7777");
    }

    #[test]
    fn test_validation_boundary() {
        assert!(!is_valid("119888877"));
        assert!(is_valid("1198888777"));
        assert!(is_valid("(11) 98888-7777"));
    }

    proptest! {
        #[test]
        fn test_normalize_is_idempotent(input in "\\PC*") {
            let once = normalize(&input);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn test_mask_round_trips_digits(digits in "[0-9]{5,11}") {
            prop_assert_eq!(normalize(&mask(&digits)), digits);
        }
    }
}
