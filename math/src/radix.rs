//! Positional decoding of digit strings in arbitrary bases up to 36.

use num_bigint::BigInt;

use crate::error::RadixError;

/// Ordered digit alphabet shared by every supported base.
const ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Smallest base the alphabet can express.
pub const MIN_BASE: u32 = 2;
/// Largest base the alphabet can express.
pub const MAX_BASE: u32 = 36;

/// Value of a single digit character, if it belongs to the alphabet.
fn digit_value(ch: char) -> Option<u32> {
    ALPHABET.find(ch.to_ascii_lowercase()).map(|idx| idx as u32)
}

/// Decode a digit string in the given base into an integer.
///
/// Characters are processed most significant first, growing an accumulator as
/// `result * base + digit`. Digits are case-insensitive and must map to a
/// value strictly below `base`; anything else fails the whole decode with no
/// partial result.
pub fn decode(digits: &str, base: u32) -> Result<BigInt, RadixError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(RadixError::UnsupportedBase(base));
    }
    if digits.is_empty() {
        return Err(RadixError::EmptyDigits);
    }

    let mut result = BigInt::from(0u32);
    for ch in digits.chars() {
        let digit = digit_value(ch)
            .filter(|&d| d < base)
            .ok_or(RadixError::InvalidDigit { digit: ch, base })?;
        result = result * base + digit;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn test_decodes_positional_values() {
        assert_eq!(decode("10", 10).unwrap(), BigInt::from(10));
        assert_eq!(decode("111", 2).unwrap(), BigInt::from(7));
        // 2*16 + 1*4 + 3
        assert_eq!(decode("213", 4).unwrap(), BigInt::from(39));
        assert_eq!(decode("0", 2).unwrap(), BigInt::from(0));
        assert_eq!(decode("z", 36).unwrap(), BigInt::from(35));
    }

    #[test]
    fn test_decodes_beyond_64_bits() {
        let value = decode("45153788322a1255483", 12).unwrap();
        assert_eq!(value.to_string(), "117852986202006511971");

        let value = decode("1101613130313526312514143", 7).unwrap();
        assert_eq!(value.to_string(), "220003896831595324801");
        assert!(value > BigInt::from(u64::MAX));
    }

    #[test]
    fn test_case_insensitive() {
        let lower = decode("aed7015a346d635", 15).unwrap();
        let upper = decode("AED7015A346D635", 15).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.to_string(), "320923294898495900");
    }

    #[test]
    fn test_rejects_digit_at_or_above_base() {
        assert_eq!(
            decode("2", 2),
            Err(RadixError::InvalidDigit { digit: '2', base: 2 })
        );
        assert_eq!(
            decode("1a2", 10),
            Err(RadixError::InvalidDigit { digit: 'a', base: 10 })
        );
        assert!(decode("g", 16).is_err());
    }

    #[test]
    fn test_rejects_out_of_alphabet_characters() {
        assert_eq!(
            decode("12%4", 10),
            Err(RadixError::InvalidDigit { digit: '%', base: 10 })
        );
        assert!(decode(" 12", 10).is_err());
        assert!(decode("-12", 10).is_err());
    }

    #[test]
    fn test_rejects_unsupported_bases() {
        assert_eq!(decode("101", 1), Err(RadixError::UnsupportedBase(1)));
        assert_eq!(decode("101", 0), Err(RadixError::UnsupportedBase(0)));
        assert_eq!(decode("101", 37), Err(RadixError::UnsupportedBase(37)));
    }

    #[test]
    fn test_rejects_empty_digits() {
        assert_eq!(decode("", 10), Err(RadixError::EmptyDigits));
    }

    #[quickcheck]
    fn prop_matches_positional_arithmetic(base: u8, raw: Vec<u8>) -> bool {
        let base = 2 + u32::from(base) % 35;
        if raw.is_empty() {
            return true;
        }

        let values: Vec<u32> = raw.iter().map(|&d| u32::from(d) % base).collect();
        let digits: String = values
            .iter()
            .map(|&d| ALPHABET.as_bytes()[d as usize] as char)
            .collect();
        let expected = values
            .iter()
            .fold(BigInt::zero(), |acc, &d| acc * base + d);

        decode(&digits, base) == Ok(expected)
    }

    #[quickcheck]
    fn prop_uppercase_equals_lowercase(base: u8, raw: Vec<u8>) -> bool {
        let base = 2 + u32::from(base) % 35;
        if raw.is_empty() {
            return true;
        }

        let digits: String = raw
            .iter()
            .map(|&d| ALPHABET.as_bytes()[(u32::from(d) % base) as usize] as char)
            .collect();

        decode(&digits.to_uppercase(), base) == decode(&digits, base)
    }
}
