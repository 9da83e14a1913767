//! Normalisation of raw user input to whole numbers.
//!
//! Both the interval and entered numbers go through the same rule: take the
//! absolute value, truncate toward zero, and reject anything that is not a
//! number at all. Text is read like a prefix parse: leading whitespace, an
//! optional sign, then at least one decimal digit. Trailing junk is ignored.

use crate::error::ValidationError;

/// Raw input that can be normalised to a non-negative integer.
pub trait WholeNumber {
    /// `None` means the input is not a number and must be ignored.
    fn to_whole(&self) -> Option<u64>;
}

impl WholeNumber for u64 {
    fn to_whole(&self) -> Option<u64> {
        Some(*self)
    }
}

impl WholeNumber for u32 {
    fn to_whole(&self) -> Option<u64> {
        Some(u64::from(*self))
    }
}

impl WholeNumber for i64 {
    fn to_whole(&self) -> Option<u64> {
        Some(self.unsigned_abs())
    }
}

impl WholeNumber for i32 {
    fn to_whole(&self) -> Option<u64> {
        Some(u64::from(self.unsigned_abs()))
    }
}

impl WholeNumber for f64 {
    fn to_whole(&self) -> Option<u64> {
        if !self.is_finite() {
            return None;
        }
        let whole = self.abs().trunc();
        // u64::MAX as f64 rounds up to 2^64, which is already out of range.
        if whole >= u64::MAX as f64 {
            return None;
        }
        Some(whole as u64)
    }
}

impl WholeNumber for str {
    fn to_whole(&self) -> Option<u64> {
        let s = self.trim_start();
        let s = s
            .strip_prefix('-')
            .or_else(|| s.strip_prefix('+'))
            .unwrap_or(s);
        let digits_end = s
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(s.len());
        if digits_end == 0 {
            return None;
        }
        s[..digits_end].parse().ok()
    }
}

impl WholeNumber for String {
    fn to_whole(&self) -> Option<u64> {
        self.as_str().to_whole()
    }
}

impl<T: WholeNumber + ?Sized> WholeNumber for &T {
    fn to_whole(&self) -> Option<u64> {
        (**self).to_whole()
    }
}

/// Normalise `raw`, or `None` if it is not a number.
pub fn normalize<N: WholeNumber + ?Sized>(raw: &N) -> Option<u64> {
    raw.to_whole()
}

/// Like [`normalize`] for text, but reports the rejection as an error.
pub fn parse_whole_number(raw: &str) -> Result<u64, ValidationError> {
    raw.to_whole().ok_or_else(|| ValidationError::NotANumber {
        input: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn negative_values_flip_sign() {
        assert_eq!(normalize(&-10i64), Some(10));
        assert_eq!(normalize(&-10.0f64), Some(10));
        assert_eq!(normalize("-10"), Some(10));
    }

    #[test]
    fn fractions_truncate() {
        assert_eq!(normalize(&7.9f64), Some(7));
        assert_eq!(normalize(&-0.5f64), Some(0));
        assert_eq!(normalize("3.75"), Some(3));
    }

    #[test]
    fn text_is_prefix_parsed() {
        assert_eq!(normalize("  42"), Some(42));
        assert_eq!(normalize("12abc"), Some(12));
        assert_eq!(normalize("+8"), Some(8));
    }

    #[test]
    fn non_numbers_are_rejected() {
        assert_eq!(normalize(&f64::NAN), None);
        assert_eq!(normalize(&f64::INFINITY), None);
        assert_eq!(normalize(&1e30f64), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("abc"), None);
        assert_eq!(normalize("-"), None);
        assert_eq!(normalize("99999999999999999999999"), None);
    }

    #[test]
    fn parse_reports_rejection() {
        assert_eq!(parse_whole_number("15"), Ok(15));
        assert_eq!(
            parse_whole_number("soon"),
            Err(ValidationError::NotANumber {
                input: "soon".into()
            })
        );
    }

    proptest! {
        #[test]
        fn float_normalisation_is_abs_trunc(x in -1.0e15f64..1.0e15f64) {
            prop_assert_eq!(normalize(&x), Some(x.abs().trunc() as u64));
        }

        #[test]
        fn text_matches_integer_value(n in any::<i64>()) {
            prop_assert_eq!(normalize(n.to_string().as_str()), Some(n.unsigned_abs()));
        }
    }
}
