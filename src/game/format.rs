//! Display formatting for large magnitudes.

/// Abbreviate a magnitude as `K`/`M`/`B`/`T` with one decimal (e.g. 1234567 → "1.2M").
///
/// Values are floored first. Negative numbers and NaN render as "0".
pub fn format_number(n: f64) -> String {
    if n.is_nan() || n < 0.0 {
        return "0".to_string();
    }
    let val = n.floor();
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];
    for (scale, suffix) in UNITS {
        if val >= scale {
            return format!("{:.1}{}", val / scale, suffix);
        }
    }
    format!("{}", val as u64)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_format_number_no_panic(n in -1e15f64..1e15) {
            let _ = format_number(n);
        }

        #[test]
        fn prop_format_number_never_negative(n in -1e15f64..1e15) {
            let s = format_number(n);
            prop_assert!(!s.starts_with('-'), "got: {}", s);
        }

        #[test]
        fn prop_below_thousand_is_exact(int_val in 0u64..1000) {
            prop_assert_eq!(format_number(int_val as f64), int_val.to_string());
        }
    }
}
