/// Renders a result using the shortest round-trip decimal representation.
///
/// Integral values carry no decimal point and fractions carry no trailing
/// zeros. Magnitudes are written out in full, without scientific notation.
/// Non-finite values render as `+Inf`, `-Inf` and `NaN`.
///
/// ## Parameters
/// - `value`: The value to render.
///
/// ## Returns
/// The rendered text, which parses back to exactly `value` for finite input.
///
/// ## Example
/// ```
/// use calculable::util::num::format_result;
///
/// assert_eq!(format_result(3.0), "3");
/// assert_eq!(format_result(3.5), "3.5");
/// assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_result(f64::INFINITY), "+Inf");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_infinite() {
        return if value.is_sign_positive() { "+Inf" } else { "-Inf" }.to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_result(20.0), "20");
        assert_eq!(format_result(-4.0), "-4");
        assert_eq!(format_result(0.0), "0");
    }

    #[test]
    fn large_and_small_values_are_not_in_exponent_form() {
        assert_eq!(format_result(1e21), "1000000000000000000000");
        assert_eq!(format_result(1e-7), "0.0000001");
    }

    #[test]
    fn output_round_trips() {
        for value in [7.5, 1.0 / 3.0, 123_456.789, 2.0_f64.sqrt()] {
            assert_eq!(format_result(value).parse::<f64>().unwrap(), value);
        }
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_result(f64::INFINITY), "+Inf");
        assert_eq!(format_result(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_result(f64::NAN), "NaN");
    }
}
