//! Integer and float literals, following `var_export()`.

/// Floats at or above this magnitude use exponent notation.
const EXPONENT_ABOVE: f64 = 1e15;
/// Floats below this magnitude (other than zero) use exponent notation.
const EXPONENT_BELOW: f64 = 1e-4;

pub(super) fn dump_int(i: i64) -> String {
    // -9223372036854775808 would parse as a float negated
    if i == i64::MIN {
        return format!("{}-1", i64::MIN + 1);
    }
    i.to_string()
}

pub(super) fn dump_float(f: f64) -> String {
    if f.is_nan() {
        return "NAN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "INF" } else { "-INF" }.to_string();
    }

    let abs = f.abs();
    if abs != 0.0 && (abs >= EXPONENT_ABOVE || abs < EXPONENT_BELOW) {
        return exponent_form(f);
    }

    let s = f.to_string();
    if s.contains('.') { s } else { format!("{}.0", s) }
}

fn exponent_form(f: f64) -> String {
    let s = format!("{:e}", f);
    let (mantissa, exponent) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let mantissa = if mantissa.contains('.') {
        mantissa.to_string()
    } else {
        format!("{}.0", mantissa)
    };
    match exponent.strip_prefix('-') {
        Some(digits) => format!("{}E-{}", mantissa, digits),
        None => format!("{}E+{}", mantissa, exponent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ints() {
        assert_eq!(dump_int(0), "0");
        assert_eq!(dump_int(-42), "-42");
        assert_eq!(dump_int(i64::MAX), "9223372036854775807");
        assert_eq!(dump_int(i64::MIN), "-9223372036854775807-1");
    }

    #[test]
    fn test_fixed_floats_keep_a_fraction() {
        assert_eq!(dump_float(1.0), "1.0");
        assert_eq!(dump_float(-2.0), "-2.0");
        assert_eq!(dump_float(0.1), "0.1");
        assert_eq!(dump_float(0.0), "0.0");
        assert_eq!(dump_float(-0.0), "-0.0");
        assert_eq!(dump_float(0.0001), "0.0001");
        assert_eq!(dump_float(123456789.125), "123456789.125");
        assert_eq!(dump_float(1e14), "100000000000000.0");
    }

    #[test]
    fn test_exponent_floats() {
        assert_eq!(dump_float(1e15), "1.0E+15");
        assert_eq!(dump_float(1e25), "1.0E+25");
        assert_eq!(dump_float(-2.5e20), "-2.5E+20");
        assert_eq!(dump_float(1.5e-7), "1.5E-7");
        assert_eq!(dump_float(0.00001), "1.0E-5");
    }

    #[test]
    fn test_special_floats() {
        assert_eq!(dump_float(f64::NAN), "NAN");
        assert_eq!(dump_float(f64::INFINITY), "INF");
        assert_eq!(dump_float(f64::NEG_INFINITY), "-INF");
    }
}
