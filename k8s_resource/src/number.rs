use lazy_regex::regex_is_match;

/// Parses a number in plain decimal notation (`1`, `-0.5`, `.25`, `2.`).
/// Exponents, `inf` and `NaN` are refused even though `f64::from_str` takes
/// them.
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    if !regex_is_match!(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)$", raw) {
        return None;
    }
    raw.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        integer = {"1", 1.0},
        decimal = {"1.5", 1.5},
        trailing_dot = {"2.", 2.0},
        leading_dot = {".25", 0.25},
        negative = {"-0.5", -0.5},
        signed = {"+3", 3.0}
    )]
    fn test_parse_decimal(raw: &str, expected: f64) {
        assert_eq!(parse_decimal(raw), Some(expected));
    }

    #[parameterized(
        empty = {""},
        exponent = {"1e2"},
        infinity = {"inf"},
        nan = {"NaN"},
        lone_dot = {"."},
        spaces = {" 1"},
        two_dots = {"1.2.3"}
    )]
    fn test_parse_decimal_rejects(raw: &str) {
        assert_eq!(parse_decimal(raw), None);
    }
}
