use crate::number::parse_decimal;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unable to parse the quantity: {0}")]
    QuantityParsing(String),
    #[error("Unable to parse the quantity {0}: unknown units")]
    UnknownUnit(String),
}

impl Error {
    /// The input that was rejected.
    pub fn quantity(&self) -> &str {
        match self {
            Error::QuantityParsing(quantity) | Error::UnknownUnit(quantity) => {
                quantity
            }
        }
    }

    /// Picks the variant from the shape of the rejected input: a number
    /// followed by letters means the unit was not recognized.
    pub(crate) fn rejected(quantity: &str) -> Self {
        let measure =
            quantity.trim_end_matches(|c: char| c.is_ascii_alphabetic());
        if measure != quantity && parse_decimal(measure).is_some() {
            Error::UnknownUnit(quantity.to_string())
        } else {
            Error::QuantityParsing(quantity.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        unknown_suffix = {"1500x", true},
        binary_suffix = {"1Ki", true},
        exponent = {"1e2", false},
        letters_only = {"abc", false},
        infinity = {"inf", false},
        letters_after_garbage = {"1.2.3Mi", false},
        garbage = {"1.2.3", false},
        empty = {"", false}
    )]
    fn test_rejected(quantity: &str, unknown_unit: bool) {
        let err = Error::rejected(quantity);
        assert_eq!(matches!(err, Error::UnknownUnit(_)), unknown_unit);
        assert_eq!(err.quantity(), quantity);
    }

    #[test]
    fn test_message_names_quantity() {
        assert_eq!(
            Error::UnknownUnit("1500Xi".to_string()).to_string(),
            "Unable to parse the quantity 1500Xi: unknown units"
        );
        assert_eq!(
            Error::QuantityParsing("abcm".to_string()).to_string(),
            "Unable to parse the quantity: abcm"
        );
    }
}
