//! Representing values in the interpreter.

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

/// Values in our language.
#[derive(Clone, PartialEq, Eq)]
pub enum Value {
    /// Integer value.
    IntV(i64),
    /// String value.
    StrV(String),
}

use Value::*;

/// The fixed type tag of a variable.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Kind {
    /// 64-bit integers, declared with `int`.
    Int,
    /// Text, declared with `string`.
    Text,
}

impl FromStr for Kind {
    type Err = ();

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "int" => Ok(Kind::Int),
            "string" => Ok(Kind::Text),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Int => write!(f, "int"),
            Kind::Text => write!(f, "string"),
        }
    }
}

impl Value {
    /// Reads the raw text of a declaration as a value of kind `kind`.
    ///
    /// Integers that do not parse become `0`, and integers out of the `i64`
    /// range saturate. The error is returned alongside so that it can be
    /// reported.
    pub fn parse(kind: Kind, raw: &str) -> (Self, Option<ParseIntError>) {
        match kind {
            Kind::Int => match raw.parse::<i64>() {
                Ok(i) => (IntV(i), None),
                Err(err) => {
                    let i = match err.kind() {
                        IntErrorKind::PosOverflow => i64::MAX,
                        IntErrorKind::NegOverflow => i64::MIN,
                        _ => 0,
                    };
                    (IntV(i), Some(err))
                }
            },
            Kind::Text => (StrV(unquote(raw).to_string()), None),
        }
    }

    /// Kind of the value.
    pub fn kind(&self) -> Kind {
        match self {
            IntV(_) => Kind::Int,
            StrV(_) => Kind::Text,
        }
    }
}

/// Strips exactly one pair of enclosing double quotes, if present.
pub fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntV(i) => fmt::Display::fmt(i, f),
            StrV(s) => write!(f, "\"{s}\""),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntV(i) => fmt::Display::fmt(i, f),
            StrV(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(Value::parse(Kind::Int, "42").0, IntV(42));
        assert_eq!(Value::parse(Kind::Int, "-7").0, IntV(-7));
        assert_eq!(Value::parse(Kind::Int, "+7").0, IntV(7));
        let (value, err) = Value::parse(Kind::Int, "abc");
        assert_eq!(value, IntV(0));
        assert!(err.is_some());
        assert_eq!(Value::parse(Kind::Int, "").0, IntV(0));
    }

    #[test]
    fn integers_saturate() {
        assert_eq!(
            Value::parse(Kind::Int, "99999999999999999999").0,
            IntV(i64::MAX)
        );
        assert_eq!(
            Value::parse(Kind::Int, "-99999999999999999999").0,
            IntV(i64::MIN)
        );
    }

    #[test]
    fn strings_lose_one_pair_of_quotes() {
        assert_eq!(
            Value::parse(Kind::Text, "\"abc\"").0,
            StrV("abc".to_string())
        );
        assert_eq!(
            Value::parse(Kind::Text, "\"\"abc\"\"").0,
            StrV("\"abc\"".to_string())
        );
        assert_eq!(Value::parse(Kind::Text, "abc").0, StrV("abc".to_string()));
        assert_eq!(Value::parse(Kind::Text, "\"abc").0, StrV("\"abc".to_string()));
        assert_eq!(Value::parse(Kind::Text, "\"").0, StrV("\"".to_string()));
    }

    #[test]
    fn display() {
        assert_eq!(IntV(-12).to_string(), "-12");
        assert_eq!(StrV("hi there".to_string()).to_string(), "hi there");
        assert_eq!(format!("{:?}", StrV("hi".to_string())), "\"hi\"");
        assert_eq!(IntV(3).kind(), Kind::Int);
        assert_eq!(StrV(String::new()).kind(), Kind::Text);
    }

    #[test]
    fn kind_tokens() {
        assert_eq!("int".parse::<Kind>(), Ok(Kind::Int));
        assert_eq!("string".parse::<Kind>(), Ok(Kind::Text));
        assert_eq!("float".parse::<Kind>(), Err(()));
        assert_eq!(Kind::Text.to_string(), "string");
    }
}
