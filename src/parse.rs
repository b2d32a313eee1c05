use std::time::Duration;

use nom::{Parser, combinator::verify, error::ErrorKind, number::complete::double};

use crate::{Error, Result, parsing::consumed};

/// Trait for values that occupy a single NMEA field.
///
/// Decoding is total over the empty string: an empty field is the "no value" marker and
/// decodes to the type's zero or default value. Anything else must parse completely or
/// the field is rejected with [`Error::InvalidField`], naming the field.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::NmeaField;
///
/// assert_eq!(f64::decode("1.10", "HDOP"), Ok(1.1));
/// assert_eq!(f64::decode("", "HDOP"), Ok(0.0));
/// assert!(u32::decode("A8", "satellites").is_err());
///
/// assert_eq!(2.3f64.encode(), "2.3");
/// ```
pub trait NmeaField: Sized {
    /// Decodes the field content. `name` is reported in errors.
    fn decode(value: &str, name: &'static str) -> Result<Self>;

    /// Encodes the value as field content.
    fn encode(&self) -> String;
}

/// Runs `parser` over the whole field, mapping any failure to [`Error::InvalidField`].
pub(crate) fn complete<'a, O, P>(parser: P, value: &'a str, name: &'static str) -> Result<O>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    consumed(parser, ErrorKind::Eof)
        .parse(value)
        .map(|(_, o)| o)
        .map_err(|_| Error::invalid_field(name, value))
}

fn finite(i: &str) -> nom::IResult<&str, f64> {
    verify(double, |v: &f64| v.is_finite()).parse(i)
}

impl NmeaField for f64 {
    fn decode(value: &str, name: &'static str) -> Result<Self> {
        if value.is_empty() {
            return Ok(0.0);
        }
        complete(finite, value, name)
    }

    /// Shortest representation that reads back as the same value.
    fn encode(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_uints_type {
    ($($t:tt),*) => ($(
        impl NmeaField for $t {
            fn decode(value: &str, name: &'static str) -> Result<Self> {
                if value.is_empty() {
                    return Ok(0);
                }
                complete(nom::character::complete::$t, value, name)
            }

            fn encode(&self) -> String {
                self.to_string()
            }
        }
    )*)
}

impl_uints_type!(u8, u16, u32);

impl NmeaField for String {
    fn decode(value: &str, _: &'static str) -> Result<Self> {
        Ok(value.to_owned())
    }

    fn encode(&self) -> String {
        self.clone()
    }
}

/// Whole seconds on output; fractional seconds are accepted on input.
impl NmeaField for Duration {
    fn decode(value: &str, name: &'static str) -> Result<Self> {
        if value.is_empty() {
            return Ok(Duration::ZERO);
        }
        let seconds = complete(finite, value, name)?;
        Duration::try_from_secs_f64(seconds).map_err(|_| Error::invalid_field(name, value))
    }

    fn encode(&self) -> String {
        self.as_secs().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_fields() {
        assert_eq!(f64::decode("310.5", "altitude"), Ok(310.5));
        assert_eq!(f64::decode("-31.9", "geoid height"), Ok(-31.9));
        assert_eq!(f64::decode("", "altitude"), Ok(0.0));
        assert_eq!(
            f64::decode("1.5x", "PDOP"),
            Err(Error::InvalidField {
                field: "PDOP",
                value: "1.5x".to_string()
            })
        );
        assert!(f64::decode("abc", "speed").is_err());
        assert!(f64::decode("inf", "speed").is_err());

        assert_eq!(1.5f64.encode(), "1.5");
        assert_eq!(2.0f64.encode(), "2");
        assert_eq!((-31.9f64).encode(), "-31.9");
    }

    #[test]
    fn test_integer_fields() {
        assert_eq!(u32::decode("08", "satellites"), Ok(8));
        assert_eq!(u32::decode("", "satellites"), Ok(0));
        assert!(u32::decode("-1", "satellites").is_err());
        assert!(u32::decode("8.5", "satellites").is_err());
        assert_eq!(8u32.encode(), "8");
    }

    #[test]
    fn test_duration_fields() {
        assert_eq!(Duration::decode("0000", "age"), Ok(Duration::ZERO));
        assert_eq!(Duration::decode("60", "age"), Ok(Duration::from_secs(60)));
        assert_eq!(Duration::decode("1.5", "age"), Ok(Duration::from_millis(1500)));
        assert_eq!(Duration::decode("", "age"), Ok(Duration::ZERO));
        assert!(Duration::decode("-3", "age").is_err());
        assert!(Duration::decode("3s", "age").is_err());

        assert_eq!(Duration::from_secs(60).encode(), "60");
        assert_eq!(Duration::from_millis(1500).encode(), "1");
    }

    #[test]
    fn test_string_fields() {
        assert_eq!(String::decode("0000", "station"), Ok("0000".to_string()));
        assert_eq!(String::decode("", "station"), Ok(String::new()));
        assert_eq!("bob".to_string().encode(), "bob");
    }
}
