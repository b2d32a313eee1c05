use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0},
    combinator::{map_res, opt},
    sequence::preceded,
};
use time::{Date, Month, Time};

use crate::{Error, NmeaField, Result, parse::complete};

fn two_digits(i: &str) -> nom::IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        |digits: &str| digits.parse::<u8>(),
    )
    .parse(i)
}

fn hhmmss(i: &str) -> nom::IResult<&str, (u8, u8, u8, Option<&str>)> {
    (
        two_digits,
        two_digits,
        two_digits,
        opt(preceded(char('.'), digit0)),
    )
        .parse(i)
}

fn ddmmyy(i: &str) -> nom::IResult<&str, (u8, u8, u8)> {
    (two_digits, two_digits, two_digits).parse(i)
}

/// Fractional seconds as nanoseconds; digits past the ninth are dropped.
fn nanoseconds(fraction: &str) -> u32 {
    let digits = &fraction[..fraction.len().min(9)];
    let scale = 10u32.pow(9 - digits.len() as u32);
    digits.parse::<u32>().map_or(0, |value| value * scale)
}

/// `HHMMSS` with optional fractional seconds; an empty field is midnight.
///
/// Output carries whole seconds only.
impl NmeaField for Time {
    fn decode(value: &str, name: &'static str) -> Result<Self> {
        if value.is_empty() {
            return Ok(Time::MIDNIGHT);
        }

        let (hour, minute, second, fraction) = complete(hhmmss, value, name)?;
        let nanosecond = fraction.map_or(0, nanoseconds);

        Time::from_hms_nano(hour, minute, second, nanosecond)
            .map_err(|_| Error::invalid_field(name, value))
    }

    fn encode(&self) -> String {
        format!("{:02}{:02}{:02}", self.hour(), self.minute(), self.second())
    }
}

/// `DDMMYY`; an empty field is no date. Two-digit years `69..=99` are 19xx, the rest 20xx.
impl NmeaField for Option<Date> {
    fn decode(value: &str, name: &'static str) -> Result<Self> {
        if value.is_empty() {
            return Ok(None);
        }

        let (day, month, year) = complete(ddmmyy, value, name)?;
        let year = match year {
            69..=99 => 1900 + i32::from(year),
            _ => 2000 + i32::from(year),
        };

        Month::try_from(month)
            .and_then(|month| Date::from_calendar_date(year, month, day))
            .map(Some)
            .map_err(|_| Error::invalid_field(name, value))
    }

    fn encode(&self) -> String {
        match self {
            Some(date) => format!(
                "{:02}{:02}{:02}",
                date.day(),
                u8::from(date.month()),
                date.year().rem_euclid(100)
            ),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_fields() {
        let time = Time::decode("232200.000", "time").unwrap();
        assert_eq!(time, Time::from_hms(23, 22, 0).unwrap());

        let time = Time::decode("092725.25", "time").unwrap();
        assert_eq!(time, Time::from_hms_milli(9, 27, 25, 250).unwrap());

        assert_eq!(Time::decode("040506", "time"), Ok(Time::from_hms(4, 5, 6).unwrap()));
        assert_eq!(Time::decode("", "time"), Ok(Time::MIDNIGHT));

        for invalid in ["25444", "250000", "126000", "12:00:00", "1200001", "abcdef"] {
            assert_eq!(
                Time::decode(invalid, "time"),
                Err(Error::InvalidField {
                    field: "time",
                    value: invalid.to_string()
                }),
                "{invalid}"
            );
        }
    }

    #[test]
    fn test_time_output_drops_fraction() {
        let time = Time::from_hms_milli(23, 21, 58, 999).unwrap();
        assert_eq!(time.encode(), "232158");
        assert_eq!(Time::MIDNIGHT.encode(), "000000");
    }

    #[test]
    fn test_date_fields() {
        let date = Option::<Date>::decode("190516", "date").unwrap();
        assert_eq!(date, Some(Date::from_calendar_date(2016, Month::May, 19).unwrap()));

        let date = Option::<Date>::decode("230394", "date").unwrap();
        assert_eq!(date, Some(Date::from_calendar_date(1994, Month::March, 23).unwrap()));

        assert_eq!(Option::<Date>::decode("", "date"), Ok(None));
        assert!(Option::<Date>::decode("320116", "date").is_err());
        assert!(Option::<Date>::decode("011316", "date").is_err());
        assert!(Option::<Date>::decode("0116", "date").is_err());

        assert_eq!(date.encode(), "230394");
        assert_eq!(None::<Date>.encode(), "");
    }

    #[test]
    fn test_nanoseconds() {
        assert_eq!(nanoseconds(""), 0);
        assert_eq!(nanoseconds("5"), 500_000_000);
        assert_eq!(nanoseconds("000"), 0);
        assert_eq!(nanoseconds("1234567891"), 123_456_789);
    }
}
