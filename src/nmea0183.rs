//! # NMEA 0183 Framing
//!
//! This module handles the sentence envelope `$HHH,D1,D2,...,Dn*CC`: it checks the framing,
//! verifies the checksum and splits the payload into a type tag and its fields. The reverse
//! direction, [`Raw::format`], is the single place where wire text and checksums are produced.

use std::{fmt, str::FromStr};

use nom::{
    Parser,
    bytes::complete::{take_till, take_while_m_n},
    character::complete::char,
    combinator::map_res,
    error::ErrorKind,
    multi::separated_list0,
    sequence::preceded,
};

use crate::{Error, Result, error::Framing, parsing::consumed};

/// Defines how the parser should handle NMEA message checksums.
///
/// NMEA 0183 messages can include an optional checksum in the format `*CC` where
/// CC is a two-digit hexadecimal value representing the XOR of all bytes in the
/// message content (excluding the '$' prefix and '*' delimiter).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    /// Checksum is required and must be present.
    ///
    /// The parser will fail if no `*CC` checksum is found at the end of the message.
    /// If a checksum is present, it will be validated against the calculated checksum.
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// - If no checksum is present (`*CC` missing), parsing continues normally
    /// - If a checksum is present, it must be valid or parsing will fail
    #[default]
    Optional,
}

/// Calculates the NMEA 0183 checksum for the given message content.
///
/// The checksum is the XOR of every byte between the '$' prefix and the '*' delimiter,
/// excluding both. The function is total: any byte span has a checksum.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::checksum;
///
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// assert_eq!(checksum(b""), 0);
/// ```
pub fn checksum(data: impl AsRef<[u8]>) -> u8 {
    data.as_ref()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// A sentence broken up into its type tag and fields.
///
/// Empty fields are kept as empty strings: an empty field means "no value", which is
/// not the same thing as a field holding zero.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Raw {
    /// Type tag, e.g. `GPGGA`
    pub sentence_type: String,
    /// Payload fields in wire order
    pub fields: Vec<String>,
}

impl Raw {
    pub fn new(sentence_type: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            sentence_type: sentence_type.into(),
            fields,
        }
    }

    /// Parses a single line with an optional checksum.
    ///
    /// Surrounding whitespace (including a trailing `\r\n`) is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_codec::Raw;
    ///
    /// let raw = Raw::parse("$GPVTG,230.17,T,,M,0.38,N,0.70,K,D*33\r\n").unwrap();
    /// assert_eq!(raw.sentence_type, "GPVTG");
    /// assert_eq!(raw.fields, ["230.17", "T", "", "M", "0.38", "N", "0.70", "K", "D"]);
    /// ```
    pub fn parse(line: impl AsRef<[u8]>) -> Result<Self> {
        Self::parse_with(line, ChecksumMode::default())
    }

    /// Parses a single line, handling the checksum as `cc` requires.
    ///
    /// Validation happens in this order:
    /// 1. the trimmed line must not be empty
    /// 2. it must start with `$` and be ASCII
    /// 3. a trailing `*CC` (two hex digits, any case) is stripped and compared against the
    ///    checksum of the remaining payload
    /// 4. the payload is split on `,`; the first token is the type tag
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_codec::{ChecksumMode, Error, Raw, error::Framing};
    ///
    /// assert!(Raw::parse_with("$GPGGA,data*6A", ChecksumMode::Required).is_ok());
    /// assert_eq!(
    ///     Raw::parse_with("$GPGGA,data", ChecksumMode::Required),
    ///     Err(Error::Framing(Framing::MissingChecksum))
    /// );
    /// assert!(Raw::parse_with("$GPGGA,data", ChecksumMode::Optional).is_ok());
    /// ```
    pub fn parse_with(line: impl AsRef<[u8]>, cc: ChecksumMode) -> Result<Self> {
        let line = line.as_ref().trim_ascii();

        let Some(&first) = line.first() else {
            return Err(Framing::Empty.into());
        };
        if first != b'$' {
            return Err(Framing::MissingStart(leading_char(line, first)).into());
        }
        if !line.is_ascii() {
            return Err(Framing::NonAscii.into());
        }
        let line = std::str::from_utf8(line).map_err(|_| Framing::NonAscii)?;

        let start: nom::IResult<&str, char> = char('$').parse(line);
        let (payload, _) = start.map_err(|_| Framing::MissingStart('$'))?;

        let data = match split_checksum(payload) {
            Some((data, found)) => {
                let expected = checksum(data);
                if expected != found {
                    return Err(Error::ChecksumMismatch { expected, found });
                }
                data
            }
            None if cc == ChecksumMode::Required => return Err(Framing::MissingChecksum.into()),
            None => {
                log::trace!("no checksum on {payload:?}, skipping verification");
                payload
            }
        };

        let split: nom::IResult<&str, Vec<&str>> =
            consumed(separated_list0(char(','), take_till(|c: char| c == ',')), ErrorKind::Eof)
                .parse(data);
        let (_, tokens) = split.map_err(|_| Framing::Empty)?;

        let Some((sentence_type, fields)) = tokens.split_first() else {
            return Err(Framing::Empty.into());
        };

        Ok(Self {
            sentence_type: (*sentence_type).to_owned(),
            fields: fields.iter().map(|field| (*field).to_owned()).collect(),
        })
    }

    /// The payload `TAG,field1,...,fieldN` without `$` or checksum.
    pub fn payload(&self) -> String {
        let mut payload = self.sentence_type.clone();
        for field in &self.fields {
            payload.push(',');
            payload.push_str(field);
        }
        payload
    }

    /// Serializes the sentence as `$<payload>*<CC>`.
    ///
    /// Every codec funnels its output through here, so tag placement and checksum are
    /// always consistent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_codec::Raw;
    ///
    /// let raw = Raw::new("GPVTG", ["230.17", "T", "", "M", "0.38", "N", "0.70", "K", "D"]
    ///     .map(String::from)
    ///     .to_vec());
    /// assert_eq!(raw.format(), "$GPVTG,230.17,T,,M,0.38,N,0.70,K,D*33");
    /// ```
    pub fn format(&self) -> String {
        let payload = self.payload();
        let cc = checksum(&payload);
        format!("${payload}*{}", format_checksum(cc))
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for Raw {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Splits a trailing `*CC` off the payload when the last three bytes have that shape.
fn split_checksum(payload: &str) -> Option<(&str, u8)> {
    let at = payload.len().checked_sub(3)?;
    let (data, suffix) = (payload.get(..at)?, payload.get(at..)?);

    let hex = preceded(
        char('*'),
        map_res(
            take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
            |digits: &str| u8::from_str_radix(digits, 16),
        ),
    );
    let parsed: nom::IResult<&str, u8> = consumed(hex, ErrorKind::HexDigit).parse(suffix);

    parsed.ok().map(|(_, cc)| (data, cc))
}

fn leading_char(line: &[u8], first: u8) -> char {
    std::str::from_utf8(line)
        .ok()
        .and_then(|line| line.chars().next())
        .unwrap_or(char::from(first))
}
