//! # NMEA Sentence Content
//!
//! Typed records for the supported sentence types, the field tables that describe them and
//! the dispatcher that routes a line to the right codec.
//!
//! ```rust
//! use nmea0183_codec::nmea_content::{NmeaSentence, decode_line, encode};
//!
//! let line = "$GPGSA,A,3,03,06,19,24,12,28,01,17,,,,,1.39,1.10,0.84*00";
//! let NmeaSentence::GSA(gsa) = decode_line(line).unwrap() else {
//!     panic!("expected GSA");
//! };
//! assert_eq!(gsa.fix_sats_prn.len(), 8);
//! assert_eq!(encode(&gsa.into()), "$GPGSA,A,3,03,06,19,24,12,28,01,17,,,,,1.39,1.1,0.84*30");
//! ```

use std::{fmt, str::FromStr};

#[macro_use]
mod field;
mod parse;
mod sentences;

pub use field::{Decode, Encode, Field, min_fields};
pub use sentences::*;

use crate::{ChecksumMode, Error, Raw, Result};

/// Sentence types understood by the dispatcher.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceType {
    /// Global Positioning System Fix Data
    GGA,
    /// GPS DOP and active satellites
    GSA,
    /// Recommended Minimum Navigation Information
    RMC,
}

impl SentenceType {
    pub const ALL: [SentenceType; 3] = [SentenceType::GGA, SentenceType::GSA, SentenceType::RMC];

    /// The type tag as it appears on the wire.
    pub const fn tag(self) -> &'static str {
        match self {
            SentenceType::GGA => "GPGGA",
            SentenceType::GSA => "GPGSA",
            SentenceType::RMC => "GPRMC",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.tag() == tag)
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SentenceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s).ok_or_else(|| Error::UnrecognizedMessage(s.to_owned()))
    }
}

/// Decodes one line into a typed record, with an optional checksum.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::{Error, nmea_content::decode_line};
///
/// let line = "$GPGGA,232200.000,1445.1076,N,02315.4370,W,2,08,1.10,310.5,M,-31.9,M,0000,0000*54";
/// assert!(decode_line(line).is_ok());
///
/// assert_eq!(
///     decode_line("$GPXXX,1,2,3"),
///     Err(Error::UnrecognizedMessage("GPXXX".to_string()))
/// );
/// ```
pub fn decode_line(line: impl AsRef<[u8]>) -> Result<NmeaSentence> {
    decode_line_with(line, ChecksumMode::default())
}

/// Decodes one line into a typed record, handling the checksum as `cc` requires.
pub fn decode_line_with(line: impl AsRef<[u8]>, cc: ChecksumMode) -> Result<NmeaSentence> {
    Raw::parse_with(line, cc)
        .and_then(|raw| NmeaSentence::from_raw(&raw))
        .inspect_err(|e| log::debug!("rejected sentence: {e}"))
}

/// Serializes a record as a complete wire sentence with checksum.
pub fn encode(sentence: &NmeaSentence) -> String {
    sentence.to_raw().format()
}
