//! # Error Types
//!
//! This module defines the error type returned by every fallible operation in the crate.
//! Decoding either produces a complete record or one of these values, never a partial record.

use std::fmt;

use crate::nmea_content::SentenceType;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur while decoding or validating NMEA sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line is not framed as an NMEA sentence.
    Framing(Framing),

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the message content)
    /// and the actual checksum found in the message.
    ChecksumMismatch {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum found in the message
        found: u8,
    },

    /// The sentence carries fewer fields than its type requires.
    FieldCount {
        /// Sentence being decoded
        sentence: SentenceType,
        /// Minimum number of fields after the type tag
        expected: usize,
        /// Number of fields present
        found: usize,
    },

    /// A codec was handed a sentence of another type.
    TypeMismatch {
        /// The type the codec decodes
        expected: SentenceType,
        /// The type tag found in the sentence
        found: String,
    },

    /// A field in the NMEA sentence was invalid.
    ///
    /// This error occurs when a specific field does not conform to the expected format,
    /// type, or value range.
    InvalidField {
        /// Name of the offending field
        field: &'static str,
        /// Raw content of the field
        value: String,
    },

    /// The message type is not recognized by the dispatcher.
    ///
    /// Contains the type tag for reference.
    UnrecognizedMessage(String),

    /// Every field decoded, but two of them contradict each other, or a fixed literal
    /// (such as a unit suffix) has the wrong value.
    Inconsistent {
        /// Name of the offending field
        field: &'static str,
        /// Raw content of the field
        value: String,
        /// What the field violates
        reason: &'static str,
    },
}

/// Ways in which a line can fail to be an NMEA sentence at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Nothing but whitespace.
    Empty,
    /// NMEA messages must be ASCII-only for proper parsing and checksum calculation.
    NonAscii,
    /// The line does not start with `$`; holds the character found instead.
    MissingStart(char),
    /// No `*CC` suffix although [`ChecksumMode::Required`](crate::ChecksumMode::Required) was requested.
    MissingChecksum,
}

impl Error {
    pub(crate) fn invalid_field(field: &'static str, value: &str) -> Self {
        Error::InvalidField {
            field,
            value: value.to_owned(),
        }
    }
}

impl fmt::Display for Framing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Framing::Empty => write!(f, "empty line"),
            Framing::NonAscii => write!(f, "line contains non-ASCII characters"),
            Framing::MissingStart(found) => write!(f, "expected '$' but got {found:?}"),
            Framing::MissingChecksum => write!(f, "missing '*CC' checksum"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Framing(framing) => write!(f, "framing error: {framing}"),
            Error::ChecksumMismatch { expected, found } => {
                write!(f, "checksum: expected 0x{expected:02X} but found 0x{found:02X}")
            }
            Error::FieldCount {
                sentence,
                expected,
                found,
            } => write!(
                f,
                "{sentence}: not enough fields, need at least {expected} but got {found}"
            ),
            Error::TypeMismatch { expected, found } => {
                write!(f, "wrong type for {expected}: {found:?}")
            }
            Error::InvalidField { field, value } => write!(f, "parse {field}: invalid value {value:?}"),
            Error::UnrecognizedMessage(tag) => write!(f, "unknown sentence type {tag:?}"),
            Error::Inconsistent {
                field,
                value,
                reason,
            } => write!(f, "{field} {value:?} {reason}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<Framing> for Error {
    fn from(framing: Framing) -> Self {
        Error::Framing(framing)
    }
}
