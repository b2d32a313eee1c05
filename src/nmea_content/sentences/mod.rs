mod gga;
mod gsa;
mod rmc;

pub use gga::GGA;
pub use gsa::GSA;
pub use rmc::RMC;

use std::{fmt, str::FromStr};

use crate::{
    Raw, Result,
    nmea_content::{Field, SentenceType, field},
};

/// A sentence type described by a declarative field table.
///
/// Implementors list their fields once in [`Sentence::FIELDS`]; decoding and encoding are
/// both driven from that table, so the two directions always agree on field positions.
///
/// # Example
///
/// ```rust
/// use nmea0183_codec::{Raw, nmea_content::{GSA, Sentence}};
///
/// let raw = Raw::parse("$GPGSA,A,3,03,06,19,24,12,28,01,17,,,,,1.39,1.10,0.84*00").unwrap();
/// let gsa = GSA::decode(&raw).unwrap();
/// assert_eq!(GSA::min_fields(), 17);
/// assert_eq!(gsa.encode().fields.len(), 17);
/// ```
pub trait Sentence: Default + Sized + 'static {
    /// The type this codec decodes and encodes.
    const SENTENCE_TYPE: SentenceType;

    /// Ordered field descriptors, positions counted after the type tag.
    const FIELDS: &'static [Field<Self>];

    /// Cross-field invariants, checked after every field decoded.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Minimum number of fields a sentence of this type must carry.
    fn min_fields() -> usize {
        field::min_fields(Self::FIELDS)
    }

    /// Decodes a tokenized sentence.
    ///
    /// Either every check passes and a complete record is returned, or the first failing
    /// check is reported. Type tag and field count are checked before any field is read.
    fn decode(raw: &Raw) -> Result<Self> {
        field::decode(raw)
    }

    /// Encodes the record into its ordered field list.
    fn encode(&self) -> Raw {
        field::encode(self)
    }
}

/// A unified enum over every supported sentence type.
///
/// ## Supported Sentence Types
///
/// | Variant      | Sentence Type                              | Description                  |
/// |--------------|--------------------------------------------|------------------------------|
/// | GGA([`GGA`]) | Global Positioning System Fix Data         | GPS position and fix quality |
/// | GSA([`GSA`]) | GPS DOP and active satellites              | Satellite constellation info |
/// | RMC([`RMC`]) | Recommended Minimum Navigation Information | Essential navigation data    |
///
/// ## Error Handling
///
/// ```rust
/// use nmea0183_codec::{Error, Raw, nmea_content::NmeaSentence};
///
/// // unrecognized sentence type
/// let raw = Raw::parse("$GPUNK,some,data,here").unwrap();
/// assert_eq!(
///     NmeaSentence::from_raw(&raw),
///     Err(Error::UnrecognizedMessage("GPUNK".to_string()))
/// );
///
/// // malformed GGA sentence
/// let raw = Raw::parse("$GPGGA,invalid,data").unwrap();
/// assert!(NmeaSentence::from_raw(&raw).is_err());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// GPS DOP and active satellites
    GSA(GSA),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
}

impl NmeaSentence {
    pub fn sentence_type(&self) -> SentenceType {
        match self {
            NmeaSentence::GGA(_) => SentenceType::GGA,
            NmeaSentence::GSA(_) => SentenceType::GSA,
            NmeaSentence::RMC(_) => SentenceType::RMC,
        }
    }

    /// Selects the codec for the type tag of `raw` and decodes with it.
    pub fn from_raw(raw: &Raw) -> Result<Self> {
        let sentence_type: SentenceType = raw.sentence_type.parse()?;
        log::trace!("decoding {sentence_type} with {} fields", raw.fields.len());

        match sentence_type {
            SentenceType::GGA => GGA::decode(raw).map(Self::GGA),
            SentenceType::GSA => GSA::decode(raw).map(Self::GSA),
            SentenceType::RMC => RMC::decode(raw).map(Self::RMC),
        }
    }

    pub fn to_raw(&self) -> Raw {
        match self {
            NmeaSentence::GGA(gga) => gga.encode(),
            NmeaSentence::GSA(gsa) => gsa.encode(),
            NmeaSentence::RMC(rmc) => rmc.encode(),
        }
    }
}

impl fmt::Display for NmeaSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_raw().format())
    }
}

impl FromStr for NmeaSentence {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        super::decode_line(s)
    }
}

macro_rules! impl_sentence_conversions {
    ($($name:ident),*) => ($(
        impl From<$name> for NmeaSentence {
            fn from(sentence: $name) -> Self {
                NmeaSentence::$name(sentence)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&Sentence::encode(self).format())
            }
        }
    )*)
}

impl_sentence_conversions!(GGA, GSA, RMC);

/// Closed set of single-field codes. The first variant, marked `#[default]`, is also what
/// an empty field decodes to.
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            #[default]
            $(#[$default_meta:meta])*
            $default_code:literal => $default:ident,
            $(
                $(#[$variant_meta:meta])*
                $code:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(#[$default_meta])*
            #[default]
            $default,
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// The field code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    Self::$default => $default_code,
                    $(Self::$variant => $code,)*
                }
            }

            /// Maps a field code to its variant; the empty field maps to the default.
            #[allow(unreachable_patterns)]
            pub fn from_field(value: &str) -> Option<Self> {
                match value {
                    "" | $default_code => Some(Self::$default),
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl $crate::NmeaField for $name {
            fn decode(value: &str, name: &'static str) -> $crate::Result<Self> {
                Self::from_field(value).ok_or_else(|| $crate::Error::invalid_field(name, value))
            }

            fn encode(&self) -> String {
                self.as_str().to_owned()
            }
        }
    };
}

field_enum! {
    /// Quality of the GPS fix
    pub enum FixQuality {
        #[default]
        /// 0 - Fix not available
        "0" => Invalid,
        /// 1 - GPS fix
        "1" => Gps,
        /// 2 - Differential GPS fix
        "2" => Dgps,
        /// 3 - PPS fix
        "3" => Pps,
        /// 4 - Real Time Kinematic
        "4" => Rtk,
        /// 5 - Float RTK
        "5" => FloatRtk,
        /// 6 - Estimated (dead reckoning)
        "6" => Estimated,
        /// 7 - Manual input mode
        "7" => Manual,
        /// 8 - Simulation mode
        "8" => Simulation,
    }
}

field_enum! {
    /// Selection Mode
    pub enum SelectionMode {
        #[default]
        /// M - Manual, forced to operate in 2D or 3D
        "M" => Manual,
        /// A - Automatic, 2D/3D
        "A" => Automatic,
    }
}

field_enum! {
    /// Fix Mode
    pub enum FixMode {
        #[default]
        /// 1 - No fix
        "1" => NoFix,
        /// 2 - 2D Fix
        "2" => Fix2D,
        /// 3 - 3D Fix
        "3" => Fix3D,
    }
}

field_enum! {
    /// Status Mode Indicator
    pub enum Status {
        #[default]
        /// V - Navigation receiver warning
        "V" => Void,
        /// A - Active
        "A" => Active,
    }
}

field_enum! {
    /// Mode indicator of the navigation fix
    pub enum NavigationMode {
        #[default]
        /// Field absent or empty
        "" => Unspecified,
        /// A - Autonomous mode
        "A" => Autonomous,
        /// D - Differential Mode
        "D" => Differential,
        /// E - Estimated (dead-reckoning) mode
        "E" => Estimated,
        /// N - Data Not Valid
        "N" => NotValid,
        /// S - Simulated Mode
        "S" => Simulator,
    }
}

impl NavigationMode {
    /// Autonomous and differential fixes are the ones a receiver reports as usable.
    pub fn is_valid(self) -> bool {
        matches!(self, NavigationMode::Autonomous | NavigationMode::Differential)
    }
}
