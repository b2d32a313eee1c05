//! # NMEA 0183 Codec
//!
//! This library decodes NMEA 0183 sentences of the form `$HHH,D1,D2,...,Dn*CC` into typed
//! records and encodes records back into wire sentences with a correct checksum.
//!
//! Decoding happens in two steps:
//! - [`Raw::parse`] checks the framing, verifies the optional checksum and splits the payload
//!   into a type tag and its fields
//! - [`NmeaSentence::from_raw`] picks the codec for the type tag and decodes the fields
//!
//! [`decode_line`] does both at once. Encoding goes the other way, always through
//! [`Raw::format`].
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_codec::{FixQuality, NmeaSentence, decode_line, encode};
//!
//! let line = "$GPGGA,232200.000,1445.1076,N,02315.4370,W,2,08,1.10,310.5,M,-31.9,M,0000,0000*54";
//!
//! match decode_line(line) {
//!     Ok(NmeaSentence::GGA(gga)) => {
//!         assert_eq!(gga.fix_quality, FixQuality::Dgps);
//!         assert_eq!(gga.satellite_count, 8);
//!         println!("{:.6}, {:.6}", gga.latitude.degrees(), gga.longitude.degrees());
//!         println!("{}", encode(&gga.into()));
//!     }
//!     Ok(other) => println!("other sentence: {other}"),
//!     Err(e) => println!("rejected: {e}"),
//! }
//! ```

pub mod coords;
pub mod error;
mod nmea0183;
pub mod nmea_content;
mod parse;
pub mod parsing;

pub use coords::{
    Coordinate, Direction, EastWest, Hemisphere, Latitude, Longitude, NorthSouth, Variation,
};
pub use error::{Error, Result};
pub use nmea_content::{
    FixMode, FixQuality, GGA, GSA, NavigationMode, NmeaSentence, RMC, SelectionMode, Sentence,
    SentenceType, Status, decode_line, decode_line_with, encode,
};
pub use nmea0183::*;
pub use parse::NmeaField;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
