//! # Geographic Coordinates
//!
//! A [`Coordinate`] is a signed angle in decimal degrees whose sign is its hemisphere:
//! non-negative values are North/East, negative values are South/West. The direction type
//! parameter ties a coordinate to its axis, so a [`Latitude`] can only ever be paired with
//! [`NorthSouth`] and a [`Longitude`] with [`EastWest`].
//!
//! Conversions exist between Decimal Degrees (DD), Degrees-Minutes-Seconds (DMS) and
//! Degrees-Decimal-Minutes (DDM), plus the NMEA `ddmm.mmmm` field format.

use std::{fmt::Debug, marker::PhantomData};

use nom::{Parser, combinator::verify, error::ErrorKind, number::complete::double};

use crate::{Error, Result, parsing::consumed};

/// The direction half of a coordinate on one axis.
pub trait Direction: Copy + Eq + Debug + Into<Hemisphere> + 'static {
    /// Direction of non-negative values (North or East).
    const POSITIVE: Self;
    /// Direction of negative values (South or West).
    const NEGATIVE: Self;
    /// Axis name used in error messages.
    const AXIS: &'static str;

    /// Parses the single-letter NMEA symbol for this axis.
    fn from_symbol(symbol: &str) -> Option<Self>;

    /// The single-letter NMEA symbol.
    fn symbol(self) -> &'static str;

    fn is_positive(self) -> bool {
        self == Self::POSITIVE
    }
}

/// Latitude direction
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NorthSouth {
    /// N
    North,
    /// S
    South,
}

/// Longitude direction, also used for magnetic variation
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EastWest {
    /// E
    East,
    /// W
    West,
}

/// Any of the four hemispheres, for code that handles both axes at once.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// North and East are positive, South and West negative.
    pub fn is_positive(self) -> bool {
        matches!(self, Hemisphere::North | Hemisphere::East)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
            Hemisphere::East => "E",
            Hemisphere::West => "W",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "N" => Some(Hemisphere::North),
            "S" => Some(Hemisphere::South),
            "E" => Some(Hemisphere::East),
            "W" => Some(Hemisphere::West),
            _ => None,
        }
    }
}

impl Direction for NorthSouth {
    const POSITIVE: Self = NorthSouth::North;
    const NEGATIVE: Self = NorthSouth::South;
    const AXIS: &'static str = "latitude";

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "N" => Some(NorthSouth::North),
            "S" => Some(NorthSouth::South),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        Hemisphere::from(self).symbol()
    }
}

impl Direction for EastWest {
    const POSITIVE: Self = EastWest::East;
    const NEGATIVE: Self = EastWest::West;
    const AXIS: &'static str = "longitude";

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "E" => Some(EastWest::East),
            "W" => Some(EastWest::West),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        Hemisphere::from(self).symbol()
    }
}

impl From<NorthSouth> for Hemisphere {
    fn from(direction: NorthSouth) -> Self {
        match direction {
            NorthSouth::North => Hemisphere::North,
            NorthSouth::South => Hemisphere::South,
        }
    }
}

impl From<EastWest> for Hemisphere {
    fn from(direction: EastWest) -> Self {
        match direction {
            EastWest::East => Hemisphere::East,
            EastWest::West => Hemisphere::West,
        }
    }
}

impl TryFrom<Hemisphere> for NorthSouth {
    type Error = Hemisphere;

    fn try_from(hemisphere: Hemisphere) -> std::result::Result<Self, Self::Error> {
        match hemisphere {
            Hemisphere::North => Ok(NorthSouth::North),
            Hemisphere::South => Ok(NorthSouth::South),
            other => Err(other),
        }
    }
}

impl TryFrom<Hemisphere> for EastWest {
    type Error = Hemisphere;

    fn try_from(hemisphere: Hemisphere) -> std::result::Result<Self, Self::Error> {
        match hemisphere {
            Hemisphere::East => Ok(EastWest::East),
            Hemisphere::West => Ok(EastWest::West),
            other => Err(other),
        }
    }
}

/// A signed angle in decimal degrees on the axis of `D`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent, bound = ""))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Coordinate<D> {
    degrees: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    axis: PhantomData<D>,
}

/// Latitude in decimal degrees, positive North.
pub type Latitude = Coordinate<NorthSouth>;

/// Longitude in decimal degrees, positive East.
pub type Longitude = Coordinate<EastWest>;

/// Magnetic variation in degrees, positive East.
pub type Variation = Coordinate<EastWest>;

impl<D> Default for Coordinate<D> {
    fn default() -> Self {
        Self {
            degrees: 0.0,
            axis: PhantomData,
        }
    }
}

impl<D: Direction> Coordinate<D> {
    /// Wraps a signed decimal-degree value.
    pub const fn new(degrees: f64) -> Self {
        Self {
            degrees,
            axis: PhantomData,
        }
    }

    /// Decimal Degrees and direction.
    ///
    /// ```rust
    /// use nmea0183_codec::{Latitude, NorthSouth};
    ///
    /// assert_eq!(Latitude::from_dd(10.1, NorthSouth::South).degrees(), -10.1);
    /// ```
    pub fn from_dd(degrees: f64, direction: D) -> Self {
        Self::new(signed(degrees, direction))
    }

    /// Degrees, Minutes, Seconds and direction.
    pub fn from_dms(degrees: f64, minutes: f64, seconds: f64, direction: D) -> Self {
        Self::new(signed(degrees + minutes / 60.0 + seconds / 3600.0, direction))
    }

    /// Degrees, Decimal Minutes and direction.
    pub fn from_ddm(degrees: f64, minutes: f64, direction: D) -> Self {
        Self::new(signed(degrees + minutes / 60.0, direction))
    }

    /// The signed decimal-degree value.
    pub fn degrees(self) -> f64 {
        self.degrees
    }

    /// Non-negative values point North/East.
    pub fn direction(self) -> D {
        if self.degrees >= 0.0 {
            D::POSITIVE
        } else {
            D::NEGATIVE
        }
    }

    pub fn hemisphere(self) -> Hemisphere {
        self.direction().into()
    }

    /// Magnitude in Decimal Degrees and direction.
    pub fn to_dd(self) -> (f64, D) {
        (self.degrees.abs(), self.direction())
    }

    /// Degrees, Minutes, Seconds and direction. Degrees and minutes are whole numbers.
    ///
    /// ```rust
    /// use nmea0183_codec::{EastWest, Longitude};
    ///
    /// let (deg, min, sec, dir) = Longitude::new(-12.065).to_dms();
    /// assert_eq!((deg, min, dir), (12.0, 3.0, EastWest::West));
    /// assert!((sec - 54.0).abs() < 1e-6);
    /// ```
    pub fn to_dms(self) -> (f64, f64, f64, D) {
        let value = self.degrees.abs();
        let mut degrees = value.floor();
        let mut minutes = (60.0 * (value - degrees)).floor();
        let mut seconds = (3600.0 * ((value - degrees) - minutes / 60.0)).max(0.0);

        // floating point can leave a full minute in the seconds
        if seconds >= 60.0 - 1e-9 {
            minutes += 1.0;
            seconds = 0.0;
        }
        if minutes >= 60.0 {
            degrees += 1.0;
            minutes = 0.0;
        }

        (degrees, minutes, seconds, self.direction())
    }

    /// Degrees, Decimal Minutes and direction. Degrees is a whole number.
    pub fn to_ddm(self) -> (f64, f64, D) {
        let value = self.degrees.abs();
        let degrees = value.floor();
        (degrees, 60.0 * (value - degrees), self.direction())
    }

    /// Parses an NMEA `ddmm.mmmm` value whose direction is already known.
    ///
    /// The first two characters are the degrees and the rest are decimal minutes. Values
    /// shorter than three characters are read as plain decimal degrees.
    pub fn parse_ddm(value: &str, direction: D) -> Result<Self> {
        parse_ddm(value, direction, D::AXIS)
    }

    /// Parses an NMEA value/hemisphere field pair.
    ///
    /// Both fields empty yields the zero coordinate. A value without a hemisphere, a
    /// hemisphere without a value, or a hemisphere letter from the other axis is an error.
    ///
    /// ```rust
    /// use nmea0183_codec::Latitude;
    ///
    /// let lat = Latitude::from_fields("1203.9", "S").unwrap();
    /// assert!((lat.degrees() + 12.065).abs() < 1e-9);
    ///
    /// assert_eq!(Latitude::from_fields("", "").unwrap().degrees(), 0.0);
    /// assert!(Latitude::from_fields("", "N").is_err());
    /// assert!(Latitude::from_fields("1203.9", "E").is_err());
    /// ```
    pub fn from_fields(value: &str, hemisphere: &str) -> Result<Self> {
        Self::parse_fields(value, hemisphere, D::AXIS)
    }

    pub(crate) fn parse_fields(value: &str, hemisphere: &str, name: &'static str) -> Result<Self> {
        match (value.is_empty(), hemisphere.is_empty()) {
            (true, true) => Ok(Self::default()),
            (true, false) => Err(Error::invalid_field(name, hemisphere)),
            (false, true) => Err(Error::invalid_field(name, value)),
            (false, false) => {
                let direction = D::from_symbol(hemisphere)
                    .ok_or_else(|| Error::invalid_field(name, hemisphere))?;
                parse_ddm(value, direction, name)
            }
        }
    }

    /// Formats the magnitude as NMEA `ddmm.mmmm`.
    ///
    /// Degrees are always padded to two digits, minutes carry up to six decimals with
    /// trailing zeros trimmed, keeping at least one. A non-finite value has no field
    /// representation and formats as the empty field.
    ///
    /// ```rust
    /// use nmea0183_codec::Latitude;
    ///
    /// assert_eq!(Latitude::new(12.065).to_field(), "1203.9");
    /// assert_eq!(Latitude::new(-12.065).to_field(), "1203.9");
    /// assert_eq!(Latitude::new(0.0).to_field(), "0000.0");
    /// ```
    pub fn to_field(self) -> String {
        if !self.degrees.is_finite() {
            return String::new();
        }

        let (mut degrees, minutes, _) = self.to_ddm();

        let mut minutes = format!("{minutes:09.6}");
        if minutes.starts_with("60") {
            degrees += 1.0;
            minutes = String::from("00.000000");
        }

        let trimmed = minutes.trim_end_matches('0');
        let minutes = if trimmed.ends_with('.') {
            &minutes[..trimmed.len() + 1]
        } else {
            trimmed
        };

        format!("{:02}{minutes}", degrees as u64)
    }
}

fn signed<D: Direction>(magnitude: f64, direction: D) -> f64 {
    if direction.is_positive() {
        magnitude
    } else {
        -magnitude
    }
}

fn parse_ddm<D: Direction>(value: &str, direction: D, name: &'static str) -> Result<Coordinate<D>> {
    // the hemisphere carries the sign
    if value.starts_with(['+', '-']) {
        return Err(Error::invalid_field(name, value));
    }

    if value.len() < 3 {
        let degrees = number(value).ok_or_else(|| Error::invalid_field(name, value))?;
        return Ok(Coordinate::from_dd(degrees, direction));
    }

    let (degrees, minutes) = value
        .get(..2)
        .zip(value.get(2..))
        .and_then(|(degrees, minutes)| number(degrees).zip(number(minutes)))
        .ok_or_else(|| Error::invalid_field(name, value))?;

    Ok(Coordinate::from_ddm(degrees, minutes, direction))
}

fn number(value: &str) -> Option<f64> {
    let parsed: nom::IResult<&str, f64> =
        consumed(verify(double, |v: &f64| v.is_finite()), ErrorKind::Float).parse(value);
    parsed.ok().map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.000001;

    fn assert_close(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_from_ddm() {
        assert_close(12.065, Latitude::from_ddm(12.0, 3.9, NorthSouth::North).degrees());
        assert_close(-12.065, Latitude::from_ddm(12.0, 3.9, NorthSouth::South).degrees());
        assert_close(12.065, Longitude::from_ddm(12.0, 3.9, EastWest::East).degrees());
        assert_close(-12.065, Longitude::from_ddm(12.0, 3.9, EastWest::West).degrees());
    }

    #[test]
    fn test_from_dd() {
        assert_close(10.1, Latitude::from_dd(10.1, NorthSouth::North).degrees());
        assert_close(-10.1, Latitude::from_dd(10.1, NorthSouth::South).degrees());
        assert_close(10.1, Longitude::from_dd(10.1, EastWest::East).degrees());
        assert_close(-10.1, Longitude::from_dd(10.1, EastWest::West).degrees());
    }

    #[test]
    fn test_from_dms() {
        assert_close(12.065, Latitude::from_dms(12.0, 3.0, 54.0, NorthSouth::North).degrees());
        assert_close(-12.065, Latitude::from_dms(12.0, 3.0, 54.0, NorthSouth::South).degrees());
        assert_close(12.065, Longitude::from_dms(12.0, 3.0, 54.0, EastWest::East).degrees());
        assert_close(-12.065, Longitude::from_dms(12.0, 3.0, 54.0, EastWest::West).degrees());
    }

    #[test]
    fn test_direction() {
        assert_eq!(Latitude::new(1.0).direction(), NorthSouth::North);
        assert_eq!(Latitude::new(-1.0).direction(), NorthSouth::South);
        assert_eq!(Longitude::new(1.0).direction(), EastWest::East);
        assert_eq!(Longitude::new(-1.0).direction(), EastWest::West);
        assert_eq!(Latitude::new(0.0).direction(), NorthSouth::North);

        assert_eq!(Latitude::new(-1.0).hemisphere(), Hemisphere::South);
        assert_eq!(Longitude::new(1.0).hemisphere(), Hemisphere::East);
    }

    #[test]
    fn test_to_dd() {
        let (deg, dir) = Latitude::new(12.065).to_dd();
        assert_close(12.065, deg);
        assert_eq!(dir, NorthSouth::North);

        let (deg, dir) = Longitude::new(-12.065).to_dd();
        assert_close(12.065, deg);
        assert_eq!(dir, EastWest::West);
    }

    #[test]
    fn test_to_ddm() {
        let (deg, min, dir) = Latitude::new(12.065).to_ddm();
        assert_close(12.0, deg);
        assert_close(3.9, min);
        assert_eq!(dir, NorthSouth::North);

        let (deg, min, dir) = Longitude::new(-12.065).to_ddm();
        assert_close(12.0, deg);
        assert_close(3.9, min);
        assert_eq!(dir, EastWest::West);
    }

    #[test]
    fn test_to_dms() {
        let (deg, min, sec, dir) = Latitude::new(12.065).to_dms();
        assert_close(12.0, deg);
        assert_close(3.0, min);
        assert_close(54.0, sec);
        assert_eq!(dir, NorthSouth::North);

        let (deg, min, sec, dir) = Latitude::new(-12.065).to_dms();
        assert_close(12.0, deg);
        assert_close(3.0, min);
        assert_close(54.0, sec);
        assert_eq!(dir, NorthSouth::South);
    }

    #[test]
    fn test_to_dms_carries_full_minutes() {
        let (deg, min, sec, _) = Latitude::new(10.99999999999999).to_dms();
        assert_eq!((deg, min, sec), (11.0, 0.0, 0.0));

        let value = Latitude::from_dms(10.0, 59.0, 59.9999999999, NorthSouth::North);
        let (deg, min, sec, dir) = value.to_dms();
        assert!(min < 60.0, "got {min} minutes");
        assert!(sec < 60.0, "got {sec} seconds");
        assert_eq!(dir, NorthSouth::North);
        assert_close(value.degrees(), deg + min / 60.0 + sec / 3600.0);
    }

    #[test]
    fn test_conversions_recover_inputs() {
        let cases = [
            (0.0, 0.0, 0.0),
            (12.0, 3.0, 54.0),
            (45.0, 30.0, 15.5),
            (89.0, 59.0, 59.0),
            (179.0, 7.0, 30.25),
        ];

        for (d, m, s) in cases {
            for dir in [EastWest::East, EastWest::West] {
                let (deg, min, sec, back) = Longitude::from_dms(d, m, s, dir).to_dms();
                assert_close(d, deg);
                assert_close(m, min);
                assert!((s - sec).abs() < 1e-6, "{d} {m} {s}: got {sec}");
                if d + m + s > 0.0 {
                    assert_eq!(back, dir);
                }

                let minutes = m + s / 60.0;
                let (deg, min, back) = Longitude::from_ddm(d, minutes, dir).to_ddm();
                assert_close(d, deg);
                assert_close(minutes, min);
                if d + minutes > 0.0 {
                    assert_eq!(back, dir);
                }
            }

            let (deg, back) = Latitude::from_dd(d + m / 60.0, NorthSouth::South).to_dd();
            assert_close(d + m / 60.0, deg);
            if d + m > 0.0 {
                assert_eq!(back, NorthSouth::South);
            }
        }
    }

    #[test]
    fn test_parse_ddm() {
        let c = Latitude::parse_ddm("1203.9", NorthSouth::North).unwrap();
        assert_close(12.065, c.degrees());
        let c = Latitude::parse_ddm("1203.9", NorthSouth::South).unwrap();
        assert_close(-12.065, c.degrees());

        // two-digit degrees on every axis
        let c = Longitude::parse_ddm("02315.4370", EastWest::West).unwrap();
        assert_close(-7.2572833333, c.degrees());

        // shorter than three characters is plain decimal degrees
        let c = Latitude::parse_ddm("5", NorthSouth::South).unwrap();
        assert_close(-5.0, c.degrees());

        assert!(Latitude::parse_ddm("ab03.9", NorthSouth::North).is_err());
        assert!(Latitude::parse_ddm("12xx", NorthSouth::North).is_err());
        assert!(Latitude::parse_ddm("x", NorthSouth::North).is_err());

        // the hemisphere carries the sign
        for signed in ["-1203.9", "+1203.9", "-5"] {
            assert_eq!(
                Latitude::parse_ddm(signed, NorthSouth::North),
                Err(Error::InvalidField {
                    field: "latitude",
                    value: signed.to_string()
                })
            );
        }
    }

    #[test]
    fn test_from_fields() {
        let c = Longitude::from_fields("1203.9", "W").unwrap();
        assert_close(-12.065, c.degrees());

        assert_eq!(Longitude::from_fields("", ""), Ok(Longitude::default()));
        assert_eq!(
            Longitude::from_fields("", "W"),
            Err(Error::InvalidField {
                field: "longitude",
                value: "W".to_string()
            })
        );
        assert_eq!(
            Longitude::from_fields("1203.9", ""),
            Err(Error::InvalidField {
                field: "longitude",
                value: "1203.9".to_string()
            })
        );
        assert!(Latitude::from_fields("-1203.9", "N").is_err());
        assert!(Longitude::from_fields("1203.9", "N").is_err());
        assert!(Latitude::from_fields("1203.9", "X").is_err());
    }

    #[test]
    fn test_to_field() {
        assert_eq!(Latitude::new(12.065).to_field(), "1203.9");
        assert_eq!(Latitude::new(-12.065).to_field(), "1203.9");
        assert_eq!(Latitude::new(14.751793333333334).to_field(), "1445.1076");
        assert_eq!(Longitude::new(-7.2572833333333335).to_field(), "0715.437");
        assert_eq!(Longitude::new(0.0).to_field(), "0000.0");
        assert_eq!(Longitude::new(5.5).to_field(), "0530.0");
        assert_eq!(Longitude::new(123.5).to_field(), "12330.0");
        // 59.99999999 minutes rounds up into the degrees
        assert_eq!(Latitude::new(10.999_999_999_9).to_field(), "1100.0");

        assert_eq!(Latitude::new(f64::NAN).to_field(), "");
        assert_eq!(Longitude::new(f64::NEG_INFINITY).to_field(), "");
    }

    #[test]
    fn test_field_round_trip() {
        for value in [14.751793333333334, -7.2572833333333335, 0.5, -45.25] {
            let c = Latitude::new(value);
            let back = Latitude::from_fields(&c.to_field(), c.direction().symbol()).unwrap();
            assert_close(value, back.degrees());
        }
    }

    #[test]
    fn test_hemisphere_conversions() {
        assert_eq!(Hemisphere::from(NorthSouth::North), Hemisphere::North);
        assert_eq!(Hemisphere::from(EastWest::West), Hemisphere::West);
        assert_eq!(NorthSouth::try_from(Hemisphere::South), Ok(NorthSouth::South));
        assert_eq!(NorthSouth::try_from(Hemisphere::East), Err(Hemisphere::East));
        assert_eq!(EastWest::try_from(Hemisphere::North), Err(Hemisphere::North));
        assert!(Hemisphere::East.is_positive());
        assert!(!Hemisphere::South.is_positive());
        assert_eq!(Hemisphere::from_symbol("W"), Some(Hemisphere::West));
        assert_eq!(Hemisphere::from_symbol("X"), None);
        assert_eq!(NorthSouth::South.symbol(), "S");
        assert_eq!(EastWest::East.symbol(), "E");
    }
}
