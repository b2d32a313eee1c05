use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Time;

use crate::{
    Latitude, Longitude,
    nmea_content::{Field, FixQuality, Sentence, SentenceType},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// All fourteen fields are required. Both unit fields must be `M` or empty.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GGA {
    /// Fix time in UTC
    pub fix_time: Time,
    /// Latitude in decimal degrees
    pub latitude: Latitude,
    /// Longitude in decimal degrees
    pub longitude: Longitude,
    /// GPS Quality Indicator
    pub fix_quality: FixQuality,
    /// Number of satellites in use
    pub satellite_count: u32,
    /// Horizontal Dilution of Precision
    pub hdop: f64,
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: f64,
    /// Geoidal separation in meters, negative when the geoid is below the ellipsoid
    pub geoid_height: f64,
    /// Age of Differential GPS data, zero when DGPS is not used
    pub dgps_age: Duration,
    /// Differential reference station ID
    pub dgps_station: String,
}

impl Default for GGA {
    fn default() -> Self {
        Self {
            fix_time: Time::MIDNIGHT,
            latitude: Latitude::default(),
            longitude: Longitude::default(),
            fix_quality: FixQuality::default(),
            satellite_count: 0,
            hdop: 0.0,
            altitude: 0.0,
            geoid_height: 0.0,
            dgps_age: Duration::ZERO,
            dgps_station: String::new(),
        }
    }
}

impl Sentence for GGA {
    const SENTENCE_TYPE: SentenceType = SentenceType::GGA;

    const FIELDS: &'static [Field<Self>] = &[
        field!("time" => fix_time),
        coordinate!("latitude" => latitude),
        coordinate!("longitude" => longitude),
        field!("fix quality" => fix_quality),
        field!("satellites" => satellite_count),
        field!("HDOP" => hdop),
        field!("altitude" => altitude),
        Field::literal("altitude unit", "M"),
        field!("geoid height" => geoid_height),
        Field::literal("geoid height unit", "M"),
        field!("DGPS age" => dgps_age),
        field!("DGPS station" => dgps_station),
    ];
}
