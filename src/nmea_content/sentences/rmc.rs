#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime, Time};

use crate::{
    Error, Latitude, Longitude, Result, Variation,
    nmea_content::{Field, NavigationMode, Sentence, SentenceType, Status},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///                                                            12
///         1         2 3       4 5        6  7   8   9    10 11|
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m,*hh<CR><LF>
/// ```
///
/// The mode indicator (field 12) may be missing altogether. A usable mode
/// ([`NavigationMode::is_valid`]) is only accepted together with an active status.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    /// Fix time in UTC
    pub fix_time: Time,
    /// Fix date in UTC, `None` when the field is empty
    pub fix_date: Option<Date>,
    /// Status
    pub status: Status,
    /// Latitude in decimal degrees
    pub latitude: Latitude,
    /// Longitude in decimal degrees
    pub longitude: Longitude,
    /// Speed over ground in knots
    pub speed_over_ground: f64,
    /// Course over ground in degrees true
    pub course_over_ground: f64,
    /// Magnetic variation, positive East
    pub magnetic_variation: Variation,
    /// Mode indicator
    pub mode: NavigationMode,
}

impl RMC {
    /// Date and time of the fix merged, when the sentence carried a date.
    pub fn timestamp(&self) -> Option<PrimitiveDateTime> {
        self.fix_date
            .map(|date| PrimitiveDateTime::new(date, self.fix_time))
    }
}

impl Default for RMC {
    fn default() -> Self {
        Self {
            fix_time: Time::MIDNIGHT,
            fix_date: None,
            status: Status::default(),
            latitude: Latitude::default(),
            longitude: Longitude::default(),
            speed_over_ground: 0.0,
            course_over_ground: 0.0,
            magnetic_variation: Variation::default(),
            mode: NavigationMode::default(),
        }
    }
}

impl Sentence for RMC {
    const SENTENCE_TYPE: SentenceType = SentenceType::RMC;

    const FIELDS: &'static [Field<Self>] = &[
        field!("time" => fix_time),
        field!("status" => status),
        coordinate!("latitude" => latitude),
        coordinate!("longitude" => longitude),
        field!("speed" => speed_over_ground),
        field!("course" => course_over_ground),
        field!("date" => fix_date),
        coordinate!("magnetic variation" => magnetic_variation),
        field!("fix type" => mode).optional(),
    ];

    fn validate(&self) -> Result<()> {
        if self.status == Status::Void && self.mode.is_valid() {
            return Err(Error::Inconsistent {
                field: "fix type",
                value: self.mode.as_str().to_owned(),
                reason: "requires an active status",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use time::Month;

    use super::*;
    use crate::Raw;

    const EPSILON: f64 = 0.000001;

    fn rmc(line: &str) -> crate::Result<RMC> {
        RMC::decode(&Raw::parse(line)?)
    }

    #[test]
    fn test_rmc_decode() {
        let rmc =
            rmc("$GPRMC,232158.000,A,1445.1076,N,02315.4367,W,0.27,232.04,190516,,,D*79").unwrap();

        let date = Date::from_calendar_date(2016, Month::May, 19).unwrap();
        let time = Time::from_hms(23, 21, 58).unwrap();
        assert_eq!(rmc.timestamp(), Some(PrimitiveDateTime::new(date, time)));
        assert_eq!(rmc.status, Status::Active);
        assert!((rmc.latitude.degrees() - 14.751793333333334).abs() < EPSILON);
        assert!((rmc.longitude.degrees() + 7.257278333333333).abs() < EPSILON);
        assert_eq!(rmc.speed_over_ground, 0.27);
        assert_eq!(rmc.course_over_ground, 232.04);
        assert_eq!(rmc.magnetic_variation, Variation::default());
        assert_eq!(rmc.mode, NavigationMode::Differential);
    }

    #[test]
    fn test_rmc_encode() {
        let rmc =
            rmc("$GPRMC,232158.000,A,1445.1076,N,02315.4367,W,0.27,232.04,190516,,,D*79").unwrap();

        assert_eq!(
            rmc.to_string(),
            "$GPRMC,232158,A,1445.1076,N,0715.4367,W,0.27,232.04,190516,0000.0,E,D*0A"
        );
    }

    #[test]
    fn test_rmc_void_with_valid_mode() {
        assert_eq!(
            rmc("$GPRMC,232158.000,V,1445.1076,N,02315.4367,W,0.27,232.04,190516,,,A"),
            Err(Error::Inconsistent {
                field: "fix type",
                value: "A".to_string(),
                reason: "requires an active status"
            })
        );

        let rmc = rmc("$GPRMC,232158.000,V,1445.1076,N,02315.4367,W,0.27,232.04,190516,,,N").unwrap();
        assert_eq!(rmc.mode, NavigationMode::NotValid);
    }

    #[test]
    fn test_rmc_without_mode() {
        let rmc = rmc("$GPRMC,081836,A,3751.65,S,1450.736,E,000.0,360.0,130998,011.3,E").unwrap();

        assert_eq!(rmc.mode, NavigationMode::Unspecified);
        assert_eq!(
            rmc.fix_date,
            Some(Date::from_calendar_date(1998, Month::September, 13).unwrap())
        );
        assert!((rmc.latitude.degrees() + 37.860833333).abs() < EPSILON);
        assert!((rmc.longitude.degrees() - 14.8456).abs() < EPSILON);
        // variation shares the two-digit degree convention
        assert!((rmc.magnetic_variation.degrees() - 1.0216666667).abs() < EPSILON);
    }

    #[test]
    fn test_rmc_empty_date() {
        let rmc = rmc("$GPRMC,,V,,,,,,,,,,").unwrap();
        assert_eq!(rmc, RMC::default());
        assert_eq!(rmc.timestamp(), None);
    }

    #[test]
    fn test_rmc_field_count() {
        assert_eq!(
            rmc("$GPRMC,232158.000,A,1445.1076,N,02315.4367,W,0.27,232.04,190516,"),
            Err(Error::FieldCount {
                sentence: SentenceType::RMC,
                expected: 11,
                found: 10
            })
        );
    }
}
