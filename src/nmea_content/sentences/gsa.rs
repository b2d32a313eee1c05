#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    nmea_content::{Field, FixMode, SelectionMode, Sentence, SentenceType},
};

const MAX_SATELLITES: usize = 12;

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                      15 16  17
///         | | |                       | |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GSA {
    /// Selection mode
    pub selection_mode: SelectionMode,
    /// Fix mode
    pub fix_mode: FixMode,
    /// PRN numbers of the satellites used in the fix, up to 12, in field order
    pub fix_sats_prn: heapless::Vec<String, MAX_SATELLITES>,
    /// Position Dilution of Precision
    pub pdop: f64,
    /// Horizontal Dilution of Precision
    pub hdop: f64,
    /// Vertical Dilution of Precision
    pub vdop: f64,
}

impl Sentence for GSA {
    const SENTENCE_TYPE: SentenceType = SentenceType::GSA;

    const FIELDS: &'static [Field<Self>] = &[
        field!("selection mode" => selection_mode),
        field!("fix mode" => fix_mode),
        Field::new("satellites", MAX_SATELLITES, decode_satellites, encode_satellites),
        field!("PDOP" => pdop),
        field!("HDOP" => hdop),
        field!("VDOP" => vdop),
    ];
}

/// Empty slots are skipped; the remaining ids keep their order.
fn decode_satellites(gsa: &mut GSA, values: &[&str]) -> Result<()> {
    for &prn in values.iter().filter(|prn| !prn.is_empty()) {
        gsa.fix_sats_prn
            .push(prn.to_owned())
            .map_err(|_| Error::invalid_field("satellites", prn))?;
    }
    Ok(())
}

/// Always emits twelve slots, padding with empty fields.
fn encode_satellites(gsa: &GSA, out: &mut Vec<String>) {
    out.extend(gsa.fix_sats_prn.iter().cloned());
    out.extend(std::iter::repeat_n(String::new(), MAX_SATELLITES - gsa.fix_sats_prn.len()));
}
