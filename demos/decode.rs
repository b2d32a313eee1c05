use nmea0183_codec::{NmeaSentence, Result, decode_line};

const LINES: [&str; 5] = [
    "$GPGGA,232200.000,1445.1076,N,02315.4370,W,2,08,1.10,310.5,M,-31.9,M,0000,0000*54",
    "$GPGSA,A,3,03,06,19,24,12,28,01,17,,,,,1.39,1.10,0.84*00",
    "$GPRMC,232158.000,A,1445.1076,N,02315.4367,W,0.27,232.04,190516,,,D*79",
    "$GPRMC,232158.000,V,1445.1076,N,02315.4367,W,0.27,232.04,190516,,,A",
    "$GPVTG,230.17,T,,M,0.38,N,0.70,K,D*33",
];

fn print(result: Result<NmeaSentence>) {
    match result {
        Ok(NmeaSentence::GGA(gga)) => println!(
            "GGA at {}: {:.6}, {:.6} ({:?}, {} satellites)",
            gga.fix_time,
            gga.latitude.degrees(),
            gga.longitude.degrees(),
            gga.fix_quality,
            gga.satellite_count
        ),
        Ok(NmeaSentence::GSA(gsa)) => println!(
            "GSA {:?}: satellites {:?}, PDOP {}",
            gsa.fix_mode, gsa.fix_sats_prn, gsa.pdop
        ),
        Ok(NmeaSentence::RMC(rmc)) => println!(
            "RMC {:?}: {:?} at {} knots, re-encoded as {rmc}",
            rmc.status,
            rmc.timestamp(),
            rmc.speed_over_ground
        ),
        Err(e) => println!("Decoding error occurred: {e}"),
    }
}

fn main() {
    for line in LINES {
        print(decode_line(line));
    }
}
