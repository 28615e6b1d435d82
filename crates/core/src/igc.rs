//! Minimal IGC header-record extraction.
//!
//! Pulls the handful of H records the service stores out of an uploaded IGC
//! file: the flight date (`HFDTE`), pilot (`PLT`), glider type (`GTY`) and
//! glider registration (`GID`). The flight date becomes the track's intrinsic
//! `recorded_at`; everything else is opaque payload. B records (GPS fixes)
//! are ignored entirely.

use chrono::{NaiveDate, NaiveTime};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Header fields extracted from an IGC file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgcHeaders {
    /// Flight date from the `HFDTE` record, at midnight UTC.
    pub recorded_at: Timestamp,
    pub pilot: Option<String>,
    pub glider: Option<String>,
    pub glider_id: Option<String>,
}

/// Parse the header section of an IGC file.
///
/// Returns [`CoreError::MalformedInput`] when no valid `HFDTE` date record is
/// present; a track without its intrinsic date cannot be ingested.
pub fn parse_headers(content: &str) -> Result<IgcHeaders, CoreError> {
    let mut date: Option<NaiveDate> = None;
    let mut pilot = None;
    let mut glider = None;
    let mut glider_id = None;

    for line in content.lines() {
        let line = line.trim_end();
        let bytes = line.as_bytes();
        if bytes.len() < 5 || bytes[0] != b'H' {
            continue;
        }
        // H records are `H<source><code>[:]<value>`; the three-letter code
        // sits at bytes 2..5 regardless of source.
        match &bytes[2..5] {
            b"DTE" => date = parse_date_record(line),
            b"PLT" => pilot = pilot.or_else(|| header_value(line)),
            b"GTY" => glider = glider.or_else(|| header_value(line)),
            b"GID" => glider_id = glider_id.or_else(|| header_value(line)),
            _ => {}
        }
    }

    let date = date.ok_or_else(|| {
        CoreError::MalformedInput("IGC content has no valid HFDTE date record".into())
    })?;

    Ok(IgcHeaders {
        recorded_at: date.and_time(NaiveTime::MIN).and_utc(),
        pilot,
        glider,
        glider_id,
    })
}

/// Value after the colon in an H record, e.g. `HFPLTPILOTINCHARGE:John Doe`.
fn header_value(line: &str) -> Option<String> {
    let (_, value) = line.split_once(':')?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse `HFDTE250418` or the long form `HFDTEDATE:250418,01` into a date.
///
/// Two-digit years pivot into the 2000s; the format predates 2000 but files
/// from that era no longer circulate.
fn parse_date_record(line: &str) -> Option<NaiveDate> {
    let raw = match line.split_once(':') {
        Some((_, rest)) => rest,
        None => line.get(5..)?,
    };
    let digits: Vec<u32> = raw
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .filter_map(|c| c.to_digit(10))
        .collect();
    if digits.len() < 6 {
        return None;
    }
    let day = digits[0] * 10 + digits[1];
    let month = digits[2] * 10 + digits[3];
    let year = 2000 + (digits[4] * 10 + digits[5]) as i32;
    NaiveDate::from_ymd_opt(year, month, day)
}
