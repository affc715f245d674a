//! Capture-date extraction.
//! Reads the EXIF block of an image and returns the calendar date it was taken.
//! Every failure here means "skip this file"; callers decide how loudly.

use chrono::NaiveDate;
use exif::{In, Reader, Tag, Value};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use thiserror::Error;

/// Tags consulted in order; the first one holding a valid timestamp wins.
const TIMESTAMP_TAGS: [Tag; 3] = [Tag::DateTimeOriginal, Tag::DateTimeDigitized, Tag::DateTime];

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("cannot open file: {0}")]
    Open(#[source] io::Error),

    #[error("no readable EXIF data: {0}")]
    Decode(#[source] exif::Error),

    #[error("EXIF data has no capture timestamp")]
    MissingTimestamp,

    #[error("EXIF capture timestamp is not a valid date: {0}")]
    InvalidTimestamp(String),
}

/// Calendar date a photo was captured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaptureDate(NaiveDate);

impl CaptureDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Name of the destination sub-directory, `YYYY-MM-DD`.
    pub fn dir_name(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for CaptureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dir_name())
    }
}

/// Parse an EXIF ASCII timestamp (`YYYY:MM:DD HH:MM:SS`) down to its date.
pub fn parse_exif_timestamp(raw: &[u8]) -> Result<CaptureDate, CaptureError> {
    let invalid = || CaptureError::InvalidTimestamp(String::from_utf8_lossy(raw).into_owned());
    let dt = exif::DateTime::from_ascii(raw).map_err(|_| invalid())?;
    CaptureDate::from_ymd(i32::from(dt.year), u32::from(dt.month), u32::from(dt.day))
        .ok_or_else(invalid)
}

/// Open `path`, decode its EXIF container and extract the capture date.
pub fn read_capture_date(path: &Path) -> Result<CaptureDate, CaptureError> {
    let file = File::open(path).map_err(CaptureError::Open)?;
    let mut reader = BufReader::new(file);
    let exif = Reader::new()
        .read_from_container(&mut reader)
        .map_err(CaptureError::Decode)?;

    let mut last_invalid = None;
    for tag in TIMESTAMP_TAGS {
        let Some(field) = exif.get_field(tag, In::PRIMARY) else {
            continue;
        };
        let Value::Ascii(ref parts) = field.value else {
            continue;
        };
        let Some(raw) = parts.first() else {
            continue;
        };
        match parse_exif_timestamp(raw) {
            Ok(date) => return Ok(date),
            Err(e) => last_invalid = Some(e),
        }
    }
    Err(last_invalid.unwrap_or(CaptureError::MissingTimestamp))
}
