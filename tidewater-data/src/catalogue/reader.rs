//! CSV decoding and row cleaning for port catalogues.

use std::{borrow::Cow, collections::HashSet, io::Read};

use csv::{ByteRecord, ReaderBuilder, Trim};
use log::{debug, warn};
use tidewater_core::Port;

use super::ImportError;

/// Header names a catalogue must provide, in `(name, region, lat, lon)` order.
pub const REQUIRED_COLUMNS: [&str; 4] = ["PortName", "Country", "Latitude", "Longitude"];

/// Field values treated as missing, compared case-insensitively.
const MISSING_MARKERS: [&str; 6] = ["", "na", "n/a", "nan", "null", "#n/a"];

/// Cleaned catalogue rows together with the counts of rejected rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogueRows {
    /// Accepted ports in file order.
    pub ports: Vec<Port>,
    /// Rows with at least one missing required field.
    pub skipped_incomplete: usize,
    /// Rows whose coordinates did not parse or were out of range.
    pub skipped_invalid: usize,
    /// Rows repeating an earlier port name, ignoring case.
    pub skipped_duplicate: usize,
}

enum Row {
    Accepted(Port),
    Incomplete,
    Invalid(String),
}

/// Read and clean a CSV port catalogue.
///
/// Fields are decoded as UTF-8, falling back to ISO-8859-1 for fields that
/// are not valid UTF-8. Extra columns are ignored. The first occurrence of a
/// name wins.
pub fn read_port_catalogue<R: Read>(input: R) -> Result<CatalogueRows, ImportError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);
    let headers = reader
        .byte_headers()
        .map_err(|source| ImportError::ReadHeaders { source })?;
    let columns = locate_columns(headers)?;

    let mut rows = CatalogueRows::default();
    let mut seen = HashSet::new();
    let mut record = ByteRecord::new();
    while reader
        .read_byte_record(&mut record)
        .map_err(|source| ImportError::ReadRecord { source })?
    {
        let line = record.position().map_or(0, csv::Position::line);
        match parse_row(&record, columns) {
            Row::Accepted(port) => {
                if seen.insert(port.name.to_lowercase()) {
                    rows.ports.push(port);
                } else {
                    debug!("line {line}: duplicate port name '{}' skipped", port.name);
                    rows.skipped_duplicate += 1;
                }
            }
            Row::Incomplete => rows.skipped_incomplete += 1,
            Row::Invalid(reason) => {
                warn!("line {line}: skipping port row: {reason}");
                rows.skipped_invalid += 1;
            }
        }
    }
    Ok(rows)
}

fn locate_columns(headers: &ByteRecord) -> Result<[usize; 4], ImportError> {
    let names: Vec<String> = headers
        .iter()
        .map(|raw| decode_field(raw).trim_start_matches('\u{feff}').to_owned())
        .collect();
    let mut columns = [0; 4];
    for (slot, column) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = names
            .iter()
            .position(|name| name == column)
            .ok_or(ImportError::MissingColumn { column })?;
    }
    Ok(columns)
}

fn parse_row(record: &ByteRecord, columns: [usize; 4]) -> Row {
    let [name, region, lat, lon] = columns.map(|index| {
        record
            .get(index)
            .map(decode_field)
            .filter(|value| !is_missing(value))
    });
    let (Some(name), Some(region), Some(lat), Some(lon)) = (name, region, lat, lon) else {
        return Row::Incomplete;
    };

    let Ok(latitude) = lat.parse::<f64>() else {
        return Row::Invalid(format!("latitude '{lat}' of {name} is not a number"));
    };
    let Ok(longitude) = lon.parse::<f64>() else {
        return Row::Invalid(format!("longitude '{lon}' of {name} is not a number"));
    };
    let port = Port::from_lat_lon(name, region, latitude, longitude);
    match port.validate_location() {
        Ok(()) => Row::Accepted(port),
        Err(err) => Row::Invalid(format!("{}: {err}", port.name)),
    }
}

fn is_missing(value: &str) -> bool {
    MISSING_MARKERS
        .iter()
        .any(|marker| value.eq_ignore_ascii_case(marker))
}

/// Decode a raw field as UTF-8, or byte-for-byte as ISO-8859-1 otherwise.
fn decode_field(raw: &[u8]) -> Cow<'_, str> {
    std::str::from_utf8(raw).map_or_else(
        |_| Cow::Owned(raw.iter().copied().map(char::from).collect()),
        Cow::Borrowed,
    )
}
