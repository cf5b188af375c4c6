//! Trajectory log ingestion.
//!
//! Simulator exports (OpenRocket CSV and friends) are comment-prefixed
//! tabular files: one or more `#` lines carry metadata and the
//! comma-separated header, then plain data rows follow. Column names vary
//! by export settings because units get appended (`Time (s)`,
//! `Position East of launch (m)`, `Roll rate (°/s)`), so columns are
//! located by substring match rather than exact name.
//!
//! Per-row problems are never fatal: bad rows are skipped, counted, and
//! logged at debug level. Only a missing header or a missing required
//! column aborts ingestion.

use std::borrow::Cow;

/// Logical column names, matched as substrings of header fields.
pub const TIME_FIELD: &str = "Time";
pub const EAST_FIELD: &str = "Position East";
pub const NORTH_FIELD: &str = "Position North";
pub const ALTITUDE_FIELD: &str = "Altitude";
pub const ROLL_RATE_FIELD: &str = "Roll rate";

const COMMENT_MARKER: char = '#';
const FIELD_SEPARATOR: char = ',';

/// Fatal ingestion errors. Raised before any row is processed.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("no header line found before data begins")]
    MissingHeader,

    #[error("column '{name}' not found in header")]
    MissingColumn { name: String },
}

/// One accepted sample of the trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryRow {
    /// Simulation time in seconds.
    pub time: f64,
    /// Position east of the launch site (meters).
    pub east: f64,
    /// Position north of the launch site (meters).
    pub north: f64,
    /// Altitude above the launch site (meters).
    pub altitude: f64,
    /// Roll rate in degrees per second. `None` when the column was not
    /// requested; may be NaN when the simulator logged no value.
    pub roll_rate: Option<f64>,
}

/// Physical column positions of the logical fields, resolved once per
/// ingestion and immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    pub time: usize,
    pub east: usize,
    pub north: usize,
    pub altitude: usize,
    /// Resolved only when rotation animation was requested.
    pub roll_rate: Option<usize>,
}

impl ColumnIndex {
    /// Resolve logical names against the header fields. The first field
    /// containing the name as a (case-sensitive) substring wins.
    pub fn resolve(header_fields: &[String], want_roll_rate: bool) -> Result<Self, IngestError> {
        let find = |name: &str| {
            header_fields
                .iter()
                .position(|field| field.contains(name))
                .ok_or_else(|| IngestError::MissingColumn {
                    name: name.to_string(),
                })
        };

        Ok(Self {
            time: find(TIME_FIELD)?,
            east: find(EAST_FIELD)?,
            north: find(NORTH_FIELD)?,
            altitude: find(ALTITUDE_FIELD)?,
            roll_rate: if want_roll_rate {
                Some(find(ROLL_RATE_FIELD)?)
            } else {
                None
            },
        })
    }
}

/// A parsed trajectory log: resolved columns plus the raw data region.
///
/// Rows are produced lazily by [`TrajectoryLog::rows`] in input order.
#[derive(Debug, Clone)]
pub struct TrajectoryLog {
    header_fields: Vec<String>,
    columns: ColumnIndex,
    data: String,
}

impl TrajectoryLog {
    /// Parse raw log bytes.
    ///
    /// Decoding is lossy UTF-8: exports routinely carry 8-bit Latin text in
    /// comments and unit suffixes, and must not abort parsing. Numeric
    /// fields are ASCII and survive the lossy pass.
    ///
    /// Header detection scans from the top: a line that (after trimming)
    /// starts with `#` and contains `,` is a header candidate, and the most
    /// recent candidate before the first non-comment line wins. Everything
    /// from that first non-comment line onward is the data region; stray
    /// comment lines inside it simply fail numeric parsing and are skipped
    /// like any other bad row.
    pub fn parse(bytes: &[u8], want_roll_rate: bool) -> Result<Self, IngestError> {
        let text: Cow<'_, str> = String::from_utf8_lossy(bytes);

        let mut header_line: Option<&str> = None;
        let mut data = String::new();
        let mut in_data = false;

        for line in text.lines() {
            if in_data {
                data.push_str(line);
                data.push('\n');
                continue;
            }
            let trimmed = line.trim();
            if trimmed.starts_with(COMMENT_MARKER) {
                if trimmed.contains(FIELD_SEPARATOR) {
                    header_line = Some(trimmed);
                }
            } else {
                in_data = true;
                data.push_str(line);
                data.push('\n');
            }
        }

        let header_line = header_line.ok_or(IngestError::MissingHeader)?;
        let header_fields: Vec<String> = header_line
            .trim_start_matches(COMMENT_MARKER)
            .trim()
            .split(FIELD_SEPARATOR)
            .map(|field| field.trim().to_string())
            .collect();

        let columns = ColumnIndex::resolve(&header_fields, want_roll_rate)?;

        Ok(Self {
            header_fields,
            columns,
            data,
        })
    }

    /// The header fields the columns were resolved from.
    pub fn header_fields(&self) -> &[String] {
        &self.header_fields
    }

    /// The resolved column positions.
    pub fn columns(&self) -> &ColumnIndex {
        &self.columns
    }

    /// Lazily iterate accepted rows in input order, skipping bad ones.
    pub fn rows(&self) -> Rows<'_> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(self.data.as_bytes());
        Rows {
            records: reader.into_records(),
            columns: self.columns.clone(),
            skipped: 0,
        }
    }
}

/// Streaming row iterator over a log's data region.
pub struct Rows<'a> {
    records: csv::StringRecordsIntoIter<&'a [u8]>,
    columns: ColumnIndex,
    skipped: usize,
}

impl Rows<'_> {
    /// Number of rows dropped so far (parse failures, short lines,
    /// non-finite positions).
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Iterator for Rows<'_> {
    type Item = TrajectoryRow;

    fn next(&mut self) -> Option<TrajectoryRow> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => {
                    tracing::debug!("skipping unreadable row: {e}");
                    self.skipped += 1;
                    continue;
                }
            };
            match parse_row(&record, &self.columns) {
                Ok(row) => return Some(row),
                Err(reason) => {
                    tracing::debug!("skipping row: {reason}");
                    self.skipped += 1;
                }
            }
        }
    }
}

fn parse_row(record: &csv::StringRecord, columns: &ColumnIndex) -> Result<TrajectoryRow, String> {
    let field = |idx: usize| -> Result<f64, String> {
        let raw = record
            .get(idx)
            .ok_or_else(|| format!("column {idx} out of range"))?;
        raw.parse::<f64>()
            .map_err(|_| format!("'{raw}' is not numeric"))
    };

    let time = field(columns.time)?;
    let east = field(columns.east)?;
    let north = field(columns.north)?;
    let altitude = field(columns.altitude)?;

    if !(east.is_finite() && north.is_finite() && altitude.is_finite()) {
        return Err("non-finite position component".to_string());
    }

    // A roll cell that fails to parse drops the whole row; a NaN parses
    // fine and is left for the synthesizer to ignore.
    let roll_rate = match columns.roll_rate {
        Some(idx) => Some(field(idx)?),
        None => None,
    };

    Ok(TrajectoryRow {
        time,
        east,
        north,
        altitude,
        roll_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Simulation export
# Time (s),Altitude (m),Position East of launch (m),Position North of launch (m),Roll rate (deg/s)
0.0,0.0,0.0,0.0,0.0
0.1,1.2,0.01,0.02,45.0
0.2,4.8,0.03,0.05,90.0
";

    #[test]
    fn test_parses_rows_in_order() {
        let log = TrajectoryLog::parse(SAMPLE.as_bytes(), true).unwrap();
        let rows: Vec<TrajectoryRow> = log.rows().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].time, 0.0);
        assert_eq!(rows[2].altitude, 4.8);
        assert_eq!(rows[1].roll_rate, Some(45.0));
    }

    #[test]
    fn test_last_comment_header_wins() {
        let input = "\
# exported by simulator, version 23.09
# Time,Altitude,Position East,Position North
0.0,1.0,2.0,3.0
";
        let log = TrajectoryLog::parse(input.as_bytes(), false).unwrap();
        assert_eq!(log.columns().time, 0);
        assert_eq!(log.columns().altitude, 1);
        assert_eq!(log.columns().east, 2);
        assert_eq!(log.columns().north, 3);
    }

    #[test]
    fn test_missing_header_is_fatal() {
        let input = "0.0,1.0,2.0,3.0\n";
        let err = TrajectoryLog::parse(input.as_bytes(), false).unwrap_err();
        assert!(matches!(err, IngestError::MissingHeader));
    }

    #[test]
    fn test_missing_column_names_the_field() {
        let input = "# Time (s),Altitude (m),Position East of launch (m)\n0.0,1.0,2.0\n";
        let err = TrajectoryLog::parse(input.as_bytes(), false).unwrap_err();
        match err {
            IngestError::MissingColumn { name } => assert_eq!(name, NORTH_FIELD),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_roll_rate_column_optional_unless_requested() {
        let input = "# Time,Position East,Position North,Altitude\n0.0,0.0,0.0,0.0\n";
        assert!(TrajectoryLog::parse(input.as_bytes(), false).is_ok());

        let err = TrajectoryLog::parse(input.as_bytes(), true).unwrap_err();
        match err {
            IngestError::MissingColumn { name } => assert_eq!(name, ROLL_RATE_FIELD),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_first_substring_match_wins() {
        let fields = vec![
            "Time (s)".to_string(),
            "Time step (s)".to_string(),
            "Position East of launch (m)".to_string(),
            "Position North of launch (m)".to_string(),
            "Altitude (m)".to_string(),
        ];
        let columns = ColumnIndex::resolve(&fields, false).unwrap();
        assert_eq!(columns.time, 0);
    }

    #[test]
    fn test_bad_rows_are_skipped_not_fatal() {
        let input = "\
# Time,Position East,Position North,Altitude
0.0,0.0,0.0,0.0
not,a,number,row
0.2,1.0
0.3,1.0,2.0,NaN
0.4,1.0,2.0,3.0
";
        let log = TrajectoryLog::parse(input.as_bytes(), false).unwrap();
        let mut rows = log.rows();
        let accepted: Vec<TrajectoryRow> = rows.by_ref().collect();

        assert_eq!(accepted.len(), 2);
        assert_eq!(accepted[1].time, 0.4);
        assert_eq!(rows.skipped(), 3);
    }

    #[test]
    fn test_comment_lines_inside_data_are_skipped() {
        let input = "\
# Time,Position East,Position North,Altitude
0.0,0.0,0.0,0.0
# Event LAUNCH occurred at t=0 seconds
0.1,0.0,0.0,1.0
";
        let log = TrajectoryLog::parse(input.as_bytes(), false).unwrap();
        let mut rows = log.rows();
        let accepted: Vec<TrajectoryRow> = rows.by_ref().collect();

        assert_eq!(accepted.len(), 2);
        assert_eq!(rows.skipped(), 1);
    }

    #[test]
    fn test_unparseable_roll_cell_drops_the_row() {
        let input = "\
# Time,Position East,Position North,Altitude,Roll rate
0.0,0.0,0.0,0.0,bogus
0.1,0.0,0.0,1.0,NaN
";
        let log = TrajectoryLog::parse(input.as_bytes(), true).unwrap();
        let mut rows = log.rows();
        let accepted: Vec<TrajectoryRow> = rows.by_ref().collect();

        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].time, 0.1);
        assert!(accepted[0].roll_rate.unwrap().is_nan());
        assert_eq!(rows.skipped(), 1);
    }

    #[test]
    fn test_latin1_bytes_do_not_abort_parsing() {
        // Comments and unit suffixes as written by a Latin-1 export:
        // 0xF1 = 'ñ', 0xB0 = '°'. Invalid UTF-8 on purpose.
        let mut input: Vec<u8> = Vec::new();
        input.extend_from_slice(b"# Simulaci\xF3n de cohete, a\xF1adido\n");
        input.extend_from_slice(
            b"# Time (s),Position East of launch (m),Position North of launch (m),Altitude (m),Roll rate (\xB0/s)\n",
        );
        input.extend_from_slice(b"0.0,0.0,0.0,0.0,0.0\n");
        input.extend_from_slice(b"0.5,1.0,2.0,3.0,90.0\n");

        let log = TrajectoryLog::parse(&input, true).unwrap();
        let rows: Vec<TrajectoryRow> = log.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].roll_rate, Some(90.0));
    }

    #[test]
    fn test_all_comments_no_data_yields_zero_rows() {
        let input = "# Time,Position East,Position North,Altitude\n";
        let log = TrajectoryLog::parse(input.as_bytes(), false).unwrap();
        let mut rows = log.rows();
        assert!(rows.next().is_none());
        assert_eq!(rows.skipped(), 0);
    }
}
