//! Constraint records as CSV.

use recolor_base::{Color, ConstraintRecord, Error, Result, VertexId};
use std::io::{Read, Write};

/// Column names of the optional header row.
pub const HEADER: [&str; 4] = ["vertex1", "vertex2", "color1", "color2"];

/// Streams [`ConstraintRecord`]s out of CSV input.
///
/// A first row equal to [`HEADER`] is skipped. Positions in errors count data
/// rows from 1.
pub struct RecordReader<R: Read> {
    rows: csv::StringRecordsIntoIter<R>,
    position: u64,
    started: bool,
}

impl<R: Read> RecordReader<R> {
    /// Creates a reader over CSV text.
    pub fn new(reader: R) -> Self {
        let rows = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader)
            .into_records();
        Self {
            rows,
            position: 0,
            started: false,
        }
    }

    fn next_row(&mut self) -> Option<Result<csv::StringRecord>> {
        loop {
            let row = match self.rows.next()? {
                Ok(row) => row,
                Err(err) => return Some(Err(self.csv_error(err))),
            };
            let first = !self.started;
            self.started = true;
            if first && row.iter().eq(HEADER.iter().copied()) {
                continue;
            }
            return Some(Ok(row));
        }
    }

    fn csv_error(&self, err: csv::Error) -> Error {
        match err.into_kind() {
            csv::ErrorKind::Io(io) => Error::Io(io),
            other => Error::malformed(self.position + 1, "<undecodable row>", format!("{other:?}")),
        }
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<ConstraintRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match self.next_row()? {
            Ok(row) => row,
            Err(err) => return Some(Err(err)),
        };
        self.position += 1;
        Some(parse_row(self.position, &row))
    }
}

fn parse_row(position: u64, row: &csv::StringRecord) -> Result<ConstraintRecord> {
    let text = row.iter().collect::<Vec<_>>().join(",");
    if row.len() != HEADER.len() {
        return Err(Error::malformed(
            position,
            text,
            format!("expected {} fields, found {}", HEADER.len(), row.len()),
        ));
    }

    let vertex = |field: &str| -> Result<VertexId> {
        if field.is_empty() {
            Err(Error::malformed(position, &text, "empty vertex identifier"))
        } else {
            Ok(VertexId::from(field))
        }
    };
    let color = |field: &str| -> Result<Color> {
        field
            .parse::<Color>()
            .map_err(|e| Error::malformed(position, &text, e.to_string()))
    };

    Ok(ConstraintRecord {
        vertex1: vertex(&row[0])?,
        vertex2: vertex(&row[1])?,
        color1: color(&row[2])?,
        color2: color(&row[3])?,
    })
}

/// Reads every record, failing on the first malformed one.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<ConstraintRecord>> {
    RecordReader::new(reader).collect()
}

/// Writes records with a header row.
pub fn write_records<W: Write>(writer: W, records: &[ConstraintRecord]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER).map_err(write_error)?;
    for record in records {
        out.write_record([
            record.vertex1.as_str(),
            record.vertex2.as_str(),
            record.color1.as_str(),
            record.color2.as_str(),
        ])
        .map_err(write_error)?;
    }
    out.flush()?;
    Ok(())
}

fn write_error(err: csv::Error) -> Error {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => Error::Io(io),
        other => Error::Serialization(format!("{other:?}")),
    }
}
