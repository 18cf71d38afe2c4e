//! Line-oriented map file loader.
//!
//! # File format
//!
//! One record per street segment, records back to back:
//!
//! ```text
//! Broxton Avenue
//! 34.0632405, -118.4470467 34.0625329, -118.4470108
//! 2
//! Mr. Noodle|34.0629007, -118.4470362
//! Native Foods|34.0626940, -118.4470232
//! ```
//!
//! | Line            | Contents                                          |
//! |-----------------|---------------------------------------------------|
//! | 1               | street name                                       |
//! | 2               | `lat1, lon1 lat2, lon2` segment endpoints         |
//! | 3               | number of points of interest that follow          |
//! | 4 ..            | `name|lat, lon`, one per point of interest        |
//!
//! Coordinate text is trimmed and otherwise kept verbatim; it is the
//! identity of the node in the routing graph.  Blank lines between records
//! are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use nav_core::{Coordinate, PointOfInterest, StreetSegment};

use crate::{MapError, MapResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every street segment from the map file at `path`.
///
/// # Errors
///
/// [`MapError::Io`] if the file cannot be read, [`MapError::Parse`] or
/// [`MapError::Coordinate`] (with a 1-based line number) on malformed
/// records.
pub fn load_map(path: &Path) -> MapResult<Vec<StreetSegment>> {
    let file = File::open(path)?;
    let segments = load_map_reader(BufReader::new(file))?;

    info!(
        path = %path.display(),
        segments = segments.len(),
        points = segments.iter().map(|s| s.points_of_interest.len()).sum::<usize>(),
        "loaded map"
    );
    Ok(segments)
}

/// Like [`load_map`] but accepts any buffered reader.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded map data.
pub fn load_map_reader<R: BufRead>(reader: R) -> MapResult<Vec<StreetSegment>> {
    let mut lines = NumberedLines { inner: reader.lines(), line_no: 0 };
    let mut segments = Vec::new();

    while let Some((_, street)) = lines.next_non_blank()? {
        let (n, endpoints) = lines.require("segment endpoints")?;
        let (start, end) = parse_endpoints(&endpoints, n)?;

        let (n, count_text) = lines.require("point-of-interest count")?;
        let count: usize = count_text.trim().parse().map_err(|_| MapError::Parse {
            line:    n,
            message: format!("invalid point-of-interest count {:?}", count_text.trim()),
        })?;

        let mut segment = StreetSegment::new(street.trim(), start, end);
        segment.points_of_interest.reserve(count);
        for _ in 0..count {
            let (n, text) = lines.require("point of interest")?;
            segment.points_of_interest.push(parse_point(&text, n)?);
        }
        segments.push(segment);
    }

    debug!(segments = segments.len(), lines = lines.line_no, "parsed map records");
    Ok(segments)
}

// ── Line cursor ───────────────────────────────────────────────────────────────

struct NumberedLines<R> {
    inner:   std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn next_line(&mut self) -> MapResult<Option<(usize, String)>> {
        match self.inner.next() {
            None => Ok(None),
            Some(line) => {
                self.line_no += 1;
                Ok(Some((self.line_no, line?)))
            }
        }
    }

    fn next_non_blank(&mut self) -> MapResult<Option<(usize, String)>> {
        while let Some((n, line)) = self.next_line()? {
            if !line.trim().is_empty() {
                return Ok(Some((n, line)));
            }
        }
        Ok(None)
    }

    fn require(&mut self, what: &str) -> MapResult<(usize, String)> {
        self.next_line()?.ok_or_else(|| MapError::Parse {
            line:    self.line_no + 1,
            message: format!("unexpected end of file, expected {what}"),
        })
    }
}

// ── Record helpers ────────────────────────────────────────────────────────────

fn coordinate(lat: &str, lon: &str, line: usize) -> MapResult<Coordinate> {
    Coordinate::parse(lat, lon).map_err(|source| MapError::Coordinate { line, source })
}

/// `lat1, lon1 lat2, lon2` → `(start, end)`.
fn parse_endpoints(text: &str, line: usize) -> MapResult<(Coordinate, Coordinate)> {
    let fields: Vec<&str> = text
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();

    match fields.as_slice() {
        [lat1, lon1, lat2, lon2] => Ok((
            coordinate(lat1, lon1, line)?,
            coordinate(lat2, lon2, line)?,
        )),
        _ => Err(MapError::Parse {
            line,
            message: format!("expected \"lat1, lon1 lat2, lon2\", got {text:?}"),
        }),
    }
}

/// `name|lat, lon` → `PointOfInterest`.
fn parse_point(text: &str, line: usize) -> MapResult<PointOfInterest> {
    let malformed = || MapError::Parse {
        line,
        message: format!("expected \"name|lat, lon\", got {text:?}"),
    };

    let (name, location) = text.split_once('|').ok_or_else(malformed)?;
    let (lat, lon) = location.split_once(',').ok_or_else(malformed)?;
    if name.trim().is_empty() {
        return Err(malformed());
    }

    Ok(PointOfInterest::new(name.trim(), coordinate(lat, lon, line)?))
}
