//! City records in and route text out.
//!
//! Input is headerless CSV with exactly three fields per record:
//! `name,latitude,longitude` (degrees). Where the bytes come from is up
//! to the caller.

use crate::anneal::Tour;
use crate::error::AnnealError;
use crate::geo::City;
use csv::{ReaderBuilder, Trim};
use std::io::Read;

/// Parses `name,latitude,longitude` records into cities.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::loader::read_cities;
///
/// let data = "Boston, 42.3601, -71.0589\nAlbany, 42.6526, -73.7562\n";
/// let cities = read_cities(data.as_bytes()).unwrap();
/// assert_eq!(cities.len(), 2);
/// assert_eq!(cities[1].name(), "Albany");
/// ```
pub fn read_cities<R: Read>(reader: R) -> Result<Vec<City>, AnnealError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut cities = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let number = i + 1;
        if record.len() != 3 {
            return Err(parse_error(
                number,
                format!("expected 3 fields, got {}", record.len()),
            ));
        }

        let name = &record[0];
        if name.is_empty() {
            return Err(parse_error(number, "empty city name"));
        }
        let latitude = parse_coordinate(number, "latitude", &record[1], 90.0)?;
        let longitude = parse_coordinate(number, "longitude", &record[2], 180.0)?;
        cities.push(City::new(name, latitude, longitude));
    }
    Ok(cities)
}

fn parse_coordinate(record: usize, field: &str, raw: &str, limit: f64) -> Result<f64, AnnealError> {
    let value: f64 = raw
        .parse()
        .map_err(|_| parse_error(record, format!("invalid {field} '{raw}'")))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(parse_error(
            record,
            format!("{field} {value} outside [-{limit}, {limit}]"),
        ));
    }
    Ok(value)
}

fn parse_error(record: usize, message: impl Into<String>) -> AnnealError {
    AnnealError::Parse {
        record,
        message: message.into(),
    }
}

/// Joins the city names of `tour` with `" -> "`.
///
/// # Panics
///
/// Panics if `tour` holds an index out of range for `cities`.
pub fn format_route(tour: &Tour, cities: &[City]) -> String {
    tour.as_slice()
        .iter()
        .map(|&i| cities[i].name())
        .collect::<Vec<_>>()
        .join(" -> ")
}
