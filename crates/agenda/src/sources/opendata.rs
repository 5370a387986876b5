//! School breaks from the French education open data API.

use std::time::Duration;

use agenda_core::{HolidayError, SchoolBreak, SchoolHolidaySource, SchoolZone};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::error::{Result, SourceError};
use super::{dedup_breaks, overlaps_year};
use crate::serde::{deserialize_nearest_date, deserialize_optional_string};

/// Public instance of the open data portal.
pub const DEFAULT_OPEN_DATA_URL: &str = "https://data.education.gouv.fr";

const DATASET_PATH: &str = "/api/explore/v2.1/catalog/datasets/fr-en-calendrier-scolaire/records";

/// Maximum page size accepted by the API.
const PAGE_SIZE: usize = 100;

/// The API refuses offsets past this value.
const MAX_OFFSET: usize = 10_000;

/// Rows only relevant to teachers.
const TEACHERS_ONLY: &str = "Enseignants";

#[derive(Debug, Deserialize)]
struct RecordsPage {
    #[serde(default)]
    results: Vec<Record>,
}

/// One row of the school calendar dataset.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Record {
    description: String,
    /// First day off.
    #[serde(deserialize_with = "deserialize_nearest_date")]
    start_date: NaiveDate,
    /// Day classes resume.
    #[serde(deserialize_with = "deserialize_nearest_date")]
    end_date: NaiveDate,
    #[serde(default)]
    zones: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    population: Option<String>,
}

impl Record {
    /// The break described by this row, unless it only concerns teachers or
    /// has no day off.
    fn to_break(&self, zone: SchoolZone) -> Option<SchoolBreak> {
        if self.population.as_deref() == Some(TEACHERS_ONLY) {
            return None;
        }
        if !self.zones.is_empty() && self.zones != zone.dataset_name() {
            return None;
        }
        let last_day = self.end_date.pred_opt()?;
        (last_day >= self.start_date)
            .then(|| SchoolBreak::new(self.description.trim(), self.start_date, last_day))
    }
}

/// Blocking client of the school calendar dataset.
#[derive(Debug, Clone)]
pub struct OpenDataSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl OpenDataSource {
    /// Create a new source for the portal at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("agenda/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url, DATASET_PATH)
    }

    /// Fetch every row of `zone` overlapping `year`, one page at a time.
    fn fetch(&self, year: i32, zone: SchoolZone) -> Result<Vec<Record>> {
        let filter = where_clause(year, zone);
        let mut records = Vec::new();
        let mut offset = 0;

        loop {
            debug!(url = %self.url(), %filter, offset, "querying school calendar");
            let response = self
                .client
                .get(self.url())
                .query(&[
                    ("where", filter.clone()),
                    ("order_by", "start_date".to_string()),
                    ("limit", PAGE_SIZE.to_string()),
                    ("offset", offset.to_string()),
                ])
                .send()?;
            let page: RecordsPage = handle_response(response)?;
            let count = page.results.len();
            records.extend(page.results);

            offset += PAGE_SIZE;
            if count < PAGE_SIZE || offset >= MAX_OFFSET {
                break;
            }
        }
        Ok(records)
    }
}

impl SchoolHolidaySource for OpenDataSource {
    fn name(&self) -> &str {
        &self.base_url
    }

    fn school_breaks(
        &self,
        year: i32,
        zone: SchoolZone,
    ) -> std::result::Result<Vec<SchoolBreak>, HolidayError> {
        let records = self.fetch(year, zone)?;
        let breaks = records_to_breaks(&records, year, zone)?;
        debug!(
            rows = records.len(),
            breaks = breaks.len(),
            %zone,
            year,
            "fetched school breaks"
        );
        Ok(breaks)
    }
}

/// Handle error responses and decode successful ones.
fn handle_response<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        response.json::<T>().map_err(|e| {
            if e.is_decode() {
                SourceError::InvalidResponse(e.to_string())
            } else {
                SourceError::Request(e)
            }
        })
    } else {
        let message = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(SourceError::ServerError {
            status: status.as_u16(),
            message,
        })
    }
}

/// ODSQL filter selecting the rows of `zone` that may overlap `year`.
pub(crate) fn where_clause(year: i32, zone: SchoolZone) -> String {
    format!(
        "zones=\"{}\" AND start_date<=date'{year:04}-12-31' AND end_date>=date'{year:04}-01-01'",
        zone.dataset_name()
    )
}

/// Distinct breaks of `zone` with at least one day in `year`.
pub(crate) fn records_to_breaks(
    records: &[Record],
    year: i32,
    zone: SchoolZone,
) -> Result<Vec<SchoolBreak>> {
    let breaks: Vec<SchoolBreak> = dedup_breaks(records.iter().filter_map(|r| r.to_break(zone)))
        .into_iter()
        .filter(|b| overlaps_year(b, year))
        .collect();
    if breaks.is_empty() {
        return Err(SourceError::NotCovered {
            zone: zone.dataset_name().to_string(),
            year,
        });
    }
    Ok(breaks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn parse_records(body: &str) -> Vec<Record> {
        serde_json::from_str::<RecordsPage>(body).unwrap().results
    }

    /// Serves a single HTTP response on a local port and returns its URL.
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        url
    }

    fn school_breaks_from(
        status: &'static str,
        body: &'static str,
    ) -> std::result::Result<Vec<SchoolBreak>, HolidayError> {
        let source = OpenDataSource::new(serve_once(status, body), Duration::from_secs(5)).unwrap();
        source.school_breaks(2026, SchoolZone::C)
    }

    const SAMPLE: &str = r#"{
        "total_count": 5,
        "results": [
            {
                "description": "Vacances de Noël",
                "population": "-",
                "start_date": "2025-12-19T23:00:00+00:00",
                "end_date": "2026-01-04T23:00:00+00:00",
                "location": "Paris",
                "zones": "Zone C",
                "annee_scolaire": "2025-2026"
            },
            {
                "description": "Vacances de Noël",
                "population": "-",
                "start_date": "2025-12-19T23:00:00+00:00",
                "end_date": "2026-01-04T23:00:00+00:00",
                "location": "Créteil",
                "zones": "Zone C",
                "annee_scolaire": "2025-2026"
            },
            {
                "description": "Vacances d'Hiver",
                "population": null,
                "start_date": "2026-02-20T23:00:00+00:00",
                "end_date": "2026-03-08T23:00:00+00:00",
                "location": "Paris",
                "zones": "Zone C",
                "annee_scolaire": "2025-2026"
            },
            {
                "description": "Pont de l'Ascension",
                "population": "Enseignants",
                "start_date": "2026-05-13T22:00:00+00:00",
                "end_date": "2026-05-17T22:00:00+00:00",
                "location": "Paris",
                "zones": "Zone C",
                "annee_scolaire": "2025-2026"
            },
            {
                "description": "Vacances de la Toussaint",
                "population": "-",
                "start_date": "2024-10-18T22:00:00+00:00",
                "end_date": "2024-11-03T23:00:00+00:00",
                "location": "Paris",
                "zones": "Zone C",
                "annee_scolaire": "2024-2025"
            }
        ]
    }"#;

    #[test]
    fn test_parse_records() {
        let records = parse_records(SAMPLE);
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].start_date, make_date(2025, 12, 20));
        assert_eq!(records[0].end_date, make_date(2026, 1, 5));
        assert_eq!(records[2].population, None);
    }

    #[test]
    fn test_records_to_breaks() {
        let records = parse_records(SAMPLE);
        let breaks = records_to_breaks(&records, 2026, SchoolZone::C).unwrap();
        assert_eq!(
            breaks,
            vec![
                SchoolBreak::new(
                    "Vacances de Noël",
                    make_date(2025, 12, 20),
                    make_date(2026, 1, 4)
                ),
                SchoolBreak::new(
                    "Vacances d'Hiver",
                    make_date(2026, 2, 21),
                    make_date(2026, 3, 8)
                ),
            ]
        );
    }

    #[test]
    fn test_records_of_other_zone_are_ignored() {
        let records = parse_records(SAMPLE);
        let result = records_to_breaks(&records, 2026, SchoolZone::A);
        assert!(matches!(result, Err(SourceError::NotCovered { year: 2026, .. })));
    }

    #[test]
    fn test_year_without_breaks() {
        let records = parse_records(SAMPLE);
        let result = records_to_breaks(&records, 2031, SchoolZone::C);
        assert!(matches!(result, Err(SourceError::NotCovered { .. })));
    }

    #[test]
    fn test_missing_results_is_an_empty_page() {
        assert!(parse_records("{}").is_empty());
        assert!(parse_records(r#"{"results": []}"#).is_empty());
    }

    #[test]
    fn test_school_breaks_from_server() {
        let breaks = school_breaks_from("200 OK", SAMPLE).unwrap();
        assert_eq!(breaks.len(), 2);
        assert_eq!(breaks[1].name, "Vacances d'Hiver");
    }

    #[test]
    fn test_invalid_body_is_an_invalid_response() {
        let result = school_breaks_from("200 OK", "<html>");
        assert!(matches!(
            result,
            Err(HolidayError::DataSource(message)) if message.starts_with("Invalid response")
        ));
    }

    #[test]
    fn test_server_error_status() {
        let result = school_breaks_from("503 Service Unavailable", "maintenance");
        assert_eq!(
            result,
            Err(HolidayError::DataSource(
                "Server returned 503: maintenance".to_string()
            ))
        );
    }

    #[test]
    fn test_where_clause() {
        assert_eq!(
            where_clause(2026, SchoolZone::B),
            "zones=\"Zone B\" AND start_date<=date'2026-12-31' AND end_date>=date'2026-01-01'"
        );
    }

    #[test]
    fn test_base_url_is_trimmed() {
        let source = OpenDataSource::new("http://localhost:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(source.base_url(), "http://localhost:8080");
        assert_eq!(
            source.url(),
            "http://localhost:8080/api/explore/v2.1/catalog/datasets/fr-en-calendrier-scolaire/records"
        );
    }

    #[test]
    fn test_unreachable_server_is_a_data_source_error() {
        // Nothing listens on the discard port.
        let source = OpenDataSource::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let result = source.school_breaks(2026, SchoolZone::C);
        assert!(matches!(result, Err(HolidayError::DataSource(_))));
    }
}
