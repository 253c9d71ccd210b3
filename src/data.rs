use crate::config::{AppConfig, LatLon};
use crate::options::{self, ELECTION_YEARS};
use crate::types::{ElectionRecord, Office, OfficeResult};
use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;
use geo::{BoundingRect, Coord, MultiPolygon, Rect};
use geojson::{FeatureCollection, GeoJson};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};

/// Tokens pandas reads as NaN by default; a row holding any of them is dropped.
const MISSING_TOKENS: [&str; 20] = [
    "", "#N/A", "#N/A N/A", "N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const REQUIRED_COLUMNS: [&str; 24] = [
    "Election Year",
    "GEOID",
    "Precinct",
    "Eligible Voters",
    "Total Turnout",
    "Total Votes",
    "PA Senate Candidate",
    "PA Senate Precinct Prop",
    "PA Senate Precinct Votes",
    "PA Senate Office Prop",
    "PA Senate Office Votes",
    "PA Senate District Prop",
    "POTUS Candidate",
    "POTUS Precinct Prop",
    "POTUS Precinct Votes",
    "POTUS Office Prop",
    "POTUS Office Votes",
    "POTUS District Prop",
    "US Senate Candidate",
    "US Senate Precinct Prop",
    "US Senate Precinct Votes",
    "US Senate Office Prop",
    "US Senate Office Votes",
    "US Senate District Prop",
];

/// Immutable data shared by every request for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub records: Vec<ElectionRecord>,
    pub boundaries: Boundaries,
}

/// Precinct polygons keyed by canonical GEOID.
#[derive(Debug, Clone)]
pub struct Boundaries {
    /// Feature collection with every GEOID property rewritten to canonical form.
    pub collection: FeatureCollection,
    pub geoids: HashSet<String>,
    pub bounds: Option<Rect<f64>>,
}

impl Boundaries {
    pub fn contains(&self, geoid: &str) -> bool {
        self.geoids.contains(geoid)
    }

    pub fn center(&self) -> Option<LatLon> {
        self.bounds.map(|rect| {
            let c = rect.center();
            LatLon { lat: c.y, lon: c.x }
        })
    }
}

pub fn load_data(config: &AppConfig) -> Result<DashboardData> {
    tracing::info!(path = ?config.input.data_csv, "loading election data");
    let file = File::open(&config.input.data_csv)
        .with_context(|| format!("Failed to open CSV file: {:?}", config.input.data_csv))?;
    let records = load_records(file)
        .with_context(|| format!("Failed to load CSV file: {:?}", config.input.data_csv))?;
    tracing::info!(rows = records.len(), "loaded complete election rows");

    tracing::info!(path = ?config.input.geojson, "loading precinct boundaries");
    let file = File::open(&config.input.geojson)
        .with_context(|| format!("Failed to open GeoJSON file: {:?}", config.input.geojson))?;
    let boundaries = load_boundaries(BufReader::new(file), &config.input.join_column_shape)
        .with_context(|| format!("Failed to load GeoJSON file: {:?}", config.input.geojson))?;
    tracing::info!(precincts = boundaries.geoids.len(), "loaded precinct boundaries");

    let data = DashboardData::join(records, boundaries);
    for (year, office, name) in data.unmatched_table_candidates() {
        tracing::warn!(year, %office, candidate = name, "listed candidate has no rows in the dataset");
    }
    Ok(data)
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Election Year")]
    year: f64,
    #[serde(rename = "GEOID")]
    geoid: String,
    #[serde(rename = "Precinct")]
    precinct: String,
    #[serde(rename = "Eligible Voters")]
    eligible_voters: f64,
    #[serde(rename = "Total Turnout")]
    total_turnout: f64,
    #[serde(rename = "Total Votes")]
    total_votes: f64,

    #[serde(rename = "PA Senate Candidate")]
    pa_senate_candidate: String,
    #[serde(rename = "PA Senate Precinct Prop")]
    pa_senate_precinct_prop: f64,
    #[serde(rename = "PA Senate Precinct Votes")]
    pa_senate_precinct_votes: f64,
    #[serde(rename = "PA Senate Office Prop")]
    pa_senate_office_prop: f64,
    #[serde(rename = "PA Senate Office Votes")]
    pa_senate_office_votes: f64,
    #[serde(rename = "PA Senate District Prop")]
    pa_senate_district_prop: f64,

    #[serde(rename = "POTUS Candidate")]
    potus_candidate: String,
    #[serde(rename = "POTUS Precinct Prop")]
    potus_precinct_prop: f64,
    #[serde(rename = "POTUS Precinct Votes")]
    potus_precinct_votes: f64,
    #[serde(rename = "POTUS Office Prop")]
    potus_office_prop: f64,
    #[serde(rename = "POTUS Office Votes")]
    potus_office_votes: f64,
    #[serde(rename = "POTUS District Prop")]
    potus_district_prop: f64,

    #[serde(rename = "US Senate Candidate")]
    us_senate_candidate: String,
    #[serde(rename = "US Senate Precinct Prop")]
    us_senate_precinct_prop: f64,
    #[serde(rename = "US Senate Precinct Votes")]
    us_senate_precinct_votes: f64,
    #[serde(rename = "US Senate Office Prop")]
    us_senate_office_prop: f64,
    #[serde(rename = "US Senate Office Votes")]
    us_senate_office_votes: f64,
    #[serde(rename = "US Senate District Prop")]
    us_senate_district_prop: f64,
}

impl RawRecord {
    fn into_record(self) -> Result<ElectionRecord> {
        let year = canonical_integer(&self.year.to_string())
            .with_context(|| format!("Invalid election year: {}", self.year))?;
        let year: u16 = year
            .parse()
            .with_context(|| format!("Election year out of range: {}", year))?;

        Ok(ElectionRecord {
            year,
            geoid: canonical_geoid(&self.geoid)?,
            precinct: self.precinct,
            eligible_voters: self.eligible_voters,
            total_turnout: self.total_turnout,
            total_votes: self.total_votes,
            pa_senate: OfficeResult {
                candidate: self.pa_senate_candidate,
                precinct_prop: self.pa_senate_precinct_prop,
                precinct_votes: self.pa_senate_precinct_votes,
                office_prop: self.pa_senate_office_prop,
                office_votes: self.pa_senate_office_votes,
                district_prop: self.pa_senate_district_prop,
            },
            potus: OfficeResult {
                candidate: self.potus_candidate,
                precinct_prop: self.potus_precinct_prop,
                precinct_votes: self.potus_precinct_votes,
                office_prop: self.potus_office_prop,
                office_votes: self.potus_office_votes,
                district_prop: self.potus_district_prop,
            },
            us_senate: OfficeResult {
                candidate: self.us_senate_candidate,
                precinct_prop: self.us_senate_precinct_prop,
                precinct_votes: self.us_senate_precinct_votes,
                office_prop: self.us_senate_office_prop,
                office_votes: self.us_senate_office_votes,
                district_prop: self.us_senate_district_prop,
            },
        })
    }
}

fn is_missing(field: &str) -> bool {
    MISSING_TOKENS.contains(&field.trim())
}

/// Reads the election CSV, dropping any row with a missing value in any column.
pub fn load_records<R: Read>(reader: R) -> Result<Vec<ElectionRecord>> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers().context("Failed to read CSV header")?.clone();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(anyhow!("CSV is missing required columns: {}", missing.join(", ")));
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for result in rdr.records() {
        let row = result.context("Failed to read CSV row")?;
        if row.iter().any(is_missing) {
            dropped += 1;
            continue;
        }

        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRecord = row
            .deserialize(Some(&headers))
            .with_context(|| format!("Malformed CSV row at line {}", line))?;
        if !raw.year.is_finite() || is_nan_spelling(&raw.geoid) {
            dropped += 1;
            continue;
        }
        let record = raw
            .into_record()
            .with_context(|| format!("Invalid CSV row at line {}", line))?;
        // Spellings of NaN the token list misses still parse as floats.
        if !all_finite(&record) {
            dropped += 1;
            continue;
        }
        records.push(record);
    }

    if dropped > 0 {
        tracing::info!(dropped, "dropped rows with missing values");
    }

    Ok(records)
}

fn is_nan_spelling(field: &str) -> bool {
    field.trim().parse::<f64>().map_or(false, f64::is_nan)
}

fn all_finite(record: &ElectionRecord) -> bool {
    let totals = [record.eligible_voters, record.total_turnout, record.total_votes];
    let offices = Office::ALL.into_iter().map(|office| record.office(office)).flat_map(|r| {
        [r.precinct_prop, r.precinct_votes, r.office_prop, r.office_votes, r.district_prop]
    });
    totals.into_iter().chain(offices).all(f64::is_finite)
}

/// Renders an integral number as a plain integer string (`"42.0"` -> `"42"`).
fn canonical_integer(raw: &str) -> Result<String> {
    let value: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not numeric", raw))?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(anyhow!("'{}' is not an integral value", raw));
    }
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(anyhow!("'{}' is out of range", raw));
    }
    Ok(format!("{}", value as i64))
}

pub fn canonical_geoid(raw: &str) -> Result<String> {
    canonical_integer(raw).with_context(|| format!("Invalid GEOID '{}'", raw))
}

/// Reads the precinct FeatureCollection, keeping polygon features that carry a
/// GEOID in `join_column`.
pub fn load_boundaries<R: Read>(reader: R, join_column: &str) -> Result<Boundaries> {
    let geojson = GeoJson::from_reader(reader).context("Failed to parse GeoJSON")?;

    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => return Err(anyhow!("GeoJSON must be a FeatureCollection")),
    };

    let mut features = Vec::with_capacity(collection.features.len());
    let mut geoids = HashSet::new();
    let mut bounds: Option<Rect<f64>> = None;

    for mut feature in collection.features {
        let id_val = feature.properties.as_ref().and_then(|props| props.get(join_column));

        let raw_id = match id_val {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => continue,
        };
        let id = canonical_geoid(&raw_id)?;

        let geometry = match &feature.geometry {
            Some(geom) => {
                let valid_geo: geo::Geometry<f64> = geom
                    .value
                    .clone()
                    .try_into()
                    .map_err(|e| anyhow!("Failed to convert geometry for GEOID {}: {:?}", id, e))?;

                match valid_geo {
                    geo::Geometry::MultiPolygon(mp) => mp,
                    geo::Geometry::Polygon(p) => MultiPolygon::new(vec![p]),
                    _ => continue,
                }
            }
            None => continue,
        };

        if let Some(rect) = geometry.bounding_rect() {
            bounds = Some(match bounds {
                Some(acc) => union_rect(acc, rect),
                None => rect,
            });
        }

        feature.set_property(join_column, id.clone());
        geoids.insert(id);
        features.push(feature);
    }

    Ok(Boundaries {
        collection: FeatureCollection {
            bbox: collection.bbox,
            features,
            foreign_members: collection.foreign_members,
        },
        geoids,
        bounds,
    })
}

fn union_rect(a: Rect<f64>, b: Rect<f64>) -> Rect<f64> {
    Rect::new(
        Coord {
            x: a.min().x.min(b.min().x),
            y: a.min().y.min(b.min().y),
        },
        Coord {
            x: a.max().x.max(b.max().x),
            y: a.max().y.max(b.max().y),
        },
    )
}

impl DashboardData {
    /// Keeps only rows whose GEOID has a boundary polygon.
    pub fn join(records: Vec<ElectionRecord>, boundaries: Boundaries) -> Self {
        let total = records.len();
        let records: Vec<ElectionRecord> = records
            .into_iter()
            .filter(|r| boundaries.contains(&r.geoid))
            .collect();

        let unmatched = total - records.len();
        if unmatched > 0 {
            tracing::warn!(unmatched, "dropped rows whose GEOID has no boundary feature");
        }

        Self { records, boundaries }
    }

    /// Distinct candidates present in the data for a race, in first-seen order.
    pub fn candidates_in_data(&self, year: u16, office: Office) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| r.year == year)
            .map(|r| r.office(office).candidate.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Table candidates that never appear in the data.
    pub fn unmatched_table_candidates(&self) -> Vec<(u16, Office, &'static str)> {
        let mut unmatched = Vec::new();
        for office in Office::ALL {
            for year in ELECTION_YEARS {
                let present = self.candidates_in_data(year, office);
                for name in options::candidates(year, office) {
                    if !present.contains(name) {
                        unmatched.push((year, office, *name));
                    }
                }
            }
        }
        unmatched
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub const HEADER: &str = "Election Year,GEOID,Precinct,Eligible Voters,Total Turnout,Total Votes,\
PA Senate Candidate,PA Senate Precinct Prop,PA Senate Precinct Votes,PA Senate Office Prop,PA Senate Office Votes,PA Senate District Prop,\
POTUS Candidate,POTUS Precinct Prop,POTUS Precinct Votes,POTUS Office Prop,POTUS Office Votes,POTUS District Prop,\
US Senate Candidate,US Senate Precinct Prop,US Senate Precinct Votes,US Senate Office Prop,US Senate Office Votes,US Senate District Prop";

    pub fn row(year: u16, geoid: &str, precinct: &str, pa: (&str, f64), potus: (&str, f64), us: (&str, f64)) -> String {
        format!(
            "{year},{geoid},{precinct},1000,600,580,\
{},{},{},0.5,300,0.4,\
{},{},{},0.5,300,0.4,\
{},{},{},0.5,300,0.4",
            pa.0, pa.1, (pa.1 * 580.0).round(),
            potus.0, potus.1, (potus.1 * 580.0).round(),
            us.0, us.1, (us.1 * 580.0).round(),
        )
    }

    pub fn csv() -> String {
        let rows = [
            row(2016, "420510001.0", "Ward 1", ("Kim Ward", 0.61), ("Donald J Trump", 0.64), ("Pat Toomey", 0.58)),
            row(2016, "420510001.0", "Ward 1", ("James R Brewster", 0.39), ("Hillary Clinton", 0.33), ("Katie McGinty", 0.40)),
            row(2016, "420510002.0", "Ward 2", ("Kim Ward", 0.55), ("Donald J Trump", 0.70), ("Pat Toomey", 0.66)),
            row(2016, "420510002.0", "Ward 2", ("Kim Ward", 0.55), ("Jill Stein", 0.01), ("Pat Toomey", 0.66)),
            row(2012, "420510001.0", "Ward 1", ("Kim L Ward", 0.52), ("Mitt Romney", 0.57), ("Tom Smith", 0.49)),
            row(2012, "420510002.0", "Ward 2", ("Kim L Ward", 0.58), ("Barack Obama", 0.41), ("Bob Casey Jr", 0.50)),
            row(2008, "420510002.0", "Ward 2", ("Tony Bompiani", 0.47), ("Barack Obama", 0.49), ("none", 0.0)),
            // GEOID with no boundary polygon
            row(2016, "420519999", "Ward 99", ("Kim Ward", 0.90), ("Donald J Trump", 0.90), ("Pat Toomey", 0.90)),
            // incomplete row
            "2016,420510003,Ward 3,1000,,580,Kim Ward,0.5,290,0.5,300,0.4,Donald J Trump,0.5,290,0.5,300,0.4,Pat Toomey,0.5,290,0.5,300,0.4".to_string(),
        ];
        format!("{HEADER}\n{}\n", rows.join("\n"))
    }

    pub const GEOJSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "GEOID": 420510001, "NAME": "Ward 1" },
                "geometry": { "type": "Polygon", "coordinates": [[[-79.6, 40.1], [-79.5, 40.1], [-79.5, 40.2], [-79.6, 40.2], [-79.6, 40.1]]] }
            },
            {
                "type": "Feature",
                "properties": { "GEOID": "420510002.0", "NAME": "Ward 2" },
                "geometry": { "type": "MultiPolygon", "coordinates": [[[[-79.5, 40.2], [-79.3, 40.2], [-79.3, 40.4], [-79.5, 40.4], [-79.5, 40.2]]]] }
            },
            {
                "type": "Feature",
                "properties": { "GEOID": 420510003 },
                "geometry": { "type": "Polygon", "coordinates": [[[-79.4, 40.0], [-79.3, 40.0], [-79.3, 40.1], [-79.4, 40.1], [-79.4, 40.0]]] }
            },
            {
                "type": "Feature",
                "properties": { "NAME": "no id" },
                "geometry": { "type": "Point", "coordinates": [-79.4, 40.3] }
            }
        ]
    }"#;

    pub fn dashboard_data() -> DashboardData {
        let records = load_records(csv().as_bytes()).expect("fixture csv loads");
        let boundaries = load_boundaries(GEOJSON.as_bytes(), "GEOID").expect("fixture geojson loads");
        DashboardData::join(records, boundaries)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures;
    use super::*;

    #[test]
    fn canonical_geoid_strips_float_suffix() {
        assert_eq!(canonical_geoid("420510001.0").unwrap(), "420510001");
        assert_eq!(canonical_geoid(" 420510001 ").unwrap(), "420510001");
        assert_eq!(canonical_geoid("4.20510001e8").unwrap(), "420510001");
    }

    #[test]
    fn canonical_geoid_rejects_non_integral_values() {
        assert!(canonical_geoid("420510001.5").is_err());
        assert!(canonical_geoid("abc").is_err());
        assert!(canonical_geoid("NaN").is_err());
    }

    #[test]
    fn canonical_geoid_rejects_values_beyond_i64() {
        let err = canonical_geoid("1e20").unwrap_err();
        assert!(format!("{err:#}").contains("out of range"));
        assert!(canonical_geoid("-1e20").is_err());
        assert!(canonical_geoid("9223372036854775808").is_err());
    }

    #[test]
    fn every_pandas_missing_token_drops_the_row() {
        let complete = fixtures::row(2016, "420510001", "Ward 1", ("Kim Ward", 0.5), ("Donald J Trump", 0.5), ("Pat Toomey", 0.5));
        for token in MISSING_TOKENS.iter().copied().chain(["NAN", "-NAN", "nAn"]) {
            let broken = complete.replacen(",1000,", &format!(",{token},"), 1);
            let csv = format!("{}\n{}\n{}\n", fixtures::HEADER, complete, broken);
            let records = load_records(csv.as_bytes())
                .unwrap_or_else(|e| panic!("token {token:?} failed the load: {e:#}"));
            assert_eq!(records.len(), 1, "token {token:?} was kept");
            assert_eq!(records[0].eligible_voters, 1000.0);
        }
    }

    #[test]
    fn nan_year_or_geoid_drops_the_row() {
        let complete = fixtures::row(2016, "420510001", "Ward 1", ("Kim Ward", 0.5), ("Donald J Trump", 0.5), ("Pat Toomey", 0.5));
        let bad_geoid = complete.replacen("420510001", "NAN", 1);
        let bad_year = complete.replacen("2016", "-NAN", 1);
        let csv = format!("{}\n{}\n{}\n{}\n", fixtures::HEADER, complete, bad_geoid, bad_year);
        let records = load_records(csv.as_bytes()).expect("load");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].geoid, "420510001");
    }

    #[test]
    fn non_finite_proportion_drops_the_row() {
        let row = fixtures::row(2016, "420510001", "Ward 1", ("Kim Ward", 0.5), ("Donald J Trump", 0.5), ("Pat Toomey", 0.5))
            .replacen(",0.4,", ",inf,", 1);
        let csv = format!("{}\n{}\n", fixtures::HEADER, row);
        assert!(load_records(csv.as_bytes()).expect("load").is_empty());
    }

    #[test]
    fn records_drop_incomplete_rows_and_normalize_geoid() {
        let records = load_records(fixtures::csv().as_bytes()).expect("csv loads");
        assert_eq!(records.len(), 8);
        assert!(records.iter().all(|r| r.precinct != "Ward 3"));
        assert_eq!(records[0].geoid, "420510001");
        assert_eq!(records[0].year, 2016);
        assert_eq!(records[0].potus.candidate, "Donald J Trump");
        assert_eq!(records[0].potus.precinct_prop, 0.64);
        assert_eq!(records[0].total_votes, 580.0);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "Election Year,GEOID,Precinct\n2016,420510001,Ward 1\n";
        let err = load_records(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Total Votes"));
    }

    #[test]
    fn unparseable_value_is_an_error() {
        let row = fixtures::row(2016, "420510001", "Ward 1", ("Kim Ward", 0.5), ("Donald J Trump", 0.5), ("Pat Toomey", 0.5))
            .replacen(",1000,", ",lots,", 1);
        let csv = format!("{}\n{}\n", fixtures::HEADER, row);
        assert!(load_records(csv.as_bytes()).is_err());
    }

    #[test]
    fn boundaries_keep_polygons_with_canonical_ids() {
        let boundaries = load_boundaries(fixtures::GEOJSON.as_bytes(), "GEOID").expect("geojson loads");
        assert_eq!(boundaries.collection.features.len(), 3);
        assert!(boundaries.contains("420510001"));
        assert!(boundaries.contains("420510002"));
        assert!(boundaries.contains("420510003"));

        let ids: Vec<_> = boundaries
            .collection
            .features
            .iter()
            .map(|f| f.property("GEOID").cloned())
            .collect();
        assert_eq!(ids[1], Some(serde_json::Value::String("420510002".to_string())));

        let center = boundaries.center().expect("bounds");
        assert!((center.lat - 40.2).abs() < 1e-9);
        assert!((center.lon - (-79.45)).abs() < 1e-9);
    }

    #[test]
    fn non_collection_geojson_is_rejected() {
        let point = r#"{"type": "Point", "coordinates": [0.0, 0.0]}"#;
        assert!(load_boundaries(point.as_bytes(), "GEOID").is_err());
        assert!(load_boundaries("not json".as_bytes(), "GEOID").is_err());
    }

    #[test]
    fn join_drops_rows_without_boundaries() {
        let data = fixtures::dashboard_data();
        assert_eq!(data.records.len(), 7);
        assert!(data.records.iter().all(|r| data.boundaries.contains(&r.geoid)));
    }

    #[test]
    fn candidates_in_data_are_distinct_and_ordered() {
        let data = fixtures::dashboard_data();
        assert_eq!(
            data.candidates_in_data(2016, Office::Potus),
            vec!["Donald J Trump", "Hillary Clinton", "Jill Stein"]
        );
        assert_eq!(data.candidates_in_data(2008, Office::UsSenate), vec!["none"]);
    }

    #[test]
    fn unmatched_table_candidates_reports_absent_names() {
        let data = fixtures::dashboard_data();
        let unmatched = data.unmatched_table_candidates();
        assert!(unmatched.contains(&(2016, Office::Potus, "Gary Johnson")));
        assert!(!unmatched.contains(&(2016, Office::Potus, "Donald J Trump")));
        assert!(!unmatched.contains(&(2008, Office::UsSenate, "none")));
    }

    #[test]
    fn missing_files_fail_to_load() {
        let mut config = AppConfig::default();
        config.input.data_csv = "definitely/missing.csv".into();
        let err = load_data(&config).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to open CSV file"));
    }
}
