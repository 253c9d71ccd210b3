use crate::config::{LatLon, MapConfig};
use crate::data::DashboardData;
use crate::types::{ElectionRecord, Office};
use serde::Serialize;

/// Route the page fetches the precinct polygons from.
pub const BOUNDARIES_URL: &str = "/api/boundaries";

const FEATURE_ID_KEY: &str = "properties.GEOID";
const PANEL_BACKGROUND: &str = "#F4F4F8";
const BAR_COLOR: &str = "#c0392b";
const EMPTY_MESSAGE: &str = "No data for the current selection";

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub year: u16,
    pub office: Office,
    pub candidate: Option<String>,
}

/// Everything the page redraws after a filter change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFigures {
    pub map: Figure,
    pub top: Figure,
    pub bottom: Figure,
}

/// A plotly.js figure: `Plotly.react(el, fig.data, fig.layout)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Choroplethmapbox(ChoroplethTrace),
    Bar(BarTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethTrace {
    pub geojson: String,
    pub featureidkey: String,
    pub locations: Vec<String>,
    pub z: Vec<f64>,
    /// (precinct, total votes) per location, for the hover label.
    pub customdata: Vec<(String, f64)>,
    pub hovertemplate: String,
    pub colorscale: String,
    pub colorbar: ColorBar,
    pub marker: ChoroplethMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethMarker {
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub name: String,
    pub marker: BarMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMarker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapbox: Option<MapboxLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub r: u32,
    pub b: u32,
    pub l: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapboxLayout {
    pub style: String,
    pub zoom: f64,
    pub center: LatLon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accesstoken: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub showarrow: bool,
    pub xref: String,
    pub yref: String,
    pub x: f64,
    pub y: f64,
}

// Centre of Senate District 39.
const DISTRICT_CENTER: LatLon = LatLon { lat: 40.2650, lon: -79.4129 };

/// Rows for the selected year whose candidate for the office matches.
pub fn filter_records<'a>(data: &'a DashboardData, selection: &Selection) -> Vec<&'a ElectionRecord> {
    let Some(candidate) = selection.candidate.as_deref() else {
        return Vec::new();
    };

    data.records
        .iter()
        .filter(|r| r.year == selection.year)
        .filter(|r| r.office(selection.office).candidate == candidate)
        .collect()
}

pub fn map_title(selection: &Selection) -> String {
    format!(
        "Proportion of total votes for {} in the {} {} election.",
        selection.candidate.as_deref().unwrap_or("no candidate"),
        selection.year,
        selection.office
    )
}

pub fn render(data: &DashboardData, map: &MapConfig, selection: &Selection) -> DashboardFigures {
    let rows = filter_records(data, selection);
    tracing::debug!(
        year = selection.year,
        office = %selection.office,
        candidate = ?selection.candidate,
        rows = rows.len(),
        "rendering figures"
    );

    let title = map_title(selection);
    if rows.is_empty() {
        return DashboardFigures {
            map: placeholder(&title),
            top: placeholder(selection.office.data_column()),
            bottom: placeholder(selection.office.votes_column()),
        };
    }

    let center = map
        .center
        .or_else(|| data.boundaries.center())
        .unwrap_or(DISTRICT_CENTER);

    DashboardFigures {
        map: choropleth(&rows, selection.office, map, center, title),
        top: bar_chart(&rows, selection.office.data_column(), |r| {
            r.office(selection.office).precinct_prop
        }),
        bottom: bar_chart(&rows, selection.office.votes_column(), |r| {
            r.office(selection.office).precinct_votes
        }),
    }
}

fn choropleth(rows: &[&ElectionRecord], office: Office, map: &MapConfig, center: LatLon, title: String) -> Figure {
    let trace = ChoroplethTrace {
        geojson: BOUNDARIES_URL.to_string(),
        featureidkey: FEATURE_ID_KEY.to_string(),
        locations: rows.iter().map(|r| r.geoid.clone()).collect(),
        z: rows.iter().map(|r| r.office(office).precinct_prop).collect(),
        customdata: rows.iter().map(|r| (r.precinct.clone(), r.total_votes)).collect(),
        hovertemplate: format!(
            "Precinct=%{{customdata[0]}}<br>Total Votes=%{{customdata[1]}}<br>{}=%{{z}}<extra></extra>",
            office.data_column()
        ),
        colorscale: map.color_scale.clone(),
        colorbar: ColorBar {
            title: Title { text: office.data_column().to_string() },
        },
        marker: ChoroplethMarker { opacity: map.opacity },
    };

    Figure {
        data: vec![Trace::Choroplethmapbox(trace)],
        layout: Layout {
            mapbox: Some(MapboxLayout {
                style: map.mapbox_style.clone(),
                zoom: map.zoom,
                center,
                accesstoken: map.access_token.clone(),
            }),
            margin: Margin { t: 50, r: 0, b: 0, l: 0 },
            ..base_layout(title)
        },
    }
}

fn bar_chart<F>(rows: &[&ElectionRecord], column: &str, value: F) -> Figure
where
    F: Fn(&ElectionRecord) -> f64,
{
    let trace = BarTrace {
        x: rows.iter().map(|r| r.precinct.clone()).collect(),
        y: rows.iter().map(|r| value(*r)).collect(),
        name: column.to_string(),
        marker: BarMarker { color: BAR_COLOR.to_string() },
    };

    Figure {
        data: vec![Trace::Bar(trace)],
        layout: Layout {
            xaxis: Some(Axis {
                title: Some(Title { text: "Precinct".to_string() }),
                visible: true,
            }),
            yaxis: Some(Axis {
                title: Some(Title { text: column.to_string() }),
                visible: true,
            }),
            ..base_layout(column.to_string())
        },
    }
}

fn base_layout(title: String) -> Layout {
    Layout {
        title: Title { text: title },
        paper_bgcolor: PANEL_BACKGROUND.to_string(),
        plot_bgcolor: PANEL_BACKGROUND.to_string(),
        margin: Margin { t: 75, r: 50, b: 100, l: 50 },
        mapbox: None,
        xaxis: None,
        yaxis: None,
        annotations: Vec::new(),
    }
}

/// Empty figure with a centred notice, drawn when a selection matches no rows.
pub fn placeholder(title: &str) -> Figure {
    let hidden = Axis { title: None, visible: false };
    Figure {
        data: Vec::new(),
        layout: Layout {
            xaxis: Some(hidden.clone()),
            yaxis: Some(hidden),
            annotations: vec![Annotation {
                text: EMPTY_MESSAGE.to_string(),
                showarrow: false,
                xref: "paper".to_string(),
                yref: "paper".to_string(),
                x: 0.5,
                y: 0.5,
            }],
            ..base_layout(title.to_string())
        },
    }
}
