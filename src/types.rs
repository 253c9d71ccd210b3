use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The three races tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Office {
    PaSenate,
    Potus,
    UsSenate,
}

impl Office {
    pub const ALL: [Office; 3] = [Office::PaSenate, Office::Potus, Office::UsSenate];

    /// Dropdown label, which is also the CSV column naming the candidate.
    pub fn label(self) -> &'static str {
        match self {
            Office::PaSenate => "PA Senate Candidate",
            Office::Potus => "POTUS Candidate",
            Office::UsSenate => "US Senate Candidate",
        }
    }

    /// Exact dropdown label match, the only form the candidate dropdown sends.
    pub fn from_label(label: &str) -> Option<Office> {
        Office::ALL.into_iter().find(|office| office.label() == label)
    }

    pub fn slug(self) -> &'static str {
        match self {
            Office::PaSenate => "pa-senate",
            Office::Potus => "potus",
            Office::UsSenate => "us-senate",
        }
    }

    /// Column used to colour the map.
    pub fn data_column(self) -> &'static str {
        match self {
            Office::PaSenate => "PA Senate Precinct Prop",
            Office::Potus => "POTUS Precinct Prop",
            Office::UsSenate => "US Senate Precinct Prop",
        }
    }

    pub fn votes_column(self) -> &'static str {
        match self {
            Office::PaSenate => "PA Senate Precinct Votes",
            Office::Potus => "POTUS Precinct Votes",
            Office::UsSenate => "US Senate Precinct Votes",
        }
    }
}

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown office '{0}'")]
pub struct UnknownOffice(pub String);

impl FromStr for Office {
    type Err = UnknownOffice;

    /// Accepts either the dropdown label or the short slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Office::ALL
            .into_iter()
            .find(|office| office.label() == s || office.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownOffice(s.to_string()))
    }
}

/// Per-office figures for one precinct in one election.
#[derive(Debug, Clone, PartialEq)]
pub struct OfficeResult {
    pub candidate: String,
    pub precinct_prop: f64,
    pub precinct_votes: f64,
    pub office_prop: f64,
    pub office_votes: f64,
    pub district_prop: f64,
}

/// One (year, precinct) row of the election dataset, GEOID already canonical.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectionRecord {
    pub year: u16,
    pub geoid: String,
    pub precinct: String,
    pub eligible_voters: f64,
    pub total_turnout: f64,
    pub total_votes: f64,
    pub pa_senate: OfficeResult,
    pub potus: OfficeResult,
    pub us_senate: OfficeResult,
}

impl ElectionRecord {
    pub fn office(&self, office: Office) -> &OfficeResult {
        match office {
            Office::PaSenate => &self.pa_senate,
            Office::Potus => &self.potus,
            Office::UsSenate => &self.us_senate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    pub fn same(text: &str) -> Self {
        Self {
            label: text.to_string(),
            value: text.to_string(),
        }
    }
}
