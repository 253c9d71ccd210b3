use crate::options::{office_options, ELECTION_YEARS};
use crate::types::{DropdownOption, Office};
use serde::Serialize;

pub const TITLE: &str = "Logistics Dashboard: Tay Waltenbaugh Campaign";
pub const DESCRIPTION: &str = "This dashboard is created to help the campaign visually understand trends within Pennsylvania Senate District 39 with the hope that this will enable targeted campaign efforts, which might translate to votes.";
pub const SLIDER_TEXT: &str = "Drag the slider to change the year:";
pub const HEATMAP_TITLE: &str = "Heatmap of metrics within Senate District 39";

/// Static page structure; the page script builds its widgets from this.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub title: &'static str,
    pub description: &'static str,
    pub slider: YearSlider,
    pub office_dropdown: Dropdown,
    pub candidate_dropdown: Dropdown,
    pub heatmap_title: &'static str,
    pub panels: Panels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSlider {
    pub id: &'static str,
    pub text: &'static str,
    pub min: u16,
    pub max: u16,
    pub value: u16,
    pub marks: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: &'static str,
    pub options: Vec<DropdownOption>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panels {
    pub map: &'static str,
    pub top: &'static str,
    pub bottom: &'static str,
}

pub fn page_layout() -> PageLayout {
    let min = ELECTION_YEARS.iter().copied().min().unwrap_or_default();
    let max = ELECTION_YEARS.iter().copied().max().unwrap_or_default();

    PageLayout {
        title: TITLE,
        description: DESCRIPTION,
        slider: YearSlider {
            id: "years-slider",
            text: SLIDER_TEXT,
            min,
            max,
            value: min,
            marks: ELECTION_YEARS.to_vec(),
        },
        office_dropdown: Dropdown {
            id: "office-selector",
            options: office_options(),
            value: Some(Office::PaSenate.label().to_string()),
        },
        // Filled in by the cascading resolver once year and office are known.
        candidate_dropdown: Dropdown {
            id: "candidates",
            options: Vec::new(),
            value: None,
        },
        heatmap_title: HEATMAP_TITLE,
        panels: Panels {
            map: "county-choropleth",
            top: "top-values",
            bottom: "bottom-values",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_spans_election_years_starting_at_earliest() {
        let layout = page_layout();
        assert_eq!(layout.slider.min, 2008);
        assert_eq!(layout.slider.max, 2016);
        assert_eq!(layout.slider.value, 2008);
        assert_eq!(layout.slider.marks, vec![2008, 2012, 2016]);
    }

    #[test]
    fn office_dropdown_defaults_to_pa_senate() {
        let layout = page_layout();
        assert_eq!(layout.office_dropdown.options.len(), 3);
        assert_eq!(layout.office_dropdown.value.as_deref(), Some("PA Senate Candidate"));
        assert!(layout.candidate_dropdown.options.is_empty());
    }
}
