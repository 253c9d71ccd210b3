use crate::types::{DropdownOption, Office};

/// Election years on the slider.
pub const ELECTION_YEARS: [u16; 3] = [2008, 2012, 2016];

// Candidate lists are fixed per race, independent of what the dataset holds.
const PA_SENATE_OPTIONS: [(u16, &[&str]); 3] = [
    (2008, &["Tony Bompiani", "Kim Ward"]),
    (2012, &["Ronald M Gazze", "Kim L Ward"]),
    (2016, &["Kim Ward", "James R Brewster", "Tony DeLoreto"]),
];

const POTUS_OPTIONS: [(u16, &[&str]); 3] = [
    (2008, &["Barack Obama", "John McCain", "Bob Barr", "Ralph Nader"]),
    (2012, &["Mitt Romney", "Barack Obama", "Gary Johnson", "Jill Stein"]),
    (
        2016,
        &["Donald J Trump", "Hillary Clinton", "Darrell L Castle", "Jill Stein", "Gary Johnson"],
    ),
];

const US_SENATE_OPTIONS: [(u16, &[&str]); 3] = [
    (2008, &["none"]),
    (2012, &["Tom Smith", "Bob Casey Jr", "Rayburn Douglas Smith"]),
    (2016, &["Katie McGinty", "Pat Toomey", "Edward T Clifford III"]),
];

fn table(office: Office) -> &'static [(u16, &'static [&'static str])] {
    match office {
        Office::PaSenate => &PA_SENATE_OPTIONS,
        Office::Potus => &POTUS_OPTIONS,
        Office::UsSenate => &US_SENATE_OPTIONS,
    }
}

/// Candidate names for a race, empty for a year outside the table.
pub fn candidates(year: u16, office: Office) -> &'static [&'static str] {
    table(office)
        .iter()
        .find(|(y, _)| *y == year)
        .map(|(_, names)| *names)
        .unwrap_or(&[])
}

/// Options for the dependent candidate dropdown.
///
/// The office arrives as the raw dropdown value; anything outside the three
/// known races resolves to no options rather than an error.
pub fn candidate_options(year: u16, office: &str) -> Vec<DropdownOption> {
    match Office::from_label(office) {
        Some(office) => candidates(year, office)
            .iter()
            .map(|name| DropdownOption::same(name))
            .collect(),
        None => Vec::new(),
    }
}

pub fn office_options() -> Vec<DropdownOption> {
    Office::ALL
        .iter()
        .map(|office| DropdownOption::same(office.label()))
        .collect()
}
