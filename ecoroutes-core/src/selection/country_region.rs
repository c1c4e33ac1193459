use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::SelectionState;

const DEFAULT_COUNTRY_REGIONS: [(&str, &str); 46] = [
    ("United Kingdom", "British Isles"),
    ("Macedonia", "Eastern Europe"),
    ("Greece", "Southern Europe"),
    ("Ireland", "British Isles"),
    ("Italy", "Southern Europe"),
    ("Germany", "Western Europe"),
    ("Switzerland", "Western Europe"),
    ("France", "Western Europe"),
    ("Netherlands", "Western Europe"),
    ("Poland", "Eastern Europe"),
    ("Spain", "Southern Europe"),
    ("Slovenia", "Eastern Europe"),
    ("Romania", "Eastern Europe"),
    ("Croatia", "Eastern Europe"),
    ("Sweden", "Northern Europe"),
    ("Belgium", "Western Europe"),
    ("Lithuania", "Eastern Europe"),
    ("Moldova", "Eastern Europe"),
    ("Luxembourg", "Western Europe"),
    ("Malta", "Southern Europe"),
    ("Norway", "Northern Europe"),
    ("Slovakia", "Eastern Europe"),
    ("Latvia", "Northern Europe"),
    ("Serbia", "Eastern Europe"),
    ("Austria", "Western Europe"),
    ("Montenegro", "Eastern Europe"),
    ("Ukraine", "Eastern Europe"),
    ("Turkey", "Eastern Europe"),
    ("Hungary", "Eastern Europe"),
    ("Iceland", "Northern Europe"),
    ("Czech Republic", "Eastern Europe"),
    ("Georgia", "Eastern Europe"),
    ("Finland", "Northern Europe"),
    ("Kosovo", "Southern Europe"),
    ("Denmark", "Northern Europe"),
    ("Cyprus", "Southern Europe"),
    ("Bulgaria", "Eastern Europe"),
    ("Bosnia and Herzegovina", "Eastern Europe"),
    ("Belarus", "Eastern Europe"),
    ("Azerbaijan", "Eastern Europe"),
    ("Armenia", "Eastern Europe"),
    ("Andorra", "Southern Europe"),
    ("Russia", "Eastern Europe"),
    ("Portugal", "Southern Europe"),
    ("Albania", "Southern Europe"),
    ("Estonia", "Northern Europe"),
];

/// assigns countries to the regions of the region view, so that clicking a
/// country on the map selects its whole region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRegionLookup {
    regions: HashMap<String, String>,
}

impl Default for CountryRegionLookup {
    fn default() -> Self {
        Self {
            regions: DEFAULT_COUNTRY_REGIONS
                .iter()
                .map(|(c, r)| (c.to_string(), r.to_string()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for CountryRegionLookup {
    fn from(regions: HashMap<String, String>) -> Self {
        Self { regions }
    }
}

impl CountryRegionLookup {
    pub fn region_of(&self, country: &str) -> Option<&str> {
        self.regions.get(country).map(String::as_str)
    }

    /// all countries of `region`, sorted
    pub fn countries_in(&self, region: &str) -> Vec<&str> {
        let mut countries = self
            .regions
            .iter()
            .filter(|(_, r)| r.as_str() == region)
            .map(|(c, _)| c.as_str())
            .collect::<Vec<_>>();
        countries.sort_unstable();
        countries
    }

    /// toggles the region of a clicked country. unknown countries leave the
    /// selection untouched and return None.
    pub fn toggle_region_of(&self, country: &str, selection: &mut SelectionState) -> Option<bool> {
        let region = self.region_of(country)?;
        Some(selection.toggle(region))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_click_on_country_toggles_region() {
        let lookup = CountryRegionLookup::default();
        let mut selection = SelectionState::default();
        assert_eq!(lookup.toggle_region_of("Portugal", &mut selection), Some(true));
        assert!(selection.contains("Southern Europe"));
        assert_eq!(lookup.toggle_region_of("Spain", &mut selection), Some(false));
        assert!(selection.is_empty());
        assert_eq!(lookup.toggle_region_of("Atlantis", &mut selection), None);
    }

    #[test]
    fn test_countries_in_region() {
        let lookup = CountryRegionLookup::default();
        assert_eq!(lookup.countries_in("British Isles"), vec!["Ireland", "United Kingdom"]);
    }
}
