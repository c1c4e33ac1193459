use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{record::record_ops::parse_or_zero, selection::SelectionState};

/// raw row of the region table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionTableRow {
    #[serde(rename = "Departure Region")]
    pub departure_region: String,
    #[serde(rename = "Arrival Region")]
    pub arrival_region: String,
    #[serde(rename = "avg_co2")]
    pub avg_co2: Option<String>,
}

/// mean CO2 between an ordered pair of regions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCell {
    pub departure: String,
    pub arrival: String,
    pub co2: f64,
}

/// precomputed average CO2 keyed by (departure region, arrival region).
/// later rows with the same key replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    cells: IndexMap<(String, String), f64>,
}

impl RegionTable {
    pub fn new(rows: Vec<RegionTableRow>) -> Self {
        let cells = rows
            .into_iter()
            .map(|row| {
                let co2 = parse_or_zero(row.avg_co2.as_deref());
                ((row.departure_region, row.arrival_region), co2)
            })
            .collect();
        Self { cells }
    }

    pub fn get(&self, departure: &str, arrival: &str) -> Option<f64> {
        self.cells
            .get(&(departure.to_owned(), arrival.to_owned()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = RegionCell> + '_ {
        self.cells.iter().map(|((departure, arrival), co2)| RegionCell {
            departure: departure.clone(),
            arrival: arrival.clone(),
            co2: *co2,
        })
    }

    /// (min, max) CO2 over the whole table, None when empty
    pub fn co2_range(&self) -> Option<(f64, f64)> {
        self.cells.values().fold(None, |acc, v| match acc {
            None => Some((*v, *v)),
            Some((lo, hi)) => Some((lo.min(*v), hi.max(*v))),
        })
    }

    /// pairs where both the departure and the arrival region are selected
    pub fn selected_cells(&self, selection: &SelectionState) -> Vec<RegionCell> {
        self.cells()
            .filter(|c| selection.contains(&c.departure) && selection.contains(&c.arrival))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn row(dep: &str, arr: &str, co2: &str) -> RegionTableRow {
        RegionTableRow {
            departure_region: dep.to_owned(),
            arrival_region: arr.to_owned(),
            avg_co2: Some(co2.to_owned()),
        }
    }

    #[test]
    fn test_selected_cells_need_both_regions() {
        let table = RegionTable::new(vec![
            row("Western Europe", "Southern Europe", "55"),
            row("Western Europe", "British Isles", "40"),
            row("Southern Europe", "Western Europe", "57"),
        ]);
        let mut selection = SelectionState::default();
        selection.insert("Western Europe");
        assert!(table.selected_cells(&selection).is_empty());

        selection.insert("Southern Europe");
        let cells = table.selected_cells(&selection);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].co2, 55.0);
        assert_eq!(cells[1].departure, "Southern Europe");
    }

    #[test]
    fn test_co2_range() {
        let table = RegionTable::new(vec![row("a", "b", "10"), row("b", "c", "x"), row("c", "a", "30")]);
        assert_eq!(table.co2_range(), Some((0.0, 30.0)));
        assert_eq!(RegionTable::default().co2_range(), None);
    }
}
