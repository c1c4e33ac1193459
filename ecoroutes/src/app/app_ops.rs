use std::path::Path;

use ecoroutes_core::{
    dataset::{dataset_ops, CityDirectory},
    record::RouteRecord,
    search::RouteIndex,
    selection::{CountryRegionLookup, InteractionEvent, InteractionState, SelectionState},
};

use super::EcoRoutesAppError;
use crate::config::EcoRoutesConfig;

/// reads the route table named in the configuration. a table that cannot be
/// read is logged and treated as empty so that views still render.
pub fn load_records_or_empty(config: &EcoRoutesConfig) -> Vec<RouteRecord> {
    match dataset_ops::read_route_records(&config.dataset_file) {
        Ok(records) => records,
        Err(e) => {
            log::error!("{e}");
            log::error!("continuing with an empty route table");
            vec![]
        }
    }
}

pub fn load_index(config: &EcoRoutesConfig) -> RouteIndex {
    RouteIndex::new(load_records_or_empty(config))
}

pub fn load_city_directory(config: &EcoRoutesConfig) -> Result<CityDirectory, EcoRoutesAppError> {
    let names = dataset_ops::read_city_names(&config.city_names_file)?;
    Ok(CityDirectory::from(names))
}

/// the names passed on the command line as a selection. repeated names are
/// kept once. None when nothing was named, meaning no filter applies.
pub fn selection_of(names: &[String]) -> Option<SelectionState> {
    if names.is_empty() {
        None
    } else {
        Some(SelectionState::from_iter(names.iter().cloned()))
    }
}

/// the state of a view showing `selection` while `hovered` is under the pointer
pub fn interaction_state(
    selection: Option<&SelectionState>,
    hovered: Option<&str>,
) -> InteractionState {
    let start = match selection {
        Some(s) if !s.is_empty() => InteractionState::Selected(s.clone()),
        _ => InteractionState::Idle,
    };
    let hover = hovered.map(|name| InteractionEvent::HoverStart(name.to_owned()));
    start.replay(hover)
}

/// regions chosen directly plus the regions of the chosen countries, each
/// country click toggling its region
pub fn region_selection(
    regions: &[String],
    countries: &[String],
    lookup: &CountryRegionLookup,
) -> SelectionState {
    let mut selection = SelectionState::from_iter(regions.iter().cloned());
    for country in countries.iter() {
        if lookup.toggle_region_of(country, &mut selection).is_none() {
            log::warn!("country '{country}' belongs to no known region");
        }
    }
    selection
}

/// writes `contents` to `output`, or to stdout when no file is given
pub fn write_output(output: Option<&str>, contents: &str) -> Result<(), EcoRoutesAppError> {
    match output {
        Some(filepath) => {
            if let Some(parent) = Path::new(filepath).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|source| {
                        EcoRoutesAppError::WriteError {
                            filepath: filepath.to_owned(),
                            source,
                        }
                    })?;
                }
            }
            std::fs::write(filepath, contents).map_err(|source| EcoRoutesAppError::WriteError {
                filepath: filepath.to_owned(),
                source,
            })?;
            log::info!("wrote {} bytes to '{filepath}'", contents.len());
        }
        None => println!("{contents}"),
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unreadable_dataset_is_empty() {
        let config = EcoRoutesConfig {
            dataset_file: String::from("no/such/routes.csv"),
            ..Default::default()
        };
        assert!(load_records_or_empty(&config).is_empty());
        assert!(load_index(&config).is_empty());
    }

    #[test]
    fn test_interaction_state_from_arguments() {
        let selection = selection_of(&[String::from("France")]);
        let state = interaction_state(selection.as_ref(), Some("Spain"));
        assert_eq!(state.hovered(), Some("Spain"));
        assert!(state.is_selected("France"));
        assert_eq!(interaction_state(None, None), InteractionState::Idle);
    }

    #[test]
    fn test_repeated_names_stay_selected() {
        let names = [String::from("France"), String::from("France")];
        let selection = selection_of(&names).unwrap();
        assert!(selection.contains("France"));
        assert_eq!(selection.len(), 1);
        assert!(interaction_state(Some(&selection), None).is_selected("France"));
        assert!(selection_of(&[]).is_none());
    }

    #[test]
    fn test_country_toggles_its_region() {
        let lookup = CountryRegionLookup::default();
        let selection = region_selection(
            &[String::from("British Isles")],
            &[String::from("France"), String::from("Ireland")],
            &lookup,
        );
        assert!(selection.contains("Western Europe"));
        assert!(!selection.contains("British Isles"));
        assert_eq!(selection.len(), 1);
    }
}
