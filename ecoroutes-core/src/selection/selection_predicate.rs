use serde::{Deserialize, Serialize};

use super::SelectionState;

/// rule deciding whether an edge is visible under a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPredicate {
    /// both endpoints must be selected
    #[default]
    BothEndpoints,
    /// at least one endpoint must be selected
    EitherEndpoint,
}

impl SelectionPredicate {
    pub fn accepts(&self, selection: &SelectionState, source: &str, target: &str) -> bool {
        match self {
            SelectionPredicate::BothEndpoints => {
                selection.contains(source) && selection.contains(target)
            }
            SelectionPredicate::EitherEndpoint => {
                selection.contains(source) || selection.contains(target)
            }
        }
    }
}

impl std::fmt::Display for SelectionPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionPredicate::BothEndpoints => write!(f, "both"),
            SelectionPredicate::EitherEndpoint => write!(f, "either"),
        }
    }
}

impl std::str::FromStr for SelectionPredicate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "both" | "both_endpoints" => Ok(SelectionPredicate::BothEndpoints),
            "either" | "either_endpoint" => Ok(SelectionPredicate::EitherEndpoint),
            other => Err(format!(
                "unknown selection predicate '{other}', expected 'both' or 'either'"
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_predicates_differ_on_one_selected_endpoint() {
        let selection: SelectionState = ["France"].into_iter().collect();
        assert!(!SelectionPredicate::BothEndpoints.accepts(&selection, "France", "Spain"));
        assert!(SelectionPredicate::EitherEndpoint.accepts(&selection, "France", "Spain"));
        assert!(!SelectionPredicate::EitherEndpoint.accepts(&selection, "Italy", "Spain"));
    }
}
