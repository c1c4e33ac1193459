use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// countries or regions currently chosen by the user. membership only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    names: BTreeSet<String>,
}

impl<S: Into<String>> FromIterator<S> for SelectionState {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl SelectionState {
    /// adds `name` if absent, removes it otherwise. returns whether it is now selected.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_owned());
            true
        }
    }

    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.to_owned())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut selection = SelectionState::default();
        assert!(selection.toggle("France"));
        assert!(selection.contains("France"));
        assert!(!selection.toggle("France"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_from_iter_deduplicates() {
        let selection: SelectionState = ["Spain", "France", "Spain"].into_iter().collect();
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["France", "Spain"]);
    }
}
