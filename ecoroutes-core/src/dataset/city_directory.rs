use itertools::Itertools;

/// city names offered as suggestions while typing a departure or arrival.
#[derive(Debug, Clone, Default)]
pub struct CityDirectory {
    names: Vec<String>,
}

impl From<Vec<String>> for CityDirectory {
    fn from(names: Vec<String>) -> Self {
        let names = names
            .into_iter()
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty())
            .sorted_by_key(|n| n.to_lowercase())
            .dedup()
            .collect();
        Self { names }
    }
}

impl CityDirectory {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// names starting with `prefix`, ignoring case, in alphabetical order.
    /// an empty prefix suggests nothing.
    ///
    /// ```
    /// use ecoroutes_core::dataset::CityDirectory;
    ///
    /// let directory = CityDirectory::from(vec![
    ///     String::from("Paris"),
    ///     String::from("Porto"),
    ///     String::from("Prague"),
    /// ]);
    /// assert_eq!(directory.suggest("pr", 5), vec!["Prague"]);
    /// ```
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<&str> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return vec![];
        }
        self.names
            .iter()
            .filter(|n| n.to_lowercase().starts_with(&prefix))
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_suggest_is_case_insensitive_and_limited() {
        let directory = CityDirectory::from(vec![
            String::from("Brno"),
            String::from("bern"),
            String::from("Berlin"),
            String::from("Belgrade"),
            String::from("Berlin"),
        ]);
        assert_eq!(directory.names().len(), 4);
        assert_eq!(directory.suggest("BER", 5), vec!["Berlin", "bern"]);
        assert_eq!(directory.suggest("b", 2), vec!["Belgrade", "Berlin"]);
        assert!(directory.suggest("  ", 5).is_empty());
    }
}
