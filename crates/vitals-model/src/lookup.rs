use std::collections::HashMap;

/// Case- and whitespace-insensitive index over country (sheet) names.
///
/// Sheet names are stored verbatim; lookups fold case and surrounding
/// whitespace and resolve back to the canonical spelling, so "france" and
/// " France " both reach the "France" sheet.
#[derive(Debug, Clone, Default)]
pub struct CountryNames {
    map: HashMap<String, String>,
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

impl CountryNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for name in names {
            let name = name.as_ref();
            map.entry(fold(name)).or_insert_with(|| name.to_string());
        }
        Self { map }
    }

    /// Canonical sheet name for `name`, if any sheet matches.
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.map.get(&fold(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&fold(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_case_and_whitespace() {
        let names = CountryNames::new(["France", "Côte d'Ivoire"]);
        assert_eq!(names.canonical("france"), Some("France"));
        assert_eq!(names.canonical(" FRANCE "), Some("France"));
        assert_eq!(names.canonical("côte d'ivoire"), Some("Côte d'Ivoire"));
        assert!(names.canonical("Germany").is_none());
    }

    #[test]
    fn first_spelling_wins() {
        let names = CountryNames::new(["Chad", "chad"]);
        assert_eq!(names.canonical("CHAD"), Some("Chad"));
    }
}
