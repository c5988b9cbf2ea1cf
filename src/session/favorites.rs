//! Title-keyed favorites list.

use crate::model::Suggestion;
use serde::Serialize;

/// Ordered favorites with at most one entry per `title`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Favorites(Vec<Suggestion>);

impl Favorites {
    /// Parse the stored JSON array. Later duplicates of a title are dropped.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let items: Vec<Suggestion> = serde_json::from_str(raw)?;
        let mut out = Favorites::default();
        for item in items {
            if out.contains(&item.title) {
                tracing::debug!(title = %item.title, "dropping duplicate stored favorite");
                continue;
            }
            out.0.push(item);
        }
        Ok(out)
    }

    /// Parse stored favorites, treating missing or malformed data as empty.
    pub fn load(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::parse(raw) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(error = %e, "error loading favorites, starting with an empty list");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.0.iter().any(|f| f.title == title)
    }

    /// Remove the entry with this title if present, append it otherwise.
    /// Returns whether the activity is a favorite afterwards.
    pub fn toggle(&mut self, activity: Suggestion) -> bool {
        if self.contains(&activity.title) {
            self.0.retain(|f| f.title != activity.title);
            false
        } else {
            self.0.push(activity);
            true
        }
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, title: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|f| f.title != title);
        self.0.len() != before
    }

    pub fn as_slice(&self) -> &[Suggestion] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Suggestion> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn item(title: &str) -> Suggestion {
        Suggestion {
            title: title.into(),
            description: format!("{title} description"),
            icon: "*".into(),
            benefit: "feels good".into(),
        }
    }

    #[test]
    fn toggle_twice_is_a_net_no_op() {
        let mut f = Favorites::default();
        assert!(f.toggle(item("Yoga")));
        assert!(!f.toggle(item("Yoga")));
        assert!(f.is_empty());
    }

    #[test]
    fn toggle_preserves_insertion_order() {
        let mut f = Favorites::default();
        f.toggle(item("Walk"));
        f.toggle(item("Yoga"));
        f.toggle(item("Read"));
        f.toggle(item("Yoga"));
        f.toggle(item("Yoga"));
        let titles: Vec<_> = f.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Walk", "Read", "Yoga"]);
    }

    #[test]
    fn toggle_sequence_matches_parity_per_title() {
        let titles = ["Walk", "Yoga", "Walk", "Read", "Yoga", "Walk", "Tea", "Read", "Read"];
        let mut f = Favorites::default();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for t in titles {
            f.toggle(item(t));
            *counts.entry(t).or_default() += 1;
            assert!(f.len() <= counts.len());
        }
        for (t, n) in counts {
            assert_eq!(f.contains(t), n % 2 == 1, "title {t} toggled {n} times");
        }
        let mut seen = std::collections::HashSet::new();
        assert!(f.iter().all(|s| seen.insert(s.title.clone())));
    }

    #[test]
    fn remove_missing_title_is_a_no_op() {
        let mut f = Favorites::default();
        f.toggle(item("Walk"));
        assert!(!f.remove("Yoga"));
        assert!(f.remove("Walk"));
        assert!(!f.remove("Walk"));
        assert!(f.is_empty());
    }

    #[test]
    fn load_treats_garbage_as_empty() {
        assert!(Favorites::load(Some("[{\"title\": 3")).is_empty());
        assert!(Favorites::load(Some("\"just a string\"")).is_empty());
        assert!(Favorites::load(None).is_empty());
    }

    #[test]
    fn parse_drops_duplicate_titles() {
        let raw = serde_json::to_string(&vec![item("Walk"), item("Walk"), item("Yoga")]).unwrap();
        let f = Favorites::parse(&raw).unwrap();
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn json_round_trip_keeps_fields() {
        let mut f = Favorites::default();
        f.toggle(item("Walk"));
        let back = Favorites::load(Some(&f.to_json().unwrap()));
        assert_eq!(back, f);
        assert_eq!(back.as_slice()[0].benefit, "feels good");
    }
}
