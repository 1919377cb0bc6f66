use std::collections::HashMap;

use serde::Serialize;

/// Sequential station identifier, assigned in creation order.
pub type StationId = usize;

/// A deduplicated station and the lines that serve it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    pub id: StationId,
    /// Presentable name as first seen in the line data, trimmed.
    pub display_name: String,
    /// Canonical matching key; unique across the registry.
    pub key: String,
    /// Line labels in first-seen order, without duplicates.
    pub lines: Vec<String>,
    pub planned: bool,
}

impl Station {
    /// Name to show users, falling back to the key when the display name is empty.
    pub fn name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.key
        } else {
            &self.display_name
        }
    }

    /// Whether the station belongs to more than one line.
    pub fn is_interchange(&self) -> bool {
        self.lines.len() > 1
    }

    /// Whether `label` is one of the station's lines.
    pub fn serves(&self, label: &str) -> bool {
        self.lines.iter().any(|line| line == label)
    }
}

/// Station storage keyed by canonical name.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    stations: Vec<Station>,
    by_key: HashMap<String, StationId>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `key`, creating the station on first sight.
    ///
    /// An existing station keeps its original display name and planned flag;
    /// later calls with the same key do not update them.
    pub fn resolve(&mut self, key: &str, display_name: &str, planned: bool) -> StationId {
        if let Some(&id) = self.by_key.get(key) {
            return id;
        }

        let id = self.stations.len();
        self.stations.push(Station {
            id,
            display_name: display_name.trim().to_string(),
            key: key.to_string(),
            lines: Vec::new(),
            planned,
        });
        self.by_key.insert(key.to_string(), id);
        id
    }

    /// Add `label` to the station's lines unless already present.
    ///
    /// Unknown ids are ignored.
    pub fn tag_line(&mut self, id: StationId, label: &str) {
        if let Some(station) = self.stations.get_mut(id) {
            if !station.serves(label) {
                station.lines.push(label.to_string());
            }
        }
    }

    /// Lookup a station id by canonical key.
    pub fn lookup(&self, key: &str) -> Option<StationId> {
        self.by_key.get(key).copied()
    }

    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Stations in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
