//! Line definitions: the static input the network is built from.
//!
//! A line is a label plus an ordered list of stops. The built-in Namma Metro
//! data is compiled into the crate; alternative data can be loaded from a JSON
//! file shaped like:
//!
//! ```json
//! [
//!   { "label": "purple", "stations": ["Majestic", { "name": "Trinity", "planned": true }] }
//! ]
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::normalize::normalize_name;

/// Environment variable naming a JSON line-data file to use instead of the
/// built-in network.
pub const LINES_ENV_VAR: &str = "NAMMA_METRO_LINES";

/// One stop on a line definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawStop")]
pub struct LineStop {
    pub name: String,
    /// `true` when the station is not yet operational.
    pub planned: bool,
}

impl LineStop {
    /// An operational stop.
    pub fn open(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            planned: false,
        }
    }

    /// A stop that is planned but not yet operational.
    pub fn planned(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            planned: true,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStop {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        planned: bool,
    },
}

impl From<RawStop> for LineStop {
    fn from(raw: RawStop) -> Self {
        match raw {
            RawStop::Name(name) => LineStop::open(name),
            RawStop::Full { name, planned } => LineStop { name, planned },
        }
    }
}

/// A named line and its stops in travel order.
///
/// Consecutive stops are directly connected; the line is an open path, so the
/// last stop never connects back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDefinition {
    pub label: String,
    pub stations: Vec<LineStop>,
}

impl LineDefinition {
    /// Build a line whose stops are all operational.
    pub fn open<I, S>(label: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            stations: names.into_iter().map(LineStop::open).collect(),
        }
    }
}

/// Check that every line has a label, at least one stop, and no names that
/// normalize to an empty key.
pub fn validate_lines(lines: &[LineDefinition]) -> Result<()> {
    for (index, line) in lines.iter().enumerate() {
        if line.label.trim().is_empty() {
            return Err(Error::InvalidLineData {
                message: format!("line #{} has an empty label", index + 1),
            });
        }
        if line.stations.is_empty() {
            return Err(Error::InvalidLineData {
                message: format!("line '{}' has no stations", line.label),
            });
        }
        // Every stop needs a non-empty key.
        if let Some(position) = line
            .stations
            .iter()
            .position(|stop| normalize_name(&stop.name).is_empty())
        {
            return Err(Error::InvalidLineData {
                message: format!(
                    "line '{}' has a blank station name at position {}",
                    line.label,
                    position + 1
                ),
            });
        }
    }
    Ok(())
}

/// Parse and validate line definitions from a JSON document.
pub fn parse_lines(json: &str) -> Result<Vec<LineDefinition>> {
    let lines: Vec<LineDefinition> = serde_json::from_str(json)?;
    validate_lines(&lines)?;
    Ok(lines)
}

/// Load and validate line definitions from a JSON file.
pub fn load_lines(path: &Path) -> Result<Vec<LineDefinition>> {
    if !path.exists() {
        return Err(Error::LineDataNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path)?;
    let lines = parse_lines(&contents)?;
    debug!(path = %path.display(), lines = lines.len(), "loaded line data");
    Ok(lines)
}

/// Resolve the line data to build from.
///
/// An explicit path wins, then [`LINES_ENV_VAR`], then the built-in network.
pub fn resolve_lines(path: Option<&Path>) -> Result<Vec<LineDefinition>> {
    if let Some(path) = path {
        return load_lines(path);
    }
    if let Some(value) = env::var_os(LINES_ENV_VAR).filter(|value| !value.is_empty()) {
        let path = PathBuf::from(value);
        info!(path = %path.display(), "using line data from {}", LINES_ENV_VAR);
        return load_lines(&path);
    }
    Ok(default_lines())
}

/// The built-in Namma Metro network: purple, green and pink lines.
pub fn default_lines() -> Vec<LineDefinition> {
    vec![
        LineDefinition::open("purple", PURPLE.iter().copied()),
        LineDefinition::open("green", GREEN.iter().copied()),
        LineDefinition::open("pink", PINK.iter().copied()),
    ]
}

const PURPLE: &[&str] = &[
    "challaghatta",
    "kengeri",
    "Kengeri Bus Terminal",
    "Pattanagere",
    "Jnanbharati",
    "Rajarajeshwari Nagar",
    "Nayandahalli",
    "mysore road",
    "deepanjali nagar",
    "attiguppe",
    "vijayanagar",
    "Hosahalli",
    "magadi road",
    "majestic",
    "Central Road",
    "Vidhana Soudha",
    "Cubbon Park",
    "m.g. road",
    "trinity",
    "halasuru",
    "indiranagar",
    "swami vivekananda road",
    "baiyappanahalli",
    "Benniganahalli",
    "kr puram",
    "Singayyanapalya",
    "Garudacharpalaya",
    "hoodi",
    "Seetharampalya",
    "Kundalahalli",
    "Nallurhalli",
    "Sri Satya Sai Hospital",
    "Pattandur Agrahara",
    "Kadugodi Tree Park",
    "Channasandra(HopeFarm)",
    "whitefield(Kadugodi)",
];

const GREEN: &[&str] = &[
    "Madavara",
    "Chikkabidarakallu",
    "Manjunathanagar",
    "nagasandra",
    "Dasarhalli",
    "Jalahalli",
    "Peenya Industry",
    "Peenya",
    "Gorguntepalya",
    "Yeswantpur",
    "Sandal Soap Factory",
    "Mahalakshmi",
    "Rajijnagar",
    "Kuvempu road",
    "Srirampura",
    "Sampige Road",
    "majestic",
    "Chickpete",
    "Krishna Rajendra Market",
    "National College",
    "Lalbagh",
    "South End Circle",
    "Jayanagar",
    "Rashtreeya Vidyalaya Road",
    "Banashankari",
    "jayadeva hospital",
    "Yelachenahalli",
    "Konanakunte Cross",
    "Vajarahalli",
    "Thalaghattapura",
    "Silk Institute",
];

const PINK: &[&str] = &[
    "kalena agrahara",
    "hulimavu",
    "iim bangalore",
    "jp nagar 4th phase",
    "jayadeva hospital",
    "Tavarekere",
    "dairy circle",
    "lakkasandra",
    "langford town",
    "rashtriya military school",
    "mg road",
    "shivajinagar",
    "Cantonment",
    "Pottery Town",
    "tannery road",
    "Venkateshpura",
    "kadugundanahalli",
    "nagawara",
];
