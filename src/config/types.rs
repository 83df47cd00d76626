use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_RIDERS: [&str; 7] = [
    "Chris", "Frances", "Lucja", "Other", "Philip", "Sally", "Theo",
];

const DEFAULT_BIKES: [&str; 13] = [
    "Cannondale M700",
    "Cannondale ST400",
    "Cannondale ST400 2",
    "Fuji",
    "Giant Bouler Jr.",
    "Jamis Laser 16",
    "Liv Alight",
    "Liv City",
    "Other",
    "Tomamso",
    "Tomamso 2",
    "Torelli",
    "Torelli 2",
];

/// Bikelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the rides_<year>.csv files
    pub rides_dir: PathBuf,

    /// Known riders, in display order
    pub riders: Vec<String>,

    /// Known bikes, in display order
    pub bikes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rides_dir: PathBuf::from("./rides"),
            riders: DEFAULT_RIDERS.iter().map(|s| s.to_string()).collect(),
            bikes: DEFAULT_BIKES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
