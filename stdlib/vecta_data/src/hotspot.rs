use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub cases: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotspotTable {
    pub hotspots: Vec<Hotspot>,
}

impl HotspotTable {
    /// CSV with `lat,lon,cases` headers. Extra columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut hotspots = Vec::new();
        for row in rdr.deserialize() {
            let h: Hotspot = row?;
            hotspots.push(h);
        }
        Ok(Self { hotspots })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Three sample clusters in the north of Singapore.
    pub fn demo() -> Self {
        Self {
            hotspots: vec![
                Hotspot {
                    lat: 1.4303,
                    lon: 103.8355,
                    cases: 22,
                },
                Hotspot {
                    lat: 1.4404,
                    lon: 103.8001,
                    cases: 41,
                },
                Hotspot {
                    lat: 1.4211,
                    lon: 103.9102,
                    cases: 17,
                },
            ],
        }
    }

    pub fn total_cases(&self) -> u64 {
        self.hotspots.iter().map(|h| u64::from(h.cases)).sum()
    }
}
