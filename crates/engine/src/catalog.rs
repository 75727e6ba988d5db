use serde::{Deserialize, Serialize};

/// Floors a map's image set can contain, ordered bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Floor {
    Basement,
    Ground,
    Ground2,
    First,
    Second,
    Roof,
}

impl std::fmt::Display for Floor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Floor::Basement => write!(f, "basement"),
            Floor::Ground => write!(f, "ground"),
            Floor::Ground2 => write!(f, "ground2"),
            Floor::First => write!(f, "first"),
            Floor::Second => write!(f, "second"),
            Floor::Roof => write!(f, "roof"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMap {
    pub name: String,
    pub display_name: String,
    pub floors: Vec<Floor>,
}

impl GameMap {
    /// Source path of one floor's background image, loaded by the shell.
    pub fn image_source(&self, floor: Floor) -> String {
        format!("/{}/{}.jpg", self.name, floor)
    }
}

/// The maps the viewer offers and the floors each one has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub maps: Vec<GameMap>,
}

impl Catalog {
    pub fn from_json(data: &str) -> Result<Self, String> {
        let maps: Vec<GameMap> = serde_json::from_str(data)
            .map_err(|e| format!("Failed to parse map catalog: {}", e))?;
        tracing::info!(maps = maps.len(), "Loaded map catalog");
        Ok(Catalog { maps })
    }

    pub fn find_map(&self, name: &str) -> Option<&GameMap> {
        self.maps.iter().find(|m| m.name == name)
    }

    pub fn floors_for(&self, name: &str) -> Option<&[Floor]> {
        self.find_map(name).map(|m| m.floors.as_slice())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        use Floor::*;

        fn map(name: &str, display_name: &str, floors: &[Floor]) -> GameMap {
            GameMap {
                name: name.to_string(),
                display_name: display_name.to_string(),
                floors: floors.to_vec(),
            }
        }

        Catalog {
            maps: vec![
                map("bank", "Bank", &[Basement, Ground, First, Roof]),
                map("border", "Border", &[Ground, First, Roof]),
                map("chalet", "Chalet", &[Basement, First, Second, Roof]),
                map("clubhouse", "Club House", &[Basement, Ground, Second, Roof]),
                map("coastline", "Coastline", &[First, Second, Roof]),
                map("consulate", "Consulate", &[Basement, Ground, First, Roof]),
                map("emeraldplains", "Emerald Plains", &[First, Second, Roof]),
                map("kafe", "Kafe Dostoyevsky", &[Basement, Ground, First, Roof]),
                map("kanal", "Kanal", &[Ground, Ground2, First, Second, Roof]),
                map("lair", "Lair", &[Basement, First, Second, Roof]),
                map(
                    "nighthavenlabs",
                    "Nighthaven Labs",
                    &[Basement, First, Second, Roof],
                ),
                map(
                    "oregon",
                    "Oregon",
                    &[Basement, Ground, First, Second, Roof],
                ),
                map("outback", "Outback", &[First, Second, Roof]),
                map("skyscraper", "Skyscraper", &[First, Second, Roof]),
                map("themepark", "Theme Park", &[First, Second, Roof]),
                map("villa", "Villa", &[Basement, First, Second, Roof]),
            ],
        }
    }
}
