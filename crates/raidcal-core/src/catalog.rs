//! The raid catalog: raid definitions plus per-region season calendars.
//!
//! The upstream feed lists regions positionally (`RaidSeasons[0]` is Japan,
//! `RaidSeasons[1]` is Global). Decoding turns that into named fields so the
//! rest of the crate never indexes by position.

use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

pub type RaidId = i64;
pub type SeasonId = i64;

/// Target-region id offset for Total Assault seasons. Fixed by the feed.
pub const TOTAL_ASSAULT_ID_OFFSET: SeasonId = -5;

/// Target-region id offset for Grand Assault seasons. Fixed by the feed.
pub const GRAND_ASSAULT_ID_OFFSET: SeasonId = 0;

// ─── Raid type ───────────────────────────────────────────────────────────────

/// The two disjoint raid-type calendars each region keeps.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum RaidType {
  #[serde(rename = "Total Assault")]
  TotalAssault,
  #[serde(rename = "Grand Assault")]
  GrandAssault,
}

impl RaidType {
  /// Both raid types, in schedule concatenation order.
  pub const ALL: [RaidType; 2] = [RaidType::TotalAssault, RaidType::GrandAssault];

  pub fn label(self) -> &'static str {
    match self {
      RaidType::TotalAssault => "Total Assault",
      RaidType::GrandAssault => "Grand Assault",
    }
  }

  /// Difference between a Japan season id and its Global counterpart.
  pub fn id_offset(self) -> SeasonId {
    match self {
      RaidType::TotalAssault => TOTAL_ASSAULT_ID_OFFSET,
      RaidType::GrandAssault => GRAND_ASSAULT_ID_OFFSET,
    }
  }

  /// What to add to a `home` season id to get the other region's id.
  pub fn id_shift(self, home: Region) -> SeasonId {
    match home {
      Region::Japan => self.id_offset(),
      Region::Global => -self.id_offset(),
    }
  }

  /// Name of the feed list holding this raid type's seasons.
  pub fn feed_list(self) -> &'static str {
    match self {
      RaidType::TotalAssault => "Seasons",
      RaidType::GrandAssault => "EliminateSeasons",
    }
  }
}

impl fmt::Display for RaidType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

// ─── Region ──────────────────────────────────────────────────────────────────

/// A game release. Japan leads; Global follows on a lag.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Region {
  Japan,
  Global,
}

impl Region {
  /// Position of this region in the feed's `RaidSeasons` array.
  pub fn feed_index(self) -> usize {
    match self {
      Region::Japan => 0,
      Region::Global => 1,
    }
  }

  /// Short identifier used in configuration and markup.
  pub fn key(self) -> &'static str {
    match self {
      Region::Japan => "jp",
      Region::Global => "global",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Region::Japan => "JP",
      Region::Global => "Global",
    }
  }
}

impl fmt::Display for Region {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for Region {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "jp" | "japan" => Ok(Region::Japan),
      "global" | "glb" | "en" => Ok(Region::Global),
      _ => Err(Error::UnknownRegion(s.to_string())),
    }
  }
}

// ─── Raid definitions ────────────────────────────────────────────────────────

/// A raid boss as listed in the feed's `Raid` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RaidDefinition {
  pub id:        RaidId,
  pub name:      String,
  #[serde(default)]
  pub path_name: String,
  #[serde(default, deserialize_with = "one_or_many")]
  pub terrain:   Vec<String>,
  #[serde(default)]
  pub dev_name:  String,
  /// Explicit portrait override; takes precedence over the `dev_name` path.
  #[serde(rename = "Boss_Portrait_EN0006_Lobby", default)]
  pub portrait:  Option<String>,
}

impl RaidDefinition {
  /// Icon reference without extension: the explicit portrait if present,
  /// otherwise the conventional asset path derived from `dev_name`.
  pub fn icon(&self) -> String {
    self
      .portrait
      .clone()
      .unwrap_or_else(|| format!("images/raid/Boss_Portrait_{}_Lobby", self.dev_name))
  }
}

// ─── Seasons ─────────────────────────────────────────────────────────────────

/// One raid season as announced for a single region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawSeason {
  pub season_id:      SeasonId,
  #[serde(deserialize_with = "string_or_number")]
  pub season_display: String,
  #[serde(default)]
  pub terrain:        String,
  /// Unix epoch seconds.
  pub start:          i64,
  /// Unix epoch seconds.
  pub end:            i64,
  pub raid_id:        RaidId,
}

/// A region's season calendar, partitioned by raid type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSeasons {
  #[serde(rename = "Seasons", default)]
  pub total_assault: Vec<RawSeason>,
  #[serde(rename = "EliminateSeasons", default)]
  pub grand_assault: Vec<RawSeason>,
}

impl RegionSeasons {
  pub fn of(&self, raid_type: RaidType) -> &[RawSeason] {
    match raid_type {
      RaidType::TotalAssault => &self.total_assault,
      RaidType::GrandAssault => &self.grand_assault,
    }
  }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// Wire shape of the feed, before regions are named.
#[derive(Debug, Deserialize)]
pub struct RawCatalog {
  #[serde(rename = "Raid", default)]
  pub raid:         Vec<RaidDefinition>,
  #[serde(rename = "RaidSeasons", default)]
  pub raid_seasons: Vec<RegionSeasons>,
}

/// The decoded feed. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  raids:  HashMap<RaidId, RaidDefinition>,
  japan:  RegionSeasons,
  global: RegionSeasons,
}

impl Catalog {
  pub fn new(
    raids: impl IntoIterator<Item = RaidDefinition>,
    japan: RegionSeasons,
    global: RegionSeasons,
  ) -> Self {
    Self {
      raids: raids.into_iter().map(|r| (r.id, r)).collect(),
      japan,
      global,
    }
  }

  /// Decode the feed's JSON document.
  pub fn from_json(input: &str) -> Result<Self> {
    let raw: RawCatalog = serde_json::from_str(input)?;
    raw.try_into()
  }

  pub fn raid(&self, id: RaidId) -> Option<&RaidDefinition> { self.raids.get(&id) }

  pub fn raids(&self) -> &HashMap<RaidId, RaidDefinition> { &self.raids }

  pub fn region(&self, region: Region) -> &RegionSeasons {
    match region {
      Region::Japan => &self.japan,
      Region::Global => &self.global,
    }
  }
}

impl TryFrom<RawCatalog> for Catalog {
  type Error = Error;

  fn try_from(raw: RawCatalog) -> Result<Self> {
    let found = raw.raid_seasons.len();
    if found > 2 {
      tracing::debug!(found, "ignoring extra RaidSeasons entries");
    }
    let mut regions = raw.raid_seasons.into_iter();
    let (Some(japan), Some(global)) = (regions.next(), regions.next()) else {
      return Err(Error::MalformedCatalog(format!(
        "expected 2 RaidSeasons entries, found {found}"
      )));
    };
    Ok(Self::new(raw.raid, japan, global))
  }
}

// ─── Lenient field decoding ──────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
  String(String),
  Integer(i64),
  Float(f64),
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match StringOrNumber::deserialize(deserializer)? {
    StringOrNumber::String(s) => s,
    StringOrNumber::Integer(n) => n.to_string(),
    StringOrNumber::Float(n) => n.to_string(),
  })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
  One(String),
  Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match OneOrMany::deserialize(deserializer)? {
    OneOrMany::One(s) => vec![s],
    OneOrMany::Many(v) => v,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  const FEED: &str = r#"{
    "Raid": [
      { "Id": 1, "Name": "Binah", "PathName": "binah", "Terrain": ["Outdoor"],
        "DevName": "Binah", "Extra": true },
      { "Id": 2, "Name": "Chesed", "PathName": "chesed", "Terrain": "Indoor",
        "DevName": "Chesed", "Boss_Portrait_EN0006_Lobby": "https://cdn.example/chesed" }
    ],
    "RaidSeasons": [
      { "Seasons": [ { "SeasonId": 10, "SeasonDisplay": 10, "Terrain": "Outdoor",
                       "Start": 1700000000, "End": 1700600000, "RaidId": 1 } ],
        "EliminateSeasons": [ { "SeasonId": 3, "SeasonDisplay": "3", "Terrain": "Indoor",
                                "Start": 1701000000, "End": 1701600000, "RaidId": 2 } ] },
      { "Seasons": [], "EliminateSeasons": [] }
    ]
  }"#;

  #[test]
  fn decodes_feed_into_named_regions() {
    let catalog = Catalog::from_json(FEED).unwrap();

    assert_eq!(catalog.raids().len(), 2);
    let japan = catalog.region(Region::Japan);
    assert_eq!(japan.of(RaidType::TotalAssault).len(), 1);
    assert_eq!(japan.of(RaidType::GrandAssault)[0].season_id, 3);
    assert!(catalog.region(Region::Global).of(RaidType::TotalAssault).is_empty());
  }

  #[test]
  fn lenient_fields_normalise() {
    let catalog = Catalog::from_json(FEED).unwrap();

    assert_eq!(catalog.raid(1).unwrap().terrain, vec!["Outdoor".to_string()]);
    assert_eq!(catalog.raid(2).unwrap().terrain, vec!["Indoor".to_string()]);

    let japan = catalog.region(Region::Japan);
    assert_eq!(japan.of(RaidType::TotalAssault)[0].season_display, "10");
    assert_eq!(japan.of(RaidType::GrandAssault)[0].season_display, "3");
  }

  #[test]
  fn icon_prefers_explicit_portrait() {
    let catalog = Catalog::from_json(FEED).unwrap();
    assert_eq!(catalog.raid(1).unwrap().icon(), "images/raid/Boss_Portrait_Binah_Lobby");
    assert_eq!(catalog.raid(2).unwrap().icon(), "https://cdn.example/chesed");
  }

  #[test]
  fn single_region_is_malformed() {
    let err = Catalog::from_json(r#"{ "Raid": [], "RaidSeasons": [ {} ] }"#).unwrap_err();
    assert!(matches!(err, Error::MalformedCatalog(_)));
  }

  #[test]
  fn invalid_json_is_reported() {
    let err = Catalog::from_json("{ not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
  }

  #[test]
  fn region_parsing_is_case_insensitive() {
    assert_eq!("JP".parse::<Region>().unwrap(), Region::Japan);
    assert_eq!("Global".parse::<Region>().unwrap(), Region::Global);
    assert_eq!(" glb ".parse::<Region>().unwrap(), Region::Global);
    assert!(matches!("kr".parse::<Region>(), Err(Error::UnknownRegion(_))));
  }

  #[test]
  fn id_offsets_are_fixed_per_type() {
    assert_eq!(RaidType::GrandAssault.id_offset(), 0);
    assert_eq!(RaidType::TotalAssault.id_offset(), -5);
    assert_eq!(RaidType::GrandAssault.feed_list(), "EliminateSeasons");
    assert_eq!(RaidType::TotalAssault.feed_list(), "Seasons");
  }

  #[test]
  fn id_shift_follows_projection_direction() {
    assert_eq!(RaidType::TotalAssault.id_shift(Region::Japan), -5);
    assert_eq!(RaidType::TotalAssault.id_shift(Region::Global), 5);
    assert_eq!(RaidType::GrandAssault.id_shift(Region::Global), 0);
  }
}
