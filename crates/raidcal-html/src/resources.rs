//! Community resource links for a season.

use raidcal_core::{
  capability::ResourceLinks,
  catalog::RaidType,
  row::ResourceLink,
  season::SeasonRecord,
};

/// The two community sites that publish per-season raid guides.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommunityResources;

impl CommunityResources {
  fn souriki_border(season: &SeasonRecord) -> ResourceLink {
    let kind = match season.raid_type {
      RaidType::GrandAssault => "decisive_battle",
      RaidType::TotalAssault => "total_assault",
    };
    ResourceLink {
      label: "souriki-border".into(),
      url:   format!(
        "https://www.souriki-border.com/{kind}/season/{}",
        season.season_display
      ),
    }
  }

  fn midokuni(season: &SeasonRecord) -> ResourceLink {
    // Grand Assault pages are keyed by season id, Total Assault by label.
    let (kind, path) = match season.raid_type {
      RaidType::GrandAssault => ("GrandRaid", season.season_id.to_string()),
      RaidType::TotalAssault => ("Raid", season.season_display.clone()),
    };
    ResourceLink {
      label: "midokuni".into(),
      url:   format!("https://hina.loves.midokuni.com/{kind}/JP/{path}"),
    }
  }
}

impl ResourceLinks for CommunityResources {
  fn links_for(&self, season: &SeasonRecord) -> Vec<ResourceLink> {
    vec![Self::souriki_border(season), Self::midokuni(season)]
  }
}
