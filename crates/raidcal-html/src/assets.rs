//! Icon and raid-page URLs on the asset host.

use raidcal_core::catalog::RaidType;

pub const DEFAULT_ASSET_BASE: &str = "https://schaledb.com";

/// Resolves asset references against a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
  base: String,
}

impl Default for Assets {
  fn default() -> Self { Self::new(DEFAULT_ASSET_BASE) }
}

impl Assets {
  pub fn new(base: impl Into<String>) -> Self {
    Self { base: base.into().trim_end_matches('/').to_string() }
  }

  /// Raid portrait. `icon` is either an absolute URL or a path under the
  /// asset host, without extension.
  pub fn raid_icon(&self, icon: &str) -> String {
    if icon.starts_with("http://") || icon.starts_with("https://") {
      format!("{icon}.png")
    } else {
      format!("{}/{}.png", self.base, icon.trim_start_matches('/'))
    }
  }

  /// Canonical page for a raid.
  pub fn raid_page(&self, path_name: &str) -> String {
    format!("{}/raid/{path_name}", self.base)
  }

  /// Coin icon for a raid type.
  pub fn raid_type_icon(&self, raid_type: RaidType) -> String {
    let item = match raid_type {
      RaidType::TotalAssault => "item_icon_raidcoin",
      RaidType::GrandAssault => "item_icon_eliminateraidcoin",
    };
    format!("{}/images/item/full/{item}.webp", self.base)
  }
}
