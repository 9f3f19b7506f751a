//! Table columns and their declared identifiers.

use std::str::FromStr;

use raidcal_core::catalog::Region;

/// A column the table can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
  Raid,
  Type,
  Season,
  Terrain,
  Date,
  Start,
  End,
  Target,
  Status,
  Resources,
}

impl Column {
  /// Default layout when no columns are declared.
  pub const DEFAULT: [Column; 6] = [
    Column::Raid,
    Column::Type,
    Column::Date,
    Column::Target,
    Column::Status,
    Column::Resources,
  ];

  /// Value of the `data-property-name` attribute.
  pub fn key(self) -> &'static str {
    match self {
      Column::Raid => "RaidNameWithIcon",
      Column::Type => "TypeWithIcon",
      Column::Season => "SeasonDisplay",
      Column::Terrain => "Terrain",
      Column::Date => "DateRange",
      Column::Start => "StartFormatted",
      Column::End => "EndFormatted",
      Column::Target => "GlbDaysComesIn",
      Column::Status => "GLBStatus",
      Column::Resources => "Resources",
    }
  }

  /// Header text. The target column is named after the `target` region.
  pub fn title(self, target: Region) -> &'static str {
    match self {
      Column::Raid => "Raid",
      Column::Type => "Type",
      Column::Season => "Season",
      Column::Terrain => "Terrain",
      Column::Date => "Date",
      Column::Start => "Start",
      Column::End => "End",
      Column::Target => target.label(),
      Column::Status => "Status",
      Column::Resources => "Resources",
    }
  }
}

/// Identifier matched no known column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown column: {0:?}")]
pub struct UnknownColumn(pub String);

impl FromStr for Column {
  type Err = UnknownColumn;

  /// Accepts the short name or the `data-property-name` key, any case.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim();
    ALL
      .into_iter()
      .find(|c| c.key().eq_ignore_ascii_case(wanted) || short_name(*c).eq_ignore_ascii_case(wanted))
      .ok_or_else(|| UnknownColumn(s.to_string()))
  }
}

const ALL: [Column; 10] = [
  Column::Raid,
  Column::Type,
  Column::Season,
  Column::Terrain,
  Column::Date,
  Column::Start,
  Column::End,
  Column::Target,
  Column::Status,
  Column::Resources,
];

fn short_name(column: Column) -> &'static str {
  match column {
    Column::Raid => "raid",
    Column::Type => "type",
    Column::Season => "season",
    Column::Terrain => "terrain",
    Column::Date => "date",
    Column::Start => "start",
    Column::End => "end",
    Column::Target => "target",
    Column::Status => "status",
    Column::Resources => "resources",
  }
}

/// Parse declared column identifiers, dropping unknown ones with a warning.
/// An empty declaration yields [`Column::DEFAULT`].
pub fn parse_columns<S: AsRef<str>>(declared: &[S]) -> Vec<Column> {
  if declared.is_empty() {
    return Column::DEFAULT.to_vec();
  }
  declared
    .iter()
    .filter_map(|id| match id.as_ref().parse::<Column>() {
      Ok(column) => Some(column),
      Err(e) => {
        tracing::warn!("{e}; skipping");
        None
      }
    })
    .collect()
}
