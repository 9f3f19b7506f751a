//! Markup for the raids table and the page around it.

use maud::{DOCTYPE, Markup, html};
use raidcal_core::{
  row::{ScheduleRow, TargetCell},
  schedule::Schedule,
};

use crate::{Column, PageOptions, assets::Assets};

pub fn page(
  schedule: &Schedule,
  rows: &[ScheduleRow],
  focus: Option<usize>,
  options: &PageOptions,
) -> Markup {
  html! {
    (DOCTYPE)
    html lang="en" {
      head {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1.0";
        title { (options.title) }
        @if let Some(href) = &options.stylesheet {
          link rel="stylesheet" href=(href);
        }
      }
      body {
        main class="container" {
          h1 { (options.title) }
          p class="reference-day" {
            "As of " (raidcal_core::clock::format_long(schedule.today.date())) " (UTC). "
            "Showing " (schedule.home.to_string()) " seasons"
            @if schedule.home != schedule.target {
              " with " (schedule.target.to_string()) " dates"
            }
            "."
          }
          @if rows.is_empty() {
            p class="notice" { "Raid data is currently unavailable." }
          }
          (table(schedule, rows, focus, options))
        }
      }
    }
  }
}

pub fn table(
  schedule: &Schedule,
  rows: &[ScheduleRow],
  focus: Option<usize>,
  options: &PageOptions,
) -> Markup {
  html! {
    table id="raids-table" selected-server=(schedule.home.feed_index()) finished-loading="true" {
      thead {
        tr {
          @for column in &options.columns {
            th data-property-name=(column.key()) { (column.title(schedule.target)) }
          }
        }
      }
      tbody {
        @for (i, row) in rows.iter().enumerate() {
          tr class=[(focus == Some(i)).then_some("next-glb-raid")] {
            @for column in &options.columns {
              td data-property-name=(column.key()) { (cell(*column, row, &options.assets)) }
            }
          }
        }
      }
    }
  }
}

fn cell(column: Column, row: &ScheduleRow, assets: &Assets) -> Markup {
  match column {
    Column::Raid => html! {
      a href=(assets.raid_page(&row.raid_path)) target="_blank" {
        (icon_text(&assets.raid_icon(&row.raid_icon), &row.raid_name))
      }
    },
    Column::Type => icon_text(&assets.raid_type_icon(row.raid_type), row.raid_type.label()),
    Column::Season => html! { (row.season_display) },
    Column::Terrain => html! { (row.terrain) },
    Column::Date => html! { (row.date_range) },
    Column::Start => html! { (row.start_formatted) },
    Column::End => html! { (row.end_formatted) },
    Column::Target => target(&row.target),
    Column::Status => html! {
      @match &row.target {
        TargetCell::Scheduled { status, .. } => { (status.label()) }
        TargetCell::SameRegion => {}
        TargetCell::Unknown => { "Unknown" }
      }
    },
    Column::Resources => html! {
      ul {
        @for link in &row.resources {
          li { a href=(link.url) target="_blank" style="display: block" { (link.label) } }
        }
      }
    },
  }
}

fn target(cell: &TargetCell) -> Markup {
  match cell {
    TargetCell::SameRegion => html! { "Yes" },
    TargetCell::Scheduled { days, date, .. } => html! {
      div class="glb-raid-info" coming-in=(days) {
        div { "In " (days) " days" }
        div { (date) }
      }
    },
    TargetCell::Unknown => html! { span class="glb-raid-unknown" { "Unknown" } },
  }
}

fn icon_text(icon_url: &str, text: &str) -> Markup {
  html! {
    div class="icon-text-container" {
      img class="icon" src=(icon_url) alt="...";
      span { (text) }
    }
  }
}
