use serde::Serialize;
use spacetrack_api::types::{Boxscore, Decay, Gp, SatCat};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

/// A record that has a condensed tabular form.
pub trait TableRecord {
    type Row: Tabled;

    fn to_row(&self) -> Self::Row;
}

#[derive(Tabled)]
pub struct GpRow {
    #[tabled(rename = "NORAD")]
    norad_cat_id: String,
    #[tabled(rename = "Name")]
    object_name: String,
    #[tabled(rename = "Epoch")]
    epoch: String,
    #[tabled(rename = "Incl")]
    inclination: String,
    #[tabled(rename = "Ecc")]
    eccentricity: String,
    #[tabled(rename = "Rev/day")]
    mean_motion: String,
    #[tabled(rename = "Perigee km")]
    periapsis: String,
    #[tabled(rename = "Apogee km")]
    apoapsis: String,
}

#[derive(Tabled)]
pub struct SatCatRow {
    #[tabled(rename = "NORAD")]
    norad_cat_id: String,
    #[tabled(rename = "Name")]
    sat_name: String,
    #[tabled(rename = "Intl Des")]
    intldes: String,
    #[tabled(rename = "Type")]
    object_type: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Launch")]
    launch: String,
    #[tabled(rename = "Decay")]
    decay: String,
}

#[derive(Tabled)]
pub struct DecayRow {
    #[tabled(rename = "NORAD")]
    norad_cat_id: String,
    #[tabled(rename = "Name")]
    object_name: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Message Epoch")]
    msg_epoch: String,
    #[tabled(rename = "Decay Epoch")]
    decay_epoch: String,
    #[tabled(rename = "Type")]
    msg_type: String,
}

#[derive(Tabled)]
pub struct BoxscoreRow {
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Payloads")]
    orbital_payload_count: String,
    #[tabled(rename = "Rocket Bodies")]
    orbital_rocket_body_count: String,
    #[tabled(rename = "Debris")]
    orbital_debris_count: String,
    #[tabled(rename = "In Orbit")]
    orbital_total_count: String,
    #[tabled(rename = "Decayed")]
    decayed_total_count: String,
    #[tabled(rename = "Total")]
    country_total: String,
}

impl TableRecord for Gp {
    type Row = GpRow;

    fn to_row(&self) -> GpRow {
        GpRow {
            norad_cat_id: cell(self.norad_cat_id),
            object_name: cell(self.object_name.as_deref()),
            epoch: cell(self.epoch.map(|e| e.format("%Y-%m-%d %H:%M:%S"))),
            inclination: cell(self.inclination),
            eccentricity: cell(self.eccentricity),
            mean_motion: cell(self.mean_motion),
            periapsis: cell(self.periapsis),
            apoapsis: cell(self.apoapsis),
        }
    }
}

impl TableRecord for SatCat {
    type Row = SatCatRow;

    fn to_row(&self) -> SatCatRow {
        SatCatRow {
            norad_cat_id: cell(self.norad_cat_id),
            sat_name: cell(self.sat_name.as_deref()),
            intldes: cell(self.intldes.as_deref()),
            object_type: cell(self.object_type.as_deref()),
            country: cell(self.country.as_deref()),
            launch: cell(self.launch),
            decay: cell(self.decay),
        }
    }
}

impl TableRecord for Decay {
    type Row = DecayRow;

    fn to_row(&self) -> DecayRow {
        DecayRow {
            norad_cat_id: cell(self.norad_cat_id),
            object_name: cell(self.object_name.as_deref()),
            country: cell(self.country.as_deref()),
            msg_epoch: cell(self.msg_epoch.map(|e| e.format("%Y-%m-%d %H:%M"))),
            decay_epoch: cell(self.decay_epoch.map(|e| e.format("%Y-%m-%d %H:%M"))),
            msg_type: cell(self.msg_type.as_deref()),
        }
    }
}

impl TableRecord for Boxscore {
    type Row = BoxscoreRow;

    fn to_row(&self) -> BoxscoreRow {
        BoxscoreRow {
            country: cell(self.country.as_deref()),
            orbital_payload_count: cell(self.orbital_payload_count),
            orbital_rocket_body_count: cell(self.orbital_rocket_body_count),
            orbital_debris_count: cell(self.orbital_debris_count),
            orbital_total_count: cell(self.orbital_total_count),
            decayed_total_count: cell(self.decayed_total_count),
            country_total: cell(self.country_total),
        }
    }
}

// Absent columns render as an empty cell.
fn cell<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn build_table<R: TableRecord>(records: &[R]) -> Table {
    Table::new(records.iter().map(R::to_row))
}

pub fn print_records<R: TableRecord + Serialize>(records: &[R], format: OutputFormat) {
    match format {
        OutputFormat::Table => print_table(records),
        OutputFormat::Json => print_json(&records),
        OutputFormat::Markdown => print_markdown(records),
    }
}

pub fn print_table<R: TableRecord>(records: &[R]) {
    println!("{}", build_table(records));
}

pub fn print_markdown<R: TableRecord>(records: &[R]) {
    let mut table = build_table(records);
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
