//! Satellite catalog (`satcat`).

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::query::{DataClass, QueryField};
use crate::Error;

use super::de;

/// Columns of the `satcat` class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SatCatField {
    Intldes,
    NoradCatId,
    ObjectType,
    SatName,
    Country,
    Launch,
    Site,
    Decay,
    Period,
    Inclination,
    Apogee,
    Perigee,
    Comment,
    CommentCode,
    RcsValue,
    RcsSize,
    File,
    LaunchYear,
    LaunchNum,
    LaunchPiece,
    Current,
    ObjectName,
    ObjectId,
    ObjectNumber,
}

impl SatCatField {
    pub const ALL: &'static [SatCatField] = &[
        SatCatField::Intldes,
        SatCatField::NoradCatId,
        SatCatField::ObjectType,
        SatCatField::SatName,
        SatCatField::Country,
        SatCatField::Launch,
        SatCatField::Site,
        SatCatField::Decay,
        SatCatField::Period,
        SatCatField::Inclination,
        SatCatField::Apogee,
        SatCatField::Perigee,
        SatCatField::Comment,
        SatCatField::CommentCode,
        SatCatField::RcsValue,
        SatCatField::RcsSize,
        SatCatField::File,
        SatCatField::LaunchYear,
        SatCatField::LaunchNum,
        SatCatField::LaunchPiece,
        SatCatField::Current,
        SatCatField::ObjectName,
        SatCatField::ObjectId,
        SatCatField::ObjectNumber,
    ];
}

impl QueryField for SatCatField {
    fn wire_name(&self) -> &'static str {
        match self {
            SatCatField::Intldes => "INTLDES",
            SatCatField::NoradCatId => "NORAD_CAT_ID",
            SatCatField::ObjectType => "OBJECT_TYPE",
            SatCatField::SatName => "SATNAME",
            SatCatField::Country => "COUNTRY",
            SatCatField::Launch => "LAUNCH",
            SatCatField::Site => "SITE",
            SatCatField::Decay => "DECAY",
            SatCatField::Period => "PERIOD",
            SatCatField::Inclination => "INCLINATION",
            SatCatField::Apogee => "APOGEE",
            SatCatField::Perigee => "PERIGEE",
            SatCatField::Comment => "COMMENT",
            SatCatField::CommentCode => "COMMENTCODE",
            SatCatField::RcsValue => "RCSVALUE",
            SatCatField::RcsSize => "RCS_SIZE",
            SatCatField::File => "FILE",
            SatCatField::LaunchYear => "LAUNCH_YEAR",
            SatCatField::LaunchNum => "LAUNCH_NUM",
            SatCatField::LaunchPiece => "LAUNCH_PIECE",
            SatCatField::Current => "CURRENT",
            SatCatField::ObjectName => "OBJECT_NAME",
            SatCatField::ObjectId => "OBJECT_ID",
            SatCatField::ObjectNumber => "OBJECT_NUMBER",
        }
    }
}

impl FromStr for SatCatField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::field_by_wire_name(SatCatField::ALL, s, SatCat::NAME)
    }
}

/// One `satcat` row.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SatCat {
    /// International designator, e.g. `1998-067A`.
    #[serde(rename = "INTLDES", default, deserialize_with = "de::opt_string")]
    pub intldes: Option<String>,

    #[serde(rename = "NORAD_CAT_ID", default, deserialize_with = "de::opt_i64")]
    pub norad_cat_id: Option<i64>,

    #[serde(rename = "OBJECT_TYPE", default, deserialize_with = "de::opt_string")]
    pub object_type: Option<String>,

    #[serde(rename = "SATNAME", default, deserialize_with = "de::opt_string")]
    pub sat_name: Option<String>,

    /// Owner/operator country code.
    #[serde(rename = "COUNTRY", default, deserialize_with = "de::opt_string")]
    pub country: Option<String>,

    #[serde(rename = "LAUNCH", default, deserialize_with = "de::opt_date")]
    pub launch: Option<NaiveDate>,

    #[serde(rename = "SITE", default, deserialize_with = "de::opt_string")]
    pub site: Option<String>,

    /// Decay date; absent while the object is on orbit.
    #[serde(rename = "DECAY", default, deserialize_with = "de::opt_date")]
    pub decay: Option<NaiveDate>,

    /// Minutes.
    #[serde(rename = "PERIOD", default, deserialize_with = "de::opt_f64")]
    pub period: Option<f64>,

    #[serde(rename = "INCLINATION", default, deserialize_with = "de::opt_f64")]
    pub inclination: Option<f64>,

    /// Kilometres.
    #[serde(rename = "APOGEE", default, deserialize_with = "de::opt_f64")]
    pub apogee: Option<f64>,

    /// Kilometres.
    #[serde(rename = "PERIGEE", default, deserialize_with = "de::opt_f64")]
    pub perigee: Option<f64>,

    #[serde(rename = "COMMENT", default, deserialize_with = "de::opt_string")]
    pub comment: Option<String>,

    #[serde(rename = "COMMENTCODE", default, deserialize_with = "de::opt_i64")]
    pub comment_code: Option<i64>,

    #[serde(rename = "RCSVALUE", default, deserialize_with = "de::opt_f64")]
    pub rcs_value: Option<f64>,

    #[serde(rename = "RCS_SIZE", default, deserialize_with = "de::opt_string")]
    pub rcs_size: Option<String>,

    #[serde(rename = "FILE", default, deserialize_with = "de::opt_i64")]
    pub file: Option<i64>,

    #[serde(rename = "LAUNCH_YEAR", default, deserialize_with = "de::opt_i64")]
    pub launch_year: Option<i64>,

    #[serde(rename = "LAUNCH_NUM", default, deserialize_with = "de::opt_i64")]
    pub launch_num: Option<i64>,

    #[serde(rename = "LAUNCH_PIECE", default, deserialize_with = "de::opt_string")]
    pub launch_piece: Option<String>,

    /// `Y` for the current catalog entry of an object.
    #[serde(rename = "CURRENT", default, deserialize_with = "de::opt_string")]
    pub current: Option<String>,

    #[serde(rename = "OBJECT_NAME", default, deserialize_with = "de::opt_string")]
    pub object_name: Option<String>,

    #[serde(rename = "OBJECT_ID", default, deserialize_with = "de::opt_string")]
    pub object_id: Option<String>,

    #[serde(rename = "OBJECT_NUMBER", default, deserialize_with = "de::opt_i64")]
    pub object_number: Option<i64>,
}

impl SatCat {
    pub fn is_decayed(&self) -> bool {
        self.decay.is_some()
    }
}

impl DataClass for SatCat {
    const NAME: &'static str = "satcat";
    type Field = SatCatField;
    type Record = SatCat;
}
