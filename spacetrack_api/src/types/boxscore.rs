//! Per-country object counts (`boxscore`).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::query::{DataClass, QueryField};
use crate::Error;

use super::de;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoxscoreField {
    Country,
    SpadocCd,
    OrbitalTba,
    OrbitalPayloadCount,
    OrbitalRocketBodyCount,
    OrbitalDebrisCount,
    OrbitalTotalCount,
    DecayedPayloadCount,
    DecayedRocketBodyCount,
    DecayedDebrisCount,
    DecayedTotalCount,
    CountryTotal,
}

impl BoxscoreField {
    pub const ALL: &'static [BoxscoreField] = &[
        BoxscoreField::Country,
        BoxscoreField::SpadocCd,
        BoxscoreField::OrbitalTba,
        BoxscoreField::OrbitalPayloadCount,
        BoxscoreField::OrbitalRocketBodyCount,
        BoxscoreField::OrbitalDebrisCount,
        BoxscoreField::OrbitalTotalCount,
        BoxscoreField::DecayedPayloadCount,
        BoxscoreField::DecayedRocketBodyCount,
        BoxscoreField::DecayedDebrisCount,
        BoxscoreField::DecayedTotalCount,
        BoxscoreField::CountryTotal,
    ];
}

impl QueryField for BoxscoreField {
    fn wire_name(&self) -> &'static str {
        match self {
            BoxscoreField::Country => "COUNTRY",
            BoxscoreField::SpadocCd => "SPADOC_CD",
            BoxscoreField::OrbitalTba => "ORBITAL_TBA",
            BoxscoreField::OrbitalPayloadCount => "ORBITAL_PAYLOAD_COUNT",
            BoxscoreField::OrbitalRocketBodyCount => "ORBITAL_ROCKET_BODY_COUNT",
            BoxscoreField::OrbitalDebrisCount => "ORBITAL_DEBRIS_COUNT",
            BoxscoreField::OrbitalTotalCount => "ORBITAL_TOTAL_COUNT",
            BoxscoreField::DecayedPayloadCount => "DECAYED_PAYLOAD_COUNT",
            BoxscoreField::DecayedRocketBodyCount => "DECAYED_ROCKET_BODY_COUNT",
            BoxscoreField::DecayedDebrisCount => "DECAYED_DEBRIS_COUNT",
            BoxscoreField::DecayedTotalCount => "DECAYED_TOTAL_COUNT",
            BoxscoreField::CountryTotal => "COUNTRY_TOTAL",
        }
    }
}

impl FromStr for BoxscoreField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::field_by_wire_name(BoxscoreField::ALL, s, Boxscore::NAME)
    }
}

/// One `boxscore` row.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Boxscore {
    #[serde(rename = "COUNTRY", default, deserialize_with = "de::opt_string")]
    pub country: Option<String>,

    #[serde(rename = "SPADOC_CD", default, deserialize_with = "de::opt_string")]
    pub spadoc_cd: Option<String>,

    #[serde(rename = "ORBITAL_TBA", default, deserialize_with = "de::opt_i64")]
    pub orbital_tba: Option<i64>,

    #[serde(rename = "ORBITAL_PAYLOAD_COUNT", default, deserialize_with = "de::opt_i64")]
    pub orbital_payload_count: Option<i64>,

    #[serde(rename = "ORBITAL_ROCKET_BODY_COUNT", default, deserialize_with = "de::opt_i64")]
    pub orbital_rocket_body_count: Option<i64>,

    #[serde(rename = "ORBITAL_DEBRIS_COUNT", default, deserialize_with = "de::opt_i64")]
    pub orbital_debris_count: Option<i64>,

    #[serde(rename = "ORBITAL_TOTAL_COUNT", default, deserialize_with = "de::opt_i64")]
    pub orbital_total_count: Option<i64>,

    #[serde(rename = "DECAYED_PAYLOAD_COUNT", default, deserialize_with = "de::opt_i64")]
    pub decayed_payload_count: Option<i64>,

    #[serde(rename = "DECAYED_ROCKET_BODY_COUNT", default, deserialize_with = "de::opt_i64")]
    pub decayed_rocket_body_count: Option<i64>,

    #[serde(rename = "DECAYED_DEBRIS_COUNT", default, deserialize_with = "de::opt_i64")]
    pub decayed_debris_count: Option<i64>,

    #[serde(rename = "DECAYED_TOTAL_COUNT", default, deserialize_with = "de::opt_i64")]
    pub decayed_total_count: Option<i64>,

    #[serde(rename = "COUNTRY_TOTAL", default, deserialize_with = "de::opt_i64")]
    pub country_total: Option<i64>,
}

impl DataClass for Boxscore {
    const NAME: &'static str = "boxscore";
    type Field = BoxscoreField;
    type Record = Boxscore;
}
