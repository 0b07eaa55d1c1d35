//! Reentry messages (`decay`).

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{DataClass, QueryField};
use crate::Error;

use super::de;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecayField {
    NoradCatId,
    ObjectNumber,
    ObjectName,
    Intldes,
    ObjectId,
    Rcs,
    RcsSize,
    Country,
    MsgEpoch,
    DecayEpoch,
    Source,
    MsgType,
    Precedence,
}

impl DecayField {
    pub const ALL: &'static [DecayField] = &[
        DecayField::NoradCatId,
        DecayField::ObjectNumber,
        DecayField::ObjectName,
        DecayField::Intldes,
        DecayField::ObjectId,
        DecayField::Rcs,
        DecayField::RcsSize,
        DecayField::Country,
        DecayField::MsgEpoch,
        DecayField::DecayEpoch,
        DecayField::Source,
        DecayField::MsgType,
        DecayField::Precedence,
    ];
}

impl QueryField for DecayField {
    fn wire_name(&self) -> &'static str {
        match self {
            DecayField::NoradCatId => "NORAD_CAT_ID",
            DecayField::ObjectNumber => "OBJECT_NUMBER",
            DecayField::ObjectName => "OBJECT_NAME",
            DecayField::Intldes => "INTLDES",
            DecayField::ObjectId => "OBJECT_ID",
            DecayField::Rcs => "RCS",
            DecayField::RcsSize => "RCS_SIZE",
            DecayField::Country => "COUNTRY",
            DecayField::MsgEpoch => "MSG_EPOCH",
            DecayField::DecayEpoch => "DECAY_EPOCH",
            DecayField::Source => "SOURCE",
            DecayField::MsgType => "MSG_TYPE",
            DecayField::Precedence => "PRECEDENCE",
        }
    }
}

impl FromStr for DecayField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::field_by_wire_name(DecayField::ALL, s, Decay::NAME)
    }
}

/// One `decay` row: a predicted or observed reentry.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Decay {
    #[serde(rename = "NORAD_CAT_ID", default, deserialize_with = "de::opt_i64")]
    pub norad_cat_id: Option<i64>,

    #[serde(rename = "OBJECT_NUMBER", default, deserialize_with = "de::opt_i64")]
    pub object_number: Option<i64>,

    #[serde(rename = "OBJECT_NAME", default, deserialize_with = "de::opt_string")]
    pub object_name: Option<String>,

    #[serde(rename = "INTLDES", default, deserialize_with = "de::opt_string")]
    pub intldes: Option<String>,

    #[serde(rename = "OBJECT_ID", default, deserialize_with = "de::opt_string")]
    pub object_id: Option<String>,

    #[serde(rename = "RCS", default, deserialize_with = "de::opt_i64")]
    pub rcs: Option<i64>,

    #[serde(rename = "RCS_SIZE", default, deserialize_with = "de::opt_string")]
    pub rcs_size: Option<String>,

    #[serde(rename = "COUNTRY", default, deserialize_with = "de::opt_string")]
    pub country: Option<String>,

    #[serde(rename = "MSG_EPOCH", default, deserialize_with = "de::opt_timestamp")]
    pub msg_epoch: Option<DateTime<Utc>>,

    #[serde(rename = "DECAY_EPOCH", default, deserialize_with = "de::opt_timestamp")]
    pub decay_epoch: Option<DateTime<Utc>>,

    /// Originating message series, e.g. `TIP message` or `60day_decay_rpt`.
    #[serde(rename = "SOURCE", default, deserialize_with = "de::opt_string")]
    pub source: Option<String>,

    /// `Prediction` or `Historical`.
    #[serde(rename = "MSG_TYPE", default, deserialize_with = "de::opt_string")]
    pub msg_type: Option<String>,

    #[serde(rename = "PRECEDENCE", default, deserialize_with = "de::opt_i64")]
    pub precedence: Option<i64>,
}

impl DataClass for Decay {
    const NAME: &'static str = "decay";
    type Field = DecayField;
    type Record = Decay;
}
