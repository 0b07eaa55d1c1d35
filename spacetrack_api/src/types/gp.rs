//! General perturbations (`gp`): the newest orbital element set per object,
//! in OMM keywords plus the legacy three-line element text.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{DataClass, QueryField};
use crate::Error;

use super::de;

/// Columns of the `gp` class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GpField {
    CcsdsOmmVers,
    Comment,
    CreationDate,
    Originator,
    ObjectName,
    ObjectId,
    CenterName,
    RefFrame,
    TimeSystem,
    MeanElementTheory,
    Epoch,
    MeanMotion,
    Eccentricity,
    Inclination,
    /// Right ascension of the ascending node, degrees.
    RaOfAscNode,
    ArgOfPericenter,
    MeanAnomaly,
    EphemerisType,
    ClassificationType,
    NoradCatId,
    ElementSetNo,
    RevAtEpoch,
    Bstar,
    MeanMotionDot,
    MeanMotionDdot,
    SemimajorAxis,
    Period,
    Apoapsis,
    Periapsis,
    ObjectType,
    RcsSize,
    CountryCode,
    LaunchDate,
    Site,
    DecayDate,
    File,
    GpId,
    TleLine0,
    TleLine1,
    TleLine2,
}

impl GpField {
    pub const ALL: &'static [GpField] = &[
        GpField::CcsdsOmmVers,
        GpField::Comment,
        GpField::CreationDate,
        GpField::Originator,
        GpField::ObjectName,
        GpField::ObjectId,
        GpField::CenterName,
        GpField::RefFrame,
        GpField::TimeSystem,
        GpField::MeanElementTheory,
        GpField::Epoch,
        GpField::MeanMotion,
        GpField::Eccentricity,
        GpField::Inclination,
        GpField::RaOfAscNode,
        GpField::ArgOfPericenter,
        GpField::MeanAnomaly,
        GpField::EphemerisType,
        GpField::ClassificationType,
        GpField::NoradCatId,
        GpField::ElementSetNo,
        GpField::RevAtEpoch,
        GpField::Bstar,
        GpField::MeanMotionDot,
        GpField::MeanMotionDdot,
        GpField::SemimajorAxis,
        GpField::Period,
        GpField::Apoapsis,
        GpField::Periapsis,
        GpField::ObjectType,
        GpField::RcsSize,
        GpField::CountryCode,
        GpField::LaunchDate,
        GpField::Site,
        GpField::DecayDate,
        GpField::File,
        GpField::GpId,
        GpField::TleLine0,
        GpField::TleLine1,
        GpField::TleLine2,
    ];
}

impl QueryField for GpField {
    fn wire_name(&self) -> &'static str {
        match self {
            GpField::CcsdsOmmVers => "CCSDS_OMM_VERS",
            GpField::Comment => "COMMENT",
            GpField::CreationDate => "CREATION_DATE",
            GpField::Originator => "ORIGINATOR",
            GpField::ObjectName => "OBJECT_NAME",
            GpField::ObjectId => "OBJECT_ID",
            GpField::CenterName => "CENTER_NAME",
            GpField::RefFrame => "REF_FRAME",
            GpField::TimeSystem => "TIME_SYSTEM",
            GpField::MeanElementTheory => "MEAN_ELEMENT_THEORY",
            GpField::Epoch => "EPOCH",
            GpField::MeanMotion => "MEAN_MOTION",
            GpField::Eccentricity => "ECCENTRICITY",
            GpField::Inclination => "INCLINATION",
            GpField::RaOfAscNode => "RA_OF_ASC_NODE",
            GpField::ArgOfPericenter => "ARG_OF_PERICENTER",
            GpField::MeanAnomaly => "MEAN_ANOMALY",
            GpField::EphemerisType => "EPHEMERIS_TYPE",
            GpField::ClassificationType => "CLASSIFICATION_TYPE",
            GpField::NoradCatId => "NORAD_CAT_ID",
            GpField::ElementSetNo => "ELEMENT_SET_NO",
            GpField::RevAtEpoch => "REV_AT_EPOCH",
            GpField::Bstar => "BSTAR",
            GpField::MeanMotionDot => "MEAN_MOTION_DOT",
            GpField::MeanMotionDdot => "MEAN_MOTION_DDOT",
            GpField::SemimajorAxis => "SEMIMAJOR_AXIS",
            GpField::Period => "PERIOD",
            GpField::Apoapsis => "APOAPSIS",
            GpField::Periapsis => "PERIAPSIS",
            GpField::ObjectType => "OBJECT_TYPE",
            GpField::RcsSize => "RCS_SIZE",
            GpField::CountryCode => "COUNTRY_CODE",
            GpField::LaunchDate => "LAUNCH_DATE",
            GpField::Site => "SITE",
            GpField::DecayDate => "DECAY_DATE",
            GpField::File => "FILE",
            GpField::GpId => "GP_ID",
            GpField::TleLine0 => "TLE_LINE0",
            GpField::TleLine1 => "TLE_LINE1",
            GpField::TleLine2 => "TLE_LINE2",
        }
    }
}

impl FromStr for GpField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::field_by_wire_name(GpField::ALL, s, Gp::NAME)
    }
}

/// One `gp` row.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Gp {
    #[serde(rename = "CCSDS_OMM_VERS", default, deserialize_with = "de::opt_string")]
    pub ccsds_omm_vers: Option<String>,

    #[serde(rename = "COMMENT", default, deserialize_with = "de::opt_string")]
    pub comment: Option<String>,

    #[serde(rename = "CREATION_DATE", default, deserialize_with = "de::opt_timestamp")]
    pub creation_date: Option<DateTime<Utc>>,

    #[serde(rename = "ORIGINATOR", default, deserialize_with = "de::opt_string")]
    pub originator: Option<String>,

    /// Common name, e.g. `ISS (ZARYA)`.
    #[serde(rename = "OBJECT_NAME", default, deserialize_with = "de::opt_string")]
    pub object_name: Option<String>,

    /// International designator, e.g. `1998-067A`.
    #[serde(rename = "OBJECT_ID", default, deserialize_with = "de::opt_string")]
    pub object_id: Option<String>,

    #[serde(rename = "CENTER_NAME", default, deserialize_with = "de::opt_string")]
    pub center_name: Option<String>,

    #[serde(rename = "REF_FRAME", default, deserialize_with = "de::opt_string")]
    pub ref_frame: Option<String>,

    #[serde(rename = "TIME_SYSTEM", default, deserialize_with = "de::opt_string")]
    pub time_system: Option<String>,

    #[serde(rename = "MEAN_ELEMENT_THEORY", default, deserialize_with = "de::opt_string")]
    pub mean_element_theory: Option<String>,

    /// Epoch of the element set.
    #[serde(rename = "EPOCH", default, deserialize_with = "de::opt_timestamp")]
    pub epoch: Option<DateTime<Utc>>,

    /// Revolutions per day.
    #[serde(rename = "MEAN_MOTION", default, deserialize_with = "de::opt_f64")]
    pub mean_motion: Option<f64>,

    #[serde(rename = "ECCENTRICITY", default, deserialize_with = "de::opt_f64")]
    pub eccentricity: Option<f64>,

    /// Degrees.
    #[serde(rename = "INCLINATION", default, deserialize_with = "de::opt_f64")]
    pub inclination: Option<f64>,

    /// Degrees.
    #[serde(rename = "RA_OF_ASC_NODE", default, deserialize_with = "de::opt_f64")]
    pub ra_of_asc_node: Option<f64>,

    /// Degrees.
    #[serde(rename = "ARG_OF_PERICENTER", default, deserialize_with = "de::opt_f64")]
    pub arg_of_pericenter: Option<f64>,

    /// Degrees.
    #[serde(rename = "MEAN_ANOMALY", default, deserialize_with = "de::opt_f64")]
    pub mean_anomaly: Option<f64>,

    #[serde(rename = "EPHEMERIS_TYPE", default, deserialize_with = "de::opt_i64")]
    pub ephemeris_type: Option<i64>,

    #[serde(rename = "CLASSIFICATION_TYPE", default, deserialize_with = "de::opt_string")]
    pub classification_type: Option<String>,

    /// Satellite catalog number.
    #[serde(rename = "NORAD_CAT_ID", default, deserialize_with = "de::opt_i64")]
    pub norad_cat_id: Option<i64>,

    #[serde(rename = "ELEMENT_SET_NO", default, deserialize_with = "de::opt_i64")]
    pub element_set_no: Option<i64>,

    #[serde(rename = "REV_AT_EPOCH", default, deserialize_with = "de::opt_i64")]
    pub rev_at_epoch: Option<i64>,

    #[serde(rename = "BSTAR", default, deserialize_with = "de::opt_f64")]
    pub bstar: Option<f64>,

    #[serde(rename = "MEAN_MOTION_DOT", default, deserialize_with = "de::opt_f64")]
    pub mean_motion_dot: Option<f64>,

    #[serde(rename = "MEAN_MOTION_DDOT", default, deserialize_with = "de::opt_f64")]
    pub mean_motion_ddot: Option<f64>,

    /// Kilometres.
    #[serde(rename = "SEMIMAJOR_AXIS", default, deserialize_with = "de::opt_f64")]
    pub semimajor_axis: Option<f64>,

    /// Minutes.
    #[serde(rename = "PERIOD", default, deserialize_with = "de::opt_f64")]
    pub period: Option<f64>,

    /// Kilometres above the surface.
    #[serde(rename = "APOAPSIS", default, deserialize_with = "de::opt_f64")]
    pub apoapsis: Option<f64>,

    /// Kilometres above the surface.
    #[serde(rename = "PERIAPSIS", default, deserialize_with = "de::opt_f64")]
    pub periapsis: Option<f64>,

    /// `PAYLOAD`, `ROCKET BODY`, `DEBRIS`, `UNKNOWN`, ...
    #[serde(rename = "OBJECT_TYPE", default, deserialize_with = "de::opt_string")]
    pub object_type: Option<String>,

    #[serde(rename = "RCS_SIZE", default, deserialize_with = "de::opt_string")]
    pub rcs_size: Option<String>,

    #[serde(rename = "COUNTRY_CODE", default, deserialize_with = "de::opt_string")]
    pub country_code: Option<String>,

    #[serde(rename = "LAUNCH_DATE", default, deserialize_with = "de::opt_date")]
    pub launch_date: Option<NaiveDate>,

    #[serde(rename = "SITE", default, deserialize_with = "de::opt_string")]
    pub site: Option<String>,

    #[serde(rename = "DECAY_DATE", default, deserialize_with = "de::opt_date")]
    pub decay_date: Option<NaiveDate>,

    #[serde(rename = "FILE", default, deserialize_with = "de::opt_i64")]
    pub file: Option<i64>,

    #[serde(rename = "GP_ID", default, deserialize_with = "de::opt_i64")]
    pub gp_id: Option<i64>,

    #[serde(rename = "TLE_LINE0", default, deserialize_with = "de::opt_string")]
    pub tle_line0: Option<String>,

    #[serde(rename = "TLE_LINE1", default, deserialize_with = "de::opt_string")]
    pub tle_line1: Option<String>,

    #[serde(rename = "TLE_LINE2", default, deserialize_with = "de::opt_string")]
    pub tle_line2: Option<String>,
}

impl Gp {
    /// The element set as classic three-line text, when the service sent all
    /// three lines.
    pub fn tle(&self) -> Option<String> {
        match (&self.tle_line0, &self.tle_line1, &self.tle_line2) {
            (Some(line0), Some(line1), Some(line2)) => {
                Some(format!("{}\n{}\n{}", line0, line1, line2))
            }
            _ => None,
        }
    }
}

impl DataClass for Gp {
    const NAME: &'static str = "gp";
    type Field = GpField;
    type Record = Gp;
}
