//! Catalog of supported data classes: field enums and record shapes.

mod de;

mod boxscore;
pub use self::boxscore::{Boxscore, BoxscoreField};

mod decay;
pub use self::decay::{Decay, DecayField};

mod gp;
pub use self::gp::{Gp, GpField};

mod satcat;
pub use self::satcat::{SatCat, SatCatField};

use crate::{query::QueryField, Error};

/// Looks up a field by its wire name, ignoring ASCII case.
fn field_by_wire_name<F: QueryField>(all: &[F], name: &str, class: &str) -> Result<F, Error> {
    all.iter()
        .copied()
        .find(|field| field.wire_name().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| Error::invalid(format!("'{}' is not a column of {}", name, class)))
}
