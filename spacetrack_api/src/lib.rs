//! Typed client for the Space-Track query API.
//!
//! Queries are built from [`Predicate`]s, [`Sort`] keys and a [`Limit`] over
//! a data class's [`QueryField`]s, rendered to the service's path grammar,
//! and executed by [`Client`] in a single authenticate-and-query POST.

mod client;
mod decode;
mod errors;
mod query;
pub mod transport;
pub mod types;
pub use self::client::{Client, ClientConfig, Credentials};
pub use self::decode::{decode_records, repair_json};
pub use self::errors::Error;
pub use self::query::{
    format_date, format_timestamp, parse_timestamp, DataClass, Limit, Operand, Operator,
    Predicate, Query, QueryField, RelativeTimeOffset, Sort, SortDirection,
};
