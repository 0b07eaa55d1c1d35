mod builder;
pub use self::builder::Query;

mod field;
pub use self::field::{DataClass, QueryField};

mod format;
pub use self::format::{format_date, format_timestamp, parse_timestamp, RelativeTimeOffset};

mod predicate;
pub use self::predicate::{Operand, Operator, Predicate};

mod sort;
pub use self::sort::{Limit, Sort, SortDirection};
