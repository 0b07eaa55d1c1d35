//! The [`QueryField`] capability shared by every per-class field enum, and the
//! [`DataClass`] binding of a class name to its fields and record shape.

use serde::de::DeserializeOwned;

/// A column of a remote data class.
///
/// Implementors are plain enums whose variants map to the exact column
/// identifier the service declares. Programmatic names may differ from wire
/// names (`GpField::RaOfAscNode` is sent as `RA_OF_ASC_NODE`); wire names are
/// unique within one field set.
pub trait QueryField: Copy {
    /// The uppercase snake-case column name sent to and returned by the service.
    fn wire_name(&self) -> &'static str;
}

/// A remote data class: its name in the URL grammar, the columns it can be
/// filtered and sorted on, and the record each result row decodes into.
pub trait DataClass {
    /// Class name as it appears after `/class/`.
    const NAME: &'static str;
    type Field: QueryField;
    type Record: DeserializeOwned;
}
