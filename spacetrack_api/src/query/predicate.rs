//! Filter conditions on a single field and their URL segment encoding.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use crate::Error;

use super::field::QueryField;
use super::format::{decimal_text, format_date, format_timestamp, RelativeTimeOffset};

const NULL_VALUE: &str = "null-val";

/// A value a predicate compares against, before it is normalized to text.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Timestamp(DateTime<Utc>),
    Date(NaiveDate),
    /// Server-evaluated `now±D`. Not accepted in membership sets.
    Relative(RelativeTimeOffset),
}

impl Operand {
    fn encode(&self) -> Result<String, Error> {
        match self {
            Operand::Text(text) => {
                if text.trim().is_empty() {
                    return Err(Error::invalid("text operand must not be empty"));
                }
                if text.contains('/') {
                    return Err(Error::invalid(format!(
                        "text operand must not contain '/': '{}'",
                        text
                    )));
                }
                Ok(text.clone())
            }
            Operand::Integer(value) => Ok(value.to_string()),
            Operand::Decimal(value) => {
                if !value.is_finite() {
                    return Err(Error::invalid(format!(
                        "decimal operand must be finite, got {}",
                        value
                    )));
                }
                Ok(decimal_text(*value))
            }
            Operand::Timestamp(instant) => Ok(format_timestamp(instant)),
            Operand::Date(date) => Ok(format_date(date)),
            Operand::Relative(offset) => Ok(offset.to_string()),
        }
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}
impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}
impl From<&String> for Operand {
    fn from(value: &String) -> Self {
        Operand::Text(value.clone())
    }
}
impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}
impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Integer(value.into())
    }
}
impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Integer(value.into())
    }
}
impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Decimal(value)
    }
}
impl From<DateTime<Utc>> for Operand {
    fn from(value: DateTime<Utc>) -> Self {
        Operand::Timestamp(value)
    }
}
impl From<NaiveDate> for Operand {
    fn from(value: NaiveDate) -> Self {
        Operand::Date(value)
    }
}
impl From<RelativeTimeOffset> for Operand {
    fn from(value: RelativeTimeOffset) -> Self {
        Operand::Relative(value)
    }
}

/// Comparison operator of a [`Predicate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    /// Substring match.
    Contains,
    /// Prefix match.
    StartsWith,
    IsNull,
    IsNotNull,
    /// Inclusive `low--high` range.
    Range,
    /// Membership in a set of values.
    In,
}

/// A single filter condition on one field, with its operands already
/// normalized to the service's text encoding.
///
/// Predicates are immutable once built and render the same segment every
/// time, so one value can be shared between queries.
#[derive(Clone, Debug, PartialEq)]
pub struct Predicate<F: QueryField> {
    field: F,
    operator: Operator,
    operands: Vec<String>,
}

impl<F: QueryField> Predicate<F> {
    fn single(field: F, operator: Operator, value: Operand) -> Result<Self, Error> {
        Ok(Self {
            field,
            operator,
            operands: vec![value.encode()?],
        })
    }

    /// `FIELD/value`
    pub fn equal(field: F, value: impl Into<Operand>) -> Result<Self, Error> {
        Self::single(field, Operator::Equal, value.into())
    }

    /// `FIELD/<>value`
    pub fn not_equal(field: F, value: impl Into<Operand>) -> Result<Self, Error> {
        Self::single(field, Operator::NotEqual, value.into())
    }

    /// `FIELD/<value`
    pub fn less_than(field: F, value: impl Into<Operand>) -> Result<Self, Error> {
        Self::single(field, Operator::LessThan, value.into())
    }

    /// `FIELD/>value`
    pub fn greater_than(field: F, value: impl Into<Operand>) -> Result<Self, Error> {
        Self::single(field, Operator::GreaterThan, value.into())
    }

    /// `FIELD/~~value`
    pub fn contains(field: F, value: impl Into<Operand>) -> Result<Self, Error> {
        Self::single(field, Operator::Contains, value.into())
    }

    /// `FIELD/^value`
    pub fn starts_with(field: F, value: impl Into<Operand>) -> Result<Self, Error> {
        Self::single(field, Operator::StartsWith, value.into())
    }

    /// `FIELD/null-val`
    pub fn is_null(field: F) -> Self {
        Self {
            field,
            operator: Operator::IsNull,
            operands: Vec::new(),
        }
    }

    /// `FIELD/<>null-val`
    pub fn is_not_null(field: F) -> Self {
        Self {
            field,
            operator: Operator::IsNotNull,
            operands: Vec::new(),
        }
    }

    /// `FIELD/low--high`, both bounds inclusive. Bounds may mix absolute
    /// timestamps and relative offsets.
    pub fn range(
        field: F,
        low: impl Into<Operand>,
        high: impl Into<Operand>,
    ) -> Result<Self, Error> {
        let operands = vec![low.into().encode()?, high.into().encode()?];
        if let Some(bound) = operands.iter().find(|bound| bound.contains("--")) {
            return Err(Error::invalid(format!(
                "range bound for {} must not contain '--': '{}'",
                field.wire_name(),
                bound
            )));
        }
        Ok(Self {
            field,
            operator: Operator::Range,
            operands,
        })
    }

    /// `FIELD/v1,v2,...` with duplicate values dropped. Only text, numeric,
    /// timestamp, and date operands are accepted.
    pub fn in_set<I, V>(field: F, values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = V>,
        V: Into<Operand>,
    {
        let mut operands: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if let Operand::Relative(offset) = value {
                return Err(Error::invalid(format!(
                    "relative offset {} is not allowed in a membership set for {}",
                    offset,
                    field.wire_name()
                )));
            }
            let encoded = value.encode()?;
            if encoded.contains(',') {
                return Err(Error::invalid(format!(
                    "membership value for {} must not contain ',': '{}'",
                    field.wire_name(),
                    encoded
                )));
            }
            if !operands.contains(&encoded) {
                operands.push(encoded);
            }
        }
        if operands.is_empty() {
            return Err(Error::invalid(format!(
                "membership set for {} must contain at least one value",
                field.wire_name()
            )));
        }
        Ok(Self {
            field,
            operator: Operator::In,
            operands,
        })
    }

    pub fn field(&self) -> F {
        self.field
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Encoded operand texts, in the order they are rendered.
    pub fn operands(&self) -> &[String] {
        &self.operands
    }

    /// Renders the URL segment for this condition, without a leading `/`.
    pub fn render_parameter(&self) -> String {
        let name = self.field.wire_name();
        match self.operator {
            Operator::Equal => format!("{}/{}", name, self.operands[0]),
            Operator::NotEqual => format!("{}/<>{}", name, self.operands[0]),
            Operator::LessThan => format!("{}/<{}", name, self.operands[0]),
            Operator::GreaterThan => format!("{}/>{}", name, self.operands[0]),
            Operator::Contains => format!("{}/~~{}", name, self.operands[0]),
            Operator::StartsWith => format!("{}/^{}", name, self.operands[0]),
            Operator::IsNull => format!("{}/{}", name, NULL_VALUE),
            Operator::IsNotNull => format!("{}/<>{}", name, NULL_VALUE),
            Operator::Range => format!("{}/{}--{}", name, self.operands[0], self.operands[1]),
            Operator::In => format!("{}/{}", name, self.operands.join(",")),
        }
    }
}

impl<F: QueryField> fmt::Display for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_parameter())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;
    use crate::query::field::tests::TestField;

    #[test]
    fn comparison_operators() {
        let f = TestField::NoradCatId;
        assert_eq!(Predicate::equal(f, 25544).unwrap().render_parameter(), "NORAD_CAT_ID/25544");
        assert_eq!(
            Predicate::not_equal(f, 25544).unwrap().render_parameter(),
            "NORAD_CAT_ID/<>25544"
        );
        assert_eq!(
            Predicate::less_than(f, 100).unwrap().render_parameter(),
            "NORAD_CAT_ID/<100"
        );
        assert_eq!(
            Predicate::greater_than(f, 40000).unwrap().render_parameter(),
            "NORAD_CAT_ID/>40000"
        );
    }

    #[test]
    fn text_match_operators() {
        let f = TestField::ObjectName;
        assert_eq!(
            Predicate::contains(f, "STARLINK").unwrap().render_parameter(),
            "OBJECT_NAME/~~STARLINK"
        );
        assert_eq!(
            Predicate::starts_with(f, "ISS").unwrap().render_parameter(),
            "OBJECT_NAME/^ISS"
        );
    }

    #[test]
    fn null_operators() {
        assert_eq!(
            Predicate::is_null(TestField::Epoch).render_parameter(),
            "EPOCH/null-val"
        );
        assert_eq!(
            Predicate::is_not_null(TestField::Epoch).render_parameter(),
            "EPOCH/<>null-val"
        );
    }

    #[test]
    fn decimal_and_timestamp_operands() {
        assert_eq!(
            Predicate::greater_than(TestField::RightAscOfNodeDegrees, 12.5)
                .unwrap()
                .render_parameter(),
            "RA_OF_ASC_NODE/>12.5"
        );
        let epoch = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            Predicate::less_than(TestField::Epoch, epoch)
                .unwrap()
                .render_parameter(),
            "EPOCH/<2024-01-02 03:04:05.000"
        );
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(
            Predicate::equal(TestField::Epoch, date).unwrap().render_parameter(),
            "EPOCH/2024-01-02"
        );
    }

    #[test]
    fn relative_offset_operands() {
        let ahead = RelativeTimeOffset::days(1.0).unwrap();
        let behind = RelativeTimeOffset::days(-1.0).unwrap();
        assert_eq!(
            Predicate::greater_than(TestField::Epoch, behind)
                .unwrap()
                .render_parameter(),
            "EPOCH/>now-1.0"
        );
        assert_eq!(
            Predicate::less_than(TestField::Epoch, ahead)
                .unwrap()
                .render_parameter(),
            "EPOCH/<now+1.0"
        );
    }

    #[test]
    fn range_mixes_absolute_and_relative_bounds() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let now = RelativeTimeOffset::now();
        assert_eq!(
            Predicate::range(TestField::Epoch, start, now)
                .unwrap()
                .render_parameter(),
            "EPOCH/2024-01-01 00:00:00.000--now+0.0"
        );
        let week_ago = RelativeTimeOffset::days(-7.0).unwrap();
        let tomorrow = RelativeTimeOffset::days(1.0).unwrap();
        assert_eq!(
            Predicate::range(TestField::Epoch, week_ago, tomorrow)
                .unwrap()
                .render_parameter(),
            "EPOCH/now-7.0--now+1.0"
        );
        assert_eq!(
            Predicate::range(TestField::NoradCatId, 1, 100)
                .unwrap()
                .render_parameter(),
            "NORAD_CAT_ID/1--100"
        );
    }

    #[test]
    fn membership_drops_duplicates() {
        let predicate =
            Predicate::in_set(TestField::ObjectName, ["ABC", "DEF", "ABC", "DEF"]).unwrap();
        assert_eq!(predicate.operands().len(), 2);

        let rendered = predicate.render_parameter();
        let values = rendered.strip_prefix("OBJECT_NAME/").unwrap();
        let mut values: Vec<&str> = values.split(',').collect();
        values.sort();
        assert_eq!(values, vec!["ABC", "DEF"]);
    }

    #[test]
    fn membership_accepts_mixed_value_kinds() {
        let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let predicate = Predicate::in_set(
            TestField::Epoch,
            vec![Operand::from(epoch), Operand::from(5), Operand::from("x")],
        )
        .unwrap();
        assert_eq!(predicate.operator(), Operator::In);
        assert_eq!(predicate.operands().len(), 3);
    }

    #[test]
    fn membership_rejects_relative_offsets_and_empty_sets() {
        let result = Predicate::in_set(
            TestField::Epoch,
            vec![Operand::from(RelativeTimeOffset::now())],
        );
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        let result = Predicate::in_set(TestField::Epoch, Vec::<i64>::new());
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn absent_operands_are_rejected() {
        assert!(matches!(
            Predicate::equal(TestField::ObjectName, ""),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Predicate::range(TestField::ObjectName, "A", "  "),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Predicate::greater_than(TestField::RightAscOfNodeDegrees, f64::NAN),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn operands_that_would_split_the_path_are_rejected() {
        assert!(matches!(
            Predicate::equal(TestField::ObjectName, "A/B"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Predicate::in_set(TestField::ObjectName, ["A,B", "C"]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Predicate::range(TestField::ObjectName, "A--B", "C"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Predicate::range(TestField::ObjectName, "A", "B--C"),
            Err(Error::InvalidArgument(_))
        ));
        // A single comma is fine outside membership sets.
        assert_eq!(
            Predicate::contains(TestField::ObjectName, "A,B")
                .unwrap()
                .render_parameter(),
            "OBJECT_NAME/~~A,B"
        );
        assert_eq!(
            Predicate::range(TestField::NoradCatId, -5, 5)
                .unwrap()
                .render_parameter(),
            "NORAD_CAT_ID/-5--5"
        );
    }

    #[test]
    fn predicates_are_reusable() {
        let predicate = Predicate::equal(TestField::NoradCatId, 25544).unwrap();
        assert_eq!(predicate.render_parameter(), predicate.render_parameter());
        assert_eq!(predicate.to_string(), "NORAD_CAT_ID/25544");
        assert_eq!(predicate.field(), TestField::NoradCatId);
    }
}
