//! Parsing of `--filter` and `--order-by` expressions into typed query parts.
//!
//! Filter grammar, `FIELD` being a column wire name (case-insensitive):
//!
//! | Expression        | Predicate          |
//! |-------------------|--------------------|
//! | `FIELD=V`         | equal              |
//! | `FIELD!=V`        | not equal          |
//! | `FIELD<V`         | less than          |
//! | `FIELD>V`         | greater than       |
//! | `FIELD~V`         | contains           |
//! | `FIELD^V`         | starts with        |
//! | `FIELD=null`      | is null            |
//! | `FIELD!=null`     | is not null        |
//! | `FIELD=A--B`      | inclusive range    |
//! | `FIELD=A,B,C`     | membership         |
//!
//! Values of the form `now`, `now+D`, or `now-D` are server-relative day
//! offsets; everything else is sent as text.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use spacetrack_api::{Error, Operand, Predicate, QueryField, RelativeTimeOffset, Sort, SortDirection};

const OPERATOR_CHARS: &[char] = &['=', '!', '<', '>', '~', '^'];

pub fn parse_filter<F>(expr: &str) -> Result<Predicate<F>>
where
    F: QueryField + FromStr<Err = Error>,
{
    let op_at = expr
        .find(OPERATOR_CHARS)
        .ok_or_else(|| anyhow!("filter '{}' has no operator", expr))?;
    let field: F = expr[..op_at].parse()?;
    let rest = &expr[op_at..];

    let predicate = if let Some(value) = rest.strip_prefix("!=") {
        if is_null_literal(value) {
            Predicate::is_not_null(field)
        } else {
            Predicate::not_equal(field, parse_operand(value)?)?
        }
    } else if let Some(value) = rest.strip_prefix('=') {
        if is_null_literal(value) {
            Predicate::is_null(field)
        } else if let Some((low, high)) = value.split_once("--") {
            Predicate::range(field, parse_operand(low)?, parse_operand(high)?)?
        } else if value.contains(',') {
            let values = value
                .split(',')
                .map(parse_operand)
                .collect::<Result<Vec<_>>>()?;
            Predicate::in_set(field, values)?
        } else {
            Predicate::equal(field, parse_operand(value)?)?
        }
    } else if let Some(value) = rest.strip_prefix('<') {
        Predicate::less_than(field, parse_operand(value)?)?
    } else if let Some(value) = rest.strip_prefix('>') {
        Predicate::greater_than(field, parse_operand(value)?)?
    } else if let Some(value) = rest.strip_prefix('~') {
        Predicate::contains(field, parse_operand(value)?)?
    } else if let Some(value) = rest.strip_prefix('^') {
        Predicate::starts_with(field, parse_operand(value)?)?
    } else {
        bail!("unknown operator in filter '{}'", expr);
    };
    Ok(predicate)
}

/// `FIELD` or `FIELD:asc|desc`.
pub fn parse_sort<F>(expr: &str) -> Result<Sort<F>>
where
    F: QueryField + FromStr<Err = Error>,
{
    let (name, direction) = match expr.split_once(':') {
        Some((name, direction)) => (name, direction.parse::<SortDirection>()?),
        None => (expr, SortDirection::Asc),
    };
    Ok(Sort::new(name.parse()?, direction))
}

fn is_null_literal(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("null")
}

fn parse_operand(text: &str) -> Result<Operand> {
    let text = text.trim();
    if let Some(offset) = text.strip_prefix("now") {
        if offset.is_empty() {
            return Ok(RelativeTimeOffset::now().into());
        }
        if offset.starts_with('+') || offset.starts_with('-') {
            let days: f64 = offset
                .parse()
                .with_context(|| format!("invalid relative offset '{}'", text))?;
            return Ok(RelativeTimeOffset::days(days)?.into());
        }
    }
    Ok(Operand::Text(text.to_string()))
}
