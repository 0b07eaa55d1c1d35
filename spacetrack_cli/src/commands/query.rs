use std::str::FromStr;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use spacetrack_api::{DataClass, Error, Limit, Query, QueryField};

use super::filter::{parse_filter, parse_sort};
use super::Context;
use crate::output::{print_records, OutputFormat, TableRecord};

#[derive(Args)]
pub struct QueryArgs {
    /// Filter as FIELD<op>VALUE, e.g. NORAD_CAT_ID=25544, EPOCH>now-1, OBJECT_NAME~STARLINK (repeatable)
    #[arg(short, long = "filter")]
    pub filters: Vec<String>,

    /// Sort key as FIELD or FIELD:desc (repeatable, applied in order)
    #[arg(long = "order-by")]
    pub order_by: Vec<String>,

    /// Maximum number of rows to return
    #[arg(long)]
    pub limit: Option<i64>,

    /// Rows to skip before the first returned row
    #[arg(long, requires = "limit")]
    pub offset: Option<i64>,

    /// Server-defined named filter group (repeatable)
    #[arg(long = "favorite")]
    pub favorites: Vec<String>,
}

pub fn build_query<C>(args: &QueryArgs) -> Result<Query<C::Field>>
where
    C: DataClass,
    C::Field: FromStr<Err = Error>,
{
    let mut query = Query::for_class::<C>();

    for expr in &args.filters {
        query = query.with_predicate(parse_filter(expr)?);
    }
    for expr in &args.order_by {
        query = query.with_sort(parse_sort(expr)?);
    }
    if let Some(max_results) = args.limit {
        let limit = match args.offset {
            Some(offset) => Limit::with_offset(max_results, offset)?,
            None => Limit::new(max_results)?,
        };
        query = query.with_limit(limit);
    }
    query = query.with_favorites(&args.favorites)?;

    Ok(query)
}

pub async fn run<C>(args: &QueryArgs, ctx: &Context, format: OutputFormat) -> Result<()>
where
    C: DataClass,
    C::Field: QueryField + FromStr<Err = Error>,
    C::Record: TableRecord + Serialize,
{
    let query = build_query::<C>(args)?;

    if ctx.dry_run {
        println!("{}", query.to_url(&ctx.config.query_base()));
        return Ok(());
    }

    let client = ctx.client()?;
    let records = client.fetch::<C>(&query).await?;

    eprintln!("{} {} rows", records.len(), C::NAME);
    print_records(&records, format);

    Ok(())
}
