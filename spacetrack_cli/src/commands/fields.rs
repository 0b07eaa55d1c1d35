use anyhow::Result;
use clap::{Args, ValueEnum};
use spacetrack_api::types::{BoxscoreField, DecayField, GpField, SatCatField};
use spacetrack_api::QueryField;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ClassName {
    Gp,
    Satcat,
    Decay,
    Boxscore,
}

#[derive(Args)]
pub struct FieldsArgs {
    /// Data class to list the filterable columns of
    #[arg(value_enum)]
    pub class: ClassName,
}

pub fn run(args: &FieldsArgs) -> Result<()> {
    for name in wire_names(args.class) {
        println!("{}", name);
    }
    Ok(())
}

fn wire_names(class: ClassName) -> Vec<&'static str> {
    fn names<F: QueryField>(all: &[F]) -> Vec<&'static str> {
        all.iter().map(QueryField::wire_name).collect()
    }
    match class {
        ClassName::Gp => names(GpField::ALL),
        ClassName::Satcat => names(SatCatField::ALL),
        ClassName::Decay => names(DecayField::ALL),
        ClassName::Boxscore => names(BoxscoreField::ALL),
    }
}
