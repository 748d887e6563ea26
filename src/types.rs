use crate::utils::load_model;
use clap::Args;
use itertools::Itertools;
use jsonskel_skeleton::{TypeRegistry, TypeResolver};
use std::path::PathBuf;
use std::process::exit;

#[derive(Args)]
pub struct TypesArgs {
    #[arg(help = "Type model (JSON)")]
    model: PathBuf,
}

pub(crate) fn types(args: TypesArgs) {
    match load_model(&args.model) {
        Ok(registry) => println!("{}", describe(&registry)),
        Err(e) => {
            eprintln!("{e}");
            exit(1)
        }
    }
}

fn describe(registry: &TypeRegistry) -> String {
    registry
        .iter()
        .map(|composite| {
            let fields = registry.fields_of(composite).len();
            match &composite.extends {
                None => format!("{} ({fields} fields)", composite.name),
                Some(parent) => format!("{} extends {parent} ({fields} fields)", composite.name),
            }
        })
        .join("\n")
}
