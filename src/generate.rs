use crate::utils::{load_model, path_to_string};
use clap::Args;
use jsonskel_skeleton::{
    SkeletonBuilder, SkeletonError, SkeletonOptions, TypeRef, TypeRegistry, TypeResolver,
    COMMENT_KEY,
};
use log::{info, warn};
use std::fs::write;
use std::path::PathBuf;
use std::process::exit;

#[derive(Args)]
pub struct GenerateArgs {
    #[arg(help = "Type model (JSON)")]
    model: PathBuf,
    #[arg(help = "Composite type to build a skeleton for")]
    type_name: String,
    #[arg(short, long, default_value = "false", help = "Print JSON without whitespace")]
    compact: bool,
    #[arg(long, default_value = "false", help = "Leave out field documentation")]
    no_comments: bool,
    #[arg(long, default_value = COMMENT_KEY, help = "Key for field documentation")]
    comment_key: String,
    #[arg(long, default_value = "64", help = "Maximum nesting of composite types")]
    max_depth: usize,
    #[arg(short, long, help = "Write to file instead of stdout")]
    output: Option<PathBuf>,
}

impl GenerateArgs {
    fn options(&self) -> SkeletonOptions {
        SkeletonOptions {
            comment_key: self.comment_key.clone(),
            include_comments: !self.no_comments,
            max_depth: self.max_depth,
        }
    }
}

pub(crate) fn generate(args: GenerateArgs) {
    let registry = match load_model(&args.model) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("{e}");
            exit(1)
        }
    };
    let json = match render(&args, &registry) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Convert {} to JSON failed: {e}", args.type_name);
            exit(1)
        }
    };
    match &args.output {
        None => println!("{json}"),
        Some(path) => {
            if let Err(e) = write(path, json) {
                eprintln!("Failed to write {} - {e}", path_to_string(path));
                exit(1)
            }
        }
    }
}

fn render(args: &GenerateArgs, registry: &TypeRegistry) -> Result<String, SkeletonError> {
    let ty: TypeRef = args.type_name.parse()?;
    if registry.resolve(&ty).is_none() {
        return Err(SkeletonError::unresolved(&args.type_name, &ty));
    }
    let skeleton = SkeletonBuilder::with_options(registry, args.options()).generate(&ty);
    if !skeleton.is_complete() {
        warn!(
            "{} built with {} unresolved or recursive fields",
            args.type_name,
            skeleton.diagnostics.len()
        );
    }
    info!("Convert {} to JSON success", args.type_name);
    skeleton.to_json_text(!args.compact)
}
