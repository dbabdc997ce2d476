//! Describe command - print declaration tables with resolved contracts.

use rill_astgen::{expr_family, stmt_family, FamilyDecl};
use std::fs;
use std::path::Path;

pub fn run(file: Option<&Path>, base: Option<&str>) -> miette::Result<()> {
    match (file, base) {
        (Some(file), Some(base)) => {
            let text = fs::read_to_string(file)
                .map_err(|e| miette::miette!("Failed to read file: {}", e))?;
            let family = FamilyDecl::parse(base, &text)
                .map_err(|err| miette::miette!("{}", err))?;
            print!("{}", family);
            Ok(())
        }
        (Some(_), None) => Err(miette::miette!("--base is required when a file is given")),
        (None, _) => {
            let exprs = expr_family().map_err(|err| miette::miette!("{}", err))?;
            let stmts = stmt_family().map_err(|err| miette::miette!("{}", err))?;
            print!("{}", exprs);
            println!();
            print!("{}", stmts);
            Ok(())
        }
    }
}
