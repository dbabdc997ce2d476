//! Check command - validate a declaration file.

use rill_astgen::FamilyDecl;
use std::fs;
use std::path::Path;

pub fn run(file: &Path, base: &str) -> miette::Result<()> {
    let text = fs::read_to_string(file)
        .map_err(|e| miette::miette!("Failed to read file: {}", e))?;

    match FamilyDecl::parse(base, &text) {
        Ok(family) => {
            println!(
                "{}: {} family, {} kinds, {} resolving",
                file.display(),
                family.base,
                family.kinds.len(),
                family.resolving_kinds().len()
            );
            Ok(())
        }
        Err(err) => Err(miette::miette!("{} (in `{}`)", err, err.declaration())),
    }
}
