use crate::lib::environment::Environment;
use crate::lib::error::GmuResult;
use anyhow::Context;

/// Prints every registered identity, `*` marking the current one.
pub fn exec(env: &dyn Environment) -> GmuResult {
    let listing = env
        .get_identity_manager()
        .list()
        .context("Failed to list identities.")?;
    for identity in listing.iter() {
        println!("{}", identity);
    }
    Ok(())
}
