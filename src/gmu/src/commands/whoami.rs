use crate::lib::environment::Environment;
use crate::lib::error::GmuResult;
use anyhow::Context;

/// Prints the name and email of the live git identity.
pub fn exec(env: &dyn Environment) -> GmuResult {
    let info = env
        .get_identity_manager()
        .current_identity_info()
        .context("Failed to read the current git user.")?;
    println!(
        "Current user: {} <{}>",
        info.name.as_deref().unwrap_or_default(),
        info.email.as_deref().unwrap_or_default()
    );
    Ok(())
}
