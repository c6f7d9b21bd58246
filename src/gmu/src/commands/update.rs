use crate::lib::environment::Environment;
use crate::lib::error::GmuResult;
use anyhow::Context;
use slog::info;

pub fn exec(env: &dyn Environment) -> GmuResult {
    let registry = env
        .get_identity_manager()
        .synchronize()
        .context("Failed to update the identity registry.")?;
    info!(
        env.get_logger(),
        r#"Registry is up to date, current identity "{}"."#,
        registry.current_name()
    );
    Ok(())
}
