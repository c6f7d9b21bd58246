use crate::lib::environment::Environment;
use crate::lib::error::GmuResult;
use anyhow::Context;
use gmu_core::identity::CheckoutOutcome;
use slog::info;

pub fn exec(env: &dyn Environment, name: &str) -> GmuResult {
    let log = env.get_logger();
    info!(log, r#"Checking out identity "{}"."#, name);

    let outcome = env
        .get_identity_manager()
        .checkout(name)
        .with_context(|| format!(r#"Failed to checkout "{}"."#, name))?;
    match outcome {
        CheckoutOutcome::AlreadyCurrent => {
            println!(r#""{}" is already the current user."#, name);
        }
        CheckoutOutcome::Switched => super::list::exec(env)?,
    }
    Ok(())
}
