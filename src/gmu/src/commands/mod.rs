use crate::config::gmu_version_str;
use crate::lib::environment::Environment;
use crate::lib::error::{GmuError, GmuResult};
use crate::CliOpts;

mod checkout;
mod list;
mod update;
mod whoami;

/// What a single invocation does. When several flags are given the first one
/// in this order wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GmuCommand {
    Version,
    Whoami,
    Update,
    List,
    Checkout(String),
    Usage,
}

impl From<&CliOpts> for GmuCommand {
    fn from(opts: &CliOpts) -> Self {
        if opts.print_version {
            GmuCommand::Version
        } else if opts.whoami {
            GmuCommand::Whoami
        } else if opts.update {
            GmuCommand::Update
        } else if opts.all {
            GmuCommand::List
        } else if let Some(name) = opts.checkout.as_deref().filter(|name| !name.is_empty()) {
            GmuCommand::Checkout(name.to_string())
        } else {
            GmuCommand::Usage
        }
    }
}

/// Commands that do not need a home directory.
pub fn exec_without_env(cmd: GmuCommand) -> GmuResult {
    match cmd {
        GmuCommand::Version => println!("Version: {}", gmu_version_str()),
        _ => println!("Try 'gmu -h' for more options."),
    }
    Ok(())
}

/// Runs `cmd`. Failures are logged and do not change the exit status.
pub fn exec(env: &dyn Environment, cmd: GmuCommand) -> GmuResult {
    let result = match cmd {
        GmuCommand::Whoami => whoami::exec(env),
        GmuCommand::Update => update::exec(env),
        GmuCommand::List => list::exec(env),
        GmuCommand::Checkout(name) => checkout::exec(env, &name),
        GmuCommand::Version => exec_without_env(GmuCommand::Version),
        GmuCommand::Usage => exec_without_env(GmuCommand::Usage),
    };
    if let Err(err) = result {
        report(env, &err);
    }
    Ok(())
}

pub fn report(env: &dyn Environment, err: &GmuError) {
    slog::error!(env.get_logger(), "{:#}", err);
}
