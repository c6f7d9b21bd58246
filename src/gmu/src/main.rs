#![allow(special_module_name)]
use crate::lib::environment::{Environment, EnvironmentImpl};
use crate::lib::error::{GmuError, GmuResult};
use crate::lib::logger::{create_root_logger, LoggingMode};
use clap::{ArgAction, Parser};
use commands::GmuCommand;
use std::io::Write;
use std::path::PathBuf;

mod commands;
mod config;
mod lib;

/// Keeps several git users (a .gitconfig plus a .ssh directory each) on one machine and switches between them.
#[derive(Parser)]
#[command(name = "gmu", disable_version_flag = true)]
pub struct CliOpts {
    /// Print the version number.
    #[arg(short = 'v')]
    print_version: bool,

    /// Show current git user <email>.
    #[arg(short = 'i')]
    whoami: bool,

    /// Update gmu.
    #[arg(short = 'u')]
    update: bool,

    /// Print all git users.
    #[arg(short = 'a')]
    all: bool,

    /// Set USER as the current user.
    #[arg(short = 'c', value_name = "USER")]
    checkout: Option<String>,

    /// Displays detailed information about operations. -vv will generate a very large number of messages.
    #[arg(long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppresses informational messages. -qq limits to errors only; -qqqq disables them all.
    #[arg(long, short, action = ArgAction::Count)]
    quiet: u8,

    /// The logging mode to use. You can log to stderr, a file, or both.
    #[arg(long = "log", default_value = "stderr", value_parser = ["stderr", "tee", "file"])]
    logmode: String,

    /// The file to log to, if logging to a file (see --log).
    #[arg(long)]
    logfile: Option<String>,

    /// The home directory holding .gitconfig, .ssh and the gmu registry.
    #[arg(long, env = "GMU_HOME", value_name = "DIR")]
    home: Option<PathBuf>,
}

/// Setup a logger with the proper configuration, based on arguments.
fn setup_logging(opts: &CliOpts) -> slog::Logger {
    let verbose_level = opts.verbose as i64 - opts.quiet as i64;

    let mode = match opts.logmode.as_str() {
        "tee" => LoggingMode::Tee(PathBuf::from(opts.logfile.as_deref().unwrap_or("gmu.log"))),
        "file" => LoggingMode::File(PathBuf::from(opts.logfile.as_deref().unwrap_or("gmu.log"))),
        _ => LoggingMode::Stderr,
    };

    create_root_logger(verbose_level, mode)
}

fn print_error(err: GmuError) {
    let Some(mut stderr) = term::stderr() else {
        for (level, cause) in err.chain().enumerate() {
            let prefix = if level == 0 { "Error" } else { "Caused by" };
            eprintln!("{prefix}: {cause}");
        }
        return;
    };

    for (level, cause) in err.chain().enumerate() {
        let (color, prefix) = if level == 0 {
            (term::color::RED, "Error")
        } else {
            (term::color::YELLOW, "Caused by")
        };
        let _ = stderr.fg(color);
        let _ = write!(stderr, "{prefix}: ");
        let _ = stderr.reset();
        let _ = writeln!(stderr, "{cause}");
    }
}

fn inner_main() -> GmuResult {
    let cli_opts = CliOpts::parse();
    let command = GmuCommand::from(&cli_opts);

    if command == GmuCommand::Version {
        return commands::exec_without_env(command);
    }

    let log = setup_logging(&cli_opts);
    let env = EnvironmentImpl::new(log, cli_opts.home)?;

    slog::trace!(env.get_logger(), "Synchronizing before dispatch.");
    if let Err(err) = env.get_identity_manager().synchronize() {
        commands::report(&env, &GmuError::new(err));
    }

    commands::exec(&env, command)
}

fn main() {
    let result = inner_main();
    if let Err(err) = result {
        print_error(err);
        std::process::exit(255);
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::GmuCommand;
    use crate::CliOpts;
    use clap::{CommandFactory, Parser};

    #[test]
    fn validate_cli() {
        CliOpts::command().debug_assert();
    }

    fn command_for(args: &[&str]) -> GmuCommand {
        let opts = CliOpts::try_parse_from(std::iter::once("gmu").chain(args.iter().copied()))
            .unwrap();
        GmuCommand::from(&opts)
    }

    #[test]
    fn first_flag_in_priority_order_wins() {
        assert_eq!(command_for(&["-c", "alice", "-a", "-v"]), GmuCommand::Version);
        assert_eq!(command_for(&["-a", "-i"]), GmuCommand::Whoami);
        assert_eq!(command_for(&["-a", "-u"]), GmuCommand::Update);
        assert_eq!(command_for(&["-c", "alice", "-a"]), GmuCommand::List);
        assert_eq!(
            command_for(&["-c", "alice"]),
            GmuCommand::Checkout("alice".to_string())
        );
        assert_eq!(command_for(&[]), GmuCommand::Usage);
    }

    #[test]
    fn verbose_is_long_only() {
        assert_eq!(command_for(&["--verbose", "-v"]), GmuCommand::Version);
        assert_eq!(command_for(&["-q", "-a"]), GmuCommand::List);
    }
}
