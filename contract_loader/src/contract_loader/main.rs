//!
//! The contract loader executable.
//!

pub(crate) mod arguments;

use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

/// The success exit code.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let policy = arguments.on_timeout;
    let config = arguments.validate()?;
    let quiet = config.quiet;
    if !quiet {
        println!(
            "    {} {} v{} with {}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
            config.endpoint,
        );
    }

    let node = contract_loader::Client::connect(&config.endpoint)?;
    let compiler = contract_loader::SerpentCompiler::new(
        config.serpent.clone(),
        config.preprocessed_directory(),
    )?;
    let mut policy = policy.instantiate();

    let run_time_start = Instant::now();
    let manifest =
        contract_loader::ContractLoader::new(node, compiler, config).run(policy.as_mut())?;

    if !quiet {
        print!("{manifest}");
        println!(
            "    {} deploying {} contracts in {}m{:02}s",
            "Finished".bright_green().bold(),
            manifest.modules.len(),
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
        );
    }

    Ok(())
}
