mod cli;
mod commands;
mod config;
mod file_io;
mod remote;
mod store;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::*;

fn init_tracing(verbose: bool) {
    // Library and binary share the `naraka` target prefix
    let default_filter = if verbose { "naraka=debug" } else { "naraka=warn" };

    // Logs go to stderr so decoded output can be piped
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Decode {
            input,
            qr,
            raw,
            output,
        } => {
            commands::token::decode(&input, qr, raw, output.as_deref())?;
        }

        Commands::Encode { input, raw, qr } => {
            commands::token::encode(input.as_deref(), raw, qr.as_deref())?;
        }

        Commands::Preset { store, command } => {
            let store = store.as_deref();

            match command {
                PresetCommand::Apply {
                    current,
                    preset,
                    code,
                    output,
                } => {
                    commands::preset::apply(&current, &preset, store, code, output.as_deref())?;
                }

                PresetCommand::Randomize {
                    current,
                    code,
                    output,
                } => {
                    commands::preset::randomize(&current, code, output.as_deref())?;
                }

                PresetCommand::Nullify {
                    current,
                    code,
                    output,
                } => {
                    commands::preset::nullify(&current, code, output.as_deref())?;
                }

                PresetCommand::Save { name, input } => {
                    commands::preset::save(&name, &input, store)?;
                }

                PresetCommand::List => {
                    commands::preset::list(store)?;
                }

                PresetCommand::Show { preset, code } => {
                    commands::preset::show(&preset, store, code)?;
                }

                PresetCommand::Delete { preset } => {
                    commands::preset::delete(&preset, store)?;
                }
            }
        }

        Commands::Schema { filter } => {
            commands::schema::handle(filter.as_deref())?;
        }

        Commands::Configure {
            proxy,
            no_proxy,
            presets_dir,
            show,
        } => {
            commands::configure::handle(proxy, no_proxy, presets_dir, show)?;
        }
    }

    Ok(())
}
