mod cli;
mod commands;
mod util;


use clap::Parser;

use cli::{Cli, Command};
use commands::evaluate::EvaluateArgs;
use commands::functionalise::FunctionaliseArgs;
use commands::linearise::LineariseArgs;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Linearise { files, dialect } => commands::linearise::run(LineariseArgs {
            input: files.input,
            output: files.output,
            dialect: util::resolve_dialect(&dialect.dialect),
        }),
        Command::Functionalise {
            files,
            passthrough,
            missing_at,
            validator,
            dialect,
        } => commands::functionalise::run(FunctionaliseArgs {
            input: files.input,
            output: files.output,
            non_stemmed: passthrough.non_stemmed,
            stemmed: passthrough.stemmed,
            missing_at,
            cfg: validator.cfg,
            decoder: validator.decoder,
            dialect: util::resolve_dialect(&dialect.dialect),
        }),
        Command::Evaluate { input, gold } => {
            commands::evaluate::run(EvaluateArgs { input, gold })
        }
    }
}
