mod cli;
mod prompt;
mod ui;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use prompt::InquirePrompt;
use vitekit_core::{
    collect_options, execute_create, load_config, CreateConfig, PresetAnswers, SystemRunner,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", ui::format_error(&e.to_string()));
        std::process::exit(1);
    }
}

/// RUST_LOG が未設定の場合は warn（`--verbose` 指定時は debug）で stderr に出力する。
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "vitekit", &mut io::stdout());
        return Ok(());
    }

    tracing::debug!(path = %cli.config.display(), "loading config");
    let mut config = load_config(&cli.config)?;
    if let Some(pm) = cli.package_manager {
        config.package_manager = pm;
    }

    // --yes の場合は両方の回答が埋まるためプロンプトは呼ばれない
    let preset = if cli.yes {
        PresetAnswers {
            project_name: Some(cli.name.unwrap_or_default()),
            features: Some(cli.features),
        }
    } else {
        PresetAnswers {
            project_name: cli.name,
            features: (!cli.features.is_empty()).then_some(cli.features),
        }
    };
    let options = collect_options(&InquirePrompt::new(), preset, &config.default_project_name)?;

    let create = CreateConfig::new(options, &cli.dir, &config);
    let report = execute_create(&create, &SystemRunner::new(), |event| {
        ui::render_progress(&event);
    })?;

    println!();
    print!("{}", ui::format_next_steps(&report));
    Ok(())
}
