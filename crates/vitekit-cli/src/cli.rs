use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vitekit_core::{Feature, PackageManager};

#[derive(Parser, Debug)]
#[command(name = "vitekit", version, about = "Interactive Vite + React project scaffolder")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project name (prompted when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Optional feature to enable (router, query, tailwind); repeatable
    #[arg(short, long = "feature", value_name = "FEATURE")]
    pub features: Vec<Feature>,

    /// Package manager used to scaffold and install (npm, pnpm, yarn, bun)
    #[arg(short, long, env = "VITEKIT_PACKAGE_MANAGER")]
    pub package_manager: Option<PackageManager>,

    /// Directory in which the project directory is created
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Config file
    #[arg(short, long, env = "VITEKIT_CONFIG", default_value = vitekit_core::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Skip all prompts and use flags and defaults
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}
