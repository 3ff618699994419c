// vitekit-core: CLI から利用する雛形生成ロジック

pub mod commands;
pub mod config;
pub mod deps;
pub mod error;
pub mod options;
pub mod package_manager;
pub mod progress;
pub mod prompt;
pub mod runner;
pub mod template;

pub use commands::create::{execute_create, CreateConfig, CreateReport};
pub use config::{load_config, CliConfig};
pub use error::{ScaffoldError, Stage};
pub use options::{Feature, ProjectOptions, DEFAULT_PROJECT_NAME};
pub use package_manager::PackageManager;
pub use prompt::{collect_options, PresetAnswers, ProjectPrompt};
pub use runner::{CommandRunner, CommandSpec, RecordingRunner, SystemRunner};
