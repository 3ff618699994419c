use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Stage;
use crate::runner::CommandSpec;

/// 使用するパッケージマネージャー。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// 実行するプログラム名。Windows では npm/pnpm/yarn が `.cmd` シムになる。
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => if cfg!(windows) { "npm.cmd" } else { "npm" },
            PackageManager::Pnpm => if cfg!(windows) { "pnpm.cmd" } else { "pnpm" },
            PackageManager::Yarn => if cfg!(windows) { "yarn.cmd" } else { "yarn" },
            PackageManager::Bun => "bun",
        }
    }

    /// パッケージのバイナリを実行するプログラム名と先頭の引数。
    fn exec_program(&self) -> (&'static str, Option<&'static str>) {
        match self {
            PackageManager::Npm => (if cfg!(windows) { "npx.cmd" } else { "npx" }, None),
            PackageManager::Pnpm | PackageManager::Yarn => (self.program(), Some("dlx")),
            PackageManager::Bun => ("bunx", None),
        }
    }

    /// Vite テンプレートからプロジェクトを作成するコマンド。
    pub fn create_command(&self, project_name: &str, template: &str, cwd: &Path) -> CommandSpec {
        let args: Vec<String> = match self {
            PackageManager::Npm => vec![
                "create".into(),
                "vite@latest".into(),
                project_name.into(),
                "--".into(),
                "--template".into(),
                template.into(),
            ],
            PackageManager::Pnpm | PackageManager::Yarn | PackageManager::Bun => vec![
                "create".into(),
                "vite".into(),
                project_name.into(),
                "--template".into(),
                template.into(),
            ],
        };
        CommandSpec::new(Stage::Scaffold, self.program(), args, cwd)
    }

    /// 依存を追加するコマンド。`dev` の場合は開発依存として追加する。
    pub fn add_command(&self, packages: &[String], dev: bool, cwd: &Path) -> CommandSpec {
        let mut args: Vec<String> = vec![self.add_verb().into()];
        if dev {
            args.push(self.dev_flag().into());
        }
        args.extend(packages.iter().cloned());
        CommandSpec::new(Stage::Install, self.program(), args, cwd)
    }

    /// パッケージのバイナリを実行するコマンド (`npx` 相当)。
    pub fn exec_command(&self, stage: Stage, bin: &str, bin_args: &[&str], cwd: &Path) -> CommandSpec {
        let (program, subcommand) = self.exec_program();
        let mut args: Vec<String> = subcommand.into_iter().map(String::from).collect();
        args.push(bin.into());
        args.extend(bin_args.iter().map(|a| (*a).to_string()));
        CommandSpec::new(stage, program, args, cwd)
    }

    /// 開発サーバーを起動するコマンド文字列。完了メッセージに表示する。
    pub fn run_dev_hint(&self) -> String {
        format!("{} run dev", self.as_str())
    }

    fn add_verb(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Pnpm | PackageManager::Yarn | PackageManager::Bun => "add",
        }
    }

    fn dev_flag(&self) -> &'static str {
        match self {
            PackageManager::Bun => "-d",
            PackageManager::Npm | PackageManager::Pnpm | PackageManager::Yarn => "-D",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            "yarn" => Ok(PackageManager::Yarn),
            "bun" => Ok(PackageManager::Bun),
            other => Err(format!(
                "unknown package manager '{other}' (expected npm, pnpm, yarn or bun)"
            )),
        }
    }
}
