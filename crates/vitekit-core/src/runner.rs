use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, ScaffoldError, Stage};

/// 外部コマンドの呼び出し内容。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// このコマンドを発行するステージ
    pub stage: Stage,
    pub program: String,
    pub args: Vec<String>,
    /// 作業ディレクトリ。プロセス自体のカレントディレクトリは変更しない。
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new(stage: Stage, program: &str, args: Vec<String>, cwd: &Path) -> Self {
        Self {
            stage,
            program: program.to_string(),
            args,
            cwd: cwd.to_path_buf(),
        }
    }

    /// 表示用のコマンドライン。
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// 外部コマンド実行のポート。
pub trait CommandRunner {
    /// コマンドを実行し、終了するまでブロックする。
    ///
    /// # Errors
    ///
    /// 起動に失敗した場合、または終了コードが 0 以外の場合にエラーを返す。
    fn run(&self, command: &CommandSpec) -> Result<()>;
}

/// 親プロセスの標準入出力を引き継いで実際にコマンドを実行する。
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        tracing::debug!(
            stage = %command.stage,
            cwd = %command.cwd.display(),
            "running `{}`",
            command.display()
        );
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .status()
            .map_err(|source| ScaffoldError::CommandSpawn {
                stage: command.stage,
                command: command.display(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            tracing::debug!(code = ?status.code(), "command failed");
            Err(ScaffoldError::CommandFailed {
                stage: command.stage,
                command: command.display(),
                code: status.code(),
            })
        }
    }
}

type RunHook = Box<dyn Fn(&CommandSpec) -> std::io::Result<()>>;

/// コマンドを実行せずに記録するランナー。
///
/// `fail_on` で指定したステージの最初のコマンドを失敗させ、
/// `with_hook` で成功時の副作用（ディレクトリ作成など）を再現できる。
#[derive(Default)]
pub struct RecordingRunner {
    commands: RefCell<Vec<CommandSpec>>,
    fail_on: Option<(Stage, i32)>,
    hook: Option<RunHook>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(mut self, stage: Stage, code: i32) -> Self {
        self.fail_on = Some((stage, code));
        self
    }

    pub fn with_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&CommandSpec) -> std::io::Result<()> + 'static,
    {
        self.hook = Some(Box::new(hook));
        self
    }

    /// 記録されたコマンド（失敗したものを含む）。
    pub fn commands(&self) -> Vec<CommandSpec> {
        self.commands.borrow().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.commands.borrow().iter().map(CommandSpec::display).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        self.commands.borrow_mut().push(command.clone());

        if let Some((stage, code)) = self.fail_on {
            if stage == command.stage {
                return Err(ScaffoldError::CommandFailed {
                    stage,
                    command: command.display(),
                    code: Some(code),
                });
            }
        }

        if let Some(hook) = &self.hook {
            hook(command).map_err(|source| ScaffoldError::CommandSpawn {
                stage: command.stage,
                command: command.display(),
                source,
            })?;
        }
        Ok(())
    }
}
