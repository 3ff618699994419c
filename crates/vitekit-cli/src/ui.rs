use console::style;

use vitekit_core::progress::{print_progress, ProgressEvent};
use vitekit_core::CreateReport;

const ABORTED: &str = "Project creation aborted.";

/// 端末に色付きで進捗を表示する。端末でない場合は装飾なしで出力する。
///
/// 失敗時の詳細は `main` がエラー行として出すため、ここでは中断のみ表示する。
pub fn render_progress(event: &ProgressEvent) {
    if let ProgressEvent::Finished { success: false, .. } = event {
        eprintln!("\n{} {}", style("✗").red(), style(ABORTED).red());
        return;
    }
    if !console::Term::stdout().is_term() {
        print_progress(event);
        return;
    }
    match event {
        ProgressEvent::StepStarted {
            step,
            total,
            message,
        } => {
            println!("{} {message} ...", style(format!("[{step}/{total}]")).dim());
        }
        ProgressEvent::StepCompleted {
            step,
            total,
            message,
        } => {
            println!(
                "{} {} {}",
                style(format!("[{step}/{total}]")).dim(),
                style("✓").green(),
                message
            );
        }
        ProgressEvent::Log { message } => {
            println!("  {}", style(message).cyan());
        }
        ProgressEvent::Warning { message } => {
            println!("  {} {}", style("!").yellow().bold(), style(message).yellow());
        }
        ProgressEvent::Finished { message, .. } => {
            println!("\n{} {}", style("✓").green(), style(message).green().bold());
        }
    }
}

/// 完了後の「次の手順」ブロック。
pub fn format_next_steps(report: &CreateReport) -> String {
    let mut out = format!("{}\n", style("Next steps:").bold());
    for step in &report.next_steps {
        out.push_str(&format!("  {step}\n"));
    }
    out
}

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("Error:").red().bold(), style(message).red())
}
