use serde::{Deserialize, Serialize};

/// 進捗イベント。
///
/// 雛形生成の各ステージの開始・完了を通知する。描画は呼び出し側が行う。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind")]
pub enum ProgressEvent {
    /// ステップ開始
    StepStarted {
        step: usize,
        total: usize,
        message: String,
    },
    /// ステップ完了
    StepCompleted {
        step: usize,
        total: usize,
        message: String,
    },
    /// ログメッセージ
    Log { message: String },
    /// 警告
    Warning { message: String },
    /// 全体完了
    Finished { success: bool, message: String },
}

/// プログレスイベントを stdout に出力するデフォルトコールバック。
pub fn print_progress(event: &ProgressEvent) {
    match event {
        ProgressEvent::StepStarted {
            step,
            total,
            message,
        } => {
            println!("[{step}/{total}] {message} ...");
        }
        ProgressEvent::StepCompleted {
            step,
            total,
            message,
        } => {
            println!("[{step}/{total}] \u{2713} {message}");
        }
        ProgressEvent::Log { message } => {
            println!("  {message}");
        }
        ProgressEvent::Warning { message } => {
            println!("  warning: {message}");
        }
        ProgressEvent::Finished { success, message } => {
            if *success {
                println!("\u{2713} {message}");
            } else {
                eprintln!("\u{2717} {message}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_event_tagged_json_format() {
        let event = ProgressEvent::StepStarted {
            step: 1,
            total: 4,
            message: "Scaffolding".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "StepStarted");
        assert_eq!(value["step"], 1);
        assert_eq!(value["total"], 4);
        assert_eq!(value["message"], "Scaffolding");
    }

    #[test]
    fn test_progress_event_finished_serde_roundtrip() {
        let event = ProgressEvent::Finished {
            success: true,
            message: "done".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: ProgressEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_progress_event_warning_serde() {
        let event = ProgressEvent::Warning {
            message: "project directory missing".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"kind\":\"Warning\""));
        let deserialized: ProgressEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_print_progress_does_not_panic() {
        let events = vec![
            ProgressEvent::StepStarted {
                step: 1,
                total: 4,
                message: "start".to_string(),
            },
            ProgressEvent::StepCompleted {
                step: 1,
                total: 4,
                message: "done".to_string(),
            },
            ProgressEvent::Log {
                message: "log".to_string(),
            },
            ProgressEvent::Warning {
                message: "warn".to_string(),
            },
            ProgressEvent::Finished {
                success: false,
                message: "failed".to_string(),
            },
        ];
        for event in &events {
            print_progress(event);
        }
    }
}
