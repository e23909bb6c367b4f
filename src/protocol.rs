// file: src/protocol.rs
// description: newline-delimited JSON stdout protocol
// reference: structured output consumed by a parent process

use crate::models::QaResult;
use serde_json::json;

/// Emit a progress/diagnostic line: `{"log": "<text>"}`.
///
/// The stdout stream carries only protocol objects; human-oriented
/// diagnostics go to stderr through `tracing`.
pub fn log(message: &str) {
    println!("{}", json!({ "log": message }));
}

/// Emit the final result object: `{"result": {...}}`.
pub fn emit_result(result: &QaResult) {
    println!("{}", json!({ "result": result }));
}

/// Emit a top-level error object, optionally with diagnostic trace text.
pub fn emit_error(message: &str, traceback: Option<&str>) {
    let payload = match traceback {
        Some(trace) => json!({ "error": message, "traceback": trace }),
        None => json!({ "error": message }),
    };
    println!("{payload}");
}

#[cfg(test)]
mod tests {
    use super::*;

    // The emit functions write straight to stdout; shape checks go through
    // the same serde values they print.

    #[test]
    fn test_log_shape() {
        let value = json!({ "log": "成功读取文件: a.txt" });
        assert_eq!(value["log"], "成功读取文件: a.txt");
    }

    #[test]
    fn test_result_wrapper_shape() {
        let result = QaResult::answered("回答".to_string(), vec![]);
        let value = json!({ "result": result });
        assert_eq!(value["result"]["answer"], "回答");
    }

    #[test]
    fn test_error_shape_without_traceback() {
        let value = json!({ "error": "需要提供文件夹路径和问题" });
        assert!(value.get("traceback").is_none());
    }
}
