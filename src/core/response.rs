//! 商店 API 响应体

use serde::Deserialize;
use serde_json::{Map, Value};

/// 成功的 POST 响应体：`{mensagem?: ..., ...}`
#[derive(Debug, Default, Deserialize)]
pub struct SuccessBody {
    #[serde(default)]
    pub mensagem: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SuccessBody {
    /// 服务器消息为真值时返回它，否则返回 `default`
    ///
    /// 非字符串的真值按 JSON 文本显示（数字、`true`、对象、数组）。
    pub fn message_or(&self, default: &str) -> String {
        match &self.mensagem {
            Some(Value::String(text)) if !text.is_empty() => text.clone(),
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
            Some(Value::Bool(true)) => "true".to_string(),
            Some(value @ (Value::Array(_) | Value::Object(_))) => value.to_string(),
            _ => default.to_string(),
        }
    }
}

/// 错误响应体：`{detail?: ...}`
///
/// `detail` 通常是字符串；请求校验失败时是 `{loc, msg, type}` 对象列表。
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// 宽松解析，非 JSON 对象时没有 detail
    pub fn from_slice(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}
