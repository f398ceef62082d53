//! 客户端错误处理

use reqwest::StatusCode;

/// 单次界面交互的失败
///
/// 每个变体最终都是一条错误通知，显示的文字只由 [`ClientError::user_message`] 决定。
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server answered {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    MissingInput(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// 显示给用户的文字：有服务器 `detail` 时用它，缺少输入时用必填提示，否则用 `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ClientError::MissingInput(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
