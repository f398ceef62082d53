//! 商店 API 的 HTTP 访问

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::core::error::{ClientError, Result};
use crate::core::response::ErrorBody;

/// 绑定到一个基础 URL 的 JSON 客户端
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 将路径段拼接到基础 URL
    ///
    /// 每段单独做百分号编码，可以直接放入用户输入。
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET` 并解码 JSON 响应体
    pub async fn get_json<T>(&self, segments: &[&str]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        read_json(response).await
    }

    /// 向 `/clientes` 这类端点路径 `POST` JSON 请求体
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let url = self.endpoint(&segments)?;
        debug!("POST {}", url);
        let response = self.http.post(url).json(body).send().await?;
        read_json(response).await
    }
}

/// 非 2xx 转为带 `detail` 的 [`ClientError::Api`]
///
/// 2xx 的响应体必须是 JSON，空响应体同样是 [`ClientError::Decode`]。
async fn read_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let url = response.url().clone();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let detail = ErrorBody::from_slice(&bytes).message();
        warn!(%url, %status, detail = ?detail, "request failed");
        return Err(ClientError::Api { status, detail });
    }

    serde_json::from_slice(&bytes).map_err(|e| {
        warn!(%url, %status, error = %e, "response body is not valid JSON");
        ClientError::Decode(e)
    })
}
