//! 模拟后端数据模型

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClienteCreate {
    pub cpf: String,
    #[serde(default)]
    pub rg: Option<String>,
    pub nome: String,
    pub telefone: String,
    pub email: String,
    #[serde(default)]
    pub endereco: Option<String>,
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub dt_nasc: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cliente {
    pub cpf: String,
    pub rg: Option<String>,
    pub nome: String,
    pub telefone: String,
    pub email: String,
    pub endereco: Option<String>,
    pub dt_nasc: Option<NaiveDate>,
}

/// 商品目录中的产品，也是推荐条目的结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produto {
    pub idprod: i64,
    pub produto: String,
    pub quantidade: i64,
    pub preco: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmizadeCreate {
    pub cpf_cliente_1: String,
    pub cpf_cliente_2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompraCreate {
    pub cpf_cliente: String,
    pub idprod: i64,
    pub quantidade: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Compra {
    pub idcompra: i64,
    pub cpf_cliente: String,
    pub idprod: i64,
    pub data_compra: DateTime<Utc>,
    pub quantidade: i64,
    pub valorpago: f64,
}

/// POST 端点的成功响应体
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub mensagem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dados_compra: Option<Compra>,
}

impl MessageResponse {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self {
            mensagem: mensagem.into(),
            dados_compra: None,
        }
    }
}

/// HTML 日期输入框留空时提交 `""`
fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
