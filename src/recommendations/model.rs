//! 推荐数据模型

use serde::{Deserialize, Serialize};

/// 推荐给客户的产品，来自 `GET /recomendacoes/{cpf}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idprod: Option<i64>,
    #[serde(rename = "produto")]
    pub name: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "quantidade")]
    pub stock: f64,
}

impl Recommendation {
    /// 两位小数的价格，例如 `R$ 9.50`
    pub fn price_label(&self) -> String {
        format!("R$ {:.2}", self.price)
    }

    /// 库存数量，整数不带小数部分
    pub fn stock_label(&self) -> String {
        if self.stock.is_finite() && self.stock.fract() == 0.0 && self.stock.abs() < 1e15 {
            format!("{}", self.stock as i64)
        } else {
            format!("{}", self.stock)
        }
    }
}
