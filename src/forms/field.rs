//! 表单声明和 JSON 载荷构建

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::core::error::{ClientError, Result};

/// 表单字段的输入类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Email,
    Tel,
    Date,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// 绑定到端点的表单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSpec {
    pub id: String,
    pub endpoint: String,
    pub success_message: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl FormSpec {
    pub fn new(
        id: impl Into<String>,
        endpoint: impl Into<String>,
        success_message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            endpoint: endpoint.into(),
            success_message: success_message.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field_kind(&self, name: &str) -> Option<FieldKind> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.kind)
    }

    /// 为一次提交构建 JSON 对象
    ///
    /// 条目按顺序写入，重复的名称保留最后一个值。
    /// 数字字段为空时省略，否则按 JSON 数字发送；
    /// 不以数字开头的文本变为 `null`。
    /// 其它字段按原字符串发送。
    pub fn build_payload(&self, entries: &[(String, String)]) -> Result<Map<String, Value>> {
        self.check_required(entries)?;

        let mut payload = Map::new();
        for (name, value) in entries {
            match self.field_kind(name) {
                Some(FieldKind::Number) if value.is_empty() => {
                    payload.remove(name);
                }
                Some(FieldKind::Number) => {
                    payload.insert(name.clone(), number_value(parse_float(value)));
                }
                _ => {
                    payload.insert(name.clone(), Value::String(value.clone()));
                }
            }
        }
        Ok(payload)
    }

    fn check_required(&self, entries: &[(String, String)]) -> Result<()> {
        for field in self.fields.iter().filter(|f| f.required) {
            let filled = entries
                .iter()
                .rev()
                .find(|(name, _)| *name == field.name)
                .is_some_and(|(_, value)| !value.trim().is_empty());
            if !filled {
                return Err(ClientError::MissingInput(format!(
                    "O campo '{}' é obrigatório.",
                    field.name
                )));
            }
        }
        Ok(())
    }
}

/// 跳过前导空白后读取 `input` 最长的数字前缀，
/// 与浏览器读取数字输入一致（`"12abc"` 为 12，`"abc"` 没有值）
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = "";
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &s[pos + 1..end];
        }
    }

    let mut normalized = String::with_capacity(pos + 4);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_digits);
    }
    if !exponent.is_empty() {
        normalized.push('e');
        normalized.push_str(exponent);
    }
    normalized.parse().ok()
}

/// 解析后数字的 JSON 形式：整数值为整数，有限值为浮点数，其它为 `null`
pub fn number_value(parsed: Option<f64>) -> Value {
    let Some(v) = parsed.filter(|v| v.is_finite()) else {
        return Value::Null;
    };
    if v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0 {
        return Value::Number(Number::from(v as i64));
    }
    Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null)
}
