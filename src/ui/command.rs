//! 终端前端的文本命令
//!
//! ```text
//! recomendacoes 12345678900
//! cliente cpf=12345678900 nome=Ana telefone=11999990000 email=ana@loja.com
//! produto idprod=10 produto=Café quantidade=5 preco=9.5
//! amizade cpf_cliente_1=111 cpf_cliente_2=222
//! compra cpf_cliente=111 idprod=10 quantidade=1
//! ```

use crate::ui::controller::Event;
use crate::ui::html_view::ids;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("expected key=value, got: {0}")]
    MalformedField(String),
    #[error("usage: recomendacoes <cpf>")]
    MissingCpf,
}

/// 命令词对应的表单 id
pub fn form_for(command: &str) -> Option<&'static str> {
    match command {
        "cliente" => Some(ids::FORM_CRIAR_CLIENTE),
        "amizade" => Some(ids::FORM_CRIAR_AMIZADE),
        "produto" => Some(ids::FORM_CRIAR_PRODUTO),
        "compra" => Some(ids::FORM_REGISTAR_COMPRA),
        _ => None,
    }
}

/// 解析一行，空行和 `#` 注释返回 `Ok(None)`
pub fn parse(line: &str) -> Result<Option<Event>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    if command == "recomendacoes" {
        if rest.is_empty() {
            return Err(CommandError::MissingCpf);
        }
        return Ok(Some(Event::RequestRecommendations {
            cpf: rest.to_string(),
        }));
    }

    let form_id = form_for(command).ok_or_else(|| CommandError::UnknownCommand(command.to_string()))?;
    let entries = parse_fields(rest)?;
    Ok(Some(Event::Submit {
        form_id: form_id.to_string(),
        entries,
    }))
}

/// 以空白分隔的 `key=value` 对。值可以用双引号包含空格
/// （`nome="Ana Maria"`），`key=` 表示空值。
pub fn parse_fields(input: &str) -> Result<Vec<(String, String)>, CommandError> {
    let mut entries = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if chars.peek().is_none() {
            break;
        }

        let mut token = String::new();
        let mut in_quotes = false;
        while let Some(&c) = chars.peek() {
            if c == '"' {
                in_quotes = !in_quotes;
                chars.next();
                continue;
            }
            if c.is_whitespace() && !in_quotes {
                break;
            }
            token.push(c);
            chars.next();
        }

        match token.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                entries.push((key.to_string(), value.to_string()));
            }
            _ => return Err(CommandError::MalformedField(token)),
        }
    }

    Ok(entries)
}
