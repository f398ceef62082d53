//! 面板的实体创建表单

use crate::forms::field::{FieldKind, FieldSpec, FormSpec};
use crate::ui::html_view::ids;

pub fn cliente_form() -> FormSpec {
    FormSpec::new(ids::FORM_CRIAR_CLIENTE, "/clientes", "Cliente criado com sucesso!")
        .field(FieldSpec::text("cpf").required())
        .field(FieldSpec::text("rg"))
        .field(FieldSpec::text("nome").required())
        .field(FieldSpec::new("telefone", FieldKind::Tel).required())
        .field(FieldSpec::new("email", FieldKind::Email).required())
        .field(FieldSpec::text("endereco"))
        .field(FieldSpec::new("dt_nasc", FieldKind::Date))
}

pub fn amizade_form() -> FormSpec {
    FormSpec::new(ids::FORM_CRIAR_AMIZADE, "/amizades", "Amizade criada com sucesso!")
        .field(FieldSpec::text("cpf_cliente_1").required())
        .field(FieldSpec::text("cpf_cliente_2").required())
}

pub fn produto_form() -> FormSpec {
    FormSpec::new(ids::FORM_CRIAR_PRODUTO, "/produtos", "Produto adicionado com sucesso!")
        .field(FieldSpec::number("idprod").required())
        .field(FieldSpec::text("produto").required())
        .field(FieldSpec::number("quantidade").required())
        .field(FieldSpec::number("preco").required())
}

pub fn compra_form() -> FormSpec {
    FormSpec::new(ids::FORM_REGISTAR_COMPRA, "/compras", "Compra registada com sucesso!")
        .field(FieldSpec::text("cpf_cliente").required())
        .field(FieldSpec::number("idprod").required())
        .field(FieldSpec::number("quantidade").required())
}

/// 面板启动时绑定的全部表单
pub fn default_forms() -> Vec<FormSpec> {
    vec![cliente_form(), amizade_form(), produto_form(), compra_form()]
}
