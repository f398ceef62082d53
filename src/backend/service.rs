//! 模拟后端业务规则，数据保存在内存集合中

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::info;

use super::error::BackendError;
use super::model::{
    AmizadeCreate, Cliente, ClienteCreate, Compra, CompraCreate, MessageResponse, Produto,
};

/// 第一个购买 id，之后依次递增
const FIRST_PURCHASE_ID: i64 = 2001;

#[derive(Debug, Default)]
struct Store {
    clientes: HashMap<String, Cliente>,
    produtos: BTreeMap<i64, Produto>,
    amizades: HashMap<String, HashSet<String>>,
    compras: Vec<Compra>,
}

#[derive(Debug, Clone, Default)]
pub struct StoreService {
    store: Arc<Mutex<Store>>,
}

impl StoreService {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn create_cliente(&self, payload: ClienteCreate) -> Result<MessageResponse, BackendError> {
        if !payload.email.contains('@') {
            return Err(BackendError::Validation {
                field: "email".to_string(),
                message: "value is not a valid email address".to_string(),
            });
        }

        let mut store = self.lock();
        if store.clientes.contains_key(&payload.cpf) {
            return Err(BackendError::BadRequest(format!(
                "Erro ao criar cliente: CPF {} já cadastrado.",
                payload.cpf
            )));
        }

        let cliente = Cliente {
            cpf: payload.cpf,
            rg: payload.rg,
            nome: payload.nome,
            telefone: payload.telefone,
            email: payload.email,
            endereco: payload.endereco,
            dt_nasc: payload.dt_nasc,
        };
        let mensagem = format!("Cliente '{}' criado com sucesso!", cliente.nome);
        store.clientes.insert(cliente.cpf.clone(), cliente);
        Ok(MessageResponse::new(mensagem))
    }

    pub fn create_produto(&self, produto: Produto) -> Result<MessageResponse, BackendError> {
        let mut store = self.lock();
        if store.produtos.contains_key(&produto.idprod) {
            return Err(BackendError::Conflict(format!(
                "Produto com idprod {} já existe.",
                produto.idprod
            )));
        }

        let mensagem = format!("Produto '{}' adicionado com sucesso!", produto.produto);
        store.produtos.insert(produto.idprod, produto);
        Ok(MessageResponse::new(mensagem))
    }

    /// 好友关系是双向的
    pub fn create_amizade(&self, payload: AmizadeCreate) -> Result<MessageResponse, BackendError> {
        let mut store = self.lock();
        let (Some(a), Some(b)) = (
            store.clientes.get(&payload.cpf_cliente_1),
            store.clientes.get(&payload.cpf_cliente_2),
        ) else {
            return Err(BackendError::NotFound(
                "Um ou ambos os CPFs não foram encontrados.".to_string(),
            ));
        };
        let mensagem = format!("Amizade criada com sucesso entre {} e {}!", a.nome, b.nome);

        store
            .amizades
            .entry(payload.cpf_cliente_1.clone())
            .or_default()
            .insert(payload.cpf_cliente_2.clone());
        store
            .amizades
            .entry(payload.cpf_cliente_2)
            .or_default()
            .insert(payload.cpf_cliente_1);

        Ok(MessageResponse::new(mensagem))
    }

    pub fn register_compra(&self, payload: CompraCreate) -> Result<MessageResponse, BackendError> {
        let mut store = self.lock();
        if !store.clientes.contains_key(&payload.cpf_cliente) {
            return Err(BackendError::NotFound(format!(
                "Cliente com CPF {} não encontrado.",
                payload.cpf_cliente
            )));
        }

        let produto = store
            .produtos
            .get_mut(&payload.idprod)
            .ok_or_else(|| BackendError::NotFound("Produto não encontrado.".to_string()))?;
        if produto.quantidade < payload.quantidade {
            return Err(BackendError::BadRequest("Estoque insuficiente.".to_string()));
        }
        produto.quantidade -= payload.quantidade;
        let valorpago = produto.preco * payload.quantidade as f64;

        let compra = Compra {
            idcompra: store.compras.len() as i64 + FIRST_PURCHASE_ID,
            cpf_cliente: payload.cpf_cliente,
            idprod: payload.idprod,
            data_compra: Utc::now(),
            quantidade: payload.quantidade,
            valorpago,
        };
        info!(idcompra = compra.idcompra, cpf = %compra.cpf_cliente, "purchase registered");
        store.compras.push(compra.clone());

        Ok(MessageResponse {
            mensagem: "Compra registada com sucesso!".to_string(),
            dados_compra: Some(compra),
        })
    }

    /// 客户好友购买过的不同产品，按 `idprod` 排序
    pub fn recommendations(&self, cpf: &str) -> Vec<Produto> {
        let store = self.lock();
        let Some(friends) = store.amizades.get(cpf) else {
            return Vec::new();
        };

        let bought: BTreeSet<i64> = store
            .compras
            .iter()
            .filter(|compra| friends.contains(&compra.cpf_cliente))
            .map(|compra| compra.idprod)
            .collect();

        bought
            .iter()
            .filter_map(|idprod| store.produtos.get(idprod).cloned())
            .collect()
    }

    /// 加载示例客户、产品、好友关系和购买记录
    pub fn seed_sample_data(&self) -> Result<(), BackendError> {
        let clientes = [
            ("11111111111", "Ana Souza", "ana@loja.com"),
            ("22222222222", "Bruno Lima", "bruno@loja.com"),
            ("33333333333", "Carla Dias", "carla@loja.com"),
        ];
        for (cpf, nome, email) in clientes {
            self.create_cliente(ClienteCreate {
                cpf: cpf.to_string(),
                rg: None,
                nome: nome.to_string(),
                telefone: "11999990000".to_string(),
                email: email.to_string(),
                endereco: None,
                dt_nasc: None,
            })?;
        }

        let produtos = [
            (1, "Café Especial 250g", 40, 32.9),
            (2, "Chá Verde", 25, 14.5),
            (3, "Caneca de Cerâmica", 10, 45.0),
        ];
        for (idprod, produto, quantidade, preco) in produtos {
            self.create_produto(Produto {
                idprod,
                produto: produto.to_string(),
                quantidade,
                preco,
            })?;
        }

        for (a, b) in [("11111111111", "22222222222"), ("11111111111", "33333333333")] {
            self.create_amizade(AmizadeCreate {
                cpf_cliente_1: a.to_string(),
                cpf_cliente_2: b.to_string(),
            })?;
        }

        for (cpf, idprod, quantidade) in [("22222222222", 1, 2), ("33333333333", 3, 1)] {
            self.register_compra(CompraCreate {
                cpf_cliente: cpf.to_string(),
                idprod,
                quantidade,
            })?;
        }

        info!("sample data loaded");
        Ok(())
    }
}
