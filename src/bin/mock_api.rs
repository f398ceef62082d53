//! 模拟商店 API
//! 在内存中提供面板用到的端点，无需真实数据库即可运行面板。
//! 传入 `--seed` 以示例数据启动。

use loja_painel::backend::{self, StoreService};
use loja_painel::config::load_config;
use loja_painel::infrastructure::logger::Logger;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    Logger::init(&config.logging)?;

    info!("starting mock shop API...");

    let store = StoreService::new();
    if std::env::args().skip(1).any(|arg| arg == "--seed") {
        store.seed_sample_data()?;
    }

    let app = backend::router(store);

    let addr = format!(
        "{}:{}",
        config.mock_server.bind_address, config.mock_server.port
    );
    let listener = TcpListener::bind(&addr).await?;

    info!("mock shop API listening on http://{}", listener.local_addr()?);
    info!("endpoints:");
    info!("   POST   /clientes            - create customer");
    info!("   POST   /produtos            - add product");
    info!("   POST   /amizades            - create friendship");
    info!("   POST   /compras             - register purchase");
    info!("   GET    /recomendacoes/:cpf  - recommendations for a customer");
    info!("   GET    /health              - health check");

    axum::serve(listener, app).await?;
    Ok(())
}
