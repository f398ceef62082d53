use std::sync::Arc;

use loja_painel::config::load_config;
use loja_painel::infrastructure::logger::Logger;
use loja_painel::ui::command;
use loja_painel::ui::console_view::ConsoleView;
use loja_painel::{Controller, Event};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    Logger::init(&config.logging)?;

    let controller = Controller::new(&config, Arc::new(ConsoleView::new()))?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        if matches!(args[0].as_str(), "-h" | "--help" | "help") {
            print_usage();
            return Ok(());
        }
        return match command::parse(&args.join(" ")) {
            Ok(Some(event)) => {
                controller.dispatch(event).await;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => {
                eprintln!("{}", err);
                print_usage();
                Err(err.into())
            }
        };
    }

    // 标准输入每行一条命令，按顺序处理
    let (tx, rx) = mpsc::channel::<Event>(32);
    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            match command::parse(&line) {
                Ok(Some(event)) => {
                    if tx.send(event).await.is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => warn!("{}", err),
            }
        }
        Ok::<_, std::io::Error>(())
    });

    let handled = controller.run(rx).await;
    info!(handled, "stdin closed");
    reader.await??;
    Ok(())
}

fn print_usage() {
    println!("usage: painel [command]");
    println!();
    println!("Without a command, commands are read from stdin, one per line.");
    println!();
    println!("commands:");
    println!("  recomendacoes <cpf>");
    println!("  cliente cpf=.. nome=.. telefone=.. email=.. [rg=..] [endereco=..] [dt_nasc=YYYY-MM-DD]");
    println!("  amizade cpf_cliente_1=.. cpf_cliente_2=..");
    println!("  produto idprod=.. produto=.. quantidade=.. preco=..");
    println!("  compra cpf_cliente=.. idprod=.. quantidade=..");
    println!();
    println!("environment: LOJA_CONFIG, LOJA_API_URL, LOJA_LOG_LEVEL, RUST_LOG");
}
