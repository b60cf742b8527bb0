use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;
use url::Url;

use insight_chat::application::views::render_result;
use insight_chat::domain::services::{ConversationService, HttpAnalyticsClient};

const DEFAULT_ENDPOINT: &str = "http://localhost:5001/api/generate-sql";

#[derive(Parser)]
#[command(name = "insight_chat")]
#[command(about = "Conversational analytics for restaurant sales data", long_about = None)]
struct Cli {
    /// Analytics backend endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let endpoint = Url::parse(&cli.endpoint)?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    rt.block_on(run_chat(endpoint))
}

async fn run_chat(endpoint: Url) -> anyhow::Result<()> {
    println!("💬 Insight Chat - pergunte sobre os dados do seu restaurante");
    println!("📡 Backend: {}", endpoint);
    println!("   Digite uma pergunta, ou 'sair' para encerrar\n");

    let backend = Arc::new(HttpAnalyticsClient::new(endpoint));
    let service = ConversationService::new(backend);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("sair") || question.eq_ignore_ascii_case("exit") {
            break;
        }

        service.submit(question).await;
        if let Some(result) = service.last_result().await {
            println!("\n{}", render_result(&result));
        }
    }

    println!("\n👋 Até logo!");
    Ok(())
}
