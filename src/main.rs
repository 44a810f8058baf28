use anyhow::Context;
use clap::Parser;
use std::io::IsTerminal;
use tecnicos_board::core::render::{self, OutputFormat};
use tecnicos_board::core::ConfigProvider;
use tecnicos_board::utils::logger;
use tecnicos_board::{ApiClient, CliConfig, ListState, Settings, TechnicianListView};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting tecnicos-board");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match Settings::resolve(&config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let client = match ApiClient::from_config(&settings) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };
    tracing::debug!("Collection endpoint: {}", client.endpoint());

    let color = settings.color && std::io::stdout().is_terminal();
    let mut view = TechnicianListView::with_query(client, settings.query());

    // transient loading line; skipped when stderr is piped
    let interactive = settings.format == OutputFormat::Text && std::io::stderr().is_terminal();
    if interactive {
        eprint!("{}", render::render_text(&view.frame(), color));
    }

    view.mount().await;

    let output = render::render_state(view.state(), settings.format, color)
        .context("failed to render technician list")?;
    print!("{}", output);

    if let ListState::Failed(_) = view.state() {
        std::process::exit(1);
    }

    Ok(())
}
