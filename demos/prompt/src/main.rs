//! Drives the elicitor prompter from JSON files on disk

use std::path::PathBuf;
use clap::{Parser, Subcommand};
use elicitor::{
    SchemaPrompter,
    console::StdConsole,
    error::Error,
    types::{ElicitRequest, ListToolsResult},
};

#[derive(Parser)]
#[command(name = "elicitor-prompt")]
#[command(about = "Answer MCP elicitation requests and collect tool arguments interactively", long_about = None)]
#[command(version)]
struct Cli {
    /// Do not print schemas before prompting
    #[arg(long, env = "ELICITOR_NO_SCHEMA")]
    no_schema: bool,

    /// 1-based tool index picked on empty input
    #[arg(long, default_value_t = 1)]
    default_tool: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer an elicitation request read from a JSON file
    Elicit {
        /// Path to the `elicitation/create` params
        file: PathBuf,
    },
    /// Pick a tool from a `tools/list` result and collect its arguments
    Tool {
        /// Path to the `tools/list` result
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut prompter = SchemaPrompter::new(StdConsole::stdio())
        .with_options(|opt| opt
            .with_schema_echo(!cli.no_schema)
            .with_default_tool(cli.default_tool));

    match cli.command {
        Commands::Elicit { file } => {
            let json = tokio::fs::read_to_string(&file).await?;
            let request: ElicitRequest = serde_json::from_str(&json)?;
            tracing::info!(file = %file.display(), url_mode = request.is_url(), "Loaded elicitation request");

            let result = prompter.elicit(&request).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        },
        Commands::Tool { file } => {
            let json = tokio::fs::read_to_string(&file).await?;
            let list: ListToolsResult = serde_json::from_str(&json)?;
            tracing::info!(file = %file.display(), tools = list.tools.len(), "Loaded tool list");

            if let Some(call) = prompter.collect_tool_call(&list.tools).await? {
                println!("{}", serde_json::to_string_pretty(&call)?);
            }
        },
    }

    Ok(())
}
