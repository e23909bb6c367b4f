// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use paper_qa::{protocol, Config, QaPipeline};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "paper_qa")]
#[command(version = "0.1.0")]
#[command(about = "Single-shot document question answering", long_about = None)]
struct Cli {
    /// Folder whose direct children are searched for .txt/.md/.pdf files
    folder_path: PathBuf,

    /// Natural-language question to answer
    question: String,

    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, value_name = "NUM")]
    top_k: Option<usize>,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit();
        }
        Err(_) => {
            // Protocol consumers read stdout; argument mistakes must come
            // back as a JSON object, not clap's usage text.
            protocol::emit_error("需要提供文件夹路径和问题", None);
            return;
        }
    };

    paper_qa::utils::logging::init_logger(cli.verbose);

    if let Err(err) = run(cli).await {
        error!("Fatal: {err:#}");
        protocol::log(&format!("发生错误: {err}"));
        protocol::emit_error(&err.to_string(), Some(&format!("{err:?}")));
    }
}

async fn run(cli: Cli) -> Result<()> {
    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(top_k) = cli.top_k {
        config.retrieval.top_k = top_k.max(1);
    }

    protocol::log("正在初始化问答系统...");
    let pipeline = QaPipeline::new(&config);
    protocol::log("初始化完成");

    let result = pipeline
        .answer_question(&cli.folder_path, &cli.question)
        .await;
    protocol::emit_result(&result);

    Ok(())
}
