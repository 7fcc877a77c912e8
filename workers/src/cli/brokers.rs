//! brokers サブコマンド

use crate::catalog::BrokerCatalog;
use crate::config;
use clap::Args;
use selferase_common::error::WorkerResult;
use std::path::PathBuf;

/// brokers サブコマンドの引数
#[derive(Args, Debug, Clone, Default)]
pub struct BrokersArgs {
    /// Broker catalog JSON file
    #[arg(long)]
    pub brokers_file: Option<PathBuf>,
}

/// `id<TAB>url` 形式の行に変換
pub fn render_lines(catalog: &BrokerCatalog) -> Vec<String> {
    catalog
        .brokers()
        .iter()
        .map(|b| format!("{}\t{}", b.id, b.opt_out_url))
        .collect()
}

/// カタログのブローカーを一覧表示
pub async fn execute(args: &BrokersArgs) -> WorkerResult<()> {
    let path = args
        .brokers_file
        .clone()
        .or_else(|| config::load_from_env().brokers_file);
    let catalog = BrokerCatalog::load(path.as_deref()).await?;

    for line in render_lines(&catalog) {
        println!("{}", line);
    }
    Ok(())
}
