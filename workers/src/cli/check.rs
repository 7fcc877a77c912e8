//! check サブコマンド
//!
//! サーバーを立てずにブローカーのヘルスチェックを行い、
//! 結果を1行1レコードのJSONで出力する。

use super::ProbeArgs;
use crate::{config, AppState};
use clap::Args;
use selferase_common::error::{CommonError, WorkerResult};
use selferase_common::types::HealthRecord;

/// check サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Broker IDs to check
    #[arg(required_unless_present = "all", conflicts_with = "all", num_args = 1..)]
    pub broker_ids: Vec<String>,

    /// Check every broker in the catalog
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub probe: ProbeArgs,
}

/// レコードをJSON Lines形式に変換
pub fn render_lines(records: &[HealthRecord]) -> Result<Vec<String>, CommonError> {
    records
        .iter()
        .map(|record| serde_json::to_string(record).map_err(CommonError::from))
        .collect()
}

/// 指定ブローカー（`--all` なら全件）を並行にチェックして標準出力へ書き出す
pub async fn execute(args: &CheckArgs) -> WorkerResult<()> {
    let config = args.probe.apply(config::load_from_env());
    let state = AppState::from_config(&config).await?;

    let records = if args.all {
        state.health_checker.check_all().await
    } else {
        state.health_checker.check_many(&args.broker_ids).await
    };
    for line in render_lines(&records)? {
        println!("{}", line);
    }
    Ok(())
}
