//! ブローカーヘルスチェック
//!
//! オプトアウトページの到達性を1回だけ確認し、結果を `HealthRecord` にまとめる。
//!
//! - `probe`: 締め切り付きHEADリクエスト
//! - `classifier`: 結果を `healthy / degraded / error` に分類
//! - `composer`: タイムスタンプ付きレコードの組み立て
//! - `checker`: 上記をつなぐパイプライン
//!
//! 定期ポーリングや履歴の保存は行わない。

pub mod checker;
pub mod classifier;
pub mod composer;
pub mod probe;

pub use checker::BrokerHealthChecker;
pub use classifier::{classify, Classification};
pub use composer::compose;
pub use probe::{BrokerProbe, HttpProbe, ProbeHandle, ProbeOutcome};
