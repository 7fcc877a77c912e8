//! SelfErase Workers 共通ライブラリ
//!
//! Workers API とクライアント（ダッシュボード等）で共有する型定義

#![warn(missing_docs)]

/// 共通型定義（ブローカー、ヘルスレコード）
pub mod types;

/// 通信プロトコル（レスポンス型）
pub mod protocol;

/// 設定管理
pub mod config;

/// エラー型定義
pub mod error;
