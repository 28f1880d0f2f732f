// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod util;

/* -------------------------------- リポジトリ関連 -------------------------------- */

pub use repos::{FailingRepo, FailingStore, Probe, RecordingRepo};

/* -------------------------------- ユーティリティ関連 -------------------------------- */

pub use util::UppercaseSlug;
