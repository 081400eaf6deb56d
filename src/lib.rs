//! AgriCare CLI
//!
//! 共通ワークフローを reqwest で推論サービスに送信し、結果をターミナルに表示する

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod image_input;
pub mod render;
pub mod report;
pub mod submit;
