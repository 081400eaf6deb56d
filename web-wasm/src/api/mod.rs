//! 推論サービス連携

pub mod inference;
