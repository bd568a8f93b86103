//! # Ledger Core
//!
//! 倉儲帳核心資料模型與類型定義

pub mod catalog;
pub mod config;
pub mod item;
pub mod layer;
pub mod voucher;

// Re-export 主要類型
pub use catalog::{Category, Section, UnitOfMeasure};
pub use config::{LedgerConfig, VoucherOrdering};
pub use item::Item;
pub use layer::CostLayer;
pub use voucher::{Voucher, VoucherType};

/// 單價精度（小數位數）
pub const PRICE_SCALE: u32 = 2;

/// 將單價調整為固定兩位小數（四捨五入）
pub fn normalize_price(price: rust_decimal::Decimal) -> rust_decimal::Decimal {
    price.round_dp_with_strategy(
        PRICE_SCALE,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    )
}

/// 倉儲帳錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("無效的單據 {code}: {reason}")]
    InvalidVoucher { code: String, reason: String },

    #[error("單據 {voucher} 不屬於物料 {item}")]
    ItemMismatch { voucher: String, item: String },

    #[error("庫存不足：需要 {requested}, 可用 {available}")]
    InsufficientStock { requested: u64, available: u64 },

    #[error("配置解析錯誤: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_normalize_price() {
        assert_eq!(normalize_price(Decimal::new(12345, 3)), Decimal::new(1235, 2));
        assert_eq!(normalize_price(Decimal::new(12344, 3)), Decimal::new(1234, 2));
        assert_eq!(normalize_price(Decimal::from(7)), Decimal::from(7));
    }

    #[test]
    fn test_error_messages() {
        let err = LedgerError::InsufficientStock {
            requested: 25,
            available: 20,
        };
        assert_eq!(err.to_string(), "庫存不足：需要 25, 可用 20");
    }
}
