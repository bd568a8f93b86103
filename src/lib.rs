//! # Warehouse Ledger
//!
//! 倉儲帳 FIFO 計價引擎：資料模型（`ledger-core`）與計算（`ledger-calc`）

// Re-export 常用類型
pub use chrono::NaiveDate;
pub use ledger_calc::{
    FifoCalculator, ItemPosition, ItemSnapshot, LedgerEngine, LedgerWarning, OutboundQuote,
    PositionCalculator, StatementCalculator, StockPosition, StockStatement, WarningSeverity,
};
pub use ledger_core::{
    Category, CostLayer, Item, LedgerConfig, LedgerError, Section, UnitOfMeasure, Voucher,
    VoucherOrdering, VoucherType,
};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
