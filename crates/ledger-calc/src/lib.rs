//! # Ledger Calculation Engine
//!
//! 先進先出（FIFO）庫存計價引擎

pub mod engine;
pub mod fifo;
pub mod position;
pub mod statement;

// Re-export 主要類型
pub use engine::{LedgerEngine, OutboundQuote};
pub use fifo::FifoCalculator;
pub use position::{PositionCalculator, StockPosition};
pub use statement::{StatementCalculator, StatementLine, StockStatement};

use ledger_core::{CostLayer, Item, Voucher};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 單一物料的快照（物料 + 該物料的單據）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub item: Item,
    pub vouchers: Vec<Voucher>,
}

impl ItemSnapshot {
    /// 創建新的快照
    pub fn new(item: Item, vouchers: Vec<Voucher>) -> Self {
        Self { item, vouchers }
    }
}

/// 單物料庫存彙總
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemPosition {
    pub item_id: Uuid,
    pub item_code: String,
    pub position: StockPosition,

    /// 下一次出庫會取用的成本層
    pub next_batch: CostLayer,
}

/// 倉儲帳警告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerWarning {
    pub item_code: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl LedgerWarning {
    pub fn new(item_code: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            item_code,
            message,
            severity,
        }
    }

    pub fn info(item_code: String, message: String) -> Self {
        Self::new(item_code, message, WarningSeverity::Info)
    }

    pub fn warning(item_code: String, message: String) -> Self {
        Self::new(item_code, message, WarningSeverity::Warning)
    }

    pub fn error(item_code: String, message: String) -> Self {
        Self::new(item_code, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
