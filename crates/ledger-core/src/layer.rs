//! 成本層模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 成本層（批次）
///
/// 以單一單價取得的一段庫存，來源是期初餘額或一張入庫單。
/// 只存在於一次計算期間，不會被保存。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLayer {
    /// 單價
    pub unit_price: Decimal,

    /// 數量
    pub quantity: u32,
}

impl CostLayer {
    /// 創建新的成本層
    pub fn new(unit_price: Decimal, quantity: u32) -> Self {
        Self {
            unit_price,
            quantity,
        }
    }

    /// 成本層金額
    pub fn value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }

    /// 檢查是否為空層
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}
