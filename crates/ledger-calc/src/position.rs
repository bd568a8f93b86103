//! 庫存數量與金額彙總

use ledger_core::{Item, Voucher};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 庫存狀態（數量 + 金額）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPosition {
    /// 可用數量（超量出庫時可能為負）
    pub quantity: i64,

    /// 可用金額
    pub value: Decimal,
}

impl StockPosition {
    /// 平均單價；數量不為正時返回 None
    pub fn average_unit_price(&self) -> Option<Decimal> {
        if self.quantity > 0 {
            Some(self.value / Decimal::from(self.quantity))
        } else {
            None
        }
    }
}

/// 庫存彙總計算器
pub struct PositionCalculator;

impl PositionCalculator {
    /// 可用數量 = 期初數量 + Σ(入庫 - 出庫)
    ///
    /// 純累加，不檢查也不截斷負數；單據順序不影響結果。
    pub fn available_quantity(item: &Item, vouchers: &[Voucher]) -> i64 {
        i64::from(item.opening_quantity) + vouchers.iter().map(Voucher::net_quantity).sum::<i64>()
    }

    /// 可用金額 = 期初數量 × 期初單價 + Σ((入庫 - 出庫) × 本單單價)
    ///
    /// 每張單據的淨數量以該單據自己的單價計價，出庫不會依 FIFO 成本重新計價。
    pub fn available_value(item: &Item, vouchers: &[Voucher]) -> Decimal {
        item.opening_value() + vouchers.iter().map(Voucher::net_value).sum::<Decimal>()
    }

    /// 同時計算可用數量與金額
    pub fn position(item: &Item, vouchers: &[Voucher]) -> StockPosition {
        StockPosition {
            quantity: Self::available_quantity(item, vouchers),
            value: Self::available_value(item, vouchers),
        }
    }
}
