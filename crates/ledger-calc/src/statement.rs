//! 庫存明細帳（計價報表）

use chrono::NaiveDate;
use ledger_core::{CostLayer, Item, Voucher, VoucherType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fifo::FifoCalculator;
use crate::position::StockPosition;
use crate::LedgerWarning;

/// 明細帳的一行（對應一張單據）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementLine {
    pub voucher_id: Uuid,
    pub voucher_code: String,
    pub voucher_date: NaiveDate,

    /// 單據類型；不合規的單據為 None
    pub voucher_type: Option<VoucherType>,

    pub in_quantity: u32,
    pub out_quantity: u32,
    pub unit_price: Decimal,

    /// 出庫取用的 FIFO 成本層（入庫單為空）
    pub batches: Vec<CostLayer>,

    /// 出庫的 FIFO 成本
    pub fifo_cost: Decimal,

    /// 結存數量
    pub balance_quantity: i64,

    /// 結存金額（每張單據以自己的單價累計）
    pub balance_value: Decimal,
}

impl StatementLine {
    /// 出庫是否完全由成本層滿足
    pub fn is_fully_costed(&self) -> bool {
        FifoCalculator::quantity_of(&self.batches) == u64::from(self.out_quantity)
    }
}

/// 庫存明細帳
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockStatement {
    pub item_id: Uuid,
    pub item_code: String,
    pub opening: StockPosition,
    pub lines: Vec<StatementLine>,
    pub closing: StockPosition,
    pub warnings: Vec<LedgerWarning>,
}

impl StockStatement {
    /// 全部出庫的 FIFO 成本合計
    pub fn total_fifo_cost(&self) -> Decimal {
        self.lines.iter().map(|l| l.fifo_cost).sum()
    }

    /// 檢查是否有警告
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// 明細帳計算器
pub struct StatementCalculator;

impl StatementCalculator {
    /// 依提供順序逐張重播單據
    ///
    /// 每張出庫單只以它之前（含本身）已記錄的成本層計價，
    /// 已出庫數量為之前所有出庫單的累計。
    pub fn build(item: &Item, vouchers: &[Voucher]) -> StockStatement {
        let opening = StockPosition {
            quantity: i64::from(item.opening_quantity),
            value: item.opening_value(),
        };

        let mut lines = Vec::with_capacity(vouchers.len());
        let mut warnings = Vec::new();
        let mut balance = opening;
        let mut consumed: u64 = 0;

        for (idx, voucher) in vouchers.iter().enumerate() {
            balance.quantity += voucher.net_quantity();
            balance.value += voucher.net_value();

            let voucher_type = voucher.voucher_type();
            if voucher_type.is_none() {
                let message = if voucher.in_quantity == 0 {
                    format!("單據 {} 數量為零", voucher.code)
                } else {
                    format!("單據 {} 同時有入庫和出庫數量", voucher.code)
                };
                warnings.push(if voucher.in_quantity == 0 {
                    LedgerWarning::info(item.code.clone(), message)
                } else {
                    LedgerWarning::warning(item.code.clone(), message)
                });
            }

            let mut batches = Vec::new();
            if voucher.out_quantity > 0 {
                let requested = u64::from(voucher.out_quantity);
                batches = FifoCalculator::batches_for_out_quantity(
                    item,
                    &vouchers[..=idx],
                    consumed,
                    requested,
                );

                let filled = FifoCalculator::quantity_of(&batches);
                if filled < requested {
                    warnings.push(LedgerWarning::warning(
                        item.code.clone(),
                        format!(
                            "單據 {} 出庫 {}，成本層僅能滿足 {}",
                            voucher.code, requested, filled
                        ),
                    ));
                }
                consumed += requested;
            }

            if balance.quantity < 0 {
                warnings.push(LedgerWarning::error(
                    item.code.clone(),
                    format!("單據 {} 後結存為負: {}", voucher.code, balance.quantity),
                ));
            }

            lines.push(StatementLine {
                voucher_id: voucher.id,
                voucher_code: voucher.code.clone(),
                voucher_date: voucher.voucher_date,
                voucher_type,
                in_quantity: voucher.in_quantity,
                out_quantity: voucher.out_quantity,
                unit_price: voucher.unit_price,
                fifo_cost: FifoCalculator::cost_of(&batches),
                batches,
                balance_quantity: balance.quantity,
                balance_value: balance.value,
            });
        }

        StockStatement {
            item_id: item.id,
            item_code: item.code.clone(),
            opening,
            lines,
            closing: balance,
            warnings,
        }
    }
}
