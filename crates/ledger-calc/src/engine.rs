//! 倉儲帳主計算器

use std::borrow::Cow;

use ledger_core::{CostLayer, Item, LedgerConfig, LedgerError, Voucher};
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fifo::FifoCalculator;
use crate::position::{PositionCalculator, StockPosition};
use crate::statement::{StatementCalculator, StockStatement};
use crate::{ItemPosition, ItemSnapshot, WarningSeverity};

/// 新出庫單的 FIFO 報價
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundQuote {
    /// 申請出庫數量
    pub requested: u64,

    /// 成本層可滿足的數量
    pub filled: u64,

    /// 取用的成本層
    pub batches: Vec<CostLayer>,

    /// FIFO 總成本
    pub total_cost: Decimal,
}

impl OutboundQuote {
    /// 是否完全滿足
    pub fn is_fully_filled(&self) -> bool {
        self.filled == self.requested
    }

    /// 平均單位成本；未取得任何數量時返回 None
    pub fn average_unit_cost(&self) -> Option<Decimal> {
        if self.filled > 0 {
            Some(self.total_cost / Decimal::from(self.filled))
        } else {
            None
        }
    }
}

/// 倉儲帳計算器
///
/// 無內部狀態，每次呼叫都從完整快照重新計算；可在多執行緒間共用。
#[derive(Debug, Clone, Default)]
pub struct LedgerEngine {
    config: LedgerConfig,
}

impl LedgerEngine {
    /// 創建新的計算器
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    /// 獲取配置引用
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// 可用數量
    pub fn available_quantity(&self, item: &Item, vouchers: &[Voucher]) -> i64 {
        PositionCalculator::available_quantity(item, vouchers)
    }

    /// 可用金額
    pub fn available_value(&self, item: &Item, vouchers: &[Voucher]) -> Decimal {
        PositionCalculator::available_value(item, vouchers)
    }

    /// 可用數量與金額
    pub fn position(&self, item: &Item, vouchers: &[Voucher]) -> StockPosition {
        PositionCalculator::position(item, vouchers)
    }

    /// 下一個可用成本層
    pub fn next_available_batch(&self, item: &Item, vouchers: &[Voucher], consumed: u64) -> CostLayer {
        let ordered = self.ordered(vouchers);
        FifoCalculator::next_available_batch(item, &ordered, consumed)
    }

    /// 將出庫數量拆分到各成本層（庫存不足時返回不足量）
    pub fn batches_for_out_quantity(
        &self,
        item: &Item,
        vouchers: &[Voucher],
        consumed: u64,
        requested: u64,
    ) -> Vec<CostLayer> {
        let ordered = self.ordered(vouchers);
        FifoCalculator::batches_for_out_quantity(item, &ordered, consumed, requested)
    }

    /// 將出庫數量拆分到各成本層，依配置檢查單據與庫存
    pub fn batches_for_out_quantity_strict(
        &self,
        item: &Item,
        vouchers: &[Voucher],
        consumed: u64,
        requested: u64,
    ) -> ledger_core::Result<Vec<CostLayer>> {
        if self.config.validate_vouchers {
            self.check_vouchers(item, vouchers)?;
        }

        let batches = self.batches_for_out_quantity(item, vouchers, consumed, requested);
        let filled = FifoCalculator::quantity_of(&batches);

        if filled < requested {
            if !self.config.allow_partial_fill {
                return Err(LedgerError::InsufficientStock {
                    requested,
                    available: filled,
                });
            }
            tracing::warn!(
                "物料 {} 庫存不足：需要 {}, 僅能滿足 {}",
                item.code,
                requested,
                filled
            );
        }

        Ok(batches)
    }

    /// 檢查每張單據只有一個方向，且屬於該物料
    pub fn check_vouchers(&self, item: &Item, vouchers: &[Voucher]) -> ledger_core::Result<()> {
        for voucher in vouchers {
            if voucher.item_id != item.id {
                return Err(LedgerError::ItemMismatch {
                    voucher: voucher.code.clone(),
                    item: item.code.clone(),
                });
            }
            voucher.validate()?;
        }
        Ok(())
    }

    /// 為新出庫單報價
    ///
    /// 已出庫數量取現有單據的出庫合計，從下一個可用成本層開始取用。
    pub fn price_outbound(
        &self,
        item: &Item,
        vouchers: &[Voucher],
        requested: u32,
    ) -> ledger_core::Result<OutboundQuote> {
        let consumed: u64 = vouchers.iter().map(|v| u64::from(v.out_quantity)).sum();
        let requested = u64::from(requested);

        tracing::debug!(
            "物料 {} 出庫報價：已出庫 {}, 申請 {}",
            item.code,
            consumed,
            requested
        );

        let batches = self.batches_for_out_quantity_strict(item, vouchers, consumed, requested)?;
        let quote = OutboundQuote {
            requested,
            filled: FifoCalculator::quantity_of(&batches),
            total_cost: FifoCalculator::cost_of(&batches),
            batches,
        };

        tracing::info!(
            "物料 {} 出庫 {} 的 FIFO 成本: {}（{} 個成本層）",
            item.code,
            quote.filled,
            quote.total_cost,
            quote.batches.len()
        );

        Ok(quote)
    }

    /// 產生庫存明細帳
    pub fn statement(&self, item: &Item, vouchers: &[Voucher]) -> ledger_core::Result<StockStatement> {
        tracing::info!("開始產生明細帳：物料 {}，單據 {} 筆", item.code, vouchers.len());

        if self.config.validate_vouchers {
            self.check_vouchers(item, vouchers)?;
        }

        let ordered = self.ordered(vouchers);
        let statement = StatementCalculator::build(item, &ordered);

        for warning in &statement.warnings {
            match warning.severity {
                WarningSeverity::Info => tracing::debug!("{}: {}", warning.item_code, warning.message),
                WarningSeverity::Warning | WarningSeverity::Error => {
                    tracing::warn!("{}: {}", warning.item_code, warning.message)
                }
            }
        }

        tracing::info!(
            "明細帳完成：結存數量 {}, 結存金額 {}",
            statement.closing.quantity,
            statement.closing.value
        );

        Ok(statement)
    }

    /// 平行計算多個物料的庫存彙總
    pub fn summarize(&self, snapshots: &[ItemSnapshot]) -> Vec<ItemPosition> {
        tracing::info!("開始彙總庫存：物料 {} 筆", snapshots.len());
        let start_time = std::time::Instant::now();

        let positions: Vec<ItemPosition> = snapshots
            .par_iter()
            .map(|snapshot| {
                let item = &snapshot.item;
                let vouchers = &snapshot.vouchers;
                let consumed = vouchers.iter().map(|v| u64::from(v.out_quantity)).sum();

                ItemPosition {
                    item_id: item.id,
                    item_code: item.code.clone(),
                    position: self.position(item, vouchers),
                    next_batch: self.next_available_batch(item, vouchers, consumed),
                }
            })
            .collect();

        tracing::info!("庫存彙總完成，耗時 {:?}", start_time.elapsed());

        positions
    }

    /// 依配置決定單據順序
    fn ordered<'a>(&self, vouchers: &'a [Voucher]) -> Cow<'a, [Voucher]> {
        if !self.config.sorts_by_date() {
            return Cow::Borrowed(vouchers);
        }

        tracing::debug!("依單據日期排序 {} 張單據", vouchers.len());
        let mut sorted = vouchers.to_vec();
        sorted.sort_by_key(|v| v.voucher_date);
        Cow::Owned(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ledger_core::VoucherOrdering;
    use uuid::Uuid;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    fn fixture() -> (Item, Vec<Voucher>) {
        let item = Item::new("ENG-001".to_string(), 10, Decimal::from(5), day(1));
        let vouchers = vec![
            Voucher::inbound(item.id, "IN-A".to_string(), 5, Decimal::from(7), day(5)),
            Voucher::inbound(item.id, "IN-B".to_string(), 5, Decimal::from(9), day(10)),
        ];
        (item, vouchers)
    }

    #[test]
    fn test_default_engine_matches_calculators() {
        let (item, vouchers) = fixture();
        let engine = LedgerEngine::default();

        assert_eq!(engine.available_quantity(&item, &vouchers), 20);
        assert_eq!(engine.available_value(&item, &vouchers), Decimal::from(130));
        assert_eq!(
            engine.next_available_batch(&item, &vouchers, 10),
            CostLayer::new(Decimal::from(7), 5)
        );
        assert_eq!(
            engine.batches_for_out_quantity(&item, &vouchers, 0, 12),
            FifoCalculator::batches_for_out_quantity(&item, &vouchers, 0, 12)
        );
    }

    #[test]
    fn test_sort_by_voucher_date() {
        let (item, mut vouchers) = fixture();
        vouchers.reverse();

        let trusting = LedgerEngine::default();
        let sorting =
            LedgerEngine::new(LedgerConfig::new().with_ordering(VoucherOrdering::ByVoucherDate));

        assert_eq!(
            trusting.next_available_batch(&item, &vouchers, 10),
            CostLayer::new(Decimal::from(9), 5)
        );
        assert_eq!(
            sorting.next_available_batch(&item, &vouchers, 10),
            CostLayer::new(Decimal::from(7), 5)
        );
        // 輸入不被修改
        assert_eq!(vouchers[0].code, "IN-B");
    }

    #[test]
    fn test_strict_mode_rejects_shortfall() {
        let (item, vouchers) = fixture();
        let engine = LedgerEngine::new(LedgerConfig::new().with_allow_partial_fill(false));

        match engine.batches_for_out_quantity_strict(&item, &vouchers, 0, 25) {
            Err(LedgerError::InsufficientStock {
                requested,
                available,
            }) => {
                assert_eq!(requested, 25);
                assert_eq!(available, 20);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        assert!(engine
            .batches_for_out_quantity_strict(&item, &vouchers, 0, 20)
            .is_ok());
    }

    #[test]
    fn test_partial_fill_allowed_by_default() {
        let (item, vouchers) = fixture();
        let engine = LedgerEngine::default();

        let batches = engine
            .batches_for_out_quantity_strict(&item, &vouchers, 0, 25)
            .unwrap();

        assert_eq!(FifoCalculator::quantity_of(&batches), 20);
    }

    #[test]
    fn test_check_vouchers() {
        let (item, mut vouchers) = fixture();
        let engine = LedgerEngine::new(LedgerConfig::new().with_validate_vouchers(true));

        assert!(engine.check_vouchers(&item, &vouchers).is_ok());

        vouchers.push(Voucher::inbound(
            Uuid::new_v4(),
            "IN-OTHER".to_string(),
            1,
            Decimal::from(1),
            day(11),
        ));
        assert!(matches!(
            engine.statement(&item, &vouchers),
            Err(LedgerError::ItemMismatch { .. })
        ));

        vouchers.pop();
        vouchers.push(Voucher::new(
            item.id,
            "BOTH".to_string(),
            1,
            1,
            Decimal::from(1),
            day(11),
        ));
        assert!(matches!(
            engine.batches_for_out_quantity_strict(&item, &vouchers, 0, 1),
            Err(LedgerError::InvalidVoucher { .. })
        ));
    }

    #[test]
    fn test_price_outbound() {
        let (item, mut vouchers) = fixture();
        vouchers.push(Voucher::outbound(
            item.id,
            "OUT-001".to_string(),
            8,
            Decimal::from(5),
            day(12),
        ));
        let engine = LedgerEngine::default();

        let quote = engine.price_outbound(&item, &vouchers, 4).unwrap();

        // 已出庫 8：期初剩 2 @ 5，再取 A 的 2 @ 7
        assert_eq!(
            quote.batches,
            vec![
                CostLayer::new(Decimal::from(5), 2),
                CostLayer::new(Decimal::from(7), 2),
            ]
        );
        assert_eq!(quote.total_cost, Decimal::from(24));
        assert_eq!(quote.average_unit_cost(), Some(Decimal::from(6)));
        assert!(quote.is_fully_filled());
    }

    #[test]
    fn test_price_outbound_without_stock() {
        let item = Item::new("EMPTY-001".to_string(), 0, Decimal::from(5), day(1));
        let engine = LedgerEngine::default();

        let quote = engine.price_outbound(&item, &[], 3).unwrap();

        assert!(quote.batches.is_empty());
        assert!(!quote.is_fully_filled());
        assert_eq!(quote.average_unit_cost(), None);
    }

    #[test]
    fn test_summarize() {
        let (item, vouchers) = fixture();
        let other = Item::new("ENG-002".to_string(), 4, Decimal::from(2), day(1));
        let snapshots = vec![
            ItemSnapshot::new(item.clone(), vouchers),
            ItemSnapshot::new(other.clone(), Vec::new()),
        ];

        let positions = LedgerEngine::default().summarize(&snapshots);

        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].item_id, item.id);
        assert_eq!(positions[0].position.quantity, 20);
        assert_eq!(positions[0].next_batch, CostLayer::new(Decimal::from(5), 10));
        assert_eq!(positions[1].item_code, "ENG-002");
        assert_eq!(positions[1].position.value, Decimal::from(8));
    }
}
