//! 先進先出成本層計算

use ledger_core::{CostLayer, Item, Voucher};
use rust_decimal::Decimal;

/// FIFO 成本層計算器
///
/// 成本層依序為：期初餘額，接著是每張入庫數量大於零的單據（依提供順序）。
/// 所有方法都不排序單據，也不修改輸入。
pub struct FifoCalculator;

impl FifoCalculator {
    /// 列出所有成本層
    pub fn layers(item: &Item, vouchers: &[Voucher]) -> Vec<CostLayer> {
        Self::layer_iter(item, vouchers).collect()
    }

    /// 下一單位出庫會取用的成本層
    ///
    /// 已出庫 `consumed` 單位後，返回第一個尚有餘量的成本層及其剩餘數量。
    /// 所有成本層都已耗盡時，返回期初單價、數量為零的哨兵層（表示無庫存，不是錯誤）。
    pub fn next_available_batch(item: &Item, vouchers: &[Voucher], consumed: u64) -> CostLayer {
        Self::remaining_layers(item, vouchers, consumed)
            .next()
            .unwrap_or_else(|| CostLayer::new(item.opening_unit_price, 0))
    }

    /// 將 `requested` 單位出庫拆分到各成本層
    ///
    /// 依序從每層取 `min(該層剩餘, 尚需數量)`，直到滿足或成本層耗盡。
    /// 庫存不足時返回的數量總和會小於 `requested`，由呼叫端自行判斷。
    pub fn batches_for_out_quantity(
        item: &Item,
        vouchers: &[Voucher],
        consumed: u64,
        requested: u64,
    ) -> Vec<CostLayer> {
        let mut batches = Vec::new();
        let mut remaining_qty = requested;

        for layer in Self::remaining_layers(item, vouchers, consumed) {
            if remaining_qty == 0 {
                break;
            }

            let taken = u32::try_from(remaining_qty).map_or(layer.quantity, |q| q.min(layer.quantity));
            batches.push(CostLayer::new(layer.unit_price, taken));

            remaining_qty -= u64::from(taken);
        }

        batches
    }

    /// 批次總成本
    pub fn cost_of(batches: &[CostLayer]) -> Decimal {
        batches.iter().map(CostLayer::value).sum()
    }

    /// 批次總數量
    pub fn quantity_of(batches: &[CostLayer]) -> u64 {
        batches.iter().map(|b| u64::from(b.quantity)).sum()
    }

    fn layer_iter<'a>(
        item: &'a Item,
        vouchers: &'a [Voucher],
    ) -> impl Iterator<Item = CostLayer> + 'a {
        std::iter::once(item.opening_layer()).chain(
            vouchers
                .iter()
                .filter(|v| v.in_quantity > 0)
                .map(|v| CostLayer::new(v.unit_price, v.in_quantity)),
        )
    }

    /// 跳過已出庫的數量後，依序返回尚有餘量的成本層
    fn remaining_layers<'a>(
        item: &'a Item,
        vouchers: &'a [Voucher],
        consumed: u64,
    ) -> impl Iterator<Item = CostLayer> + 'a {
        let mut to_skip = consumed;

        Self::layer_iter(item, vouchers).filter_map(move |layer| match u32::try_from(to_skip) {
            Ok(skip) if skip < layer.quantity => {
                to_skip = 0;
                Some(CostLayer::new(layer.unit_price, layer.quantity - skip))
            }
            _ => {
                to_skip -= u64::from(layer.quantity);
                None
            }
        })
    }
}
