//! 出入庫單據模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 單據類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoucherType {
    /// 入庫
    In,
    /// 出庫
    Out,
}

/// 出入庫單據
///
/// 一張單據只能是入庫（`in_quantity > 0`, `out_quantity == 0`）或出庫
/// （`out_quantity > 0`, `in_quantity == 0`）。計算引擎假設上游已檢查過，
/// 需要時可用 [`Voucher::validate`] 檢查。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    /// 單據ID
    pub id: Uuid,

    /// 單據編號
    pub code: String,

    /// 入庫數量
    pub in_quantity: u32,

    /// 出庫數量
    pub out_quantity: u32,

    /// 單價（兩位小數）
    pub unit_price: Decimal,

    /// 單據日期
    pub voucher_date: NaiveDate,

    /// 備註
    pub note: Option<String>,

    /// 所屬物料ID
    pub item_id: Uuid,
}

impl Voucher {
    /// 創建新的單據
    pub fn new(
        item_id: Uuid,
        code: String,
        in_quantity: u32,
        out_quantity: u32,
        unit_price: Decimal,
        voucher_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            in_quantity,
            out_quantity,
            unit_price: crate::normalize_price(unit_price),
            voucher_date,
            note: None,
            item_id,
        }
    }

    /// 創建入庫單
    pub fn inbound(
        item_id: Uuid,
        code: String,
        quantity: u32,
        unit_price: Decimal,
        voucher_date: NaiveDate,
    ) -> Self {
        Self::new(item_id, code, quantity, 0, unit_price, voucher_date)
    }

    /// 創建出庫單
    pub fn outbound(
        item_id: Uuid,
        code: String,
        quantity: u32,
        unit_price: Decimal,
        voucher_date: NaiveDate,
    ) -> Self {
        Self::new(item_id, code, 0, quantity, unit_price, voucher_date)
    }

    /// 建構器模式：設置備註
    pub fn with_note(mut self, note: String) -> Self {
        self.note = Some(note);
        self
    }

    /// 單據類型；同時有入庫和出庫數量（或兩者皆為零）時返回 None
    pub fn voucher_type(&self) -> Option<VoucherType> {
        match (self.in_quantity > 0, self.out_quantity > 0) {
            (true, false) => Some(VoucherType::In),
            (false, true) => Some(VoucherType::Out),
            _ => None,
        }
    }

    /// 檢查是否為入庫單
    pub fn is_inbound(&self) -> bool {
        self.voucher_type() == Some(VoucherType::In)
    }

    /// 檢查是否為出庫單
    pub fn is_outbound(&self) -> bool {
        self.voucher_type() == Some(VoucherType::Out)
    }

    /// 淨數量變動（入庫 - 出庫）
    pub fn net_quantity(&self) -> i64 {
        i64::from(self.in_quantity) - i64::from(self.out_quantity)
    }

    /// 淨金額變動（淨數量 × 本單單價）
    pub fn net_value(&self) -> Decimal {
        Decimal::from(self.net_quantity()) * self.unit_price
    }

    /// 檢查單據是否只有一個方向的數量
    pub fn validate(&self) -> crate::Result<()> {
        let reason = match (self.in_quantity > 0, self.out_quantity > 0) {
            (true, true) => "同時有入庫和出庫數量",
            (false, false) => "入庫和出庫數量皆為零",
            _ => return Ok(()),
        };

        Err(crate::LedgerError::InvalidVoucher {
            code: self.code.clone(),
            reason: reason.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LedgerError;
    use rstest::rstest;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_create_inbound() {
        let item_id = Uuid::new_v4();
        let voucher = Voucher::inbound(item_id, "IN-001".to_string(), 5, Decimal::from(7), date());

        assert_eq!(voucher.item_id, item_id);
        assert_eq!(voucher.voucher_type(), Some(VoucherType::In));
        assert!(voucher.is_inbound());
        assert!(!voucher.is_outbound());
        assert_eq!(voucher.net_quantity(), 5);
        assert_eq!(voucher.net_value(), Decimal::from(35));
        assert!(voucher.validate().is_ok());
    }

    #[test]
    fn test_create_outbound() {
        let voucher = Voucher::outbound(
            Uuid::new_v4(),
            "OUT-001".to_string(),
            3,
            Decimal::from(5),
            date(),
        )
        .with_note("領料".to_string());

        assert_eq!(voucher.voucher_type(), Some(VoucherType::Out));
        assert_eq!(voucher.note, Some("領料".to_string()));
        assert_eq!(voucher.net_quantity(), -3);
        assert_eq!(voucher.net_value(), Decimal::from(-15));
    }

    #[rstest]
    #[case(2, 1, "同時有入庫和出庫數量")]
    #[case(0, 0, "入庫和出庫數量皆為零")]
    fn test_validate_rejects_ill_formed(
        #[case] in_quantity: u32,
        #[case] out_quantity: u32,
        #[case] expected_reason: &str,
    ) {
        let voucher = Voucher::new(
            Uuid::new_v4(),
            "BAD-001".to_string(),
            in_quantity,
            out_quantity,
            Decimal::from(5),
            date(),
        );

        assert_eq!(voucher.voucher_type(), None);
        match voucher.validate() {
            Err(LedgerError::InvalidVoucher { code, reason }) => {
                assert_eq!(code, "BAD-001");
                assert_eq!(reason, expected_reason);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
