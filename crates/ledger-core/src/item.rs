//! 物料（期初狀態）模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::UnitOfMeasure;

/// 物料
///
/// 期初數量與期初單價構成第一個成本層，之後的單據都以此為基礎累計。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// 物料ID
    pub id: Uuid,

    /// 物料編號
    pub code: String,

    /// 物料名稱
    pub name: String,

    /// 所屬區段
    pub section_id: Option<Uuid>,

    /// 計量單位
    pub unit: UnitOfMeasure,

    /// 期初數量
    pub opening_quantity: u32,

    /// 期初單價（兩位小數）
    pub opening_unit_price: Decimal,

    /// 期初日期
    pub opening_date: NaiveDate,
}

impl Item {
    /// 創建新的物料
    pub fn new(
        code: String,
        opening_quantity: u32,
        opening_unit_price: Decimal,
        opening_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: code.clone(),
            code,
            section_id: None,
            unit: UnitOfMeasure::Piece,
            opening_quantity,
            opening_unit_price: crate::normalize_price(opening_unit_price),
            opening_date,
        }
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// 建構器模式：設置所屬區段
    pub fn with_section_id(mut self, section_id: Uuid) -> Self {
        self.section_id = Some(section_id);
        self
    }

    /// 建構器模式：設置計量單位
    pub fn with_unit(mut self, unit: UnitOfMeasure) -> Self {
        self.unit = unit;
        self
    }

    /// 期初金額
    pub fn opening_value(&self) -> Decimal {
        Decimal::from(self.opening_quantity) * self.opening_unit_price
    }

    /// 期初成本層
    pub fn opening_layer(&self) -> crate::CostLayer {
        crate::CostLayer::new(self.opening_unit_price, self.opening_quantity)
    }
}
