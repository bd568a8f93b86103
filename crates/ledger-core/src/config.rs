//! 倉儲帳計算配置

use serde::{Deserialize, Serialize};

/// 單據排序策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VoucherOrdering {
    /// 依呼叫端提供的順序（呼叫端負責按單據日期排序）
    #[default]
    AsSupplied,
    /// 計算前依單據日期穩定排序（同日保留原順序）
    ByVoucherDate,
}

/// 倉儲帳計算配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// 單據排序策略
    pub ordering: VoucherOrdering,

    /// 是否在計算前檢查單據
    /// - true: 檢查每張單據只有一個方向，且屬於該物料
    /// - false: 信任上游驗證（預設）
    pub validate_vouchers: bool,

    /// 是否允許部分出庫
    /// - true: 庫存不足時返回不足量的批次（預設）
    /// - false: 嚴格模式下庫存不足視為錯誤
    pub allow_partial_fill: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            ordering: VoucherOrdering::AsSupplied,
            validate_vouchers: false,
            allow_partial_fill: true,
        }
    }
}

impl LedgerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 讀取配置，未提供的欄位使用預設值
    ///
    /// # 範例
    /// ```
    /// # use ledger_core::{LedgerConfig, VoucherOrdering};
    /// let config = LedgerConfig::from_json(r#"{"ordering": "ByVoucherDate"}"#).unwrap();
    /// assert_eq!(config.ordering, VoucherOrdering::ByVoucherDate);
    /// assert!(config.allow_partial_fill);
    /// ```
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 建構器模式：設置排序策略
    pub fn with_ordering(mut self, ordering: VoucherOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// 建構器模式：設置是否檢查單據
    pub fn with_validate_vouchers(mut self, validate: bool) -> Self {
        self.validate_vouchers = validate;
        self
    }

    /// 建構器模式：設置是否允許部分出庫
    pub fn with_allow_partial_fill(mut self, allow: bool) -> Self {
        self.allow_partial_fill = allow;
        self
    }

    /// 檢查是否需要重新排序
    pub fn sorts_by_date(&self) -> bool {
        self.ordering == VoucherOrdering::ByVoucherDate
    }
}
