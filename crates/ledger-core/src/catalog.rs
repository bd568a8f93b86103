//! 分類與區段模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 計量單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfMeasure {
    /// 個
    Piece,
    /// 箱
    Box,
    /// 公斤
    Kilogram,
    /// 公升
    Liter,
    /// 公尺
    Meter,
    /// 組
    Set,
}

/// 分類（包含多個區段）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// 分類ID
    pub id: Uuid,

    /// 分類名稱
    pub name: String,

    /// 說明
    pub description: Option<String>,
}

impl Category {
    /// 創建新的分類
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description: None,
        }
    }

    /// 建構器模式：設置說明
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// 在此分類下創建區段
    pub fn new_section(&self, name: String) -> Section {
        Section::new(self.id, name)
    }
}

/// 區段（屬於一個分類，包含多個物料）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// 區段ID
    pub id: Uuid,

    /// 所屬分類ID
    pub category_id: Uuid,

    /// 區段名稱
    pub name: String,

    /// 說明
    pub description: Option<String>,
}

impl Section {
    /// 創建新的區段
    pub fn new(category_id: Uuid, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            name,
            description: None,
        }
    }

    /// 建構器模式：設置說明
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// 檢查區段是否屬於指定分類
    pub fn belongs_to(&self, category: &Category) -> bool {
        self.category_id == category.id
    }
}
