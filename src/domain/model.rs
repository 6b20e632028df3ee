use serde::{Deserialize, Serialize};

/// 使用者資料，生日格式為 `YYYY.MM.DD`
///
/// 欄位保留為 `Option`，缺少或空白的資料由生日規則略過，而不是在讀取時失敗。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, birthday: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            birthday: Some(birthday.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub name: String,
    pub congratulation_date: String,
}

/// 已通過驗證的抽號請求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketRequest {
    pub min: i64,
    pub max: i64,
    pub quantity: i64,
}
