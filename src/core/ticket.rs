use crate::domain::model::TicketRequest;
use crate::utils::error::Result;
use crate::utils::validation::{parse_integer, validate_range, validate_strictly_less};
use rand::Rng;

/// 抽號允許的最小值
pub const MIN_BOUND: i64 = 1;
/// 抽號允許的最大值
pub const MAX_BOUND: i64 = 1000;

impl TicketRequest {
    pub fn new(min: i64, max: i64, quantity: i64) -> Result<Self> {
        validate_range("min", min, MIN_BOUND, MAX_BOUND)?;
        validate_range("max", max, MIN_BOUND, MAX_BOUND)?;
        validate_strictly_less("min", min, max)?;
        // 上下界都已驗證，不會溢位
        validate_range("quantity", quantity, 1, max - min + 1)?;

        Ok(Self { min, max, quantity })
    }

    /// 從文字參數建立請求，非整數一律拒絕
    pub fn from_raw(min: &str, max: &str, quantity: &str) -> Result<Self> {
        let min = parse_integer("min", min)?;
        let max = parse_integer("max", max)?;
        let quantity = parse_integer("quantity", quantity)?;
        Self::new(min, max, quantity)
    }

    /// 不重複抽出 `quantity` 個數字並遞增排序
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<i64> {
        // 驗證後 range_len >= quantity >= 1
        let range_len = (self.max - self.min + 1) as usize;
        let amount = self.quantity as usize;

        let mut numbers: Vec<i64> = rand::seq::index::sample(rng, range_len, amount)
            .into_iter()
            .map(|offset| self.min + offset as i64)
            .collect();
        numbers.sort_unstable();
        numbers
    }
}

/// 在 `[min, max]` 內抽出不重複的數字，參數無效時回傳空陣列
pub fn sample_unique_numbers(min: i64, max: i64, quantity: i64) -> Vec<i64> {
    sample_unique_numbers_with(&mut rand::rng(), min, max, quantity)
}

pub fn sample_unique_numbers_with<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
    quantity: i64,
) -> Vec<i64> {
    match TicketRequest::new(min, max, quantity) {
        Ok(request) => request.draw(rng),
        Err(e) => {
            tracing::debug!("Rejected ticket request: {}", e);
            Vec::new()
        }
    }
}
