use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{DailyKitError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

pub const ISO_FORMAT: &str = "%Y-%m-%d";
pub const DOTTED_FORMAT: &str = "%Y.%m.%d";

// chrono 的 %Y 接受任意位數與正負號，年份必須剛好四位數
static ISO_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-[0-9]{1,2}-[0-9]{1,2}$").expect("static regex is valid")
});
static DOTTED_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})\.[0-9]{1,2}\.[0-9]{1,2}$").expect("static regex is valid")
});

fn parse_with(value: &str, shape: &Regex, format: &'static str) -> Result<NaiveDate> {
    let invalid = || DailyKitError::InvalidDateError {
        value: value.to_string(),
        format,
    };

    let year = shape
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(invalid)?;
    if year == "0000" {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, format).map_err(|_| invalid())
}

/// 解析 `YYYY-MM-DD`
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    parse_with(value, &ISO_SHAPE, ISO_FORMAT)
}

/// 解析 `YYYY.MM.DD`
pub fn parse_dotted_date(value: &str) -> Result<NaiveDate> {
    parse_with(value, &DOTTED_SHAPE, DOTTED_FORMAT)
}

/// 輸出固定補零的 `YYYY.MM.DD`，字串排序即為時間排序
pub fn format_dotted(date: NaiveDate) -> String {
    date.format(DOTTED_FORMAT).to_string()
}

/// 今天與指定日期 (`YYYY-MM-DD`) 相差的天數
///
/// 過去的日期為正數，未來為負數。格式錯誤或沒有輸入時回傳 0。
pub fn days_since(date: Option<&str>) -> i64 {
    days_since_on(date, &SystemClock)
}

pub fn days_since_on<C: Clock + ?Sized>(date: Option<&str>, clock: &C) -> i64 {
    let Some(raw) = date else {
        tracing::debug!("days_since called without a date");
        return 0;
    };

    match parse_iso_date(raw) {
        Ok(given) => (clock.today() - given).num_days(),
        Err(e) => {
            tracing::debug!("days_since fallback to 0: {}", e);
            0
        }
    }
}
