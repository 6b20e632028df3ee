use crate::core::dates::{format_dotted, parse_dotted_date};
use crate::domain::model::{Greeting, UserRecord};
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{DailyKitError, Result};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// 包含今天在內往後看的天數
pub const WINDOW_DAYS: i64 = 7;

/// 指定年份的生日；非閏年的 2/29 改為 3/1
fn anniversary(year: i32, birthday: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

fn roll_off_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

fn required_field<'a>(field: &str, value: &'a Option<String>) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DailyKitError::ValidationError {
            field: field.to_string(),
            value: String::new(),
            reason: "Missing or empty".to_string(),
        }),
    }
}

/// 下一個 (含今天) 生日日期，超出視窗時為 `None`
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let mut candidate = anniversary(today.year(), birthday)?;
    if candidate < today {
        candidate = anniversary(today.year() + 1, birthday)?;
    }

    let offset = (candidate - today).num_days();
    if !(0..=WINDOW_DAYS).contains(&offset) {
        return None;
    }
    Some(candidate)
}

/// 計算單一使用者的祝賀資料，週末改到下週一
pub fn greeting_for(user: &UserRecord, today: NaiveDate) -> Result<Option<Greeting>> {
    let name = required_field("name", &user.name)?;
    let birthday = parse_dotted_date(required_field("birthday", &user.birthday)?)?;

    let Some(date) = next_occurrence(birthday, today) else {
        return Ok(None);
    };
    let date = roll_off_weekend(date).unwrap_or(date);

    Ok(Some(Greeting {
        name: name.to_string(),
        congratulation_date: format_dotted(date),
    }))
}

/// 未來 7 天 (含今天) 內的生日祝賀清單，依日期排序
pub fn upcoming_birthdays(users: &[UserRecord]) -> Vec<Greeting> {
    upcoming_birthdays_on(users, &SystemClock)
}

pub fn upcoming_birthdays_on<C: Clock + ?Sized>(users: &[UserRecord], clock: &C) -> Vec<Greeting> {
    let today = clock.today();

    let mut greetings: Vec<Greeting> = users
        .iter()
        .filter_map(|user| match greeting_for(user, today) {
            Ok(greeting) => greeting,
            Err(e) => {
                tracing::debug!("Skipping user record {:?}: {}", user.name, e);
                None
            }
        })
        .collect();

    // 日期字串固定補零，字典序即時間順序
    greetings.sort_by(|a, b| a.congratulation_date.cmp(&b.congratulation_date));
    greetings
}
