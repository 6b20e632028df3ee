use regex::Regex;
use std::sync::LazyLock;

const DEFAULT_PREFIX: &str = "+38";
const UA_COUNTRY_DIGITS: &str = "380";

static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\D+").expect("static regex is valid"));

/// 將電話號碼正規化為 `+` 加上純數字
///
/// - 原始字串 (去除前後空白) 以 `+` 開頭：保留使用者給的國碼
/// - 數字以 `380` 開頭：只補 `+`
/// - 其他情況：補上 `+38`
pub fn normalize_phone(phone: Option<&str>) -> String {
    let Some(phone) = phone else {
        return DEFAULT_PREFIX.to_string();
    };

    let raw = phone.trim();
    let digits = NON_DIGITS.replace_all(raw, "");

    if raw.starts_with('+') || digits.starts_with(UA_COUNTRY_DIGITS) {
        format!("+{}", digits)
    } else {
        format!("{}{}", DEFAULT_PREFIX, digits)
    }
}
