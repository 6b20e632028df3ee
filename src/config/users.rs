use crate::domain::model::UserRecord;
use crate::utils::error::{DailyKitError, Result};
use std::io::Read;
use std::path::Path;

/// 依副檔名 (`.json` / `.csv`) 讀取使用者清單
pub fn load_users<P: AsRef<Path>>(path: P) -> Result<Vec<UserRecord>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let users = match extension.as_deref() {
        Some("json") => parse_users_json(&std::fs::read_to_string(path)?)?,
        Some("csv") => parse_users_csv(std::fs::File::open(path)?)?,
        _ => {
            return Err(DailyKitError::UnsupportedFormatError {
                path: path.display().to_string(),
            })
        }
    };

    tracing::debug!("Loaded {} user records from {}", users.len(), path.display());
    Ok(users)
}

/// JSON 陣列：`[{"name": "...", "birthday": "YYYY.MM.DD"}, ...]`
pub fn parse_users_json(content: &str) -> Result<Vec<UserRecord>> {
    Ok(serde_json::from_str(content)?)
}

/// CSV，標題列為 `name,birthday`
pub fn parse_users_csv<R: Read>(reader: R) -> Result<Vec<UserRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let mut users: Vec<UserRecord> = Vec::new();
    for record in reader.deserialize::<UserRecord>() {
        users.push(record?);
    }
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_users_json_with_missing_fields() {
        let content = r#"[
            {"name": "John Doe", "birthday": "1985.01.23"},
            {"name": "Jane Smith"},
            {"birthday": "1990.01.27"}
        ]"#;

        let users = parse_users_json(content).unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0], UserRecord::new("John Doe", "1985.01.23"));
        assert_eq!(users[1].birthday, None);
        assert_eq!(users[2].name, None);
    }

    #[test]
    fn test_parse_users_json_rejects_non_array() {
        assert!(matches!(
            parse_users_json(r#"{"name": "x"}"#),
            Err(DailyKitError::JsonError(_))
        ));
    }

    #[test]
    fn test_parse_users_csv() {
        let content = "name,birthday\nJohn Doe,1985.01.23\nNo Date,\n";

        let users = parse_users_csv(content.as_bytes()).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0], UserRecord::new("John Doe", "1985.01.23"));
        assert!(users[1].birthday.as_deref().unwrap_or("").is_empty());
    }

    #[test]
    fn test_parse_users_csv_short_row() {
        let content = "name,birthday\nAlice,2001.03.04\nBob\n";

        let users = parse_users_csv(content.as_bytes()).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0], UserRecord::new("Alice", "2001.03.04"));
        assert_eq!(users[1].name.as_deref(), Some("Bob"));
        assert_eq!(users[1].birthday, None);
    }

    #[test]
    fn test_load_users_unsupported_extension() {
        let err = load_users("users.yaml").unwrap_err();
        assert!(matches!(err, DailyKitError::UnsupportedFormatError { .. }));
    }
}
