use crate::config::users::load_users;
use crate::config::{CliConfig, Command};
use crate::core::birthdays::upcoming_birthdays_on;
use crate::core::dates::{days_since_on, parse_iso_date};
use crate::core::phone::normalize_phone;
use crate::domain::model::{Greeting, TicketRequest};
use crate::domain::ports::{Clock, FixedClock, SystemClock};
use anyhow::Context;

/// 依 `--today` 決定日期來源
pub fn resolve_clock(today: Option<&str>) -> anyhow::Result<Box<dyn Clock>> {
    match today {
        Some(raw) => {
            let date = parse_iso_date(raw).context("Invalid --today value")?;
            tracing::debug!("Using fixed date {}", date);
            Ok(Box::new(FixedClock(date)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// 執行子命令並回傳要印到 stdout 的內容
pub fn run(config: &CliConfig) -> anyhow::Result<String> {
    let clock = resolve_clock(config.today.as_deref())?;

    match &config.command {
        Command::DaysSince { date } => Ok(days_since_on(Some(date.as_str()), &*clock).to_string()),
        Command::Ticket { min, max, quantity } => {
            let numbers = match TicketRequest::from_raw(min, max, quantity) {
                Ok(request) => request.draw(&mut rand::rng()),
                Err(e) => {
                    tracing::warn!("⚠️ Invalid ticket request: {}", e);
                    Vec::new()
                }
            };
            Ok(numbers
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" "))
        }
        Command::Phone { phones } => Ok(phones
            .iter()
            .map(|phone| normalize_phone(Some(phone.as_str())))
            .collect::<Vec<_>>()
            .join("\n")),
        Command::Birthdays { users, json } => {
            let records = load_users(users)
                .with_context(|| format!("Failed to load users from '{}'", users.display()))?;
            let greetings = upcoming_birthdays_on(&records, &*clock);
            tracing::info!(
                "🎂 {} of {} users have a birthday coming up",
                greetings.len(),
                records.len()
            );
            render_greetings(&greetings, *json)
        }
    }
}

fn render_greetings(greetings: &[Greeting], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(greetings)?);
    }

    Ok(greetings
        .iter()
        .map(|g| format!("{}: {}", g.name, g.congratulation_date))
        .collect::<Vec<_>>()
        .join("\n"))
}
