#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::settings::Settings;
pub use crate::core::birthdays::{upcoming_birthdays, upcoming_birthdays_on};
pub use crate::core::dates::{days_since, days_since_on};
pub use crate::core::phone::normalize_phone;
pub use crate::core::ticket::{sample_unique_numbers, sample_unique_numbers_with};
pub use crate::domain::model::{Greeting, TicketRequest, UserRecord};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::{DailyKitError, Result};
