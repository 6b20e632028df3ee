pub mod birthdays;
pub mod dates;
pub mod phone;
pub mod ticket;

pub use crate::domain::model::{Greeting, TicketRequest, UserRecord};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::Result;
