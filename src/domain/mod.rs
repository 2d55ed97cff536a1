//! htime のドメイン型（型と不変条件）

pub mod command;
pub mod date;
pub mod event;
pub mod fetch_error;
pub mod target;

pub use command::HtimeCommand;
pub use date::parse_date_header;
pub use event::ProbeEvent;
pub use fetch_error::FetchError;
pub use target::TargetUrl;
