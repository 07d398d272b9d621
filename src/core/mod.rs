pub mod engine;

pub use crate::domain::model::IpLookup;
pub use crate::domain::ports::{ConfigProvider, UserDirectory};
pub use crate::utils::error::Result;
