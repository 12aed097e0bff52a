//! # Alert model: categories, priorities, and the validated alert builder.

mod alert;
mod category;
mod priority;
mod record;

pub use alert::{Alert, AlertBuilder};
pub use category::Category;
pub use priority::Priority;
pub use record::AlertRecord;
