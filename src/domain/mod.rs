pub mod activity;
pub mod category;
pub mod common;
pub mod page;

pub use activity::{Activity, ReturnActivity};
pub use category::ActivityCategory;
pub use common::{NamedEntity, Validate};
pub use page::PageId;
