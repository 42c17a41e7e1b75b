pub mod evaluator;
pub mod notice;
pub mod services;
pub mod session;
pub mod store;

pub use notice::{Notice, NoticeLevel};
pub use session::SessionContext;
pub use store::{RecordStore, StoreState};
