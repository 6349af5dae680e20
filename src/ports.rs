pub mod api;
pub mod page;
pub mod time;

pub use api::ActivityApi;
pub use page::Page;
pub use time::TimeProvider;
