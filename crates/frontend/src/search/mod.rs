pub mod api;
pub mod page;
pub mod ui;

pub use api::TrademarkSearchClient;
pub use page::SearchPage;
