pub mod pager;
pub mod result_grid;
pub mod result_list;
pub mod search_bar;
pub mod status_filter;
pub mod suggestions;
pub mod summary;

pub use pager::Pager;
pub use result_grid::ResultGrid;
pub use result_list::{ResultList, TrademarkRow};
pub use search_bar::SearchBar;
pub use status_filter::StatusFilterPanel;
pub use suggestions::SearchSuggestions;
pub use summary::SearchResultsSummary;
