pub mod config;
pub mod error;
pub mod events;
pub mod pagination;
pub mod request;
pub mod response;
pub mod share_link;
pub mod status;
pub mod view_state;

pub use error::SearchError;
pub use events::{reduce, Command, SearchEvent};
pub use pagination::PageItem;
pub use request::{SearchRequest, ROWS_PER_PAGE};
pub use response::{DecodeMode, SearchResponse, TrademarkRecord};
pub use share_link::ShareParams;
pub use status::{StatusFilter, StatusSet, StatusType};
pub use view_state::{PendingSearch, RequestTicket, ViewMode, ViewState};
