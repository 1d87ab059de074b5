pub mod error_code;
pub mod export;
pub mod pagination;
pub mod response;

pub use error_code::ErrorCode;
pub use export::ExportParams;
pub use pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use response::ApiResponse;
