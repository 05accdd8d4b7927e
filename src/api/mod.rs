pub mod error;
pub mod report;
pub mod route;

pub use error::ApiError;
pub use report::render_report;
pub use route::create_router;
