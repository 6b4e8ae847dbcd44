mod delete;
mod serve;
mod session;
mod upload;

pub use delete::run_delete;
pub use serve::run_serve;
pub use session::run_session;
pub use upload::run_upload;
