mod auth;
mod session;

pub use auth::TokenManager;
pub use session::SessionError;
pub use session::SessionManager;
