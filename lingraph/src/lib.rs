pub mod api;
pub mod config;
pub mod links;
pub mod lookup;
pub mod names;
pub mod preview;
pub mod session;

pub use api::ApiServer;
pub use config::AppConfig;
pub use links::browser_url;
pub use lookup::AuthorLookup;
pub use names::NameList;
pub use preview::preview_dot;
pub use session::{QuerySession, SessionStore};
