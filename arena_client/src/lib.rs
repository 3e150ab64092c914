pub mod connection;
pub mod server;
pub mod session;

pub use connection::{Connection, ConnectionError};
pub use reqwest::Url;
pub use server::ArenaServer;
pub use session::{Phase, Registration, Session, SessionConfig};
