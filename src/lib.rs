pub mod account;
pub mod cache;
pub mod config;
pub mod driver;
pub mod error;
pub mod pan123;
pub mod path;
pub mod transport;
pub mod types;

pub use account::{Account, AccountStore, MemoryAccountStore, NoAccountStore};
pub use cache::{DirectoryCache, MemoryCache, NoCache};
pub use config::Pan123Config;
pub use driver::Driver;
pub use error::{DriverError, Result};
pub use pan123::{Pan123Driver, Pan123File};
pub use transport::{HttpRequest, ReqwestTransport, Transport};
pub use types::{File, FileType};
