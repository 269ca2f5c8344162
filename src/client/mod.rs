// HTTP client for the books-catalog service, split the usual way: the
// `HttpClient` trait is the mockable seam, `ReqwestClientWrapper` the real
// implementation.

pub mod implementation;
pub mod interface;
pub mod types;
pub mod util;

#[cfg(test)]
mod client_tests;

pub use self::implementation::ReqwestClientWrapper;
pub use self::interface::HttpClient;
pub use self::types::{
    BookRecord, HealthStatus, LoginPayload, RefreshedAccess, RegisterPayload, TokenPair,
};
