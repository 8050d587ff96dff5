//! Auth module: three-layer architecture (domain, repository, service) plus
//! bearer token issue/verification.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod token;

pub use service::AuthService;
pub use token::{Claims, TokenKeys};
