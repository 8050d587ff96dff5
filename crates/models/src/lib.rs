pub mod errors;
pub mod db;
pub mod user;
pub mod service_provider;
pub mod service;
pub mod review;

#[cfg(test)]
mod tests;
