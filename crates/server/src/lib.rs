//! HTTP surface of the marketplace: resource routes dispatched on verb and
//! `id` presence, a bearer-token gate on mutating verbs, and account routes.

pub mod auth_gate;
pub mod dispatch;
pub mod errors;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
pub use state::AppState;
