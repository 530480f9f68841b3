//! Identity domain: registered accounts and their roles.
//!
//! Sessions themselves live in `server::auth`; this domain owns the user
//! records and the register/login/current-user actions.

pub mod actions;
pub mod models;
pub mod store;

pub use models::User;
pub use store::UserStore;
