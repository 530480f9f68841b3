// Kernel: shared infrastructure threaded through domain actions

pub mod deps;
pub mod traits;

pub use deps::ServerDeps;
pub use traits::{PasswordHasher, Sha256PasswordHasher};
