/// Authorization module for NeighborNews
///
/// Provides a fluent API for authorization checks in domain actions:
///
/// ```rust,ignore
/// use crate::common::auth::{Actor, Capability};
///
/// // In an action:
/// actor.can(Capability::Moderate).check()?;
/// ```
///
/// This pattern keeps authorization logic in the domain layer where it
/// belongs, not in the HTTP handler layer. The checks are pure predicates:
/// they mutate nothing and a failed check performs no side effect.
mod capability;
mod role;

pub use capability::{Actor, Capability, CapabilityCheck};
pub use role::Role;
