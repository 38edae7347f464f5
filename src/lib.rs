//! Domain core for an educational blogging platform.
//!
//! Pure business logic: content taxonomy, the post publication workflow,
//! newsletter subscriptions, and the shared validation kernel. Storage and
//! scheduling are collaborator contracts, not implementations.

pub mod domain;
pub mod infrastructure;
