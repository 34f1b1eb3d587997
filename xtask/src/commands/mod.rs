//! Command families routed from [`crate::cli`].

pub mod layout;
