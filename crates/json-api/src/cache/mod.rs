//! Cache

pub(crate) mod revalidate;
pub(crate) mod token;
