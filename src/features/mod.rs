//! Feature modules pairing API clients with their request/response types.

pub(crate) mod verification;
