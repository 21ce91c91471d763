//! Service layer providing the institute admin operations on top of models.
//! - Separates business rules (validation, existence checks) from data access.
//! - Persistence is an injected `Repository<T>`; SeaORM and in-memory backends ship here.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod admin;
#[cfg(test)]
pub mod test_support;
