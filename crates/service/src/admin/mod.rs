//! Admin module: three-layer architecture (domain, repository, service).
//!
//! Courses are fully managed; students are read-only; messages can be read and
//! submitted. `seed` fills empty stores with sample data at startup.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;
pub mod seed;

pub use service::AdminService;
