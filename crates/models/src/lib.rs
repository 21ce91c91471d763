pub mod errors;
pub mod db;
pub mod validation;
pub mod course;
pub mod student;
pub mod message;

#[cfg(test)]
mod tests;
