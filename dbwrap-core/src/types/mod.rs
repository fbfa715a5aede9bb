//! Data model: values, schemas, assignments, constraints, statements.

pub mod assignment;
pub mod constraint;
pub mod schema;
pub mod statement;
pub mod value;
