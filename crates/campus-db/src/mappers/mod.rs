//! Model to entity mappers
//!
//! Rows carrying enumerated text columns (role, status, target type) convert
//! with `TryFrom`, so a row with an unknown value surfaces as a database
//! error instead of a panic. The rest convert with `From`.

mod campus;
mod daily_update;
mod feedback;
mod profile;
mod reaction;
mod settings;

use campus_core::DomainError;

/// Collect rows into entities, failing on the first unconvertible row
pub fn try_collect<M, E>(rows: Vec<M>) -> Result<Vec<E>, DomainError>
where
    E: TryFrom<M, Error = DomainError>,
{
    rows.into_iter().map(E::try_from).collect()
}

fn corrupt(column: &str, value: &str) -> DomainError {
    DomainError::DatabaseError(format!("unexpected {column} value: {value}"))
}
