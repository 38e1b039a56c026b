//! Record metadata contract.
//!
//! # Responsibility
//! - Tie each domain type to its table name and declarative query metadata.
//!
//! # Invariants
//! - `TABLE` names match the record API tables (`task`, `note`, `folder`).
//! - `FIELDS` lists wire field names, excluding `Id` (always selected).

use crate::model::RecordId;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Server-side sort direction for fetch parameter objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Wire value used in `orderBy` parameter objects.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Default server-side ordering for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSpec {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// Metadata contract implemented by every storable domain type.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Record API table name.
    const TABLE: &'static str;
    /// Wire field names selected on fetch, excluding `Id`.
    const FIELDS: &'static [&'static str];
    /// Default server-side ordering for list fetches.
    const ORDER_BY: OrderSpec;

    /// Current identity; `0` before the store has assigned one.
    fn id(&self) -> RecordId;

    /// Store-only identity assignment during `create`.
    fn set_id(&mut self, id: RecordId);
}

#[cfg(test)]
mod tests {
    use super::SortDirection;

    #[test]
    fn sort_direction_wire_values() {
        assert_eq!(SortDirection::Ascending.as_param(), "ASC");
        assert_eq!(SortDirection::Descending.as_param(), "DESC");
    }
}
