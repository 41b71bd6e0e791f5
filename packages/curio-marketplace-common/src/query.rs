use cosmwasm_schema::cw_serde;
use cosmwasm_std::Order;
use cw_storage_plus::{Bound, PrimaryKey};

pub const DEFAULT_QUERY_LIMIT: u32 = 10;
pub const MAX_QUERY_LIMIT: u32 = 100;

/// Pagination controls accepted by every list query.
#[cw_serde]
#[derive(Default)]
pub struct QueryOptions<T> {
    /// Scan keys in descending order, ascending when unset
    pub descending: Option<bool>,
    /// Page size, clamped to [`MAX_QUERY_LIMIT`]
    pub limit: Option<u32>,
    /// Exclusive cursor, the scan resumes after this key
    pub start_after: Option<T>,
}

/// Range arguments for a storage scan, resolved from [`QueryOptions`].
pub struct QueryBounds<'a, K: PrimaryKey<'a>> {
    pub limit: usize,
    pub order: Order,
    pub min: Option<Bound<'a, K>>,
    pub max: Option<Bound<'a, K>>,
}

impl<T> QueryOptions<T> {
    /// Resolves the options into scan bounds. `key_fn` maps the cursor to the
    /// storage key the scan resumes after.
    pub fn resolve<'a, K: PrimaryKey<'a>>(
        self,
        key_fn: impl FnOnce(T) -> K,
    ) -> QueryBounds<'a, K> {
        let limit = self
            .limit
            .unwrap_or(DEFAULT_QUERY_LIMIT)
            .min(MAX_QUERY_LIMIT) as usize;

        let order = match self.descending {
            Some(true) => Order::Descending,
            _ => Order::Ascending,
        };

        let cursor = self
            .start_after
            .map(|offset| Bound::exclusive(key_fn(offset)));

        let (min, max) = match order {
            Order::Ascending => (cursor, None),
            Order::Descending => (None, cursor),
        };

        QueryBounds {
            limit,
            order,
            min,
            max,
        }
    }
}
