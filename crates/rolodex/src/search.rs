//! Filtered search over the customer collection.
//!
//! The engine is a pure, stable filter: it takes the collection, a query,
//! and a field scope, and returns the matching subset in collection order.
//! It applies no minimum-length gating; that is a presentation-layer policy
//! (see `search.min_query_length` in the configuration).

use std::fmt;

use crate::customer::Customer;
use crate::format::strip_non_digits;

/// Which field(s) a search is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// Match if any per-field rule matches.
    #[default]
    All,
    /// Case-insensitive substring match on the name.
    Name,
    /// Substring match against the phone's digit-stripped form.
    Phone,
    /// Substring match against the ID's digit-stripped form.
    NationalId,
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Name => write!(f, "name"),
            Self::Phone => write!(f, "phone"),
            Self::NationalId => write!(f, "national_id"),
        }
    }
}

/// Filter `customers` down to those matching `query` under `scope`.
///
/// Matching is case-insensitive substring on names and raw-substring on the
/// digit-stripped phone and national ID values; customers with no national
/// ID never match the ID rule. The result preserves collection order.
#[must_use]
pub fn search<'a>(customers: &'a [Customer], query: &str, scope: SearchScope) -> Vec<&'a Customer> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();

    customers
        .iter()
        .filter(|customer| match scope {
            SearchScope::Name => matches_name(customer, &query_lower),
            SearchScope::Phone => matches_phone(customer, query),
            SearchScope::NationalId => matches_national_id(customer, query),
            SearchScope::All => {
                matches_name(customer, &query_lower)
                    || matches_phone(customer, query)
                    || matches_national_id(customer, query)
            }
        })
        .collect()
}

fn matches_name(customer: &Customer, query_lower: &str) -> bool {
    customer.name.to_lowercase().contains(query_lower)
}

fn matches_phone(customer: &Customer, query: &str) -> bool {
    strip_non_digits(&customer.phone).contains(query)
}

fn matches_national_id(customer: &Customer, query: &str) -> bool {
    customer
        .national_id
        .as_deref()
        .is_some_and(|id| strip_non_digits(id).contains(query))
}
