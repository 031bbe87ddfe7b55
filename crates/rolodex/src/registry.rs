//! Session-level customer registry.
//!
//! The [`Registry`] owns the in-memory collection and its backing store:
//! records enter only through the validate/format/append pipeline and leave
//! only through explicit removal. Persistence is write-through; append (or
//! remove) plus persist form one logical transaction, so the in-memory
//! collection never runs ahead of storage.

use std::path::Path;

use tracing::{debug, info};

use crate::customer::{Customer, CustomerDraft};
use crate::error::{Error, Result};
use crate::format::{format_national_id, format_phone};
use crate::search::{self, SearchScope};
use crate::store::JsonStore;
use crate::validate::validate_customer;

/// The customer registry for one session.
#[derive(Debug)]
pub struct Registry {
    store: JsonStore,
    customers: Vec<Customer>,
}

impl Registry {
    /// Open the registry, loading the collection from the store once.
    #[must_use]
    pub fn open(store: JsonStore) -> Self {
        let customers = store.load();
        debug!("Loaded {} customer(s)", customers.len());
        Self { store, customers }
    }

    /// Register a new customer.
    ///
    /// Validates the draft, canonicalizes the phone and national ID into
    /// their display forms, appends the record, and persists the full
    /// collection. If the persist fails, the append is rolled back so the
    /// record is not considered registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCustomer`] with the per-field report when
    /// validation fails, or a storage error when the write fails. Neither
    /// leaves the collection modified.
    pub fn add(&mut self, draft: &CustomerDraft) -> Result<&Customer> {
        let report = validate_customer(draft);
        if !report.is_valid() {
            return Err(Error::InvalidCustomer(report));
        }

        let national_id = draft
            .national_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(format_national_id);

        let customer = Customer::new(
            draft.name.trim().to_string(),
            draft.address.trim().to_string(),
            format_phone(draft.phone.trim()),
            national_id,
        );

        self.customers.push(customer);
        if let Err(e) = self.store.save(&self.customers) {
            self.customers.pop();
            return Err(e);
        }

        let stored = self.customers.last().expect("record appended above");
        info!("Registered customer {} ({})", stored.id, stored.name);
        Ok(stored)
    }

    /// Remove a customer by ID, re-persisting the full collection.
    ///
    /// Returns `false` when no record has the given ID. A failed persist
    /// rolls the removal back, same as for [`Registry::add`].
    ///
    /// # Errors
    ///
    /// Returns a storage error when the write fails.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.customers.iter().position(|c| c.id == id) else {
            return Ok(false);
        };

        let removed = self.customers.remove(index);
        if let Err(e) = self.store.save(&self.customers) {
            self.customers.insert(index, removed);
            return Err(e);
        }

        info!("Removed customer {id}");
        Ok(true)
    }

    /// All customers, in registration order.
    #[must_use]
    pub fn all(&self) -> &[Customer] {
        &self.customers
    }

    /// Number of registered customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// True when the registry holds no customers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Search the collection. See [`search::search`] for matching rules.
    #[must_use]
    pub fn search(&self, query: &str, scope: SearchScope) -> Vec<&Customer> {
        search::search(&self.customers, query, scope)
    }

    /// Path to the backing store file.
    #[must_use]
    pub fn store_path(&self) -> &Path {
        self.store.path()
    }
}
