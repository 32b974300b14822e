use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::Customer;
use crate::domain::ports::CustomerRepository;

pub(crate) type CustomerTable = Arc<Mutex<BTreeMap<u32, Customer>>>;

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub get: bool,
    pub search: bool,
    pub insert: bool,
    pub replace: bool,
    pub remove: bool,
}

// Fake repository that records writes and can simulate storage failures.
#[derive(Clone)]
pub(crate) struct RecordingRepository {
    customers: CustomerTable,
    failures: FailureFlags,
}

impl RecordingRepository {
    pub(crate) fn new() -> Self {
        Self {
            customers: Arc::new(Mutex::new(BTreeMap::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        let repository = Self::new();
        for customer in customers {
            repository.insert_test_customer(customer);
        }
        repository
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_customer(&self, customer: Customer) {
        let mut guard = self.customers.lock().expect("customers mutex poisoned");
        guard.insert(customer.id, customer);
    }

    pub(crate) fn get_test_customer(&self, id: u32) -> Option<Customer> {
        let guard = self.customers.lock().expect("customers mutex poisoned");
        guard.get(&id).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.customers.lock().expect("customers mutex poisoned").len()
    }
}

#[async_trait]
impl CustomerRepository for RecordingRepository {
    async fn get(&self, id: u32) -> Result<Option<Customer>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }

        let guard = self.customers.lock().expect("customers mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    async fn search(&self, name_filter: &str) -> Result<Vec<Customer>, String> {
        if self.failures.search {
            return Err("search failed".to_string());
        }

        let needle = name_filter.to_lowercase();
        let guard = self.customers.lock().expect("customers mutex poisoned");
        Ok(guard
            .values()
            .filter(|customer| customer.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn insert(&self, customer: Customer) -> Result<(), String> {
        if self.failures.insert {
            return Err("insert failed".to_string());
        }

        let mut guard = self.customers.lock().expect("customers mutex poisoned");
        guard.insert(customer.id, customer);
        Ok(())
    }

    async fn replace(&self, customer: Customer) -> Result<bool, String> {
        if self.failures.replace {
            return Err("replace failed".to_string());
        }

        let mut guard = self.customers.lock().expect("customers mutex poisoned");
        match guard.get_mut(&customer.id) {
            Some(existing) => {
                *existing = customer;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: u32) -> Result<bool, String> {
        if self.failures.remove {
            return Err("remove failed".to_string());
        }

        let mut guard = self.customers.lock().expect("customers mutex poisoned");
        Ok(guard.remove(&id).is_some())
    }
}
