pub mod create_customer;
pub mod delete_customer;
pub mod get_customer;
pub mod search_customers;
pub mod update_customer;

#[cfg(test)]
pub(crate) mod test_support;
