use crate::domain::entities::Customer;
use crate::domain::errors::CustomerError;
use crate::domain::ports::CustomerRepository;

// Stores a customer, replacing any existing record with the same id.
pub struct CreateCustomerUseCase<R> {
    pub repository: R,
}

impl<R> CreateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub async fn execute(&self, customer: Customer) -> Result<(), CustomerError> {
        self.repository
            .insert(customer)
            .await
            .map_err(|_| CustomerError::StorageFailure)
    }
}
