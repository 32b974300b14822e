use crate::domain::entities::Customer;
use crate::domain::errors::CustomerError;
use crate::domain::ports::CustomerRepository;

// Replaces an existing customer; the path id wins over any id in the payload.
pub struct UpdateCustomerUseCase<R> {
    pub repository: R,
}

impl<R> UpdateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub async fn execute(&self, id: u32, customer: Customer) -> Result<(), CustomerError> {
        let replaced = self
            .repository
            .replace(Customer { id, ..customer })
            .await
            .map_err(|_| CustomerError::StorageFailure)?;

        if replaced {
            Ok(())
        } else {
            Err(CustomerError::NotFound(id))
        }
    }
}
