use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransactionDto {
    #[validate(length(
        min = 1,
        max = 512,
        message = "description must be between 1 and 512 characters."
    ))]
    pub description: String,
    #[validate(length(
        min = 1,
        max = 64,
        message = "base_type must be between 1 and 64 characters."
    ))]
    pub base_type: String,
    pub amount: f64,
}
