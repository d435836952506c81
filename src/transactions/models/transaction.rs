use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    app::util::time, transactions::dtos::create_transaction_dto::CreateTransactionDto,
};

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub base_type: String,
    pub amount: f64,
    pub updated_at: i64,
    pub created_at: i64,
}

impl Transaction {
    pub fn new(dto: &CreateTransactionDto) -> Self {
        let current_time = time::current_time_in_secs() as i64;

        return Self {
            id: Uuid::new_v4().to_string(),
            description: dto.description.to_string(),
            base_type: dto.base_type.to_string(),
            amount: dto.amount,
            updated_at: current_time,
            created_at: current_time,
        };
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::transactions::dtos::create_transaction_dto::CreateTransactionDto;

    use super::Transaction;

    fn coffee_dto() -> CreateTransactionDto {
        CreateTransactionDto {
            description: "coffee".to_string(),
            base_type: "expense".to_string(),
            amount: 4.5,
        }
    }

    #[test]
    fn new_copies_input_fields() {
        let dto = coffee_dto();
        let transaction = Transaction::new(&dto);

        assert_eq!(transaction.description, "coffee");
        assert_eq!(transaction.base_type, "expense");
        assert_eq!(transaction.amount, 4.5);
    }

    #[test]
    fn new_generates_distinct_uuid_ids() {
        let dto = coffee_dto();
        let first = Transaction::new(&dto);
        let second = Transaction::new(&dto);

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
    }

    #[test]
    fn new_stamps_matching_timestamps() {
        let transaction = Transaction::new(&coffee_dto());

        assert!(transaction.created_at > 0);
        assert_eq!(transaction.created_at, transaction.updated_at);
    }

    #[test]
    fn serializes_the_wire_fields() {
        let transaction = Transaction::new(&coffee_dto());
        let value = serde_json::to_value(&transaction).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 6);
        assert_eq!(value["description"], "coffee");
        assert_eq!(value["base_type"], "expense");
        assert_eq!(value["amount"], 4.5);
        assert!(value["id"].is_string());
        assert!(value["created_at"].is_i64());
        assert!(value["updated_at"].is_i64());
    }
}
