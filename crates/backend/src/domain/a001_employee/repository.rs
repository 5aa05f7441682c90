use contracts::domain::a001_employee::{EmployeeId, EmployeeRecord};
use tokio::sync::RwLock;

/// In-memory list of registered employees
///
/// Lives only as long as the process; nothing is written to disk.
#[derive(Debug, Default)]
pub struct EmployeeRepository {
    records: RwLock<Vec<EmployeeRecord>>,
}

impl EmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return the new total
    pub async fn insert(&self, record: EmployeeRecord) -> usize {
        let mut records = self.records.write().await;
        records.push(record);
        records.len()
    }

    pub async fn get_by_id(&self, id: EmployeeId) -> Option<EmployeeRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    pub async fn list_all(&self) -> Vec<EmployeeRecord> {
        self.records.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_employee::{EmployeeNumber, RegistrationInput};

    fn record(surname: &str, id_number: &str) -> EmployeeRecord {
        EmployeeRecord::new_for_insert(
            RegistrationInput::new("Test", surname, id_number),
            EmployeeNumber::derive(surname, id_number),
        )
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let repo = EmployeeRepository::new();
        let first = record("Doe", "9001015009087");
        let id = first.id;

        assert_eq!(repo.insert(first).await, 1);
        assert_eq!(repo.insert(record("Smith", "8507125800083")).await, 2);

        let found = repo.get_by_id(id).await.map(|r| r.surname);
        assert_eq!(found.as_deref(), Some("Doe"));
        assert_eq!(repo.count().await, 2);
        assert_eq!(repo.list_all().await.len(), 2);
    }

    #[tokio::test]
    async fn test_same_id_number_is_stored_twice() {
        let repo = EmployeeRepository::new();
        repo.insert(record("Doe", "9001015009087")).await;
        repo.insert(record("Doe", "9001015009087")).await;
        assert_eq!(repo.count().await, 2);
    }
}
