/// SQL query functions for database operations
///
/// All statements are parameterized; inputs bind positionally and are
/// never interpolated into the statement text.

use crate::db::models::NewMedicine;
use crate::db::Database;
use crate::error::Result;

impl Database {
    /// Append one medicine record
    ///
    /// # Arguments
    /// * `input` - Medicine name, dosage, and reminder time, stored verbatim
    ///
    /// # Returns
    /// * `Ok(())` - Exactly one row was inserted; the generated id is not surfaced
    /// * `Err(MedipalError)` - If acquiring a connection, preparing, or executing fails
    ///
    /// Two calls with identical input append two distinct rows. The medicines
    /// table must already exist; this layer never creates it.
    pub async fn save_medicine(&self, input: NewMedicine) -> Result<()> {
        sqlx::query(
            "INSERT INTO medicines (medicine_name, dosage, reminder_time) VALUES (?, ?, ?)",
        )
        .bind(&input.name)
        .bind(&input.dosage)
        .bind(&input.reminder_time)
        .execute(self.pool())
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;

    async fn live_database() -> Database {
        Database::connect(&DbConfig::default())
            .await
            .expect("test MySQL not reachable")
    }

    async fn count_rows(db: &Database, name: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM medicines WHERE medicine_name = ?")
            .bind(name)
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    #[tokio::test]
    #[ignore = "requires a running MySQL instance with the medicines table"]
    async fn test_save_medicine_appends_one_row() {
        let db = live_database().await;
        let name = "test-paracetamol-one-row";
        let before = count_rows(&db, name).await;

        db.save_medicine(NewMedicine {
            name: name.to_string(),
            dosage: "500mg".to_string(),
            reminder_time: "08:00".to_string(),
        })
        .await
        .unwrap();

        assert_eq!(count_rows(&db, name).await, before + 1);
        db.close().await;
    }

    #[tokio::test]
    #[ignore = "requires a running MySQL instance with the medicines table"]
    async fn test_save_medicine_twice_appends_two_rows() {
        let db = live_database().await;
        let name = "test-ibuprofen-two-rows";
        let before = count_rows(&db, name).await;

        let input = NewMedicine {
            name: name.to_string(),
            dosage: "200mg".to_string(),
            reminder_time: "20:00".to_string(),
        };
        db.save_medicine(input.clone()).await.unwrap();
        db.save_medicine(input).await.unwrap();

        // No uniqueness at this layer. Same input, two rows.
        assert_eq!(count_rows(&db, name).await, before + 2);
        db.close().await;
    }

    #[tokio::test]
    #[ignore = "requires a running MySQL instance with the medicines table"]
    async fn test_save_medicine_accepts_empty_values() {
        let db = live_database().await;

        let result = db
            .save_medicine(NewMedicine {
                name: String::new(),
                dosage: String::new(),
                reminder_time: String::new(),
            })
            .await;

        assert!(result.is_ok());
        db.close().await;
    }
}
