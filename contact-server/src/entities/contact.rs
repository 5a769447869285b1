use crate::entities::{AnyStore, dao::NewContactMessage};
use std::future::Future;

pub trait ContactStore: Send + Sync + 'static {
    /// Create `contact_messages` if it does not exist yet.
    fn ensure_schema(&self) -> impl Future<Output = Result<(), sqlx::Error>> + Send;

    /// Insert one submission and return the store-assigned id.
    fn insert_contact(
        &self,
        message: NewContactMessage,
    ) -> impl Future<Output = Result<i64, sqlx::Error>> + Send;

    /// Round-trip a trivial statement to check the store is reachable.
    fn ping(&self) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
}

impl ContactStore for AnyStore {
    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(self.dialect.create_contact_table())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert_contact(&self, message: NewContactMessage) -> Result<i64, sqlx::Error> {
        // The generated id is per-connection state, so read it back on the
        // connection that ran the insert.
        let mut conn = self.pool.acquire().await?;
        sqlx::query("INSERT INTO contact_messages (name, email, message) VALUES (?, ?, ?)")
            .bind(message.name.as_str())
            .bind(message.email.as_str())
            .bind(message.message.as_str())
            .execute(&mut *conn)
            .await?;
        let (id,): (i64,) = sqlx::query_as(self.dialect.last_insert_id())
            .fetch_one(&mut *conn)
            .await?;
        Ok(id)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entities::test_support::{close, memory_store, rows};

    fn ana() -> NewContactMessage {
        NewContactMessage {
            name: "Ana".into(),
            email: "a@x.com".into(),
            message: "Hi".into(),
        }
    }

    #[tokio::test]
    async fn insert_stores_exact_values_with_assigned_id_and_timestamp() {
        let store = memory_store().await;

        let id = store.insert_contact(ana()).await.unwrap();
        assert_eq!(id, 1);

        let saved = rows(&store).await;
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, 1);
        assert_eq!(saved[0].name, "Ana");
        assert_eq!(saved[0].email, "a@x.com");
        assert_eq!(saved[0].message, "Hi");
        assert!(!saved[0].created_at.is_empty());
    }

    #[tokio::test]
    async fn same_payload_twice_yields_two_distinct_rows() {
        let store = memory_store().await;

        let first = store.insert_contact(ana()).await.unwrap();
        let second = store.insert_contact(ana()).await.unwrap();
        assert_eq!((first, second), (1, 2));

        let saved = rows(&store).await;
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].id, first);
        assert_eq!(saved[1].id, second);
    }

    #[tokio::test]
    async fn values_are_bound_not_interpolated() {
        let store = memory_store().await;
        let hostile = NewContactMessage {
            name: "Robert'); DROP TABLE contact_messages;--".into(),
            email: "b@x.com".into(),
            message: "?".into(),
        };

        store.insert_contact(hostile.clone()).await.unwrap();

        let saved = rows(&store).await;
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, hostile.name);
        assert_eq!(saved[0].message, "?");
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent_and_keeps_rows() {
        let store = memory_store().await;
        store.insert_contact(ana()).await.unwrap();

        store.ensure_schema().await.unwrap();
        store.ensure_schema().await.unwrap();

        let saved = rows(&store).await;
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Ana");
    }

    #[tokio::test]
    async fn closed_store_fails_insert_and_ping() {
        let store = memory_store().await;
        close(&store).await;

        assert!(store.insert_contact(ana()).await.is_err());
        assert!(store.ping().await.is_err());
    }
}
