use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::model::Link;
use libsql::{Builder, Connection};

const SCHEMA: &str = include_str!("migrations/001_schema.sql");

fn is_remote(url: &str) -> bool {
    url.starts_with("libsql://") || url.starts_with("http://") || url.starts_with("https://")
}

/// Accessor for the link store. Holds the single connection handle shared by
/// all request handlers; uniqueness of `price` is enforced by the store
/// itself, never pre-checked here.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub async fn connect(cfg: &Config) -> anyhow::Result<Self> {
        let db = if is_remote(&cfg.database_url) {
            tracing::info!("[db] connecting to remote database");
            Builder::new_remote(
                cfg.database_url.clone(),
                cfg.auth_token.clone().unwrap_or_default(),
            )
            .build()
            .await?
        } else {
            Builder::new_local(&cfg.database_url).build().await?
        };

        let conn = db.connect()?;
        conn.query("SELECT 1", ()).await?;
        conn.execute_batch(SCHEMA).await?;

        Ok(Database { conn })
    }

    pub async fn list_links(&self) -> Result<Vec<Link>> {
        let mut rows = self
            .conn
            .query("SELECT id, link, price FROM links ORDER BY price ASC", ())
            .await?;

        let mut links: Vec<Link> = vec![];
        while let Some(row) = rows.next().await? {
            links.push(Link {
                id: row.get(0)?,
                link: row.get(1)?,
                price: row.get(2)?,
            });
        }

        Ok(links)
    }

    pub async fn create_link(&self, link: &str, price: f64) -> Result<Link> {
        let mut rows = self
            .conn
            .query(
                "INSERT INTO links (link, price) VALUES (?, ?) RETURNING id",
                libsql::params![link, price],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Link {
                id: row.get(0)?,
                link: link.to_owned(),
                price,
            })
        } else {
            Err(StoreError::Query("insert returned no row".to_owned()))
        }
    }

    /// Deletes the link with exactly this price. `Ok(None)` when no record
    /// matched.
    pub async fn delete_by_price(&self, price: f64) -> Result<Option<Link>> {
        let mut rows = self
            .conn
            .query(
                "DELETE FROM links WHERE price = ? RETURNING id, link, price",
                libsql::params![price],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Link {
                id: row.get(0)?,
                link: row.get(1)?,
                price: row.get(2)?,
            }))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> Database {
        let cfg = Config {
            database_url: ":memory:".to_owned(),
            auth_token: None,
            port: 0,
        };
        Database::connect(&cfg).await.expect("in-memory store")
    }

    #[tokio::test]
    async fn create_then_list_returns_the_record() {
        let db = test_db().await;

        let created = db.create_link("http://a", 5.0).await.unwrap();
        assert_eq!(created.link, "http://a");
        assert_eq!(created.price, 5.0);

        let links = db.list_links().await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].id, created.id);
        assert_eq!(links[0].link, "http://a");
        assert_eq!(links[0].price, 5.0);
    }

    #[tokio::test]
    async fn duplicate_price_is_rejected_by_the_store() {
        let db = test_db().await;

        db.create_link("http://a", 5.0).await.unwrap();
        let err = db.create_link("http://b", 5.0).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicatePrice));

        // the losing insert must not leave a second record behind
        let links = db.list_links().await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].link, "http://a");
    }

    #[tokio::test]
    async fn list_is_sorted_by_price_regardless_of_insertion_order() {
        let db = test_db().await;

        db.create_link("http://c", 9.5).await.unwrap();
        db.create_link("http://a", 0.5).await.unwrap();
        db.create_link("http://b", 3.0).await.unwrap();

        let prices: Vec<f64> = db
            .list_links()
            .await
            .unwrap()
            .iter()
            .map(|l| l.price)
            .collect();
        assert_eq!(prices, vec![0.5, 3.0, 9.5]);
    }

    #[tokio::test]
    async fn zero_is_a_valid_price() {
        let db = test_db().await;

        let created = db.create_link("http://free", 0.0).await.unwrap();
        assert_eq!(created.price, 0.0);

        let links = db.list_links().await.unwrap();
        assert_eq!(links.len(), 1);
    }

    #[tokio::test]
    async fn delete_returns_the_removed_record() {
        let db = test_db().await;

        db.create_link("http://a", 5.0).await.unwrap();
        db.create_link("http://b", 7.0).await.unwrap();

        let deleted = db.delete_by_price(5.0).await.unwrap().unwrap();
        assert_eq!(deleted.link, "http://a");
        assert_eq!(deleted.price, 5.0);

        let links = db.list_links().await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].link, "http://b");
    }

    #[tokio::test]
    async fn delete_of_unknown_price_is_none_and_leaves_store_unchanged() {
        let db = test_db().await;

        db.create_link("http://a", 5.0).await.unwrap();
        assert!(db.delete_by_price(6.0).await.unwrap().is_none());
        assert_eq!(db.list_links().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn repeated_delete_is_none_the_second_time() {
        let db = test_db().await;

        db.create_link("http://a", 5.0).await.unwrap();
        assert!(db.delete_by_price(5.0).await.unwrap().is_some());
        assert!(db.delete_by_price(5.0).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn price_is_free_again_after_delete() {
        let db = test_db().await;

        db.create_link("http://a", 5.0).await.unwrap();
        db.delete_by_price(5.0).await.unwrap();
        db.create_link("http://b", 5.0).await.unwrap();

        let links = db.list_links().await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].link, "http://b");
    }
}
