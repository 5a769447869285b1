//! Persistence gateway.
//!
//! [`ContactStore`] is the interface the HTTP layer depends on. The default
//! implementation is [`AnyStore`], a thin wrapper around an [`sqlx::AnyPool`]
//! whose driver is chosen by the connection URL.
//!
//! All trait methods use `impl Future` in their signatures, so no extra
//! `async-trait` crate is required.

pub mod contact;
pub mod dao;

pub use contact::ContactStore;
pub use dao::NewContactMessage;

use std::str::FromStr;

use sqlx::any::{AnyConnectOptions, AnyPoolOptions};

use crate::db::Dialect;

#[derive(Clone, Debug)]
pub struct AnyStore {
    pool: sqlx::AnyPool,
    dialect: Dialect,
}

impl AnyStore {
    /// Open a connection pool for `url`.
    ///
    /// `url` is any sqlx-compatible SQLite or MySQL URL, e.g.
    /// `"sqlite://contact.db?mode=rwc"`, `"mysql://user:pw@host/site"` or
    /// `"sqlite::memory:"` for tests. The schema is not touched here; call
    /// [`ContactStore::ensure_schema`] before serving requests.
    pub async fn connect(
        dialect: Dialect,
        url: &str,
        max_connections: u32,
    ) -> Result<Self, sqlx::Error> {
        sqlx::any::install_default_drivers();
        let options = AnyConnectOptions::from_str(url)?;
        let pool = AnyPoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;
        Ok(Self { pool, dialect })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}
