//! SQLite persistence.
//!
//! A single connection is shared behind a mutex. Handlers hand their database
//! work to actix's blocking pool through [`Db::run`]; tests and startup code
//! call [`Db::with`] directly.

pub mod accounts;
pub mod assignments;
pub mod children;
pub mod intake_requests;
pub mod request_states;
pub mod seed;

use crate::error::{ApiError, ApiResult};
use actix_web::web;
use log::info;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

const SCHEMA: &str = include_str!("schema.sql");

#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    pub fn open(path: &Path) -> ApiResult<Self> {
        info!("Opening database at {}", path.display());
        Self::init(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> ApiResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> ApiResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` on the calling thread while holding the connection.
    pub fn with<T>(&self, f: impl FnOnce(&mut Connection) -> ApiResult<T>) -> ApiResult<T> {
        let mut conn = self.conn.lock().map_err(|_| ApiError::Poisoned)?;
        f(&mut conn)
    }

    /// Runs `f` on the blocking thread pool.
    pub async fn run<T, F>(&self, f: F) -> ApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> ApiResult<T> + Send + 'static,
    {
        let db = self.clone();
        web::block(move || db.with(f)).await?
    }
}
