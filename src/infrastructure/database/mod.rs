//! SQLite-backed person repository
//!
//! rusqlite types stay inside this module: every failure leaves as a
//! [`RepositoryError`].

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Person, Role};
use crate::domain::errors::RepositoryError;
use crate::domain::traits::PersonRepository;

pub struct SqlitePersonRepository {
    conn: Mutex<Connection>,
}

impl SqlitePersonRepository {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(store_error)?;
        tracing::debug!("Opened database {}", path.display());
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, RepositoryError> {
        let conn = Connection::open_in_memory().map_err(store_error)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, RepositoryError> {
        let repo = Self {
            conn: Mutex::new(conn),
        };
        repo.init_tables()?;
        Ok(repo)
    }

    fn init_tables(&self) -> Result<(), RepositoryError> {
        self.connection()?
            .execute(
                "CREATE TABLE IF NOT EXISTS persons (
                    id TEXT PRIMARY KEY NOT NULL,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL,
                    role TEXT NOT NULL,
                    created_at TEXT NOT NULL DEFAULT (datetime('now')),
                    updated_at TEXT NOT NULL
                )",
                [],
            )
            .map_err(store_error)?;
        Ok(())
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, RepositoryError> {
        self.conn
            .lock()
            .map_err(|_| RepositoryError::Persistence("database connection lock poisoned".to_string()))
    }
}

/// Raw `persons` row before domain validation
struct PersonRow {
    id: String,
    name: String,
    email: String,
    role: String,
}

impl PersonRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            role: row.get(3)?,
        })
    }

    /// A row that no longer satisfies the domain rules is a store fault
    fn into_person(self) -> Result<Person, RepositoryError> {
        let role: Role = self
            .role
            .parse()
            .map_err(|e| RepositoryError::Persistence(format!("corrupt record {}: {}", self.id, e)))?;
        let id = self.id.clone();
        Person::new(self.id, &self.name, self.email, role)
            .map_err(|e| RepositoryError::Persistence(format!("corrupt record {}: {}", id, e)))
    }
}

fn store_error(e: rusqlite::Error) -> RepositoryError {
    tracing::error!("SQLite error: {}", e);
    RepositoryError::Persistence(e.to_string())
}

#[async_trait]
impl PersonRepository for SqlitePersonRepository {
    async fn get_by_id(&self, id: &str) -> Result<Person, RepositoryError> {
        let row = self
            .connection()?
            .query_row(
                "SELECT id, name, email, role FROM persons WHERE id = ?1",
                [id],
                PersonRow::from_row,
            )
            .optional()
            .map_err(store_error)?;

        match row {
            Some(row) => row.into_person(),
            None => Err(RepositoryError::NotFound(id.to_string())),
        }
    }

    async fn save(&self, person: &Person) -> Result<(), RepositoryError> {
        let updated_at = chrono::Utc::now().to_rfc3339();
        self.connection()?
            .execute(
                "INSERT INTO persons (id, name, email, role, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    email = excluded.email,
                    role = excluded.role,
                    updated_at = excluded.updated_at",
                rusqlite::params![
                    person.id(),
                    person.name(),
                    person.email(),
                    person.role().as_str(),
                    updated_at
                ],
            )
            .map_err(store_error)?;
        tracing::debug!("Saved person {}", person.id());
        Ok(())
    }
}
