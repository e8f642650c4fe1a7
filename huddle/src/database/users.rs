//! Database CRUD operations for users.
//!
//! Users are looked up by email at the operation boundary and by identifier
//! everywhere else. The company link lives on the user row, so joining and
//! leaving a company are plain column updates here.

use rusqlite::{params, Connection, TransactionBehavior};

use crate::error::Result;
use crate::User;

use super::connection::Database;

/// Helper function to deserialize a user from a database row.
///
/// Expects row fields in this order: id, email, `given_name`, `family_name`,
/// `company_id`
fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    let id: String = row.get(0)?;
    let email: String = row.get(1)?;
    let given_name: Option<String> = row.get(2)?;
    let family_name: Option<String> = row.get(3)?;
    let company_id: Option<String> = row.get(4)?;

    User::builder(id, email)
        .given_name(given_name)
        .family_name(family_name)
        .company_id(company_id)
        .build()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

// SQL statements for CRUD operations
const INSERT_USER: &str = r"
    INSERT INTO users (id, email, given_name, family_name, company_id)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

const SELECT_USER_BY_ID: &str = r"
    SELECT id, email, given_name, family_name, company_id
    FROM users
    WHERE id = ?1
";

const SELECT_USER_BY_EMAIL: &str = r"
    SELECT id, email, given_name, family_name, company_id
    FROM users
    WHERE email = ?1
";

const UPDATE_USER_COMPANY: &str = r"
    UPDATE users
    SET company_id = ?2
    WHERE id = ?1
";

const SELECT_USERS_BY_COMPANY: &str = r"
    SELECT id, email, given_name, family_name, company_id
    FROM users
    WHERE company_id = ?1
    ORDER BY email
";

impl Database {
    /// Creates a user in the database.
    ///
    /// This operation uses a transaction with IMMEDIATE mode to ensure
    /// atomicity and prevent conflicts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction cannot be started
    /// - The insert fails, including when the email is already taken
    /// - The transaction cannot be committed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle::database::{Database, DatabaseConfig};
    /// use huddle::User;
    ///
    /// let config = DatabaseConfig::new("/tmp/huddle.db");
    /// let mut db = Database::open(config).unwrap();
    ///
    /// let user = User::builder("u-1", "ada@example.com").build().unwrap();
    /// db.create_user(&user).unwrap();
    /// ```
    pub fn create_user(&mut self, user: &User) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_USER,
            params![
                user.id(),
                user.email(),
                user.given_name(),
                user.family_name(),
                user.company_id(),
            ],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Creates a user using an existing connection or transaction.
    ///
    /// This method is intended for use within an existing transaction context.
    /// Unlike `create_user`, it does not create its own transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_user_simple(conn: &Connection, user: &User) -> Result<()> {
        conn.execute(
            INSERT_USER,
            params![
                user.id(),
                user.email(),
                user.given_name(),
                user.family_name(),
                user.company_id(),
            ],
        )?;

        Ok(())
    }

    /// Retrieves a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(user))` if the user exists
    /// - `Ok(None)` if the user doesn't exist
    /// - `Err(_)` if a database error occurs
    pub fn get_user(conn: &Connection, id: &str) -> Result<Option<User>> {
        let mut stmt = conn.prepare(SELECT_USER_BY_ID)?;

        match stmt.query_row(params![id], row_to_user) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Retrieves a user by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle::database::{Database, DatabaseConfig};
    ///
    /// let config = DatabaseConfig::new("/tmp/huddle.db");
    /// let db = Database::open(config).unwrap();
    ///
    /// let user = Database::get_user_by_email(db.connection(), "ada@example.com").unwrap();
    /// ```
    pub fn get_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
        let mut stmt = conn.prepare(SELECT_USER_BY_EMAIL)?;

        match stmt.query_row(params![email], row_to_user) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Sets or clears the company a user belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the user was found and updated
    /// - `Ok(false)` if the user was not found
    pub fn set_user_company(&mut self, user_id: &str, company_id: Option<&str>) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows_affected = tx.execute(UPDATE_USER_COMPANY, params![user_id, company_id])?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Sets or clears a user's company (without creating a transaction).
    ///
    /// This method is intended for use within an existing transaction.
    /// For standalone use, use `set_user_company` instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn set_user_company_simple(
        conn: &Connection,
        user_id: &str,
        company_id: Option<&str>,
    ) -> Result<bool> {
        let rows_affected = conn.execute(UPDATE_USER_COMPANY, params![user_id, company_id])?;
        Ok(rows_affected > 0)
    }

    /// Lists all users belonging to a company, ordered by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or if any user cannot be
    /// deserialized.
    pub fn list_users_by_company(conn: &Connection, company_id: &str) -> Result<Vec<User>> {
        let mut stmt = conn.prepare(SELECT_USERS_BY_COMPANY)?;

        let users = stmt
            .query_map(params![company_id], row_to_user)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(users)
    }
}
