//! Database CRUD operations for companies.
//!
//! Company names carry a UNIQUE constraint, so the insert itself is the
//! final arbiter of name collisions under concurrency.

use rusqlite::{params, Connection, TransactionBehavior};

use crate::error::Result;
use crate::Company;

use super::connection::Database;

/// Helper function to deserialize a company from a database row.
///
/// Expects row fields in this order: id, name, `creator_id`
fn row_to_company(row: &rusqlite::Row<'_>) -> rusqlite::Result<Company> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let creator_id: String = row.get(2)?;

    Company::new(id, name, creator_id)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

// SQL statements for CRUD operations
const INSERT_COMPANY: &str = r"
    INSERT INTO companies (id, name, creator_id)
    VALUES (?1, ?2, ?3)
";

const SELECT_COMPANY_BY_ID: &str = r"
    SELECT id, name, creator_id
    FROM companies
    WHERE id = ?1
";

const SELECT_COMPANY_BY_NAME: &str = r"
    SELECT id, name, creator_id
    FROM companies
    WHERE name = ?1
";

const SELECT_COMPANIES_BY_CREATOR: &str = r"
    SELECT id, name, creator_id
    FROM companies
    WHERE creator_id = ?1
    ORDER BY name
";

const DELETE_COMPANY: &str = r"
    DELETE FROM companies
    WHERE id = ?1
";

impl Database {
    /// Creates a company in the database.
    ///
    /// This operation uses a transaction with IMMEDIATE mode to ensure
    /// atomicity and prevent conflicts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction cannot be started
    /// - The insert fails, including when the name is already taken
    /// - The transaction cannot be committed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle::database::{Database, DatabaseConfig};
    /// use huddle::Company;
    ///
    /// let config = DatabaseConfig::new("/tmp/huddle.db");
    /// let mut db = Database::open(config).unwrap();
    ///
    /// let company = Company::new("c-1", "Initech", "u-1").unwrap();
    /// db.create_company(&company).unwrap();
    /// ```
    pub fn create_company(&mut self, company: &Company) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_COMPANY,
            params![company.id(), company.name(), company.creator_id()],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Creates a company using an existing connection or transaction.
    ///
    /// This method is intended for use within an existing transaction context.
    /// Unlike `create_company`, it does not create its own transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_company_simple(conn: &Connection, company: &Company) -> Result<()> {
        conn.execute(
            INSERT_COMPANY,
            params![company.id(), company.name(), company.creator_id()],
        )?;

        Ok(())
    }

    /// Retrieves a company by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(company))` if the company exists
    /// - `Ok(None)` if the company doesn't exist
    /// - `Err(_)` if a database error occurs
    pub fn get_company(conn: &Connection, id: &str) -> Result<Option<Company>> {
        let mut stmt = conn.prepare(SELECT_COMPANY_BY_ID)?;

        match stmt.query_row(params![id], row_to_company) {
            Ok(company) => Ok(Some(company)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Retrieves a company by its unique name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    pub fn get_company_by_name(conn: &Connection, name: &str) -> Result<Option<Company>> {
        let mut stmt = conn.prepare(SELECT_COMPANY_BY_NAME)?;

        match stmt.query_row(params![name], row_to_company) {
            Ok(company) => Ok(Some(company)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists the companies created by the given user, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or if any company cannot be
    /// deserialized.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle::database::{Database, DatabaseConfig};
    ///
    /// let config = DatabaseConfig::new("/tmp/huddle.db");
    /// let db = Database::open(config).unwrap();
    ///
    /// for company in Database::list_companies_by_creator(db.connection(), "u-1").unwrap() {
    ///     println!("{}", company.name());
    /// }
    /// ```
    pub fn list_companies_by_creator(conn: &Connection, creator_id: &str) -> Result<Vec<Company>> {
        let mut stmt = conn.prepare(SELECT_COMPANIES_BY_CREATOR)?;

        let companies = stmt
            .query_map(params![creator_id], row_to_company)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(companies)
    }

    /// Deletes a company row (without creating a transaction).
    ///
    /// This method is intended for use within the company-deletion
    /// transaction, after employees have been detached and the company's
    /// rooms and reservations removed. Deleting the row on its own would be
    /// rejected while anything still references it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database deletion fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the company was found and deleted
    /// - `Ok(false)` if the company was not found
    pub fn delete_company_simple(conn: &Connection, id: &str) -> Result<bool> {
        let rows_affected = conn.execute(DELETE_COMPANY, params![id])?;
        Ok(rows_affected > 0)
    }
}
