//! Company and employee management.
//!
//! A company is created by a user and administered by that creator alone:
//! adding employees, removing them, and deleting the company are
//! creator-only actions. Employees are plain users bound to the company
//! through their single membership link; a user belongs to at most one
//! company at a time, so attaching someone who already works elsewhere is a
//! conflict rather than a transfer.
//!
//! Deleting a company cascades in a fixed order inside one transaction:
//! members are detached, reservations on the company's rooms are removed,
//! the rooms themselves go (their image URLs collected first), and finally
//! the company row. The reference edges in the schema reject any other
//! order, so a failure mid-sequence rolls everything back rather than
//! leaving a half-deleted company. Image objects are released after commit;
//! URLs that fail to release are reported in the result, never silently
//! dropped.

use crate::database::Database;
use crate::entities::{Company, User};
use crate::error::{Error, Result};
use crate::object_store::ObjectStore;

use super::rooms::require_company;

/// Options identifying an employee action on a company.
#[derive(Debug, Clone)]
pub struct EmployeeOptions {
    /// Identifier of the company.
    pub company_id: String,
    /// Email of the requesting user; must be the company's creator.
    pub requester_email: String,
    /// Email of the employee being added or removed.
    pub employee_email: String,
}

impl EmployeeOptions {
    /// Creates employee-action options.
    #[must_use]
    pub fn new(
        company_id: impl Into<String>,
        requester_email: impl Into<String>,
        employee_email: impl Into<String>,
    ) -> Self {
        Self {
            company_id: company_id.into(),
            requester_email: requester_email.into(),
            employee_email: employee_email.into(),
        }
    }
}

/// Result of deleting a company.
#[derive(Debug)]
pub struct DeleteCompanyResult {
    /// The deleted company.
    pub company: Company,
    /// Number of member users whose membership link was cleared.
    pub detached_users: usize,
    /// Number of reservations removed from the company's rooms.
    pub removed_reservations: usize,
    /// Number of rooms removed.
    pub removed_rooms: usize,
    /// Number of room images released from the object store.
    pub released_images: usize,
    /// Image URLs that could not be released and remain orphaned.
    pub orphaned_images: Vec<String>,
}

/// Operations for managing companies and their employees.
pub struct MembershipOperations;

impl MembershipOperations {
    /// Creates a company owned by the given user.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the owner email does not resolve
    /// - [`Error::Conflict`] if the name is already taken
    /// - [`Error::Validation`] if the name is blank
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle::database::{Database, DatabaseConfig};
    /// use huddle::operations::MembershipOperations;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/huddle.db")).unwrap();
    /// let company =
    ///     MembershipOperations::create_company(&mut db, "ada@example.com", "Initech").unwrap();
    /// println!("created company '{}'", company.name());
    /// ```
    pub fn create_company(db: &mut Database, owner_email: &str, name: &str) -> Result<Company> {
        let owner_email = owner_email.trim();
        let tx = db.begin_transaction()?;

        let owner = Database::get_user_by_email(&tx, owner_email)?.ok_or_else(|| {
            Error::NotFound {
                resource: format!("user '{owner_email}'"),
            }
        })?;

        // The UNIQUE constraint would catch this too, but checking inside
        // the immediate transaction yields the domain error instead of a
        // bare constraint violation.
        let name = name.trim();
        if Database::get_company_by_name(&tx, name)?.is_some() {
            return Err(Error::Conflict {
                entity: "company".into(),
                details: format!("name '{name}' is already taken"),
            });
        }

        let company = Company::new(uuid::Uuid::new_v4().to_string(), name, owner.id())?;
        Database::create_company_simple(&tx, &company)?;
        tx.commit()?;
        log::debug!("created company '{}'", company.name());

        Ok(company)
    }

    /// Lists the companies created by the given user, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the owner email does not resolve, or
    /// a database error if the query fails.
    pub fn list_companies(db: &Database, owner_email: &str) -> Result<Vec<Company>> {
        let owner_email = owner_email.trim();
        let conn = db.connection();

        let owner = Database::get_user_by_email(conn, owner_email)?.ok_or_else(|| {
            Error::NotFound {
                resource: format!("user '{owner_email}'"),
            }
        })?;

        Database::list_companies_by_creator(conn, owner.id())
    }

    /// Adds an employee to a company, creating the user if necessary.
    ///
    /// A user with no record yet is created bound to the company; an
    /// existing unaffiliated user is attached. Returns the employee's
    /// record as stored.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the company or requester does not resolve
    /// - [`Error::Forbidden`] if the requester is not the company's creator
    /// - [`Error::Validation`] if the target is already a member of this
    ///   company, or the email is malformed
    /// - [`Error::Conflict`] if the target already belongs to a different
    ///   company
    pub fn add_employee(db: &mut Database, options: &EmployeeOptions) -> Result<User> {
        let employee_email = options.employee_email.trim();
        let tx = db.begin_transaction()?;

        let company = require_company(&tx, &options.company_id)?;
        require_creator(&tx, &company, &options.requester_email)?;

        let employee = match Database::get_user_by_email(&tx, employee_email)? {
            None => {
                // First contact with this person: create them already bound
                // to the company
                let user = User::builder(uuid::Uuid::new_v4().to_string(), employee_email)
                    .company_id(Some(company.id().to_string()))
                    .build()?;
                Database::create_user_simple(&tx, &user)?;
                log::debug!("created user '{employee_email}' as employee of '{}'", company.name());
                user
            }
            Some(user) if user.is_member_of(company.id()) => {
                return Err(Error::Validation {
                    field: "employee_email".into(),
                    message: format!("'{employee_email}' is already a member of this company"),
                });
            }
            Some(user) if user.company_id().is_some() => {
                return Err(Error::Conflict {
                    entity: "user".into(),
                    details: format!("'{employee_email}' already belongs to another company"),
                });
            }
            Some(user) => {
                Database::set_user_company_simple(&tx, user.id(), Some(company.id()))?;
                Database::get_user(&tx, user.id())?.ok_or_else(|| Error::NotFound {
                    resource: format!("user '{employee_email}'"),
                })?
            }
        };

        tx.commit()?;
        log::debug!("added '{employee_email}' to company '{}'", company.name());

        Ok(employee)
    }

    /// Removes an employee from a company, detaching the membership link.
    ///
    /// The user record itself survives; only its company binding is
    /// cleared.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the company, requester, or employee does
    ///   not resolve
    /// - [`Error::Forbidden`] if the requester is not the company's creator
    /// - [`Error::Validation`] if the target is not a member of this
    ///   company
    pub fn remove_employee(db: &mut Database, options: &EmployeeOptions) -> Result<()> {
        let employee_email = options.employee_email.trim();
        let tx = db.begin_transaction()?;

        let company = require_company(&tx, &options.company_id)?;
        require_creator(&tx, &company, &options.requester_email)?;

        let employee =
            Database::get_user_by_email(&tx, employee_email)?.ok_or_else(|| Error::NotFound {
                resource: format!("user '{employee_email}'"),
            })?;

        if !employee.is_member_of(company.id()) {
            return Err(Error::Validation {
                field: "employee_email".into(),
                message: format!("'{employee_email}' is not a member of this company"),
            });
        }

        Database::set_user_company_simple(&tx, employee.id(), None)?;
        tx.commit()?;
        log::debug!("removed '{employee_email}' from company '{}'", company.name());

        Ok(())
    }

    /// Lists a company's member users, ordered by email.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the company does not resolve, or a
    /// database error if the query fails.
    pub fn list_employees(db: &Database, company_id: &str) -> Result<Vec<User>> {
        let conn = db.connection();
        let company = require_company(conn, company_id)?;

        Database::list_users_by_company(conn, company.id())
    }

    /// Deletes a company and everything hanging off it.
    ///
    /// The cascade detaches members, removes reservations on the company's
    /// rooms, removes the rooms, and deletes the company row, all in one
    /// transaction. Image objects are released afterwards; failed releases
    /// end up in [`DeleteCompanyResult::orphaned_images`].
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the company or requester does not resolve
    /// - [`Error::Forbidden`] if the requester is not the company's creator
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle::database::{Database, DatabaseConfig};
    /// use huddle::object_store::NoopObjectStore;
    /// use huddle::operations::MembershipOperations;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/huddle.db")).unwrap();
    /// let result = MembershipOperations::delete_company(
    ///     &mut db,
    ///     &NoopObjectStore,
    ///     "c-1",
    ///     "ada@example.com",
    /// )
    /// .unwrap();
    /// println!(
    ///     "removed {} rooms and {} reservations",
    ///     result.removed_rooms, result.removed_reservations
    /// );
    /// ```
    pub fn delete_company(
        db: &mut Database,
        object_store: &dyn ObjectStore,
        company_id: &str,
        requester_email: &str,
    ) -> Result<DeleteCompanyResult> {
        let tx = db.begin_transaction()?;

        let company = require_company(&tx, company_id)?;
        require_creator(&tx, &company, requester_email)?;

        // Step 1: Detach member users
        let detached_users = Database::detach_company_users_simple(&tx, company.id())?;

        // Step 2: Remove reservations on the company's rooms
        let removed_reservations = Database::delete_company_reservations_simple(&tx, company.id())?;

        // Step 3: Collect image URLs, then remove the rooms
        let image_urls = Database::collect_company_image_urls(&tx, company.id())?;
        let removed_rooms = Database::delete_company_rooms_simple(&tx, company.id())?;

        // Step 4: Delete the company row itself
        Database::delete_company_simple(&tx, company.id())?;

        tx.commit()?;
        log::debug!(
            "deleted company '{}': {detached_users} member(s) detached, \
             {removed_reservations} reservation(s) and {removed_rooms} room(s) removed",
            company.name()
        );

        // The object store is not transactional; release only after the
        // commit stuck, and keep going past individual failures
        let mut released_images = 0;
        let mut orphaned_images = Vec::new();
        for url in image_urls {
            match object_store.delete(&url) {
                Ok(()) => released_images += 1,
                Err(e) => {
                    log::debug!("failed to release image '{url}': {e}");
                    orphaned_images.push(url);
                }
            }
        }

        Ok(DeleteCompanyResult {
            company,
            detached_users,
            removed_reservations,
            removed_rooms,
            released_images,
            orphaned_images,
        })
    }
}

/// Checks that the requester is the company's creator.
fn require_creator(
    conn: &rusqlite::Connection,
    company: &Company,
    requester_email: &str,
) -> Result<()> {
    let requester_email = requester_email.trim();
    let requester =
        Database::get_user_by_email(conn, requester_email)?.ok_or_else(|| Error::NotFound {
            resource: format!("user '{requester_email}'"),
        })?;

    if requester.id() == company.creator_id() {
        Ok(())
    } else {
        Err(Error::Forbidden {
            action: format!("administer company '{}'", company.name()),
        })
    }
}
