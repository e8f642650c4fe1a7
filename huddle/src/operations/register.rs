//! User registration on first sign-in.
//!
//! Registration is a lazy sync with the identity provider: the caller hands
//! over a verified email and optional display names, and a user record is
//! created only if none exists yet. Registering an existing email returns
//! the stored record unchanged, so repeated sign-ins never overwrite names.
//! The returned user carries its current company membership, letting the
//! caller route to company setup or straight to the dashboard.

use crate::database::Database;
use crate::entities::User;
use crate::error::Result;

/// Options for registering a user.
#[derive(Debug, Clone)]
pub struct RegisterOptions {
    /// Verified email of the user signing in.
    pub email: String,
    /// Optional given name, applied only when the record is first created.
    pub given_name: Option<String>,
    /// Optional family name, applied only when the record is first created.
    pub family_name: Option<String>,
}

impl RegisterOptions {
    /// Creates registration options for the given email.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            given_name: None,
            family_name: None,
        }
    }

    /// Sets the given name.
    #[must_use]
    pub fn with_given_name(mut self, given_name: Option<String>) -> Self {
        self.given_name = given_name;
        self
    }

    /// Sets the family name.
    #[must_use]
    pub fn with_family_name(mut self, family_name: Option<String>) -> Self {
        self.family_name = family_name;
        self
    }
}

/// Result of a registration.
#[derive(Debug)]
pub struct RegisterResult {
    /// The registered user, freshly created or already present.
    pub user: User,
    /// Whether this call created a new user record.
    pub created: bool,
}

/// Operations for syncing users from the identity provider.
pub struct RegisterOperations;

impl RegisterOperations {
    /// Registers a user by email, creating the record on first sign-in.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is malformed, if a provided name is
    /// blank, or if the database operation fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle::database::{Database, DatabaseConfig};
    /// use huddle::operations::{RegisterOperations, RegisterOptions};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/huddle.db")).unwrap();
    /// let options = RegisterOptions::new("ada@example.com")
    ///     .with_given_name(Some("Ada".to_string()));
    ///
    /// let result = RegisterOperations::register(&mut db, &options).unwrap();
    /// println!("{} (new: {})", result.user.email(), result.created);
    /// ```
    pub fn register(db: &mut Database, options: &RegisterOptions) -> Result<RegisterResult> {
        let tx = db.begin_transaction()?;

        if let Some(user) = Database::get_user_by_email(&tx, options.email.trim())? {
            log::debug!("user '{}' already registered", user.email());
            return Ok(RegisterResult {
                user,
                created: false,
            });
        }

        let user = User::builder(uuid::Uuid::new_v4().to_string(), options.email.clone())
            .given_name(options.given_name.clone())
            .family_name(options.family_name.clone())
            .build()?;

        Database::create_user_simple(&tx, &user)?;
        tx.commit()?;
        log::debug!("registered user '{}'", user.email());

        Ok(RegisterResult {
            user,
            created: true,
        })
    }
}
