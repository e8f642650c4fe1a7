//! Account and room entities for the reservation system.
//!
//! This module provides the user, company, and room types shared by the
//! membership and booking operations, including builder patterns for
//! construction with validation.

use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// A registered user, identified by email.
///
/// Users are created lazily the first time an email appears, either through
/// sign-in or when a company creator adds them as an employee. A user belongs
/// to at most one company at a time.
///
/// # Examples
///
/// ```
/// use huddle::User;
///
/// let user = User::builder("u-1", "ada@example.com").build().unwrap();
/// assert_eq!(user.email(), "ada@example.com");
/// assert_eq!(user.company_id(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: String,
    email: String,
    given_name: Option<String>,
    family_name: Option<String>,
    company_id: Option<String>,
}

impl User {
    /// Creates a new user builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle::User;
    ///
    /// let user = User::builder("u-1", "ada@example.com")
    ///     .given_name(Some("Ada".to_string()))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(user.given_name(), Some("Ada"));
    /// ```
    #[must_use]
    pub fn builder(id: impl Into<String>, email: impl Into<String>) -> UserBuilder {
        UserBuilder {
            id: id.into(),
            email: email.into(),
            given_name: None,
            family_name: None,
            company_id: None,
        }
    }

    /// Returns the user's unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the user's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the user's optional given name.
    #[must_use]
    pub fn given_name(&self) -> Option<&str> {
        self.given_name.as_deref()
    }

    /// Returns the user's optional family name.
    #[must_use]
    pub fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }

    /// Returns the identifier of the company this user belongs to, if any.
    #[must_use]
    pub fn company_id(&self) -> Option<&str> {
        self.company_id.as_deref()
    }

    /// Returns `true` if the user belongs to the given company.
    #[must_use]
    pub fn is_member_of(&self, company_id: &str) -> bool {
        self.company_id.as_deref() == Some(company_id)
    }
}

/// Builder for creating `User` instances.
#[derive(Debug)]
pub struct UserBuilder {
    id: String,
    email: String,
    given_name: Option<String>,
    family_name: Option<String>,
    company_id: Option<String>,
}

impl UserBuilder {
    /// Sets the given name.
    ///
    /// The name will be trimmed of leading/trailing whitespace.
    #[must_use]
    pub fn given_name(mut self, given_name: Option<String>) -> Self {
        self.given_name = given_name.map(|n| n.trim().to_string());
        self
    }

    /// Sets the family name.
    ///
    /// The name will be trimmed of leading/trailing whitespace.
    #[must_use]
    pub fn family_name(mut self, family_name: Option<String>) -> Self {
        self.family_name = family_name.map(|n| n.trim().to_string());
        self
    }

    /// Sets the company this user belongs to.
    #[must_use]
    pub fn company_id(mut self, company_id: Option<String>) -> Self {
        self.company_id = company_id;
        self
    }

    /// Builds the user.
    ///
    /// The email is trimmed before validation and stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The email is empty after trimming
    /// - The email has no `@`, or an empty part on either side of it
    /// - A given or family name is provided but is empty after trimming
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle::User;
    ///
    /// assert!(User::builder("u-1", "ada@example.com").build().is_ok());
    /// assert!(User::builder("u-2", "not-an-email").build().is_err());
    /// assert!(User::builder("u-3", "@example.com").build().is_err());
    /// ```
    pub fn build(self) -> Result<User, ValidationError> {
        let email = self.email.trim().to_string();
        if email.is_empty() {
            return Err(ValidationError {
                field: "email".into(),
                message: "email must be non-empty after trimming whitespace".into(),
            });
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => {
                return Err(ValidationError {
                    field: "email".into(),
                    message: "email must have a user and a domain separated by '@'".into(),
                });
            }
        }

        if let Some(ref given_name) = self.given_name {
            if given_name.is_empty() {
                return Err(ValidationError {
                    field: "given_name".into(),
                    message: "given name must be non-empty after trimming whitespace".into(),
                });
            }
        }
        if let Some(ref family_name) = self.family_name {
            if family_name.is_empty() {
                return Err(ValidationError {
                    field: "family_name".into(),
                    message: "family name must be non-empty after trimming whitespace".into(),
                });
            }
        }

        Ok(User {
            id: self.id,
            email,
            given_name: self.given_name,
            family_name: self.family_name,
            company_id: self.company_id,
        })
    }
}

/// A company, owned by the user who created it.
///
/// Company names are unique across the system. The creator is the only user
/// allowed to manage the employee roster or delete the company.
///
/// # Examples
///
/// ```
/// use huddle::Company;
///
/// let company = Company::new("c-1", "Initech", "u-1").unwrap();
/// assert_eq!(company.name(), "Initech");
/// assert_eq!(company.creator_id(), "u-1");
///
/// // Invalid: blank name
/// assert!(Company::new("c-2", "   ", "u-1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    id: String,
    name: String,
    creator_id: String,
}

impl Company {
    /// Creates a new company.
    ///
    /// The name is trimmed before validation and stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming whitespace.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        creator_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "company name must be non-empty after trimming whitespace".into(),
            });
        }

        Ok(Self {
            id: id.into(),
            name,
            creator_id: creator_id.into(),
        })
    }

    /// Returns the company's unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the company's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier of the user who created the company.
    #[must_use]
    pub fn creator_id(&self) -> &str {
        &self.creator_id
    }
}

/// A bookable meeting room belonging to a company.
///
/// Rooms are created in two phases: the record first, then an optional image
/// attached once it has been uploaded. A room without an image is still
/// bookable.
///
/// # Examples
///
/// ```
/// use huddle::Room;
///
/// let room = Room::builder("r-1", "c-1", "War Room", 8)
///     .description(Some("Third floor, no windows".to_string()))
///     .build()
///     .unwrap();
/// assert_eq!(room.capacity(), 8);
/// assert!(!room.has_image());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: String,
    company_id: String,
    name: String,
    capacity: u32,
    description: Option<String>,
    image_url: Option<String>,
}

impl Room {
    /// Creates a new room builder.
    #[must_use]
    pub fn builder(
        id: impl Into<String>,
        company_id: impl Into<String>,
        name: impl Into<String>,
        capacity: u32,
    ) -> RoomBuilder {
        RoomBuilder {
            id: id.into(),
            company_id: company_id.into(),
            name: name.into(),
            capacity,
            description: None,
            image_url: None,
        }
    }

    /// Returns the room's unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the identifier of the company that owns the room.
    #[must_use]
    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    /// Returns the room's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of seats in the room.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the room's optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the URL of the room's image, if one has been attached.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Returns `true` if an image has been attached to the room.
    #[must_use]
    pub const fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

/// Builder for creating `Room` instances.
#[derive(Debug)]
pub struct RoomBuilder {
    id: String,
    company_id: String,
    name: String,
    capacity: u32,
    description: Option<String>,
    image_url: Option<String>,
}

impl RoomBuilder {
    /// Sets the description.
    ///
    /// The description will be trimmed of leading/trailing whitespace.
    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description.map(|d| d.trim().to_string());
        self
    }

    /// Sets the image URL.
    #[must_use]
    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Builds the room.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty after trimming whitespace
    /// - The capacity is zero
    /// - The description is provided but is empty after trimming
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle::Room;
    ///
    /// assert!(Room::builder("r-1", "c-1", "War Room", 8).build().is_ok());
    /// assert!(Room::builder("r-2", "c-1", "", 8).build().is_err());
    /// assert!(Room::builder("r-3", "c-1", "War Room", 0).build().is_err());
    /// ```
    pub fn build(self) -> Result<Room, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "room name must be non-empty after trimming whitespace".into(),
            });
        }

        if self.capacity == 0 {
            return Err(ValidationError {
                field: "capacity".into(),
                message: "room capacity must be at least 1".into(),
            });
        }

        if let Some(ref description) = self.description {
            if description.is_empty() {
                return Err(ValidationError {
                    field: "description".into(),
                    message: "description must be non-empty after trimming whitespace".into(),
                });
            }
        }

        Ok(Room {
            id: self.id,
            company_id: self.company_id,
            name,
            capacity: self.capacity,
            description: self.description,
            image_url: self.image_url,
        })
    }
}
