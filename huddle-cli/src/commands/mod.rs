//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `register`: Register a user by email
//! - `create_company`: Create a company owned by a user
//! - `list_companies`: List the companies a user created
//! - `add_employee`: Add an employee to a company
//! - `remove_employee`: Remove an employee from a company
//! - `list_employees`: List a company's employees
//! - `delete_company`: Delete a company and everything attached to it
//! - `create_room`: Create a meeting room in a company
//! - `attach_room_image`: Attach an uploaded image to a room
//! - `list_rooms`: List a company's rooms
//! - `delete_room`: Delete a room and its reservations
//! - `reserve`: Book one or more slots in a room
//! - `list`: List a user's reservations
//! - `cancel`: Cancel a reservation
//! - `sweep`: Remove expired reservations
//! - `init`: Initialize the data directory and database
//! - `show_data_dir`: Show resolved data directory path
//! - `completions`: Generate shell completion scripts

pub mod add_employee;
pub mod attach_room_image;
pub mod cancel;
pub mod completions;
pub mod create_company;
pub mod create_room;
pub mod delete_company;
pub mod delete_room;
pub mod init;
pub mod list;
pub mod list_companies;
pub mod list_employees;
pub mod list_rooms;
pub mod register;
pub mod remove_employee;
pub mod reserve;
pub mod show_data_dir;
pub mod sweep;

pub use add_employee::AddEmployeeCommand;
pub use attach_room_image::AttachRoomImageCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use create_company::CreateCompanyCommand;
pub use create_room::CreateRoomCommand;
pub use delete_company::DeleteCompanyCommand;
pub use delete_room::DeleteRoomCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use list_companies::ListCompaniesCommand;
pub use list_employees::ListEmployeesCommand;
pub use list_rooms::ListRoomsCommand;
pub use register::RegisterCommand;
pub use remove_employee::RemoveEmployeeCommand;
pub use reserve::ReserveCommand;
pub use show_data_dir::ShowDataDirCommand;
pub use sweep::SweepCommand;
