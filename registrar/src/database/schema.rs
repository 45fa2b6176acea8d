//! Database schema definitions and SQL constants.
//!
//! This module contains the `Registration` table definition and every
//! statement the store executes against it.

/// Name of the single table holding registrations.
pub const TABLE_NAME: &str = "Registration";

/// SQL statement to create the registrations table.
///
/// `AUTOINCREMENT` keeps ids from being reused after a delete, and
/// `UC_Email` enforces email uniqueness across the whole table.
pub const CREATE_REGISTRATION_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Registration (
        ID INTEGER PRIMARY KEY AUTOINCREMENT,
        Name VARCHAR(255) NOT NULL,
        Email VARCHAR(255) NOT NULL,
        DateOfBirth DATE,
        CONSTRAINT UC_Email UNIQUE (Email)
    )";

/// Inserts one registration; the id is assigned by `SQLite`.
pub const INSERT_REGISTRATION: &str = r"
    INSERT INTO Registration (Name, Email, DateOfBirth)
    VALUES (?1, ?2, ?3)
";

/// Selects every registration.
// No ORDER BY: rows come back in storage order.
pub const SELECT_ALL_REGISTRATIONS: &str = r"
    SELECT ID, Name, Email, DateOfBirth
    FROM Registration
";

/// Selects one registration by id.
pub const SELECT_REGISTRATION: &str = r"
    SELECT ID, Name, Email, DateOfBirth
    FROM Registration
    WHERE ID = ?1
";

/// Counts stored registrations.
pub const COUNT_REGISTRATIONS: &str = "SELECT COUNT(*) FROM Registration";

/// Replaces every mutable field of the row with the given id.
pub const UPDATE_REGISTRATION: &str = r"
    UPDATE Registration
    SET Name = ?1, Email = ?2, DateOfBirth = ?3
    WHERE ID = ?4
";

/// Deletes the row with the given id.
pub const DELETE_REGISTRATION: &str = "DELETE FROM Registration WHERE ID = ?1";
