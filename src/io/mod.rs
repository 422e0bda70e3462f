//! Input/output collaborators for trade tables.

pub mod csv;
