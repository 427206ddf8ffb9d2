//! Utility functions shared by services and the record factory.

pub mod password;
