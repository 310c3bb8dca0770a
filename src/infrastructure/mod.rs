//! Infrastructure layer - services and persistence implementations

pub mod hero;
pub mod logging;
pub mod storage;
pub mod team;
