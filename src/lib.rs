//! Hoops Idle: the economy engine of an incremental basketball clicker, plus the
//! session, persistence, and text driver around it.

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod session;
pub mod storage;
pub mod time;
