//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig
//!     → listener.rs (parse address, bind socket)
//!     → TcpListener handed to the HTTP layer
//! ```

pub mod listener;

pub use listener::{bind, ListenerError};
