//! Handler module - command dispatch.
//!
//! Provides [`HandlerRegistry`], the name-keyed table that routes a parsed
//! [`Command`](crate::Command) to a registered handler.
//!
//! # Example
//!
//! ```
//! use cmdwire::{Command, HandlerRegistry};
//!
//! let mut registry = HandlerRegistry::new();
//!
//! registry.register("notice", |cmd| {
//!     println!("notice: {}", cmd.message());
//!     Ok(())
//! });
//!
//! let cmd: Command = "::notice::ready".parse().unwrap();
//! registry.handle(&cmd).unwrap();
//! ```

mod registry;

pub use registry::{HandlerRegistry, HandlerResult};
