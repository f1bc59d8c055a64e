//! Handler registry for dispatching commands by name.
//!
//! The registry is a plain mapping from command name to handler callable:
//! one handler per name, re-registering replaces. It is an explicit,
//! caller-owned instance: no process-wide singleton exists, construct one
//! and pass it to wherever dispatch happens.
//!
//! Unknown command names are silently ignored by [`HandlerRegistry::handle`]
//! so that unrecognized directives in a stream never crash a consumer.

use std::collections::HashMap;

use crate::command::Command;
use crate::error::Result;

/// Result type for handler functions.
pub type HandlerResult = Result<()>;

/// Boxed handler callable stored in the registry.
type BoxedHandler = Box<dyn Fn(&Command) -> HandlerResult + Send + Sync>;

/// Registry mapping command names to handlers.
///
/// Registration takes `&mut self` and dispatch `&self`; the registry does
/// no locking of its own. To share one instance across threads, wrap it in
/// a mutex (handlers are `Send + Sync`, so the registry is too). A handler
/// cannot re-enter the registry it is being invoked from through `&self`;
/// callers that arrange interior mutability to do so get no isolation
/// guarantees from the registry.
pub struct HandlerRegistry {
    handlers: HashMap<String, BoxedHandler>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind a handler to a command name.
    ///
    /// Inserts or replaces: re-registering a name overwrites the previous
    /// handler without error.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&Command) -> HandlerResult + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    /// Remove the binding for a name. No-op if the name was never bound.
    pub fn unregister(&mut self, name: &str) {
        self.handlers.remove(name);
    }

    /// Whether a handler is bound to `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Dispatch a command to the handler bound to its name.
    ///
    /// The handler's result is propagated verbatim, uninterpreted. A
    /// command with no bound handler succeeds with no effect.
    ///
    /// # Errors
    ///
    /// Only whatever the invoked handler itself returns.
    pub fn handle(&self, cmd: &Command) -> Result<()> {
        match self.handlers.get(cmd.name()) {
            Some(handler) => handler(cmd),
            None => Ok(()),
        }
    }

    /// Count of registered names.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
