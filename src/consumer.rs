//! Consumer loop: scan a line stream, dispatch commands, pass text through.
//!
//! The [`ConsumerBuilder`] provides a fluent API for binding handlers and
//! the plain-text sink. The [`Consumer`] then drives the whole contract
//! over any async reader:
//! 1. Read one line
//! 2. Parse it
//! 3. On success, dispatch through the registry
//! 4. On `NotACommand`, hand the raw line to the text sink
//!
//! # Example
//!
//! ```
//! use cmdwire::Consumer;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> cmdwire::Result<()> {
//! let stream = "building...\n::progress percent=40::compiling\ndone\n";
//!
//! let mut consumer = Consumer::builder()
//!     .on("progress", |cmd| {
//!         assert_eq!(cmd.prop_text("percent"), Some("40"));
//!         Ok(())
//!     })
//!     .on_text(|line| eprintln!("{}", line))
//!     .build();
//!
//! consumer.consume(stream.as_bytes()).await?;
//! # Ok(())
//! # }
//! ```

use tokio::io::AsyncRead;

use crate::command::Command;
use crate::error::Result;
use crate::handler::{HandlerRegistry, HandlerResult};
use crate::source::scan_lines;

/// Sink for lines that are not commands.
type TextSink = Box<dyn FnMut(&str) + Send>;

/// Builder for configuring and creating a [`Consumer`].
pub struct ConsumerBuilder {
    registry: HandlerRegistry,
    on_text: TextSink,
    strict: bool,
}

impl ConsumerBuilder {
    /// Create a builder with no handlers, a stdout text sink, and lenient
    /// malformed-command handling.
    pub fn new() -> Self {
        Self {
            registry: HandlerRegistry::new(),
            on_text: Box::new(|line| println!("{}", line)),
            strict: false,
        }
    }

    /// Bind a handler to a command name. Re-binding a name replaces the
    /// previous handler.
    pub fn on<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&Command) -> HandlerResult + Send + Sync + 'static,
    {
        self.registry.register(name, handler);
        self
    }

    /// Set the sink that receives every non-command line.
    ///
    /// Default: print the line to stdout, which makes the consumer a
    /// transparent passthrough for ordinary output.
    pub fn on_text<F>(mut self, sink: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.on_text = Box::new(sink);
        self
    }

    /// Stop the loop on malformed commands (an empty property key) instead
    /// of logging a warning and falling through to the text sink.
    ///
    /// Default: false.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the consumer.
    pub fn build(self) -> Consumer {
        Consumer {
            registry: self.registry,
            on_text: self.on_text,
            strict: self.strict,
        }
    }
}

impl Default for ConsumerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives the parse-or-passthrough contract over a line stream.
pub struct Consumer {
    registry: HandlerRegistry,
    on_text: TextSink,
    strict: bool,
}

impl Consumer {
    /// Create a new consumer builder.
    pub fn builder() -> ConsumerBuilder {
        ConsumerBuilder::new()
    }

    /// The handler registry backing this consumer.
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Mutable access to the registry, for late registration between runs.
    pub fn registry_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.registry
    }

    /// Consume `reader` to end of stream.
    ///
    /// Command lines are dispatched through the registry; everything else
    /// goes to the text sink. Parse failures never stop the loop (in
    /// lenient mode): `NotACommand` is the expected case for ordinary
    /// output, and a malformed command is logged and passed through as
    /// text.
    ///
    /// # Errors
    ///
    /// Read errors, handler errors, and (in strict mode) malformed
    /// commands stop the loop and are returned.
    pub async fn consume<R>(&mut self, reader: R) -> Result<()>
    where
        R: AsyncRead + Unpin,
    {
        let Self {
            registry,
            on_text,
            strict,
        } = self;

        scan_lines(reader, |line| match line.parse::<Command>() {
            Ok(cmd) => {
                tracing::debug!(command = cmd.name(), "dispatching command");
                registry.handle(&cmd)
            }
            Err(err) if err.is_not_a_command() => {
                on_text(line);
                Ok(())
            }
            Err(err) if *strict => Err(err),
            Err(err) => {
                tracing::warn!("malformed command treated as text: {}", err);
                on_text(line);
                Ok(())
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::error::CmdwireError;

    fn shared_lines() -> (Arc<Mutex<Vec<String>>>, impl FnMut(&str) + Send) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let lines = lines.clone();
            move |line: &str| lines.lock().unwrap().push(line.to_string())
        };
        (lines, sink)
    }

    #[tokio::test]
    async fn test_commands_dispatch_and_text_passes_through() {
        let (texts, sink) = shared_lines();
        let commands = Arc::new(Mutex::new(Vec::new()));

        let seen = commands.clone();
        let mut consumer = Consumer::builder()
            .on("notice", move |cmd| {
                seen.lock().unwrap().push(cmd.message().to_string());
                Ok(())
            })
            .on_text(sink)
            .build();

        let input = "starting up\n::notice::ready\nplain again\n::unknown::ignored\n";
        consumer.consume(input.as_bytes()).await.unwrap();

        assert_eq!(*texts.lock().unwrap(), ["starting up", "plain again"]);
        assert_eq!(*commands.lock().unwrap(), ["ready"]);
    }

    #[tokio::test]
    async fn test_malformed_command_falls_through_as_text() {
        let (texts, sink) = shared_lines();

        let mut consumer = Consumer::builder().on_text(sink).build();
        consumer.consume(&b"::x =v::\n"[..]).await.unwrap();

        assert_eq!(*texts.lock().unwrap(), ["::x =v::"]);
    }

    #[tokio::test]
    async fn test_strict_mode_stops_on_malformed_command() {
        let mut consumer = Consumer::builder()
            .on_text(|_line| panic!("strict mode must not fall through"))
            .strict(true)
            .build();

        let err = consumer.consume(&b"::x =v::\n"[..]).await.unwrap_err();
        assert!(matches!(err, CmdwireError::EmptyKey(_)));
    }

    #[tokio::test]
    async fn test_handler_error_stops_the_loop() {
        let (texts, sink) = shared_lines();

        let mut consumer = Consumer::builder()
            .on("fail", |_cmd| Err(CmdwireError::Handler("boom".to_string())))
            .on_text(sink)
            .build();

        let input = "before\n::fail::\nafter\n";
        let err = consumer.consume(input.as_bytes()).await.unwrap_err();

        assert!(matches!(err, CmdwireError::Handler(_)));
        // The loop stopped at the failing line.
        assert_eq!(*texts.lock().unwrap(), ["before"]);
    }

    #[tokio::test]
    async fn test_late_registration_through_registry_mut() {
        let commands = Arc::new(Mutex::new(Vec::new()));

        let seen = commands.clone();
        let mut consumer = Consumer::builder().on_text(|_line| {}).build();
        consumer.registry_mut().register("ping", move |cmd| {
            seen.lock().unwrap().push(cmd.name().to_string());
            Ok(())
        });
        assert_eq!(consumer.registry().len(), 1);

        consumer.consume(&b"::ping::\n"[..]).await.unwrap();
        assert_eq!(*commands.lock().unwrap(), ["ping"]);
    }
}
