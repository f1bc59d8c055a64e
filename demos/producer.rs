//! Producer demo - emits commands interleaved with ordinary output.
//!
//! This is the child side of the protocol: structured directives go out as
//! `::name ...::message` lines between plain log lines, all on stdout.
//!
//! Pairs with the `host` example, which spawns this program and dispatches
//! the command lines while printing everything else:
//!
//! ```text
//! cargo build --examples
//! cargo run --example host -- target/debug/examples/producer
//! ```

use cmdwire::{emit, Command, PropValue};
use serde::Serialize;

/// Summary attached to the final directive as a structured property.
#[derive(Serialize)]
struct BuildStats {
    warnings: u32,
    errors: u32,
}

fn main() -> cmdwire::Result<()> {
    println!("build started");

    for (percent, unit) in [(25i64, "core"), (50, "protocol"), (75, "handlers"), (100, "demos")] {
        println!("  compiling {} ...", unit);
        emit::emit(
            &Command::new("progress")
                .with_prop("percent", percent)
                .with_prop("unit", unit)
                .with_message(format!("compiling {}", unit)),
        )?;
    }

    println!("linking");

    let stats = BuildStats {
        warnings: 2,
        errors: 0,
    };
    emit::emit(
        &Command::new("done")
            .with_prop("stats", PropValue::json(&stats)?)
            .with_message("build finished"),
    )?;

    Ok(())
}
