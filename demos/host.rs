//! Host demo - spawns a producer and splits its output stream.
//!
//! This is the consuming side of the protocol: it wires a child process's
//! stdout into a [`Consumer`], so command lines reach their handlers and
//! every other line is printed unchanged.
//!
//! ```text
//! cargo build --examples
//! cargo run --example host -- target/debug/examples/producer
//! ```
//!
//! Any program that writes `::name ...::message` lines works as the child,
//! e.g. `cargo run --example host -- node build.js`.

use std::process::Stdio;

use cmdwire::Consumer;
use tokio::process::Command as ChildCommand;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let program = args.next().expect("usage: host <program> [args...]");

    let mut child = ChildCommand::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .spawn()?;
    let stdout = child.stdout.take().expect("child stdout is piped");

    let mut consumer = Consumer::builder()
        .on("progress", |cmd| {
            println!(
                "[progress] {:>3}% {}",
                cmd.prop_text("percent").unwrap_or("?"),
                cmd.message()
            );
            Ok(())
        })
        .on("done", |cmd| {
            println!(
                "[done] {} stats={}",
                cmd.message(),
                cmd.prop_text("stats").unwrap_or("{}")
            );
            Ok(())
        })
        .build();

    consumer.consume(stdout).await?;

    let status = child.wait().await?;
    println!("producer exited: {}", status);
    Ok(())
}
