//! Interactive command loop on stdin
//!
//! Commands and poll ticks interleave on the single async control flow;
//! neither blocks the other: the poller runs as its own task, and the
//! controller never holds a lock across a backend await.

use crate::control::SessionController;
use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const USAGE: &str = "commands: start | stop | status | quit";

pub async fn run(controller: Arc<SessionController>) -> Result<()> {
    println!("{}", USAGE);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => {}
            "start" => controller.start_session().await,
            "stop" => controller.stop_session().await,
            "status" => {
                if controller.toggle().stop_enabled() {
                    println!("recording (stop enabled)");
                } else {
                    println!("idle (start enabled)");
                }
            }
            "quit" | "exit" => break,
            _ => println!("{}", USAGE),
        }
    }

    Ok(())
}
