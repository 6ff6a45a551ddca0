// src/console.rs
use std::io::{self, BufRead, Write};

use crate::services::responder::Responder;

pub const PROMPT: &str = "User: ";

/// One prompt, one reply.
pub async fn run_turn<R, W>(responder: &Responder, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    // Decoded lossily so invalid UTF-8 still gets a reply.
    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    let line = String::from_utf8_lossy(&line);
    let user_text = line.trim_end_matches(['\r', '\n']);

    let reply = responder.respond(user_text).await;
    writeln!(output, "{reply}")?;
    output.flush()
}
