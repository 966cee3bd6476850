//! Single check session
//!
//! Ties the prompt, the line read and the verdict together over any async reader/writer pair.

use log::info;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, BufReader};

use super::input::read_username;
use crate::error::CheckError;
use crate::validation::{UsernameRules, Verdict, validate_username};

/// Prompt written before reading, line-terminated
pub const PROMPT: &str = "Enter your username: \n";

/// Runs one prompt/read/verdict cycle and returns the verdict that was printed.
///
/// Rejections are `Ok` values. Errors mean no verdict could be produced.
pub async fn run<R, W>(
    reader: &mut R,
    writer: &mut W,
    rules: &UsernameRules,
) -> Result<Verdict, CheckError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(PROMPT.as_bytes()).await?;
    writer.flush().await?;

    let username = read_username(reader).await?;
    let verdict = validate_username(&username, rules);
    info!("Verdict: {:?}", verdict);

    writer.write_all(verdict.render().as_bytes()).await?;
    writer.flush().await?;

    Ok(verdict)
}

/// Runs a session on the process's stdin and stdout.
///
/// Both handles live in this scope and are dropped on every return path.
pub async fn run_stdio(rules: &UsernameRules) -> Result<Verdict, CheckError> {
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();

    run(&mut reader, &mut writer, rules).await
}
