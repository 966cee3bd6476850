//! Line input
//!
//! Reads the candidate username from a buffered async reader.

use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::CheckError;

/// Reads one line and cuts it at the first line terminator.
///
/// `\n`, `\r\n` and a lone `\r` all end the username; all other whitespace is kept.
/// Returns [`CheckError::InputExhausted`] if the stream is already at its end.
pub async fn read_username<R>(reader: &mut R) -> Result<String, CheckError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();

    if reader.read_line(&mut line).await? == 0 {
        return Err(CheckError::InputExhausted);
    }

    if let Some(end) = line.find(['\r', '\n']) {
        line.truncate(end);
    }

    debug!("Read candidate username ({} bytes)", line.len());
    Ok(line)
}
