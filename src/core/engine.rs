use crate::core::{IpLookup, UserDirectory};
use crate::utils::error::{LookupError, Result};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter Discord User ID: ";

/// Prompts for one identifier, performs one lookup, prints one line.
pub struct LookupEngine<D: UserDirectory> {
    directory: D,
}

impl<D: UserDirectory> LookupEngine<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Returns the line that was printed. `RequestFailed` is rendered as an
    /// error line and counts as a completed run; any other error is returned.
    pub async fn run<R, W>(&self, input: &mut R, output: &mut W) -> Result<String>
    where
        R: BufRead,
        W: Write,
    {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let discord_id = read_identifier(input)?;
        tracing::debug!("Looking up Discord ID: {}", discord_id);

        let line = match self.directory.lookup_ip(&discord_id).await {
            Ok(ip) => IpLookup::new(discord_id, ip).summary(),
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Lookup failed: {}", e);
                format!("Error: {}", e)
            }
            Err(e) => return Err(e),
        };

        writeln!(output, "{}", line)?;
        output.flush()?;
        Ok(line)
    }
}

/// Reads one line and strips its terminator. EOF before any input is an error.
pub fn read_identifier<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(LookupError::InputClosed);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
