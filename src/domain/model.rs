use serde::{Deserialize, Serialize};

/// Substituted for the `ip` field when the response object does not carry one.
pub const IP_NOT_FOUND: &str = "IP Address not found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpLookup {
    pub discord_id: String,
    pub ip: String,
}

impl IpLookup {
    pub fn new(discord_id: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            discord_id: discord_id.into(),
            ip: ip.into(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "The IP address associated with Discord ID {} is: {}",
            self.discord_id, self.ip
        )
    }
}
