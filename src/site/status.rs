//! Player and community feed interpretation
//!
//! Feeds are third-party and flaky. Nothing here fails: a bad or missing
//! payload turns into the page's offline/placeholder text.

use serde::Deserialize;

/// Max slots shown when the feed omits them
const DEFAULT_MAX_PLAYERS: u32 = 48;

#[derive(Debug, Deserialize)]
struct ServerResponse {
    #[serde(rename = "Data")]
    data: Option<ServerData>,
    #[serde(rename = "EndPoint")]
    endpoint: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServerData {
    clients: Option<u32>,
    sv_maxclients: Option<u32>,
    #[serde(rename = "svMaxclients")]
    sv_maxclients_alt: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct InviteResponse {
    approximate_member_count: Option<u64>,
}

/// What the page shows about the game server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerStatus {
    Online {
        current: u32,
        max: u32,
        /// Direct endpoint advertised by the server list
        endpoint: Option<String>,
    },
    /// Feed answered but had no server data
    Unlisted,
    /// Feed unreachable or unreadable
    Offline,
}

impl PlayerStatus {
    /// Interpret a player feed body. `None` means the request itself failed.
    pub fn from_feed(body: Option<&str>) -> Self {
        let Some(body) = body else {
            return Self::Offline;
        };
        let response: ServerResponse = match serde_json::from_str(body) {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Unreadable player feed: {}", e);
                return Self::Offline;
            }
        };
        match response.data {
            Some(data) => Self::Online {
                current: data.clients.unwrap_or(0),
                max: data
                    .sv_maxclients
                    .filter(|&m| m > 0)
                    .or(data.sv_maxclients_alt.filter(|&m| m > 0))
                    .unwrap_or(DEFAULT_MAX_PLAYERS),
                endpoint: response.endpoint.filter(|e| !e.is_empty()),
            },
            None => Self::Unlisted,
        }
    }

    /// Short `current/max` badge text
    pub fn count_text(&self) -> String {
        match self {
            Self::Online { current, max, .. } => format!("{}/{}", current, max),
            Self::Unlisted => format!("0/{}", DEFAULT_MAX_PLAYERS),
            Self::Offline => "Offline".to_string(),
        }
    }

    /// Hero banner text
    pub fn headline(&self) -> String {
        match self {
            Self::Online { current, .. } => format!("{} Players Online", current),
            Self::Unlisted => "0 Players Online".to_string(),
            Self::Offline => "Server Offline".to_string(),
        }
    }

    /// F8 console command for joining
    pub fn connect_command(&self, server_id: &str) -> String {
        match self {
            Self::Online {
                endpoint: Some(endpoint),
                ..
            } => format!("connect {}", endpoint),
            _ => format!("connect cfx.re/join/{}", server_id),
        }
    }
}

/// Member count text for the community badge, `-` when unknown
pub fn member_count_text(body: Option<&str>) -> String {
    body.and_then(|b| serde_json::from_str::<InviteResponse>(b).ok())
        .and_then(|r| r.approximate_member_count)
        .filter(|&n| n > 0)
        .map(group_thousands)
        .unwrap_or_else(|| "-".to_string())
}

/// Link that launches the game client straight into the server
pub fn connect_url(server_id: &str) -> String {
    format!("fivem://connect/cfx.re/join/{}", server_id)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
