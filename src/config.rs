//! Game and site configuration
//!
//! Both configs deserialize from JSON so the page can override the defaults,
//! and both are validated before a session is built from them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::OBSTACLE_WIDTH;

/// Configuration problems detected by `validate` or while parsing
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("at least one lane is required")]
    EmptyLanes,

    #[error("at least one obstacle color is required")]
    EmptyPalette,

    #[error("lane at x={lane} does not fit inside a {width}-wide playfield")]
    LaneOutOfBounds { lane: f32, width: f32 },

    #[error("player car does not fit inside the playfield")]
    PlayerDoesNotFit,

    #[error("at least one restart hour is required")]
    EmptyRestartHours,

    #[error("restart hour {0} is not in 0..24")]
    InvalidRestartHour(u32),
}

/// Playfield geometry and look of the car game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield (canvas) width
    pub width: f32,
    /// Playfield (canvas) height
    pub height: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Distance from the bottom edge to the player's top edge
    pub player_bottom_offset: f32,
    /// Left x of each spawn lane
    pub lanes: Vec<f32>,
    /// Obstacle colors as `#rrggbb`
    pub palette: Vec<String>,
    /// Number of scrolling road markers
    pub marker_count: usize,
    /// Initial vertical distance between road markers
    pub marker_spacing: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
            player_width: 44.0,
            player_height: 80.0,
            player_bottom_offset: 110.0,
            lanes: vec![45.0, 120.0, 195.0, 270.0, 340.0],
            palette: [
                "#e74c3c", "#f39c12", "#27ae60", "#9b59b6", "#3498db", "#1abc9c", "#e67e22",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            marker_count: 8,
            marker_spacing: 80.0,
        }
    }
}

impl GameConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Default config resized to the given canvas
    pub fn with_playfield(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lanes.is_empty() {
            return Err(ConfigError::EmptyLanes);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if let Some(&lane) = self
            .lanes
            .iter()
            .find(|&&lane| lane < 0.0 || lane + OBSTACLE_WIDTH > self.width)
        {
            return Err(ConfigError::LaneOutOfBounds {
                lane,
                width: self.width,
            });
        }
        let margin = crate::consts::PLAYER_EDGE_MARGIN;
        if self.player_width + 2.0 * margin > self.width
            || self.player_bottom_offset > self.height
            || self.player_bottom_offset < self.player_height
        {
            return Err(ConfigError::PlayerDoesNotFit);
        }
        Ok(())
    }

    /// Player's starting x (centred)
    pub fn player_start_x(&self) -> f32 {
        self.width / 2.0 - self.player_width / 2.0
    }

    /// Player's fixed y
    pub fn player_y(&self) -> f32 {
        self.height - self.player_bottom_offset
    }

    /// Leftmost x the player may occupy
    pub fn player_min_x(&self) -> f32 {
        crate::consts::PLAYER_EDGE_MARGIN
    }

    /// Rightmost x the player may occupy
    pub fn player_max_x(&self) -> f32 {
        self.width - self.player_width - crate::consts::PLAYER_EDGE_MARGIN
    }
}

/// Server and community details shown around the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// CFX server id used for join links and the player feed
    pub server_id: String,
    /// Discord invite code (the part after discord.gg/)
    pub invite_code: String,
    /// Hours of the day (24h) when the server restarts
    pub restart_hours: Vec<u32>,
    /// Seconds between feed refreshes
    pub poll_interval_secs: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            server_id: "53d3yd".to_string(),
            invite_code: "wavepvp".to_string(),
            restart_hours: vec![0, 6, 12, 18],
            poll_interval_secs: 30,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.restart_hours.is_empty() {
            return Err(ConfigError::EmptyRestartHours);
        }
        if let Some(&hour) = self.restart_hours.iter().find(|&&h| h >= 24) {
            return Err(ConfigError::InvalidRestartHour(hour));
        }
        Ok(())
    }

    pub fn invite_url(&self) -> String {
        format!("https://discord.gg/{}", self.invite_code)
    }

    /// Player feed endpoint for this server
    pub fn server_feed_url(&self) -> String {
        format!(
            "https://servers-frontend.fivem.net/api/servers/single/{}",
            self.server_id
        )
    }

    /// Community feed endpoint for the invite
    pub fn invite_feed_url(&self) -> String {
        format!(
            "https://discord.com/api/invites/{}?with_counts=true",
            self.invite_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_player_bounds() {
        let config = GameConfig::default();
        assert_eq!(config.player_start_x(), 178.0);
        assert_eq!(config.player_y(), 490.0);
        assert_eq!(config.player_min_x(), 15.0);
        assert_eq!(config.player_max_x(), 341.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "height": 700 }"#).unwrap();
        assert_eq!(config.height, 700.0);
        assert_eq!(config.lanes.len(), 5);
        assert_eq!(config.palette.len(), 7);
    }

    #[test]
    fn test_rejects_bad_game_config() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "lanes": [] }"#),
            Err(ConfigError::EmptyLanes)
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "palette": [] }"#),
            Err(ConfigError::EmptyPalette)
        ));
        assert!(matches!(
            GameConfig::with_playfield(300.0, 600.0).validate(),
            Err(ConfigError::LaneOutOfBounds { lane, .. }) if lane == 270.0
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_bad_site_config() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "restart_hours": [] }"#),
            Err(ConfigError::EmptyRestartHours)
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "restart_hours": [6, 24] }"#),
            Err(ConfigError::InvalidRestartHour(24))
        ));
    }

    #[test]
    fn test_site_urls() {
        let site = SiteConfig::default();
        assert_eq!(site.invite_url(), "https://discord.gg/wavepvp");
        assert!(site.server_feed_url().ends_with("/single/53d3yd"));
        assert!(site.invite_feed_url().contains("wavepvp?with_counts=true"));
    }
}
