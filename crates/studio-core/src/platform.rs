//! Video platforms a trend or dashboard request can target.

use std::fmt;

/// A supported short-video platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    YouTube,
    TikTok,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::YouTube, Platform::TikTok, Platform::Instagram];

    /// Wire name used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checkbox-style platform selection; every platform starts checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformSelection {
    pub youtube: bool,
    pub tiktok: bool,
    pub instagram: bool,
}

impl Default for PlatformSelection {
    fn default() -> Self {
        Self {
            youtube: true,
            tiktok: true,
            instagram: true,
        }
    }
}

impl PlatformSelection {
    pub fn none() -> Self {
        Self {
            youtube: false,
            tiktok: false,
            instagram: false,
        }
    }

    /// Select exactly the given platforms.
    pub fn only(platforms: &[Platform]) -> Self {
        let mut selection = Self::none();
        for platform in platforms {
            selection.set(*platform, true);
        }
        selection
    }

    pub fn set(&mut self, platform: Platform, on: bool) {
        match platform {
            Platform::YouTube => self.youtube = on,
            Platform::TikTok => self.tiktok = on,
            Platform::Instagram => self.instagram = on,
        }
    }

    pub fn is_selected(&self, platform: Platform) -> bool {
        match platform {
            Platform::YouTube => self.youtube,
            Platform::TikTok => self.tiktok,
            Platform::Instagram => self.instagram,
        }
    }

    /// Selected platforms as wire names, in display order.
    pub fn names(&self) -> Vec<String> {
        Platform::ALL
            .into_iter()
            .filter(|p| self.is_selected(*p))
            .map(|p| p.as_str().to_string())
            .collect()
    }
}
