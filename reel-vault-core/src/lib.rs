//! Shared vocabulary for the reel-vault media library.
//!
//! This crate defines the enums carried through import candidates and catalog
//! records, plus OS-agnostic path-string helpers. It has no I/O and no
//! persistence dependencies; the catalog and import crates build on it.

use serde::{Deserialize, Serialize};

pub mod paths;

/// How a file is transferred into the library tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementMode {
    /// Move the file; nothing is left behind at the source.
    Move,
    /// Copy the file; the source stays in place (e.g., a torrent still seeding).
    Copy,
    /// Hard-link the file; requires source and target on the same filesystem.
    HardLink,
}

impl PlacementMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Copy => "copy",
            Self::HardLink => "hardlink",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "move" => Some(Self::Move),
            "copy" => Some(Self::Copy),
            "hardlink" | "hard-link" | "link" => Some(Self::HardLink),
            _ => None,
        }
    }
}

/// Source/resolution quality detected for a media file.
///
/// Detection happens upstream; this core only carries the value into the
/// catalog record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    #[default]
    Unknown,
    Cam,
    Telesync,
    Dvd,
    Hdtv720,
    Hdtv1080,
    Webdl720,
    Webdl1080,
    Bluray720,
    Bluray1080,
    Bluray2160,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Cam => "cam",
            Self::Telesync => "telesync",
            Self::Dvd => "dvd",
            Self::Hdtv720 => "hdtv720",
            Self::Hdtv1080 => "hdtv1080",
            Self::Webdl720 => "webdl720",
            Self::Webdl1080 => "webdl1080",
            Self::Bluray720 => "bluray720",
            Self::Bluray1080 => "bluray1080",
            Self::Bluray2160 => "bluray2160",
        }
    }

    pub fn from_str_loose(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "cam" => Self::Cam,
            "telesync" | "ts" => Self::Telesync,
            "dvd" => Self::Dvd,
            "hdtv720" | "hdtv-720p" => Self::Hdtv720,
            "hdtv1080" | "hdtv-1080p" => Self::Hdtv1080,
            "webdl720" | "webdl-720p" | "web-dl-720p" => Self::Webdl720,
            "webdl1080" | "webdl-1080p" | "web-dl-1080p" => Self::Webdl1080,
            "bluray720" | "bluray-720p" => Self::Bluray720,
            "bluray1080" | "bluray-1080p" => Self::Bluray1080,
            "bluray2160" | "bluray-2160p" => Self::Bluray2160,
            _ => Self::Unknown,
        }
    }
}
