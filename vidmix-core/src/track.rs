//! Track specifications parsed from CLI spec strings.
//!
//! A video spec is `file[:volume]`; an audio spec is
//! `file[:volume[:delay[:repeat]]]`. Volume must be greater than zero,
//! delay must be non-negative, and repeat is a non-negative integer or
//! the sentinel `inf`/`infinite` meaning "as many full loops as fit".

use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;
use std::str::FromStr;

/// Requested repeat count for an audio track. `Count(0)` means unset,
/// which resolves to a single play if the track fits at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Unset,
    Count(u32),
    Infinite,
}

impl FromStr for Repeat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inf" | "infinite" => Ok(Repeat::Infinite),
            _ => match s.parse::<u32>() {
                Ok(0) => Ok(Repeat::Unset),
                Ok(n) => Ok(Repeat::Count(n)),
                Err(_) => Err(format!(
                    "invalid repeat '{s}' (expected a non-negative integer or 'infinite')"
                )),
            },
        }
    }
}

/// One external audio track to mix into the video. Immutable once parsed.
#[derive(Debug, Clone)]
pub struct AudioTrack {
    pub file: PathBuf,
    pub volume: f64,
    pub delay: f64,
    pub repeat: Repeat,
}

impl AudioTrack {
    /// Parses an audio spec string `file[:volume[:delay[:repeat]]]`.
    pub fn parse(spec: &str) -> CoreResult<Self> {
        let mut parts = spec.split(':');
        let file = parts.next().unwrap_or_default();
        if file.is_empty() {
            return Err(CoreError::InvalidInput(format!(
                "empty file in audio spec '{spec}'"
            )));
        }

        let volume = parse_volume(parts.next(), file)?;
        let delay = parse_delay(parts.next(), file)?;
        let repeat = match parts.next() {
            None | Some("") => Repeat::default(),
            Some(r) => r
                .parse()
                .map_err(|e: String| CoreError::InvalidInput(format!("{e} (for {file})")))?,
        };

        if parts.next().is_some() {
            return Err(CoreError::InvalidInput(format!(
                "too many fields in audio spec '{spec}'"
            )));
        }

        Ok(Self {
            file: PathBuf::from(file),
            volume,
            delay,
            repeat,
        })
    }
}

/// The video being mixed into, with the volume applied to its own audio.
#[derive(Debug, Clone)]
pub struct VideoSpec {
    pub file: PathBuf,
    pub volume: f64,
}

impl VideoSpec {
    /// Parses a video spec string `file[:volume]`.
    pub fn parse(spec: &str) -> CoreResult<Self> {
        let mut parts = spec.split(':');
        let file = parts.next().unwrap_or_default();
        if file.is_empty() {
            return Err(CoreError::InvalidInput(format!(
                "empty file in video spec '{spec}'"
            )));
        }

        let volume = parse_volume(parts.next(), file)?;

        if parts.next().is_some() {
            return Err(CoreError::InvalidInput(format!(
                "too many fields in video spec '{spec}'"
            )));
        }

        Ok(Self {
            file: PathBuf::from(file),
            volume,
        })
    }
}

fn parse_volume(field: Option<&str>, label: &str) -> CoreResult<f64> {
    let volume = match field {
        None | Some("") => 1.0,
        Some(v) => v.parse::<f64>().map_err(|_| {
            CoreError::InvalidInput(format!("invalid volume for {label}: '{v}'"))
        })?,
    };
    if volume <= 0.0 || !volume.is_finite() {
        return Err(CoreError::InvalidInput(format!(
            "volume for {label} must be greater than 0 (got {volume})"
        )));
    }
    Ok(volume)
}

fn parse_delay(field: Option<&str>, label: &str) -> CoreResult<f64> {
    let delay = match field {
        None | Some("") => 0.0,
        Some(d) => d.parse::<f64>().map_err(|_| {
            CoreError::InvalidInput(format!("invalid delay for {label}: '{d}'"))
        })?,
    };
    if delay < 0.0 || !delay.is_finite() {
        return Err(CoreError::InvalidInput(format!(
            "delay for {label} must be >= 0 (got {delay})"
        )));
    }
    Ok(delay)
}
