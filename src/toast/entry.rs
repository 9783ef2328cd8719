// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `ToastEntry` struct along with the `Status` and
//! `Position` enums used throughout the notification system.

use crate::design_tokens::{palette, timing};
use crate::error::Error;
use crate::icons;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Status level determines the visual theme and title text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Operation completed successfully (green).
    Success,
    /// Error requiring attention (red).
    Error,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Informational message (blue).
    Info,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::Success, Status::Error, Status::Warning, Status::Info];

    /// Returns the background color for this status.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Status::Success => palette::SUCCESS_500,
            Status::Error => palette::ERROR_500,
            Status::Warning => palette::WARNING_500,
            Status::Info => palette::INFO_500,
        }
    }

    /// Returns the close-button color for this status, a darker shade of
    /// the background.
    #[must_use]
    pub fn close_button_color(&self) -> Color {
        match self {
            Status::Success => palette::SUCCESS_700,
            Status::Error => palette::ERROR_700,
            Status::Warning => palette::WARNING_700,
            Status::Info => palette::INFO_700,
        }
    }

    /// Returns the fixed title text for this status.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Status::Success => "Success!",
            Status::Error => "Error!",
            Status::Warning => "Warning!",
            Status::Info => "Info!",
        }
    }

    /// Returns the decorative corner image for this status.
    pub fn image(&self) -> Image<Handle> {
        match self {
            Status::Success => icons::bubbles_success(),
            Status::Error => icons::bubbles_error(),
            Status::Warning => icons::bubbles_warning(),
            Status::Info => icons::bubbles_info(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Error => "error",
            Status::Warning => "warning",
            Status::Info => "info",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Status::Success),
            "error" => Ok(Status::Error),
            "warning" => Ok(Status::Warning),
            "info" => Ok(Status::Info),
            other => Err(Error::UnknownStatus(other.to_string())),
        }
    }
}

/// Screen edge a toast slides from and back toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Screen anchor for a toast.
///
/// The anchor determines the static resting place, a horizontal centering
/// for the two `-center` values, and the slide axis used for the
/// enter/exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopRight,
    TopCenter,
    BottomLeft,
    BottomRight,
    #[default]
    BottomCenter,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopRight,
        Position::TopCenter,
        Position::BottomLeft,
        Position::BottomRight,
        Position::BottomCenter,
    ];

    /// Returns the static screen anchor for this position.
    #[must_use]
    pub fn alignment(&self) -> (Horizontal, Vertical) {
        match self {
            Position::TopLeft => (Horizontal::Left, Vertical::Top),
            Position::TopRight => (Horizontal::Right, Vertical::Top),
            Position::TopCenter => (Horizontal::Center, Vertical::Top),
            Position::BottomLeft => (Horizontal::Left, Vertical::Bottom),
            Position::BottomRight => (Horizontal::Right, Vertical::Bottom),
            Position::BottomCenter => (Horizontal::Center, Vertical::Bottom),
        }
    }

    /// Whether this position carries the horizontal centering, applied
    /// regardless of mount state.
    #[must_use]
    pub fn is_centered(&self) -> bool {
        matches!(self, Position::TopCenter | Position::BottomCenter)
    }

    /// Returns the edge the enter/exit slide animates against: corners
    /// slide horizontally toward the matching screen edge, centers slide
    /// vertically off the near edge.
    #[must_use]
    pub fn slide_edge(&self) -> Edge {
        match self {
            Position::TopLeft | Position::BottomLeft => Edge::Left,
            Position::TopRight | Position::BottomRight => Edge::Right,
            Position::TopCenter => Edge::Top,
            Position::BottomCenter => Edge::Bottom,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::TopCenter => "top-center",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
            Position::BottomCenter => "bottom-center",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(Position::TopLeft),
            "top-right" => Ok(Position::TopRight),
            "top-center" => Ok(Position::TopCenter),
            "bottom-left" => Ok(Position::BottomLeft),
            "bottom-right" => Ok(Position::BottomRight),
            "bottom-center" => Ok(Position::BottomCenter),
            other => Err(Error::UnknownPosition(other.to_string())),
        }
    }
}

/// One notification's data, held by the manager.
#[derive(Debug, Clone)]
pub struct ToastEntry {
    /// Caller-supplied identifier, unique among currently held entries.
    id: String,
    /// Status level (determines color, title and decoration).
    status: Status,
    /// Opaque display text.
    message: String,
    /// Auto-dismiss duration; `Duration::ZERO` means sticky.
    duration: Duration,
    /// Screen anchor.
    position: Position,
}

impl ToastEntry {
    /// Creates a new entry with the canonical default duration and position.
    pub fn new(id: impl Into<String>, message: impl Into<String>, status: Status) -> Self {
        Self {
            id: id.into(),
            status,
            message: message.into(),
            duration: timing::DEFAULT_DURATION,
            position: Position::default(),
        }
    }

    /// Creates a success entry.
    pub fn success(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(id, message, Status::Success)
    }

    /// Creates an error entry.
    pub fn error(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(id, message, Status::Error)
    }

    /// Creates a warning entry.
    pub fn warning(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(id, message, Status::Warning)
    }

    /// Creates an info entry.
    pub fn info(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(id, message, Status::Info)
    }

    /// Sets the auto-dismiss duration. `Duration::ZERO` disables both the
    /// countdown and the manager's hard-removal deadline.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Makes the entry sticky: it stays until dismissed.
    #[must_use]
    pub fn sticky(self) -> Self {
        self.with_duration(Duration::ZERO)
    }

    /// Sets the screen anchor.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether this entry never auto-dismisses.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.duration.is_zero()
    }
}
