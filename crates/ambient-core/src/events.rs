use crate::error::ParseError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GazeEventKind {
    Move,
    Focus,
    Blur,
}

impl GazeEventKind {
    pub const ALL: [GazeEventKind; 3] = [
        GazeEventKind::Move,
        GazeEventKind::Focus,
        GazeEventKind::Blur,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            GazeEventKind::Move => 0,
            GazeEventKind::Focus => 1,
            GazeEventKind::Blur => 2,
        }
    }

    /// Name used for the document-level broadcast.
    pub fn dom_name(self) -> &'static str {
        match self {
            GazeEventKind::Move => "gazemove",
            GazeEventKind::Focus => "gazefocus",
            GazeEventKind::Blur => "gazeblur",
        }
    }
}

impl FromStr for GazeEventKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "move" | "gazemove" => Ok(GazeEventKind::Move),
            "focus" | "gazefocus" => Ok(GazeEventKind::Focus),
            "blur" | "gazeblur" => Ok(GazeEventKind::Blur),
            other => Err(ParseError::GazeEventKind(other.to_string())),
        }
    }
}

/// Notification produced by the gaze tracker. Times are milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub enum GazeEvent<E> {
    Move {
        x: f64,
        y: f64,
        timestamp_ms: f64,
    },
    /// `focus_duration_ms` is `None` when focus was just acquired and set on
    /// the repeated long-dwell notifications.
    Focus {
        element: E,
        x: f64,
        y: f64,
        focus_duration_ms: Option<f64>,
    },
    Blur {
        element: E,
        duration_ms: f64,
        x: f64,
        y: f64,
    },
}

impl<E> GazeEvent<E> {
    pub fn kind(&self) -> GazeEventKind {
        match self {
            GazeEvent::Move { .. } => GazeEventKind::Move,
            GazeEvent::Focus { .. } => GazeEventKind::Focus,
            GazeEvent::Blur { .. } => GazeEventKind::Blur,
        }
    }

    pub fn element(&self) -> Option<&E> {
        match self {
            GazeEvent::Move { .. } => None,
            GazeEvent::Focus { element, .. } | GazeEvent::Blur { element, .. } => Some(element),
        }
    }
}
