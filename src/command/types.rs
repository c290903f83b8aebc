use std::fmt;

/// Every control a panel can expose. The set is closed; panels pick a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionId {
    PlayPause,
    SeekBack10s,
    SeekForward10s,
    Mute,
    VolumeUp5,
    VolumeDown5,
    FocusUp,
    FocusDown,
    FocusLeft,
    FocusRight,
    ToggleFullscreen,
}

impl ActionId {
    pub const ALL: [ActionId; 11] = [
        Self::PlayPause,
        Self::SeekBack10s,
        Self::SeekForward10s,
        Self::Mute,
        Self::VolumeUp5,
        Self::VolumeDown5,
        Self::FocusUp,
        Self::FocusDown,
        Self::FocusLeft,
        Self::FocusRight,
        Self::ToggleFullscreen,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlayPause => "play-pause",
            Self::SeekBack10s => "seek-back-10s",
            Self::SeekForward10s => "seek-forward-10s",
            Self::Mute => "mute",
            Self::VolumeUp5 => "volume-up-5",
            Self::VolumeDown5 => "volume-down-5",
            Self::FocusUp => "focus-up",
            Self::FocusDown => "focus-down",
            Self::FocusLeft => "focus-left",
            Self::FocusRight => "focus-right",
            Self::ToggleFullscreen => "toggle-fullscreen",
        }
    }

    /// Text shown on the button.
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayPause => "Play/Pause",
            Self::SeekBack10s => "Rewind 10s",
            Self::SeekForward10s => "Forward 10s",
            Self::Mute => "Mute",
            Self::VolumeUp5 => "Vol +",
            Self::VolumeDown5 => "Vol -",
            Self::FocusUp => "Focus Up",
            Self::FocusDown => "Focus Down",
            Self::FocusLeft => "Focus Left",
            Self::FocusRight => "Focus Right",
            Self::ToggleFullscreen => "Fullscreen",
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A program and its literal argument vector. Never passed through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Program name followed by its arguments.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv().join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Ok,
    /// The program could not be started at all.
    ToolMissing { program: String },
    /// The program ran and exited non-zero. `exit_code` is `None` when it was
    /// killed by a signal.
    ToolFailed {
        exit_code: Option<i32>,
        message: String,
    },
}

impl ExecutionOutcome {
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Ok)
    }
}
