use std::collections::BTreeMap;

use crate::panel::{Panel, Variant};

use super::types::{ActionId, CommandSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub action: ActionId,
    pub program: &'static str,
    pub args: &'static [&'static str],
}

const COMMAND_SPECS: [RegistryEntry; 11] = [
    RegistryEntry {
        action: ActionId::PlayPause,
        program: "playerctl",
        args: &["play-pause"],
    },
    RegistryEntry {
        action: ActionId::SeekBack10s,
        program: "playerctl",
        args: &["position", "10-"],
    },
    RegistryEntry {
        action: ActionId::SeekForward10s,
        program: "playerctl",
        args: &["position", "10+"],
    },
    RegistryEntry {
        action: ActionId::Mute,
        program: "wpctl",
        args: &["set-mute", "@DEFAULT_AUDIO_SINK@", "toggle"],
    },
    RegistryEntry {
        action: ActionId::VolumeUp5,
        program: "wpctl",
        args: &["set-volume", "@DEFAULT_AUDIO_SINK@", "5%+"],
    },
    RegistryEntry {
        action: ActionId::VolumeDown5,
        program: "wpctl",
        args: &["set-volume", "@DEFAULT_AUDIO_SINK@", "5%-"],
    },
    RegistryEntry {
        action: ActionId::FocusUp,
        program: "hyprctl",
        args: &["dispatch", "movefocus", "u"],
    },
    RegistryEntry {
        action: ActionId::FocusDown,
        program: "hyprctl",
        args: &["dispatch", "movefocus", "d"],
    },
    RegistryEntry {
        action: ActionId::FocusLeft,
        program: "hyprctl",
        args: &["dispatch", "movefocus", "l"],
    },
    RegistryEntry {
        action: ActionId::FocusRight,
        program: "hyprctl",
        args: &["dispatch", "movefocus", "r"],
    },
    RegistryEntry {
        action: ActionId::ToggleFullscreen,
        program: "hyprctl",
        args: &["dispatch", "fullscreen", "0"],
    },
];

pub fn command_registry() -> &'static [RegistryEntry] {
    &COMMAND_SPECS
}

impl RegistryEntry {
    pub fn to_spec(&self) -> CommandSpec {
        CommandSpec::new(self.program, self.args.iter().copied())
    }
}

/// Immutable `ActionId -> CommandSpec` mapping, built once at startup and
/// shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandTable {
    entries: BTreeMap<ActionId, CommandSpec>,
}

impl CommandTable {
    /// Every action in the registry.
    pub fn full() -> Self {
        Self::from_entries(
            command_registry()
                .iter()
                .map(|entry| (entry.action, entry.to_spec())),
        )
    }

    /// Only the actions the variant's panel shows.
    pub fn for_variant(variant: Variant) -> Self {
        let panel = Panel::for_variant(variant);
        Self::from_entries(
            command_registry()
                .iter()
                .filter(|entry| panel.contains(entry.action))
                .map(|entry| (entry.action, entry.to_spec())),
        )
    }

    /// Later entries for the same action replace earlier ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ActionId, CommandSpec)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, action: ActionId) -> Option<&CommandSpec> {
        self.entries.get(&action)
    }

    pub fn contains(&self, action: ActionId) -> bool {
        self.entries.contains_key(&action)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &CommandSpec)> {
        self.entries.iter().map(|(action, spec)| (*action, spec))
    }
}
