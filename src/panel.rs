//! The button grids shown by each panel variant.
//!
//! A panel is a list of rows; rows may have different lengths. Selection is a
//! `(row, col)` pair and always points at an existing button.

use crate::command::ActionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Variant {
    /// Play/pause and seeking.
    Media,
    /// Media controls plus volume.
    MediaVolume,
    /// Media, volume and window focus.
    #[default]
    Full,
}

impl Variant {
    pub fn id(self) -> &'static str {
        match self {
            Self::Media => "media",
            Self::MediaVolume => "media-volume",
            Self::Full => "full",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

type Rows = &'static [&'static [ActionId]];

const MEDIA_ROWS: Rows = &[
    &[ActionId::PlayPause],
    &[ActionId::SeekBack10s, ActionId::SeekForward10s],
];

const MEDIA_VOLUME_ROWS: Rows = &[
    &[ActionId::Mute, ActionId::VolumeDown5, ActionId::VolumeUp5],
    &[ActionId::PlayPause],
    &[ActionId::SeekBack10s, ActionId::SeekForward10s],
];

const FULL_ROWS: Rows = &[
    &[ActionId::Mute, ActionId::VolumeDown5, ActionId::VolumeUp5],
    &[ActionId::PlayPause],
    &[ActionId::SeekBack10s, ActionId::SeekForward10s],
    &[ActionId::FocusUp],
    &[
        ActionId::FocusLeft,
        ActionId::ToggleFullscreen,
        ActionId::FocusRight,
    ],
    &[ActionId::FocusDown],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    variant: Variant,
    rows: Rows,
}

impl Panel {
    pub fn for_variant(variant: Variant) -> Self {
        let rows = match variant {
            Variant::Media => MEDIA_ROWS,
            Variant::MediaVolume => MEDIA_VOLUME_ROWS,
            Variant::Full => FULL_ROWS,
        };
        Self { variant, rows }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn rows(&self) -> Rows {
        self.rows
    }

    pub fn actions(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    pub fn contains(&self, action: ActionId) -> bool {
        self.actions().any(|candidate| candidate == action)
    }

    pub fn action_at(&self, position: (usize, usize)) -> Option<ActionId> {
        let (row, col) = position;
        self.rows.get(row)?.get(col).copied()
    }

    pub fn position_of(&self, action: ActionId) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row, buttons)| {
            buttons
                .iter()
                .position(|candidate| *candidate == action)
                .map(|col| (row, col))
        })
    }

    /// Moves the selection one step, stopping at the grid edges. Moving
    /// between rows of different lengths clamps the column.
    pub fn step(&self, position: (usize, usize), direction: Direction) -> (usize, usize) {
        let (row, col) = self.clamp(position);
        let last_row = self.rows.len().saturating_sub(1);
        match direction {
            Direction::Up => self.clamp((row.saturating_sub(1), col)),
            Direction::Down => self.clamp(((row + 1).min(last_row), col)),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => self.clamp((row, col + 1)),
        }
    }

    pub fn clamp(&self, position: (usize, usize)) -> (usize, usize) {
        let last_row = self.rows.len().saturating_sub(1);
        let row = position.0.min(last_row);
        let row_len = self.rows.get(row).map_or(0, |buttons| buttons.len());
        (row, position.1.min(row_len.saturating_sub(1)))
    }

    /// Play/Pause is the natural starting point on every panel.
    pub fn initial_selection(&self) -> (usize, usize) {
        self.position_of(ActionId::PlayPause).unwrap_or((0, 0))
    }
}

#[cfg(test)]
mod tests {
    use crate::command::ActionId;

    use super::{Direction, Panel, Variant};

    #[test]
    fn variants_grow_by_successive_groups() {
        let media = Panel::for_variant(Variant::Media);
        let volume = Panel::for_variant(Variant::MediaVolume);
        let full = Panel::for_variant(Variant::Full);

        assert_eq!(media.actions().count(), 3);
        assert_eq!(volume.actions().count(), 6);
        assert_eq!(full.actions().count(), ActionId::ALL.len());
        assert!(media.actions().all(|action| volume.contains(action)));
        assert!(volume.actions().all(|action| full.contains(action)));
    }

    #[test]
    fn no_panel_repeats_a_button() {
        for variant in [Variant::Media, Variant::MediaVolume, Variant::Full] {
            let panel = Panel::for_variant(variant);
            let mut actions: Vec<ActionId> = panel.actions().collect();
            let total = actions.len();
            actions.sort_unstable();
            actions.dedup();
            assert_eq!(actions.len(), total, "{variant:?}");
        }
    }

    #[test]
    fn step_clamps_columns_between_uneven_rows() {
        let panel = Panel::for_variant(Variant::MediaVolume);

        // Vol + (row 0, col 2) down onto the single Play/Pause button.
        assert_eq!(panel.step((0, 2), Direction::Down), (1, 0));
        assert_eq!(panel.step((1, 0), Direction::Up), (0, 0));
        assert_eq!(panel.step((2, 1), Direction::Right), (2, 1));
        assert_eq!(panel.step((2, 1), Direction::Down), (2, 1));
        assert_eq!(panel.step((0, 0), Direction::Left), (0, 0));
        assert_eq!(panel.step((0, 0), Direction::Up), (0, 0));
    }

    #[test]
    fn initial_selection_is_play_pause() {
        for variant in [Variant::Media, Variant::MediaVolume, Variant::Full] {
            let panel = Panel::for_variant(variant);
            assert_eq!(
                panel.action_at(panel.initial_selection()),
                Some(ActionId::PlayPause)
            );
        }
    }

    #[test]
    fn full_panel_places_fullscreen_between_left_and_right() {
        let panel = Panel::for_variant(Variant::Full);
        let (row, col) = panel
            .position_of(ActionId::ToggleFullscreen)
            .expect("fullscreen should be on the full panel");
        assert_eq!(panel.action_at((row, col - 1)), Some(ActionId::FocusLeft));
        assert_eq!(panel.action_at((row, col + 1)), Some(ActionId::FocusRight));
        assert_eq!(panel.action_at((row - 1, 0)), Some(ActionId::FocusUp));
        assert_eq!(panel.action_at((row + 1, 0)), Some(ActionId::FocusDown));
    }
}
