use super::types::ActionId;

/// Resolves a textual control identifier to an [`ActionId`].
///
/// Accepts the kebab-case ids from [`ActionId::as_str`] as well as the older
/// widget ids (`play-pause-button`, `vol_up_button`, ...). Matching ignores
/// case and treats `_` like `-`. Unknown identifiers yield `None`.
pub fn parse_action_id(text: &str) -> Option<ActionId> {
    let normalized: String = text
        .trim()
        .chars()
        .map(|c| if c == '_' { '-' } else { c })
        .flat_map(char::to_lowercase)
        .collect();
    let normalized = normalized
        .strip_suffix("-button")
        .unwrap_or(normalized.as_str());

    if let Some(action) = ActionId::ALL
        .into_iter()
        .find(|action| action.as_str() == normalized)
    {
        return Some(action);
    }

    match normalized {
        "rewind" => Some(ActionId::SeekBack10s),
        "forward" => Some(ActionId::SeekForward10s),
        "vol-up" => Some(ActionId::VolumeUp5),
        "vol-down" => Some(ActionId::VolumeDown5),
        "fullscreen" => Some(ActionId::ToggleFullscreen),
        _ => None,
    }
}
