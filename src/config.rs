use std::ffi::OsString;
use std::path::PathBuf;

use crate::panel::Variant;

/// Runtime settings. Built once from command-line flags and the environment;
/// there is no config file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub variant: Variant,
    /// `None` disables logging.
    pub log_path: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    pub fn resolve(variant: Variant, log_file: Option<PathBuf>, verbose: bool) -> Self {
        Self::resolve_with_env(variant, log_file, verbose, |key| std::env::var_os(key))
    }

    pub fn resolve_with_env<F>(
        variant: Variant,
        log_file: Option<PathBuf>,
        verbose: bool,
        env: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let log_path = log_file
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| default_log_path_with_env(env));
        Self {
            variant,
            log_path,
            verbose,
        }
    }
}

fn default_log_path_with_env<F>(env: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    let non_empty = |key: &str| env(key).filter(|value| !value.is_empty());

    if let Some(explicit) = non_empty("RCTL_LOG_PATH") {
        return Some(PathBuf::from(explicit));
    }
    if let Some(state) = non_empty("XDG_STATE_HOME") {
        return Some(PathBuf::from(state).join("rctl").join("rctl.log"));
    }
    if let Some(home) = non_empty("HOME") {
        return Some(
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("rctl")
                .join("rctl.log"),
        );
    }
    None
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::ffi::OsString;
    use std::path::PathBuf;

    use crate::panel::Variant;

    use super::Config;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), OsString::from(value)))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn explicit_log_file_wins_over_environment() {
        let config = Config::resolve_with_env(
            Variant::Media,
            Some(PathBuf::from("/tmp/custom.log")),
            true,
            env(&[("RCTL_LOG_PATH", "/tmp/env.log")]),
        );
        assert_eq!(config.variant, Variant::Media);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/custom.log")));
        assert!(config.verbose);
    }

    #[test]
    fn log_path_falls_back_through_env_vars() {
        let config = Config::resolve_with_env(
            Variant::Full,
            None,
            false,
            env(&[("RCTL_LOG_PATH", "/tmp/env.log"), ("HOME", "/home/u")]),
        );
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/env.log")));

        let config = Config::resolve_with_env(
            Variant::Full,
            None,
            false,
            env(&[("XDG_STATE_HOME", "/state"), ("HOME", "/home/u")]),
        );
        assert_eq!(config.log_path, Some(PathBuf::from("/state/rctl/rctl.log")));

        let config = Config::resolve_with_env(
            Variant::Full,
            None,
            false,
            env(&[("XDG_STATE_HOME", ""), ("HOME", "/home/u")]),
        );
        assert_eq!(
            config.log_path,
            Some(PathBuf::from("/home/u/.local/state/rctl/rctl.log"))
        );
    }

    #[test]
    fn logging_is_disabled_without_any_location() {
        let config = Config::resolve_with_env(Variant::Full, Some(PathBuf::new()), false, env(&[]));
        assert_eq!(config.log_path, None);
        assert_eq!(Config::default().variant, Variant::Full);
    }
}
