//! Demo configuration: image sources, embedded defaults + user override.

use std::path::PathBuf;

use serde::Deserialize;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

const FALLBACK_BEFORE: &str = "https://picsum.photos/id/1015/900/600";
const FALLBACK_AFTER: &str = "https://picsum.photos/id/1015/900/600?grayscale";

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    images: ImagesConfig,
}

#[derive(Deserialize, Default)]
struct ImagesConfig {
    before: Option<String>,
    after: Option<String>,
}

/// Resolved demo configuration.
#[derive(Clone)]
pub struct DemoConfig {
    pub before: String,
    pub after: String,
}

impl DemoConfig {
    /// Load the embedded defaults, then apply the user override if present.
    pub fn load() -> Self {
        let mut base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");

        if let Some(path) = user_config_path() {
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => merge_images(&mut base.images, user.images),
                        Err(e) => {
                            log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                        }
                    },
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        DemoConfig {
            before: base
                .images
                .before
                .unwrap_or_else(|| FALLBACK_BEFORE.to_string()),
            after: base
                .images
                .after
                .unwrap_or_else(|| FALLBACK_AFTER.to_string()),
        }
    }
}

fn merge_images(base: &mut ImagesConfig, user: ImagesConfig) {
    if user.before.is_some() {
        base.before = user.before;
    }
    if user.after.is_some() {
        base.after = user.after;
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("beforeafter-demo").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let parsed: ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert!(parsed.images.before.is_some());
        assert!(parsed.images.after.is_some());
    }

    #[test]
    fn user_values_win_over_base() {
        let mut base = ImagesConfig {
            before: Some("base-before.png".into()),
            after: Some("base-after.png".into()),
        };
        let user = ImagesConfig {
            before: Some("user-before.png".into()),
            after: None,
        };
        merge_images(&mut base, user);
        assert_eq!(base.before.as_deref(), Some("user-before.png"));
        assert_eq!(base.after.as_deref(), Some("base-after.png"));
    }
}
