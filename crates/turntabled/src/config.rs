use crate::events::CarouselEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use turntable::{CarouselSettings, ItemDescriptor};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselSettings,
    #[serde(default)]
    pub items: Vec<ItemDescriptor>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "turntable", "turntable")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn environment() -> config::Environment {
    // TURNTABLE_CAROUSEL__RADIUS=250 -> carousel.radius
    config::Environment::with_prefix("TURNTABLE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&get_config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        log::warn!("No config file at {}, using defaults", path.display());
    }
    layered(config::File::from(path).required(false), environment())
}

/// Environment variables win over the file.
fn layered<F>(file: F, env: config::Environment) -> Result<Config, ConfigError>
where
    F: config::Source + Send + Sync + 'static,
{
    let s = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Writes the bundled template on first start, then loads whatever is there.
pub fn load_or_setup() -> Config {
    if let Ok(path) = get_config_path()
        && !path.exists()
    {
        match write_default_config() {
            Ok(path) => log::info!("Wrote default configuration to {}", path.display()),
            Err(e) => log::warn!("Failed to write default configuration: {}", e),
        }
    }

    load_config().unwrap_or_else(|e| {
        log::error!("Failed to load config, starting with no items: {}", e);
        Config::default()
    })
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub async fn run_async_watcher(tx: Sender<CarouselEvent>) {
    if let Err(e) = watch_config(tx).await {
        log::error!("Config watcher error: {}", e);
    }
}

async fn watch_config(tx: Sender<CarouselEvent>) -> Result<(), ConfigError> {
    let config_path = get_config_path()?;
    let config_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .ok_or(ConfigError::ConfigDirNotFound)?;
    fs_err::create_dir_all(&config_dir)?;

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(&config_dir, RecursiveMode::NonRecursive)?;

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                if is_config_change(&event, &config_path)
                    && tx.send(CarouselEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
    Ok(())
}

fn is_config_change(event: &Event, config_path: &Path) -> bool {
    let meaningful_event = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    );
    meaningful_event && event.paths.iter().any(|p| p == config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind, RemoveKind};
    use turntable::{Category, FlipRange, Radius};

    #[test]
    fn test_default_config_parses() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.carousel, CarouselSettings::default());
        assert!(config.items.is_empty());
    }

    #[test]
    fn test_items_and_settings() {
        let toml = r#"
            [carousel]
            radius = 420.5
            flip_range = 2

            [[items]]
            source = "photos/front.jpg"
            category = "exterior"

            [[items]]
            source = "photos/dash.jpg"
            flagged = true
        "#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.carousel.radius.get(), 420.5);
        assert_eq!(config.carousel.flip_range, FlipRange::new(2).unwrap());
        assert_eq!(config.items.len(), 2);
        assert_eq!(config.items[0].category, Some(Category::new("exterior")));
        assert!(!config.items[0].flagged);
        assert!(config.items[1].flagged);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let cases = [
            "[carousel]\nflip_range = 0",
            "[carousel]\nflip_range = -2",
            "[carousel]\nradius = -10.0",
            "[carousel]\nradius = nan",
            "[carousel]\nradius = inf",
        ];
        for toml in cases {
            assert!(parse_config(toml).is_err(), "{toml}");
        }
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = config::File::from_str(
            r#"
            [carousel]
            radius = 300.0
            flip_range = 3

            [[items]]
            source = "photos/front.jpg"
            "#,
            config::FileFormat::Toml,
        );
        let vars = [
            ("TURNTABLE_CAROUSEL__RADIUS", "250"),
            ("TURNTABLE_CAROUSEL__FLIP_RANGE", "2"),
            ("UNRELATED_CAROUSEL__RADIUS", "1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = layered(file, environment().source(Some(vars))).unwrap();
        assert_eq!(config.carousel.radius, Radius::new(250.0).unwrap());
        assert_eq!(config.carousel.flip_range, FlipRange::new(2).unwrap());
        assert_eq!(config.items.len(), 1);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir()
            .join(format!("turntable-missing-{}", std::process::id()))
            .join("config.toml");
        assert!(!path.exists());

        let file = config::File::from(path.as_path()).required(false);
        let config = layered(file, environment().source(Some(config::Map::new()))).unwrap();
        assert_eq!(config, Config::default());
        assert!(load_config_from(&path).is_ok());
    }

    #[test]
    fn test_only_config_file_changes_trigger_reload() {
        let path = PathBuf::from("/tmp/turntable/config.toml");
        let other = PathBuf::from("/tmp/turntable/notes.txt");

        let cases = [
            (EventKind::Modify(ModifyKind::Any), &path, true),
            (EventKind::Create(CreateKind::File), &path, true),
            (EventKind::Remove(RemoveKind::File), &path, true),
            (EventKind::Access(AccessKind::Any), &path, false),
            (EventKind::Modify(ModifyKind::Any), &other, false),
        ];
        for (kind, changed, expected) in cases {
            let event = Event::new(kind).add_path(changed.clone());
            assert_eq!(is_config_change(&event, &path), expected, "{event:?}");
        }
    }
}
