use anyhow::{Context, Result, anyhow};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    pub api_base: Option<Url>,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigEnv {
    imgup_api_base: Option<Url>,
}

#[derive(Debug)]
pub struct Config {
    pub api_base: Url,
}

fn merge_config(base: ConfigFile, override_config: ConfigEnv) -> Result<Config> {
    let api_base = override_config.imgup_api_base.or(base.api_base).ok_or(anyhow!(
        "No API base URL configured; run `imgup config` or set IMGUP_API_BASE"
    ))?;

    Ok(Config { api_base })
}

fn config_path() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("com", "imgup", "imgup")
        .ok_or(anyhow!("Unable to determine home directory"))?;
    Ok(project_dirs.config_dir().join("config.toml"))
}

pub fn read_config() -> Result<Config> {
    let _ = dotenv();
    let env_config = envy::from_env::<ConfigEnv>().unwrap_or_default();

    let file_config = if let Ok(config) = fs::read_to_string(config_path()?) {
        toml::from_str(&config)?
    } else {
        ConfigFile::default()
    };

    merge_config(file_config, env_config)
}

pub fn write_config(config: ConfigFile) -> Result<()> {
    let path = config_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config directory")?;
    }
    fs::write(&path, toml::to_string_pretty(&config)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Configuration written to {}", path.display());
    Ok(())
}
