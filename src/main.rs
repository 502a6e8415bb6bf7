// src/main.rs

use std::{env, fs::File};

use anyhow::{Context, Result};
use env_logger::Target;

use toksight::{config::Config, ui};

/// Environment variable overriding the configured backend URL.
const URL_ENV: &str = "TOKSIGHT_URL";
/// Environment variable overriding the log file location.
const LOG_ENV: &str = "TOKSIGHT_LOG";

/// Log to a file; the terminal itself belongs to the UI.
fn init_logging() -> Result<()> {
    let path = env::var(LOG_ENV).unwrap_or_else(|_| {
        env::temp_dir()
            .join("toksight.log")
            .to_string_lossy()
            .into_owned()
    });
    let file = File::create(&path).with_context(|| format!("opening log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Backend URL for this run: positional argument first, then the
/// environment, then the config file. Overrides are transient; they never
/// enter the `Config`, so a later save cannot write them back.
fn backend_url(config: &Config, arg: Option<String>, env_url: Option<String>) -> String {
    arg.or(env_url).unwrap_or_else(|| config.backend_url.clone())
}

fn main() -> Result<()> {
    init_logging()?;

    let config = Config::load();
    let url = backend_url(&config, env::args().nth(1), env::var(URL_ENV).ok());
    log::info!("starting against {url}");

    ui::run(config, &url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use toksight::config::DEFAULT_BACKEND_URL;

    #[test]
    fn url_resolution_prefers_arg_then_env_then_file() {
        let config = Config::default();
        assert_eq!(
            backend_url(
                &config,
                Some("http://a:1".to_string()),
                Some("http://b:2".to_string())
            ),
            "http://a:1"
        );
        assert_eq!(
            backend_url(&config, None, Some("http://b:2".to_string())),
            "http://b:2"
        );
        assert_eq!(backend_url(&config, None, None), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn url_overrides_never_reach_a_config_save() {
        let config = Config::default();
        let url = backend_url(&config, None, Some("http://10.0.0.9:7654".to_string()));
        assert_eq!(url, "http://10.0.0.9:7654");

        // What a save would write still carries the file's own URL.
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(!text.contains("10.0.0.9"));
        assert!(text.contains(DEFAULT_BACKEND_URL));
    }
}
