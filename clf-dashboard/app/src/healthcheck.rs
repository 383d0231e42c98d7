use crate::config::{Config, ConfigError};
use std::ffi::OsString;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Healthcheck failed: {0}")]
pub struct HealthcheckError(String);

/// Port the server would bind with these arguments, after dropping the
/// `healthcheck` subcommand. Flags, env and config file apply as for `run`.
pub fn resolve_port<I, T>(args: I) -> Result<u16, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = args
        .into_iter()
        .map(Into::<OsString>::into)
        .enumerate()
        .filter(|(i, arg)| !(*i == 1 && arg.as_os_str() == "healthcheck"))
        .map(|(_, arg)| arg);
    Ok(Config::from_args_and_file(args)?.http_port)
}

/// Check `/v1/health` on the port resolved from the process arguments.
pub async fn healthcheck() -> Result<(), HealthcheckError> {
    let port = resolve_port(std::env::args_os())
        .map_err(|e| HealthcheckError(format!("Invalid configuration: {e}")))?;
    healthcheck_with_port(port).await
}

pub async fn healthcheck_with_port(port: u16) -> Result<(), HealthcheckError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .map_err(|e| HealthcheckError(format!("Failed to create HTTP client: {e}")))?;

    let url = format!("http://127.0.0.1:{port}/v1/health");

    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|e| HealthcheckError(format!("Request failed: {e}")))?;

    if resp.status().is_success() {
        Ok(())
    } else {
        Err(HealthcheckError(format!(
            "Health endpoint returned status: {}",
            resp.status()
        )))
    }
}
