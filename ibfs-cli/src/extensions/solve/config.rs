//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use ibfs_core::solver::{Builder, MethodType};
use ibfs_core::utils::{Environment, GenericResult};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A solver configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies methods to run, in the given order. Default is all methods.
    pub methods: Option<Vec<String>>,
    /// Specifies whether every allocation should be checked for feasibility. Default is false.
    pub check: Option<bool>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A telemetry configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
}

impl Config {
    /// Returns true if logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()).is_some_and(|logging| logging.enabled)
    }
}

fn configure_from_methods(builder: Builder, methods: &Option<Vec<String>>) -> GenericResult<Builder> {
    match methods {
        Some(methods) if methods.is_empty() => Err("at least one method should be specified".into()),
        Some(methods) => {
            let methods = methods.iter().map(|method| method.parse::<MethodType>()).collect::<GenericResult<Vec<_>>>()?;
            Ok(builder.with_methods(methods))
        }
        None => Ok(builder),
    }
}

fn configure_from_telemetry(builder: Builder, config: &Config) -> GenericResult<Builder> {
    let environment = if config.is_logging_enabled() { Environment::default() } else { Environment::silent() };

    Ok(builder.with_environment(environment))
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a solver `Builder` from config.
pub fn create_builder_from_config(config: &Config) -> GenericResult<Builder> {
    let mut builder = Builder::default();

    builder = configure_from_telemetry(builder, config)?;
    builder = configure_from_methods(builder, &config.methods)?;
    builder = builder.with_check(config.check.unwrap_or(false));

    Ok(builder)
}
