use std::io::Write;

use crate::{
    env::GetEnv,
    framework::{Bootstrap, ConfigSource},
    metadata::file_metadata,
    classify, Error, ErrorKind, Options, Result,
};

use super::{env_file::report_load_error, line, preview, title, Status};

/// The collaborators `debug_config` queries besides the filesystem.
pub struct Sources<'a> {
    /// Live process environment.
    pub process: &'a dyn GetEnv,
    /// Server variable table.
    pub server: &'a dyn GetEnv,
    pub bootstrap: &'a dyn Bootstrap,
}

/// Checks where the key can be found: the environment file, the process
/// environment, the server variables and the booted configuration. Then
/// looks at the application's config and bootstrap files and the
/// environment file's permissions.
///
/// Each source is reported on its own, nothing is reconciled. Only a missing
/// or unreadable environment file stops the run.
pub fn debug_config(options: &Options, sources: &Sources<'_>, out: &mut dyn Write) -> Result<()> {
    let key = options.key.as_str();

    title(out, "Application configuration check")?;

    writeln!(out, "1. Environment file:")?;
    let env_file = options.env_file();
    match options.inspector().expect_key() {
        Ok(entry) => {
            line(out, Status::Ok, format_args!("file exists: {}", env_file.display()))?;
            if classify(entry.value()).is_empty() {
                line(out, Status::Fail, format_args!("{key} NOT set in the file, line {} has an empty value", entry.lineno()))?;
            } else {
                line(out, Status::Ok, format_args!("{key} found in the file: {}", preview(entry.value())))?;
            }
        }
        Err(err) if err.kind() == ErrorKind::KeyNotFound => {
            line(out, Status::Ok, format_args!("file exists: {}", env_file.display()))?;
            line(out, Status::Fail, format_args!("{key} NOT found in the file"))?;
        }
        Err(err) => {
            report_load_error(out, &err)?;
            return Err(err);
        }
    }

    writeln!(out)?;
    writeln!(out, "2. Environment variables:")?;
    for (label, env) in [("process", sources.process), ("server", sources.server)] {
        let value = env.get_str(key).unwrap_or_else(|| "NOT DEFINED".to_owned());
        writeln!(out, "       {key} ({label}): {value}")?;
    }

    writeln!(out)?;
    writeln!(out, "3. Application configuration:")?;
    if let Err(err) = report_app_config(out, sources.bootstrap, key) {
        if err.kind() != ErrorKind::InitializationFailure {
            return Err(err);
        }
        tracing::warn!("{err}");
        line(out, Status::Fail, format_args!("error loading the configuration: {err}"))?;
    }

    writeln!(out)?;
    writeln!(out, "4. Config file {}:", crate::options::APP_CONFIG_PATH)?;
    let app_config_path = options.app_config_path();
    if app_config_path.is_file() {
        line(out, Status::Ok, "file exists")?;
        let reference = format!("env('{key}')");
        match crate::load(&app_config_path) {
            Ok(contents) => {
                if contents.contains(&reference) {
                    line(out, Status::Ok, format_args!("it uses {reference}"))?;
                } else {
                    line(out, Status::Fail, format_args!("it does NOT use {reference}"))?;
                }
            }
            Err(err) => line(out, Status::Fail, format_args!("could not read it: {err}"))?,
        }
    } else {
        line(out, Status::Fail, "file does NOT exist")?;
    }

    writeln!(out)?;
    writeln!(out, "5. Bootstrap file {}:", crate::options::BOOTSTRAP_PATH)?;
    if options.bootstrap_path().is_file() {
        line(out, Status::Ok, "file exists")?;
    } else {
        line(out, Status::Fail, "file does NOT exist")?;
    }

    writeln!(out)?;
    writeln!(out, "6. Permissions:")?;
    match file_metadata(env_file) {
        Ok(metadata) => {
            writeln!(out, "       Mode of {}: {}", env_file.display(), metadata.mode)?;
            writeln!(out, "       Owner: {}", metadata.owner)?;
            writeln!(out, "       Group: {}", metadata.group)?;
        }
        Err(err) => line(out, Status::Fail, format_args!("could not query the file metadata: {err}"))?,
    }

    writeln!(out)?;
    writeln!(out, "Done")?;

    Ok(())
}

/// Everything after a successful bootstrap is still inside the failure scope,
/// so a lookup error ends this step like a bootstrap error does.
fn report_app_config(out: &mut dyn Write, bootstrap: &dyn Bootstrap, key: &str) -> Result<()> {
    let config: Box<dyn ConfigSource> = bootstrap.bootstrap().map_err(initialization_failure)?;
    line(out, Status::Ok, "configuration loaded")?;

    let app_key = config.get("app.key").map_err(initialization_failure)?.filter(|value| value.is_truthy());
    match app_key {
        Some(value) => writeln!(out, "       {key} in config: {value}")?,
        None => writeln!(out, "       {key} in config: EMPTY")?,
    }

    let app_env = config.get("app.env").map_err(initialization_failure)?.filter(|value| value.is_truthy());
    match app_env {
        Some(value) => writeln!(out, "       app.env in config: {value}")?,
        None => writeln!(out, "       app.env in config: NOT DEFINED")?,
    }

    let app_debug = config.get("app.debug").map_err(initialization_failure)?.is_some_and(|value| value.is_truthy());
    writeln!(out, "       app.debug in config: {app_debug}")?;

    Ok(())
}

fn initialization_failure(err: Error) -> Error {
    if err.kind() == ErrorKind::InitializationFailure {
        err
    } else {
        Error::with_cause(ErrorKind::InitializationFailure, err)
    }
}
