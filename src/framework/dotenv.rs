use std::{collections::HashMap, ffi::{OsStr, OsString}, path::PathBuf};

use crate::{
    env::{Env, GetEnv},
    inspector::load,
    line_splitter::split_lines,
    Error, ErrorKind, Options, Result,
};

use super::{Bootstrap, ConfigSource, ConfigValue};

/// Boots the application configuration the way the framework does: the
/// bootstrap file has to exist, then the environment file is layered below
/// the parent environment (existing variables are never overwritten).
#[derive(Debug, Clone)]
pub struct DotenvBootstrap<P: GetEnv + Clone + 'static> {
    bootstrap_path: PathBuf,
    env_file: PathBuf,
    key: String,
    parent: P,
}

impl<P: GetEnv + Clone + 'static> DotenvBootstrap<P> {
    #[inline]
    pub fn new(options: &Options, parent: P) -> Self {
        Self {
            bootstrap_path: options.bootstrap_path(),
            env_file: options.env_file.clone(),
            key: options.key.clone(),
            parent,
        }
    }

    fn read_env_file(&self) -> Result<HashMap<OsString, OsString>> {
        let mut env = HashMap::new();

        let contents = match load(&self.env_file) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::FileNotFound => {
                tracing::debug!(path = %self.env_file.display(), "no environment file, using the parent environment only");
                return Ok(env);
            }
            Err(err) => return Err(Error::with_cause(ErrorKind::InitializationFailure, err)),
        };

        for (lineno, line) in split_lines(&contents) {
            let line = trim_export(line.trim());
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                tracing::debug!(lineno, "line without '=' ignored");
                continue;
            };

            let key = key.trim_end_matches(is_space);
            if key.is_empty() {
                tracing::debug!(lineno, "line with empty key ignored");
                continue;
            }

            let Some(value) = extract_value(value.trim_start_matches(is_space)) else {
                tracing::debug!(lineno, "unterminated quoted value of {key:?} ignored");
                continue;
            };

            set_var(&mut env, &self.parent, key.as_ref(), value.as_ref());
        }

        Ok(env)
    }
}

fn trim_export(src: &str) -> &str {
    let Some(left) = src.strip_prefix("export") else {
        return src;
    };

    if !left.starts_with(is_space) {
        return src;
    }

    left.trim_start_matches(is_space)
}

/// Unquotes a value. Double quoted values get `\n`, `\r` and `\"` escapes
/// expanded, single quoted ones are taken verbatim and unquoted ones end at a
/// ` #` comment. `None` for an unterminated quote.
fn extract_value(src: &str) -> Option<String> {
    let Some(quote) = has_quote_prefix(src) else {
        let mut end_of_var = src.len();
        let mut prev_is_space = false;
        for (index, ch) in src.char_indices() {
            if ch == '#' && prev_is_space {
                end_of_var = index;
                break;
            }
            prev_is_space = is_space(ch);
        }
        return Some(src[..end_of_var].trim_end_matches(is_space).to_owned());
    };

    let src = &src[1..];
    let mut escaped = false;
    for (index, ch) in src.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        if ch == '\\' && quote == '"' {
            escaped = true;
        } else if ch == quote {
            let value = &src[..index];
            if quote == '"' {
                return Some(expand_escapes(value));
            }
            return Some(value.to_owned());
        }
    }

    None
}

fn expand_escapes(mut src: &str) -> String {
    let mut buf = String::new();

    while let Some(index) = src.find('\\') {
        buf.push_str(&src[..index]);
        src = &src[index + 1..];

        let Some(ch) = src.chars().next() else {
            buf.push('\\');
            break;
        };

        src = &src[ch.len_utf8()..];

        match ch {
            'n' => buf.push('\n'),
            'r' => buf.push('\r'),
            _ => buf.push(ch),
        }
    }

    buf.push_str(src);
    buf
}

#[inline]
fn has_quote_prefix(src: &str) -> Option<char> {
    src.chars().next().filter(|ch| matches!(ch, '"' | '\''))
}

#[inline]
fn is_space(ch: char) -> bool {
    matches!(ch, '\t' | '\x0B' | '\x0C' | '\r' | ' ' | '\u{85}' | '\u{A0}')
}

fn set_var(env: &mut dyn Env, parent: &dyn GetEnv, key: &OsStr, value: &OsStr) {
    if parent.get(key).is_some() {
        tracing::debug!("{key:?} is already defined and was NOT overwritten");
    } else {
        env.set(key, value);
    }
}

impl<P: GetEnv + Clone + 'static> Bootstrap for DotenvBootstrap<P> {
    fn bootstrap(&self) -> Result<Box<dyn ConfigSource>> {
        if !self.bootstrap_path.is_file() {
            return Err(Error::with_cause(
                ErrorKind::InitializationFailure,
                format!("bootstrap file not found: {}", self.bootstrap_path.display())));
        }

        let file = self.read_env_file()?;
        tracing::debug!(variables = file.len(), "application environment loaded");

        Ok(Box::new(AppConfig {
            key: self.key.clone(),
            file,
            parent: self.parent.clone(),
        }))
    }
}

/// The `app.*` configuration of a booted application.
#[derive(Debug, Clone)]
pub struct AppConfig<P: GetEnv> {
    key: String,
    file: HashMap<OsString, OsString>,
    parent: P,
}

impl<P: GetEnv> AppConfig<P> {
    fn env(&self, name: &str) -> Option<String> {
        self.parent.get_str(name).or_else(|| self.file.get_str(name))
    }

    fn env_or(&self, name: &str, default_value: &str) -> ConfigValue {
        ConfigValue::String(self.env(name).unwrap_or_else(|| default_value.to_owned()))
    }

    /// Casts the way the framework does: `true`/`false`, `null` and `empty`
    /// (optionally in parentheses) are keywords, then `""` and `"0"` are
    /// false and everything else is true.
    fn env_bool(&self, name: &str, default_value: bool) -> ConfigValue {
        let Some(value) = self.env(name) else {
            return ConfigValue::Bool(default_value);
        };

        let keyword = value.strip_prefix('(')
            .and_then(|value| value.strip_suffix(')'))
            .unwrap_or(&value)
            .to_ascii_lowercase();

        let value = match keyword.as_str() {
            "true" => true,
            "false" | "null" | "empty" => false,
            _ => !(value.is_empty() || value == "0"),
        };
        ConfigValue::Bool(value)
    }
}

impl<P: GetEnv> ConfigSource for AppConfig<P> {
    fn get(&self, path: &str) -> Result<Option<ConfigValue>> {
        let value = match path {
            "app.name" => self.env_or("APP_NAME", "Laravel"),
            "app.env" => self.env_or("APP_ENV", "production"),
            "app.debug" => self.env_bool("APP_DEBUG", false),
            "app.url" => self.env_or("APP_URL", "http://localhost"),
            "app.key" => self.env(&self.key).map_or(ConfigValue::Null, ConfigValue::String),
            _ => return Ok(None),
        };
        Ok(Some(value))
    }
}
