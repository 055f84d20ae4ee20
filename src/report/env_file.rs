use std::io::Write;

use crate::{classify, Error, ErrorKind, Options, Result};

use super::{line, title, Status};

const RULE: &str = "-----------------------------";

/// Reads the environment file, prints it and checks the key's line.
///
/// A missing or unreadable file is reported and returned as the error, all
/// other findings (including a missing key) are only reported.
pub fn debug_env(options: &Options, out: &mut dyn Write) -> Result<()> {
    let inspector = options.inspector();
    let key = inspector.key();
    let path = inspector.path();

    title(out, "Environment file check")?;
    writeln!(out, "File: {}", path.display())?;

    let contents = match inspector.load() {
        Ok(contents) => contents,
        Err(err) => {
            report_load_error(out, &err)?;
            return Err(err);
        }
    };

    line(out, Status::Ok, "the file exists")?;
    writeln!(out)?;

    writeln!(out, "Contents:")?;
    writeln!(out, "{RULE}")?;
    write!(out, "{contents}")?;
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;

    let Some(entry) = inspector.find_key(&contents) else {
        line(out, Status::Warn, format_args!("no {key} line found in the file"))?;
        writeln!(out)?;
        writeln!(out, "Done")?;
        return Ok(());
    };

    line(out, Status::Ok, format_args!("{key} line found (line {}):", entry.lineno()))?;
    writeln!(out, "       {}", entry.raw_line())?;
    writeln!(out)?;

    let value = entry.value();
    writeln!(out, "Value of {key}:")?;
    writeln!(out, "       '{value}'")?;
    writeln!(out)?;

    let classification = classify(value);
    if classification.is_empty() {
        line(out, Status::Warn, format_args!("{key} is empty"))?;
    } else {
        line(out, Status::Ok, format_args!("{key} has a value"))?;
    }

    writeln!(out, "Length: {} characters", classification.length)?;
    writeln!(out)?;

    if classification.is_well_formed() {
        line(out, Status::Ok, "the format looks right (base64:...)")?;
    } else {
        line(out, Status::Warn, "the format is not the standard one (should start with 'base64:')")?;
    }

    writeln!(out)?;
    writeln!(out, "Done")?;

    Ok(())
}

pub(crate) fn report_load_error(out: &mut dyn Write, err: &Error) -> Result<()> {
    match err.kind() {
        ErrorKind::FileNotFound => line(out, Status::Fail, "ERROR: the file does not exist")?,
        _ => line(out, Status::Fail, format_args!("ERROR: the file could not be read: {err}"))?,
    }
    Ok(())
}
