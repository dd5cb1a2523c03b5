use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::display::display_analysis;
use crate::error::{Error, Result};
use crate::luau::{analyze, Highlighter};
use crate::models::config::UserConfig;

fn read_source(path: &Path) -> Result<String> {
    let code = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    if code.trim().is_empty() {
        return Err(Error::EmptyInput(path.display().to_string()));
    }
    debug!(path = %path.display(), bytes = code.len(), "source read");
    Ok(code)
}

pub fn analyze_file(path: &Path, json: bool) -> Result<()> {
    let code = read_source(path)?;
    let result = analyze(&code);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_analysis(&result);
    }
    Ok(())
}

pub fn highlight_file(config: &UserConfig, path: &Path) -> Result<()> {
    let code = read_source(path)?;
    let mut highlighter = Highlighter::new();
    highlighter.set_theme(&config.theme);
    print!("{}", highlighter.highlight(&code));
    Ok(())
}
