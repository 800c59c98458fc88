use serde_json::Value;
use std::{fs, path::PathBuf};

/// Paths in a `;`-separated script list, trimmed, with empty entries dropped.
#[must_use]
pub fn startup_script_paths(list: &str) -> Vec<PathBuf> {
    list.split(';')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// # Errors
///
/// Will return `Err` if the list names no script, or a script is missing or
/// not a regular file
pub fn check_startup_scripts(list: &str) -> Result<String, String> {
    let paths = startup_script_paths(list);
    if paths.is_empty() {
        return Err(format!("'{list}' names no sql startup script."));
    }
    if let Some(missing) = paths.iter().find(|p| !p.is_file()) {
        return Err(format!(
            "The sql startup script '{}' is not a readable file.",
            missing.display()
        ));
    }
    Ok(list.to_string())
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a json object with a `game` key
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The file '{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(json)
}

/// Both CDN payloads are `{"game": {...}}`.
///
/// # Errors
///
/// Will return `Err` if the json is not in that shape
fn validate_json_format(json: &Value) -> Result<(), String> {
    match json.get("game") {
        Some(game) if game.is_object() => Ok(()),
        _ => Err(
            "The json file is not in the correct format. Expected an object with a \"game\" object."
                .to_string(),
        ),
    }
}

/// Game ids are ten digits, e.g. `0022400076`.
///
/// # Errors
///
/// Will return `Err` if the id is not ten ascii digits
pub fn check_game_id(id: &str) -> Result<String, String> {
    let id = id.trim();
    if id.len() == 10 && id.chars().all(|c| c.is_ascii_digit()) {
        Ok(id.to_string())
    } else {
        Err(format!("'{id}' is not a game id. Expected ten digits, e.g. 0022400076."))
    }
}

/// # Errors
///
/// Will return `Err` if the path is not an existing, writable directory
pub fn check_writable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);
    let meta = fs::metadata(&path)
        .map_err(|_| format!("The output directory '{dir}' does not exist."))?;
    if !meta.is_dir() {
        return Err(format!("'{dir}' is not a directory."));
    }
    if meta.permissions().readonly() {
        return Err(format!("The output directory '{dir}' is not writable."));
    }
    Ok(path)
}
