use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fs;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

const ID_LEN: usize = 10;

/// Ensure directory exists. Only a directory created here is restricted to
/// its owner; an existing one keeps its mode.
pub fn ensure_dir(path: &Path) -> Result<(), String> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| format!("Unable to create directory {}: {}", path.display(), e))?;
        #[cfg(unix)]
        {
            fs::set_permissions(path, fs::Permissions::from_mode(0o700)).ok();
        }
    }
    Ok(())
}

/// Generate a random lowercase alphanumeric ID not accepted by `taken`.
pub fn new_id(mut taken: impl FnMut(&str) -> bool) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let id: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(ID_LEN)
            .map(|c| (c as char).to_ascii_lowercase())
            .collect();
        if !taken(&id) {
            return id;
        }
    }
}

/// Split a comma-separated tag line, dropping blanks.
pub fn parse_tags(line: &str) -> Vec<String> {
    line.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
