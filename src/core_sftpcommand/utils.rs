use crate::core_fs::join_path;
use crate::session::Session;

/// Resolves a file name against the session's current directory.
pub fn resolve_in_current_dir(session: &Session, name: &str) -> String {
    join_path(&session.current_dir, name)
}

/// Copy of a command line that is safe to log.
pub fn mask_secrets(line: &str) -> String {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(cmd) if cmd.eq_ignore_ascii_case("pass") => format!("{} ****", cmd),
        _ => line.to_string(),
    }
}
