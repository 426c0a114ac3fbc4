use crate::constants::USER_DB_HEADER_LINES;
use crate::core_auth::error::AuthError;
use crate::core_auth::user::User;
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

/// Lookup of users by id. Sessions only ever read from it.
pub trait UserRegistry: Send + Sync {
    fn lookup(&self, id: &str) -> Option<User>;
}

/// In-memory user table, usually loaded from the flat user database file.
#[derive(Debug, Default, Clone)]
pub struct UserDatabase {
    users: HashMap<String, User>,
}

impl UserDatabase {
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.id().to_string(), user))
            .collect();
        Self { users }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, AuthError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| AuthError::UserDbReadError {
                path: path.display().to_string(),
                source,
            })?;
        let database = Self::parse(&content)?;
        info!(
            "Loaded {} users from {}",
            database.len(),
            path.display()
        );
        Ok(database)
    }

    /// Parses the table format: a header row, a divider row, then one
    /// `user-id|accounts|password` row per user.
    pub fn parse(content: &str) -> Result<Self, AuthError> {
        let mut users = HashMap::new();

        for (index, row) in content.lines().enumerate().skip(USER_DB_HEADER_LINES) {
            if row.trim().is_empty() {
                continue;
            }
            let user = User::from_line(row).ok_or_else(|| AuthError::MalformedRow {
                line: index + 1,
                row: row.to_string(),
            })?;
            if users.contains_key(user.id()) {
                warn!("User {} is defined twice", user.id());
                return Err(AuthError::DuplicateUser(user.id().to_string()));
            }
            users.insert(user.id().to_string(), user);
        }

        Ok(Self { users })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserRegistry for UserDatabase {
    fn lookup(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const USERS: &str = "\
user-id|accounts|password
-------|--------|--------
user1| | 
user2|acct1| 
user3| |pass3
user4|acct1 acct3|pass4
user5|acct1 acct2 acct3|pass5
";

    #[test]
    fn test_parse_skips_header() {
        let database = UserDatabase::parse(USERS).unwrap();
        assert_eq!(database.len(), 5);
        assert!(database.lookup("user-id").is_none());
        assert!(database.lookup("user7").is_none());
    }

    #[test]
    fn test_lookup_requirements() {
        let database = UserDatabase::parse(USERS).unwrap();
        let user2 = database.lookup("user2").unwrap();
        assert!(user2.requires_account());
        assert!(!user2.requires_password());
        let user3 = database.lookup("user3").unwrap();
        assert!(!user3.requires_account());
        assert!(user3.requires_password());
    }

    #[test]
    fn test_parse_reports_malformed_row() {
        let content = "id|acct|pass\n----\nuser1| | \nbroken row\n";
        match UserDatabase::parse(content) {
            Err(AuthError::MalformedRow { line, .. }) => assert_eq!(line, 4),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let content = "id|acct|pass\n----\nuser1| | \nuser1|acct1| \n";
        assert!(matches!(
            UserDatabase::parse(content),
            Err(AuthError::DuplicateUser(id)) if id == "user1"
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", USERS).unwrap();

        let database = UserDatabase::load_from_file(file.path()).unwrap();
        assert!(database.lookup("user5").unwrap().has_account("acct2"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = UserDatabase::load_from_file(Path::new("/nonexistent/users.txt"));
        assert!(matches!(result, Err(AuthError::UserDbReadError { .. })));
    }
}
