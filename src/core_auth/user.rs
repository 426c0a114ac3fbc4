use std::collections::BTreeSet;

/// A user record from the user database. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: String,
    required_accounts: BTreeSet<String>,
    password: Option<String>,
}

impl User {
    pub fn new<I, S>(id: impl Into<String>, accounts: I, password: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            required_accounts: accounts.into_iter().map(Into::into).collect(),
            password,
        }
    }

    /// Parses a `user-id|accounts|password` row. Accounts are whitespace
    /// separated; a blank column means nothing is required.
    pub fn from_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return None;
        }
        let id = parts[0].trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            return None;
        }
        let accounts = parts[1].split_whitespace();
        let password = parts
            .get(2)
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Some(User::new(id, accounts, password))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The user's sandbox root, relative to the server home directory.
    pub fn root_dir(&self) -> String {
        format!("{}/", self.id)
    }

    pub fn requires_account(&self) -> bool {
        !self.required_accounts.is_empty()
    }

    pub fn requires_password(&self) -> bool {
        self.password.is_some()
    }

    pub fn has_account(&self, account: &str) -> bool {
        self.required_accounts.contains(account)
    }

    /// Plaintext comparison.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.as_deref() == Some(candidate)
    }
}
