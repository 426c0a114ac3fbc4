use crate::core_auth::User;
use crate::core_fs::WriteMode;

/// Transfer type chosen with TYPE. Bookkeeping only: clients pre-encode
/// binary payloads themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferMode {
    Ascii,
    #[default]
    Binary,
    Continuous,
}

impl TransferMode {
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_ascii_lowercase().as_str() {
            "a" => Some(TransferMode::Ascii),
            "b" => Some(TransferMode::Binary),
            "c" => Some(TransferMode::Continuous),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransferMode::Ascii => "Ascii",
            TransferMode::Binary => "Binary",
            TransferMode::Continuous => "Continuous",
        }
    }
}

/// A STOR waiting for its SIZE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingStore {
    pub path: String,
    pub write_mode: WriteMode,
    pub max_bytes: Option<usize>,
    pub transfer_mode: Option<TransferMode>,
}

impl PendingStore {
    pub fn new(path: String, write_mode: WriteMode) -> Self {
        Self {
            path,
            write_mode,
            max_bytes: None,
            transfer_mode: None,
        }
    }

    /// Fixes the byte count and transfer type announced by SIZE.
    pub fn announce(&mut self, max_bytes: usize, transfer_mode: TransferMode) {
        self.max_bytes = Some(max_bytes);
        self.transfer_mode = Some(transfer_mode);
    }

    /// The part of `payload` that gets written: at most `max_bytes`
    /// characters, or all of it before SIZE has announced a count.
    pub fn clamp(&self, payload: &str) -> String {
        match self.max_bytes {
            Some(max) => payload.chars().take(max).collect(),
            None => payload.to_string(),
        }
    }
}

/// Per-connection protocol state. Never shared between connections.
#[derive(Debug, Default)]
pub struct Session {
    pub client_id: u64,
    pub selected_user: Option<User>,
    pub selected_account: Option<String>,
    pub password_verified: bool,
    pub current_dir: String,
    pub transfer_mode: TransferMode,
    pub pending_dir_change: Option<String>,
    pub pending_rename: Option<String>,
    pub pending_retrieve: Option<String>,
    pub pending_store: Option<PendingStore>,
    closing: bool,
}

impl Session {
    pub fn new(client_id: u64) -> Self {
        Self {
            client_id,
            ..Self::default()
        }
    }

    pub fn is_user_selected(&self) -> bool {
        self.selected_user.is_some()
    }

    pub fn is_account_selected(&self) -> bool {
        match &self.selected_user {
            Some(user) => self.selected_account.is_some() || !user.requires_account(),
            None => false,
        }
    }

    pub fn is_password_provided(&self) -> bool {
        match &self.selected_user {
            Some(user) => self.password_verified || !user.requires_password(),
            None => false,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_user_selected() && self.is_account_selected() && self.is_password_provided()
    }

    /// Forgets everything tied to the current user. The transfer mode is a
    /// connection setting and survives.
    pub fn clear_user_state(&mut self) {
        self.selected_user = None;
        self.selected_account = None;
        self.password_verified = false;
        self.current_dir.clear();
        self.pending_dir_change = None;
        self.pending_rename = None;
        self.pending_retrieve = None;
        self.pending_store = None;
    }

    pub fn mark_closing(&mut self) {
        self.closing = true;
    }

    /// True once DONE has been answered; the worker then drops the connection.
    pub fn is_closing(&self) -> bool {
        self.closing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(accounts: &[&str], password: Option<&str>) -> User {
        User::new("user9", accounts.iter().copied(), password.map(str::to_string))
    }

    #[test]
    fn test_anonymous_is_not_logged_in() {
        let session = Session::new(1);
        assert!(!session.is_logged_in());
        assert_eq!(session.transfer_mode, TransferMode::Binary);
    }

    #[test]
    fn test_login_requirements() {
        let mut session = Session::new(1);
        session.selected_user = Some(user(&["acct1"], Some("secret")));
        assert!(!session.is_logged_in());

        session.selected_account = Some("acct1".to_string());
        assert!(!session.is_logged_in());

        session.password_verified = true;
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_user_without_requirements_is_logged_in() {
        let mut session = Session::new(1);
        session.selected_user = Some(user(&[], None));
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_clear_user_state_keeps_transfer_mode() {
        let mut session = Session::new(1);
        session.selected_user = Some(user(&[], None));
        session.transfer_mode = TransferMode::Ascii;
        session.pending_rename = Some("user9/a.txt".to_string());
        session.pending_store = Some(PendingStore::new("user9/b.txt".to_string(), WriteMode::Old));

        session.clear_user_state();

        assert!(!session.is_user_selected());
        assert!(session.pending_rename.is_none());
        assert!(session.pending_store.is_none());
        assert_eq!(session.transfer_mode, TransferMode::Ascii);
    }

    #[test]
    fn test_announce_records_count_and_mode() {
        let mut pending = PendingStore::new("user9/a.txt".to_string(), WriteMode::New);
        assert_eq!(pending.clamp("ABCDEFGH"), "ABCDEFGH");

        pending.announce(4, TransferMode::Ascii);
        assert_eq!(pending.max_bytes, Some(4));
        assert_eq!(pending.transfer_mode, Some(TransferMode::Ascii));
        assert_eq!(pending.clamp("ABCDEFGH"), "ABCD");
        assert_eq!(pending.clamp("AB"), "AB");
    }

    #[test]
    fn test_transfer_mode_args() {
        assert_eq!(TransferMode::from_arg("a"), Some(TransferMode::Ascii));
        assert_eq!(TransferMode::from_arg("B"), Some(TransferMode::Binary));
        assert_eq!(TransferMode::from_arg("c"), Some(TransferMode::Continuous));
        assert_eq!(TransferMode::from_arg("d"), None);
    }
}
