/// How many arguments a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Zero,
    One,
    OneOrTwo,
    Two,
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Zero => count == 0,
            Arity::One => count == 1,
            Arity::OneOrTwo => count == 1 || count == 2,
            Arity::Two => count == 2,
        }
    }
}

#[derive(Eq, Hash, PartialEq, Debug, Clone, Copy)]
pub enum SftpCommand {
    USER,
    ACCT,
    PASS,
    TYPE,
    LIST,
    CDIR,
    KILL,
    NAME,
    TOBE,
    DONE,
    RETR,
    SEND,
    STOP,
    STOR,
    SIZE,
}

impl SftpCommand {
    /// Every command, in the order they are advertised to clients.
    pub const ALL: [SftpCommand; 15] = [
        SftpCommand::USER,
        SftpCommand::ACCT,
        SftpCommand::PASS,
        SftpCommand::TYPE,
        SftpCommand::LIST,
        SftpCommand::CDIR,
        SftpCommand::KILL,
        SftpCommand::NAME,
        SftpCommand::TOBE,
        SftpCommand::DONE,
        SftpCommand::RETR,
        SftpCommand::SEND,
        SftpCommand::STOP,
        SftpCommand::STOR,
        SftpCommand::SIZE,
    ];

    pub fn from_str(cmd: &str) -> Option<SftpCommand> {
        match cmd.to_ascii_lowercase().as_str() {
            "user" => Some(SftpCommand::USER),
            "acct" => Some(SftpCommand::ACCT),
            "pass" => Some(SftpCommand::PASS),
            "type" => Some(SftpCommand::TYPE),
            "list" => Some(SftpCommand::LIST),
            "cdir" => Some(SftpCommand::CDIR),
            "kill" => Some(SftpCommand::KILL),
            "name" => Some(SftpCommand::NAME),
            "tobe" => Some(SftpCommand::TOBE),
            "done" => Some(SftpCommand::DONE),
            "retr" => Some(SftpCommand::RETR),
            "send" => Some(SftpCommand::SEND),
            "stop" => Some(SftpCommand::STOP),
            "stor" => Some(SftpCommand::STOR),
            "size" => Some(SftpCommand::SIZE),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SftpCommand::USER => "USER",
            SftpCommand::ACCT => "ACCT",
            SftpCommand::PASS => "PASS",
            SftpCommand::TYPE => "TYPE",
            SftpCommand::LIST => "LIST",
            SftpCommand::CDIR => "CDIR",
            SftpCommand::KILL => "KILL",
            SftpCommand::NAME => "NAME",
            SftpCommand::TOBE => "TOBE",
            SftpCommand::DONE => "DONE",
            SftpCommand::RETR => "RETR",
            SftpCommand::SEND => "SEND",
            SftpCommand::STOP => "STOP",
            SftpCommand::STOR => "STOR",
            SftpCommand::SIZE => "SIZE",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            SftpCommand::DONE | SftpCommand::SEND | SftpCommand::STOP => Arity::Zero,
            SftpCommand::LIST => Arity::OneOrTwo,
            SftpCommand::STOR => Arity::Two,
            _ => Arity::One,
        }
    }

    /// Restricted commands need a fully logged-in session.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            SftpCommand::TYPE
                | SftpCommand::LIST
                | SftpCommand::KILL
                | SftpCommand::NAME
                | SftpCommand::TOBE
                | SftpCommand::RETR
                | SftpCommand::SEND
                | SftpCommand::STOP
                | SftpCommand::STOR
                | SftpCommand::SIZE
        )
    }

    pub fn usage(&self) -> &'static str {
        match self {
            SftpCommand::USER => "USER user-id",
            SftpCommand::ACCT => "ACCT account",
            SftpCommand::PASS => "PASS password",
            SftpCommand::TYPE => "TYPE { A | B | C }",
            SftpCommand::LIST => "LIST { F | V } directory-path",
            SftpCommand::CDIR => "CDIR new-directory",
            SftpCommand::KILL => "KILL file-spec",
            SftpCommand::NAME => "NAME old-file-spec",
            SftpCommand::TOBE => "TOBE new-file-spec",
            SftpCommand::DONE => "DONE",
            SftpCommand::RETR => "RETR file-spec",
            SftpCommand::SEND => "SEND",
            SftpCommand::STOP => "STOP",
            SftpCommand::STOR => "STOR { NEW | OLD | APP } file-spec",
            SftpCommand::SIZE => "SIZE number-of-bytes-in-file",
        }
    }

    /// Body of the response to a call with the wrong number of arguments.
    pub fn argument_error(&self) -> String {
        format!("ERROR: Invalid Arguments\nUsage: {}", self.usage())
    }

    /// Body of the response to an unrecognised command.
    pub fn unknown_command_error() -> String {
        let names: Vec<String> = SftpCommand::ALL
            .iter()
            .map(|cmd| format!("\"{}\"", cmd.name()))
            .collect();
        format!(
            "ERROR: Invalid Command\r\nAvailable Commands: {}",
            names.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(SftpCommand::from_str("user"), Some(SftpCommand::USER));
        assert_eq!(SftpCommand::from_str("StOr"), Some(SftpCommand::STOR));
        assert_eq!(SftpCommand::from_str("quit"), None);
        assert_eq!(SftpCommand::from_str(""), None);
    }

    #[test]
    fn test_table_round_trips_names() {
        for cmd in SftpCommand::ALL {
            assert_eq!(SftpCommand::from_str(cmd.name()), Some(cmd));
        }
    }

    #[test]
    fn test_arity_classes() {
        assert!(SftpCommand::DONE.arity().accepts(0));
        assert!(!SftpCommand::SEND.arity().accepts(1));
        assert!(SftpCommand::LIST.arity().accepts(1));
        assert!(SftpCommand::LIST.arity().accepts(2));
        assert!(!SftpCommand::LIST.arity().accepts(3));
        assert!(!SftpCommand::STOR.arity().accepts(1));
        assert!(SftpCommand::STOR.arity().accepts(2));
        assert!(!SftpCommand::USER.arity().accepts(0));
        assert!(!SftpCommand::USER.arity().accepts(2));
    }

    #[test]
    fn test_restricted_set() {
        let restricted: Vec<_> = SftpCommand::ALL
            .iter()
            .filter(|cmd| cmd.requires_login())
            .collect();
        assert_eq!(restricted.len(), 10);
        assert!(!SftpCommand::USER.requires_login());
        assert!(!SftpCommand::CDIR.requires_login());
        assert!(!SftpCommand::DONE.requires_login());
    }

    #[test]
    fn test_unknown_command_lists_everything() {
        let body = SftpCommand::unknown_command_error();
        assert_eq!(
            body,
            "ERROR: Invalid Command\r\nAvailable Commands: \"USER\", \"ACCT\", \"PASS\", \"TYPE\", \
             \"LIST\", \"CDIR\", \"KILL\", \"NAME\", \"TOBE\", \"DONE\", \"RETR\", \"SEND\", \"STOP\", \
             \"STOR\", \"SIZE\""
        );
    }
}
