// Shared fixtures for tests: a home directory laid out like a small
// deployment and the matching user table.
use crate::core_auth::{User, UserDatabase};
use crate::core_fs::LocalFs;
use crate::server::ServerContext;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub fn users() -> UserDatabase {
    UserDatabase::from_users(vec![
        User::new("user1", Vec::<String>::new(), None),
        User::new("user2", ["acct1"], None),
        User::new("user3", Vec::<String>::new(), Some("pass3".to_string())),
        User::new("user4", ["acct1", "acct3"], Some("pass4".to_string())),
        User::new("user5", ["acct1", "acct2", "acct3"], Some("pass5".to_string())),
    ])
}

fn touch(home: &Path, path: &str, content: &[u8]) {
    fs::write(home.join(path), content).unwrap();
}

pub fn fixture() -> (TempDir, ServerContext) {
    let dir = TempDir::new().unwrap();
    let home = dir.path();

    fs::create_dir_all(home.join("user1/folder1/folder2")).unwrap();
    fs::create_dir_all(home.join("user1/temp")).unwrap();
    for user in ["user2", "user3", "user4", "user5"] {
        fs::create_dir_all(home.join(user).join("folder1")).unwrap();
    }

    touch(home, "user1/file.txt", b"");
    touch(home, "user1/file1.txt", b"one");
    touch(home, "user1/file2.txt", b"two");
    touch(home, "user1/file3.txt", b"three");
    touch(home, "user1/file4.txt", b"four");
    touch(home, "user1/license.txt", b"MIT License");
    touch(home, "user1/delete.txt", b"");
    touch(home, "user1/rename.txt", b"");
    touch(home, "user1/data.jpg", &[0xff, 0xd8, 0xff, 0xe0, 0x00]);
    touch(home, "user1/temp/data.csv", b"a,b\n1,2\n");
    touch(home, "user1/temp/file4.txt", b"");

    let ctx = ServerContext::new(Arc::new(users()), Arc::new(LocalFs::new(home)));
    (dir, ctx)
}
