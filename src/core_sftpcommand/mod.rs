// Here's the list of the SFTP commands implemented
pub mod acct;
pub mod cdir;
pub mod done;
pub mod kill;
pub mod list;
pub mod name;
pub mod pass;
pub mod retr;
pub mod send;
pub mod size;
pub mod stop;
pub mod stor;
pub mod tobe;
pub mod type_;
pub mod user;

// Command table and dispatch
pub mod command;
pub mod handlers;

// The utils and common functions are here
pub mod utils;
