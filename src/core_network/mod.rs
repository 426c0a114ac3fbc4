pub mod channel;
pub mod network;
