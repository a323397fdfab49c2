pub mod replay_cmd;
pub mod watch_cmd;
