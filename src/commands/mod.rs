pub mod backlinks;
pub mod dispatch;
pub mod find;
pub mod graph;
pub mod index;
pub mod init;
pub mod open;
pub mod stamp;
pub mod suggest;
