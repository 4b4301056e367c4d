mod backlinks;
mod find;
mod graph;
mod index;
mod init;
mod misc;
mod open;
mod stamp;
mod suggest;
pub mod support;
