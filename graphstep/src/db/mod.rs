pub mod partition;
pub mod replay;
pub mod task;
pub mod trace;
