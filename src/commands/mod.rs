pub mod resolve;
pub mod status;
pub mod watch;

pub use resolve::*;
pub use status::{execute_status, print_snapshot};
pub use watch::*;
