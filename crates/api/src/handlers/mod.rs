pub mod health;
pub mod scans;

pub use health::health_check;
pub use scans::{find_subdomains, get_history, get_scan};
