pub const MAIN_STYLESHEET: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/main.css"));
pub const ROBOTS_FILE: &[u8] = include_bytes!("robots.txt");
