pub mod http;
pub mod security;
pub mod util;
