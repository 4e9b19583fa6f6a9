pub mod discovery;
pub mod fallback;
