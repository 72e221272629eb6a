mod oversized;
mod static_views_macros;

pub use oversized::*;
