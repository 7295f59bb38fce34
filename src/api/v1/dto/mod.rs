pub mod league;
pub mod session;
