mod session_rng;

pub mod connect_four;

pub use session_rng::SessionRng;
