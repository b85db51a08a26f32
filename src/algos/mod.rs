pub use self::rounds::{DEFAULT_ROUNDS, Rounds};

mod rounds;
