//! Provider interfaces for capabilities the domain consumes but does not own:
//! credential hashing and the current time.

pub mod clock;
pub mod hash;

pub use clock::{Clock, ManualClock, SystemClock};
pub use hash::{FakeHashProvider, HashProvider};
