pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod fake;

pub use r#trait::HashProvider;
pub use fake::FakeHashProvider;
