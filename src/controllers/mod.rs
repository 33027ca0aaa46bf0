//! Page controllers
//!
//! One controller per page. Each owns its form state and a handle to the
//! users API, and resolves every handler to a `FlowResult`.

pub mod login;
pub mod outcome;
pub mod profile;
pub mod register;

pub use login::LoginController;
pub use outcome::{Effect, Failure, FlowResult, Success};
pub use profile::ProfileController;
pub use register::RegisterController;
