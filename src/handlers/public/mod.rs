pub mod health;
pub mod login;

pub use health::health;
pub use login::login;
