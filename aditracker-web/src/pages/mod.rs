mod error;
mod home;

pub use error::ErrorPage;
pub use home::HomePage;
