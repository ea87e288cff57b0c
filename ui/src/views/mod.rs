mod home;
pub use home::Home;

mod models;
pub use models::Models;
