mod user;

pub use user::CanvasUser;
