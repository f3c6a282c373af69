pub mod login_user;
pub mod register_user;

pub use login_user::{LoginRequestDto, LoginResponseBody, LoginUserBody};
pub use register_user::{RegisterRequestDto, RegisterResponseBody, RegisteredUserBody};
