use std::sync::Arc;

use crate::auth::application::use_cases::{
    login_user::LoginUserUseCase, register_user::RegisterUserUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
}
