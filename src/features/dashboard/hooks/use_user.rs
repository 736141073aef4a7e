use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::services::load_current_user;
use crate::features::dashboard::state::FetchState;
use crate::models::User;

#[derive(Debug, Clone, Copy)]
pub struct UserContext {
    pub state: ReadSignal<FetchState<User>>,
}

impl UserContext {
    pub fn current(&self) -> Option<User> {
        self.state.with(|state| state.data().cloned())
    }
}

pub fn provide_user() -> UserContext {
    let (state, set_state) = signal(FetchState::<User>::Pending);

    spawn_local(async move {
        let next = match load_current_user().await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "identified current user");
                FetchState::Ready(user)
            }
            Err(error) => {
                tracing::error!(%error, "failed to identify current user");
                FetchState::Failed(error)
            }
        };
        let _ = set_state.try_set(next);
    });

    let user = UserContext { state };
    provide_context(user);
    user
}

pub fn use_user() -> UserContext {
    use_context::<UserContext>().expect("user context")
}
