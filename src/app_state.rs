use crate::config::Config;
use crate::store::UserStore;

pub struct AppState {
    pub store: UserStore,
    pub config: Config,
}
