use crate::config::{self, RuntimeConfig};
use leptos::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigState {
    pub runtime: RuntimeConfig,
}

impl ConfigState {
    pub fn title(&self) -> String {
        self.runtime.title()
    }
}

pub fn use_config() -> (ReadSignal<ConfigState>, WriteSignal<ConfigState>) {
    match use_context::<(ReadSignal<ConfigState>, WriteSignal<ConfigState>)>() {
        Some(ctx) => ctx,
        None => {
            let (read, write) = create_signal(ConfigState {
                runtime: config::current(),
            });
            provide_context((read, write));
            (read, write)
        }
    }
}

pub async fn refresh_runtime_config(set_state: WriteSignal<ConfigState>) {
    let runtime = config::init().await;
    set_state.update(|s| s.runtime = runtime);
}
