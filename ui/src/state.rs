//! Per-app state shared through Dioxus context.
//!
//! Reactive values (language, session, the attached design) live in signals
//! inside [`AppState`]. Long-lived collaborators (configuration, the order
//! store, HTTP clients) live in [`AppServices`], shared behind an `Rc`.

use std::rc::Rc;

use api::{EmailClient, GenAiClient};
use dioxus::prelude::*;

use crate::core::config::{AppConfig, GEMINI_API_KEY};
use crate::core::error::ActionError;
use crate::core::platform;
use crate::core::session::Session;
use crate::core::storage::{platform_storage, OrderStore, PlatformOrderStore};
use crate::core::submission::AttachedFile;
use crate::i18n::Language;

pub struct AppServices {
    pub config: AppConfig,
    pub store: PlatformOrderStore,
    pub email: EmailClient,
    genai: Option<GenAiClient>,
}

impl AppServices {
    pub fn new(config: AppConfig, store: PlatformOrderStore) -> Self {
        let genai = config.gemini_api_key.clone().map(GenAiClient::new);
        Self {
            config,
            store,
            email: EmailClient::new(),
            genai,
        }
    }

    pub fn from_env() -> Self {
        Self::new(AppConfig::from_env(), OrderStore::new(platform_storage()))
    }

    /// The generative AI client, if a key is configured.
    pub fn assistant(&self) -> Result<&GenAiClient, ActionError> {
        self.genai
            .as_ref()
            .ok_or(ActionError::ConfigurationMissing(GEMINI_API_KEY))
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    pub lang: Signal<Language>,
    pub session: Signal<Session>,
    /// File (or generated preview) attached to the order form.
    pub attachment: Signal<Option<AttachedFile>>,
    /// Bumped after every write to the order store so dashboards reload.
    pub orders_revision: Signal<u64>,
}

impl AppState {
    pub fn orders_changed(&mut self) {
        let next = *self.orders_revision.peek() + 1;
        self.orders_revision.set(next);
    }
}

/// Install state and services at the root of a platform shell.
pub fn use_app_provider() -> AppState {
    use_context_provider(|| Rc::new(AppServices::from_env()));

    let lang = use_signal(Language::detect);
    let session = use_signal(Session::guest);
    let attachment = use_signal(|| None);
    let orders_revision = use_signal(|| 0);
    let state = use_context_provider(|| AppState {
        lang,
        session,
        attachment,
        orders_revision,
    });

    use_effect(move || {
        let lang = (state.lang)();
        tracing::debug!(%lang, "applying document direction");
        platform::apply_direction(lang);
    });

    state
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}

pub fn use_services() -> Rc<AppServices> {
    use_context::<Rc<AppServices>>()
}
