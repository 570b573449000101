use std::sync::Arc;

use iced::widget::container;
use iced::window;
use iced::{Element, Length, Size, Subscription, Task, Theme};

use komik_api::mangadex::MangaDexClient;
use komik_core::catalog;
use komik_core::config::{AppConfig, ThemeMode};
use komik_core::debug_log::{self, DebugEvent, SharedEventLog};
use komik_core::display;
use komik_core::i18n::{self, Label, Language};
use komik_core::models::CatalogRecord;
use komik_core::pinned::pinned_records;
use komik_core::session::{BrowseEvent, BrowseSession, Effect};

use crate::cover_cache::{self, CoverCache};
use crate::keyboard::{self, Shortcut};
use crate::screen::{detail, list, Action, Orientation};
use crate::theme::{self, KomikTheme};

/// Application state. Owns the browse session and routes screen messages.
pub struct Komik {
    config: AppConfig,
    session: BrowseSession,
    /// `None` when the configured base URL does not parse; the catalog is
    /// then the pinned set alone.
    client: Option<Arc<MangaDexClient>>,
    http: reqwest::Client,
    // Theme
    current_theme: KomikTheme,
    active_mode: ThemeMode,
    language: Language,
    // Cover images
    cover_cache: CoverCache,
    orientation: Orientation,
    event_log: SharedEventLog,
    title_copied: bool,
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    List(list::Message),
    Detail(detail::Message),
    CatalogLoaded {
        generation: u64,
        records: Vec<CatalogRecord>,
    },
    CoverLoaded {
        url: String,
        result: Result<Vec<u8>, String>,
    },
    WindowEvent(window::Event),
    Shortcut(Shortcut),
}

impl Komik {
    /// Build the app and mount the list, which starts the first fetch.
    pub fn new(config: AppConfig, window_size: Size) -> (Self, Task<Message>) {
        let http = komik_api::http::shared_client();
        let client = match MangaDexClient::with_http(http.clone(), &config.api.base_url) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::warn!(
                    base_url = %config.api.base_url,
                    error = %e,
                    "invalid API base URL, catalog limited to pinned titles"
                );
                None
            }
        };

        let mut app = Self {
            session: BrowseSession::new(),
            client,
            http,
            current_theme: KomikTheme::default_theme(),
            active_mode: theme::resolve_mode(config.appearance.mode),
            language: config.general.language,
            cover_cache: CoverCache::default(),
            orientation: Orientation::from_size(window_size),
            event_log: debug_log::shared_event_log(),
            title_copied: false,
            config,
        };
        let task = app.browse(BrowseEvent::Mount);
        (app, task)
    }

    pub fn title(&self) -> String {
        i18n::label(self.language, Label::AppTitle).to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::List(msg) => {
                let action = list::update(msg);
                self.handle_action(action)
            }
            Message::Detail(msg) => {
                let action = detail::update(msg);
                self.handle_action(action)
            }
            Message::CatalogLoaded {
                generation,
                records,
            } => {
                let task = self.browse(BrowseEvent::CatalogLoaded {
                    generation,
                    records,
                });
                Task::batch([task, self.request_covers()])
            }
            Message::CoverLoaded { url, result } => {
                if let Err(message) = &result {
                    tracing::debug!(%url, error = %message, "cover download failed");
                    debug_log::record(
                        &self.event_log,
                        DebugEvent::CoverFailed {
                            url: url.clone(),
                            message: message.clone(),
                        },
                    );
                }
                self.cover_cache.finish(url, result);
                Task::none()
            }
            Message::WindowEvent(event) => {
                if let window::Event::Resized(size) = event {
                    self.orientation = Orientation::from_size(size);
                }
                Task::none()
            }
            Message::Shortcut(shortcut) => self.handle_shortcut(shortcut),
        }
    }

    /// Interpret an Action returned by a screen.
    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::Browse(event) => self.browse(event),
            Action::ToggleTheme => {
                self.active_mode = theme::toggled(self.active_mode);
                tracing::debug!(mode = ?self.active_mode, "theme toggled");
                Task::none()
            }
            Action::ToggleLanguage => {
                self.language = self.language.toggled();
                tracing::debug!(language = self.language.tag(), "language toggled");
                Task::none()
            }
            Action::CopyTitle => {
                self.copy_title();
                Task::none()
            }
        }
    }

    fn handle_shortcut(&mut self, shortcut: Shortcut) -> Task<Message> {
        match shortcut {
            Shortcut::Refresh => self.browse(BrowseEvent::Mount),
            Shortcut::CopyTitle => self.handle_action(Action::CopyTitle),
            Shortcut::Back => self.browse(BrowseEvent::SystemBack),
        }
    }

    /// Feed the session and carry out the effect it asks for.
    fn browse(&mut self, event: BrowseEvent) -> Task<Message> {
        self.title_copied = false;
        match self.session.update(event) {
            Effect::None => Task::none(),
            Effect::FetchCatalog { generation } => self.spawn_catalog_load(generation),
            Effect::StaleResult {
                generation,
                current,
            } => {
                debug_log::record(
                    &self.event_log,
                    DebugEvent::StaleResultDiscarded {
                        generation,
                        current,
                    },
                );
                Task::none()
            }
            Effect::BackIgnored => Task::none(),
        }
    }

    fn spawn_catalog_load(&self, generation: u64) -> Task<Message> {
        let Some(client) = self.client.clone() else {
            return Task::done(Message::CatalogLoaded {
                generation,
                records: pinned_records(),
            });
        };
        let query = self.config.catalog_query();
        let log = self.event_log.clone();
        Task::perform(
            async move { catalog::load_catalog(client.as_ref(), &query, generation, &log).await },
            move |records| Message::CatalogLoaded {
                generation,
                records,
            },
        )
    }

    /// Start downloads for every cover not yet requested.
    fn request_covers(&mut self) -> Task<Message> {
        let urls: Vec<String> = self
            .session
            .records()
            .iter()
            .map(|record| display::image_url_from(record, &self.config.api.cover_base_url))
            .collect();
        let claimed = self.cover_cache.claim(urls.iter().map(String::as_str));
        if claimed.is_empty() {
            return Task::none();
        }
        tracing::debug!(count = claimed.len(), "requesting covers");

        let tasks: Vec<Task<Message>> = claimed
            .into_iter()
            .map(|url| {
                let fetch = cover_cache::fetch_cover(
                    self.http.clone(),
                    url.clone(),
                    self.config.api.cover_user_agent.clone(),
                );
                Task::perform(fetch, move |result| Message::CoverLoaded { url, result })
            })
            .collect();
        Task::batch(tasks)
    }

    fn copy_title(&mut self) {
        let Some(record) = self.session.navigation().selected() else {
            return;
        };
        let title = display::display_title(record).to_string();
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(title)) {
            Ok(()) => self.title_copied = true,
            Err(e) => tracing::warn!(error = %e, "failed to copy title to clipboard"),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = self.current_theme.colors(self.active_mode);
        let cover_base = self.config.api.cover_base_url.as_str();

        let page: Element<'_, Message> = match self.session.navigation().selected() {
            Some(record) => detail::view(
                record,
                cs,
                &self.cover_cache,
                cover_base,
                self.language,
                self.title_copied,
            )
            .map(Message::Detail),
            None => list::view(
                &self.session,
                list::ListView {
                    cs,
                    covers: &self.cover_cache,
                    cover_base,
                    lang: self.language,
                    mode: self.active_mode,
                    orientation: self.orientation,
                },
            )
            .map(Message::List),
        };

        container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            keyboard::keyboard_subscription(),
            window::events().map(|(_id, event)| Message::WindowEvent(event)),
        ])
    }

    pub fn theme(&self) -> Theme {
        self.current_theme.iced_theme(self.active_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use komik_core::pinned::PINNED_COUNT;

    fn offline_app() -> Komik {
        let mut config = AppConfig::default();
        config.api.base_url = "not a url".into();
        let (app, _task) = Komik::new(config, Size::new(1280.0, 720.0));
        app
    }

    fn loaded_app() -> Komik {
        let mut app = offline_app();
        let generation = app.session.generation();
        let _ = app.update(Message::CatalogLoaded {
            generation,
            records: pinned_records(),
        });
        app
    }

    #[test]
    fn test_new_mounts_and_loads() {
        let app = offline_app();
        assert!(app.client.is_none());
        assert!(app.session.is_loading());
        assert_eq!(app.session.generation(), 1);
        assert_eq!(app.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_catalog_loaded_claims_covers() {
        let app = loaded_app();
        assert_eq!(app.session.visible_len(), PINNED_COUNT);
        let url = display::image_url_from(&app.session.records()[0], &app.config.api.cover_base_url);
        assert!(app.cover_cache.get(&url).is_some());
    }

    #[test]
    fn test_back_gesture_leaves_list_search_alone() {
        let mut app = loaded_app();
        let _ = app.update(Message::List(list::Message::ToggleSearch));
        let _ = app.update(Message::List(list::Message::QueryChanged("berserk".into())));
        assert_eq!(app.session.visible_len(), 1);

        let _ = app.update(Message::Shortcut(Shortcut::Back));
        assert!(app.session.navigation().is_list());
        assert!(app.session.is_searching());
        assert_eq!(app.session.query(), "berserk");
        assert_eq!(app.session.visible_len(), 1);
    }

    #[test]
    fn test_back_gesture_on_detail_returns_to_list() {
        let mut app = loaded_app();
        let _ = app.update(Message::List(list::Message::Open(2)));
        assert!(!app.session.navigation().is_list());

        let _ = app.update(Message::Shortcut(Shortcut::Back));
        assert!(app.session.navigation().is_list());
        assert_eq!(app.session.visible_len(), PINNED_COUNT);
    }

    #[test]
    fn test_refresh_discards_in_flight_result() {
        let mut app = loaded_app();
        let old = app.session.generation();
        let _ = app.update(Message::Shortcut(Shortcut::Refresh));
        assert!(app.session.is_loading());

        let _ = app.update(Message::CatalogLoaded {
            generation: old,
            records: Vec::new(),
        });
        assert!(app.session.is_loading());
        let events = app.event_log.lock().map(|log| log.snapshot()).unwrap_or_default();
        assert!(events
            .iter()
            .any(|(_, event)| matches!(event, DebugEvent::StaleResultDiscarded { .. })));
    }

    #[test]
    fn test_toggles() {
        let mut app = loaded_app();
        let lang = app.language;
        let _ = app.update(Message::List(list::Message::ToggleLanguage));
        assert_ne!(app.language, lang);

        let mode = app.active_mode;
        let _ = app.update(Message::List(list::Message::ToggleTheme));
        assert_ne!(app.active_mode, mode);
    }

    #[test]
    fn test_resize_switches_orientation() {
        let mut app = offline_app();
        let _ = app.update(Message::WindowEvent(window::Event::Resized(Size::new(
            400.0, 800.0,
        ))));
        assert_eq!(app.orientation, Orientation::Portrait);
    }
}
