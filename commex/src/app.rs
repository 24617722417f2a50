#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Task, Theme};

use crate::config::{self, AppConfig};
use crate::shared::theme::ThemeManager;
use crate::widgets::chrome::{ChromeEvent, ChromeWidget};
use crate::widgets::navigation::{NavigationEvent, NavigationWidget};
use crate::widgets::pages::{PagesEvent, PagesWidget};
use crate::widgets::wizard::{WizardEvent, WizardWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 1024.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Navigation widget
    Navigation(NavigationEvent),
    // Chrome widget
    Chrome(ChromeEvent),
    // Pages widget
    Pages(PagesEvent),
    // Wizard widget
    Wizard(WizardEvent),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) navigation: NavigationWidget,
    pub(crate) chrome: ChromeWidget,
    pub(crate) pages: PagesWidget,
    pub(crate) wizard: WizardWidget,
}

impl Widgets {
    fn from_config(config: &AppConfig) -> Self {
        let navigation = NavigationWidget::new(
            config.start_route(),
            config.sidebar_expanded,
        );
        let pages = PagesWidget::new(navigation.screen());

        Self {
            navigation,
            chrome: ChromeWidget::new(config.language),
            pages,
            wizard: WizardWidget::new(config.modal_transition()),
        }
    }
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = config::load_or_default();
        let widgets = Widgets::from_config(&config);
        log::info!("starting on {}", widgets.navigation.active());

        let app = App {
            theme_manager: ThemeManager::default(),
            widgets,
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Commex")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
