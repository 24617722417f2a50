use iced::widget::{Stack, column, container, row};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::shared::theme::ThemeProps;
use crate::widgets::chrome::ChromeEvent;
use crate::widgets::chrome::view::header;
use crate::widgets::navigation::NavigationEvent;
use crate::widgets::navigation::view::sidebar;
use crate::widgets::pages::PagesEvent;
use crate::widgets::pages::view::page;
use crate::widgets::wizard::WizardEvent;
use crate::widgets::wizard::view::dialog;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props = ThemeProps::new(theme);
    let palette = *theme.iced_palette();
    let language = app.widgets.chrome.language();

    let header = header::view(header::HeaderProps {
        vm: app.widgets.chrome.vm(),
        theme: theme_props,
    })
    .map(|event| AppEvent::Chrome(ChromeEvent::Intent(event)));

    let sidebar = sidebar::view(sidebar::SidebarProps {
        vm: app.widgets.navigation.vm(),
        language,
        theme: theme_props,
    })
    .map(|event| AppEvent::Navigation(NavigationEvent::Intent(event)));

    let page = page::view(page::PageProps {
        vm: app.widgets.pages.vm(),
        language,
        theme: theme_props,
    })
    .map(|event| AppEvent::Pages(PagesEvent::Intent(event)));

    let content = container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.layout_background.into()),
            ..Default::default()
        });

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> = vec![
        column![header, row![sidebar, content].height(Length::Fill)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    ];

    if let Some(overlay) = dialog::view(dialog::DialogProps {
        vm: app.widgets.wizard.vm(),
        language,
        theme: theme_props,
    }) {
        layers.push(
            overlay.map(|event| AppEvent::Wizard(WizardEvent::Intent(event))),
        );
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
