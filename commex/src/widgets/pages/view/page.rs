use iced::widget::{column, container, scrollable, text};
use iced::{Element, Length, Theme};

use super::{
    actions, calendar, consigned, detail, fields, form, room_sheet, sheet,
    table, tasks,
};
use crate::navigation::Screen;
use crate::shared::i18n::{Language, translate};
use crate::shared::theme::ThemeProps;
use crate::widgets::pages::event::PagesIntent;
use crate::widgets::pages::model::{PageBody, PagesViewModel};

const PAGE_PADDING: f32 = 32.0;
const PAGE_MAX_WIDTH: f32 = 1024.0;
const TITLE_SIZE: f32 = 28.0;
const SECTION_SPACING: f32 = 24.0;

/// Props for rendering the active screen body.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageProps<'a> {
    pub(crate) vm: PagesViewModel<'a>,
    pub(crate) language: Language,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the heading and body of the mounted screen.
pub(crate) fn view(
    props: PageProps<'_>,
) -> Element<'_, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let screen = props.vm.screen;

    let title = text(translate(screen.title_key(), props.language))
        .size(TITLE_SIZE)
        .color(palette.primary);

    let body: Element<'_, PagesIntent, Theme, iced::Renderer> =
        match (screen, props.vm.body) {
            (Screen::CriacaoProcedimento { .. }, _) => form::view(props),
            (_, PageBody::List(list)) => table::view(props, list),
            (_, PageBody::Items(items)) => sheet::view(props, items),
            (_, PageBody::Calendar(board)) => calendar::view(props, board),
            (_, PageBody::Consigned(products)) => {
                consigned::view(props, products)
            },
            (Screen::Teste, PageBody::Static) => {
                text(translate("page.teste", props.language))
                    .color(palette.text)
                    .into()
            },
            (Screen::Licitacoes, PageBody::Static) => tasks::view(props),
            (Screen::FolhaSalaMais { .. }, PageBody::Static) => {
                room_sheet::view(props)
            },
            (_, PageBody::Static) => detail::view(props),
        };

    let content =
        column![title, fields::view(props), body, actions::view(props)]
            .spacing(SECTION_SPACING)
            .max_width(PAGE_MAX_WIDTH)
            .width(Length::Fill);

    scrollable(container(content).padding(PAGE_PADDING).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
