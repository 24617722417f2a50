use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Element, Length, Theme, alignment};

use super::page::PageProps;
use crate::navigation::Screen;
use crate::shared::i18n::translate;
use crate::shared::style;
use crate::widgets::pages::event::PagesIntent;

const LABEL_SIZE: f32 = 11.0;
const FILE_SIZE: f32 = 14.0;

/// Render a screen without searchable content: its attachments, or the
/// hint for menu entries that have no content yet.
pub(crate) fn view(
    props: PageProps<'_>,
) -> Element<'_, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.language;

    if let Screen::Placeholder { .. } = props.vm.screen {
        return container(
            text(translate("page.placeholder", language))
                .color(palette.text_muted)
                .width(Length::Fill),
        )
        .padding(24)
        .width(Length::Fill)
        .style(style::card_style(props.theme))
        .into();
    }
    if !matches!(props.vm.screen, Screen::OrdemCompraAnexar { .. }) {
        return Space::new().into();
    }

    let mut files = Column::new().spacing(8);
    if props.vm.attachments.is_empty() {
        files = files.push(
            text(translate("page.nenhum-documento-selecionado", language))
                .size(FILE_SIZE)
                .color(palette.text_muted),
        );
    }
    for &name in props.vm.attachments {
        files = files.push(
            row![
                text(name).size(FILE_SIZE).color(palette.text),
                Space::new().width(Length::Fill),
                button(text(translate("button.remover", language)))
                    .on_press(PagesIntent::RemoveAttachment(name.to_string()))
                    .padding([4, 12])
                    .style(style::outline_button_style(props.theme)),
            ]
            .align_y(alignment::Vertical::Center),
        );
    }

    container(
        column![
            text(
                translate("field.anexar-ordem-compra", language)
                    .to_uppercase()
            )
            .size(LABEL_SIZE)
            .color(palette.primary),
            files,
        ]
        .spacing(12),
    )
    .padding(24)
    .width(Length::Fill)
    .style(style::card_style(props.theme))
    .into()
}
