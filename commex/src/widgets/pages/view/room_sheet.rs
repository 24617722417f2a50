use iced::widget::{Row, Space, button, column, container, text, text_input};
use iced::{Color, Element, Length, Theme};

use super::page::PageProps;
use crate::shared::i18n::translate;
use crate::shared::style;
use crate::widgets::pages::event::PagesIntent;
use crate::widgets::pages::model::RoomSheetTab;

const TAB_SIZE: f32 = 16.0;
const LABEL_SIZE: f32 = 11.0;
const IDGEN_WIDTH: f32 = 260.0;

/// Render the supplier tabs, the IDGEN field and the selected tab content.
pub(crate) fn view(
    props: PageProps<'_>,
) -> Element<'_, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.language;
    let active = props.vm.room_tab;

    let mut tabs = Row::new().spacing(24);
    for tab in RoomSheetTab::ALL {
        let is_active = tab == active;
        let color = if is_active {
            palette.primary
        } else {
            palette.text_muted
        };
        let underline = if is_active {
            palette.primary
        } else {
            Color::TRANSPARENT
        };
        let label = format!(
            "{} ({})",
            translate(tab.label_key(), language),
            tab.count()
        );
        tabs = tabs.push(
            button(
                column![
                    text(label).size(TAB_SIZE).color(color),
                    container(Space::new())
                        .width(Length::Fill)
                        .height(Length::Fixed(3.0))
                        .style(move |_| container::Style {
                            background: Some(underline.into()),
                            ..Default::default()
                        }),
                ]
                .spacing(4)
                .width(Length::Shrink),
            )
            .on_press(PagesIntent::SelectRoomTab(tab))
            .padding(0)
            .style(style::ghost_button_style()),
        );
    }

    let idgen = column![
        text(translate("page.folhas-de-sala", language).to_uppercase())
            .size(LABEL_SIZE)
            .color(palette.text_muted),
        text_input(translate("page.adicione-idgen", language), props.vm.idgen)
            .on_input(PagesIntent::EditIdgen)
            .padding([10, 12])
            .width(Length::Fixed(IDGEN_WIDTH))
            .style(style::text_input_style(props.theme)),
    ]
    .spacing(6);

    let documents = match active.count() {
        0 => translate("page.nenhum-documento-selecionado", language)
            .to_string(),
        count => format!(
            "{} ({count})",
            translate(active.label_key(), language)
        ),
    };
    let body = container(text(documents).color(palette.text))
        .padding(24)
        .width(Length::Fill)
        .style(style::card_style(props.theme));

    column![tabs, idgen, body].spacing(24).into()
}
