use iced::widget::{Column, Row, Space, button, column, text, text_input};
use iced::{Element, Length, Theme};

use super::page::PageProps;
use crate::shared::i18n::translate;
use crate::shared::style;
use crate::widgets::pages::event::PagesIntent;
use crate::widgets::pages::model;

const LABEL_SIZE: f32 = 11.0;
const BUTTON_PADDING: [f32; 2] = [8.0, 20.0];

/// Render the note field, the back link and the decision buttons.
pub(crate) fn view(
    props: PageProps<'_>,
) -> Element<'_, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let screen = props.vm.screen;
    let language = props.language;

    let mut content = Column::new().spacing(16);
    if let Some(label_key) = model::note_key(screen) {
        let label = translate(label_key, language);
        content = content.push(
            column![
                text(label.to_uppercase())
                    .size(LABEL_SIZE)
                    .color(palette.text_muted),
                text_input(label, props.vm.note)
                    .on_input(PagesIntent::EditNote)
                    .padding([10, 12])
                    .style(style::text_input_style(props.theme)),
            ]
            .spacing(6),
        );
    }

    let mut buttons = Row::new().spacing(12);
    if let Some(back) = screen.back_link() {
        buttons = buttons.push(
            button(text(translate("common.voltar", language)))
                .on_press(PagesIntent::FollowLink(back))
                .padding(BUTTON_PADDING)
                .style(style::outline_button_style(props.theme)),
        );
    }
    buttons = buttons.push(Space::new().width(Length::Fill));
    for &decision in model::decisions(screen) {
        let label = text(translate(decision.label_key(), language));
        let decide = button(label)
            .on_press(PagesIntent::Decide(decision))
            .padding(BUTTON_PADDING);
        buttons = buttons.push(if decision.is_primary() {
            decide.style(style::primary_button_style(props.theme))
        } else {
            decide.style(style::outline_button_style(props.theme))
        });
    }

    content.push(buttons).into()
}
