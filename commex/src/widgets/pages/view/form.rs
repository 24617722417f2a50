use iced::widget::{
    Column, Space, button, column, container, row, text, text_input,
};
use iced::{Element, Length, Theme};

use super::page::PageProps;
use crate::shared::i18n::translate;
use crate::shared::style;
use crate::widgets::pages::event::PagesIntent;
use crate::widgets::pages::model::PROCEDURE_FIELDS;

const LABEL_SIZE: f32 = 11.0;
const VALUE_SIZE: f32 = 14.0;
const COLUMN_SPACING: f32 = 24.0;
const ROW_SPACING: f32 = 16.0;

/// Render the procedure creation form and its confirm button.
pub(crate) fn view(
    props: PageProps<'_>,
) -> Element<'_, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.language;

    let mut fields = Column::new().spacing(ROW_SPACING);
    for pair in PROCEDURE_FIELDS.chunks(2) {
        let mut line = row![].spacing(COLUMN_SPACING);
        for &(label_key, value) in pair {
            let label = translate(label_key, language);
            line = line.push(
                column![
                    text(label.to_uppercase())
                        .size(LABEL_SIZE)
                        .color(palette.text_muted),
                    text_input(label, value)
                        .size(VALUE_SIZE)
                        .padding([10, 12])
                        .style(style::text_input_style(props.theme)),
                ]
                .spacing(6)
                .width(Length::FillPortion(1)),
            );
        }
        if pair.len() == 1 {
            line = line.push(Space::new().width(Length::FillPortion(1)));
        }
        fields = fields.push(line);
    }

    let confirm = row![
        Space::new().width(Length::Fill),
        button(text(translate("button.ok", language)))
            .on_press(PagesIntent::OpenWizard)
            .padding([10, 32])
            .style(style::primary_button_style(props.theme)),
    ];

    container(column![fields, confirm].spacing(32))
        .padding(24)
        .width(Length::Fill)
        .style(style::card_style(props.theme))
        .into()
}
