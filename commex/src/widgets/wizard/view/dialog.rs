use iced::widget::{
    Column, Space, button, column, container, opaque, row, svg, text,
    text_input,
};
use iced::{Element, Length, Theme, alignment};

use crate::shared::i18n::{Language, translate};
use crate::shared::icons::CLOSE;
use crate::shared::style;
use crate::shared::theme::ThemeProps;
use crate::widgets::wizard::event::WizardIntent;
use crate::widgets::wizard::model::{WizardForm, WizardViewModel};

const DIALOG_WIDTH: f32 = 520.0;
const DIALOG_PADDING: f32 = 24.0;
const TITLE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 12.0;
const INPUT_SIZE: f32 = 14.0;
const FIELD_SPACING: f32 = 12.0;
const CLOSE_ICON_SIZE: f32 = 16.0;
const BUTTON_PADDING: [f32; 2] = [8.0, 20.0];

/// Props for rendering the wizard overlay.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DialogProps<'a> {
    pub(crate) vm: WizardViewModel<'a>,
    pub(crate) language: Language,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the mounted dialog over a dimmed backdrop, if any.
pub(crate) fn view(
    props: DialogProps<'_>,
) -> Option<Element<'_, WizardIntent, Theme, iced::Renderer>> {
    let form = props.vm.visible?;
    let card = container(dialog_body(form, props))
        .width(Length::Fixed(DIALOG_WIDTH))
        .padding(DIALOG_PADDING)
        .style(style::card_style(props.theme));

    let backdrop = container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(style::backdrop_style(props.theme));

    Some(opaque(backdrop))
}

fn dialog_body<'a>(
    form: &'a WizardForm,
    props: DialogProps<'a>,
) -> Element<'a, WizardIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.language;

    let close = button(
        svg::Svg::new(svg::Handle::from_memory(CLOSE))
            .width(Length::Fixed(CLOSE_ICON_SIZE))
            .height(Length::Fixed(CLOSE_ICON_SIZE))
            .style(move |_, _| svg::Style {
                color: Some(palette.text_muted),
            }),
    )
    .on_press(WizardIntent::Cancel)
    .padding(4)
    .style(style::ghost_button_style());

    let title_row = row![
        text(translate(form.step().title_key(), language))
            .size(TITLE_SIZE)
            .color(palette.primary),
        Space::new().width(Length::Fill),
        close,
    ]
    .align_y(alignment::Vertical::Center);

    let mut fields = Column::new().spacing(FIELD_SPACING);
    for (field, value) in form.fields() {
        let input = text_input(translate(field.label_key(), language), value)
            .on_input(move |value| WizardIntent::EditField { field, value })
            .size(INPUT_SIZE)
            .padding([8, 10])
            .width(Length::Fill)
            .style(style::text_input_style(props.theme));
        fields = fields.push(
            column![
                text(translate(field.label_key(), language))
                    .size(LABEL_SIZE)
                    .color(palette.text),
                input,
            ]
            .spacing(4),
        );
    }

    if !form.attachments().is_empty() {
        let mut files = Column::new().spacing(6);
        for file_name in form.attachments() {
            let remove = button(
                text(translate("button.remover", language)).size(LABEL_SIZE),
            )
            .on_press(WizardIntent::RemoveAttachment(file_name.clone()))
            .padding([2, 10])
            .style(style::outline_button_style(props.theme));
            files = files.push(
                row![
                    text(file_name.as_str())
                        .size(INPUT_SIZE)
                        .color(palette.text)
                        .width(Length::Fill),
                    remove,
                ]
                .align_y(alignment::Vertical::Center),
            );
        }
        fields = fields.push(files);
    }

    let actions = row![
        Space::new().width(Length::Fill),
        button(text(translate("common.voltar", language)))
            .on_press(WizardIntent::Cancel)
            .padding(BUTTON_PADDING)
            .style(style::outline_button_style(props.theme)),
        button(text(translate("common.enviar", language)))
            .on_press(WizardIntent::Submit)
            .padding(BUTTON_PADDING)
            .style(style::primary_button_style(props.theme)),
    ]
    .spacing(12);

    column![title_row, fields, actions]
        .spacing(20)
        .width(Length::Fill)
        .into()
}
