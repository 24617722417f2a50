use iced::widget::{
    Column, Row, Space, button, column, container, row, text, text_input,
};
use iced::{Element, Length, Theme, alignment};

use super::page::PageProps;
use crate::shared::i18n::translate;
use crate::shared::style;
use crate::widgets::pages::consigned::{ConsignedProduct, ConsignedSheet};
use crate::widgets::pages::event::PagesIntent;

const HEADER_SIZE: f32 = 11.0;
const CELL_SIZE: f32 = 13.0;
const ROW_PADDING: [f32; 2] = [12.0, 20.0];
const CODE_WIDTH: f32 = 90.0;
const COUNT_WIDTH: f32 = 80.0;
const LOT_WIDTH: f32 = 160.0;
const SEARCH_WIDTH: f32 = 260.0;

/// Render the consigned products with their usage counts and lot answers.
pub(crate) fn view<'a>(
    props: PageProps<'a>,
    sheet: &'a ConsignedSheet,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.language;
    let heading = |key: &'static str| {
        text(translate(key, language).to_uppercase())
            .size(HEADER_SIZE)
            .color(palette.primary)
    };

    let search = text_input(
        translate("common.buscar", language),
        sheet.products().query(),
    )
    .on_input(PagesIntent::Search)
    .padding([10, 14])
    .width(Length::Fixed(SEARCH_WIDTH))
    .style(style::text_input_style(props.theme));
    let toolbar = row![
        heading("table.produtos"),
        Space::new().width(Length::Fill),
        search
    ]
    .align_y(alignment::Vertical::Center);

    let header = row![
        heading("table.codigo").width(Length::Fixed(CODE_WIDTH)),
        heading("table.descricao").width(Length::Fill),
        heading("table.quantidade").width(Length::Fixed(COUNT_WIDTH)),
        heading("page.utilizado").width(Length::Fixed(COUNT_WIDTH)),
        heading("page.reversa").width(Length::Fixed(COUNT_WIDTH)),
        heading("page.mesmo-lote").width(Length::Fixed(COUNT_WIDTH)),
        heading("page.lote").width(Length::Fixed(LOT_WIDTH)),
    ]
    .spacing(12);

    let mut body = Column::new()
        .width(Length::Fill)
        .push(container(header).padding(ROW_PADDING));
    for product in sheet.products().visible() {
        body = body.push(product_row(product, props));
    }

    column![
        toolbar,
        container(body)
            .width(Length::Fill)
            .style(style::card_style(props.theme)),
    ]
    .spacing(16)
    .into()
}

fn product_row<'a>(
    product: &'a ConsignedProduct,
    props: PageProps<'a>,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.language;
    let cell = |value: String| text(value).size(CELL_SIZE).color(palette.text);

    let same_lot_key = if product.same_lot {
        "common.sim"
    } else {
        "common.nao"
    };
    let same_lot = button(text(translate(same_lot_key, language)))
        .on_press(PagesIntent::ToggleSameLot(product.id.to_string()))
        .padding([4, 12])
        .style(style::outline_button_style(props.theme));

    let product_id = product.id;
    let lot = text_input(translate("page.digite-lote", language), &product.lot)
        .on_input(move |lot| PagesIntent::SetLot {
            product_id: product_id.to_string(),
            lot,
        })
        .size(CELL_SIZE)
        .padding([6, 8])
        .width(Length::Fixed(LOT_WIDTH))
        .style(style::text_input_style(props.theme));

    let cells = Row::new()
        .spacing(12)
        .align_y(alignment::Vertical::Center)
        .push(cell(product.code.to_string()).width(Length::Fixed(CODE_WIDTH)))
        .push(cell(product.name.to_string()).width(Length::Fill))
        .push(
            cell(product.total.to_string()).width(Length::Fixed(COUNT_WIDTH)),
        )
        .push(
            cell(product.utilized.to_string())
                .width(Length::Fixed(COUNT_WIDTH)),
        )
        .push(
            cell(product.reversed.to_string())
                .width(Length::Fixed(COUNT_WIDTH)),
        )
        .push(container(same_lot).width(Length::Fixed(COUNT_WIDTH)))
        .push(lot);

    container(cells)
        .padding(ROW_PADDING)
        .width(Length::Fill)
        .into()
}
