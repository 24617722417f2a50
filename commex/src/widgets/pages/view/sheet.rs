use iced::widget::{
    Column, Row, Space, button, column, container, row, text, text_input,
};
use iced::{Border, Element, Length, Theme, alignment};

use super::page::PageProps;
use crate::navigation::Screen;
use crate::shared::i18n::translate;
use crate::shared::style;
use crate::widgets::pages::event::PagesIntent;
use crate::widgets::pages::model::SUPPLY_CONDITIONS;
use crate::widgets::pages::sheet::{ItemSheet, LineItem, PriceRule};

const HEADER_SIZE: f32 = 11.0;
const CELL_SIZE: f32 = 13.0;
const ROW_PADDING: [f32; 2] = [12.0, 20.0];
const CODE_WIDTH: f32 = 90.0;
const ANVISA_WIDTH: f32 = 120.0;
const QUANTITY_WIDTH: f32 = 110.0;
const PRICE_WIDTH: f32 = 120.0;
const REMOVE_WIDTH: f32 = 90.0;
const SEARCH_WIDTH: f32 = 260.0;
const MARKER_SIZE: f32 = 14.0;

/// Render the line items with quantity, prices and the summed total.
pub(crate) fn view<'a>(
    props: PageProps<'a>,
    sheet: &'a ItemSheet,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.language;
    let rules = sheet.rules();

    let search = text_input(
        translate("common.buscar", language),
        sheet.items().query(),
    )
    .on_input(PagesIntent::Search)
    .padding([10, 14])
    .width(Length::Fixed(SEARCH_WIDTH))
    .style(style::text_input_style(props.theme));

    let mut toolbar = row![
        text(translate("table.produtos", language).to_uppercase())
            .size(HEADER_SIZE)
            .color(palette.primary),
        Space::new().width(Length::Fill),
    ]
    .spacing(12)
    .align_y(alignment::Vertical::Center);
    if rules.can_add {
        toolbar = toolbar.push(
            button(text(translate("field.adicionar-item", language)))
                .on_press(PagesIntent::AddItem)
                .padding([8, 16])
                .style(style::outline_button_style(props.theme)),
        );
    }
    toolbar = toolbar.push(search);

    let mut body = Column::new().width(Length::Fill);
    body = body.push(header(sheet, props));
    let items = sheet.items().visible();
    if items.is_empty() {
        body = body.push(
            container(
                text(translate("common.nenhum-resultado", language))
                    .color(palette.text_muted),
            )
            .padding(ROW_PADDING),
        );
    }
    for item in items {
        body = body.push(line(sheet, item, props));
    }

    let total = row![
        Space::new().width(Length::Fill),
        text(translate("field.total-geral", language).to_uppercase())
            .size(HEADER_SIZE)
            .color(palette.primary),
        text(sheet.total().to_string())
            .size(CELL_SIZE + 3.0)
            .color(palette.text),
    ]
    .spacing(16)
    .align_y(alignment::Vertical::Center);
    body = body.push(container(total).padding(ROW_PADDING));

    let table = container(body)
        .width(Length::Fill)
        .style(style::card_style(props.theme));

    let mut content = column![toolbar, table].spacing(16);
    if props.vm.screen == Screen::Cotacao {
        let mut conditions = Column::new().spacing(6);
        conditions = conditions.push(
            text(translate("field.condicoes-fornecimento", language))
                .size(HEADER_SIZE)
                .color(palette.primary),
        );
        for &(label_key, value) in SUPPLY_CONDITIONS {
            conditions = conditions.push(
                text(format!("{}: {value}", translate(label_key, language)))
                    .size(CELL_SIZE)
                    .color(palette.text),
            );
        }
        content = content.push(conditions);
    }
    content.into()
}

fn header<'a>(
    sheet: &ItemSheet,
    props: PageProps<'a>,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.language;
    let heading = |key: &'static str| {
        text(translate(key, language).to_uppercase())
            .size(HEADER_SIZE)
            .color(palette.primary)
    };
    let rules = sheet.rules();
    let quoted = rules.can_add;

    let mut cells = Row::new().spacing(12);
    if rules.selectable {
        cells = cells.push(Space::new().width(Length::Fixed(MARKER_SIZE)));
    }
    if quoted {
        cells = cells.push(
            heading("table.codigo").width(Length::Fixed(CODE_WIDTH)),
        );
    }
    cells = cells
        .push(heading("table.descricao").width(Length::Fill))
        .push(heading("table.qtd").width(Length::Fixed(QUANTITY_WIDTH)));
    if quoted {
        cells = cells.push(
            heading("table.anvisa").width(Length::Fixed(ANVISA_WIDTH)),
        );
    } else {
        cells = cells.push(
            heading("table.preco-lista").width(Length::Fixed(PRICE_WIDTH)),
        );
    }
    cells = cells
        .push(
            heading("table.preco-cotacao").width(Length::Fixed(PRICE_WIDTH)),
        )
        .push(
            heading("table.total-cotacao").width(Length::Fixed(PRICE_WIDTH)),
        );
    if rules.can_remove {
        cells = cells.push(Space::new().width(Length::Fixed(REMOVE_WIDTH)));
    }

    container(cells.align_y(alignment::Vertical::Center))
        .padding(ROW_PADDING)
        .width(Length::Fill)
        .into()
}

fn line<'a>(
    sheet: &ItemSheet,
    item: &'a LineItem,
    props: PageProps<'a>,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.language;
    let rules = sheet.rules();
    let highlighted = sheet.items().is_selected(&item.id);
    let color = if item.inactive {
        palette.text_muted
    } else {
        palette.text
    };
    let cell = |value: String| text(value).size(CELL_SIZE).color(color);

    let mut cells = Row::new().spacing(12);
    if rules.selectable {
        let fill = if highlighted {
            palette.primary
        } else {
            palette.surface
        };
        cells = cells.push(
            button(Space::new())
                .on_press(PagesIntent::ToggleItem(item.id.clone()))
                .width(Length::Fixed(MARKER_SIZE))
                .height(Length::Fixed(MARKER_SIZE))
                .padding(0)
                .style(move |_, _| button::Style {
                    background: Some(fill.into()),
                    border: Border {
                        width: 1.0,
                        color: palette.primary,
                        radius: (MARKER_SIZE / 2.0).into(),
                    },
                    ..Default::default()
                }),
        );
    }
    if rules.can_add {
        cells = cells.push(
            cell(item.code.to_string()).width(Length::Fixed(CODE_WIDTH)),
        );
    }
    cells = cells.push(cell(item.description.to_string()).width(Length::Fill));
    cells = cells.push(
        container(quantity(item, rules.quantity_steps, props))
            .width(Length::Fixed(QUANTITY_WIDTH)),
    );
    if rules.can_add {
        cells = cells.push(
            cell(item.anvisa.to_string()).width(Length::Fixed(ANVISA_WIDTH)),
        );
    } else {
        let list_price = item
            .list_price
            .map(|price| price.to_string())
            .unwrap_or_else(|| String::from("-"));
        cells = cells.push(cell(list_price).width(Length::Fixed(PRICE_WIDTH)));
    }

    let editable = !item.inactive
        && match rules.price {
            PriceRule::Locked => false,
            PriceRule::Selected => highlighted,
            PriceRule::Active => true,
        };
    let price: Element<'a, PagesIntent, Theme, iced::Renderer> = if editable {
        let item_id = item.id.as_str();
        text_input("0,00", &item.unit_price.to_string())
            .on_input(move |value| PagesIntent::EditPrice {
                item_id: item_id.to_string(),
                value,
            })
            .size(CELL_SIZE)
            .padding([6, 8])
            .style(style::text_input_style(props.theme))
            .into()
    } else {
        cell(item.unit_price.to_string()).into()
    };
    cells = cells
        .push(container(price).width(Length::Fixed(PRICE_WIDTH)))
        .push(
            cell(item.line_total().to_string())
                .width(Length::Fixed(PRICE_WIDTH)),
        );

    if rules.can_remove {
        let mut remove = button(
            text(translate("field.remover-item", language)).size(CELL_SIZE),
        )
        .padding([4, 8])
        .width(Length::Fixed(REMOVE_WIDTH))
        .style(style::outline_button_style(props.theme));
        if sheet.can_remove() {
            remove = remove.on_press(PagesIntent::RemoveItem(item.id.clone()));
        }
        cells = cells.push(remove);
    }

    container(cells.align_y(alignment::Vertical::Center))
        .padding(ROW_PADDING)
        .width(Length::Fill)
        .into()
}

fn quantity<'a>(
    item: &'a LineItem,
    steps: bool,
    props: PageProps<'a>,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let count = text(item.quantity.to_string())
        .size(CELL_SIZE)
        .color(palette.text);
    if !steps || item.inactive {
        return count.into();
    }

    let step = |label: &'a str, delta: i32| {
        button(text(label).size(CELL_SIZE).color(palette.primary))
            .on_press(PagesIntent::AdjustQuantity {
                item_id: item.id.clone(),
                delta,
            })
            .padding([2, 8])
            .style(style::outline_button_style(props.theme))
    };
    row![step("-", -1), count, step("+", 1)]
        .spacing(8)
        .align_y(alignment::Vertical::Center)
        .into()
}
