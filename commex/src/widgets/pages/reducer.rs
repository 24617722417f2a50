use iced::Task;

use super::event::{PagesEffect, PagesEvent, PagesIntent};
use super::model::{self, Decision, RoomSheetTab, RowAction};
use super::state::PagesState;
use crate::navigation::{Route, Screen};
use crate::shared::list::Named;

/// Reduce a pages intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut PagesState,
    event: PagesIntent,
) -> Task<PagesEvent> {
    match apply(state, event) {
        Some(effect) => Task::done(PagesEvent::Effect(effect)),
        None => Task::none(),
    }
}

fn apply(state: &mut PagesState, event: PagesIntent) -> Option<PagesEffect> {
    match event {
        PagesIntent::ScreenChanged(screen) => {
            state.mount(screen);
            None
        },
        PagesIntent::Search(query) => {
            state.search(query);
            None
        },
        PagesIntent::NextPage => {
            if let Some(list) = state.list_mut() {
                list.next_page();
            }
            None
        },
        PagesIntent::PreviousPage => {
            if let Some(list) = state.list_mut() {
                list.previous_page();
            }
            None
        },
        PagesIntent::SelectTab(tab) => {
            if !state.select_tab(tab) {
                log::debug!("{tab:?} is not a tab of {:?}", state.screen());
            }
            None
        },
        PagesIntent::ToggleRow(row_id) => {
            let selectable = state.tab().is_some_and(|tab| tab.is_selectable());
            if let (true, Some(list)) = (selectable, state.list_mut()) {
                list.toggle_selected(&row_id);
            }
            None
        },
        PagesIntent::RowAction { row_id, action } => {
            row_action(state, &row_id, action)
        },
        PagesIntent::FollowLink(route) => follow_link(state.screen(), route),
        PagesIntent::OpenWizard => match state.screen() {
            Screen::CriacaoProcedimento { to_list } => {
                Some(PagesEffect::OpenWizard { to_list })
            },
            screen => {
                log::debug!("{screen:?} does not host the wizard");
                None
            },
        },
        PagesIntent::AdjustQuantity { item_id, delta } => {
            let changed = state
                .sheet_mut()
                .is_some_and(|sheet| sheet.adjust_quantity(&item_id, delta));
            unchanged(changed, "quantity", &item_id);
            None
        },
        PagesIntent::EditPrice { item_id, value } => {
            let changed = state
                .sheet_mut()
                .is_some_and(|sheet| sheet.set_unit_price(&item_id, &value));
            unchanged(changed, "price", &item_id);
            None
        },
        PagesIntent::AddItem => {
            match state.sheet_mut().and_then(|sheet| sheet.add_blank()) {
                Some(item_id) => log::debug!("added line {item_id}"),
                None => log::debug!("{:?} takes no new lines", state.screen()),
            }
            None
        },
        PagesIntent::RemoveItem(item_id) => {
            let changed = state
                .sheet_mut()
                .is_some_and(|sheet| sheet.remove(&item_id));
            unchanged(changed, "line", &item_id);
            None
        },
        PagesIntent::ToggleItem(item_id) => {
            let changed = state
                .sheet_mut()
                .is_some_and(|sheet| sheet.toggle(&item_id));
            unchanged(changed, "highlight", &item_id);
            None
        },
        PagesIntent::EditNote(note) => {
            if model::note_key(state.screen()).is_some() {
                state.set_note(note);
            }
            None
        },
        PagesIntent::EditIdgen(idgen) => {
            if matches!(state.screen(), Screen::FolhaSalaMais { .. }) {
                state.set_idgen(idgen);
            }
            None
        },
        PagesIntent::Decide(decision) => decide(state, decision),
        PagesIntent::ShiftMonth(delta) => {
            if let Some(board) = state.calendar_mut() {
                board.shift_month(delta);
            }
            None
        },
        PagesIntent::SetLot { product_id, lot } => {
            let changed = state
                .consigned_mut()
                .is_some_and(|sheet| sheet.set_lot(&product_id, lot));
            unchanged(changed, "lot", &product_id);
            None
        },
        PagesIntent::ToggleSameLot(product_id) => {
            let changed = state
                .consigned_mut()
                .is_some_and(|sheet| sheet.toggle_same_lot(&product_id));
            unchanged(changed, "same lot", &product_id);
            None
        },
        PagesIntent::RemoveAttachment(name) => {
            if !state.remove_attachment(&name) {
                log::debug!("no attachment named {name:?}");
            }
            None
        },
        PagesIntent::SelectRoomTab(tab) => select_room_tab(state, tab),
    }
}

fn unchanged(changed: bool, what: &str, id: &str) {
    if !changed {
        log::debug!("{what} of {id:?} left unchanged");
    }
}

/// Settle the screen. Forward-moving decisions follow the screen's forward
/// link; the rest have no destination and are only logged.
fn decide(state: &PagesState, decision: Decision) -> Option<PagesEffect> {
    let screen = state.screen();
    if !model::decisions(screen).contains(&decision) {
        log::debug!("{screen:?} offers no {decision:?}");
        return None;
    }

    let advances = match decision {
        Decision::Approve | Decision::Send => true,
        Decision::InsertRoomSheet => {
            state.room_tab() == RoomSheetTab::Consignado
        },
        _ => false,
    };
    match screen.forward_link() {
        Some(route) if advances => Some(PagesEffect::NavigateTo(route)),
        _ => {
            log::debug!("{decision:?} on {screen:?} has no destination");
            None
        },
    }
}

/// The consigned tab opens its own sheet; the other tabs switch in place.
fn select_room_tab(
    state: &mut PagesState,
    tab: RoomSheetTab,
) -> Option<PagesEffect> {
    let Screen::FolhaSalaMais { to_consignado, .. } = state.screen() else {
        log::debug!("{:?} has no room sheet tabs", state.screen());
        return None;
    };
    if tab == RoomSheetTab::Consignado {
        return Some(PagesEffect::NavigateTo(to_consignado));
    }
    state.set_room_tab(tab);
    None
}

fn row_action(
    state: &mut PagesState,
    row_id: &str,
    action: RowAction,
) -> Option<PagesEffect> {
    let screen = state.screen();
    let list = state.list_mut()?;
    let offers_action = list
        .get(row_id)
        .is_some_and(|row| row.actions.contains(&action));
    if !offers_action {
        log::debug!("row {row_id:?} has no {action:?} action");
        return None;
    }

    match action {
        RowAction::Delete => {
            list.remove(row_id);
            None
        },
        RowAction::Add | RowAction::Search | RowAction::Info => {
            match model::row_link(screen, row_id, action) {
                Some(route) => Some(PagesEffect::NavigateTo(route)),
                None => {
                    let name = list.get(row_id).map(|row| row.name());
                    log::debug!("{action:?} on {name:?} has no destination");
                    None
                },
            }
        },
    }
}

fn follow_link(screen: Screen, route: Route) -> Option<PagesEffect> {
    if screen.back_link() == Some(route) || screen.forward_link() == Some(route)
    {
        return Some(PagesEffect::NavigateTo(route));
    }
    log::debug!("{screen:?} does not link to {route}");
    None
}

#[cfg(test)]
mod tests {
    use super::apply;
    use crate::navigation::{Route, resolve};
    use crate::widgets::pages::event::{PagesEffect, PagesIntent};
    use crate::widgets::pages::model::{
        Decision, ListTab, PageBody, RoomSheetTab, RowAction,
    };
    use crate::widgets::pages::sheet::{Amount, ItemSheet};
    use crate::widgets::pages::state::PagesState;

    fn mounted(route: Route) -> PagesState {
        PagesState::new(resolve(route))
    }

    fn visible_ids(state: &PagesState) -> Vec<&'static str> {
        state
            .list()
            .map(|list| list.visible().iter().map(|row| row.id).collect())
            .unwrap_or_default()
    }

    fn sheet(state: &PagesState) -> &ItemSheet {
        match state.body() {
            PageBody::Items(sheet) => sheet,
            body => panic!("expected a line-item sheet, got {body:?}"),
        }
    }

    fn line_ids(state: &PagesState) -> Vec<String> {
        sheet(state)
            .items()
            .visible()
            .iter()
            .map(|item| item.id.clone())
            .collect()
    }

    fn row_action(row_id: &str, action: RowAction) -> PagesIntent {
        PagesIntent::RowAction {
            row_id: row_id.to_string(),
            action,
        }
    }

    #[test]
    fn given_search_text_when_filtering_then_case_insensitive_substring_matches()
     {
        let mut state = mounted(Route::Pricing);

        let _ = apply(&mut state, PagesIntent::Search(String::from("  MART")));

        assert_eq!(visible_ids(&state), vec!["thiago-martins"]);
    }

    #[test]
    fn given_pricing_row_when_add_pressed_then_release_view_is_requested() {
        let mut state = mounted(Route::Pricing);

        let effect =
            apply(&mut state, row_action("ana-paula", RowAction::Add));

        assert_eq!(
            effect,
            Some(PagesEffect::NavigateTo(Route::PricingLiberacao))
        );
    }

    #[test]
    fn given_unwired_action_when_pressed_then_nothing_happens() {
        let mut state = mounted(Route::Pricing);
        let before = visible_ids(&state);

        let effect =
            apply(&mut state, row_action("ana-paula", RowAction::Info));

        assert_eq!(effect, None);
        assert_eq!(visible_ids(&state), before);
    }

    #[test]
    fn given_action_not_offered_by_row_when_pressed_then_it_is_ignored() {
        let mut state = mounted(Route::FolhaSala);

        let effect = apply(
            &mut state,
            row_action("lucas-ferreira", RowAction::Add),
        );
        assert_eq!(effect, None);

        let effect =
            apply(&mut state, row_action("lucas-ferreira", RowAction::Delete));
        assert_eq!(effect, None);
        assert!(visible_ids(&state).contains(&"lucas-ferreira"));
    }

    #[test]
    fn given_delete_action_when_pressed_then_row_leaves_the_list() {
        let mut state = mounted(Route::OrdemCompra);

        let _ = apply(
            &mut state,
            row_action("pedro-henrique", RowAction::Delete),
        );

        assert!(!visible_ids(&state).contains(&"pedro-henrique"));
        assert_eq!(visible_ids(&state).len(), 6);
    }

    #[test]
    fn given_billed_tab_when_toggling_rows_then_selection_survives_tab_switches()
     {
        let mut state = mounted(Route::Faturamento);
        assert_eq!(state.tab(), Some(ListTab::PendingBilling));

        let _ = apply(
            &mut state,
            PagesIntent::ToggleRow(String::from("regiane-takahashi")),
        );
        assert!(
            !state
                .list()
                .is_some_and(|list| list.is_selected("regiane-takahashi"))
        );

        let _ = apply(&mut state, PagesIntent::SelectTab(ListTab::Billed));
        let _ = apply(
            &mut state,
            PagesIntent::ToggleRow(String::from("regiane-takahashi")),
        );
        let _ =
            apply(&mut state, PagesIntent::SelectTab(ListTab::PendingBilling));
        let _ = apply(&mut state, PagesIntent::SelectTab(ListTab::Billed));

        let list = state.list().expect("billed list");
        assert!(list.is_selected("regiane-takahashi"));
        assert_eq!(list.selected_count(), 4);
    }

    #[test]
    fn given_search_text_when_switching_tabs_then_filter_is_carried_over() {
        let mut state = mounted(Route::Agendamentos);
        let _ = apply(&mut state, PagesIntent::Search(String::from("gab")));

        let _ = apply(&mut state, PagesIntent::SelectTab(ListTab::Scheduled));

        assert_eq!(visible_ids(&state), vec!["gabriela-mendes"]);
    }

    #[test]
    fn given_foreign_tab_when_selected_then_active_tab_is_unchanged() {
        let mut state = mounted(Route::Agendamentos);

        let _ = apply(&mut state, PagesIntent::SelectTab(ListTab::Billed));

        assert_eq!(state.tab(), Some(ListTab::PendingAppointment));
    }

    #[test]
    fn given_screen_change_when_remounted_then_local_state_is_reset() {
        let mut state = mounted(Route::OrdemCompra);
        let _ = apply(&mut state, PagesIntent::Search(String::from("zzz")));
        assert!(visible_ids(&state).is_empty());

        let _ = apply(
            &mut state,
            PagesIntent::ScreenChanged(resolve(Route::OrdemCompra)),
        );

        assert_eq!(visible_ids(&state).len(), 7);
    }

    #[test]
    fn given_detail_screen_when_following_links_then_only_declared_links_pass()
    {
        let mut state = mounted(Route::FolhaSalaMais);

        assert_eq!(
            apply(&mut state, PagesIntent::FollowLink(Route::FolhaSala)),
            Some(PagesEffect::NavigateTo(Route::FolhaSala))
        );
        assert_eq!(
            apply(
                &mut state,
                PagesIntent::FollowLink(Route::FolhaSalaConsignado)
            ),
            Some(PagesEffect::NavigateTo(Route::FolhaSalaConsignado))
        );
        assert_eq!(
            apply(&mut state, PagesIntent::FollowLink(Route::Pricing)),
            None
        );
    }

    #[test]
    fn given_procedure_form_when_confirmed_then_wizard_opens_with_list_view() {
        let mut state = mounted(Route::CriacaoProcedimento);

        let effect = apply(&mut state, PagesIntent::OpenWizard);

        assert_eq!(
            effect,
            Some(PagesEffect::OpenWizard {
                to_list: Some(Route::CriacaoProcedimentoLista)
            })
        );
        let mut other = mounted(Route::Teste);
        assert_eq!(apply(&mut other, PagesIntent::OpenWizard), None);
    }

    #[test]
    fn given_paged_list_when_moving_pages_then_page_is_clamped() {
        let mut state = mounted(Route::Pricing);

        let _ = apply(&mut state, PagesIntent::NextPage);
        let _ = apply(&mut state, PagesIntent::PreviousPage);
        let _ = apply(&mut state, PagesIntent::PreviousPage);

        let list = state.list().expect("pricing list");
        assert_eq!(list.page(), 0);
        assert_eq!(list.page_count(), 1);
    }

    #[test]
    fn given_quotation_when_removing_a_line_then_total_drops_and_last_stays() {
        let mut state = mounted(Route::Cotacao);
        assert_eq!(sheet(&state).total(), Amount::from_cents(19_999_998));

        let _ = apply(&mut state, PagesIntent::RemoveItem("item-1".into()));
        assert_eq!(line_ids(&state), vec!["item-2"]);
        assert_eq!(sheet(&state).total(), Amount::from_cents(9_999_999));

        let _ = apply(&mut state, PagesIntent::RemoveItem("item-2".into()));
        assert_eq!(line_ids(&state), vec!["item-2"]);
    }

    #[test]
    fn given_quotation_when_adding_lines_then_blank_lines_get_fresh_ids() {
        let mut state = mounted(Route::Cotacao);

        let _ = apply(&mut state, PagesIntent::RemoveItem("item-2".into()));
        let _ = apply(&mut state, PagesIntent::AddItem);

        assert_eq!(line_ids(&state), vec!["item-1", "item-3"]);
        assert_eq!(sheet(&state).total(), Amount::from_cents(9_999_999));
    }

    #[test]
    fn given_release_review_when_stepping_quantity_then_total_follows() {
        let mut state = mounted(Route::PricingLiberacao);
        let before = sheet(&state).total();

        let _ = apply(
            &mut state,
            PagesIntent::AdjustQuantity {
                item_id: String::from("plss-1007"),
                delta: 1,
            },
        );
        let _ = apply(&mut state, PagesIntent::AddItem);

        assert_eq!(
            sheet(&state).total(),
            before + Amount::from_cents(13_300)
        );
        assert_eq!(line_ids(&state).len(), 3);
    }

    #[test]
    fn given_highlighted_line_when_typing_price_then_only_it_is_repriced() {
        let mut state = mounted(Route::PricingLiberacao);
        let edit = |item_id: &str| PagesIntent::EditPrice {
            item_id: item_id.to_string(),
            value: String::from("R$ 900,00"),
        };

        let _ = apply(&mut state, edit("2088tc-58"));
        let _ = apply(&mut state, edit("pm1272"));

        let items = sheet(&state).items();
        let price = |id| items.get(id).map(|item| item.unit_price);
        assert_eq!(price("2088tc-58"), Some(Amount::from_cents(90_000)));
        assert_eq!(price("pm1272"), Some(Amount::from_cents(450_176)));
    }

    #[test]
    fn given_balance_review_when_approved_then_billing_summary_is_requested() {
        let mut state = mounted(Route::SaldoPendente);

        let returned = apply(
            &mut state,
            PagesIntent::Decide(Decision::ReturnForCorrection),
        );
        let approved =
            apply(&mut state, PagesIntent::Decide(Decision::Approve));

        assert_eq!(returned, None);
        assert_eq!(
            approved,
            Some(PagesEffect::NavigateTo(Route::FaturamentoCs))
        );
    }

    #[test]
    fn given_screen_without_destination_when_deciding_then_nothing_happens() {
        let mut state = mounted(Route::PricingLiberacao);
        assert_eq!(
            apply(&mut state, PagesIntent::Decide(Decision::Approve)),
            None
        );

        let mut quotation = mounted(Route::Cotacao);
        assert_eq!(
            apply(&mut quotation, PagesIntent::Decide(Decision::Approve)),
            None
        );
    }

    #[test]
    fn given_room_sheet_when_picking_tabs_then_consigned_opens_its_screen() {
        let mut state = mounted(Route::FolhaSalaMais);

        let _ = apply(
            &mut state,
            PagesIntent::SelectRoomTab(RoomSheetTab::Servicos),
        );
        assert_eq!(state.room_tab(), RoomSheetTab::Servicos);
        assert_eq!(
            apply(&mut state, PagesIntent::Decide(Decision::InsertRoomSheet)),
            None
        );

        let effect = apply(
            &mut state,
            PagesIntent::SelectRoomTab(RoomSheetTab::Consignado),
        );
        assert_eq!(
            effect,
            Some(PagesEffect::NavigateTo(Route::FolhaSalaConsignado))
        );
        assert_eq!(state.room_tab(), RoomSheetTab::Servicos);
    }

    #[test]
    fn given_room_sheet_when_editing_idgen_and_note_then_both_are_kept() {
        let mut state = mounted(Route::FolhaSalaMais);

        let _ = apply(&mut state, PagesIntent::EditIdgen(String::from("77")));
        let _ = apply(&mut state, PagesIntent::EditNote(String::from("ok")));

        assert_eq!(state.idgen(), "77");
        assert_eq!(state.note(), "ok");

        let mut list = mounted(Route::Pricing);
        let _ = apply(&mut list, PagesIntent::EditNote(String::from("x")));
        let _ = apply(&mut list, PagesIntent::EditIdgen(String::from("1")));
        assert_eq!(list.note(), "");
        assert_eq!(list.idgen(), "");
    }

    #[test]
    fn given_surgical_map_when_shifting_and_searching_then_board_follows() {
        let mut state = mounted(Route::MapaCirurgico);

        let _ = apply(&mut state, PagesIntent::Search(String::from("reuni")));
        let PageBody::Calendar(board) = state.body() else {
            panic!("surgical map should mount a calendar");
        };
        assert_eq!(board.events_on(12).len(), 2);
        assert!(board.events_on(9).is_empty());

        let _ = apply(&mut state, PagesIntent::ShiftMonth(1));
        let PageBody::Calendar(board) = state.body() else {
            panic!("surgical map should mount a calendar");
        };
        assert_eq!(board.month().month(), 8);
        assert!(board.events_on(12).is_empty());
    }

    #[test]
    fn given_consigned_sheet_when_answering_lots_then_product_is_updated() {
        let mut state = mounted(Route::FolhaSalaConsignado);

        let _ = apply(
            &mut state,
            PagesIntent::SetLot {
                product_id: String::from("4"),
                lot: String::from("L-88"),
            },
        );
        let _ = apply(&mut state, PagesIntent::ToggleSameLot("4".into()));

        let PageBody::Consigned(sheet) = state.body() else {
            panic!("consigned screen should mount its sheet");
        };
        let product = sheet.products().get("4").expect("CEC product");
        assert_eq!(product.lot, "L-88");
        assert!(product.same_lot);
    }

    #[test]
    fn given_purchase_order_when_removing_attachment_then_list_empties() {
        let mut state = mounted(Route::OrdemCompraAnexar);
        assert_eq!(state.attachments(), ["ordem_de_compra.pdf"]);

        let _ = apply(
            &mut state,
            PagesIntent::RemoveAttachment(String::from("outro.pdf")),
        );
        assert_eq!(state.attachments().len(), 1);

        let _ = apply(
            &mut state,
            PagesIntent::RemoveAttachment(String::from("ordem_de_compra.pdf")),
        );
        assert!(state.attachments().is_empty());
        assert_eq!(
            apply(&mut state, PagesIntent::Decide(Decision::Send)),
            Some(PagesEffect::NavigateTo(Route::FaturamentoLista))
        );
    }
}
