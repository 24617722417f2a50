use super::calendar::{CalendarBoard, CalendarEvent, EventDate, Month};
use super::consigned::{ConsignedProduct, ConsignedSheet};
use super::sheet::{Amount, ItemSheet, LineItem, PriceRule, SheetRules};
use crate::navigation::{Route, Screen};
use crate::shared::list::{FilteredList, Named};

/// Button shown in the actions column of a list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowAction {
    Add,
    Search,
    Info,
    Delete,
}

/// Status marker rendered next to a row name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowStatus {
    DivergentRelease,
    PendingBalance,
}

impl RowStatus {
    pub(crate) fn label_key(self) -> &'static str {
        match self {
            RowStatus::DivergentRelease => "page.liberacao-divergente",
            RowStatus::PendingBalance => "page.saldo-pendente",
        }
    }
}

/// One patient row of a list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PatientRow {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) status: Option<RowStatus>,
    /// Red alert marker before the name.
    pub(crate) alert: bool,
    pub(crate) actions: &'static [RowAction],
}

impl Named for PatientRow {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Tab of a list screen that splits its rows in two sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListTab {
    PendingBilling,
    Billed,
    PendingAppointment,
    Scheduled,
    QuotationAuthorization,
}

impl ListTab {
    pub(crate) fn label_key(self) -> &'static str {
        match self {
            ListTab::PendingBilling => "page.pendente-faturamento",
            ListTab::Billed => "page.faturados",
            ListTab::PendingAppointment => "page.pendente-agendamento",
            ListTab::Scheduled => "page.agendados",
            ListTab::QuotationAuthorization => "page.cotacao-autorizacao",
        }
    }

    /// Rows of this tab carry a selection checkbox.
    pub(crate) fn is_selectable(self) -> bool {
        matches!(self, ListTab::Billed)
    }
}

const ADD_DELETE_INFO: &[RowAction] =
    &[RowAction::Add, RowAction::Delete, RowAction::Info];
const SEARCH_DELETE_INFO: &[RowAction] =
    &[RowAction::Search, RowAction::Delete, RowAction::Info];
const ADD_INFO: &[RowAction] = &[RowAction::Add, RowAction::Info];
const SEARCH_INFO: &[RowAction] = &[RowAction::Search, RowAction::Info];
const ADD_DELETE: &[RowAction] = &[RowAction::Add, RowAction::Delete];
const SEARCH_DELETE: &[RowAction] = &[RowAction::Search, RowAction::Delete];
const SEARCH_ONLY: &[RowAction] = &[RowAction::Search];

const fn row(
    id: &'static str,
    name: &'static str,
    actions: &'static [RowAction],
) -> PatientRow {
    PatientRow {
        id,
        name,
        status: None,
        alert: false,
        actions,
    }
}

const fn with_status(row: PatientRow, status: RowStatus) -> PatientRow {
    PatientRow {
        status: Some(status),
        ..row
    }
}

const fn with_alert(row: PatientRow) -> PatientRow {
    PatientRow { alert: true, ..row }
}

const REGIANE: (&str, &str) = ("regiane-takahashi", "Regiane Takahashi");
const LUCAS: (&str, &str) = ("lucas-ferreira", "Lucas Ferreira da Silva");
const PEDRO: (&str, &str) = ("pedro-henrique", "Pedro Henrique Almeida Costa");
const ANA: (&str, &str) = ("ana-paula", "Ana Paula Monteiro");
const BRUNO: (&str, &str) = ("bruno-rodrigues", "Bruno Rodrigues Souza");
const GABRIELA: (&str, &str) = ("gabriela-mendes", "Gabriela Mendes Barbosa");
const THIAGO: (&str, &str) = ("thiago-martins", "Thiago Martins Cardoso");
const MARIANA: (&str, &str) =
    ("mariana-bastos", "Mariana Santos Oliveira Bastos");

const fn patient(
    who: (&'static str, &'static str),
    actions: &'static [RowAction],
) -> PatientRow {
    row(who.0, who.1, actions)
}

const PRICING_ROWS: &[PatientRow] = &[
    patient(REGIANE, ADD_DELETE_INFO),
    patient(LUCAS, ADD_DELETE_INFO),
    patient(PEDRO, ADD_DELETE_INFO),
    patient(ANA, ADD_DELETE_INFO),
    patient(BRUNO, ADD_DELETE_INFO),
    patient(GABRIELA, ADD_DELETE_INFO),
    patient(THIAGO, ADD_DELETE_INFO),
];

const FOLHA_SALA_ROWS: &[PatientRow] = &[
    patient(REGIANE, ADD_INFO),
    patient(LUCAS, SEARCH_INFO),
    patient(PEDRO, ADD_INFO),
    patient(ANA, ADD_INFO),
    patient(BRUNO, SEARCH_INFO),
    patient(GABRIELA, ADD_INFO),
    patient(THIAGO, ADD_INFO),
];

const ORDEM_COMPRA_ROWS: &[PatientRow] = &[
    patient(REGIANE, ADD_DELETE),
    patient(LUCAS, ADD_DELETE),
    patient(PEDRO, SEARCH_DELETE),
    patient(ANA, ADD_DELETE),
    patient(BRUNO, ADD_DELETE),
    patient(GABRIELA, SEARCH_DELETE),
    patient(THIAGO, ADD_DELETE),
];

const PENDING_BILLING_ROWS: &[PatientRow] = &[
    patient(REGIANE, ADD_DELETE_INFO),
    patient(LUCAS, ADD_DELETE_INFO),
    with_status(
        patient(PEDRO, ADD_DELETE_INFO),
        RowStatus::DivergentRelease,
    ),
    patient(ANA, ADD_DELETE_INFO),
    patient(BRUNO, ADD_DELETE_INFO),
    with_status(
        patient(GABRIELA, ADD_DELETE_INFO),
        RowStatus::PendingBalance,
    ),
    patient(THIAGO, ADD_DELETE_INFO),
];

const BILLED_ROWS: &[PatientRow] = &[
    patient(REGIANE, SEARCH_ONLY),
    patient(LUCAS, SEARCH_ONLY),
    patient(PEDRO, SEARCH_ONLY),
    patient(ANA, SEARCH_ONLY),
    patient(BRUNO, SEARCH_ONLY),
    patient(GABRIELA, SEARCH_ONLY),
    patient(THIAGO, SEARCH_ONLY),
];

const BILLED_PRESELECTED: &[&str] =
    &["pedro-henrique", "bruno-rodrigues", "gabriela-mendes"];

const APPOINTMENT_PENDING_ROWS: &[PatientRow] = &[
    patient(MARIANA, ADD_DELETE_INFO),
    patient(LUCAS, ADD_DELETE_INFO),
    patient(PEDRO, ADD_DELETE_INFO),
    patient(ANA, ADD_DELETE_INFO),
    patient(BRUNO, ADD_DELETE_INFO),
];

const APPOINTMENT_SCHEDULED_ROWS: &[PatientRow] = &[
    patient(REGIANE, ADD_DELETE_INFO),
    patient(GABRIELA, ADD_DELETE_INFO),
    patient(THIAGO, ADD_DELETE_INFO),
];

const PROCEDURE_LIST_ROWS: &[PatientRow] = &[
    patient(REGIANE, ADD_DELETE_INFO),
    with_alert(patient(LUCAS, SEARCH_DELETE_INFO)),
    patient(PEDRO, ADD_DELETE_INFO),
    patient(ANA, ADD_DELETE_INFO),
    with_alert(patient(BRUNO, SEARCH_DELETE_INFO)),
    patient(GABRIELA, ADD_DELETE_INFO),
    patient(THIAGO, ADD_DELETE_INFO),
];

/// Read-only fields of the procedure creation form: label key and value.
pub(crate) const PROCEDURE_FIELDS: &[(&str, &str)] = &[
    ("field.nome-paciente", "Regiane Takahashi"),
    ("field.data-nascimento", "09/10/1994"),
    ("field.cpf", "905.251.500-92"),
    ("field.plano-saude", "INPART Saúde"),
    ("field.numero-solicitacao", "1234"),
    ("field.tipo-internacao", "PRE"),
    ("field.crm", "CRM"),
    ("field.hospital", "BENEFICÊNCIA PORTUGUESA"),
    ("field.cidade", "OSASCO"),
    ("field.convenio", "Amil"),
    ("field.medico-solicitante", "Manuaella Leanza"),
    ("field.data-prevista-cirurgia", "28/07/2025"),
    ("field.medico-assistente", "Gustavo Veloso"),
    ("field.medico-anestesista", "Dr. Rogerio Peron"),
];

/// Tabs of a list screen, empty for screens without tabs.
pub(crate) fn tabs(screen: Screen) -> &'static [ListTab] {
    match screen {
        Screen::FaturamentoLista { .. } => {
            &[ListTab::PendingBilling, ListTab::Billed]
        },
        Screen::Agendamentos => {
            &[ListTab::PendingAppointment, ListTab::Scheduled]
        },
        Screen::CriacaoProcedimentoLista => &[
            ListTab::QuotationAuthorization,
            ListTab::PendingAppointment,
        ],
        _ => &[],
    }
}

/// Build the row list a screen shows under `tab`; `None` when the screen
/// is not a list screen.
pub(crate) fn dataset(
    screen: Screen,
    tab: Option<ListTab>,
) -> Option<FilteredList<PatientRow>> {
    let (rows, preselected): (&[PatientRow], &[&str]) = match (screen, tab) {
        (Screen::Pricing { .. }, None) => (PRICING_ROWS, &[]),
        (Screen::FolhaSala { .. }, None) => (FOLHA_SALA_ROWS, &[]),
        (Screen::OrdemCompra { .. }, None) => (ORDEM_COMPRA_ROWS, &[]),
        (Screen::FaturamentoLista { .. }, Some(ListTab::PendingBilling)) => {
            (PENDING_BILLING_ROWS, &[])
        },
        (Screen::FaturamentoLista { .. }, Some(ListTab::Billed)) => {
            (BILLED_ROWS, BILLED_PRESELECTED)
        },
        (Screen::Agendamentos, Some(ListTab::PendingAppointment)) => {
            (APPOINTMENT_PENDING_ROWS, &[])
        },
        (Screen::Agendamentos, Some(ListTab::Scheduled)) => {
            (APPOINTMENT_SCHEDULED_ROWS, &[])
        },
        (Screen::CriacaoProcedimentoLista, Some(_)) => {
            (PROCEDURE_LIST_ROWS, &[])
        },
        _ => return None,
    };

    let mut list = FilteredList::new(rows.to_vec());
    for id in preselected {
        list.toggle_selected(id);
    }
    Some(list)
}

/// Route a row button leads to, if the screen wires one for that row.
pub(crate) fn row_link(
    screen: Screen,
    row_id: &str,
    action: RowAction,
) -> Option<Route> {
    if action != RowAction::Add {
        return None;
    }
    match screen {
        Screen::Pricing { to_liberacao } => to_liberacao,
        Screen::FolhaSala { to_mais } if row_id == REGIANE.0 => Some(to_mais),
        Screen::OrdemCompra { to_anexar } => to_anexar,
        Screen::FaturamentoLista { to_divergente, .. }
            if row_id == PEDRO.0 =>
        {
            Some(to_divergente)
        },
        Screen::FaturamentoLista {
            to_saldo_pendente, ..
        } if row_id == GABRIELA.0 => Some(to_saldo_pendente),
        _ => None,
    }
}

/// Screen-level button that settles the item under review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    Approve,
    Reject,
    Confirm,
    ReturnForCorrection,
    RequestCorrection,
    Send,
    Download,
    Share,
    InsertRoomSheet,
    SendReport,
}

impl Decision {
    pub(crate) fn label_key(self) -> &'static str {
        match self {
            Decision::Approve => "common.aprovar",
            Decision::Reject => "common.reprovar",
            Decision::Confirm => "button.ok",
            Decision::ReturnForCorrection => "button.devolver-correcao",
            Decision::RequestCorrection => "button.pedido-correcao",
            Decision::Send => "common.enviar",
            Decision::Download => "button.baixar",
            Decision::Share => "button.compartilhar",
            Decision::InsertRoomSheet => "button.inserir-folha-sala",
            Decision::SendReport => "button.enviar-relacao",
        }
    }

    /// Filled button; the others are outlined.
    pub(crate) fn is_primary(self) -> bool {
        matches!(
            self,
            Decision::Approve
                | Decision::Confirm
                | Decision::Send
                | Decision::SendReport
                | Decision::InsertRoomSheet
        )
    }
}

/// Decision buttons of a screen, in display order.
pub(crate) fn decisions(screen: Screen) -> &'static [Decision] {
    match screen {
        Screen::Cotacao => &[Decision::Download, Decision::Share],
        Screen::PricingLiberacao { .. } => {
            &[Decision::Reject, Decision::Approve]
        },
        Screen::CotacaoValidacao => &[Decision::Confirm],
        Screen::SaldoPendente { .. } => {
            &[Decision::ReturnForCorrection, Decision::Approve]
        },
        Screen::OrdemCompraAnexar { .. } => {
            &[Decision::RequestCorrection, Decision::Send]
        },
        Screen::FolhaSalaMais { .. } => {
            &[Decision::InsertRoomSheet, Decision::SendReport]
        },
        Screen::FolhaSalaConsignado { .. } => &[Decision::SendReport],
        Screen::LiberacaoDivergente { .. } => &[Decision::Approve],
        _ => &[],
    }
}

/// Label key of the free-text note a screen collects, if any.
pub(crate) fn note_key(screen: Screen) -> Option<&'static str> {
    match screen {
        Screen::PricingLiberacao { .. } | Screen::CotacaoValidacao => {
            Some("button.justificativa")
        },
        Screen::SaldoPendente { .. } => Some("field.comentario"),
        Screen::OrdemCompraAnexar { .. } => Some("field.observacoes"),
        Screen::FolhaSalaMais { .. } => Some("page.comentarios"),
        Screen::FolhaSalaConsignado { .. } => Some("page.justificativa"),
        _ => None,
    }
}

/// Supplier group tab of a room sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum RoomSheetTab {
    #[default]
    Consignado,
    Industria,
    OperadorLogistico,
    Servicos,
}

impl RoomSheetTab {
    pub(crate) const ALL: [RoomSheetTab; 4] = [
        RoomSheetTab::Consignado,
        RoomSheetTab::Industria,
        RoomSheetTab::OperadorLogistico,
        RoomSheetTab::Servicos,
    ];

    pub(crate) fn label_key(self) -> &'static str {
        match self {
            RoomSheetTab::Consignado => "page.consignado",
            RoomSheetTab::Industria => "page.industria",
            RoomSheetTab::OperadorLogistico => "page.operador-logistico",
            RoomSheetTab::Servicos => "page.servicos",
        }
    }

    /// Documents already attached under the tab.
    pub(crate) fn count(self) -> usize {
        match self {
            RoomSheetTab::Servicos => 7,
            _ => 0,
        }
    }
}

/// Task shortcuts of the bids screen, as translation keys.
pub(crate) const BID_TASKS: &[&str] = &[
    "licitacoes.vigentes",
    "licitacoes.adesoes",
    "licitacoes.vencidas-antigas",
    "licitacoes.vencidas",
    "licitacoes.validacao",
    "licitacoes.formulario",
    "licitacoes.suporte",
    "licitacoes.cadastro-cliente",
    "licitacoes.tabelas-preco",
    "licitacoes.lista-preco",
    "licitacoes.cadastro-produto",
    "licitacoes.licit",
    "licitacoes.endereco-entrega",
    "licitacoes.regulares",
];

const QUOTATION_FIELDS: &[(&str, &str)] = &[
    ("field.cidade", "São Paulo"),
    ("field.data", "8 de Julho de 2025"),
    ("field.numero-cotacao", "55008"),
    ("field.numero-versao-cotacao", "1"),
    ("field.cliente", "Amil Assistência Médica Internacional S/A"),
    ("field.cnpj", "29.309.127/0001-79"),
    (
        "field.ac",
        concat!(
            "Prezado(a) Senhor(a) Conforme solicitação de V.Sa, ",
            "apresentamos nossa proposta para fornecimento dos materiais ",
            "abaixo relacionados:",
        ),
    ),
    ("field.nome-paciente", "Teste Amil"),
    ("field.medico", "Teste"),
    ("field.local", "BP - 001549 PAULISTA"),
    ("field.data-prevista-cirurgia-cotacao", "09 de Julho de 2025"),
];

/// Supply conditions printed under the quotation total.
pub(crate) const SUPPLY_CONDITIONS: &[(&str, &str)] = &[
    ("field.prazo-pagamento", "À Vista"),
    ("field.validade-proposta", "30 Dias"),
    ("field.prazo-entrega", "2 Dias"),
];

/// Read-only header fields of a screen: label key and value.
pub(crate) fn detail_fields(
    screen: Screen,
) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::Cotacao => QUOTATION_FIELDS,
        Screen::SaldoPendente { .. } => {
            &[("field.nome-paciente", "Gabriela Mendes Barbosa")]
        },
        Screen::OrdemCompraAnexar { .. } => {
            &[("field.nome-paciente", "Regiane Takahashi")]
        },
        Screen::FolhaSalaMais { .. } => &[
            ("field.nome-paciente", "Regiane Takahashi"),
            ("page.industria", "Abbott"),
        ],
        _ => &[],
    }
}

/// Files attached when the screen mounts.
pub(crate) fn attachments(screen: Screen) -> Vec<&'static str> {
    match screen {
        Screen::OrdemCompraAnexar { .. } => vec!["ordem_de_compra.pdf"],
        _ => Vec::new(),
    }
}

fn line(
    id: &str,
    description: &'static str,
    list_cents: u64,
    quote_cents: u64,
) -> LineItem {
    LineItem {
        id: id.to_string(),
        code: "",
        description,
        anvisa: "",
        quantity: 1,
        list_price: Some(Amount::from_cents(list_cents)),
        unit_price: Amount::from_cents(quote_cents),
        inactive: false,
    }
}

fn quotation_items() -> Vec<LineItem> {
    let item = |id: &str, code, description| LineItem {
        id: id.to_string(),
        code,
        description,
        anvisa: "807409500098",
        quantity: 1,
        list_price: None,
        unit_price: Amount::from_cents(9_999_999),
        inactive: false,
    };
    vec![
        item(
            "item-1",
            "PM1272",
            "PM1272 MARCAPASSO CAMARA ÚNICA ASSURITY MRTRF. PM1272",
        ),
        item("item-2", "5088TC", "INTODUTOR PEEL AWAY KIT 7F 14CM"),
    ]
}

const QUOTATION_RULES: SheetRules = SheetRules {
    can_add: true,
    can_remove: true,
    selectable: false,
    quantity_steps: false,
    price: PriceRule::Locked,
};

const REVIEW_RULES: SheetRules = SheetRules {
    can_add: false,
    can_remove: false,
    selectable: true,
    quantity_steps: true,
    price: PriceRule::Selected,
};

const BALANCE_RULES: SheetRules = SheetRules {
    can_add: false,
    can_remove: false,
    selectable: false,
    quantity_steps: true,
    price: PriceRule::Active,
};

/// Line items a screen reviews; `None` for screens without a sheet.
pub(crate) fn item_sheet(screen: Screen) -> Option<ItemSheet> {
    let sheet = match screen {
        Screen::Cotacao => {
            ItemSheet::new(quotation_items(), &[], QUOTATION_RULES)
        },
        Screen::PricingLiberacao { .. } => ItemSheet::new(
            vec![
                line(
                    "plss-1007",
                    "PLSS-1007_INTRODUTOR_PEEL_AWAY KIT 7F 14CM",
                    13_300,
                    13_300,
                ),
                line(
                    "2088tc-58",
                    "2088TC/58_MRI_ELETRODO ENDOCÁRDIO AT",
                    109_500,
                    98_000,
                ),
                line(
                    "pm1272",
                    "PM1272_MARCAPASSO CAMARA ÚNICA ASSU",
                    450_176,
                    450_176,
                ),
            ],
            &["2088tc-58"],
            REVIEW_RULES,
        ),
        Screen::CotacaoValidacao => ItemSheet::new(
            vec![
                line(
                    "plss-1007",
                    "PLSS-1007_INTRODUTOR_PEEL_AWAY KIT 7F 14CM",
                    13_300,
                    13_300,
                ),
                line(
                    "2088tc-58",
                    "2088TC/58_MRI_ELETRODO ENDOCÁRDIO VENTRÍCULO",
                    109_500,
                    98_000,
                ),
                line(
                    "pm1272",
                    "PM1272_MARCAPASSO CAMARA ÚNICA ASSURANCE",
                    457_676,
                    457_676,
                ),
            ],
            &["2088tc-58"],
            SheetRules {
                price: PriceRule::Locked,
                ..REVIEW_RULES
            },
        ),
        Screen::SaldoPendente { .. } => {
            let mut retired = line(
                "pm1272-inactive",
                "PM1272_MARCAPASSO CAMARA ÚNICA ASSU...",
                520_050,
                520_050,
            );
            retired.inactive = true;
            ItemSheet::new(
                vec![
                    line(
                        "plss-1007",
                        "PLSS-1007_INTRODUTOR_PEEL_AWAY KIT 7F 14...",
                        13_300,
                        13_300,
                    ),
                    line(
                        "2088tc-58",
                        "2088TC/58_MRI_ELETRODO ENDOCÁRD...",
                        109_500,
                        98_000,
                    ),
                    line(
                        "pm1272-active",
                        "PM1272_MARCAPASSO CAMARA ÚNICA ASSU...",
                        450_176,
                        450_176,
                    ),
                    retired,
                ],
                &["pm1272-active"],
                BALANCE_RULES,
            )
        },
        _ => return None,
    };
    Some(sheet)
}

/// First month the surgical map shows.
pub(crate) const SURGICAL_MAP_START: Month = Month::new(2025, 7);

fn surgical_map() -> CalendarBoard {
    let event = |id, day, time, title| CalendarEvent {
        id,
        date: EventDate {
            year: 2025,
            month: 7,
            day,
        },
        time,
        title,
    };
    CalendarBoard::new(
        SURGICAL_MAP_START,
        vec![
            event("reuniao-1030", 12, Some("10:30"), "Reunião"),
            event("reuniao-1130", 12, Some("11:30"), "Reunião"),
            event("assuntos-12", 12, None, "+ 3 assuntos"),
            event("eventos-09", 9, None, "4 eventos"),
            event("eventos-16", 16, None, "4 eventos"),
        ],
    )
}

fn consigned_sheet() -> ConsignedSheet {
    let product = |id, code, name, utilized, reversed, same_lot| {
        ConsignedProduct {
            id,
            code,
            name,
            total: 2,
            utilized,
            reversed,
            same_lot,
            lot: String::new(),
        }
    };
    ConsignedSheet::new(vec![
        product("1", "99950566", "CÂNULA ARTERIAL", 2, 0, true),
        product("2", "99943297", "CÂNULA ATRIO ESQUERDO", 0, 1, false),
        product("3", "99939526", "CÂNULA VENOSA", 0, 1, false),
        product("4", "99867729", "CEC", 0, 1, false),
        product("5", "99935495", "PATCH PERICÁRDIO BOVIN", 0, 1, false),
        product("6", "99955725", "VÁLVULA AÓRTICA", 0, 1, false),
    ])
}

/// Mutable content mounted for a screen.
#[derive(Debug, Clone)]
pub(crate) enum ScreenBody {
    /// One patient list per tab, `active` indexing the shown one.
    Lists { lists: Vec<TabList>, active: usize },
    Items(ItemSheet),
    Calendar(CalendarBoard),
    Consigned(ConsignedSheet),
    /// Fixed layout with no searchable content.
    Static,
}

/// Build the fresh body of `screen`.
pub(crate) fn body(screen: Screen) -> ScreenBody {
    if let Some(sheet) = item_sheet(screen) {
        return ScreenBody::Items(sheet);
    }
    match screen {
        Screen::MapaCirurgico => return ScreenBody::Calendar(surgical_map()),
        Screen::FolhaSalaConsignado { .. } => {
            return ScreenBody::Consigned(consigned_sheet());
        },
        _ => {},
    }

    let lists: Vec<TabList> = match tabs(screen) {
        [] => dataset(screen, None)
            .map(|list| TabList { tab: None, list })
            .into_iter()
            .collect(),
        tabs => tabs
            .iter()
            .filter_map(|tab| {
                dataset(screen, Some(*tab)).map(|list| TabList {
                    tab: Some(*tab),
                    list,
                })
            })
            .collect(),
    };
    if lists.is_empty() {
        ScreenBody::Static
    } else {
        ScreenBody::Lists { lists, active: 0 }
    }
}

/// Read-only view of the mounted body.
#[derive(Debug, Clone, Copy)]
pub(crate) enum PageBody<'a> {
    List(&'a FilteredList<PatientRow>),
    Items(&'a ItemSheet),
    Calendar(&'a CalendarBoard),
    Consigned(&'a ConsignedSheet),
    Static,
}

/// One list of a screen together with the tab it belongs to.
#[derive(Debug, Clone)]
pub(crate) struct TabList {
    pub(crate) tab: Option<ListTab>,
    pub(crate) list: FilteredList<PatientRow>,
}

/// Read-only page snapshot for the presentation layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PagesViewModel<'a> {
    pub(crate) screen: Screen,
    pub(crate) tab: Option<ListTab>,
    pub(crate) body: PageBody<'a>,
    pub(crate) note: &'a str,
    pub(crate) idgen: &'a str,
    pub(crate) attachments: &'a [&'static str],
    pub(crate) room_tab: RoomSheetTab,
}

#[cfg(test)]
mod tests {
    use super::{
        BID_TASKS, Decision, ListTab, RoomSheetTab, RowAction, ScreenBody,
        body, dataset, decisions, detail_fields, item_sheet, note_key,
        row_link, tabs,
    };
    use crate::navigation::{Route, Screen, resolve};
    use crate::shared::i18n::{Language, translate};
    use crate::shared::list::Named;
    use crate::widgets::pages::calendar::{Month, WEEKDAY_KEYS};
    use crate::widgets::pages::sheet::{Amount, PriceRule};

    #[test]
    fn given_billing_list_when_building_billed_tab_then_preselected_rows_are_kept()
     {
        let screen = resolve(Route::FaturamentoLista);
        let list = dataset(screen, Some(ListTab::Billed))
            .expect("billed tab should have rows");

        assert_eq!(list.selected_count(), 3);
        assert!(list.is_selected("pedro-henrique"));
        assert!(!list.is_selected("regiane-takahashi"));
    }

    #[test]
    fn given_non_list_screen_when_building_dataset_then_none_is_returned() {
        assert!(dataset(resolve(Route::Teste), None).is_none());
        assert!(dataset(resolve(Route::PricingLiberacao), None).is_none());
        assert!(tabs(resolve(Route::Teste)).is_empty());
    }

    #[test]
    fn given_list_screens_when_building_first_tab_then_rows_exist() {
        for route in [
            Route::Pricing,
            Route::FolhaSala,
            Route::OrdemCompra,
            Route::Faturamento,
            Route::Agendamentos,
            Route::CriacaoProcedimentoLista,
        ] {
            let screen = resolve(route);
            let tab = tabs(screen).first().copied();
            let list = dataset(screen, tab).expect("list screen");
            assert!(!list.visible().is_empty(), "{route}");
        }
    }

    #[test]
    fn given_folha_sala_when_resolving_row_links_then_only_regiane_navigates()
    {
        let screen = resolve(Route::FolhaSala);
        assert_eq!(
            row_link(screen, "regiane-takahashi", RowAction::Add),
            Some(Route::FolhaSalaMais)
        );
        assert_eq!(row_link(screen, "pedro-henrique", RowAction::Add), None);
        assert_eq!(
            row_link(screen, "regiane-takahashi", RowAction::Info),
            None
        );
    }

    #[test]
    fn given_billing_list_when_resolving_row_links_then_status_rows_navigate()
    {
        let screen = resolve(Route::Faturamento);
        assert_eq!(
            row_link(screen, "pedro-henrique", RowAction::Add),
            Some(Route::LiberacaoDivergente)
        );
        assert_eq!(
            row_link(screen, "gabriela-mendes", RowAction::Add),
            Some(Route::SaldoPendente)
        );
        assert_eq!(row_link(screen, "ana-paula", RowAction::Add), None);
    }

    #[test]
    fn given_pricing_when_any_row_is_added_then_release_view_is_targeted() {
        let screen = resolve(Route::Pricing);
        let list = dataset(screen, None).expect("pricing rows");
        for row in list.visible() {
            assert_eq!(
                row_link(screen, row.id(), RowAction::Add),
                Some(Route::PricingLiberacao)
            );
        }
    }

    #[test]
    fn given_review_screens_when_building_sheets_then_totals_add_up() {
        let total = |route| {
            item_sheet(resolve(route))
                .map(|sheet| sheet.total())
                .expect("line-item screen")
        };

        assert_eq!(total(Route::Cotacao), Amount::from_cents(19_999_998));
        assert_eq!(total(Route::PricingLiberacao), Amount::from_cents(561_476));
        assert_eq!(
            total(Route::CotacaoValidacao),
            Amount::from_cents(568_976)
        );
        assert_eq!(
            total(Route::SaldoPendente),
            Amount::from_cents(1_081_526)
        );
        assert!(item_sheet(resolve(Route::Pricing)).is_none());
    }

    #[test]
    fn given_each_screen_when_mounting_then_body_kind_matches_its_content() {
        let kind = |route| match body(resolve(route)) {
            ScreenBody::Lists { .. } => "lists",
            ScreenBody::Items(_) => "items",
            ScreenBody::Calendar(_) => "calendar",
            ScreenBody::Consigned(_) => "consigned",
            ScreenBody::Static => "static",
        };

        assert_eq!(kind(Route::Pricing), "lists");
        assert_eq!(kind(Route::Cotacao), "items");
        assert_eq!(kind(Route::CotacaoValidacao), "items");
        assert_eq!(kind(Route::MapaCirurgico), "calendar");
        assert_eq!(kind(Route::FolhaSalaConsignado), "consigned");
        assert_eq!(kind(Route::Licitacoes), "static");
        assert_eq!(kind(Route::FaturamentoCs), "static");
    }

    #[test]
    fn given_read_only_validation_when_listing_lines_then_prices_are_locked() {
        let sheet =
            item_sheet(Screen::CotacaoValidacao).expect("validation sheet");
        let rules = sheet.rules();

        assert!(!rules.can_add && !rules.can_remove);
        assert!(rules.selectable);
        assert!(sheet.items().is_selected("2088tc-58"));
        assert_eq!(rules.price, PriceRule::Locked);
    }

    #[test]
    fn given_decision_screens_when_listing_buttons_then_order_and_notes_match()
    {
        assert_eq!(
            decisions(resolve(Route::PricingLiberacao)),
            [Decision::Reject, Decision::Approve]
        );
        assert_eq!(
            decisions(resolve(Route::SaldoPendente)),
            [Decision::ReturnForCorrection, Decision::Approve]
        );
        assert!(decisions(resolve(Route::Pricing)).is_empty());
        assert_eq!(
            note_key(resolve(Route::OrdemCompraAnexar)),
            Some("field.observacoes")
        );
        assert_eq!(note_key(resolve(Route::Cotacao)), None);
        assert!(Decision::Approve.is_primary());
        assert!(!Decision::Reject.is_primary());
    }

    #[test]
    fn given_page_labels_when_translating_then_every_key_is_known() {
        let known = |key: &str| translate(key, Language::EnUs) != key;
        let mut keys: Vec<&str> = BID_TASKS.to_vec();
        keys.extend(WEEKDAY_KEYS);
        keys.extend((1..=12).map(|month| Month::new(2025, month).label_key()));
        keys.extend(RoomSheetTab::ALL.map(RoomSheetTab::label_key));
        for route in Route::ALL {
            let screen = resolve(route);
            keys.extend(decisions(screen).iter().map(|d| d.label_key()));
            keys.extend(note_key(screen));
            keys.extend(detail_fields(screen).iter().map(|(key, _)| *key));
        }

        for key in keys {
            assert!(known(key), "{key}");
        }
    }
}
