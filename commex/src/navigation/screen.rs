use super::route::Route;

/// A renderable screen produced by route resolution.
///
/// Link fields hold the routes a screen may ask to navigate to. A screen
/// never changes the active route itself: it emits one of these routes as a
/// navigation intent and the navigation widget applies it. `None` marks a
/// link the menu table leaves unwired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    CriacaoProcedimento { to_list: Option<Route> },
    CriacaoProcedimentoLista,
    Cotacao,
    CotacaoValidacao,
    Pricing { to_liberacao: Option<Route> },
    PricingLiberacao { back: Route },
    Licitacoes,
    Agendamentos,
    MapaCirurgico,
    FolhaSala { to_mais: Route },
    FolhaSalaMais { back: Route, to_consignado: Route },
    FolhaSalaConsignado { back: Route },
    OrdemCompra { to_anexar: Option<Route> },
    OrdemCompraAnexar { to_faturamento_lista: Route },
    FaturamentoLista { to_divergente: Route, to_saldo_pendente: Route },
    LiberacaoDivergente { to_faturamento_cs: Route },
    SaldoPendente { to_faturamento_cs: Route },
    FaturamentoCs { back: Route },
    Teste,
    /// Screen without interactive content; `title_key` is a translation key.
    Placeholder { title_key: &'static str },
}

impl Screen {
    /// Return the translation key of the screen heading.
    pub(crate) fn title_key(&self) -> &'static str {
        match self {
            Screen::CriacaoProcedimento { .. } => "menu.criacao-procedimento",
            Screen::CriacaoProcedimentoLista => {
                "page.criacao-procedimento-lista"
            },
            Screen::Cotacao => "page.cotacao",
            Screen::CotacaoValidacao => "page.validacao-comercial",
            Screen::Pricing { .. } => "page.pendente-liberacao",
            Screen::PricingLiberacao { .. } => "page.liberacao",
            Screen::Licitacoes => "page.licitacoes",
            Screen::Agendamentos => "page.agendamentos",
            Screen::MapaCirurgico => "page.mapa-cirurgico",
            Screen::FolhaSala { .. } => "page.folha-sala",
            Screen::FolhaSalaMais { .. } => "page.folha-sala",
            Screen::FolhaSalaConsignado { .. } => "page.consignado",
            Screen::OrdemCompra { .. } => "page.ordem-compra",
            Screen::OrdemCompraAnexar { .. } => "page.ordem-compra-anexar",
            Screen::FaturamentoLista { .. } => "page.pendente-faturamento",
            Screen::LiberacaoDivergente { .. } => "page.liberacao-divergente",
            Screen::SaldoPendente { .. } => "page.saldo-pendente",
            Screen::FaturamentoCs { .. } => "page.faturamento-cs",
            Screen::Teste => "menu.teste",
            Screen::Placeholder { title_key } => title_key,
        }
    }

    /// Return the route a "back" action leads to, if the screen has one.
    pub(crate) fn back_link(&self) -> Option<Route> {
        match *self {
            Screen::PricingLiberacao { back }
            | Screen::FolhaSalaMais { back, .. }
            | Screen::FolhaSalaConsignado { back }
            | Screen::FaturamentoCs { back } => Some(back),
            _ => None,
        }
    }

    /// Return the route a screen-level "forward" action leads to.
    ///
    /// Row-level links of list screens are resolved separately per row.
    pub(crate) fn forward_link(&self) -> Option<Route> {
        match *self {
            Screen::FolhaSalaMais { to_consignado, .. } => Some(to_consignado),
            Screen::OrdemCompraAnexar {
                to_faturamento_lista,
            } => Some(to_faturamento_lista),
            Screen::LiberacaoDivergente { to_faturamento_cs }
            | Screen::SaldoPendente { to_faturamento_cs } => {
                Some(to_faturamento_cs)
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Screen;
    use crate::navigation::Route;

    #[test]
    fn given_detail_screens_when_asking_back_link_then_parent_route_is_returned()
     {
        let screen = Screen::PricingLiberacao {
            back: Route::Pricing,
        };
        assert_eq!(screen.back_link(), Some(Route::Pricing));
        assert_eq!(screen.forward_link(), None);
    }

    #[test]
    fn given_folha_sala_mais_when_asking_links_then_both_directions_exist() {
        let screen = Screen::FolhaSalaMais {
            back: Route::FolhaSala,
            to_consignado: Route::FolhaSalaConsignado,
        };
        assert_eq!(screen.back_link(), Some(Route::FolhaSala));
        assert_eq!(screen.forward_link(), Some(Route::FolhaSalaConsignado));
    }

    #[test]
    fn given_placeholder_when_asking_title_then_embedded_key_is_used() {
        let screen = Screen::Placeholder {
            title_key: "menu.inb",
        };
        assert_eq!(screen.title_key(), "menu.inb");
    }
}
