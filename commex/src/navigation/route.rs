/// Identifier of every view the dashboard can show.
///
/// Menu views and hidden views share one namespace; the string form returned
/// by [`Route::id`] is the stable identifier used by the menu table and by
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum Route {
    CriacaoProcedimento,
    Cotacao,
    CotacaoValidacao,
    CotacaoCustomer,
    CotacaoCreco,
    Pricing,
    Licitacoes,
    FaturamentoServico,
    Agendamentos,
    MapaCirurgico,
    FolhaSala,
    Auditoria,
    AuditoriaFolha,
    OrdemCompra,
    Faturamento,
    Inb,
    Teste,
    // Reachable only through another view's navigation intent.
    PricingLiberacao,
    CriacaoProcedimentoLista,
    OrdemCompraAnexar,
    FaturamentoLista,
    LiberacaoDivergente,
    SaldoPendente,
    FolhaSalaMais,
    FolhaSalaConsignado,
    FaturamentoCs,
}

impl Route {
    /// View shown at startup and whenever an identifier cannot be resolved.
    pub(crate) const DEFAULT: Route = Route::CriacaoProcedimento;

    /// Every route, menu views first, in declaration order.
    pub(crate) const ALL: [Route; 26] = [
        Route::CriacaoProcedimento,
        Route::Cotacao,
        Route::CotacaoValidacao,
        Route::CotacaoCustomer,
        Route::CotacaoCreco,
        Route::Pricing,
        Route::Licitacoes,
        Route::FaturamentoServico,
        Route::Agendamentos,
        Route::MapaCirurgico,
        Route::FolhaSala,
        Route::Auditoria,
        Route::AuditoriaFolha,
        Route::OrdemCompra,
        Route::Faturamento,
        Route::Inb,
        Route::Teste,
        Route::PricingLiberacao,
        Route::CriacaoProcedimentoLista,
        Route::OrdemCompraAnexar,
        Route::FaturamentoLista,
        Route::LiberacaoDivergente,
        Route::SaldoPendente,
        Route::FolhaSalaMais,
        Route::FolhaSalaConsignado,
        Route::FaturamentoCs,
    ];

    /// Return the string identifier of this route.
    pub(crate) fn id(self) -> &'static str {
        match self {
            Route::CriacaoProcedimento => "criacao-procedimento",
            Route::Cotacao => "cotacao",
            Route::CotacaoValidacao => "cotacao-validacao",
            Route::CotacaoCustomer => "cotacao-customer",
            Route::CotacaoCreco => "cotacao-creco",
            Route::Pricing => "pricing",
            Route::Licitacoes => "licitacoes",
            Route::FaturamentoServico => "faturamento-servico",
            Route::Agendamentos => "agendamentos",
            Route::MapaCirurgico => "mapa-cirurgico",
            Route::FolhaSala => "folha-sala",
            Route::Auditoria => "auditoria",
            Route::AuditoriaFolha => "auditoria-folha",
            Route::OrdemCompra => "ordem-compra",
            Route::Faturamento => "faturamento",
            Route::Inb => "inb",
            Route::Teste => "teste",
            Route::PricingLiberacao => "pricing-liberacao",
            Route::CriacaoProcedimentoLista => "criacao-procedimento-lista",
            Route::OrdemCompraAnexar => "ordem-compra-anexar",
            Route::FaturamentoLista => "faturamento-lista",
            Route::LiberacaoDivergente => "liberacao-divergente",
            Route::SaldoPendente => "saldo-pendente",
            Route::FolhaSalaMais => "folha-sala-mais",
            Route::FolhaSalaConsignado => "folha-sala-consignado",
            Route::FaturamentoCs => "faturamento-cs",
        }
    }

    /// Parse a string identifier, returning `None` for unknown ids.
    pub(crate) fn from_id(id: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.id() == id)
    }

    /// Parse a string identifier; unknown ids map to [`Route::DEFAULT`].
    pub(crate) fn from_id_or_default(id: &str) -> Route {
        Route::from_id(id).unwrap_or_else(|| {
            log::debug!("unknown view id {id:?}, using {}", Route::DEFAULT);
            Route::DEFAULT
        })
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Route;

    #[test]
    fn given_every_route_when_parsing_its_id_then_same_route_is_returned() {
        for route in Route::ALL {
            assert_eq!(Route::from_id(route.id()), Some(route));
        }
    }

    #[test]
    fn given_all_routes_when_collecting_ids_then_ids_are_unique() {
        let ids: HashSet<&str> = Route::ALL.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), Route::ALL.len());
    }

    #[test]
    fn given_unknown_id_when_parsing_then_none_is_returned() {
        assert_eq!(Route::from_id("relatorios"), None);
        assert_eq!(Route::from_id(""), None);
        assert_eq!(Route::from_id("Pricing"), None);
    }
}
