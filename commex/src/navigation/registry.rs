//! Static view registry: the sidebar menu table, the hidden view set and
//! resolution of an active route to a screen.

use super::route::Route;
use super::screen::Screen;

/// Opaque icon token attached to a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuIcon {
    PlusCircle,
    FileText,
    DollarSign,
    ClipboardCheck,
    CalendarCheck,
    Calendar,
    Map,
    FileSpreadsheet,
    Search,
    ShoppingCart,
    Receipt,
}

/// Entry of a collapsible sub-list under a menu entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuChild {
    pub(crate) route: Route,
    pub(crate) label_key: &'static str,
    pub(crate) screen: Option<Screen>,
}

/// Sidebar-visible navigation item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuEntry {
    pub(crate) route: Route,
    pub(crate) label_key: &'static str,
    pub(crate) icon: MenuIcon,
    pub(crate) primary: Option<Screen>,
    pub(crate) children: &'static [MenuChild],
    /// Hidden routes highlighted as if they were part of this entry.
    pub(crate) hidden_descendants: &'static [Route],
}

impl MenuEntry {
    /// Return whether the entry owns a collapsible sub-list.
    pub(crate) fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Find the child registered under `route`.
    pub(crate) fn child(&self, route: Route) -> Option<&MenuChild> {
        self.children.iter().find(|child| child.route == route)
    }

    /// Return whether the entry is visually active for `active`.
    ///
    /// True for the entry itself, any of its children, or one of its fixed
    /// hidden descendants.
    pub(crate) fn is_active(&self, active: Route) -> bool {
        self.route == active
            || self.child(active).is_some()
            || self.hidden_descendants.contains(&active)
    }
}

/// Routes that have no menu entry and are reached only through intents.
const HIDDEN_ROUTES: [Route; 9] = [
    Route::PricingLiberacao,
    Route::OrdemCompraAnexar,
    Route::FaturamentoLista,
    Route::LiberacaoDivergente,
    Route::SaldoPendente,
    Route::FolhaSalaMais,
    Route::FolhaSalaConsignado,
    Route::FaturamentoCs,
    Route::CriacaoProcedimentoLista,
];

/// The sidebar menu in display order.
pub(crate) const MENU: &[MenuEntry] = &[
    MenuEntry {
        route: Route::CriacaoProcedimento,
        label_key: "menu.criacao-procedimento",
        icon: MenuIcon::PlusCircle,
        primary: Some(Screen::CriacaoProcedimento { to_list: None }),
        children: &[],
        hidden_descendants: &[],
    },
    MenuEntry {
        route: Route::Cotacao,
        label_key: "menu.cotacao",
        icon: MenuIcon::FileText,
        primary: Some(Screen::Cotacao),
        children: &[
            MenuChild {
                route: Route::CotacaoValidacao,
                label_key: "menu.cotacao-validacao",
                screen: Some(Screen::CotacaoValidacao),
            },
            MenuChild {
                route: Route::CotacaoCustomer,
                label_key: "menu.cotacao-customer",
                screen: Some(Screen::Placeholder {
                    title_key: "menu.cotacao-customer",
                }),
            },
            MenuChild {
                route: Route::CotacaoCreco,
                label_key: "menu.cotacao-creco",
                screen: Some(Screen::Placeholder {
                    title_key: "menu.cotacao-creco",
                }),
            },
        ],
        hidden_descendants: &[Route::CriacaoProcedimentoLista],
    },
    MenuEntry {
        route: Route::Pricing,
        label_key: "menu.pricing",
        icon: MenuIcon::DollarSign,
        primary: Some(Screen::Pricing { to_liberacao: None }),
        children: &[],
        hidden_descendants: &[Route::PricingLiberacao],
    },
    MenuEntry {
        route: Route::Licitacoes,
        label_key: "menu.licitacoes",
        icon: MenuIcon::ClipboardCheck,
        primary: Some(Screen::Licitacoes),
        children: &[],
        hidden_descendants: &[],
    },
    MenuEntry {
        route: Route::FaturamentoServico,
        label_key: "menu.faturamento-servico",
        icon: MenuIcon::CalendarCheck,
        primary: Some(Screen::Placeholder {
            title_key: "menu.faturamento-servico",
        }),
        children: &[],
        hidden_descendants: &[],
    },
    MenuEntry {
        route: Route::Agendamentos,
        label_key: "menu.agendamentos",
        icon: MenuIcon::Calendar,
        primary: Some(Screen::Agendamentos),
        children: &[],
        hidden_descendants: &[],
    },
    MenuEntry {
        route: Route::MapaCirurgico,
        label_key: "menu.mapa-cirurgico",
        icon: MenuIcon::Map,
        primary: Some(Screen::MapaCirurgico),
        children: &[],
        hidden_descendants: &[],
    },
    MenuEntry {
        route: Route::FolhaSala,
        label_key: "menu.folha-sala",
        icon: MenuIcon::FileSpreadsheet,
        primary: Some(Screen::FolhaSala {
            to_mais: Route::FolhaSalaMais,
        }),
        children: &[],
        hidden_descendants: &[Route::FolhaSalaMais, Route::FolhaSalaConsignado],
    },
    MenuEntry {
        route: Route::Auditoria,
        label_key: "menu.auditoria",
        icon: MenuIcon::Search,
        primary: Some(Screen::Placeholder {
            title_key: "menu.auditoria",
        }),
        children: &[MenuChild {
            route: Route::AuditoriaFolha,
            label_key: "menu.auditoria-folha",
            screen: Some(Screen::Placeholder {
                title_key: "menu.auditoria-folha",
            }),
        }],
        hidden_descendants: &[],
    },
    MenuEntry {
        route: Route::OrdemCompra,
        label_key: "menu.ordem-compra",
        icon: MenuIcon::ShoppingCart,
        primary: Some(Screen::OrdemCompra { to_anexar: None }),
        children: &[],
        hidden_descendants: &[],
    },
    MenuEntry {
        route: Route::Faturamento,
        label_key: "menu.faturamento",
        icon: MenuIcon::Receipt,
        primary: Some(faturamento_lista()),
        children: &[],
        hidden_descendants: &[
            Route::OrdemCompraAnexar,
            Route::FaturamentoLista,
            Route::LiberacaoDivergente,
            Route::SaldoPendente,
            Route::FaturamentoCs,
        ],
    },
    MenuEntry {
        route: Route::Inb,
        label_key: "menu.inb",
        icon: MenuIcon::ClipboardCheck,
        primary: Some(Screen::Placeholder {
            title_key: "menu.inb",
        }),
        children: &[],
        hidden_descendants: &[],
    },
    MenuEntry {
        route: Route::Teste,
        label_key: "menu.teste",
        icon: MenuIcon::FileText,
        primary: Some(Screen::Teste),
        children: &[],
        hidden_descendants: &[],
    },
];

/// Return whether `route` is a hidden view.
fn is_hidden(route: Route) -> bool {
    HIDDEN_ROUTES.contains(&route)
}

/// Find the menu entry registered under `route` (children excluded).
pub(crate) fn entry(route: Route) -> Option<&'static MenuEntry> {
    MENU.iter().find(|entry| entry.route == route)
}

/// Resolve `active` against the default menu table.
pub(crate) fn resolve(active: Route) -> Screen {
    resolve_active(active, MENU)
}

/// Resolve the screen shown for `active`.
///
/// Hidden views are produced by their factories first. Otherwise the menu is
/// scanned in order: an entry match yields its primary screen (with the fixed
/// per-entry link wiring), a child match yields the child screen or the
/// parent's primary screen when the child has none. Anything else resolves to
/// the default screen. Never fails.
pub(crate) fn resolve_active(active: Route, entries: &[MenuEntry]) -> Screen {
    if is_hidden(active) {
        if let Some(screen) = hidden_view(active) {
            log::trace!("resolved hidden view {active}");
            return screen;
        }
    }

    for entry in entries {
        if entry.route == active {
            if let Some(screen) = wired_primary(active) {
                log::trace!("resolved {active} with wired links");
                return screen;
            }
            if let Some(screen) = entry.primary {
                log::trace!("resolved menu entry {active}");
                return screen;
            }
            break;
        }

        if let Some(child) = entry.child(active) {
            if let Some(screen) = child.screen.or(entry.primary) {
                log::trace!("resolved child {active} of {}", entry.route);
                return screen;
            }
            break;
        }
    }

    log::trace!("no view registered for {active}, using default");
    default_screen()
}

/// Screen shown at startup and for anything that does not resolve.
fn default_screen() -> Screen {
    Screen::CriacaoProcedimento {
        to_list: Some(Route::CriacaoProcedimentoLista),
    }
}

fn hidden_view(route: Route) -> Option<Screen> {
    let screen = match route {
        Route::PricingLiberacao => Screen::PricingLiberacao {
            back: Route::Pricing,
        },
        Route::CriacaoProcedimentoLista => Screen::CriacaoProcedimentoLista,
        Route::OrdemCompraAnexar => Screen::OrdemCompraAnexar {
            to_faturamento_lista: Route::FaturamentoLista,
        },
        Route::FaturamentoLista => faturamento_lista(),
        Route::LiberacaoDivergente => Screen::LiberacaoDivergente {
            to_faturamento_cs: Route::FaturamentoCs,
        },
        Route::SaldoPendente => Screen::SaldoPendente {
            to_faturamento_cs: Route::FaturamentoCs,
        },
        Route::FolhaSalaMais => Screen::FolhaSalaMais {
            back: Route::FolhaSala,
            to_consignado: Route::FolhaSalaConsignado,
        },
        Route::FolhaSalaConsignado => Screen::FolhaSalaConsignado {
            back: Route::FolhaSalaMais,
        },
        Route::FaturamentoCs => Screen::FaturamentoCs {
            back: Route::Faturamento,
        },
        _ => return None,
    };
    Some(screen)
}

/// Menu entries whose primary screen is rebuilt with navigation links.
fn wired_primary(route: Route) -> Option<Screen> {
    match route {
        Route::Pricing => Some(Screen::Pricing {
            to_liberacao: Some(Route::PricingLiberacao),
        }),
        Route::CriacaoProcedimento => Some(default_screen()),
        Route::OrdemCompra => Some(Screen::OrdemCompra {
            to_anexar: Some(Route::OrdemCompraAnexar),
        }),
        _ => None,
    }
}

const fn faturamento_lista() -> Screen {
    Screen::FaturamentoLista {
        to_divergente: Route::LiberacaoDivergente,
        to_saldo_pendente: Route::SaldoPendente,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{
        HIDDEN_ROUTES, MENU, MenuChild, MenuEntry, MenuIcon, default_screen,
        entry, is_hidden, resolve, resolve_active,
    };
    use crate::navigation::{Route, Screen};

    #[test]
    fn given_menu_and_hidden_set_when_collecting_ids_then_every_id_is_unique() {
        let mut seen = HashSet::new();
        for entry in MENU {
            assert!(seen.insert(entry.route));
            for child in entry.children {
                assert!(seen.insert(child.route));
            }
        }
        for route in HIDDEN_ROUTES {
            assert!(seen.insert(route), "{route} is both hidden and listed");
        }
        assert_eq!(seen.len(), Route::ALL.len());
    }

    #[test]
    fn given_unknown_ids_when_resolving_then_default_view_is_returned() {
        let expected = resolve(Route::DEFAULT);
        for id in ["", "relatorios", "PRICING", "cotacao-", "faturamento cs"] {
            let route = Route::from_id_or_default(id);
            assert_eq!(resolve(route), expected, "id {id:?}");
        }
    }

    #[test]
    fn given_route_absent_from_table_when_resolving_then_default_view_is_returned()
     {
        let table = &MENU[..2];
        assert_eq!(
            resolve_active(Route::Licitacoes, table),
            resolve_active(Route::DEFAULT, MENU)
        );
    }

    #[test]
    fn given_children_when_resolving_then_child_view_is_returned() {
        for entry in MENU.iter().filter(|entry| entry.has_children()) {
            for child in entry.children {
                let expected = child.screen.or(entry.primary);
                assert_eq!(Some(resolve(child.route)), expected);
            }
        }
        assert_eq!(resolve(Route::CotacaoValidacao), Screen::CotacaoValidacao);
    }

    #[test]
    fn given_child_without_view_when_resolving_then_parent_view_is_returned() {
        const CHILDREN: &[MenuChild] = &[MenuChild {
            route: Route::AuditoriaFolha,
            label_key: "menu.auditoria-folha",
            screen: None,
        }];
        let table = [MenuEntry {
            route: Route::Auditoria,
            label_key: "menu.auditoria",
            icon: MenuIcon::Search,
            primary: Some(Screen::Licitacoes),
            children: CHILDREN,
            hidden_descendants: &[],
        }];

        assert_eq!(
            resolve_active(Route::AuditoriaFolha, &table),
            Screen::Licitacoes
        );
    }

    #[test]
    fn given_wired_entries_when_resolving_then_links_are_injected() {
        assert_eq!(
            resolve(Route::Pricing),
            Screen::Pricing {
                to_liberacao: Some(Route::PricingLiberacao)
            }
        );
        assert_eq!(
            resolve(Route::OrdemCompra),
            Screen::OrdemCompra {
                to_anexar: Some(Route::OrdemCompraAnexar)
            }
        );
        assert!(matches!(
            resolve(Route::Faturamento),
            Screen::FaturamentoLista { .. }
        ));
        assert_eq!(resolve(Route::CriacaoProcedimento), default_screen());
    }

    #[test]
    fn given_pricing_liberacao_when_resolving_then_back_link_targets_pricing() {
        let screen = resolve(Route::PricingLiberacao);
        assert_eq!(
            screen,
            Screen::PricingLiberacao {
                back: Route::Pricing
            }
        );
        assert_eq!(screen.back_link(), Some(Route::Pricing));
    }

    #[test]
    fn given_every_hidden_route_when_resolving_then_dedicated_view_is_used() {
        for route in HIDDEN_ROUTES {
            assert!(is_hidden(route));
            assert!(entry(route).is_none());
            assert!(!matches!(resolve(route), Screen::Placeholder { .. }));
        }
        assert!(!is_hidden(Route::Pricing));
    }

    #[test]
    fn given_entries_when_checking_activity_then_each_category_is_covered() {
        let pricing = entry(Route::Pricing).expect("pricing entry");
        assert!(pricing.is_active(Route::Pricing));
        assert!(pricing.is_active(Route::PricingLiberacao));
        assert!(!pricing.is_active(Route::Faturamento));

        let cotacao = entry(Route::Cotacao).expect("cotacao entry");
        assert!(cotacao.is_active(Route::CotacaoCreco));
        assert!(cotacao.is_active(Route::CriacaoProcedimentoLista));
        assert!(!cotacao.is_active(Route::PricingLiberacao));

        let faturamento = entry(Route::Faturamento).expect("faturamento entry");
        for route in [
            Route::OrdemCompraAnexar,
            Route::FaturamentoLista,
            Route::LiberacaoDivergente,
            Route::SaldoPendente,
            Route::FaturamentoCs,
        ] {
            assert!(faturamento.is_active(route));
        }
        assert!(!faturamento.is_active(Route::OrdemCompra));
    }

    #[test]
    fn given_any_route_when_checking_activity_then_at_most_one_entry_matches() {
        for route in Route::ALL {
            let active = MENU.iter().filter(|e| e.is_active(route)).count();
            assert!(active <= 1, "{route} highlights {active} entries");
        }
    }

    #[test]
    fn given_every_route_when_resolving_then_only_empty_entries_get_placeholder()
     {
        let placeholders: Vec<Route> = Route::ALL
            .into_iter()
            .filter(|route| {
                matches!(resolve(*route), Screen::Placeholder { .. })
            })
            .collect();

        assert_eq!(
            placeholders,
            vec![
                Route::CotacaoCustomer,
                Route::CotacaoCreco,
                Route::FaturamentoServico,
                Route::Auditoria,
                Route::AuditoriaFolha,
                Route::Inb,
            ]
        );
    }
}
