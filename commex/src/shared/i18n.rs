use serde::{Deserialize, Serialize};

/// Display language of the dashboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub(crate) enum Language {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Language {
    pub(crate) const ALL: [Language; 2] = [Language::PtBr, Language::EnUs];

    /// Short label rendered on the language toggle.
    pub(crate) fn code(self) -> &'static str {
        match self {
            Language::PtBr => "PT",
            Language::EnUs => "EN",
        }
    }
}

// key, pt-BR, en-US
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("menu.criacao-procedimento", "Criação Procedimento", "Procedure Creation"),
    ("menu.commex", "Commex", "Commex"),
    ("menu.cotacao", "Cotação", "Quotation"),
    ("menu.cotacao-validacao", "Validação Comercial", "Commercial Validation"),
    ("menu.cotacao-customer", "Customer Service", "Customer Service"),
    ("menu.cotacao-creco", "CRECO", "CRECO"),
    ("menu.pricing", "Pricing", "Pricing"),
    ("menu.auditoria", "Auditoria", "Audit"),
    ("menu.auditoria-folha", "Folha de Sala", "Operating Room Sheet"),
    ("menu.licitacoes", "Licitações", "Bids"),
    ("menu.faturamento-servico", "Faturamento de Serviço", "Service Billing"),
    ("menu.agendamentos", "Agendamentos", "Appointments"),
    ("menu.mapa-cirurgico", "Mapa Cirúrgico", "Surgical Map"),
    ("menu.folha-sala", "Folha de Sala", "Operating Room Sheet"),
    ("menu.ordem-compra", "Ordem de Compra", "Purchase Order"),
    ("menu.faturamento", "Faturamento", "Billing"),
    ("menu.inb", "INB", "INB"),
    ("menu.teste", "Teste", "Test"),
    ("common.voltar", "Voltar", "Back"),
    ("common.enviar", "Enviar", "Send"),
    ("common.finalizar", "Finalizar", "Finalize"),
    ("common.buscar", "Buscar", "Search"),
    ("common.aprovar", "Aprovar", "Approve"),
    ("common.reprovar", "Reprovar", "Reject"),
    ("common.pesquise-paciente", "Pesquise um Paciente", "Search a Patient"),
    ("common.filtrar", "Filtrar", "Filter"),
    ("common.paciente", "Paciente", "Patient"),
    ("common.acoes", "Ações", "Actions"),
    ("common.status", "Status", "Status"),
    ("common.anterior", "Anterior", "Previous"),
    ("common.proximo", "Próximo", "Next"),
    ("common.nenhum-resultado", "Nenhum resultado", "No results"),
    ("page.pendente-liberacao", "Pendente de Liberação", "Pending Release"),
    ("page.pendente-faturamento", "Pendente de Faturamento", "Pending Billing"),
    ("page.liberacao", "Liberação", "Release"),
    ("page.liberacao-divergente", "Liberação Divergente", "Divergent Release"),
    ("page.saldo-pendente", "Saldo Pendente", "Pending Balance"),
    ("page.cotacao", "Cotação", "Quotation"),
    ("page.ordem-compra", "Ordem de Compra", "Purchase Order"),
    ("page.faturamento-cs", "Faturamento | CS", "Billing | CS"),
    ("page.agendamentos", "Agendamentos", "Appointments"),
    ("page.mapa-cirurgico", "Mapa Cirúrgico", "Surgical Map"),
    ("page.folha-sala", "Folha de Sala", "Operating Room Sheet"),
    ("page.consignado", "Consignado", "Consigned"),
    ("page.faturados", "Faturados", "Billed"),
    (
        "page.pendente-agendamento",
        "Pendente de Agendamento",
        "Pending Appointment",
    ),
    ("page.agendados", "Agendados", "Scheduled"),
    (
        "page.cotacao-autorizacao",
        "Cotação / Autorização",
        "Quotation / Authorization",
    ),
    ("page.teste", "Esta é a página de teste.", "This is the test page."),
    ("page.licitacoes", "Licitações", "Bids"),
    (
        "page.validacao-comercial",
        "Validação Comercial",
        "Commercial Validation",
    ),
    ("page.ordem-compra-anexar", "Ordem de Compra", "Purchase Order"),
    (
        "page.criacao-procedimento-lista",
        "Criação Procedimento Lista",
        "Procedure Creation List",
    ),
    (
        "page.placeholder",
        concat!(
            "Esta seção ainda não possui conteúdo interativo. Selecione ",
            "\u{201c}Criação Procedimento\u{201d} para visualizar o ",
            "formulário completo.",
        ),
        concat!(
            "This section has no interactive content yet. Select ",
            "\u{201c}Procedure Creation\u{201d} to see the full form.",
        ),
    ),
    ("button.ok", "OK", "OK"),
    ("button.finalizar", "Finalizar", "Finalize"),
    ("button.anexar", "Anexar", "Attach"),
    ("button.remover", "Remover", "Remove"),
    ("modal.canal-indireto", "Canal Indireto", "Indirect Channel"),
    ("modal.customer-service", "Customer Service", "Customer Service"),
    ("modal.creco", "CRECO", "CRECO"),
    ("modal.negativa-creco", "Negativa CRECO", "CRECO Refusal"),
    ("field.vitale-hospitalar", "Vitale Hospitalar", "Vitale Hospital"),
    ("field.email", "Email", "Email"),
    ("field.nome-paciente", "Nome do Paciente", "Patient Name"),
    ("field.canal-cotacao", "Canal de Cotação", "Quotation Channel"),
    ("field.id-cotacao", "ID de Cotação", "Quotation ID"),
    (
        "field.mais-informacoes-cliente",
        "Mais Informações / Cliente",
        "More Information / Client",
    ),
    (
        "field.mais-informacoes-interna",
        "Mais Informações / Interna",
        "More Information / Internal",
    ),
    ("field.anexar-nota-fiscal", "Anexar Nota Fiscal", "Attach Invoice"),
    ("field.data-nascimento", "Data Nascimento", "Date of Birth"),
    ("field.cpf", "CPF", "CPF"),
    ("field.plano-saude", "Plano de Saúde", "Health Plan"),
    ("field.numero-solicitacao", "Número de Solicitação", "Request Number"),
    ("field.tipo-internacao", "Tipo de Internação", "Hospitalization Type"),
    ("field.crm", "CRM", "CRM"),
    ("field.hospital", "Hospital", "Hospital"),
    ("field.cidade", "Cidade", "City"),
    ("field.convenio", "Convênio", "Agreement"),
    (
        "field.medico-solicitante",
        "Médico Solicitante",
        "Requesting Physician",
    ),
    (
        "field.data-prevista-cirurgia",
        "Data Prevista da Cirurgia",
        "Expected Surgery Date",
    ),
    ("field.medico-assistente", "Médico Assistente", "Attending Physician"),
    ("field.medico-anestesista", "Médico Anestesista", "Anesthesiologist"),
    ("field.cadastro-inativo", "Cadastro Inativo", "Inactive Registration"),
    ("field.cliente-bloqueado", "Cliente Bloqueado", "Blocked Client"),
    ("field.status", "Status", "Status"),
    (
        "field.documentacao-necessaria",
        "Documentação Necessária",
        "Required Documentation",
    ),
    ("field.cliente", "Cliente", "Client"),
    ("field.aviso-cliente", "Aviso ao Cliente", "Notice to Client"),
    ("button.baixar", "Baixar", "Download"),
    ("button.compartilhar", "Compartilhar", "Share"),
    (
        "button.devolver-correcao",
        "Devolver para Correção",
        "Return for Correction",
    ),
    ("button.enviar-relacao", "ENVIAR RELAÇÃO", "SEND REPORT"),
    ("button.inserir-folha-sala", "INSERIR FOLHA DE SALA", "INSERT ROOM SHEET"),
    ("button.justificativa", "Justificativa", "Justification"),
    ("button.pedido-correcao", "Pedido de Correção", "Correction Request"),
    ("common.nao", "Não", "No"),
    ("common.sim", "Sim", "Yes"),
    ("field.ac", "A/C", "Attn"),
    ("field.adicionar-item", "Adicionar item", "Add item"),
    (
        "field.anexar-ordem-compra",
        "Anexar Ordem de compra",
        "Attach Purchase Order",
    ),
    ("field.cnpj", "CNPJ", "CNPJ"),
    ("field.comentario", "Comentário", "Comment"),
    (
        "field.condicoes-fornecimento",
        "Condições de Fornecimento",
        "Supply Conditions",
    ),
    ("field.data", "Data", "Date"),
    (
        "field.data-prevista-cirurgia-cotacao",
        "Data Prevista Cirurgia",
        "Expected Surgery Date",
    ),
    ("field.local", "Local", "Location"),
    ("field.medico", "Médico", "Doctor"),
    ("field.numero-cotacao", "Número da Cotação", "Quotation Number"),
    (
        "field.numero-versao-cotacao",
        "Número da Versão da Cotação",
        "Quotation Version Number",
    ),
    ("field.observacoes", "Observações", "Observations"),
    ("field.prazo-entrega", "Prazo de Entrega", "Delivery Term"),
    ("field.prazo-pagamento", "Prazo de Pagamento", "Payment Term"),
    ("field.remover-item", "Remover item", "Remove item"),
    ("field.total-geral", "Total Geral", "Grand Total"),
    ("field.validade-proposta", "Validade da Proposta", "Proposal Validity"),
    ("page.adicione-idgen", "Adicione um ID Gen", "Add an ID Gen"),
    ("page.comentarios", "COMENTÁRIOS", "COMMENTS"),
    ("page.digite-lote", "Digite o lote", "Enter the lot"),
    ("page.folhas-de-sala", "Folhas de Sala", "Room Sheets"),
    ("page.industria", "Indústria", "Industry"),
    ("page.justificativa", "JUSTIFICATIVA", "JUSTIFICATION"),
    ("page.lote", "LOTE", "LOT"),
    ("page.mesmo-lote", "MESMO LOTE", "SAME LOT"),
    (
        "page.nenhum-documento-selecionado",
        "Nenhum documento selecionado",
        "No document selected",
    ),
    ("page.operador-logistico", "Operador Logístico", "Logistics Operator"),
    ("page.reversa", "REVERSA", "REVERSED"),
    ("page.servicos", "Serviço(s)", "Service(s)"),
    ("page.tarefas", "Tarefas", "Tasks"),
    ("page.utilizado", "UTILIZADO", "UTILIZED"),
    ("table.anvisa", "ANVISA", "ANVISA"),
    ("table.codigo", "Código", "Code"),
    ("table.descricao", "Descrição", "Description"),
    ("table.preco-cotacao", "Preço Cotação", "Quotation Price"),
    ("table.preco-lista", "Preço Lista", "List Price"),
    ("table.produtos", "Produtos", "Products"),
    ("table.qtd", "QTD", "QTY"),
    ("table.quantidade", "Quantidade", "Quantity"),
    ("table.total-cotacao", "Total Cotação", "Total Quotation"),
    ("licitacoes.adesoes", "Adesões", "Adhesions"),
    ("licitacoes.cadastro-cliente", "Cadastro Cliente", "Client Registration"),
    ("licitacoes.cadastro-produto", "Cadastro Produto", "Product Registration"),
    ("licitacoes.endereco-entrega", "Endereço de Entrega", "Delivery Address"),
    ("licitacoes.formulario", "Formulário", "Form"),
    ("licitacoes.licit", "Licit", "Licit"),
    ("licitacoes.lista-preco", "Lista Preço", "Price List"),
    ("licitacoes.regulares", "Regulares", "Regular"),
    ("licitacoes.suporte", "Suporte", "Support"),
    ("licitacoes.tabelas-preco", "Tabelas Preço", "Price Tables"),
    ("licitacoes.validacao", "Validação", "Validation"),
    ("licitacoes.vencidas", "Vencidas", "Expired"),
    ("licitacoes.vencidas-antigas", "Vencidas Antigas", "Old Expired"),
    ("licitacoes.vigentes", "Vigentes", "Active"),
    ("month.janeiro", "Janeiro", "January"),
    ("month.fevereiro", "Fevereiro", "February"),
    ("month.marco", "Março", "March"),
    ("month.abril", "Abril", "April"),
    ("month.maio", "Maio", "May"),
    ("month.junho", "Junho", "June"),
    ("month.julho", "Julho", "July"),
    ("month.agosto", "Agosto", "August"),
    ("month.setembro", "Setembro", "September"),
    ("month.outubro", "Outubro", "October"),
    ("month.novembro", "Novembro", "November"),
    ("month.dezembro", "Dezembro", "December"),
    ("weekday.segunda", "Segunda", "Monday"),
    ("weekday.terca", "Terça", "Tuesday"),
    ("weekday.quarta", "Quarta", "Wednesday"),
    ("weekday.quinta", "Quinta", "Thursday"),
    ("weekday.sexta", "Sexta", "Friday"),
    ("weekday.sabado", "Sábado", "Saturday"),
    ("weekday.domingo", "Domingo", "Sunday"),
];

/// Look up `key` for `language`. Unknown keys are returned unchanged.
pub(crate) fn translate<'a>(key: &'a str, language: Language) -> &'a str {
    TRANSLATIONS
        .iter()
        .find(|(candidate, _, _)| *candidate == key)
        .map(|(_, pt_br, en_us)| match language {
            Language::PtBr => *pt_br,
            Language::EnUs => *en_us,
        })
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Language, TRANSLATIONS, translate};
    use crate::navigation::{MENU, resolve};

    #[test]
    fn given_known_key_when_translating_then_language_specific_text_is_returned()
     {
        assert_eq!(translate("menu.auditoria", Language::PtBr), "Auditoria");
        assert_eq!(translate("menu.auditoria", Language::EnUs), "Audit");
        assert_eq!(
            translate("modal.negativa-creco", Language::EnUs),
            "CRECO Refusal"
        );
    }

    #[test]
    fn given_unknown_key_when_translating_then_key_is_returned() {
        assert_eq!(
            translate("page.inexistente", Language::EnUs),
            "page.inexistente"
        );
    }

    #[test]
    fn given_table_when_collecting_keys_then_keys_are_unique() {
        let keys: HashSet<&str> =
            TRANSLATIONS.iter().map(|(key, _, _)| *key).collect();
        assert_eq!(keys.len(), TRANSLATIONS.len());
    }

    #[test]
    fn given_menu_and_screens_when_translating_labels_then_every_key_is_known()
    {
        let known = |key: &str| translate(key, Language::EnUs) != key;
        for entry in MENU {
            assert!(known(entry.label_key), "{}", entry.label_key);
            assert!(known(resolve(entry.route).title_key()));
            for child in entry.children {
                assert!(known(child.label_key), "{}", child.label_key);
                assert!(known(resolve(child.route).title_key()));
            }
        }
    }

    #[test]
    fn given_language_when_serialized_then_locale_tag_is_used() {
        let json = serde_json::to_string(&Language::EnUs).expect("serialize");
        assert_eq!(json, "\"en-US\"");
        assert_eq!(Language::default(), Language::PtBr);
    }
}
