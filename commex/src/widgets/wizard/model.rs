/// Dialogs of the procedure creation chain, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WizardStep {
    CanalIndireto,
    CustomerService,
    Creco,
    NegativaCreco,
}

impl WizardStep {
    pub(crate) const FIRST: WizardStep = WizardStep::CanalIndireto;

    /// Step opened after this one is submitted, `None` for the last step.
    pub(crate) fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::CanalIndireto => Some(WizardStep::CustomerService),
            WizardStep::CustomerService => Some(WizardStep::Creco),
            WizardStep::Creco => Some(WizardStep::NegativaCreco),
            WizardStep::NegativaCreco => None,
        }
    }

    pub(crate) fn title_key(self) -> &'static str {
        match self {
            WizardStep::CanalIndireto => "modal.canal-indireto",
            WizardStep::CustomerService => "modal.customer-service",
            WizardStep::Creco => "modal.creco",
            WizardStep::NegativaCreco => "modal.negativa-creco",
        }
    }
}

/// Editable text field of a wizard dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    VitaleHospitalar,
    Email,
    NomePaciente,
    CanalCotacao,
    IdCotacao,
    MaisInformacoes,
    CadastroInativo,
    ClienteBloqueado,
    Status,
    Documentacao,
    Cliente,
    AvisoCliente,
}

impl FormField {
    pub(crate) fn label_key(self) -> &'static str {
        match self {
            FormField::VitaleHospitalar => "field.vitale-hospitalar",
            FormField::Email => "field.email",
            FormField::NomePaciente => "field.nome-paciente",
            FormField::CanalCotacao => "field.canal-cotacao",
            FormField::IdCotacao => "field.id-cotacao",
            FormField::MaisInformacoes => "field.mais-informacoes-interna",
            FormField::CadastroInativo => "field.cadastro-inativo",
            FormField::ClienteBloqueado => "field.cliente-bloqueado",
            FormField::Status => "field.status",
            FormField::Documentacao => "field.documentacao-necessaria",
            FormField::Cliente => "field.cliente",
            FormField::AvisoCliente => "field.aviso-cliente",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CanalIndiretoForm {
    pub(crate) vitale_hospitalar: String,
    pub(crate) email: String,
    pub(crate) nome_paciente: String,
    pub(crate) canal_cotacao: String,
    pub(crate) id_cotacao: String,
    pub(crate) mais_informacoes: String,
}

impl Default for CanalIndiretoForm {
    fn default() -> Self {
        Self {
            vitale_hospitalar: String::new(),
            email: String::from("contato@vitalehospitalar.com.br"),
            nome_paciente: String::from("Regiane Takahashi"),
            canal_cotacao: String::from("INPART Saúde"),
            id_cotacao: String::from("1234"),
            mais_informacoes: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CustomerServiceForm {
    pub(crate) cadastro_inativo: String,
    pub(crate) email: String,
    pub(crate) arquivos: Vec<String>,
}

impl Default for CustomerServiceForm {
    fn default() -> Self {
        Self {
            cadastro_inativo: String::from("Cadastro Inativo"),
            email: String::from("Manuella.leanza@abbott.com"),
            arquivos: [
                "balancete.pdf",
                "dre.pdf",
                "contrato social.pdf",
                "cartão cnpj.pdf",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CrecoForm {
    pub(crate) cliente_bloqueado: String,
    pub(crate) email: String,
    pub(crate) status: String,
    pub(crate) documentacao: String,
}

impl Default for CrecoForm {
    fn default() -> Self {
        Self {
            cliente_bloqueado: String::from("Cliente Bloqueado"),
            email: String::from("Manuella.leanza@abbott.com"),
            status: String::from("123456789-0"),
            documentacao: String::from("Aguardar liberação."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NegativaCrecoForm {
    pub(crate) cliente: String,
    pub(crate) email: String,
    pub(crate) status: String,
    pub(crate) aviso_cliente: String,
}

impl Default for NegativaCrecoForm {
    fn default() -> Self {
        Self {
            cliente: String::new(),
            email: String::from("cotacao@cliente.com"),
            status: String::from("123456789-0"),
            aviso_cliente: String::from(
                "Negativa de CRECO conforme cadastrado para cada cliente.",
            ),
        }
    }
}

/// Form payload captured by a wizard dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WizardForm {
    CanalIndireto(CanalIndiretoForm),
    CustomerService(CustomerServiceForm),
    Creco(CrecoForm),
    NegativaCreco(NegativaCrecoForm),
}

impl WizardForm {
    /// Prefilled payload shown when `step` opens.
    pub(crate) fn initial(step: WizardStep) -> Self {
        match step {
            WizardStep::CanalIndireto => {
                WizardForm::CanalIndireto(CanalIndiretoForm::default())
            },
            WizardStep::CustomerService => {
                WizardForm::CustomerService(CustomerServiceForm::default())
            },
            WizardStep::Creco => WizardForm::Creco(CrecoForm::default()),
            WizardStep::NegativaCreco => {
                WizardForm::NegativaCreco(NegativaCrecoForm::default())
            },
        }
    }

    pub(crate) fn step(&self) -> WizardStep {
        match self {
            WizardForm::CanalIndireto(_) => WizardStep::CanalIndireto,
            WizardForm::CustomerService(_) => WizardStep::CustomerService,
            WizardForm::Creco(_) => WizardStep::Creco,
            WizardForm::NegativaCreco(_) => WizardStep::NegativaCreco,
        }
    }

    /// Text fields in display order.
    pub(crate) fn fields(&self) -> Vec<(FormField, &str)> {
        match self {
            WizardForm::CanalIndireto(form) => vec![
                (FormField::VitaleHospitalar, form.vitale_hospitalar.as_str()),
                (FormField::Email, form.email.as_str()),
                (FormField::NomePaciente, form.nome_paciente.as_str()),
                (FormField::CanalCotacao, form.canal_cotacao.as_str()),
                (FormField::IdCotacao, form.id_cotacao.as_str()),
                (FormField::MaisInformacoes, form.mais_informacoes.as_str()),
            ],
            WizardForm::CustomerService(form) => vec![
                (FormField::CadastroInativo, form.cadastro_inativo.as_str()),
                (FormField::Email, form.email.as_str()),
            ],
            WizardForm::Creco(form) => vec![
                (FormField::ClienteBloqueado, form.cliente_bloqueado.as_str()),
                (FormField::Email, form.email.as_str()),
                (FormField::Status, form.status.as_str()),
                (FormField::Documentacao, form.documentacao.as_str()),
            ],
            WizardForm::NegativaCreco(form) => vec![
                (FormField::Cliente, form.cliente.as_str()),
                (FormField::Email, form.email.as_str()),
                (FormField::Status, form.status.as_str()),
                (FormField::AvisoCliente, form.aviso_cliente.as_str()),
            ],
        }
    }

    /// Overwrite `field`. Fields that do not belong to this dialog are
    /// ignored and `false` is returned.
    pub(crate) fn set(&mut self, field: FormField, value: String) -> bool {
        let slot = match (self, field) {
            (WizardForm::CanalIndireto(form), FormField::VitaleHospitalar) => {
                &mut form.vitale_hospitalar
            },
            (WizardForm::CanalIndireto(form), FormField::Email) => {
                &mut form.email
            },
            (WizardForm::CanalIndireto(form), FormField::NomePaciente) => {
                &mut form.nome_paciente
            },
            (WizardForm::CanalIndireto(form), FormField::CanalCotacao) => {
                &mut form.canal_cotacao
            },
            (WizardForm::CanalIndireto(form), FormField::IdCotacao) => {
                &mut form.id_cotacao
            },
            (WizardForm::CanalIndireto(form), FormField::MaisInformacoes) => {
                &mut form.mais_informacoes
            },
            (WizardForm::CustomerService(form), FormField::CadastroInativo) => {
                &mut form.cadastro_inativo
            },
            (WizardForm::CustomerService(form), FormField::Email) => {
                &mut form.email
            },
            (WizardForm::Creco(form), FormField::ClienteBloqueado) => {
                &mut form.cliente_bloqueado
            },
            (WizardForm::Creco(form), FormField::Email) => &mut form.email,
            (WizardForm::Creco(form), FormField::Status) => &mut form.status,
            (WizardForm::Creco(form), FormField::Documentacao) => {
                &mut form.documentacao
            },
            (WizardForm::NegativaCreco(form), FormField::Cliente) => {
                &mut form.cliente
            },
            (WizardForm::NegativaCreco(form), FormField::Email) => {
                &mut form.email
            },
            (WizardForm::NegativaCreco(form), FormField::Status) => {
                &mut form.status
            },
            (WizardForm::NegativaCreco(form), FormField::AvisoCliente) => {
                &mut form.aviso_cliente
            },
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Attached file names, empty for dialogs without attachments.
    pub(crate) fn attachments(&self) -> &[String] {
        match self {
            WizardForm::CustomerService(form) => &form.arquivos,
            _ => &[],
        }
    }

    /// Drop the attachment named `file_name`.
    pub(crate) fn remove_attachment(&mut self, file_name: &str) -> bool {
        let WizardForm::CustomerService(form) = self else {
            return false;
        };
        let before = form.arquivos.len();
        form.arquivos.retain(|file| file != file_name);
        form.arquivos.len() != before
    }
}

/// Read-only wizard snapshot for the presentation layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WizardViewModel<'a> {
    /// Dialog currently on screen, `None` while closed or transitioning.
    pub(crate) visible: Option<&'a WizardForm>,
}
