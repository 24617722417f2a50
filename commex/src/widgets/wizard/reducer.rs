use std::time::Duration;

use iced::Task;

use super::chain::WizardOutcome;
use super::event::{WizardEffect, WizardEvent, WizardIntent};
use super::state::{Release, WizardState};

/// Outcome of applying one intent: an effect to emit and/or a release to
/// schedule after the transition delay.
#[derive(Debug, Default, PartialEq, Eq)]
struct Reduction {
    effect: Option<WizardEffect>,
    schedule: Option<u64>,
}

impl Reduction {
    fn effect(effect: WizardEffect) -> Self {
        Self {
            effect: Some(effect),
            schedule: None,
        }
    }

    fn schedule(ticket: u64) -> Self {
        Self {
            effect: None,
            schedule: Some(ticket),
        }
    }
}

/// Reduce a wizard intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut WizardState,
    event: WizardIntent,
    delay: Duration,
) -> Task<WizardEvent> {
    let reduction = apply(state, event);
    let mut tasks = Vec::new();

    if let Some(ticket) = reduction.schedule {
        // The timer must be created inside the executor, not here.
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| WizardEvent::Intent(WizardIntent::Release { ticket }),
        )
        .abortable();
        state.attach_handle(ticket, handle);
        tasks.push(task);
    }
    if let Some(effect) = reduction.effect {
        tasks.push(Task::done(WizardEvent::Effect(effect)));
    }

    Task::batch(tasks)
}

fn apply(state: &mut WizardState, event: WizardIntent) -> Reduction {
    match event {
        WizardIntent::Open { to_list } => {
            if state.has_pending() {
                log::debug!("wizard transition in progress, ignoring open");
                return Reduction::default();
            }
            if let WizardOutcome::Opened(step) = state.chain_mut().open_first()
            {
                log::debug!("wizard opened at {step:?}");
                state.set_to_list(to_list);
                state.reveal_current();
            }
            Reduction::default()
        },
        WizardIntent::EditField { field, value } => {
            if let Some(form) = state.visible_form_mut() {
                if !form.set(field, value) {
                    log::debug!("field {field:?} not on {:?}", form.step());
                }
            }
            Reduction::default()
        },
        WizardIntent::RemoveAttachment(file_name) => {
            if let Some(form) = state.visible_form_mut() {
                form.remove_attachment(&file_name);
            }
            Reduction::default()
        },
        WizardIntent::Submit => submit(state),
        WizardIntent::Cancel => {
            let aborted = state.abort_pending();
            state.hide();
            if state.chain_mut().cancel() == WizardOutcome::Cancelled
                || aborted
            {
                log::debug!("wizard cancelled");
            }
            Reduction::default()
        },
        WizardIntent::Release { ticket } => release(state, ticket),
    }
}

fn submit(state: &mut WizardState) -> Reduction {
    let Some(form) = state.visible_form().cloned() else {
        return Reduction::default();
    };

    match state.chain_mut().submit(&form) {
        WizardOutcome::Advanced { from, to } => {
            log::debug!("wizard advancing {from:?} -> {to:?}");
            state.hide();
            Reduction::schedule(state.schedule(Release::Reveal))
        },
        WizardOutcome::Completed => {
            log::debug!("wizard completed");
            state.hide();
            Reduction::schedule(state.schedule(Release::Complete))
        },
        _ => Reduction::default(),
    }
}

fn release(state: &mut WizardState, ticket: u64) -> Reduction {
    let Some(release) = state.take_release(ticket) else {
        log::debug!("ignoring stale wizard release {ticket}");
        return Reduction::default();
    };

    match release {
        Release::Reveal => {
            state.reveal_current();
            Reduction::default()
        },
        Release::Complete => match state.to_list() {
            Some(route) => {
                Reduction::effect(WizardEffect::NavigateToList(route))
            },
            None => {
                log::debug!("wizard completed without a list view");
                Reduction::default()
            },
        },
    }
}
