use iced::task::Handle;

use super::chain::{WizardChain, WizardPhase};
use super::model::WizardForm;
use crate::navigation::Route;

/// What a scheduled release does once its delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Release {
    /// Mount the dialog the chain advanced to.
    Reveal,
    /// Chain finished; hand control to the list view.
    Complete,
}

struct PendingRelease {
    ticket: u64,
    release: Release,
    handle: Option<Handle>,
}

/// Wizard state: chain phase, mounted form and the pending transition.
#[derive(Default)]
pub(super) struct WizardState {
    chain: WizardChain,
    revealed: bool,
    form: Option<WizardForm>,
    to_list: Option<Route>,
    pending: Option<PendingRelease>,
    next_ticket: u64,
}

impl WizardState {
    pub(super) fn chain(&self) -> &WizardChain {
        &self.chain
    }

    pub(super) fn chain_mut(&mut self) -> &mut WizardChain {
        &mut self.chain
    }

    /// Form of the dialog on screen, `None` while closed or transitioning.
    pub(super) fn visible_form(&self) -> Option<&WizardForm> {
        if self.revealed {
            self.form.as_ref()
        } else {
            None
        }
    }

    pub(super) fn visible_form_mut(&mut self) -> Option<&mut WizardForm> {
        if self.revealed {
            self.form.as_mut()
        } else {
            None
        }
    }

    pub(super) fn to_list(&self) -> Option<Route> {
        self.to_list
    }

    pub(super) fn set_to_list(&mut self, to_list: Option<Route>) {
        self.to_list = to_list;
    }

    /// Mount the initial form of the step the chain is showing.
    pub(super) fn reveal_current(&mut self) {
        self.form = match self.chain.phase() {
            WizardPhase::Showing(step) => Some(WizardForm::initial(step)),
            WizardPhase::Closed => None,
        };
        self.revealed = self.form.is_some();
    }

    /// Take the mounted form off screen without touching the chain.
    pub(super) fn hide(&mut self) -> Option<WizardForm> {
        self.revealed = false;
        self.form.take()
    }

    pub(super) fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Register a release and return its ticket. Any earlier release is
    /// aborted first.
    pub(super) fn schedule(&mut self, release: Release) -> u64 {
        self.abort_pending();
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.pending = Some(PendingRelease {
            ticket: self.next_ticket,
            release,
            handle: None,
        });
        self.next_ticket
    }

    /// Store the abort handle of the task delivering `ticket`.
    pub(super) fn attach_handle(&mut self, ticket: u64, handle: Handle) {
        match self.pending.as_mut() {
            Some(pending) if pending.ticket == ticket => {
                pending.handle = Some(handle);
            },
            _ => handle.abort(),
        }
    }

    /// Consume the pending release if `ticket` is the current one.
    pub(super) fn take_release(&mut self, ticket: u64) -> Option<Release> {
        match self.pending.as_ref() {
            Some(pending) if pending.ticket == ticket => {
                self.pending.take().map(|pending| pending.release)
            },
            _ => None,
        }
    }

    /// Abort and forget the pending release, returning whether one existed.
    pub(super) fn abort_pending(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        if let Some(handle) = pending.handle {
            handle.abort();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use iced::Task;
    use iced::task::Handle;

    use super::{Release, WizardState};

    fn handle() -> Handle {
        Task::<()>::none().abortable().1
    }

    #[test]
    fn given_stale_ticket_when_attaching_handle_then_pending_release_survives()
    {
        let mut state = WizardState::default();
        let stale = state.schedule(Release::Reveal);
        let current = state.schedule(Release::Complete);
        let current_handle = handle();
        state.attach_handle(current, current_handle.clone());

        let stale_handle = handle();
        state.attach_handle(stale, stale_handle.clone());

        assert!(stale_handle.is_aborted());
        assert!(!current_handle.is_aborted());
        assert_eq!(state.take_release(current), Some(Release::Complete));
    }

    #[test]
    fn given_pending_release_when_aborted_then_its_handle_is_aborted() {
        let mut state = WizardState::default();
        let ticket = state.schedule(Release::Reveal);
        let pending_handle = handle();
        state.attach_handle(ticket, pending_handle.clone());

        assert!(state.abort_pending());

        assert!(pending_handle.is_aborted());
        assert!(!state.has_pending());
        assert_eq!(state.take_release(ticket), None);
    }
}
