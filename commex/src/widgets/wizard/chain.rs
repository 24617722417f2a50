use super::model::{WizardForm, WizardStep};

/// Which dialog of the chain is mounted, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WizardPhase {
    Closed,
    Showing(WizardStep),
}

/// Result of driving the chain with one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WizardOutcome {
    Opened(WizardStep),
    Advanced { from: WizardStep, to: WizardStep },
    /// Last dialog submitted; the owner should navigate to its list view.
    Completed,
    Cancelled,
    /// Input does not apply to the current phase.
    Ignored,
}

/// Linear dialog sequence without timing concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WizardChain {
    phase: WizardPhase,
}

impl Default for WizardChain {
    fn default() -> Self {
        Self {
            phase: WizardPhase::Closed,
        }
    }
}

impl WizardChain {
    pub(crate) fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub(crate) fn open_first(&mut self) -> WizardOutcome {
        if self.phase != WizardPhase::Closed {
            return WizardOutcome::Ignored;
        }
        self.phase = WizardPhase::Showing(WizardStep::FIRST);
        WizardOutcome::Opened(WizardStep::FIRST)
    }

    /// Submit the mounted dialog. The payload is logged and dropped.
    pub(crate) fn submit(&mut self, form: &WizardForm) -> WizardOutcome {
        let WizardPhase::Showing(step) = self.phase else {
            return WizardOutcome::Ignored;
        };
        if form.step() != step {
            log::debug!(
                "ignoring {:?} payload while {step:?} is mounted",
                form.step()
            );
            return WizardOutcome::Ignored;
        }
        log::debug!("wizard step {step:?} submitted: {form:?}");

        match step.next() {
            Some(next) => {
                self.phase = WizardPhase::Showing(next);
                WizardOutcome::Advanced {
                    from: step,
                    to: next,
                }
            },
            None => {
                self.phase = WizardPhase::Closed;
                WizardOutcome::Completed
            },
        }
    }

    pub(crate) fn cancel(&mut self) -> WizardOutcome {
        if self.phase == WizardPhase::Closed {
            return WizardOutcome::Ignored;
        }
        self.phase = WizardPhase::Closed;
        WizardOutcome::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::{WizardChain, WizardOutcome, WizardPhase};
    use crate::widgets::wizard::model::{WizardForm, WizardStep};

    fn submit_current(chain: &mut WizardChain) -> WizardOutcome {
        let WizardPhase::Showing(step) = chain.phase() else {
            return chain.submit(&WizardForm::initial(WizardStep::FIRST));
        };
        chain.submit(&WizardForm::initial(step))
    }

    #[test]
    fn given_closed_chain_when_submitting_four_times_then_steps_are_visited_in_order()
     {
        let mut chain = WizardChain::default();
        let mut phases = Vec::new();
        let mut completions = 0;

        assert_eq!(
            chain.open_first(),
            WizardOutcome::Opened(WizardStep::CanalIndireto)
        );
        phases.push(chain.phase());
        for _ in 0..4 {
            if submit_current(&mut chain) == WizardOutcome::Completed {
                completions += 1;
            }
            phases.push(chain.phase());
        }

        assert_eq!(
            phases,
            vec![
                WizardPhase::Showing(WizardStep::CanalIndireto),
                WizardPhase::Showing(WizardStep::CustomerService),
                WizardPhase::Showing(WizardStep::Creco),
                WizardPhase::Showing(WizardStep::NegativaCreco),
                WizardPhase::Closed,
            ]
        );
        assert_eq!(completions, 1);
    }

    #[test]
    fn given_any_showing_step_when_cancelled_then_chain_closes_without_completion()
     {
        for submits in 0..4 {
            let mut chain = WizardChain::default();
            chain.open_first();
            for _ in 0..submits {
                assert_ne!(
                    submit_current(&mut chain),
                    WizardOutcome::Completed
                );
            }

            assert_eq!(chain.cancel(), WizardOutcome::Cancelled);
            assert_eq!(chain.phase(), WizardPhase::Closed);
            assert_eq!(submit_current(&mut chain), WizardOutcome::Ignored);
        }
    }

    #[test]
    fn given_open_chain_when_opening_again_then_second_open_is_ignored() {
        let mut chain = WizardChain::default();
        chain.open_first();
        submit_current(&mut chain);

        assert_eq!(chain.open_first(), WizardOutcome::Ignored);
        assert_eq!(
            chain.phase(),
            WizardPhase::Showing(WizardStep::CustomerService)
        );
    }

    #[test]
    fn given_payload_of_other_step_when_submitting_then_chain_does_not_advance()
    {
        let mut chain = WizardChain::default();
        chain.open_first();

        let outcome = chain.submit(&WizardForm::initial(WizardStep::Creco));

        assert_eq!(outcome, WizardOutcome::Ignored);
        assert_eq!(
            chain.phase(),
            WizardPhase::Showing(WizardStep::CanalIndireto)
        );
    }

    #[test]
    fn given_closed_chain_when_cancelled_then_nothing_happens() {
        let mut chain = WizardChain::default();
        assert_eq!(chain.cancel(), WizardOutcome::Ignored);
    }
}
