//! Deferred tail of a conjunction.
//!
//! Once a child validator hands back a deferred result, every validator
//! after it runs here, one at a time, each only after its predecessor has
//! settled to valid.

use std::ops::ControlFlow;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{ChangeArgs, Pending, Validation, Validator, ValidatorFault, Verdict};

/// Owned state of the sequential fold over the remaining validators.
pub(crate) struct Chain {
    head: Pending,
    validators: Arc<[Arc<dyn Validator>]>,
    next: usize,
    args: ChangeArgs,
}

impl Chain {
    /// `head` is the deferred result of the validator at `next - 1`.
    pub(crate) fn new(
        head: Pending,
        validators: Arc<[Arc<dyn Validator>]>,
        next: usize,
        args: ChangeArgs,
    ) -> Self {
        Self {
            head,
            validators,
            next,
            args,
        }
    }

    /// Drives the chain to a verdict. Faults and rejections from any step
    /// become the failure payload, so the returned future never errors.
    pub(crate) async fn run(self) -> Verdict {
        let Self {
            head,
            validators,
            next,
            args,
        } = self;

        if let ControlFlow::Break(payload) = settle(head.await) {
            tracing::trace!(
                target: "changeset_hofs::and",
                index = next - 1,
                "deferred short-circuit"
            );
            return Verdict::Invalid(payload);
        }

        for (index, validator) in validators.iter().enumerate().skip(next) {
            let outcome = match validator.validate(&args) {
                Ok(Validation::Immediate(verdict)) => Ok(verdict),
                Ok(Validation::Deferred(pending)) => pending.await,
                Err(fault) => Err(fault),
            };

            if let ControlFlow::Break(payload) = settle(outcome) {
                tracing::trace!(target: "changeset_hofs::and", index, "deferred short-circuit");
                return Verdict::Invalid(payload);
            }
        }

        Verdict::Valid
    }
}

fn settle(outcome: Result<Verdict, ValidatorFault>) -> ControlFlow<Value> {
    match outcome {
        Ok(verdict) => verdict.into_flow(),
        Err(fault) => ControlFlow::Break(fault.into_payload()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use futures::FutureExt;
    use futures::executor::block_on;

    fn validators(list: Vec<Arc<dyn Validator>>) -> Arc<[Arc<dyn Validator>]> {
        list.into()
    }

    #[test]
    fn test_rejected_head_settles_as_payload() {
        let head = async { Err::<Verdict, _>(ValidatorFault::new("rejected")) }.boxed();
        let chain = Chain::new(head, validators(vec![]), 1, ChangeArgs::default());
        assert_eq!(block_on(chain.run()), Verdict::invalid("rejected"));
    }

    #[test]
    fn test_skips_already_consumed_prefix() {
        let head = async { Ok::<_, ValidatorFault>(Verdict::Valid) }.boxed();
        let list = validators(vec![
            (|_: &ChangeArgs| "consumed").shared(),
            (|_: &ChangeArgs| "consumed").shared(),
            (|_: &ChangeArgs| true).shared(),
        ]);
        let chain = Chain::new(head, list, 2, ChangeArgs::default());
        assert_eq!(block_on(chain.run()), Verdict::Valid);
    }

    #[test]
    fn test_sync_fault_in_tail_is_captured() {
        let head = async { Ok::<_, ValidatorFault>(Verdict::Valid) }.boxed();
        let list = validators(vec![
            (|_: &ChangeArgs| true).shared(),
            (|_: &ChangeArgs| Err::<bool, _>(ValidatorFault::new("boom"))).shared(),
        ]);
        let chain = Chain::new(head, list, 1, ChangeArgs::default());
        assert_eq!(block_on(chain.run()), Verdict::invalid("boom"));
    }
}
