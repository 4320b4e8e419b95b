//! The checker capability consumed by runners.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use crate::check::result::CheckResult;

/// Opaque state threaded between successive executions of a stateful check.
///
/// The runner never inspects the value; it clones the handle into each
/// execution and replaces it with whatever the checker hands back. Cloning
/// is an `Arc` bump, so a timed-out or crashed execution cannot lose the
/// runner's copy.
#[derive(Clone, Default)]
pub struct CheckerState(Option<Arc<dyn Any + Send + Sync>>);

impl CheckerState {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Some(Arc::new(value)))
    }

    /// The empty state, for checks that carry nothing between runs.
    pub fn none() -> Self {
        Self(None)
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the state as a concrete type, if it holds one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_deref().and_then(|value| value.downcast_ref())
    }
}

impl std::fmt::Debug for CheckerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(_) => write!(f, "CheckerState(..)"),
            None => write!(f, "CheckerState(none)"),
        }
    }
}

/// What a checker hands back from one execution: either a bare result
/// (state unchanged) or a result plus the state for the next run.
#[derive(Debug)]
pub enum CheckOutcome {
    Done(CheckResult),
    DoneWithState(CheckResult, CheckerState),
}

impl CheckOutcome {
    /// Split into the result and the replacement state, if any.
    pub fn into_parts(self) -> (CheckResult, Option<CheckerState>) {
        match self {
            CheckOutcome::Done(result) => (result, None),
            CheckOutcome::DoneWithState(result, state) => (result, Some(state)),
        }
    }
}

impl From<CheckResult> for CheckOutcome {
    fn from(result: CheckResult) -> Self {
        CheckOutcome::Done(result)
    }
}

/// A user-supplied health test.
///
/// `check` runs inside its own spawned task with a deadline; on timeout the
/// task is aborted. Abort cancels at await points, so a checker that blocks
/// the thread without awaiting must wrap that work in
/// `tokio::task::spawn_blocking` for the deadline to hold.
pub trait Checker: Send + Sync + 'static {
    /// Produce the initial state from the registration arguments. Called
    /// once per runner start. Defaults to passing the arguments through.
    fn init(&self, args: CheckerState) -> CheckerState {
        args
    }

    /// Execute the health test against the current state.
    fn check(&self, state: CheckerState) -> BoxFuture<'static, CheckOutcome>;
}

/// Adapter turning an async closure into a [`Checker`], so hosts can
/// register plain functions without a dedicated type.
pub struct FnChecker<F>(F);

impl<F, Fut> FnChecker<F>
where
    F: Fn(CheckerState) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = CheckOutcome> + Send + 'static,
{
    pub fn new(check: F) -> Self {
        Self(check)
    }
}

impl<F, Fut> Checker for FnChecker<F>
where
    F: Fn(CheckerState) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = CheckOutcome> + Send + 'static,
{
    fn check(&self, state: CheckerState) -> BoxFuture<'static, CheckOutcome> {
        (self.0)(state).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_roundtrip_and_opacity() {
        let state = CheckerState::new(41u64);
        assert_eq!(state.downcast_ref::<u64>(), Some(&41));
        assert_eq!(state.downcast_ref::<String>(), None);
        assert!(CheckerState::none().is_none());
    }

    #[test]
    fn state_clone_shares_value() {
        let state = CheckerState::new(String::from("conn"));
        let copy = state.clone();
        assert_eq!(copy.downcast_ref::<String>().unwrap(), "conn");
        assert_eq!(state.downcast_ref::<String>().unwrap(), "conn");
    }

    #[tokio::test]
    async fn fn_checker_adapts_closure() {
        let checker = FnChecker::new(|state: CheckerState| async move {
            let n = state.downcast_ref::<u32>().copied().unwrap_or(0);
            CheckOutcome::DoneWithState(CheckResult::ok("counted"), CheckerState::new(n + 1))
        });
        let outcome = checker.check(CheckerState::new(7u32)).await;
        let (result, next) = outcome.into_parts();
        assert!(result.is_healthy());
        assert_eq!(next.unwrap().downcast_ref::<u32>(), Some(&8));
    }
}
