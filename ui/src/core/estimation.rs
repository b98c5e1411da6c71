//! Shared mock-estimation lifecycle.
//!
//! Every page follows the same shape: a typed request built from the form
//! draft, a [`MockEstimator`] that sleeps for its configured latency and then
//! samples a result, and a three-phase view (`Form → Loading → Result`).
//!
//! [`EstimationMachine`] is the pure state machine behind that view. Each
//! submission is issued a [`Ticket`]; a completion is applied only while its
//! ticket is still the pending one, so a reset (or a newer submission) makes
//! any earlier in-flight completion a no-op. [`use_estimation`] binds the
//! machine to a Dioxus scope and cancels the timer task on reset; tasks are
//! also dropped with their scope when the page unmounts.

use dioxus::prelude::*;
use rand::Rng;

use super::timing::{self, Latency};

/// A page's simulated model.
pub trait MockEstimator {
    type Request: 'static;
    type Output: Clone + 'static;

    /// Short name used in log fields.
    const NAME: &'static str;

    fn latency(&self) -> Latency;

    fn estimate<R: Rng + ?Sized>(&self, request: &Self::Request, rng: &mut R) -> Self::Output;
}

/// Waits out the estimator's latency, then samples a result.
pub async fn run<E: MockEstimator>(estimator: &E, request: &E::Request) -> E::Output {
    let delay = estimator.latency().sample(&mut rand::thread_rng());
    timing::sleep(delay).await;
    estimator.estimate(request, &mut rand::thread_rng())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Form,
    Loading,
    Result,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimationMachine<T> {
    result: Option<T>,
    pending: Option<Ticket>,
    next_ticket: u64,
}

impl<T> Default for EstimationMachine<T> {
    fn default() -> Self {
        Self {
            result: None,
            pending: None,
            next_ticket: 0,
        }
    }
}

impl<T> EstimationMachine<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a submission. Any earlier pending ticket becomes stale.
    pub fn begin(&mut self) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.pending = Some(ticket);
        ticket
    }

    /// Applies `output` if `ticket` is still pending. Returns whether it was applied.
    pub fn complete(&mut self, ticket: Ticket, output: T) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.result = Some(output);
        true
    }

    /// Drops the pending submission, keeping any earlier result.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Back to `Form`: no pending submission, no result.
    pub fn reset(&mut self) {
        self.pending = None;
        self.result = None;
    }

    pub fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::Loading
        } else if self.result.is_some() {
            Phase::Result
        } else {
            Phase::Form
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }
}

/// Scope-bound handle over an [`EstimationMachine`] and its timer task.
pub struct UseEstimation<E: MockEstimator + 'static> {
    estimator: E,
    machine: Signal<EstimationMachine<E::Output>>,
    task: Signal<Option<Task>>,
}

impl<E: MockEstimator + Copy + 'static> Clone for UseEstimation<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: MockEstimator + Copy + 'static> Copy for UseEstimation<E> {}

pub fn use_estimation<E: MockEstimator + Copy + 'static>(estimator: E) -> UseEstimation<E> {
    let machine = use_signal(EstimationMachine::<E::Output>::new);
    let task = use_signal(|| None::<Task>);
    UseEstimation {
        estimator,
        machine,
        task,
    }
}

impl<E: MockEstimator + Copy + 'static> UseEstimation<E> {
    pub fn phase(&self) -> Phase {
        self.machine.read().phase()
    }

    pub fn is_loading(&self) -> bool {
        self.machine.read().is_loading()
    }

    pub fn result(&self) -> Option<E::Output> {
        self.machine.read().result().cloned()
    }

    pub fn submit(&mut self, request: E::Request) {
        self.submit_with(request, |_| {});
    }

    /// Submits and runs `on_complete` once the result has been applied.
    pub fn submit_with<F>(&mut self, request: E::Request, on_complete: F)
    where
        F: FnOnce(&E::Output) + 'static,
    {
        self.cancel_task();
        let ticket = self.machine.write().begin();
        tracing::debug!(estimator = E::NAME, ticket = ticket.id(), "estimation started");

        let estimator = self.estimator;
        let mut machine = self.machine;
        let task = spawn(async move {
            let output = run(&estimator, &request).await;
            if machine.write().complete(ticket, output) {
                tracing::debug!(estimator = E::NAME, ticket = ticket.id(), "estimation completed");
                if let Some(result) = machine.read().result() {
                    on_complete(result);
                }
            } else {
                tracing::debug!(
                    estimator = E::NAME,
                    ticket = ticket.id(),
                    "discarded stale completion"
                );
            }
        });
        self.task.set(Some(task));
    }

    pub fn reset(&mut self) {
        self.cancel_task();
        self.machine.write().reset();
    }

    fn cancel_task(&mut self) {
        if let Some(task) = self.task.write().take() {
            task.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Clone, Copy)]
    struct Doubler;

    impl MockEstimator for Doubler {
        type Request = u32;
        type Output = u32;
        const NAME: &'static str = "doubler";

        fn latency(&self) -> Latency {
            Latency::fixed(2000)
        }

        fn estimate<R: Rng + ?Sized>(&self, request: &u32, _rng: &mut R) -> u32 {
            request * 2
        }
    }

    #[test]
    fn starts_in_form_phase() {
        let machine = EstimationMachine::<u32>::new();
        assert_eq!(machine.phase(), Phase::Form);
        assert!(machine.result().is_none());
    }

    #[test]
    fn begin_then_complete_reaches_result() {
        let mut machine = EstimationMachine::new();
        let ticket = machine.begin();
        assert_eq!(machine.phase(), Phase::Loading);
        assert!(machine.complete(ticket, 7));
        assert_eq!(machine.phase(), Phase::Result);
        assert_eq!(machine.result(), Some(&7));
    }

    #[test]
    fn reset_discards_in_flight_completion() {
        let mut machine = EstimationMachine::new();
        let ticket = machine.begin();
        machine.reset();
        assert!(!machine.complete(ticket, 7));
        assert_eq!(machine.phase(), Phase::Form);
    }

    #[test]
    fn newer_submission_supersedes_older_one() {
        let mut machine = EstimationMachine::new();
        let first = machine.begin();
        let second = machine.begin();
        assert_ne!(first, second);
        assert!(!machine.complete(first, 1));
        assert_eq!(machine.phase(), Phase::Loading);
        assert!(machine.complete(second, 2));
        assert_eq!(machine.result(), Some(&2));
    }

    #[test]
    fn resubmission_replaces_result_wholesale() {
        let mut machine = EstimationMachine::new();
        let t = machine.begin();
        machine.complete(t, 1);
        let t = machine.begin();
        // Previous result stays readable while loading but the phase is Loading.
        assert_eq!(machine.phase(), Phase::Loading);
        assert_eq!(machine.result(), Some(&1));
        machine.complete(t, 5);
        assert_eq!(machine.result(), Some(&5));
    }

    #[test]
    fn cancel_keeps_previous_result() {
        let mut machine = EstimationMachine::new();
        let t = machine.begin();
        machine.complete(t, 3);
        let pending = machine.begin();
        machine.cancel();
        assert_eq!(machine.phase(), Phase::Result);
        assert!(!machine.complete(pending, 9));
        assert_eq!(machine.result(), Some(&3));
    }

    mod hook {
        use super::*;
        use dioxus::dioxus_core::VirtualDom;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use tokio::time::{timeout, Instant};

        /// Drives `dom` for `span` of (paused) tokio time.
        async fn drive(dom: &mut VirtualDom, span: Duration) {
            let deadline = Instant::now() + span;
            while Instant::now() < deadline {
                if timeout(Duration::from_millis(250), dom.wait_for_work())
                    .await
                    .is_ok()
                {
                    dom.render_immediate_to_vec();
                }
            }
        }

        static MOUNTED_APPLIED: AtomicUsize = AtomicUsize::new(0);

        #[component]
        fn MountedPage() -> Element {
            let mut estimation = use_estimation(Doubler);
            use_hook(move || {
                estimation.submit_with(21, |output| {
                    assert_eq!(*output, 42);
                    MOUNTED_APPLIED.fetch_add(1, Ordering::SeqCst);
                })
            });
            rsx! { "{estimation.phase():?}" }
        }

        #[tokio::test(start_paused = true)]
        async fn mounted_page_applies_its_completion() {
            let mut dom = VirtualDom::new(MountedPage);
            dom.rebuild_in_place();
            drive(&mut dom, Duration::from_secs(1)).await;
            assert_eq!(MOUNTED_APPLIED.load(Ordering::SeqCst), 0, "applied before latency");

            drive(&mut dom, Duration::from_secs(3)).await;
            assert_eq!(MOUNTED_APPLIED.load(Ordering::SeqCst), 1);
        }

        static UNMOUNTED_APPLIED: AtomicUsize = AtomicUsize::new(0);

        #[component]
        fn SubmittingPage() -> Element {
            let mut estimation = use_estimation(Doubler);
            use_hook(move || {
                estimation.submit_with(21, |_| {
                    UNMOUNTED_APPLIED.fetch_add(1, Ordering::SeqCst);
                })
            });
            rsx! { "{estimation.phase():?}" }
        }

        /// Shows the page, then navigates away before the estimate lands.
        #[component]
        fn LeavesEarly() -> Element {
            let mut showing = use_signal(|| true);
            use_hook(move || {
                spawn(async move {
                    timing::sleep(Duration::from_millis(500)).await;
                    showing.set(false);
                })
            });
            rsx! {
                if showing() {
                    SubmittingPage {}
                }
            }
        }

        #[tokio::test(start_paused = true)]
        async fn unmounted_page_never_applies_its_completion() {
            let mut dom = VirtualDom::new(LeavesEarly);
            dom.rebuild_in_place();
            drive(&mut dom, Duration::from_secs(5)).await;
            assert_eq!(UNMOUNTED_APPLIED.load(Ordering::SeqCst), 0);
        }

        static RESET_APPLIED: AtomicUsize = AtomicUsize::new(0);

        #[component]
        fn ResettingPage() -> Element {
            let mut estimation = use_estimation(Doubler);
            use_hook(move || {
                estimation.submit_with(21, |_| {
                    RESET_APPLIED.fetch_add(1, Ordering::SeqCst);
                });
                spawn(async move {
                    timing::sleep(Duration::from_millis(500)).await;
                    estimation.reset();
                })
            });
            rsx! { "{estimation.phase():?}" }
        }

        #[tokio::test(start_paused = true)]
        async fn reset_cancels_the_in_flight_completion() {
            let mut dom = VirtualDom::new(ResettingPage);
            dom.rebuild_in_place();
            drive(&mut dom, Duration::from_secs(5)).await;
            assert_eq!(RESET_APPLIED.load(Ordering::SeqCst), 0);
            assert!(dioxus_ssr::render(&dom).contains("Form"));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn run_waits_for_the_configured_latency() {
        let started = tokio::time::Instant::now();
        let output = run(&Doubler, &21).await;
        assert_eq!(output, 42);
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }
}
