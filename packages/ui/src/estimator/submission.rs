//! Submit path shared by the estimator component.

use std::future::Future;

use api::EstimatorClient;
use dioxus::prelude::*;
use estimator_core::Lifecycle;

/// Somewhere the estimator keeps its lifecycle.
pub trait LifecycleStore {
    fn update(&mut self, f: impl FnOnce(&mut Lifecycle));
}

impl LifecycleStore for Signal<Lifecycle> {
    fn update(&mut self, f: impl FnOnce(&mut Lifecycle)) {
        f(&mut self.write());
    }
}

/// Start an estimate for `dish_name`.
///
/// An empty name is ignored and yields `None`. Otherwise the store enters
/// `Loading` before this returns, and the returned future sends the request
/// and records the outcome. Nothing is sent until the future is polled.
pub fn submit_dish<S>(
    client: &EstimatorClient,
    dish_name: String,
    mut store: S,
) -> Option<impl Future<Output = ()> + use<S>>
where
    S: LifecycleStore + 'static,
{
    if dish_name.is_empty() {
        return None;
    }

    store.update(Lifecycle::begin);
    tracing::info!(dish_name = %dish_name, "Submitting dish for estimation");

    let client = client.clone();
    Some(async move {
        let outcome = client.estimate_or_message(&dish_name).await;
        store.update(|state| {
            match outcome {
                Ok(estimate) => state.succeed(estimate),
                Err(message) => state.fail(message),
            };
        });
    })
}
