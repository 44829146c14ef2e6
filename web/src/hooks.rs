use dioxus::prelude::*;
use std::future::Future;

use crate::utils::error::AppError;

/// Loading flag and last result of an API call.
#[derive(Clone)]
pub struct ApiState<T: Clone + 'static> {
    pub loading: Signal<bool>,
    pub data: Signal<Option<Result<T, AppError>>>,
}

impl<T: Clone + 'static> ApiState<T> {
    #[inline]
    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }
}

/// State for calls the component starts itself.
pub fn use_api_simple<T: Clone + 'static>() -> ApiState<T> {
    ApiState {
        loading: use_signal(|| false),
        data: use_signal(|| None),
    }
}

/// Runs `fetch_fn` on mount and again whenever a signal it reads changes.
///
/// # Example
/// ```rust,ignore
/// let state = use_api(move || {
///     let client = ApiClient::new();
///     async move { client.get_departments().await }
/// });
/// ```
pub fn use_api<T, F, Fut>(mut fetch_fn: F) -> ApiState<T>
where
    T: Clone + 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let state = use_api_simple::<T>();

    use_effect(move || {
        let mut loading = state.loading;
        let mut data = state.data;
        let result_future = fetch_fn();
        spawn(async move {
            *loading.write() = true;
            let result = result_future.await;
            if let Err(err) = &result {
                log::warn!("request failed: {err}");
            }
            *data.write() = Some(result);
            *loading.write() = false;
        });
    });

    state
}
