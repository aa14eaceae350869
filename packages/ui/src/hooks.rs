//! Generic resource hooks.
//!
//! Every screen consumes the same two shapes: a paginated list with
//! `items`/`loading`/`error`/`refetch`, and an independent mutation with its
//! own `loading`/`error` pair. There is no shared cache or invalidation
//! across hooks — after a successful mutation the caller refetches its list.
//!
//! Requests are not cancelled when their inputs change again mid-flight;
//! whichever response lands last wins.

use std::future::Future;

use api::{ApiError, Page};
use dioxus::prelude::*;

/// State handle returned by [`use_paginated_list`]. Cheap to copy.
pub struct ListHandle<T: 'static> {
    items: Signal<Vec<T>>,
    count: Signal<Option<u64>>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    has_next: Signal<bool>,
    generation: Signal<u32>,
}

impl<T: 'static> Clone for ListHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ListHandle<T> {}

impl<T: Clone + 'static> ListHandle<T> {
    pub fn items(&self) -> Vec<T> {
        self.items.read().clone()
    }

    /// Server-provided total, when the response carried one.
    pub fn count(&self) -> Option<u64> {
        (self.count)()
    }

    pub fn loading(&self) -> bool {
        (self.loading)()
    }

    pub fn error(&self) -> Option<String> {
        self.error.read().clone()
    }

    /// Inferred from page fullness; see [`Page::has_next_page`].
    pub fn has_next_page(&self) -> bool {
        (self.has_next)()
    }

    /// Re-run the fetch for the current page.
    pub fn refetch(&mut self) {
        self.generation += 1;
    }
}

/// Fetch a page of a resource list, refetching when `page` changes or
/// [`ListHandle::refetch`] is called.
pub fn use_paginated_list<T, F, Fut>(
    page: ReadOnlySignal<u32>,
    limit: u32,
    fetch: F,
) -> ListHandle<T>
where
    T: Clone + 'static,
    F: Fn(u32, u32) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
{
    let mut items = use_signal(Vec::<T>::new);
    let mut count = use_signal(|| None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None);
    let mut has_next = use_signal(|| false);
    let generation = use_signal(|| 0u32);

    let _ = use_resource(move || {
        // Read reactively so page changes and refetches re-run the request.
        let current_page = page();
        let _generation = generation();
        let request = fetch(current_page, limit);
        async move {
            loading.set(true);
            match request.await {
                Ok(fetched) => {
                    has_next.set(fetched.has_next_page());
                    count.set(fetched.count);
                    items.set(fetched.items);
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("list fetch failed: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        }
    });

    ListHandle {
        items,
        count,
        loading,
        error,
        has_next,
        generation,
    }
}

/// Independent mutation state: one `loading`/`error` pair per hook instance.
#[derive(Clone, Copy)]
pub struct MutationHandle {
    loading: Signal<bool>,
    error: Signal<Option<String>>,
}

pub fn use_mutation() -> MutationHandle {
    MutationHandle {
        loading: use_signal(|| false),
        error: use_signal(|| None),
    }
}

impl MutationHandle {
    pub fn loading(&self) -> bool {
        (self.loading)()
    }

    pub fn error(&self) -> Option<String> {
        self.error.read().clone()
    }

    /// Run one request, tracking loading/error state around it. The result is
    /// returned so the caller can toast and refetch.
    pub async fn run<T>(
        &mut self,
        request: impl Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        self.loading.set(true);
        let result = request.await;
        match &result {
            Ok(_) => self.error.set(None),
            Err(err) => self.error.set(Some(err.to_string())),
        }
        self.loading.set(false);
        result
    }
}
