//! Transient, dismissible notifications.
//!
//! `ToastService` is provided once at the application root; any screen can
//! push a success or error toast. Toasts auto-expire after a few seconds but
//! can also be dismissed by hand.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TOAST_LIFETIME_MS: u32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Centralized toast stack.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|t| t.push(Toast { id, kind, message }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }
}

/// Renders the toast stack. Mounted once, next to the shell.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>().expect("ToastService not found in context");

    view! {
        <div class="toast-host">
            <For
                each=move || svc.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let kind_class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=kind_class>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| svc.dismiss(id)
                            >"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
