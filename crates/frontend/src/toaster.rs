//! Toast overlay: a context provider plus the stacked notification cards.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use ui_state::toast::{Notice, ToastQueue};

/// How long a toast stays up before auto-dismissing.
const TOAST_DISMISS_MS: u32 = 4_000;

/// Reducer wrapper around the toast queue.
#[derive(Default, PartialEq)]
struct ToastState {
    queue: ToastQueue,
}

enum ToastAction {
    Push(Notice),
    Dismiss(u64),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut queue = self.queue.clone();
        match action {
            ToastAction::Push(notice) => {
                queue.push(notice);
            }
            ToastAction::Dismiss(id) => queue.dismiss(id),
        }
        Rc::new(ToastState { queue })
    }
}

/// Handle pages and components use to raise notifications.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    dispatch: UseReducerDispatcher<ToastState>,
}

impl Toaster {
    pub fn notify(&self, notice: Notice) {
        self.dispatch.dispatch(ToastAction::Push(notice));
    }
}

/// Fetch the toaster from context.
#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("toast context not found")
}

/// Properties for ToastProvider component.
#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Html,
}

/// Context provider that renders the toast stack over its children.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);

    let toaster = Toaster {
        dispatch: state.dispatcher(),
    };

    // Schedule an auto-dismiss for every toast not yet seen. The queue's
    // monotonic ids make a stale timeout harmless.
    {
        let scheduled_below = use_mut_ref(|| 0u64);
        let dispatch = state.dispatcher();

        use_effect_with(state.queue.clone(), move |queue| {
            let mut watermark = scheduled_below.borrow_mut();
            for entry in queue.entries() {
                if entry.id >= *watermark {
                    let dispatch = dispatch.clone();
                    let id = entry.id;
                    Timeout::new(TOAST_DISMISS_MS, move || {
                        dispatch.dispatch(ToastAction::Dismiss(id));
                    })
                    .forget();
                    *watermark = id + 1;
                }
            }
        });
    }

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { props.children.clone() }
            if !state.queue.is_empty() {
                <div class="toast-stack">
                    { for state.queue.entries().iter().map(|entry| {
                        let dispatch = state.dispatcher();
                        let id = entry.id;
                        let onclick = Callback::from(move |_: MouseEvent| {
                            dispatch.dispatch(ToastAction::Dismiss(id));
                        });
                        html! {
                            <div class="toast" key={entry.id.to_string()} {onclick}>
                                <div class="toast-title">{ &entry.notice.title }</div>
                                <div class="toast-body">{ &entry.notice.body }</div>
                            </div>
                        }
                    })}
                </div>
            }
        </ContextProvider<Toaster>>
    }
}
