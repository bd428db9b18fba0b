//! Auth page: the sign-in/register card and the admin bypass link.

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use ui_state::auth::{admin_shortcut, AuthForm, AuthMode};

use crate::app::route_for;
use crate::toaster::use_toaster;

/// Auth page component.
#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let form = use_state(AuthForm::default);
    let toaster = use_toaster();
    let navigator = use_navigator().expect("router context not found");

    // Pending redirect timer; dropping it cancels the navigation.
    let pending_redirect = use_mut_ref(|| None::<Timeout>);

    {
        let pending_redirect = pending_redirect.clone();
        use_effect_with((), move |_| {
            move || {
                pending_redirect.borrow_mut().take();
            }
        });
    }

    let onsubmit = {
        let form = form.clone();
        let toaster = toaster.clone();
        let navigator = navigator.clone();
        let pending_redirect = pending_redirect.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let submission = form.submit();
            toaster.notify(submission.notice);

            let navigator = navigator.clone();
            let route = route_for(submission.redirect.to);
            let timer = Timeout::new(submission.redirect.delay_ms, move || {
                navigator.push(&route);
            });
            // Resubmitting replaces (and thereby cancels) the old timer.
            *pending_redirect.borrow_mut() = Some(timer);
        })
    };

    let on_admin_login = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            navigator.push(&route_for(admin_shortcut().to));
        })
    };

    html! {
        <div class="page auth-page">
            <div class="auth-wrap">
                <div class="auth-logo">
                    <div class="logo-badge">{"♥"}</div>
                    <h1>{"MedAssist AI"}</h1>
                    <p class="text-secondary">{"Emergency Medical Assistant Locator"}</p>
                </div>

                <div class="card auth-card">
                    <div class="tab-row">
                        { for [AuthMode::SignIn, AuthMode::Register].iter().map(|mode| {
                            let mode = *mode;
                            let class = if form.mode == mode { "tab active" } else { "tab" };
                            let form = form.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                let mut next = (*form).clone();
                                next.set_mode(mode);
                                form.set(next);
                            });
                            html! {
                                <button type="button" {class} {onclick} key={mode.tab_label()}>
                                    { mode.tab_label() }
                                </button>
                            }
                        })}
                    </div>

                    <form {onsubmit}>
                        { for form.visible_fields().iter().map(|field| {
                            let field = *field;
                            let form_handle = form.clone();
                            let oninput = Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*form_handle).clone();
                                next.set_field(field, input.value());
                                form_handle.set(next);
                            });
                            html! {
                                <div class="form-field" key={field.label()}>
                                    <label>{ field.label() }</label>
                                    <input
                                        type={field.input_type()}
                                        placeholder={field.placeholder()}
                                        value={form.field(field).to_string()}
                                        {oninput}
                                    />
                                </div>
                            }
                        })}

                        <button type="submit" class="btn btn-primary btn-block">
                            { form.mode.submit_label() }
                        </button>
                    </form>

                    <div class="auth-footer">
                        <button type="button" class="admin-link" onclick={on_admin_login}>
                            {"Hospital Admin Login"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
