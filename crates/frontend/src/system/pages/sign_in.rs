use crate::shared::api_utils::backend_url;
use crate::shared::components::ui::Button;
use crate::shared::components::AuthCard;
use leptos::prelude::*;

pub const LOGIN_ENDPOINT: &str = "/auth/login";

/// Sign-in form. The form posts straight to the backend, which owns the
/// session and the redirect after login.
#[component]
pub fn SignInPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    view! {
        <AuthCard title="Sign in" subtitle="Use your clinic account to continue">
            <form class="form" method="post" action=backend_url(LOGIN_ENDPOINT)>
                <div class="form__group">
                    <label class="form__label" for="email">"Email"</label>
                    <input
                        class="form__input"
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="username"
                        placeholder="name@clinic.example"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="password">"Password"</label>
                    <input
                        class="form__input"
                        type="password"
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required
                    />
                </div>

                <Button button_type="submit" class="w-full">
                    "Sign in"
                </Button>
            </form>
        </AuthCard>
    }
}
