//! Clerk-backed [`AuthCapability`].
//!
//! Session state lives in a signal that follows `Clerk.addListener`, so the
//! header swaps between its signed-out and signed-in widgets on its own. Every
//! call into `window.Clerk` goes through [`call_method`]; failures are logged
//! to the console and leave the page usable.

use estatehub_site::auth::AuthCapability;
use estatehub_site::site::AFTER_SIGN_OUT_URL;
use js_sys::{Function, Object, Promise, Reflect};
use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Failure talking to the Clerk JS SDK.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClerkError {
    /// Not running in a browser window
    #[error("no browser window")]
    NoWindow,
    /// `window.Clerk` is missing; the SDK script was not loaded
    #[error("window.Clerk is not available")]
    NotLoaded,
    /// The SDK object has no such method
    #[error("Clerk.{0} is not a function")]
    MissingMethod(&'static str),
    /// The SDK threw or rejected
    #[error("Clerk.{call} failed: {message}")]
    Js {
        /// Method name
        call: &'static str,
        /// JS error message
        message: String,
    },
}

/// Auth provider backed by `window.Clerk`.
#[derive(Clone, Copy, Debug)]
pub struct ClerkAuth {
    signed_in: RwSignal<bool>,
}

impl ClerkAuth {
    /// Start signed out and load Clerk in the background; the session signal
    /// follows Clerk from then on.
    pub fn connect() -> Self {
        let auth = Self {
            signed_in: RwSignal::new(false),
        };
        leptos::task::spawn_local(async move {
            if let Err(err) = auth.load().await {
                log_warning(&err);
            }
        });
        auth
    }

    async fn load(self) -> Result<(), ClerkError> {
        let clerk = clerk()?;
        let loading: Promise = call_method(&clerk, "load", &[])?
            .dyn_into()
            .map_err(|_| ClerkError::Js {
                call: "load",
                message: "did not return a promise".into(),
            })?;
        JsFuture::from(loading).await.map_err(|err| ClerkError::Js {
            call: "load",
            message: describe(&err),
        })?;

        self.signed_in.set(has_user(&clerk));
        self.listen(&clerk)
    }

    fn listen(self, clerk: &JsValue) -> Result<(), ClerkError> {
        let signed_in = self.signed_in;
        let listener = Closure::wrap(Box::new(move |resources: JsValue| {
            signed_in.set(has_user(&resources));
        }) as Box<dyn Fn(JsValue)>);

        call_method(clerk, "addListener", &[listener.as_ref()])?;
        // Clerk keeps the listener for the page lifetime
        listener.forget();
        Ok(())
    }
}

impl AuthCapability for ClerkAuth {
    fn is_authenticated(&self) -> bool {
        self.signed_in.get()
    }

    fn sign_in_trigger(&self) -> AnyView {
        view! {
            <button
                class="btn btn-outline btn-sm"
                data-auth="sign-in"
                on:click=|_| open_modal("openSignIn")
            >
                "Sign In"
            </button>
        }
        .into_any()
    }

    fn sign_up_trigger(&self) -> AnyView {
        view! {
            <button
                class="btn btn-primary btn-sm"
                data-auth="sign-up"
                on:click=|_| open_modal("openSignUp")
            >
                "Sign Up"
            </button>
        }
        .into_any()
    }

    fn user_menu(&self) -> AnyView {
        let slot = NodeRef::<leptos::html::Div>::new();

        Effect::new(move || {
            if let Some(el) = slot.get() {
                if let Err(err) = mount_user_button(el.as_ref()) {
                    log_warning(&err);
                }
            }
        });
        on_cleanup(move || {
            if let Some(el) = slot.get_untracked() {
                let el: &JsValue = el.as_ref();
                if let Err(err) = clerk().and_then(|c| call_method(&c, "unmountUserButton", &[el])) {
                    log_warning(&err);
                }
            }
        });

        view! { <div class="user-menu" data-auth="user-menu" node_ref=slot></div> }.into_any()
    }
}

fn mount_user_button(el: &JsValue) -> Result<(), ClerkError> {
    let options = Object::new();
    Reflect::set(&options, &"afterSignOutUrl".into(), &AFTER_SIGN_OUT_URL.into()).map_err(|err| {
        ClerkError::Js {
            call: "mountUserButton",
            message: describe(&err),
        }
    })?;
    let options: &JsValue = options.as_ref();
    call_method(&clerk()?, "mountUserButton", &[el, options])?;
    Ok(())
}

fn open_modal(method: &'static str) {
    if let Err(err) = clerk().and_then(|c| call_method(&c, method, &[])) {
        log_warning(&err);
    }
}

fn clerk() -> Result<JsValue, ClerkError> {
    let window = web_sys::window().ok_or(ClerkError::NoWindow)?;
    let clerk = Reflect::get(&window, &"Clerk".into()).map_err(|_| ClerkError::NotLoaded)?;
    if clerk.is_undefined() || clerk.is_null() {
        return Err(ClerkError::NotLoaded);
    }
    Ok(clerk)
}

/// `target[name](...args)`
fn call_method(target: &JsValue, name: &'static str, args: &[&JsValue]) -> Result<JsValue, ClerkError> {
    let method: Function = Reflect::get(target, &name.into())
        .ok()
        .and_then(|value| value.dyn_into().ok())
        .ok_or(ClerkError::MissingMethod(name))?;
    let args: js_sys::Array = args.iter().collect();

    Reflect::apply(&method, target, &args).map_err(|err| ClerkError::Js {
        call: name,
        message: describe(&err),
    })
}

/// Clerk and its listener payloads both expose the session user as `.user`.
fn has_user(value: &JsValue) -> bool {
    Reflect::get(value, &"user".into())
        .map(|user| !user.is_null() && !user.is_undefined())
        .unwrap_or(false)
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{err:?}"))
}

fn log_warning(err: &ClerkError) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("[estatehub][auth] {err}")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn errors_name_the_failing_call() {
        assert_eq!(ClerkError::MissingMethod("openSignIn").to_string(), "Clerk.openSignIn is not a function");
        assert_eq!(
            ClerkError::Js {
                call: "load",
                message: "network down".into(),
            }
            .to_string(),
            "Clerk.load failed: network down"
        );
        assert_eq!(ClerkError::NotLoaded.to_string(), "window.Clerk is not available");
    }
}
