//! External authentication capability.
//!
//! The header never talks to an auth provider directly. It receives an
//! [`AuthHandle`] and asks it two things: is somebody signed in, and what do
//! the provider's widgets look like. The browser build plugs in Clerk; server
//! rendering and tests use [`StaticAuth`].

use leptos::prelude::*;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Widgets and session state owned by an authentication provider.
///
/// `is_authenticated` is called inside reactive closures, so a provider whose
/// session changes at runtime should read a signal there.
pub trait AuthCapability: Send + Sync + 'static {
    /// Whether a user is currently signed in.
    fn is_authenticated(&self) -> bool;

    /// Button that starts the sign-in flow.
    fn sign_in_trigger(&self) -> AnyView;

    /// Button that starts the sign-up flow.
    fn sign_up_trigger(&self) -> AnyView;

    /// Menu for the signed-in user (avatar, account, sign out).
    fn user_menu(&self) -> AnyView;
}

/// Which set of auth widgets the header shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthBranch {
    /// Sign-in and sign-up triggers
    SignedOut,
    /// User menu and the "List Property" action
    SignedIn,
}

impl AuthBranch {
    /// Exactly one branch for any provider state.
    pub fn select(auth: &dyn AuthCapability) -> Self {
        if auth.is_authenticated() {
            AuthBranch::SignedIn
        } else {
            AuthBranch::SignedOut
        }
    }
}

/// Shared, cloneable handle to the injected provider.
#[derive(Clone)]
pub struct AuthHandle(Arc<dyn AuthCapability>);

impl AuthHandle {
    /// Wrap a provider.
    pub fn new(auth: impl AuthCapability) -> Self {
        Self(Arc::new(auth))
    }

    /// Branch for the provider's current state (reactive if the provider is).
    pub fn branch(&self) -> AuthBranch {
        AuthBranch::select(self.0.as_ref())
    }
}

impl Deref for AuthHandle {
    type Target = dyn AuthCapability;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for AuthHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHandle")
            .field("authenticated", &self.0.is_authenticated())
            .finish()
    }
}

/// Provider with a fixed session state and plain-button widgets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaticAuth {
    signed_in: bool,
}

impl StaticAuth {
    /// Nobody signed in.
    pub fn signed_out() -> Self {
        Self { signed_in: false }
    }

    /// A user is signed in.
    pub fn signed_in() -> Self {
        Self { signed_in: true }
    }
}

impl AuthCapability for StaticAuth {
    fn is_authenticated(&self) -> bool {
        self.signed_in
    }

    fn sign_in_trigger(&self) -> AnyView {
        view! { <button class="btn btn-outline btn-sm" data-auth="sign-in">"Sign In"</button> }.into_any()
    }

    fn sign_up_trigger(&self) -> AnyView {
        view! { <button class="btn btn-primary btn-sm" data-auth="sign-up">"Sign Up"</button> }.into_any()
    }

    fn user_menu(&self) -> AnyView {
        view! {
            <div class="user-menu" data-auth="user-menu">
                <span class="user-avatar">"U"</span>
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn branches_are_exclusive() {
        assert_eq!(AuthBranch::select(&StaticAuth::signed_out()), AuthBranch::SignedOut);
        assert_eq!(AuthBranch::select(&StaticAuth::signed_in()), AuthBranch::SignedIn);
    }

    #[test]
    fn handle_delegates_to_provider() {
        let handle = AuthHandle::new(StaticAuth::signed_in());
        assert!(handle.is_authenticated());
        assert_eq!(handle.branch(), AuthBranch::SignedIn);
        assert_eq!(format!("{handle:?}"), "AuthHandle { authenticated: true }");
    }
}
