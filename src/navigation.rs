//! Host-side hook used when the session cannot be recovered.

/// Lets the hosting application decide how to send the user to the login view.
pub trait Navigator: Send + Sync {
    /// Path of the view currently shown, if the host tracks one.
    fn current_path(&self) -> Option<String>;

    fn redirect_to_login(&self, login_path: &str);
}

/// Navigator for hosts without views; never redirects.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn current_path(&self) -> Option<String> {
        None
    }

    fn redirect_to_login(&self, _login_path: &str) {}
}
