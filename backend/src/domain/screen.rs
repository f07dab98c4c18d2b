//! Navigation and transient view state.
//!
//! Screen access is decided here, at transition time: a navigation that the
//! current role may not perform is rejected with a domain error rather than
//! silently landing on an empty screen.

use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::identity::Role;

/// Screens the authenticated desk can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Landing dashboard; the default after login and logout.
    #[default]
    Home,
    /// Complaint submission form (students).
    ComplaintBox,
    /// Administrator profile and complaint triage (admins).
    Profile,
    /// Live status overview.
    SystemStatus,
    /// Shortcut panel.
    QuickActions,
    /// Report generation.
    GenerateReport,
    /// Institution-wide settings (admins).
    SystemSettings,
    /// Read-only complaint dashboard (students).
    PublicDashboard,
    /// Feedback capture (students).
    FeedbackModule,
}

impl Screen {
    /// Kebab-case route key for logs and display routing.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::ComplaintBox => "complaint-box",
            Self::Profile => "profile",
            Self::SystemStatus => "system-status",
            Self::QuickActions => "quick-actions",
            Self::GenerateReport => "generate-report",
            Self::SystemSettings => "system-settings",
            Self::PublicDashboard => "public-dashboard",
            Self::FeedbackModule => "feedback-module",
        }
    }

    /// Whether the given role may enter this screen.
    pub const fn allows(self, role: Role) -> bool {
        match self {
            Self::ComplaintBox | Self::PublicDashboard | Self::FeedbackModule => {
                matches!(role, Role::Student)
            }
            Self::Profile | Self::SystemSettings => matches!(role, Role::Admin),
            Self::Home | Self::SystemStatus | Self::QuickActions | Self::GenerateReport => true,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screens shown while no identity is authenticated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthScreen {
    /// Login form; the default and the state logout returns to.
    #[default]
    Login,
    /// Signup form.
    Signup,
    /// Password recovery form.
    ForgotPassword,
}

/// Presentational state: active screen plus the notification panel flag.
///
/// Purely a gate on what a screen receives; it holds no domain data itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    screen: Screen,
    notifications_open: bool,
    auth_screen: AuthScreen,
}

impl ViewState {
    /// Fresh view state: default screen, panel closed, login form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active screen.
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Whether the notification panel is open.
    pub const fn notifications_open(&self) -> bool {
        self.notifications_open
    }

    /// Which pre-authentication form is showing.
    pub const fn auth_screen(&self) -> AuthScreen {
        self.auth_screen
    }

    /// Move to `screen`, force-closing the notification panel.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::Forbidden`](crate::domain::ErrorCode::Forbidden)
    /// when the role's transition table does not allow the screen.
    pub fn navigate(&mut self, screen: Screen, role: Role) -> Result<(), DomainError> {
        if !screen.allows(role) {
            return Err(DomainError::forbidden(format!(
                "screen {screen} is not available to {role} accounts"
            )));
        }
        self.screen = screen;
        self.notifications_open = false;
        Ok(())
    }

    /// Flip the notification panel, independent of the active screen.
    pub const fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
    }

    /// Switch the pre-authentication form.
    pub const fn show_auth(&mut self, auth_screen: AuthScreen) {
        self.auth_screen = auth_screen;
    }

    /// Return to the default state (used by logout).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
