//! System settings slice.

use serde::{Deserialize, Serialize};

use crate::domain::identity::Role;

/// How often automatic backups run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupFrequency {
    Daily,
    Weekly,
    Monthly,
}

/// Institution-wide configuration, replaced wholesale on update.
///
/// The struct is deliberately flat: every field maps to one toggle or input
/// on the settings screen, and updates replace the whole record rather than
/// merging fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    /// Site title shown across the desk.
    pub site_name: String,
    /// Institutional contact email.
    pub admin_email: String,
    /// Institutional contact phone.
    pub contact_phone: String,
    /// Postal address.
    pub address: String,
    /// IANA timezone name.
    pub timezone: String,
    /// Interface language.
    pub language: String,

    // Notification toggles.
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub push_notifications: bool,
    pub weekly_reports: bool,
    pub instant_alerts: bool,
    pub maintenance_notices: bool,

    // Security thresholds.
    pub two_factor_auth: bool,
    pub session_timeout: u32,
    pub password_expiry: u32,
    pub login_attempts: u32,
    pub ip_whitelist: bool,
    pub audit_logging: bool,

    // Registration policy.
    pub allow_registration: bool,
    pub require_email_verification: bool,
    pub default_role: Role,
    pub max_users: u32,
    pub account_approval: bool,
    pub bulk_import: bool,

    // Backup policy.
    pub auto_backup: bool,
    pub backup_frequency: BackupFrequency,
    pub retention_period: u32,
    pub compression_enabled: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            site_name: "SITS Complaint Management".to_owned(),
            admin_email: "admin@sits.edu.in".to_owned(),
            contact_phone: "+91 8734 290 290".to_owned(),
            address: "Narhe, Pune".to_owned(),
            timezone: "Asia/Kolkata".to_owned(),
            language: "English".to_owned(),
            email_notifications: true,
            sms_notifications: false,
            push_notifications: true,
            weekly_reports: true,
            instant_alerts: true,
            maintenance_notices: true,
            two_factor_auth: false,
            session_timeout: 30,
            password_expiry: 90,
            login_attempts: 5,
            ip_whitelist: false,
            audit_logging: true,
            allow_registration: false,
            require_email_verification: true,
            default_role: Role::Student,
            max_users: 1000,
            account_approval: true,
            bulk_import: false,
            auto_backup: true,
            backup_frequency: BackupFrequency::Daily,
            retention_period: 30,
            compression_enabled: true,
        }
    }
}
