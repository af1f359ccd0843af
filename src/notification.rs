//! User notices, optionally mirrored as freedesktop desktop notifications.

use async_trait::async_trait;
use std::collections::HashMap;
use zbus::{Connection, proxy};

/// Application name shown in desktop notifications.
pub const APP_NAME: &str = "Kids Drawing";

/// D-Bus interface for freedesktop Notifications.
#[proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    /// Send a notification.
    ///
    /// # Arguments
    /// * `app_name` - Application name
    /// * `replaces_id` - ID of notification to replace (0 for new)
    /// * `app_icon` - Icon name or path
    /// * `summary` - Notification title
    /// * `body` - Notification body text
    /// * `actions` - List of action identifiers and labels
    /// * `hints` - Additional metadata
    /// * `expire_timeout` - Timeout in milliseconds (-1 for default)
    #[allow(clippy::too_many_arguments)]
    fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: Vec<&str>,
        hints: HashMap<&str, zbus::zvariant::Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;
}

/// Severity of a user notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

impl NoticeKind {
    fn icon(self) -> &'static str {
        match self {
            NoticeKind::Info => "document-save",
            NoticeKind::Error => "dialog-error",
        }
    }
}

/// Short message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Notice after a drawing was written to `path`.
    pub fn saved(path: &std::path::Path) -> Self {
        Self::info(format!("File saved successfully :{}", path.display()))
    }

    /// Notice after an export failed.
    pub fn save_failed() -> Self {
        Self::error("Something went wrong while saving the file.")
    }

    /// Notice after a background image could not be decoded.
    pub fn bad_image() -> Self {
        Self::error("Error in parsing the image or it's corrupted.")
    }
}

/// Delivers notices to the user.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notice: &Notice);
}

/// Writes notices to the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Info => log::info!("{}", notice.message),
            NoticeKind::Error => log::error!("{}", notice.message),
        }
    }
}

/// Logs notices and also sends them over the session bus.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(&self, notice: &Notice) {
        LogNotifier.notify(notice).await;
        if let Err(e) = send_notification(APP_NAME, &notice.message, Some(notice.kind.icon())).await
        {
            log::warn!("Failed to send notification: {}", e);
        }
    }
}

/// Send a system notification.
///
/// # Arguments
/// * `summary` - Notification title
/// * `body` - Notification body text
/// * `icon` - Optional icon name (defaults to "applications-graphics")
pub async fn send_notification(
    summary: &str,
    body: &str,
    icon: Option<&str>,
) -> Result<(), String> {
    let connection = Connection::session()
        .await
        .map_err(|e| format!("Failed to connect to session bus: {}", e))?;

    let proxy = NotificationsProxy::new(&connection)
        .await
        .map_err(|e| format!("Failed to create notifications proxy: {}", e))?;

    let icon = icon.unwrap_or("applications-graphics");
    let hints = HashMap::new();

    proxy
        .notify(APP_NAME, 0, icon, summary, body, vec![], hints, 3000)
        .await
        .map_err(|e| format!("Failed to send notification: {}", e))?;

    Ok(())
}
