use anyhow::Result;
use notify_rust::{Notification, Timeout};
use serde::{Deserialize, Serialize};

use crate::services::celebration::CELEBRATION_SECONDS;

/// Severity of a transient in-window message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// Advisory message for the shell to show briefly. Nothing is retried or kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn missing_field() -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Ошибка".to_string(),
            description: "Заполните все поля".to_string(),
        }
    }

    pub fn invalid_date(input: &str) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Ошибка".to_string(),
            description: format!("Не удалось распознать дату «{}»", input),
        }
    }

    pub fn birthday_added(name: &str) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: "Успешно!".to_string(),
            description: format!("День рождения {} добавлен", name),
        }
    }

    pub fn birthday_removed(name: &str) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: "Удалено".to_string(),
            description: format!("День рождения {} удалён", name),
        }
    }
}

/// Service for displaying system notifications
pub struct NotificationService {
    enabled: bool,
}

impl NotificationService {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if notifications are enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Show the birthday greeting as a system notification
    pub fn show_celebration(&self, subject_name: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        Notification::new()
            .summary("🎉 С Днём рождения! 🎉")
            .body(subject_name)
            .timeout(Timeout::Milliseconds((CELEBRATION_SECONDS * 1000) as u32))
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_texts() {
        let notice = Notice::birthday_added("Ann");
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.description, "День рождения Ann добавлен");

        let notice = Notice::birthday_removed("Ann");
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.description, "День рождения Ann удалён");

        let notice = Notice::missing_field();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.title, "Ошибка");
    }

    #[test]
    fn test_disabled_service_is_silent() {
        let service = NotificationService::new(false);
        assert!(!service.is_enabled());
        assert!(service.show_celebration("Ann").is_ok());
    }
}
