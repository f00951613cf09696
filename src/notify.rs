//! Toast notifications produced by form submissions.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: NoticeLevel,
    pub message: String,
}

/// Notifications queued for the next render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn success(&mut self, message: impl Into<String>) {
        self.items.push(Notification { level: NoticeLevel::Success, message: message.into() });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.items.push(Notification { level: NoticeLevel::Error, message: message.into() });
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn count(&self, level: NoticeLevel) -> usize {
        self.items.iter().filter(|n| n.level == level).count()
    }
}

impl IntoIterator for Notifications {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
