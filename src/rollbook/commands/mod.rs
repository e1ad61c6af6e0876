use crate::config::RollbookConfig;
use crate::model::{StudentRecord, ThemePreference};
use crate::query::Stats;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod departments;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod sample;
pub mod theme;
pub mod update;
pub mod view;

/// Where rollbook keeps its data and configuration.
#[derive(Debug, Clone)]
pub struct RollbookPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_students: Vec<StudentRecord>,
    pub listed_students: Vec<StudentRecord>,
    pub stats: Option<Stats>,
    pub departments: Vec<String>,
    pub exported: Option<String>,
    pub config: Option<RollbookConfig>,
    pub theme: Option<ThemePreference>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_students(mut self, students: Vec<StudentRecord>) -> Self {
        self.affected_students = students;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<StudentRecord>) -> Self {
        self.listed_students = students;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_departments(mut self, departments: Vec<String>) -> Self {
        self.departments = departments;
        self
    }

    pub fn with_exported(mut self, exported: String) -> Self {
        self.exported = Some(exported);
        self
    }

    pub fn with_config(mut self, config: RollbookConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_theme(mut self, theme: ThemePreference) -> Self {
        self.theme = Some(theme);
        self
    }
}

/// Field values for an edit. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub roll_no: Option<String>,
    pub department: Option<String>,
    pub year: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.roll_no.is_none()
            && self.department.is_none()
            && self.year.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }

    /// Overlays the patch onto `record`'s current values.
    pub fn apply_to(&self, record: &StudentRecord) -> crate::model::StudentInput {
        let current = record.to_input();
        crate::model::StudentInput {
            name: self.name.clone().unwrap_or(current.name),
            roll_no: self.roll_no.clone().unwrap_or(current.roll_no),
            department: self.department.clone().unwrap_or(current.department),
            year: self.year.clone().unwrap_or(current.year),
            email: self.email.clone().unwrap_or(current.email),
            phone: self.phone.clone().unwrap_or(current.phone),
        }
    }
}
