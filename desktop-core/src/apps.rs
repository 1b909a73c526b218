//! App catalog - the fixed set of windows the dock can open

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DesktopError;

/// Catalog id; one dock item and at most one window per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl AppId {
    /// Dock order.
    pub const ALL: [AppId; 5] = [
        AppId::About,
        AppId::Experience,
        AppId::Skills,
        AppId::Projects,
        AppId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppId::About => "about",
            AppId::Experience => "experience",
            AppId::Skills => "skills",
            AppId::Projects => "projects",
            AppId::Contact => "contact",
        }
    }

    pub fn definition(&self) -> AppDefinition {
        match self {
            AppId::About => AppDefinition {
                id: AppId::About,
                name: "Sobre Mim",
                title: "Sobre Mim",
                icon: "👤",
                color: "#3b82f6",
                default_width: 500,
                default_height: 600,
            },
            AppId::Experience => AppDefinition {
                id: AppId::Experience,
                name: "Experiências",
                title: "Experiências",
                icon: "💼",
                color: "#eab308",
                default_width: 500,
                default_height: 600,
            },
            AppId::Skills => AppDefinition {
                id: AppId::Skills,
                name: "Skills",
                title: "Terminal",
                icon: "⚡",
                color: "#000000",
                default_width: 600,
                default_height: 400,
            },
            AppId::Projects => AppDefinition {
                id: AppId::Projects,
                name: "Projetos",
                title: "Projetos",
                icon: "🛠️",
                color: "#a855f7",
                default_width: 500,
                default_height: 600,
            },
            AppId::Contact => AppDefinition {
                id: AppId::Contact,
                name: "Contato",
                title: "Contato",
                icon: "📬",
                color: "#ef4444",
                default_width: 500,
                default_height: 600,
            },
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppId {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppId::ALL
            .into_iter()
            .find(|app| app.as_str() == s)
            .ok_or_else(|| DesktopError::UnknownApp(s.to_string()))
    }
}

/// Static description of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDefinition {
    pub id: AppId,
    /// Dock tooltip
    pub name: &'static str,
    /// Window title bar text
    pub title: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub default_width: i32,
    pub default_height: i32,
}

pub fn core_apps() -> Vec<AppDefinition> {
    AppId::ALL.iter().map(AppId::definition).collect()
}

/// Which panel a window renders, resolved from its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowContent {
    About,
    Experience,
    Skills,
    Projects,
    Contact,
    Unknown(String),
}

impl WindowContent {
    pub fn resolve(app_id: &str) -> Self {
        match app_id.parse::<AppId>() {
            Ok(app) => app.into(),
            Err(_) => WindowContent::Unknown(app_id.to_string()),
        }
    }
}

impl From<AppId> for WindowContent {
    fn from(app: AppId) -> Self {
        match app {
            AppId::About => WindowContent::About,
            AppId::Experience => WindowContent::Experience,
            AppId::Skills => WindowContent::Skills,
            AppId::Projects => WindowContent::Projects,
            AppId::Contact => WindowContent::Contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_round_trip_through_strings() {
        for app in AppId::ALL {
            assert_eq!(app.as_str().parse::<AppId>(), Ok(app));
        }
    }

    #[test]
    fn unknown_id_is_an_error() {
        let err = "trash".parse::<AppId>().expect_err("must fail");
        assert_eq!(err, DesktopError::UnknownApp("trash".to_string()));
    }

    #[test]
    fn core_apps_follow_dock_order() {
        let ids: Vec<_> = core_apps().iter().map(|app| app.id.as_str()).collect();
        assert_eq!(ids, ["about", "experience", "skills", "projects", "contact"]);
    }

    #[test]
    fn skills_window_is_the_wide_terminal() {
        let skills = AppId::Skills.definition();
        assert_eq!(skills.title, "Terminal");
        assert_eq!((skills.default_width, skills.default_height), (600, 400));

        let about = AppId::About.definition();
        assert_eq!((about.default_width, about.default_height), (500, 600));
    }

    #[test]
    fn unknown_content_falls_back() {
        assert_eq!(WindowContent::resolve("projects"), WindowContent::Projects);
        assert_eq!(
            WindowContent::resolve("games"),
            WindowContent::Unknown("games".to_string())
        );
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&AppId::Experience).unwrap();
        assert_eq!(json, "\"experience\"");
    }
}
