//! Common types used across the site

use serde::{Deserialize, Serialize};

/// A language offered by the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

/// A slide of the services carousel
///
/// Titles and descriptions are stored as translation keys and resolved
/// at render time, so the same slide list serves every language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSlide {
    pub id: String,
    pub title_key: String,
    pub description_key: String,
    /// Icon identifier, passed through to the markup unchanged
    pub icon: String,
    /// Background image URL
    pub image: String,
    /// Gradient style token applied over the image
    pub bg_style: String,
}

impl ServiceSlide {
    pub fn new(id: &str, key: &str, icon: &str, bg_style: &str, image: &str) -> Self {
        Self {
            id: id.to_string(),
            title_key: key.to_string(),
            description_key: format!("{}Desc", key),
            icon: icon.to_string(),
            image: image.to_string(),
            bg_style: bg_style.to_string(),
        }
    }

    /// The nine services shown on the site, in display order
    pub fn catalog() -> Vec<ServiceSlide> {
        vec![
            Self::new("1", "customerService", "PhoneIcon", "from-purple-500/90 to-indigo-600/90",
                "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80"),
            Self::new("2", "technicalSupport", "ToolIcon", "from-blue-500/90 to-cyan-600/90",
                "https://images.unsplash.com/photo-1581092921461-eab62e97a780?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80"),
            Self::new("3", "crmManagement", "UserCheckIcon", "from-green-500/90 to-emerald-600/90",
                "https://images.unsplash.com/photo-1552664730-d307ca884978?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80"),
            Self::new("4", "salesSupport", "ShoppingCartIcon", "from-orange-500/90 to-red-600/90",
                "https://images.unsplash.com/photo-1556745757-8d76bdb6984b?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80"),
            Self::new("5", "appointmentSupport", "CalendarIcon", "from-pink-500/90 to-rose-600/90",
                "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80"),
            Self::new("6", "surveysMarketResearch", "BarChartIcon", "from-violet-500/90 to-purple-600/90",
                "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80"),
            Self::new("7", "orderProcessing", "TruckIcon", "from-teal-500/90 to-green-600/90",
                "https://images.unsplash.com/photo-1566576912321-d58ddd7a6088?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80"),
            Self::new("8", "contentModeration", "ShieldCheckIcon", "from-blue-600/90 to-indigo-700/90",
                "https://images.unsplash.com/photo-1504384764586-bb4cdc1707b0?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80"),
            Self::new("9", "backOfficeServices", "FileTextIcon", "from-indigo-500/90 to-purple-600/90",
                "https://images.unsplash.com/photo-1497215728101-856f4ea42174?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80"),
        ]
    }
}

/// An open position listed in the careers section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosition {
    pub id: String,
    pub title_key: String,
    pub description_key: String,
    pub requirement_keys: Vec<String>,
}

impl JobPosition {
    pub fn catalog() -> Vec<JobPosition> {
        vec![
            JobPosition {
                id: "1".to_string(),
                title_key: "customerServicePosition".to_string(),
                description_key: "customerServiceRoleDesc".to_string(),
                requirement_keys: vec![
                    "albanianEnglishRequired".to_string(),
                    "communicationSkills".to_string(),
                    "customerServiceExp".to_string(),
                    "shiftWork".to_string(),
                ],
            },
            JobPosition {
                id: "2".to_string(),
                title_key: "technicalSupportPosition".to_string(),
                description_key: "technicalSupportRoleDesc".to_string(),
                requirement_keys: vec![
                    "itDegree".to_string(),
                    "technicalKnowledge".to_string(),
                    "problemSolving".to_string(),
                    "technicalSupportExp".to_string(),
                ],
            },
        ]
    }
}

/// A partner company in the showcase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub name_key: String,
    pub description_key: String,
    pub logo: String,
    pub icon: String,
}

impl Partner {
    fn new(prefix: &str, icon: &str, logo: &str) -> Self {
        Self {
            name_key: format!("{}Title", prefix),
            description_key: format!("{}Desc", prefix),
            logo: logo.to_string(),
            icon: icon.to_string(),
        }
    }

    pub fn catalog() -> Vec<Partner> {
        const BUILDING: &str = "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80";
        vec![
            Self::new("vodafone", "Globe",
                "https://images.unsplash.com/photo-1611162617474-5b21e879e113?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80"),
            Self::new("sigal", "Shield", BUILDING),
            Self::new("credins", "Building2", BUILDING),
            Self::new("balfin", "Briefcase", BUILDING),
        ]
    }
}

/// A headline figure (e.g. "98%" satisfaction) shown in the about section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label_key: &'static str,
}

pub const ABOUT_STATS: [Stat; 4] = [
    Stat { icon: "Users", value: "10+", label_key: "yearsExperience" },
    Stat { icon: "Target", value: "98%", label_key: "clientSatisfaction" },
    Stat { icon: "Award", value: "24/7", label_key: "support247" },
    Stat { icon: "TrendingUp", value: "50+", label_key: "activeClients" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_catalog_order() {
        let slides = ServiceSlide::catalog();
        assert_eq!(slides.len(), 9);
        assert_eq!(slides[0].title_key, "customerService");
        assert_eq!(slides[0].description_key, "customerServiceDesc");
        assert_eq!(slides[8].icon, "FileTextIcon");

        let ids: Vec<_> = slides.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn test_partner_keys() {
        let partners = Partner::catalog();
        assert_eq!(partners[1].name_key, "sigalTitle");
        assert_eq!(partners[1].description_key, "sigalDesc");
    }
}
