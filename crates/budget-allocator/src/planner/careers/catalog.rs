use crate::planner::domain::CareerProfile;
use serde::{Deserialize, Serialize};

/// Which career tables feed the recommendation engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerCatalog {
    /// Technology, business and finance careers only.
    #[default]
    Core,
    /// Core careers plus skilled trades.
    Extended,
}

impl CareerCatalog {
    pub fn from_key(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "core" | "base" => Some(Self::Core),
            "extended" | "trades" | "all" => Some(Self::Extended),
            _ => None,
        }
    }

    pub(crate) fn profiles(&self) -> impl Iterator<Item = &'static CareerProfile> {
        let trades: &'static [CareerProfile] = match self {
            CareerCatalog::Core => &[],
            CareerCatalog::Extended => SKILLED_TRADES_CAREERS,
        };
        BASE_CAREERS.iter().chain(trades.iter())
    }
}

pub(crate) static BASE_CAREERS: &[CareerProfile] = &[
    CareerProfile {
        field: "Software Engineering",
        average_salary: 120_000,
        growth_rate: "22%",
        description: "Build apps, websites, and software systems",
        requirements: "Coding bootcamp or CS degree",
        time_to_transition: "6-18 months",
        emoji: "💻",
    },
    CareerProfile {
        field: "Data Science",
        average_salary: 115_000,
        growth_rate: "35%",
        description: "Analyze data to drive business decisions",
        requirements: "Statistics/Math background + Python/R",
        time_to_transition: "8-12 months",
        emoji: "📊",
    },
    CareerProfile {
        field: "Cloud Architecture",
        average_salary: 140_000,
        growth_rate: "28%",
        description: "Design and manage cloud infrastructure",
        requirements: "AWS/Azure certifications",
        time_to_transition: "6-12 months",
        emoji: "☁️",
    },
    CareerProfile {
        field: "Cybersecurity",
        average_salary: 110_000,
        growth_rate: "31%",
        description: "Protect organizations from digital threats",
        requirements: "Security certifications (CISSP, CEH)",
        time_to_transition: "6-18 months",
        emoji: "🔒",
    },
    CareerProfile {
        field: "Product Management",
        average_salary: 125_000,
        growth_rate: "19%",
        description: "Guide product strategy and development",
        requirements: "Business experience + tech knowledge",
        time_to_transition: "3-12 months",
        emoji: "🚀",
    },
    CareerProfile {
        field: "Digital Marketing",
        average_salary: 85_000,
        growth_rate: "25%",
        description: "Drive online growth and customer acquisition",
        requirements: "Google/Facebook certifications",
        time_to_transition: "3-6 months",
        emoji: "📱",
    },
    CareerProfile {
        field: "UX/UI Design",
        average_salary: 95_000,
        growth_rate: "24%",
        description: "Design user-friendly digital experiences",
        requirements: "Design portfolio + tools (Figma, Adobe)",
        time_to_transition: "6-12 months",
        emoji: "🎨",
    },
    CareerProfile {
        field: "Financial Planning",
        average_salary: 90_000,
        growth_rate: "15%",
        description: "Help clients manage wealth and investments",
        requirements: "CFP certification + licenses",
        time_to_transition: "12-24 months",
        emoji: "💰",
    },
    CareerProfile {
        field: "Healthcare Technology",
        average_salary: 105_000,
        growth_rate: "32%",
        description: "Improve healthcare through technology",
        requirements: "Healthcare + tech background",
        time_to_transition: "12-18 months",
        emoji: "🏥",
    },
    CareerProfile {
        field: "Renewable Energy",
        average_salary: 95_000,
        growth_rate: "52%",
        description: "Build sustainable energy solutions",
        requirements: "Engineering or environmental science",
        time_to_transition: "12-24 months",
        emoji: "🌱",
    },
    CareerProfile {
        field: "AI/Machine Learning Engineer",
        average_salary: 150_000,
        growth_rate: "40%",
        description: "Build intelligent systems and AI applications",
        requirements: "Python, ML frameworks, statistics background",
        time_to_transition: "8-18 months",
        emoji: "🤖",
    },
    CareerProfile {
        field: "AI Product Manager",
        average_salary: 135_000,
        growth_rate: "35%",
        description: "Guide AI product strategy and development",
        requirements: "Business experience + AI/ML knowledge",
        time_to_transition: "6-12 months",
        emoji: "🧠",
    },
];

pub(crate) static SKILLED_TRADES_CAREERS: &[CareerProfile] = &[
    CareerProfile {
        field: "Electrician",
        average_salary: 85_000,
        growth_rate: "8%",
        description: "Install, maintain, and repair electrical systems in homes and businesses",
        requirements: "Trade school or apprenticeship program",
        time_to_transition: "6-24 months",
        emoji: "⚡",
    },
    CareerProfile {
        field: "Plumber",
        average_salary: 78_000,
        growth_rate: "15%",
        description: "Install and repair water, gas, and drainage systems",
        requirements: "Trade school or apprenticeship program",
        time_to_transition: "6-24 months",
        emoji: "🔧",
    },
    CareerProfile {
        field: "HVAC Technician",
        average_salary: 72_000,
        growth_rate: "13%",
        description: "Install and maintain heating, ventilation, and air conditioning systems",
        requirements: "HVAC certification program",
        time_to_transition: "6-18 months",
        emoji: "🌡️",
    },
    CareerProfile {
        field: "Home Inspector",
        average_salary: 68_000,
        growth_rate: "5%",
        description: "Examine properties for safety, structural, and system issues",
        requirements: "Home inspection certification",
        time_to_transition: "3-6 months",
        emoji: "🏠",
    },
    CareerProfile {
        field: "Carpenter",
        average_salary: 65_000,
        growth_rate: "8%",
        description: "Build, install, and repair structures and fixtures made of wood",
        requirements: "Trade school or apprenticeship",
        time_to_transition: "6-18 months",
        emoji: "🔨",
    },
    CareerProfile {
        field: "Welder",
        average_salary: 70_000,
        growth_rate: "8%",
        description: "Join metal parts using specialized welding equipment",
        requirements: "Welding certification program",
        time_to_transition: "3-12 months",
        emoji: "🔥",
    },
    CareerProfile {
        field: "Automotive Technician",
        average_salary: 58_000,
        growth_rate: "4%",
        description: "Diagnose and repair vehicle mechanical and electrical systems",
        requirements: "Automotive technology program",
        time_to_transition: "6-18 months",
        emoji: "🚗",
    },
    CareerProfile {
        field: "Solar Panel Installer",
        average_salary: 75_000,
        growth_rate: "63%",
        description: "Install and maintain solar energy systems on rooftops and ground mounts",
        requirements: "Solar installation certification",
        time_to_transition: "3-9 months",
        emoji: "☀️",
    },
    CareerProfile {
        field: "Elevator Technician",
        average_salary: 95_000,
        growth_rate: "7%",
        description: "Install, maintain, and repair elevators, escalators, and moving walkways",
        requirements: "Elevator technician apprenticeship",
        time_to_transition: "12-48 months",
        emoji: "🏢",
    },
    CareerProfile {
        field: "Dental Hygienist",
        average_salary: 82_000,
        growth_rate: "11%",
        description: "Clean teeth, examine patients for oral diseases, and provide preventive care",
        requirements: "Associate degree in dental hygiene",
        time_to_transition: "24-36 months",
        emoji: "🦷",
    },
];
