use serde::Serialize;

use crate::error::CoreError;

/// Two-stop accent gradient used when a hospital card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accent {
    pub from: &'static str,
    pub to: &'static str,
}

/// A simulated facility. The catalog is fixed; selection hands out
/// `&'static` references and nothing ever mutates an entry.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Hospital {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

pub static HOSPITALS: [Hospital; 5] = [
    Hospital {
        name: "Alpha",
        kind: "Trauma Center",
        description: "High Volume, High Urgency",
        icon: "🏥",
        accent: Accent { from: "red", to: "orange" },
    },
    Hospital {
        name: "Beta",
        kind: "Suburban Community",
        description: "Moderate Volume",
        icon: "🏨",
        accent: Accent { from: "blue", to: "cyan" },
    },
    Hospital {
        name: "Gamma",
        kind: "Small Facility",
        description: "Low Volume, Specialized",
        icon: "🏩",
        accent: Accent { from: "emerald", to: "teal" },
    },
    Hospital {
        name: "Delta",
        kind: "Regional/Busy",
        description: "High Occupancy",
        icon: "🏪",
        accent: Accent { from: "purple", to: "indigo" },
    },
    Hospital {
        name: "Epsilon",
        kind: "Teaching Hospital",
        description: "Good Staffing",
        icon: "🎓",
        accent: Accent { from: "amber", to: "yellow" },
    },
];

/// Look up a hospital by 1-based catalog position or case-insensitive name.
pub fn find_hospital(query: &str) -> Result<&'static Hospital, CoreError> {
    let query = query.trim();

    if let Ok(position) = query.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|i| HOSPITALS.get(i))
            .ok_or_else(|| CoreError::UnknownHospital(query.to_string()));
    }

    HOSPITALS
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(query))
        .ok_or_else(|| CoreError::UnknownHospital(query.to_string()))
}
