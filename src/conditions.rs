//! Condition description -> display icon and localized label
//!
//! The API returns a small fixed set of English condition descriptions;
//! the UI shows a glyph and a Nepali label instead. The lookup is total:
//! anything unmapped falls through to a default rather than failing.

/// Display data for one condition description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConditionDisplay {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const CLOUDS: ConditionDisplay = ConditionDisplay {
    icon: "☁",
    label: "बादल",
};
pub const RAIN: ConditionDisplay = ConditionDisplay {
    icon: "🌧",
    label: "बर्सात",
};
pub const SNOW: ConditionDisplay = ConditionDisplay {
    icon: "❄",
    label: "बर्फबारी",
};
pub const CLEAR: ConditionDisplay = ConditionDisplay {
    icon: "☀",
    label: "स्पष्ट",
};

/// Fallback for descriptions outside the known set.
pub const DEFAULT: ConditionDisplay = ConditionDisplay {
    icon: "🌡",
    label: "मौसम",
};

/// Map a condition description to its display data.
pub fn condition_display(description: &str) -> ConditionDisplay {
    match description {
        "few clouds" | "scattered clouds" | "broken clouds" | "overcast clouds" => CLOUDS,
        "light rain" | "moderate rain" | "heavy intensity rain" => RAIN,
        "light snow" | "moderate snow" | "heavy snow" => SNOW,
        "clear sky" => CLEAR,
        _ => DEFAULT,
    }
}

/// Convert an API temperature (kelvin) to whole-degree celsius.
pub fn kelvin_to_celsius(kelvin: f64) -> i32 {
    (kelvin - 273.15).round() as i32
}
