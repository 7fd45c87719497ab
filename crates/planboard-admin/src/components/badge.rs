//! Cell badges used by column renderers

use leptos::prelude::*;

/// Colour family for a status, category or severity label
pub fn tone_for(label: &str) -> &'static str {
    match label {
        "Completed" | "Low" | "Active" => "green",
        "Scheduled" | "Normal" | "Medium" | "Carer" => "blue",
        "In Progress" | "Senior Carer" | "Team Lead" => "purple",
        "High" | "Late Visit" | "Training Expiry" | "Overtime" => "orange",
        "Missed" | "Critical" | "Complex" | "Missed Visit" | "Safeguarding" | "Incident" => "red",
        "Cancelled" | "Inactive" => "gray",
        "Medication" | "Nurse" => "yellow",
        _ => "gray",
    }
}

pub(crate) fn tone_class(tone: &str) -> &'static str {
    match tone {
        "green" => "bg-green-600/20 text-green-400",
        "blue" => "bg-blue-600/20 text-blue-400",
        "purple" => "bg-purple-600/20 text-purple-400",
        "orange" => "bg-orange-600/20 text-orange-400",
        "red" => "bg-red-600/20 text-red-400",
        "yellow" => "bg-yellow-600/20 text-yellow-400",
        _ => "bg-gray-600/20 text-gray-400",
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] label: String) -> impl IntoView {
    let class = format!(
        "px-2 py-1 text-xs rounded whitespace-nowrap {}",
        tone_class(tone_for(&label))
    );
    view! { <span class=class>{label}</span> }
}

/// Check / cross icon for boolean cells
#[component]
pub fn BoolIcon(value: bool) -> impl IntoView {
    let (class, path, title) = if value {
        ("w-5 h-5 text-green-400", "M5 13l4 4L19 7", "Yes")
    } else {
        ("w-5 h-5 text-gray-500", "M6 18L18 6M6 6l12 12", "No")
    };
    view! {
        <svg class=class fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <title>{title}</title>
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_for_known_labels() {
        assert_eq!(tone_for("Missed"), "red");
        assert_eq!(tone_for("Completed"), "green");
        assert_eq!(tone_for("Medication"), "yellow");
    }

    #[test]
    fn test_unknown_label_is_gray() {
        assert_eq!(tone_for("Pending Review"), "gray");
        assert_eq!(tone_class(tone_for("Pending Review")), "bg-gray-600/20 text-gray-400");
    }
}
