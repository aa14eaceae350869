use dioxus::prelude::*;

/// Map a record status to its badge class.
///
/// Unknown statuses get the neutral style rather than failing — server
/// responses are not schema-validated.
pub fn status_class(status: &str) -> &'static str {
    match status {
        "new" => "badge badge-blue",
        "in-progress" | "late" | "half-day" => "badge badge-yellow",
        "replied" | "present" | "active" | "published" => "badge badge-green",
        "closed" | "absent" | "inactive" | "archived" => "badge badge-red",
        _ => "badge badge-neutral",
    }
}

/// Colored pill for a status value.
#[component]
pub fn StatusBadge(status: String) -> Element {
    rsx! {
        span {
            class: status_class(&status),
            "{status}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(status_class("new"), "badge badge-blue");
        assert_eq!(status_class("present"), "badge badge-green");
        assert_eq!(status_class("late"), "badge badge-yellow");
        assert_eq!(status_class("absent"), "badge badge-red");
    }

    #[test]
    fn test_unknown_status_is_neutral() {
        assert_eq!(status_class("weird"), "badge badge-neutral");
        assert_eq!(status_class(""), "badge badge-neutral");
    }
}
