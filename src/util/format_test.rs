use super::*;

#[test]
fn badge_colors_follow_ioc_type() {
    assert_eq!(type_badge_color("ip"), "success");
    assert_eq!(type_badge_color("domain"), "warning");
    assert_eq!(type_badge_color("url"), "info");
}

#[test]
fn unknown_types_get_secondary_badge() {
    assert_eq!(type_badge_color("hash"), "secondary");
    assert_eq!(type_badge_color(""), "secondary");
    assert_eq!(type_badge_color("IP"), "secondary");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn format_date_time_is_identity_without_browser() {
    assert_eq!(format_date_time("2024-05-01 10:11:12"), "2024-05-01 10:11:12");
    assert_eq!(format_date_time("not a date"), "not a date");
}
