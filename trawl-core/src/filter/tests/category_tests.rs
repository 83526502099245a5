use crate::filter::{CategoryToggles, PathCategory, categorize};

#[test]
fn categorizes_known_paths() {
    let cases = [
        ("/static/webpack-bundles/app.js", PathCategory::Static),
        ("/user_uploads/2/ab/cat.png", PathCategory::Uploads),
        ("/user_avatars/2/abc.png", PathCategory::Avatars),
        ("/avatar/12", PathCategory::Avatars),
        ("/json/events", PathCategory::Events),
        ("/api/v1/events", PathCategory::Events),
        ("/json/events/internal", PathCategory::Events),
        ("/json/typing", PathCategory::Typing),
        ("/api/v1/typing", PathCategory::Typing),
        ("/json/messages", PathCategory::Messages),
        ("/api/v1/messages/123", PathCategory::Messages),
        ("/json/users/me/presence", PathCategory::Presence),
        ("/api/v1/users/me/presence", PathCategory::Presence),
        ("/json/report/error", PathCategory::ErrorReport),
        ("/json/users", PathCategory::Other),
        ("/", PathCategory::Other),
    ];

    for (path, expected) in cases {
        assert_eq!(categorize(path), expected, "{path}");
    }
}

#[test]
fn endpoint_names_must_end_at_a_boundary() {
    assert_eq!(categorize("/json/messages_flags"), PathCategory::Other);
    assert_eq!(categorize("/json/eventsx"), PathCategory::Other);
    assert_eq!(categorize("/json/typing/extra"), PathCategory::Other);
    assert_eq!(categorize("/static"), PathCategory::Other);
}

#[test]
fn default_toggles_show_only_other() {
    let toggles = CategoryToggles::default();

    assert!(toggles.allows(PathCategory::Other));
    for category in [
        PathCategory::Static,
        PathCategory::Uploads,
        PathCategory::Avatars,
        PathCategory::Events,
        PathCategory::Typing,
        PathCategory::Messages,
        PathCategory::Presence,
        PathCategory::ErrorReport,
    ] {
        assert!(!toggles.allows(category), "{category:?}");
    }
}

#[test]
fn exclude_other_hides_uncategorized_paths() {
    let toggles = CategoryToggles {
        messages: true,
        exclude_other: true,
        ..CategoryToggles::default()
    };

    assert!(toggles.allows(PathCategory::Messages));
    assert!(!toggles.allows(PathCategory::Other));
}
