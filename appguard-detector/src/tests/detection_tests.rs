use std::sync::Arc;

use super::fixtures::{watch_order, watch_registry, FailingHandlers, ScriptedHandlers};
use crate::{AppRegistry, Detector};

#[test]
fn test_single_app_installed() {
    let handlers = Arc::new(ScriptedHandlers::new(&["tiktok"]));
    let detector = Detector::new(watch_registry(), watch_order(), handlers);

    assert_eq!(detector.installed_apps(), vec!["TikTok".to_string()]);
    assert!(detector.has_conflicting_apps());
}

#[test]
fn test_nothing_installed() {
    let handlers = Arc::new(ScriptedHandlers::new(&[]));
    let detector = Detector::new(watch_registry(), watch_order(), handlers);

    assert!(detector.installed_apps().is_empty());
    assert!(!detector.has_conflicting_apps());
}

#[test]
fn test_display_order_preserved() {
    // TikTok's probe answers before YouTube's in registry order; display
    // order still puts YouTube first and omits Instagram entirely.
    let handlers = Arc::new(ScriptedHandlers::new(&["tiktok", "youtube"]));
    let detector = Detector::new(watch_registry(), watch_order(), handlers);

    assert_eq!(
        detector.installed_apps(),
        vec!["YouTube".to_string(), "TikTok".to_string()]
    );
}

#[test]
fn test_alternative_probes_short_circuit() {
    let handlers = Arc::new(ScriptedHandlers::new(&["youtube"]));
    let detector = Detector::new(watch_registry(), watch_order(), handlers.clone());

    assert_eq!(detector.installed_apps(), vec!["YouTube".to_string()]);

    let calls = handlers.calls();
    assert!(calls.contains(&"youtube".to_string()));
    // The second YouTube alternative must never be queried.
    assert!(!calls.contains(&"vnd.youtube".to_string()));
}

#[test]
fn test_all_alternatives_tried_when_none_match() {
    let handlers = Arc::new(ScriptedHandlers::new(&[]));
    let detector = Detector::new(watch_registry(), watch_order(), handlers.clone());

    detector.installed_apps();

    assert_eq!(
        handlers.calls(),
        vec!["youtube", "vnd.youtube", "instagram", "tiktok"]
    );
}

#[test]
fn test_shared_probe_address_reports_both_apps_once() {
    let mut registry = AppRegistry::new();
    registry.insert("First", vec!["shared://".to_string()]);
    registry.insert("Second", vec!["shared://".to_string()]);
    let order = vec!["First".to_string(), "Second".to_string()];

    let handlers = Arc::new(ScriptedHandlers::new(&["shared"]));
    let detector = Detector::new(registry, order, handlers);

    assert_eq!(
        detector.installed_apps(),
        vec!["First".to_string(), "Second".to_string()]
    );
}

#[test]
fn test_malformed_probe_is_skipped() {
    let mut registry = AppRegistry::new();
    registry.insert(
        "TikTok",
        vec!["not a url".to_string(), "tiktok://".to_string()],
    );

    let handlers = Arc::new(ScriptedHandlers::new(&["tiktok"]));
    let detector = Detector::new(registry, vec!["TikTok".to_string()], handlers.clone());

    assert_eq!(detector.installed_apps(), vec!["TikTok".to_string()]);
    // The malformed address never reaches the provider.
    assert_eq!(handlers.calls(), vec!["tiktok"]);
}

#[test]
fn test_app_with_only_malformed_probes_is_never_found() {
    let mut registry = AppRegistry::new();
    registry.insert("Broken", vec!["not a url".to_string()]);

    let handlers = Arc::new(ScriptedHandlers::new(&[]));
    let detector = Detector::new(registry, vec!["Broken".to_string()], handlers.clone());

    assert!(detector.installed_apps().is_empty());
    assert_eq!(handlers.call_count(), 0);
}

#[test]
fn test_provider_failure_treated_as_not_handled() {
    let detector = Detector::new(watch_registry(), watch_order(), Arc::new(FailingHandlers));

    assert!(detector.installed_apps().is_empty());
    assert!(!detector.has_conflicting_apps());
}

#[test]
fn test_found_app_missing_from_display_order_is_dropped() {
    let handlers = Arc::new(ScriptedHandlers::new(&["instagram", "tiktok"]));
    let order = vec!["TikTok".to_string()]; // Instagram intentionally absent
    let detector = Detector::new(watch_registry(), order, handlers);

    assert_eq!(detector.installed_apps(), vec!["TikTok".to_string()]);
}

#[test]
fn test_display_order_entry_without_registry_entry() {
    let handlers = Arc::new(ScriptedHandlers::new(&["tiktok"]));
    let mut order = watch_order();
    order.push("Ghost".to_string());
    let detector = Detector::new(watch_registry(), order, handlers);

    assert_eq!(detector.installed_apps(), vec!["TikTok".to_string()]);
}

#[test]
fn test_empty_registry_detects_nothing() {
    let handlers = Arc::new(ScriptedHandlers::new(&["tiktok"]));
    let detector = Detector::new(AppRegistry::new(), watch_order(), handlers.clone());

    assert!(detector.installed_apps().is_empty());
    assert_eq!(handlers.call_count(), 0);
}
