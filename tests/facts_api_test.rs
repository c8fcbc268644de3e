//! End-to-end fact resolution against store fixtures.

use cicfacts::facts::{icws_license, FactRegistry, FactValue, OsFamily};
use cicfacts::store::{MemoryStore, RegistryValue};

const ROOT: &str = r"SOFTWARE\Wow6432Node\Interactive Intelligence\EIC\Directory Services\Root";

fn license_key(site: &str) -> String {
    format!(r"{ROOT}\{site}\Production\Licenses\I3_FEATURE_ICWS_SDK")
}

/// The full scenario, walked through its states by mutating one store:
/// licensed, license key removed, site value removed, root removed.
#[test]
fn license_scenario_walkthrough() {
    let mut store = MemoryStore::new()
        .with_value(ROOT, "SITE", RegistryValue::String("HQ".into()))
        .with_key(&license_key("HQ"));

    assert!(icws_license::probe(&store));

    store.remove_key(&license_key("HQ"));
    assert!(!icws_license::probe(&store));

    let mut store = MemoryStore::new()
        .with_value(ROOT, "SITE", RegistryValue::String("HQ".into()))
        .with_key(&license_key("HQ"));
    store.remove_value(ROOT, "SITE");
    assert!(!icws_license::probe(&store));

    let mut store = MemoryStore::new()
        .with_value(ROOT, "SITE", RegistryValue::String("HQ".into()))
        .with_key(&license_key("HQ"));
    store.remove_key(ROOT);
    assert!(!icws_license::probe(&store));
}

#[test]
fn registry_resolves_fact_on_windows_host() {
    let store = MemoryStore::new()
        .with_value(ROOT, "SITE", RegistryValue::String("HQ".into()))
        .with_key(&license_key("HQ"));

    let registry = FactRegistry::with_builtins();
    let resolved = registry.resolve_all(&store, OsFamily::Windows);

    assert_eq!(
        resolved.get("cic_icws_licensed"),
        Some(&FactValue::Bool(true))
    );
}

#[test]
fn registry_skips_fact_on_unix_host() {
    // The probe would report true against this store, but confinement keeps
    // it from being evaluated at all on a non-Windows host.
    let store = MemoryStore::new()
        .with_value(ROOT, "SITE", RegistryValue::String("HQ".into()))
        .with_key(&license_key("HQ"));

    let registry = FactRegistry::with_builtins();
    let resolved = registry.resolve_all(&store, OsFamily::Unix);

    assert!(resolved.is_empty());
}

#[test]
fn unlicensed_system_resolves_false_not_absent() {
    let store = MemoryStore::new().with_value(ROOT, "SITE", RegistryValue::String("HQ".into()));

    let registry = FactRegistry::with_builtins();
    let resolved = registry.resolve_all(&store, OsFamily::Windows);

    // The fact is still reported, with a false value.
    assert_eq!(
        resolved.get("cic_icws_licensed"),
        Some(&FactValue::Bool(false))
    );
}

#[test]
fn unreadable_store_resolves_false() {
    // A store that denies every read is indistinguishable from an
    // unlicensed system. Pinned behavior: errors collapse into `false`.
    let store = MemoryStore::new()
        .with_value(ROOT, "SITE", RegistryValue::String("HQ".into()))
        .with_key(&license_key("HQ"))
        .with_denied(ROOT);

    let registry = FactRegistry::with_builtins();
    let resolved = registry.resolve_all(&store, OsFamily::Windows);

    assert_eq!(
        resolved.get("cic_icws_licensed"),
        Some(&FactValue::Bool(false))
    );
}

#[test]
fn resolved_facts_serialize_to_json() {
    let store = MemoryStore::new()
        .with_value(ROOT, "SITE", RegistryValue::String("HQ".into()))
        .with_key(&license_key("HQ"));

    let registry = FactRegistry::with_builtins();
    let resolved = registry.resolve_all(&store, OsFamily::Windows);

    let json = serde_json::to_value(&resolved).unwrap();
    assert_eq!(json["cic_icws_licensed"], serde_json::Value::Bool(true));
}
