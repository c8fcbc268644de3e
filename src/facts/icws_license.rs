//! ICWS SDK license presence probe.
//!
//! Answers "is the ICWS SDK license feature enabled for this CIC
//! installation?" by consulting the registry: read the site name from the
//! Directory Services root, derive the site's license key path, and check
//! whether the feature key exists.
//!
//! The probe is a pure read-only query. Every failure mode — missing root,
//! missing `SITE` value, missing license key, access denied — collapses to
//! `false`; the caller sees a single boolean with no error channel.

use super::platform::OsFamily;
use super::types::{Fact, FactValue};
use crate::store::{
    key_exists, read_first_value, AccessOptions, RegistryPath, RegistryStore,
};

/// Stable identifier this fact is registered under.
pub const FACT_NAME: &str = "cic_icws_licensed";

/// Root of the CIC Directory Services tree under HKLM.
const DIRECTORY_SERVICES_ROOT: &str =
    r"SOFTWARE\Wow6432Node\Interactive Intelligence\EIC\Directory Services\Root";

/// Value under the root holding the installation's site name.
const SITE_VALUE: &str = "SITE";

/// License feature key checked for existence.
const ICWS_SDK_FEATURE: &str = "I3_FEATURE_ICWS_SDK";

/// Both opens use the same access mode, 64-bit view included; the site
/// lookup and the license check must observe the same hive view.
fn access() -> AccessOptions {
    AccessOptions::read().with_wow64_64()
}

/// License key path for a site: `<root>\<site>\Production\Licenses\<feature>`.
fn license_path(site: &str) -> RegistryPath {
    RegistryPath::new(DIRECTORY_SERVICES_ROOT)
        .join(site)
        .join("Production")
        .join("Licenses")
        .join(ICWS_SDK_FEATURE)
}

/// Probe the store for the ICWS SDK license feature.
///
/// Returns `true` only when the site name can be read and the derived
/// license key exists. Returns `false` otherwise, including when the store
/// itself cannot be read — absence and failure are indistinguishable here.
pub fn probe(store: &dyn RegistryStore) -> bool {
    let root = RegistryPath::new(DIRECTORY_SERVICES_ROOT);
    let Some(site) = read_first_value(store, &root, SITE_VALUE, access()) else {
        tracing::debug!(%root, "site name unavailable, reporting unlicensed");
        return false;
    };

    let derived = license_path(&site);
    let present = key_exists(store, &derived, access());
    tracing::debug!(site = %site, present, "checked ICWS SDK license key");
    present
}

/// The `cic_icws_licensed` fact. Windows-only by confinement.
pub struct IcwsLicenseFact;

impl Fact for IcwsLicenseFact {
    fn name(&self) -> &str {
        FACT_NAME
    }

    fn confine(&self) -> Option<OsFamily> {
        Some(OsFamily::Windows)
    }

    fn resolve(&self, store: &dyn RegistryStore) -> FactValue {
        FactValue::Bool(probe(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, RegistryValue};

    const ROOT: &str =
        r"SOFTWARE\Wow6432Node\Interactive Intelligence\EIC\Directory Services\Root";

    fn licensed_store(site: &str) -> MemoryStore {
        MemoryStore::new()
            .with_value(ROOT, "SITE", RegistryValue::String(site.into()))
            .with_key(&format!(
                r"{ROOT}\{site}\Production\Licenses\I3_FEATURE_ICWS_SDK"
            ))
    }

    #[test]
    fn missing_root_reports_unlicensed() {
        let store = MemoryStore::new();
        assert!(!probe(&store));
    }

    #[test]
    fn missing_site_value_reports_unlicensed() {
        let store = MemoryStore::new().with_key(ROOT);
        assert!(!probe(&store));
    }

    #[test]
    fn present_license_key_reports_licensed() {
        let store = licensed_store("Site1");
        assert!(probe(&store));
    }

    #[test]
    fn absent_license_key_reports_unlicensed() {
        let store = MemoryStore::new()
            .with_value(ROOT, "SITE", RegistryValue::String("Site1".into()))
            .with_key(&format!(r"{ROOT}\Site1\Production"));
        assert!(!probe(&store));
    }

    #[test]
    fn multi_value_site_uses_first_candidate() {
        // Only the first site name participates in the derived path.
        let store = MemoryStore::new()
            .with_value(
                ROOT,
                "SITE",
                RegistryValue::MultiString(vec!["Primary".into(), "Backup".into()]),
            )
            .with_key(&format!(
                r"{ROOT}\Primary\Production\Licenses\I3_FEATURE_ICWS_SDK"
            ));
        assert!(probe(&store));

        let store_licensed_on_second = MemoryStore::new()
            .with_value(
                ROOT,
                "SITE",
                RegistryValue::MultiString(vec!["Primary".into(), "Backup".into()]),
            )
            .with_key(&format!(
                r"{ROOT}\Backup\Production\Licenses\I3_FEATURE_ICWS_SDK"
            ));
        assert!(!probe(&store_licensed_on_second));
    }

    #[test]
    fn empty_multi_value_site_reports_unlicensed() {
        let store =
            MemoryStore::new().with_value(ROOT, "SITE", RegistryValue::MultiString(vec![]));
        assert!(!probe(&store));
    }

    #[test]
    fn numeric_site_value_reports_unlicensed() {
        let store = MemoryStore::new().with_value(ROOT, "SITE", RegistryValue::Dword(1));
        assert!(!probe(&store));
    }

    #[test]
    fn access_denied_at_root_reports_unlicensed() {
        // Pinned quirk, kept on purpose: a transient access failure is
        // indistinguishable from "not licensed". Callers that need the
        // distinction must use the store API directly.
        let store = licensed_store("Site1").with_denied(ROOT);
        assert!(!probe(&store));
    }

    #[test]
    fn access_denied_at_license_key_reports_unlicensed() {
        let store = licensed_store("Site1").with_denied(&format!(
            r"{ROOT}\Site1\Production\Licenses\I3_FEATURE_ICWS_SDK"
        ));
        assert!(!probe(&store));
    }

    #[test]
    fn repeated_probes_are_idempotent() {
        let store = licensed_store("Site1");
        let first = probe(&store);
        for _ in 0..5 {
            assert_eq!(probe(&store), first);
        }
    }

    #[test]
    fn fact_is_registered_under_stable_name() {
        let fact = IcwsLicenseFact;
        assert_eq!(fact.name(), "cic_icws_licensed");
    }

    #[test]
    fn fact_is_confined_to_windows() {
        let fact = IcwsLicenseFact;
        assert_eq!(fact.confine(), Some(OsFamily::Windows));
    }

    #[test]
    fn fact_resolves_to_boolean() {
        let fact = IcwsLicenseFact;
        let value = fact.resolve(&licensed_store("Site1"));
        assert_eq!(value, FactValue::Bool(true));
    }

    #[test]
    fn license_path_interpolates_site_name() {
        let path = license_path("HQ");
        assert_eq!(
            path.as_str(),
            format!(r"{ROOT}\HQ\Production\Licenses\I3_FEATURE_ICWS_SDK")
        );
    }
}
