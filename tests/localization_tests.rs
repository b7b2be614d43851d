// SPDX-License-Identifier: PMPL-1.0-or-later

//! Resolver and selector behaviour through the public API

use ward_health::i18n::{self, format_template, keys, I18nError, Lang};
use ward_health::indicators::{column_for, Indicator, LabelCache};
use ward_health::lint::{lint_catalog, required_keys};
use ward_health::session::Session;

#[test]
fn test_every_required_key_resolves_in_every_language() {
    for lang in Lang::all() {
        for key in required_keys() {
            assert!(i18n::has_key(*lang, key), "{} is missing `{}`", lang, key);
        }
    }
    assert!(lint_catalog().unwrap().is_clean());
}

#[test]
fn test_unknown_key_falls_back_to_itself() {
    for lang in Lang::all() {
        assert_eq!(i18n::t(*lang, "not_a_key").unwrap(), "not_a_key");
    }
}

#[test]
fn test_placeholder_substitution() {
    assert_eq!(
        i18n::resolve(Lang::En, keys::ERR_FILE_NOT_FOUND, &[("path", "x.csv")]).unwrap(),
        "Error: The file x.csv was not found."
    );
    assert_eq!(
        format_template("{{literal}} {name}", &[("name", "ok")]).unwrap(),
        "{literal} ok"
    );
    let err = i18n::resolve(Lang::Ne, keys::WARD_DETAIL_HEADER, &[("other", "x")]).unwrap_err();
    assert_eq!(
        err,
        I18nError::MissingPlaceholder {
            template: "वार्ड विवरण: {ward}".into(),
            name: "ward".into()
        }
    );
}

#[test]
fn test_display_label_round_trip() {
    let mut cache = LabelCache::new();
    for lang in Lang::all() {
        for indicator in Indicator::all() {
            let label = indicator.label(*lang).unwrap();
            let key = cache.canonical_key_for_display(&label, *lang).unwrap();
            assert_eq!(key, Some(indicator.canonical_key()));
            assert_eq!(column_for(indicator.canonical_key()), Some(indicator.column()));
        }
    }
}

#[test]
fn test_sessions_do_not_share_language() {
    let mut english = Session::new(Lang::En);
    let mut nepali = Session::new(Lang::Ne);

    assert_eq!(english.t(keys::ALL_WARDS).unwrap(), "All Wards");
    assert_eq!(nepali.t(keys::ALL_WARDS).unwrap(), "सबै वार्डहरू");
    assert_eq!(
        nepali
            .canonical_key_for_display("औसत आय (USD)", Lang::Ne)
            .unwrap(),
        Some("Average Income (USD)")
    );
    assert_eq!(
        english.indicator_for_display("औसत आय (USD)").unwrap(),
        None,
        "Nepali label must not resolve in an English session"
    );
}
