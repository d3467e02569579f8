//! Property tests for the embed factory's observable contract.

use pageweave::component::asciinema::{AsciinemaCast, CastOptions, DEFAULT_CAST_ID};
use pageweave::component::{Component, PageContext};
use proptest::prelude::*;

proptest! {
    /// For any valid options record, the rendered element id equals the
    /// explicit `castId`.
    #[test]
    fn element_id_matches_options(
        path in "[a-z0-9/._-]{1,48}",
        id in "[a-z][a-z0-9-]{0,24}",
    ) {
        let cast = AsciinemaCast::new(Some(CastOptions {
            cast_path: path.clone(),
            cast_id: Some(id.clone()),
        }))
        .unwrap();

        let markup = cast.render(&PageContext::default());
        let id_attr = format!(r#"id="{id}""#);
        prop_assert!(markup.contains(&id_attr));
        prop_assert!(markup.contains(r#"class="asciinema-cast""#));

        let script = cast.after_dom().unwrap();
        prop_assert!(script.contains(&path));
        prop_assert!(script.contains(&id));
    }

    /// Omitting `castId` always resolves to the literal default id.
    #[test]
    fn omitted_id_resolves_to_default(path in "[a-z0-9/._-]{1,48}") {
        let cast = AsciinemaCast::new(Some(CastOptions {
            cast_path: path.clone(),
            cast_id: None,
        }))
        .unwrap();

        prop_assert_eq!(cast.id(), DEFAULT_CAST_ID);

        let script = cast.after_dom().unwrap();
        prop_assert!(script.contains(DEFAULT_CAST_ID));
        prop_assert!(script.contains(&path));
    }

    /// YAML round-trip preserves the options record exactly.
    #[test]
    fn options_yaml_round_trip(
        path in "[a-z0-9/._-]{1,48}",
        id in proptest::option::of("[a-z][a-z0-9-]{0,24}"),
    ) {
        let opts = CastOptions { cast_path: path, cast_id: id };
        let yaml = serde_yaml::to_string(&opts).unwrap();
        let parsed = CastOptions::from_yaml_str(&yaml).unwrap();
        prop_assert_eq!(opts, parsed);
    }
}
