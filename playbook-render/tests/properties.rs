use playbook_core::{PostMetadata, derive};
use playbook_render::hero::{hash_string, render_hero};
use playbook_render::sections::generate_sections;
use proptest::prelude::*;
use proptest::test_runner::Config;
use std::collections::HashSet;

#[test]
fn pinned_hashes() {
    assert_eq!(hash_string(""), 0);
    assert_eq!(hash_string("a"), 3007);
    assert_eq!(hash_string("Growth Playbook"), 46_500);
    assert_eq!(hash_string("Email Automation Playbook"), 75_702);
}

proptest! {
    #![proptest_config(Config::with_cases(64))]

    #[test]
    fn hero_is_deterministic(
        topic in "\\PC{0,60}",
        keywords in proptest::collection::vec("\\PC{0,16}", 0..5),
    ) {
        let a = render_hero(&topic, &keywords);
        let b = render_hero(&topic, &keywords);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn hero_is_well_formed(topic in "[A-Za-z &<>]{1,40}", keyword in "[a-z]{1,10}") {
        let hero = render_hero(&topic, &[keyword]);
        prop_assert!(hero.svg.starts_with("<svg "));
        prop_assert!(hero.svg.ends_with("</svg>\n"));
        prop_assert_eq!(hero.svg.matches("<circle").count(), 1);
        prop_assert!(hero.palette < 9);
    }

    #[test]
    fn sections_always_sixteen_unique(
        title in "[A-Za-z ]{1,30}",
        tags in proptest::collection::vec("[a-z]{1,10}", 0..4),
    ) {
        prop_assume!(!title.trim().is_empty());
        let meta = PostMetadata { title, tags, ..PostMetadata::default() };
        let sections = generate_sections(&derive(&meta));
        prop_assert_eq!(sections.len(), 16);
        let ids: HashSet<_> = sections.iter().map(|s| s.id.clone()).collect();
        prop_assert_eq!(ids.len(), 16);
        for section in &sections {
            let unresolved = section.title.contains("${") || section.summary.contains("${");
            prop_assert!(!unresolved, "unresolved placeholder in section {}", section.id);
        }
    }
}
