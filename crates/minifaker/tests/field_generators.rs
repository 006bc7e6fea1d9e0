//! Property tests for the random primitives and field generators.
//!
//! Inputs are drawn from seeded generators so every run checks the same
//! cases. The `fake` crate supplies arbitrary names for custom bundles.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use minifaker::random::{self, NumberOptions};
use minifaker::{
    GenerationError, LocaleBundle, LocaleError, LocaleOptions, LocaleRegistry, MacAddressOptions,
    MacAdministration, MacSeparator, MacTransmission, MiniFaker, NameOptions, PhoneOptions,
    SamplingError, WordOptions,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use regex::Regex;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(2026)
}

fn fake_bundle(rng: &mut ChaCha8Rng, size: usize) -> LocaleBundle {
    let first_names: Vec<String> = (0..size).map(|_| FirstName(EN).fake_with_rng(rng)).collect();
    let last_names: Vec<String> = (0..size).map(|_| LastName(EN).fake_with_rng(rng)).collect();
    LocaleBundle::new()
        .with_field("firstNames", first_names)
        .with_field("lastNames", last_names)
}

#[rstest]
fn number_stays_within_bounds(mut rng: ChaCha8Rng) {
    for _ in 0..500 {
        let low: i32 = rng.random_range(-1000..1000);
        let span: i32 = rng.random_range(0..1000);
        let min = f64::from(low);
        let max = f64::from(low + span);

        let value = random::number(&mut rng, NumberOptions::between(min, max));

        assert!((min..=max).contains(&value), "{value} outside [{min}, {max}]");
        assert_eq!(value.fract(), 0.0, "{value} is not an integer");
    }
}

#[rstest]
fn fractional_numbers_stay_within_bounds(mut rng: ChaCha8Rng) {
    let options = NumberOptions::between(-2.5, 2.5).fractional();

    for _ in 0..500 {
        let value = random::number(&mut rng, options);
        assert!((-2.5..=2.5).contains(&value), "{value} outside range");
    }
}

#[rstest]
fn boolean_is_roughly_fair(mut rng: ChaCha8Rng) {
    let trials = 10_000;
    let heads = (0..trials).filter(|_| random::boolean(&mut rng)).count();

    assert!((4_500..=5_500).contains(&heads), "{heads} of {trials} were true");
}

#[rstest]
fn array_element_returns_a_member(mut rng: ChaCha8Rng) {
    let names: Vec<String> = (0..25).map(|_| FirstName(EN).fake_with_rng(&mut rng)).collect();

    for _ in 0..100 {
        let picked = random::array_element(&mut rng, &names).expect("non-empty input");
        assert!(names.contains(picked));
    }
}

#[rstest]
fn array_element_rejects_empty_input(mut rng: ChaCha8Rng) {
    let empty: [String; 0] = [];

    assert_eq!(
        random::array_element(&mut rng, &empty),
        Err(SamplingError::EmptyInput)
    );
}

#[test]
fn array_maps_each_index() {
    assert_eq!(random::array(5, |i| i), [0, 1, 2, 3, 4]);
    assert!(random::array(0, |i| i).is_empty());
}

#[rstest]
fn object_element_returns_a_pair(mut rng: ChaCha8Rng) {
    let object = json!({"a": 1, "b": 2});

    for _ in 0..20 {
        let entry = random::object_element(&mut rng, &object).expect("object input");
        let expected = match entry.key {
            "a" => json!(1),
            "b" => json!(2),
            other => panic!("unexpected key {other}"),
        };
        assert_eq!(entry.value, &expected);
    }
}

#[rstest]
#[case(json!([]), SamplingError::NotAnObject { found: "array" })]
#[case(json!("text"), SamplingError::NotAnObject { found: "string" })]
#[case(json!({}), SamplingError::EmptyInput)]
fn object_element_rejects_non_objects(
    mut rng: ChaCha8Rng,
    #[case] input: serde_json::Value,
    #[case] expected: SamplingError,
) {
    assert_eq!(random::object_element(&mut rng, &input), Err(expected));
}

#[test]
fn locale_generators_need_a_registered_locale() {
    let mut faker = MiniFaker::with_seed(LocaleRegistry::new(), 1);
    let no_default = Err(GenerationError::Locale(LocaleError::NoDefaultLocale));

    assert_eq!(faker.first_name(&NameOptions::default()), no_default);
    assert_eq!(faker.last_name(&LocaleOptions::default()), no_default);
    assert_eq!(faker.city_name(&LocaleOptions::in_locale("fr")), no_default);
    assert_eq!(faker.job_title(&LocaleOptions::default()), no_default);
    assert_eq!(faker.word(&WordOptions::default()), no_default);
    assert_eq!(faker.domain_suffix(&LocaleOptions::default()), no_default);
    assert_eq!(faker.phone_number(&PhoneOptions::default()), no_default);
}

#[rstest]
fn first_registration_drives_first_name(mut rng: ChaCha8Rng) {
    let bundle = fake_bundle(&mut rng, 12);
    let expected = bundle
        .field("firstNames")
        .expect("bundle has first names")
        .to_vec();
    let mut faker = MiniFaker::with_seed(LocaleRegistry::new(), rng.random());
    faker.add_locale("fr", bundle);

    assert_eq!(faker.registry().default_locale(), Some("fr"));
    for _ in 0..50 {
        let name = faker.first_name(&NameOptions::default()).expect("fr has names");
        assert!(expected.contains(&name), "{name} not in bundle");
    }
}

#[rstest]
fn unicast_universal_mac_clears_low_bits(mut rng: ChaCha8Rng) {
    let mut faker = MiniFaker::with_seed(LocaleRegistry::new(), rng.random());
    let options = MacAddressOptions {
        transmission: Some(MacTransmission::Unicast),
        administration: Some(MacAdministration::Uaa),
        ..MacAddressOptions::default()
    };

    for _ in 0..200 {
        let mac = faker.mac_address(&options);
        let first = mac.get(0..2).expect("first octet");
        let octet = u8::from_str_radix(first, 16).expect("hex octet");
        assert_eq!(octet & 0b11, 0, "{mac} has bit 0 or 1 set");
    }
}

#[rstest]
fn dotted_mac_groups_octet_pairs(mut rng: ChaCha8Rng) {
    let mut faker = MiniFaker::with_seed(LocaleRegistry::new(), rng.random());
    let pattern = Regex::new(r"^[0-9a-f]{4}\.[0-9a-f]{4}\.[0-9a-f]{4}$").expect("valid regex");
    let options = MacAddressOptions {
        separator: MacSeparator::Dot,
        ..MacAddressOptions::default()
    };

    for _ in 0..100 {
        let mac = faker.mac_address(&options);
        assert!(pattern.is_match(&mac), "unexpected mac {mac}");
    }
}

#[rstest]
fn phone_number_fills_template(mut rng: ChaCha8Rng) {
    let mut faker = MiniFaker::with_seed(LocaleRegistry::new(), rng.random());
    let pattern = Regex::new(r"^\d{3}-\d{3}$").expect("valid regex");
    let options = PhoneOptions {
        formats: Some(vec!["###-###".to_owned()]),
        ..PhoneOptions::default()
    };

    for _ in 0..100 {
        let number = faker.phone_number(&options).expect("template supplied");
        assert!(pattern.is_match(&number), "unexpected number {number}");
    }
}

#[rstest]
fn same_seed_replays_the_same_values(mut rng: ChaCha8Rng) {
    let bundle = fake_bundle(&mut rng, 30);
    let seed: u64 = rng.random();
    let run = |source: LocaleBundle| {
        let mut faker = MiniFaker::with_seed(LocaleRegistry::with_locale("en", source), seed);
        faker.array(20, |inner, _| inner.name(&NameOptions::default()))
    };

    assert_eq!(run(bundle.clone()), run(bundle));
}
