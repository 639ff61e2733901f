use quote_engine::{
    Applicant, Bracket, BracketRegistry, MenuChoice, PricingTier, QuoteEngine, QuoteError,
    DEFAULT_CURRENCY,
};

fn worked_example_engine() -> QuoteEngine {
    QuoteEngine::with_brackets(
        DEFAULT_CURRENCY,
        vec![Bracket::new(18, 25, 100.0), Bracket::new(26, 40, 80.0)],
    )
}

#[test]
fn test_worked_example_quotes() {
    let engine = worked_example_engine();

    let quotes = engine.quote_all(&Applicant::new("RAB-123", 30, "car"));
    assert_eq!(quotes[0].0, PricingTier::Standard);
    assert_eq!(quotes[0].1.unwrap().amount, 80.0);
    assert_eq!(quotes[1].0, PricingTier::Premium);
    assert_eq!(quotes[1].1.unwrap().amount, 120.0);

    let no_match = engine.quote_all(&Applicant::new("RAB-124", 99, "truck"));
    assert!(no_match.iter().all(|(_, q)| q.is_none()));
}

#[test]
fn test_bracket_matches_exactly_its_inclusive_range() {
    let mut registry = BracketRegistry::new();
    registry.add(Bracket::new(20, 30, 55.0));

    for age in 0..100 {
        let matched = registry.find_match(age).is_some();
        assert_eq!(matched, (20..=30).contains(&age), "age {}", age);
    }
}

#[test]
fn test_premium_is_always_one_and_a_half_times_standard() {
    let engine = worked_example_engine();

    for age in 18..=40 {
        let applicant = Applicant::new("RAB-200", age, "car");
        let quotes = engine.quote_all(&applicant);
        match (&quotes[0].1, &quotes[1].1) {
            (Some(standard), Some(premium)) => {
                assert_eq!(premium.amount, standard.amount * 1.5)
            }
            (None, None) => {}
            _ => panic!("tiers disagreed on match for age {}", age),
        }
    }
}

#[test]
fn test_remove_then_list_preserves_remaining_order() {
    let mut engine = QuoteEngine::with_brackets(
        DEFAULT_CURRENCY,
        vec![
            Bracket::new(18, 25, 100.0),
            Bracket::new(26, 40, 80.0),
            Bracket::new(41, 65, 120.0),
        ],
    );

    engine.remove_bracket(1).unwrap();

    let ranges: Vec<(u32, u32)> = engine
        .brackets()
        .iter()
        .map(|b| (b.min_age, b.max_age))
        .collect();
    assert_eq!(ranges, vec![(18, 25), (41, 65)]);
}

#[test]
fn test_out_of_range_remove_is_an_error_and_a_no_op() {
    let mut engine = worked_example_engine();

    let err = engine.remove_bracket(5).unwrap_err();
    assert!(matches!(
        err,
        QuoteError::IndexOutOfRange { index: 5, len: 2 }
    ));
    assert_eq!(engine.brackets().len(), 2);
}

#[test]
fn test_single_registry_keeps_tiers_in_sync_through_edits() {
    let mut engine = QuoteEngine::new(DEFAULT_CURRENCY);
    let applicant = Applicant::new("RAB-300", 22, "car");

    assert!(engine.quote_all(&applicant).iter().all(|(_, q)| q.is_none()));

    engine.add_bracket(Bracket::new(18, 25, 100.0));
    let quotes = engine.quote_all(&applicant);
    assert_eq!(quotes[0].1.unwrap().amount, 100.0);
    assert_eq!(quotes[1].1.unwrap().amount, 150.0);

    engine.remove_bracket(0).unwrap();
    assert!(engine.quote_all(&applicant).iter().all(|(_, q)| q.is_none()));
}

#[test]
fn test_menu_choices_map_to_the_five_options() {
    assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddBracket));
    assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::RemoveBracket));
    assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::ListBrackets));
    assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Quote));
    assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::parse("9"), None);
}
