use rink_calendar::category::{CATEGORIES, Category, Classifier, category_config};
use rink_calendar::model::event_type::EventType;

#[test]
fn no_home_team_name_is_other() {
    let classifier = Classifier::default();
    assert_eq!(
        classifier.classify(EventType::Session, false, None),
        Category::Other
    );
    assert_eq!(
        classifier.classify(EventType::Game, true, None),
        Category::Other
    );
    assert_eq!(
        classifier.classify(EventType::Session, false, Some("")),
        Category::Other
    );
}

#[test]
fn game_with_visiting_team_precedes_name_patterns() {
    // A youth-named team in a game with a visitor is still league play:
    // the structural rule fires before any name marker is considered.
    let classifier = Classifier::default();
    assert_eq!(
        classifier.classify(EventType::Game, true, Some("Bears U12")),
        Category::AdultLeagueGame
    );
}

#[test]
fn bears_only_without_visiting_team() {
    let classifier = Classifier::default();
    assert_eq!(
        classifier.classify(EventType::Session, false, Some("OIC - Bears U12")),
        Category::Bears
    );
    // With a visitor present the Bears rule is skipped and nothing else
    // matches this name.
    assert_eq!(
        classifier.classify(EventType::Session, true, Some("Bears U12")),
        Category::Other
    );
}

#[test]
fn name_markers_map_to_their_categories() {
    let classifier = Classifier::default();
    let cases = [
        ("OIC - Private Lesson Smith", Category::PrivateHockeyLessons),
        ("OIC - Gretzky Hour", Category::GretzkyHour),
        ("OIC - Public Skate", Category::PublicSkate),
        ("OIC - Drop-In Hockey B", Category::DropIn),
        ("OIC - Drop In Hockey", Category::DropIn),
        ("OIC - Freestyle AM", Category::FigureSkating),
        ("OIC - Figure Skating Club", Category::FigureSkating),
        ("OIC - Stick and Puck", Category::Other),
    ];
    for (name, expected) in cases {
        assert_eq!(
            classifier.classify(EventType::Session, false, Some(name)),
            expected,
            "name: {}",
            name
        );
    }
}

#[test]
fn marker_matching_is_case_sensitive() {
    let classifier = Classifier::default();
    assert_eq!(
        classifier.classify(EventType::Session, false, Some("public skate")),
        Category::Other
    );
}

#[test]
fn classification_is_deterministic() {
    let classifier = Classifier::default();
    let first = classifier.classify(EventType::Game, false, Some("OIC - Drop-In A"));
    let second = classifier.classify(EventType::Game, false, Some("OIC - Drop-In A"));
    assert_eq!(first, second);
}

#[test]
fn category_table_is_ordered_with_other_last() {
    assert_eq!(CATEGORIES.len(), 8);
    assert_eq!(CATEGORIES[0].id, Category::AdultLeagueGame);
    assert_eq!(CATEGORIES[0].id.id(), "adult-league-game");
    assert_eq!(CATEGORIES[CATEGORIES.len() - 1].id, Category::Other);
    assert_eq!(Category::Other.id(), "other");

    let drop_in = category_config(Category::DropIn);
    assert!(drop_in.can_register);
    assert_eq!(drop_in.sports_id, Some(20));

    let league = category_config(Category::AdultLeagueGame);
    assert!(!league.can_register);

    for config in CATEGORIES {
        assert!(!config.name.is_empty());
        assert!(config.color.starts_with('#'));
    }
}
