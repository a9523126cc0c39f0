//! End-to-end generation tests: resources in, events out.
//!
//! Exercises the full pipeline -- resource text, template store, catalog,
//! seed derivation, instantiation, rollover -- against the documented
//! behavioral properties.

#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

use std::collections::BTreeMap;

use gazette_content::{ContentCatalog, ItemInfo, TemplateStore};
use gazette_gen::{EventBoard, EventGenerator};
use gazette_types::{
    Cadence, GameDate, ItemCategory, ItemId, NO_AFFECTED_ITEM, Season, SessionId,
};

const MONTHLY: &str = "\
# monthly headlines
%2 futures rally across the valley
Earthquake of magnitude %0 rattles %1
Bumper %5 season declared
";

const BIWEEKLY: &str = "\
%3 vein discovered near %1
%8 exports doubled, %4 merchants affected
";

const WEEKLY: &str = "\
%6+7 catch report: record hauls
%2 costs gold near %6
Nothing moves at the %1 market
";

fn build_generator() -> EventGenerator {
    let store = TemplateStore::from_resources(MONTHLY, BIWEEKLY, WEEKLY);

    let table = [
        (24, "Parsnip", 35),
        (400, "Strawberry", 120),
        (60, "Emerald", 250),
        (78, "Cave Carrot", 25),
        (145, "Sunfish", 30),
        (149, "Octopus", 150),
        (424, "Cheese", 230),
        (16, "Wild Horseradish", 50),
    ];
    let mut items = BTreeMap::new();
    for (id, name, price) in table {
        items.insert(
            ItemId::new(id),
            ItemInfo {
                name: name.to_owned(),
                price,
            },
        );
    }

    let mut categories = BTreeMap::new();
    categories.insert(ItemCategory::Crop, vec![ItemId::new(24), ItemId::new(400)]);
    categories.insert(ItemCategory::Mineral, vec![ItemId::new(60)]);
    categories.insert(ItemCategory::Foraged, vec![ItemId::new(16), ItemId::new(78)]);
    categories.insert(ItemCategory::RiverFish, vec![ItemId::new(145)]);
    categories.insert(ItemCategory::OceanFish, vec![ItemId::new(149)]);
    categories.insert(ItemCategory::Artisan, vec![ItemId::new(424)]);

    let locations = vec![
        "The Docks".to_owned(),
        "Old Mill".to_owned(),
        "Town Square".to_owned(),
    ];

    let catalog = ContentCatalog::new(items, categories, locations);
    EventGenerator::new(store, catalog).unwrap()
}

fn date(year: u32, season: Season, day: u8) -> GameDate {
    GameDate::new(year, season, day).unwrap()
}

#[test]
fn a_full_year_replays_bit_identically() {
    let generator = build_generator();
    let session = SessionId::new(314_159);

    let run = |generator: &EventGenerator| {
        let mut board = EventBoard::new();
        let mut issued = Vec::new();
        let mut current = date(1, Season::Spring, 1);
        for _ in 0..112 {
            for rollover in board.advance(generator, current, session) {
                issued.push(rollover.issued);
            }
            current = current.next_day().unwrap();
        }
        issued
    };

    let first = run(&generator);
    let second = run(&generator);
    assert_eq!(first, second);
    // 4 monthly + 8 biweekly + 16 weekly over one year.
    assert_eq!(first.len(), 28);
}

#[test]
fn percent_change_domain_holds_across_a_year_of_events() {
    let generator = build_generator();
    let session = SessionId::new(9);
    let mut current = date(1, Season::Spring, 1);
    for _ in 0..112 {
        for cadence in Cadence::ALL {
            let event = generator.generate(cadence, current, session);
            assert_eq!(event.percent_change.rem_euclid(5), 0, "{event:?}");
            assert!((-25..=25).contains(&event.percent_change), "{event:?}");
        }
        current = current.next_day().unwrap();
    }
}

#[test]
fn price_round_trip_is_exact_for_every_generated_event() {
    let generator = build_generator();
    let session = SessionId::new(1);
    let mut current = date(1, Season::Spring, 1);
    for _ in 0..112 {
        for cadence in Cadence::ALL {
            let event = generator.generate(cadence, current, session);
            let expected = i64::from(event.original_price)
                + (i64::from(event.original_price) * i64::from(event.percent_change))
                    .div_euclid(100);
            assert_eq!(i64::from(event.new_price()), expected, "{event:?}");
        }
        current = current.next_day().unwrap();
    }
}

#[test]
fn affected_item_is_always_consistent_with_the_headline_kind() {
    let generator = build_generator();
    let session = SessionId::new(31);
    let mut current = date(1, Season::Spring, 1);
    for _ in 0..112 {
        for cadence in Cadence::ALL {
            let event = generator.generate(cadence, current, session);
            if event.affected_item_id == NO_AFFECTED_ITEM {
                assert_eq!(event.original_price, 0, "{event:?}");
            } else {
                let info = generator
                    .catalog()
                    .lookup(ItemId::new(event.affected_item_id))
                    .unwrap();
                assert_eq!(info.price, event.original_price, "{event:?}");
                assert!(event.headline.contains(&info.name), "{event:?}");
            }
        }
        current = current.next_day().unwrap();
    }
}

#[test]
fn crop_binds_before_fish_whenever_that_template_is_selected() {
    // "%2 costs gold near %6" is one of the weekly templates; whenever it
    // comes up, the affected item must be a crop, never the fish.
    let generator = build_generator();
    let crops = [24, 400];
    let mut seen = false;
    for session in 0..64 {
        let event = generator.generate(
            Cadence::Weekly,
            date(1, Season::Spring, 1),
            SessionId::new(session),
        );
        if event.headline.contains("costs gold near") {
            seen = true;
            assert!(
                crops.contains(&event.affected_item_id),
                "fish bound instead of crop: {event:?}"
            );
            assert!(event.headline.contains("Sunfish"), "{event:?}");
        }
    }
    assert!(seen, "template never selected across 64 sessions");
}

#[test]
fn cross_cadence_seeding_keeps_monthly_stable_within_a_season() {
    let generator = build_generator();
    let session = SessionId::new(5);
    let baseline = generator.generate(Cadence::Monthly, date(2, Season::Fall, 1), session);
    for day in [8, 15, 22, 28] {
        let other = generator.generate(Cadence::Monthly, date(2, Season::Fall, day), session);
        assert_eq!(baseline, other, "monthly event drifted within the season");
    }
}
