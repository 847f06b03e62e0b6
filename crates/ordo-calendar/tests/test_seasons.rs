//! Season boundaries and colors across many years.

use ordo_calendar::anchors::{baptism_of_the_lord, first_sunday_of_advent};
use ordo_calendar::season::classify_with_anchors;
use ordo_calendar::{classify_season, LiturgicalColor, Season, SeasonAnchors};
use ordo_time::{easter_sunday, Date, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// How many of the raw season ranges contain `d`.
fn ranges_containing(d: Date, a: &SeasonAnchors) -> usize {
    let within = |from: Date, to: Date| from <= d && d <= to;
    [
        within(a.previous_christmas, a.baptism_of_the_lord) || within(a.christmas, a.next_baptism_of_the_lord),
        within(a.first_advent_sunday, a.christmas_eve),
        within(a.ash_wednesday, a.holy_saturday),
        within(a.easter, a.pentecost),
    ]
    .into_iter()
    .filter(|&hit| hit)
    .count()
}

#[test]
fn season_sequence_2025() {
    let a = SeasonAnchors::for_year(2025);
    let mut seasons = Vec::new();
    let mut d = date(2025, 1, 1);
    while d <= date(2025, 12, 31) {
        let s = classify_with_anchors(d, &a).season;
        if seasons.last() != Some(&s) {
            seasons.push(s);
        }
        d += 1;
    }
    assert_eq!(
        seasons,
        [
            Season::Christmas,
            Season::OrdinaryTime,
            Season::Lent,
            Season::Easter,
            Season::OrdinaryTime,
            Season::Advent,
            Season::Christmas,
        ]
    );
}

#[test]
fn advent_sundays_of_recent_years() {
    let expected = [
        (2019, date(2019, 12, 1)),
        (2020, date(2020, 11, 29)),
        (2021, date(2021, 11, 28)),
        (2022, date(2022, 11, 27)),
        (2023, date(2023, 12, 3)),
        (2024, date(2024, 12, 1)),
        (2025, date(2025, 11, 30)),
        (2026, date(2026, 11, 29)),
    ];
    for (year, advent) in expected {
        assert_eq!(first_sunday_of_advent(year), advent, "Advent {year}");
    }
}

#[test]
fn gaudete_and_laetare_2024() {
    let easter = easter_sunday(2024);
    assert_eq!(easter, date(2024, 3, 31));
    let laetare = classify_season(date(2024, 3, 10), easter);
    assert_eq!((laetare.season, laetare.color), (Season::Lent, LiturgicalColor::Rose));
    let gaudete = classify_season(date(2024, 12, 15), easter);
    assert_eq!((gaudete.season, gaudete.color), (Season::Advent, LiturgicalColor::Rose));
}

#[test]
fn ordinary_time_weekday_is_green_and_unnamed() {
    let c = classify_season(date(2024, 7, 10), easter_sunday(2024));
    assert_eq!(c.season, Season::OrdinaryTime);
    assert_eq!(c.color, LiturgicalColor::Green);
    assert_eq!(c.display_name, None);
}

proptest! {
    #[test]
    fn season_ranges_never_overlap(serial in 580_000i32..=3_651_000) {
        let d = Date::from_serial(serial).unwrap();
        let a = SeasonAnchors::for_year(d.year());
        prop_assert!(ranges_containing(d, &a) <= 1, "{} is in several seasons", d);
    }

    #[test]
    fn ordinary_time_exactly_when_no_range_matches(serial in 580_000i32..=3_651_000) {
        let d = Date::from_serial(serial).unwrap();
        let a = SeasonAnchors::for_year(d.year());
        let season = classify_with_anchors(d, &a).season;
        prop_assert_eq!(season == Season::OrdinaryTime, ranges_containing(d, &a) == 0);
    }

    #[test]
    fn gaudete_is_always_rose(year in 1583i32..=9998) {
        let a = SeasonAnchors::for_year(year);
        prop_assert_eq!(a.gaudete_sunday.weekday(), Weekday::Sunday);
        let c = classify_with_anchors(a.gaudete_sunday, &a);
        prop_assert_eq!(c.season, Season::Advent);
        prop_assert_eq!(c.color, LiturgicalColor::Rose);
        prop_assert_eq!(classify_with_anchors(a.gaudete_sunday + 7, &a).color, LiturgicalColor::Violet);
    }

    #[test]
    fn laetare_is_always_rose(year in 1583i32..=9999) {
        let a = SeasonAnchors::for_year(year);
        let c = classify_with_anchors(a.laetare_sunday, &a);
        prop_assert_eq!(c.season, Season::Lent);
        prop_assert_eq!(c.color, LiturgicalColor::Rose);
    }

    #[test]
    fn lent_and_pentecost_offsets(year in 1583i32..=9999) {
        let a = SeasonAnchors::for_year(year);
        prop_assert_eq!(a.ash_wednesday, easter_sunday(year) - 46);
        prop_assert_eq!(a.ash_wednesday.weekday(), Weekday::Wednesday);
        prop_assert_eq!(a.pentecost, easter_sunday(year) + 49);
        prop_assert_eq!(a.pentecost.weekday(), Weekday::Sunday);
    }

    #[test]
    fn advent_starts_between_nov_27_and_dec_3(year in 1583i32..=9999) {
        let advent = first_sunday_of_advent(year);
        prop_assert_eq!(advent.weekday(), Weekday::Sunday);
        prop_assert!(advent >= date(year, 11, 27) && advent <= date(year, 12, 3));
        prop_assert!((22..=28).contains(&(date(year, 12, 25) - advent)));
    }

    #[test]
    fn baptism_between_jan_7_and_jan_13(year in 1583i32..=9999) {
        let baptism = baptism_of_the_lord(year);
        prop_assert_eq!(baptism.weekday(), Weekday::Sunday);
        prop_assert!(baptism >= date(year, 1, 7) && baptism <= date(year, 1, 13));
    }
}
