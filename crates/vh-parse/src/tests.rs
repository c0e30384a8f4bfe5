//! Unit tests for vh-parse.

use vh_core::{Day, SpecialDay, TimeOfDay};

use crate::{extract_time_blocks, parse_day_title};

fn t(text: &str) -> TimeOfDay {
    TimeOfDay::parse(text).unwrap()
}

// ── Day titles ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod title {
    use super::*;

    #[test]
    fn single_days_and_abbreviations() {
        let parsed = parse_day_title("Mon, Wednesday, FRI");
        assert_eq!(parsed.days, vec![Day::Mon, Day::Wed, Day::Fri]);
        assert!(parsed.special.is_empty());
        assert!(parsed.raw_titles.is_empty());
    }

    #[test]
    fn forward_range() {
        let parsed = parse_day_title("Wed-Fri");
        assert_eq!(parsed.days, vec![Day::Wed, Day::Thu, Day::Fri]);
    }

    #[test]
    fn range_wraps_across_week_boundary() {
        let parsed = parse_day_title("Sat-Mon");
        assert_eq!(parsed.days, vec![Day::Sat, Day::Sun, Day::Mon]);
    }

    #[test]
    fn range_with_word_separator() {
        let parsed = parse_day_title("Tue to Thu");
        assert_eq!(parsed.days, vec![Day::Tue, Day::Wed, Day::Thu]);
    }

    #[test]
    fn range_with_en_dash() {
        let parsed = parse_day_title("Mon–Wed");
        assert_eq!(parsed.days, vec![Day::Mon, Day::Tue, Day::Wed]);
    }

    #[test]
    fn range_with_full_names_and_prefixes() {
        // "satur" is not an alias; its 3-letter prefix resolves it.
        let parsed = parse_day_title("Saturday-Monday");
        assert_eq!(parsed.days, vec![Day::Sat, Day::Sun, Day::Mon]);
    }

    #[test]
    fn expanded_size_equals_cyclic_distance_plus_one() {
        assert_eq!(parse_day_title("Sat-Mon").days.len(), 3);
        assert_eq!(parse_day_title("Mon-Sun").days.len(), 7);
        assert_eq!(parse_day_title("Fri-Fri").days.len(), 1);
    }

    #[test]
    fn mixed_chunks() {
        let parsed = parse_day_title("Mon, Wed-Fri");
        assert_eq!(
            parsed.days,
            vec![Day::Mon, Day::Wed, Day::Thu, Day::Fri]
        );
    }

    #[test]
    fn special_phrases() {
        let parsed = parse_day_title("Public Holiday");
        assert!(parsed.days.is_empty());
        assert_eq!(parsed.special, vec![SpecialDay::PublicHoliday]);

        let parsed = parse_day_title("day before public holiday, Day After Public Holiday");
        assert_eq!(
            parsed.special,
            vec![
                SpecialDay::DayBeforePublicHoliday,
                SpecialDay::DayAfterPublicHoliday
            ]
        );
    }

    #[test]
    fn unrecognized_chunk_becomes_opaque_title() {
        let parsed = parse_day_title("Mon, Lunch only");
        assert_eq!(parsed.days, vec![Day::Mon]);
        assert_eq!(
            parsed.raw_titles.iter().collect::<Vec<_>>(),
            vec!["Lunch only"]
        );
    }

    #[test]
    fn opaque_titles_deduplicated_and_sorted_within_title() {
        let parsed = parse_day_title("zzz, aaa, zzz");
        assert_eq!(
            parsed.raw_titles.iter().collect::<Vec<_>>(),
            vec!["aaa", "zzz"]
        );
    }

    #[test]
    fn range_with_unresolvable_ends_is_opaque() {
        let parsed = parse_day_title("foo-barbaz");
        assert!(parsed.days.is_empty());
        assert_eq!(
            parsed.raw_titles.iter().collect::<Vec<_>>(),
            vec!["foo-barbaz"]
        );
    }

    #[test]
    fn duplicate_days_preserved_in_order() {
        let parsed = parse_day_title("Mon, Mon");
        assert_eq!(parsed.days, vec![Day::Mon, Day::Mon]);
    }

    #[test]
    fn empty_title() {
        assert!(parse_day_title("").is_empty());
        assert!(parse_day_title("  ,  ").is_empty());
    }
}

// ── Detail scanning ───────────────────────────────────────────────────────────

#[cfg(test)]
mod detail {
    use super::*;

    #[test]
    fn single_range_no_markers() {
        let blocks = extract_time_blocks("11:30-14:00");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].open, t("11:30"));
        assert_eq!(blocks[0].close, t("14:00"));
        assert!(!blocks[0].crosses_midnight);
        assert!(blocks[0].last_order.is_none());
    }

    #[test]
    fn dash_variants_and_tilde() {
        for detail in ["11:30〜14:00", "11:30–14:00", "11:30～14:00", "11:30~14:00", "11:30 - 14:00"] {
            let blocks = extract_time_blocks(detail);
            assert_eq!(blocks.len(), 1, "failed for {detail:?}");
            assert_eq!(blocks[0].open, t("11:30"));
        }
    }

    #[test]
    fn word_separator() {
        let blocks = extract_time_blocks("11:30 to 14:00");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].close, t("14:00"));
    }

    #[test]
    fn close_at_hour_24_crosses_midnight() {
        let blocks = extract_time_blocks("17:00-24:00");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].close, TimeOfDay::MIDNIGHT);
        assert!(blocks[0].crosses_midnight);
    }

    #[test]
    fn hour_above_24_rejects_the_range() {
        assert!(extract_time_blocks("17:00-26:00").is_empty());
        assert!(extract_time_blocks("25:00-26:00").is_empty());
    }

    #[test]
    fn generic_last_order() {
        let blocks = extract_time_blocks("11:30-14:00 (LO 13:30)");
        let lo = blocks[0].last_order.unwrap();
        assert_eq!(lo.generic, Some(t("13:30")));
        assert!(lo.food.is_none());
        assert!(lo.drinks.is_none());
    }

    #[test]
    fn last_order_notation_variants() {
        for detail in [
            "11:30-14:00 (L.O. 13:30)",
            "11:30-14:00 (L O. 13:30)",
            "11:30-14:00 (l.o. 13:30)",
            "11:30-14:00 LO 13:30",
        ] {
            let blocks = extract_time_blocks(detail);
            let lo = blocks[0].last_order.expect(detail);
            assert_eq!(lo.generic, Some(t("13:30")), "failed for {detail:?}");
        }
    }

    #[test]
    fn markers_attach_to_nearest_preceding_range() {
        let blocks =
            extract_time_blocks("11:30-14:00 (LO 13:30) 17:30-22:00 (LO Food 21:00 / LO Drink 21:30)");
        assert_eq!(blocks.len(), 2);

        let first = blocks[0].last_order.unwrap();
        assert_eq!(first.generic, Some(t("13:30")));
        assert!(first.food.is_none());

        let second = blocks[1].last_order.unwrap();
        assert_eq!(second.food, Some(t("21:00")));
        assert_eq!(second.drinks, Some(t("21:30")));
        assert!(second.generic.is_none());
    }

    #[test]
    fn qualifier_plurals() {
        let blocks = extract_time_blocks("17:00-22:00 LO Foods 21:00 LO Drinks 21:30");
        let lo = blocks[0].last_order.unwrap();
        assert_eq!(lo.food, Some(t("21:00")));
        assert_eq!(lo.drinks, Some(t("21:30")));
    }

    #[test]
    fn same_kind_collision_last_write_wins() {
        let blocks = extract_time_blocks("17:00-22:00 (LO 20:30, LO 21:00)");
        let lo = blocks[0].last_order.unwrap();
        assert_eq!(lo.generic, Some(t("21:00")));
    }

    #[test]
    fn marker_before_first_range_is_dropped() {
        let blocks = extract_time_blocks("LO 13:30 / 11:30-14:00");
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].last_order.is_none());
    }

    #[test]
    fn marker_without_time_is_no_marker() {
        let blocks = extract_time_blocks("11:30-14:00 (LO shortly before close)");
        assert!(blocks[0].last_order.is_none());
    }

    #[test]
    fn multiple_ranges_in_text_order() {
        let blocks = extract_time_blocks("17:30-22:00, 11:30-14:00");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].open, t("17:30"));
        assert_eq!(blocks[1].open, t("11:30"));
    }

    #[test]
    fn no_ranges_yields_empty_list() {
        assert!(extract_time_blocks("").is_empty());
        assert!(extract_time_blocks("Closed").is_empty());
        assert!(extract_time_blocks("Open until late").is_empty());
    }

    #[test]
    fn leading_extra_digit_shifts_the_match() {
        // "117:00" cannot be a time; the scanner re-anchors at "17:00".
        let blocks = extract_time_blocks("117:00-20:00");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].open, t("17:00"));
    }
}
