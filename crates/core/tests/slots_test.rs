use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::{
    generate_time_slots,
    models::time_slot::TimeSlot,
    slots::{AFTERNOON, MORNING, PRESENTATION_DATES, SessionWindow, SlotPolicy},
    validate_slot_timing,
};

fn times_on(slots: &[TimeSlot], date: &str) -> Vec<String> {
    slots
        .iter()
        .filter(|slot| slot.date == date)
        .map(|slot| format!("{}-{}", slot.start_time, slot.end_time))
        .collect()
}

#[test]
fn test_generates_fourteen_slots_per_date() {
    let slots = generate_time_slots();

    assert_eq!(slots.len(), PRESENTATION_DATES.len() * 14);
    for date in PRESENTATION_DATES {
        assert_eq!(slots.iter().filter(|slot| slot.date == date).count(), 14);
    }
}

#[test]
fn test_one_day_of_slots() {
    let slots = generate_time_slots();

    assert_eq!(
        times_on(&slots, "2025-01-25"),
        vec![
            "10:10-10:30",
            "10:35-10:55",
            "11:00-11:20",
            "11:25-11:45",
            "11:50-12:10",
            "12:15-12:35",
            "12:40-13:00",
            "14:10-14:30",
            "14:35-14:55",
            "15:00-15:20",
            "15:25-15:45",
            "15:50-16:10",
            "16:15-16:35",
            "16:40-17:00",
        ]
    );
}

#[test]
fn test_dates_follow_eligible_order() {
    let slots = generate_time_slots();

    let mut dates: Vec<&str> = slots.iter().map(|slot| slot.date.as_str()).collect();
    dates.dedup();

    assert_eq!(dates, PRESENTATION_DATES.to_vec());
}

#[test]
fn test_no_slot_runs_past_its_window() {
    for slot in generate_time_slots() {
        assert!(
            slot.end_time.as_str() <= "13:00" || slot.start_time.as_str() >= "14:10",
            "morning slot crosses 13:00: {:?}",
            slot
        );
        assert!(slot.end_time.as_str() <= "17:00", "slot crosses 17:00: {:?}", slot);
    }
}

#[test]
fn test_generated_slots_start_available() {
    assert!(generate_time_slots().iter().all(|slot| slot.is_available));
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(generate_time_slots(), generate_time_slots());
}

#[test]
fn test_every_generated_slot_validates() {
    for slot in generate_time_slots() {
        assert!(validate_slot_timing(&slot), "rejected generated slot {:?}", slot);
    }
}

#[test]
fn test_custom_policy_drops_partial_trailing_slot() {
    const LATE: SessionWindow = SessionWindow {
        name: "late",
        opens: 18 * 60,
        first_slot: 18 * 60,
        ends: 19 * 60 + 10,
    };
    let policy = SlotPolicy {
        dates: &["2025-03-01"],
        windows: &[LATE],
        slot_duration: 30,
        break_duration: 10,
    };

    let slots = policy.generate();

    assert_eq!(times_on(&slots, "2025-03-01"), vec!["18:00-18:30", "18:40-19:10"]);
}

#[test]
fn test_windows_are_ordered_morning_first() {
    assert_eq!(SlotPolicy::PRESENTATIONS.windows, &[MORNING, AFTERNOON]);
}

#[rstest]
#[case::first_morning("2025-01-25", "10:10", "10:30", true)]
#[case::last_morning("2025-01-25", "12:40", "13:00", true)]
#[case::off_cadence_but_inside("2025-02-02", "12:35", "12:55", true)]
#[case::last_afternoon("2025-02-09", "16:40", "17:00", true)]
#[case::crosses_session_end("2025-01-25", "12:55", "13:20", false)]
#[case::crosses_afternoon_end("2025-01-25", "16:50", "17:10", false)]
#[case::before_first_slot("2025-01-25", "10:00", "10:20", false)]
#[case::lunch_break("2025-01-25", "13:30", "13:50", false)]
#[case::afternoon_before_first_slot("2025-01-25", "14:00", "14:20", false)]
#[case::ineligible_date("2025-01-27", "10:10", "10:30", false)]
#[case::too_long("2025-01-25", "10:10", "10:35", false)]
#[case::too_short("2025-01-25", "10:10", "10:25", false)]
#[case::reversed("2025-01-25", "10:30", "10:10", false)]
#[case::garbage_time("2025-01-25", "ten", "10:30", false)]
#[case::garbage_date("25/01/2025", "10:10", "10:30", false)]
#[case::unpadded_minute("2025-01-25", "11:0", "11:20", false)]
#[case::trailing_space("2025-01-25", "11:00", "11:20 ", false)]
fn test_validate_slot_timing(
    #[case] date: &str,
    #[case] start: &str,
    #[case] end: &str,
    #[case] expected: bool,
) {
    let slot = TimeSlot::new(date, start, end);
    assert_eq!(validate_slot_timing(&slot), expected);
}

#[test]
fn test_slot_for_key_rebuilds_generated_slot() {
    let slots = generate_time_slots();
    let original = &slots[8];

    let rebuilt = SlotPolicy::PRESENTATIONS
        .slot_for_key(&original.key())
        .expect("Expected key to parse");

    assert_eq!(&rebuilt, original);
}

#[rstest]
#[case("2025-01-25 10:10")]
#[case("2025-01-25 - noon")]
#[case("")]
#[case("2025-01-25 - 11:0")]
fn test_slot_for_key_rejects_malformed_keys(#[case] key: &str) {
    assert_eq!(SlotPolicy::PRESENTATIONS.slot_for_key(key), None);
}
