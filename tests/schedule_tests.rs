use chrono::{NaiveTime, Weekday};
use timetable_tool::{Locale, Schedule, ScheduleItem};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn item(day: Weekday, time: NaiveTime, subject: &str, classroom: &str) -> ScheduleItem {
    ScheduleItem::new(day, time, subject, classroom)
}

#[test]
fn for_day_filters_and_sorts_ascending_by_time() {
    let mut schedule = Schedule::new();
    schedule.add(item(Weekday::Mon, t(8, 0), "Math", "101"));
    schedule.add(item(Weekday::Wed, t(10, 0), "History", "201"));
    schedule.add(item(Weekday::Mon, t(7, 0), "Art", "102"));

    let monday = schedule.for_day(Weekday::Mon);
    assert_eq!(
        monday,
        vec![
            item(Weekday::Mon, t(7, 0), "Art", "102"),
            item(Weekday::Mon, t(8, 0), "Math", "101"),
        ]
    );

    // The query must not disturb the underlying insertion order.
    let subjects: Vec<&str> = schedule.items().iter().map(|i| i.subject.as_str()).collect();
    assert_eq!(subjects, ["Math", "History", "Art"]);
}

#[test]
fn for_day_keeps_insertion_order_on_equal_times() {
    let mut schedule = Schedule::new();
    schedule.add(item(Weekday::Tue, t(9, 0), "Biology", "1"));
    schedule.add(item(Weekday::Tue, t(9, 0), "Chemistry", "2"));
    schedule.add(item(Weekday::Tue, t(8, 0), "Physics", "3"));

    let tuesday = schedule.for_day(Weekday::Tue);
    let subjects: Vec<&str> = tuesday.iter().map(|i| i.subject.as_str()).collect();
    assert_eq!(subjects, ["Physics", "Biology", "Chemistry"]);
}

#[test]
fn for_day_with_no_matches_is_empty() {
    let mut schedule = Schedule::new();
    schedule.add(item(Weekday::Mon, t(8, 0), "Math", "101"));
    assert!(schedule.for_day(Weekday::Sun).is_empty());
}

#[test]
fn remove_of_absent_item_leaves_collection_unchanged() {
    let mut schedule = Schedule::new();
    schedule.add(item(Weekday::Mon, t(8, 0), "Math", "101"));

    schedule.remove(&item(Weekday::Mon, t(8, 0), "Math", "999"));
    assert_eq!(schedule.items().len(), 1);
    assert_eq!(schedule.items()[0].classroom, "101");
}

#[test]
fn render_formats_one_line_per_item() {
    let items = vec![
        item(Weekday::Mon, t(8, 0), "Math", "101"),
        item(Weekday::Fri, t(14, 30), "Physics", "301"),
    ];

    assert_eq!(
        Schedule::render(&items, &Locale::EN),
        "Monday: 08:00:00 - Math (101)\nFriday: 14:30:00 - Physics (301)"
    );
}

#[test]
fn render_empty_list_yields_locale_notice() {
    assert_eq!(Schedule::render(&[], &Locale::EN), "Schedule is empty.");
    assert_eq!(Schedule::render(&[], &Locale::RU), "Расписание пусто.");
}

#[test]
fn render_uses_the_given_day_name_table() {
    let items = vec![item(Weekday::Mon, t(8, 0), "Math", "101")];
    assert_eq!(
        Schedule::render(&items, &Locale::RU),
        "Понедельник: 08:00:00 - Math (101)"
    );
}
